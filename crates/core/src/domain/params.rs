// Token Identification Domain Model

use serde_json::{Map, Value};

/// Raw identifying parameters as a caller supplies them.
///
/// Any combination of the three fields may be present; only
/// [`TokenParams::selector`] decides whether the combination names a token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenParams {
    pub chain_id: Option<String>,
    pub token_id: Option<String>,
    pub issuer_id: Option<String>,
}

impl TokenParams {
    /// Identify a token by its data chain
    pub fn chain(chain_id: impl Into<String>) -> Self {
        Self {
            chain_id: Some(chain_id.into()),
            ..Default::default()
        }
    }

    /// Identify a token by its token-id / issuer-id pair
    pub fn issued(token_id: impl Into<String>, issuer_id: impl Into<String>) -> Self {
        Self {
            chain_id: None,
            token_id: Some(token_id.into()),
            issuer_id: Some(issuer_id.into()),
        }
    }

    /// True when no identifying field carries a value
    pub fn is_unset(&self) -> bool {
        is_blank(&self.chain_id) && is_blank(&self.token_id) && is_blank(&self.issuer_id)
    }

    /// Fall back to `defaults` as a whole when nothing was supplied.
    ///
    /// Explicit fields are never mixed with default ones.
    pub fn or_defaults(self, defaults: &TokenParams) -> TokenParams {
        if self.is_unset() {
            defaults.clone()
        } else {
            self
        }
    }

    /// Resolve into a [`TokenSelector`].
    ///
    /// Returns `None` unless exactly one shape is complete: a chain id on its
    /// own, or a token id together with an issuer id.
    pub fn selector(&self) -> Option<TokenSelector> {
        let chain = non_empty(&self.chain_id);
        let token = non_empty(&self.token_id);
        let issuer = non_empty(&self.issuer_id);

        match (chain, token, issuer) {
            (Some(chain_id), None, None) => Some(TokenSelector::Chain {
                chain_id: chain_id.to_string(),
            }),
            (None, Some(token_id), Some(issuer_id)) => Some(TokenSelector::Issued {
                token_id: token_id.to_string(),
                issuer_id: issuer_id.to_string(),
            }),
            _ => None,
        }
    }
}

/// A validated token identity: exactly one of the two shapes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenSelector {
    Chain { chain_id: String },
    Issued { token_id: String, issuer_id: String },
}

impl TokenSelector {
    /// Start a params mapping holding the identifying fields in wire form
    pub fn to_params(&self) -> Map<String, Value> {
        let mut params = Map::new();
        match self {
            TokenSelector::Chain { chain_id } => {
                params.insert("chain-id".to_string(), Value::from(chain_id.as_str()));
            }
            TokenSelector::Issued {
                token_id,
                issuer_id,
            } => {
                params.insert("token-id".to_string(), Value::from(token_id.as_str()));
                params.insert("issuer-id".to_string(), Value::from(issuer_id.as_str()));
            }
        }
        params
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn is_blank(value: &Option<String>) -> bool {
    non_empty(value).is_none()
}
