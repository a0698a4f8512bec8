// Parameter Resolution
//
// Turns caller-supplied identifying fields plus the operation's extra
// parameter into a validated wire params mapping.

use crate::domain::{Method, RequiredParam, TokenParams, ValidationError};
use serde_json::{Map, Value};

pub struct ParameterResolver;

impl ParameterResolver {
    /// Whether `token` names exactly one token shape
    pub fn is_valid(token: &TokenParams) -> bool {
        token.selector().is_some()
    }

    /// Validate inputs for `method` and build its params mapping.
    ///
    /// A missing extra parameter is reported with its own variant; otherwise
    /// an invalid identity yields [`ValidationError::IdentifyingParams`].
    pub fn resolve(
        method: Method,
        token: &TokenParams,
        extra: Option<&str>,
    ) -> Result<Map<String, Value>, ValidationError> {
        let required = method.required_param();
        let extra = extra.filter(|v| !v.is_empty());

        if required != RequiredParam::None && extra.is_none() {
            return Err(missing(required));
        }

        let selector = token
            .selector()
            .ok_or(ValidationError::IdentifyingParams)?;

        let mut params = selector.to_params();
        if let (Some(name), Some(value)) = (required.wire_name(), extra) {
            params.insert(name.to_string(), Value::from(value));
        }

        Ok(params)
    }
}

fn missing(required: RequiredParam) -> ValidationError {
    match required {
        RequiredParam::Address => ValidationError::Address,
        RequiredParam::EntryHash => ValidationError::EntryHash,
        RequiredParam::NfTokenId => ValidationError::NfToken,
        RequiredParam::None => ValidationError::IdentifyingParams,
    }
}
