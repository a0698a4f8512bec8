// Daemon Method Catalog

use std::fmt;

/// Extra parameter an operation needs on top of the token identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredParam {
    None,
    Address,
    EntryHash,
    NfTokenId,
}

impl RequiredParam {
    /// Wire name of the parameter, if any
    pub fn wire_name(self) -> Option<&'static str> {
        match self {
            RequiredParam::None => None,
            RequiredParam::Address => Some("fa-address"),
            RequiredParam::EntryHash => Some("entryhash"),
            RequiredParam::NfTokenId => Some("nf-token-id"),
        }
    }
}

/// JSON-RPC methods exposed by the FAT daemon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    GetBalance,
    GetIssuance,
    GetIssuanceEntry,
    GetStats,
    GetTransaction,
    GetTransactionEntry,
    GetNfToken,
    SendTransaction,
    GetDaemonTokens,
    GetDaemonProperties,
}

impl Method {
    pub const ALL: [Method; 10] = [
        Method::GetBalance,
        Method::GetIssuance,
        Method::GetIssuanceEntry,
        Method::GetStats,
        Method::GetTransaction,
        Method::GetTransactionEntry,
        Method::GetNfToken,
        Method::SendTransaction,
        Method::GetDaemonTokens,
        Method::GetDaemonProperties,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Method::GetBalance => "get-balance",
            Method::GetIssuance => "get-issuance",
            Method::GetIssuanceEntry => "get-issuance-entry",
            Method::GetStats => "get-stats",
            Method::GetTransaction => "get-transaction",
            Method::GetTransactionEntry => "get-transaction-entry",
            Method::GetNfToken => "get-nf-token",
            Method::SendTransaction => "send-transaction",
            Method::GetDaemonTokens => "get-daemon-tokens",
            Method::GetDaemonProperties => "get-daemon-properties",
        }
    }

    pub fn required_param(self) -> RequiredParam {
        match self {
            Method::GetBalance => RequiredParam::Address,
            Method::GetTransaction | Method::GetTransactionEntry => RequiredParam::EntryHash,
            Method::GetNfToken => RequiredParam::NfTokenId,
            _ => RequiredParam::None,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
