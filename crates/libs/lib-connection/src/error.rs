use thiserror::Error;

/// Everything that can go wrong while bridging a wallet to the backend.
///
/// The taxonomy is closed on purpose: the UI matches on these variants instead
/// of string-matching provider error messages.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConnectorError {
    /// Provider library absent or adapter construction threw. Fatal for this
    /// page load; the control stays disabled until the user reloads.
    #[error("Wallet adapter initialization failed: {0}")]
    Initialization(String),

    /// A connect/disconnect request was rejected by the provider (covers user
    /// refusal as well as provider-internal errors). Recoverable.
    #[error("Wallet request failed: {0}")]
    Provider(String),

    /// The backend explicitly declined the address. The wallet stays
    /// connected; only the relay failed.
    #[error("Server rejected the address: {0}")]
    RelayRejected(String),

    /// The callback request could not complete at the transport level.
    #[error("Could not reach the server: {0}")]
    RelayUnreachable(String),
}

impl ConnectorError {
    /// Only initialization failures leave the control permanently disabled.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ConnectorError::Initialization(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_initialization_is_fatal() {
        assert!(ConnectorError::Initialization("no provider".into()).is_fatal());
        assert!(!ConnectorError::Provider("user rejected".into()).is_fatal());
        assert!(!ConnectorError::RelayRejected("invalid address".into()).is_fatal());
        assert!(!ConnectorError::RelayUnreachable("timeout".into()).is_fatal());
    }
}
