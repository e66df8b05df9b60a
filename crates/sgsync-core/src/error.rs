use thiserror::Error;

/// Result type alias for reconciliation operations
pub type Result<T> = std::result::Result<T, SyncError>;

/// Errors that can occur while reconciling a security group
#[derive(Error, Debug)]
pub enum SyncError {
    /// The firewall API rejected or failed a call
    #[error("firewall API error during {operation}: {message}")]
    Api {
        /// The operation that failed (e.g. "authorize-egress")
        operation: String,
        /// Error message from the API
        message: String,
    },

    /// A group identifier resolved to zero or more than one resource
    #[error("security group {id} resolved to {matches} resources, expected exactly 1")]
    GroupResolution {
        /// The identifier that was looked up
        id: String,
        /// Number of resources it resolved to
        matches: usize,
    },

    /// An address-list or DNS provider failed
    #[error("provider error: {0}")]
    Provider(String),

    /// Unrecognized transport protocol identifier
    #[error("unsupported protocol: {0}")]
    UnsupportedProtocol(String),
}

impl SyncError {
    /// Build an API error for a named mutation operation
    pub fn api(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Api {
            operation: operation.into(),
            message: message.into(),
        }
    }
}
