use thiserror::Error;

/// Result type alias for provider operations
pub type ProviderResult<T> = std::result::Result<T, ProviderError>;

/// Errors from the address-list and DNS providers
#[derive(Error, Debug)]
pub enum ProviderError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Upstream returned a non-OK status
    #[error("got status: {0}")]
    Status(u16),

    /// Payload deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// DNS resolution failed
    #[error("DNS resolution failed: {0}")]
    Dns(String),
}

impl From<ProviderError> for sgsync_core::SyncError {
    fn from(err: ProviderError) -> Self {
        Self::Provider(err.to_string())
    }
}
