use thiserror::Error;

#[derive(Debug, Error)]
pub enum VaultError {
    #[error("Invalid Vault address: {0}")]
    InvalidAddress(String),

    #[error("Secret not found: {path}")]
    SecretNotFound { path: String },

    #[error("Vault client error ({status}): {message}")]
    ClientError {
        status: u16,
        message: String,
        response_data: Option<serde_json::Value>,
    },

    #[error("Vault request error: {0}")]
    RequestError(String),

    #[error("Authentication failed: {0}")]
    AuthError(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl VaultError {
    /// Whether Vault refused the credentials rather than the request itself.
    pub fn is_auth_failure(&self) -> bool {
        match self {
            Self::AuthError(_) => true,
            Self::ClientError { status, .. } => matches!(status, 401 | 403),
            _ => false,
        }
    }
}
