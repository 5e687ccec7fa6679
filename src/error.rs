use std::io;
use std::path::PathBuf;

use thiserror::Error;
use vault_client::VaultError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid secret path {path:?}: {reason}")]
    InvalidPath { path: String, reason: &'static str },

    #[error("Prompt cancelled")]
    PromptCancelled,

    #[error("Prompt failed: {0}")]
    Prompt(#[source] io::Error),

    #[error(transparent)]
    Vault(#[from] VaultError),

    #[error("No secret data found at {path}")]
    MissingSecretData { path: String },

    #[error("Program aborted: {} was not overwritten", path.display())]
    OverwriteDeclined { path: PathBuf },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to set up logging: {0}")]
    Logging(String),
}

impl Error {
    /// Process exit code for this failure. `2` is left to clap for usage errors.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::PromptCancelled | Self::Prompt(_) => 3,
            Self::Vault(err) if err.is_auth_failure() => 4,
            Self::Vault(_) => 5,
            Self::OverwriteDeclined { .. } => 6,
            Self::Write { .. } => 7,
            Self::MissingSecretData { .. } => 8,
            Self::InvalidPath { .. } => 9,
            Self::Logging(_) => 10,
        }
    }
}
