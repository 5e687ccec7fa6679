mod token;
mod token_info;
mod userpass;

pub use token::StaticTokenAuth;
pub use token_info::{TokenInfo, TokenKind};
pub use userpass::UserpassAuth;

use crate::VaultError;
use async_trait::async_trait;
use reqwest::Url;

/// Trait for authentication methods
#[async_trait]
pub trait AuthMethod: Send + Sync {
    /// Obtain the token used for all further requests
    async fn authenticate(
        &self,
        http: &reqwest::Client,
        base_url: &Url,
    ) -> Result<TokenInfo, VaultError>;

    /// Short name used in logs
    fn name(&self) -> &'static str;
}
