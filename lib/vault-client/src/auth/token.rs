use super::{AuthMethod, TokenInfo};
use crate::VaultError;
use async_trait::async_trait;
use reqwest::Url;

/// Static token authentication
pub struct StaticTokenAuth {
    token: String,
}

impl StaticTokenAuth {
    pub fn new(token: String) -> Self {
        Self { token }
    }
}

#[async_trait]
impl AuthMethod for StaticTokenAuth {
    async fn authenticate(
        &self,
        _http: &reqwest::Client,
        _base_url: &Url,
    ) -> Result<TokenInfo, VaultError> {
        Ok(TokenInfo::static_token(self.token.clone()))
    }

    fn name(&self) -> &'static str {
        "token"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_token_auth() {
        let auth = StaticTokenAuth::new("my-token".to_string());
        let base_url = Url::parse("http://vault:8200").unwrap();
        let token_info = auth
            .authenticate(&reqwest::Client::new(), &base_url)
            .await
            .unwrap();
        assert_eq!(token_info.token, "my-token");
        assert!(!token_info.is_session());
    }
}
