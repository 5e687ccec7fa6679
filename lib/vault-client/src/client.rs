use crate::auth::{AuthMethod, TokenInfo};
use crate::error::VaultError;
use crate::models::KvData;
use reqwest::Url;
use serde_json::Value;

const TOKEN_HEADER: &str = "X-Vault-Token";

pub struct VaultClientBuilder {
    base_url: String,
    auth_method: Box<dyn AuthMethod>,
    application_name: Option<String>,
}

impl VaultClientBuilder {
    pub fn new(base_url: impl Into<String>, auth_method: impl AuthMethod + 'static) -> Self {
        Self {
            base_url: base_url.into(),
            auth_method: Box::new(auth_method),
            application_name: None,
        }
    }

    pub fn application_name(mut self, name: impl Into<String>) -> Self {
        self.application_name = Some(name.into());
        self
    }

    fn parse_base_url(&self) -> Result<Url, VaultError> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| VaultError::InvalidAddress(format!("{}: {}", self.base_url, e)))?;
        if url.cannot_be_a_base() {
            return Err(VaultError::InvalidAddress(self.base_url.clone()));
        }
        Ok(url)
    }

    /// Authenticate and return a ready client.
    ///
    /// With [`UserpassAuth`](crate::UserpassAuth) this performs the login
    /// call, so the returned client holds a session token the caller should
    /// revoke when done.
    pub async fn build(self) -> Result<VaultClient, VaultError> {
        let base_url = self.parse_base_url()?;

        let mut http = reqwest::Client::builder();
        if let Some(ref app_name) = self.application_name {
            http = http.user_agent(app_name.clone());
        }
        let http = http
            .build()
            .map_err(|e| VaultError::RequestError(e.to_string()))?;

        tracing::debug!(
            method = self.auth_method.name(),
            base_url = %base_url,
            "Authenticating to Vault"
        );
        let token = self.auth_method.authenticate(&http, &base_url).await?;
        tracing::debug!(
            kind = ?token.kind,
            lease_secs = token.lease_duration.as_secs(),
            "Vault token ready"
        );

        Ok(VaultClient {
            base_url,
            http,
            token,
        })
    }
}

pub struct VaultClient {
    base_url: Url,
    http: reqwest::Client,
    token: TokenInfo,
}

impl VaultClient {
    pub fn builder(
        base_url: impl Into<String>,
        auth_method: impl AuthMethod + 'static,
    ) -> VaultClientBuilder {
        VaultClientBuilder::new(base_url, auth_method)
    }

    pub fn token_info(&self) -> &TokenInfo {
        &self.token
    }

    /// Read a KV v2 data path, e.g. `secret/data/app/config`.
    ///
    /// `Ok(None)` means Vault answered but the body had no `data.data` object.
    pub async fn kv_read(&self, path: &str) -> Result<Option<KvData>, VaultError> {
        let path = path.trim_matches('/');
        let segments = std::iter::once("v1").chain(path.split('/').filter(|s| !s.is_empty()));
        let url = endpoint(&self.base_url, segments)?;

        let response = self
            .http
            .get(url)
            .header(TOKEN_HEADER, &self.token.token)
            .send()
            .await
            .map_err(|e| VaultError::RequestError(e.to_string()))?;

        if response.status().as_u16() == 404 {
            return Err(VaultError::SecretNotFound {
                path: path.to_string(),
            });
        }

        let response = check_status(response).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| VaultError::RequestError(e.to_string()))?;
        let body: Value = serde_json::from_slice(&bytes)?;

        let kv = KvData::from_response(&body);
        match kv.as_ref().and_then(|kv| kv.metadata.as_ref()) {
            Some(metadata) => tracing::debug!(
                path,
                version = metadata.version,
                created = %metadata.created_time,
                "Read secret version"
            ),
            None => tracing::debug!(path, found = kv.is_some(), "Read secret"),
        }

        Ok(kv)
    }

    /// Revoke the client's own token. Consumes the client since the token is
    /// useless afterwards.
    pub async fn revoke_self(self) -> Result<(), VaultError> {
        let url = endpoint(&self.base_url, ["v1", "auth", "token", "revoke-self"])?;

        let response = self
            .http
            .post(url)
            .header(TOKEN_HEADER, &self.token.token)
            .send()
            .await
            .map_err(|e| VaultError::RequestError(e.to_string()))?;

        check_status(response).await?;
        tracing::debug!("Vault token revoked");
        Ok(())
    }
}

/// Append percent-encoded path segments to the Vault address.
pub(crate) fn endpoint<'a>(
    base_url: &Url,
    segments: impl IntoIterator<Item = &'a str>,
) -> Result<Url, VaultError> {
    let mut url = base_url.clone();
    url.path_segments_mut()
        .map_err(|_| VaultError::InvalidAddress(base_url.to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Turn a non-2xx response into [`VaultError::ClientError`], preferring the
/// messages from Vault's `errors` array over the raw body.
pub(crate) async fn check_status(
    response: reqwest::Response,
) -> Result<reqwest::Response, VaultError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let response_data = serde_json::from_str::<Value>(&body).ok();
    let message = response_data
        .as_ref()
        .and_then(|data| data.get("errors"))
        .and_then(Value::as_array)
        .map(|errors| {
            errors
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join("; ")
        })
        .filter(|message| !message.is_empty())
        .unwrap_or(body);

    Err(VaultError::ClientError {
        status: status.as_u16(),
        message,
        response_data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{StaticTokenAuth, UserpassAuth};

    #[test]
    fn test_builder_chain() {
        let builder = VaultClient::builder(
            "http://vault:8200",
            UserpassAuth::new("alice".to_string(), "pw".to_string()),
        )
        .application_name("vault-dotenv/0.1.0");

        assert_eq!(builder.base_url, "http://vault:8200");
        assert_eq!(builder.auth_method.name(), "userpass");
        assert_eq!(
            builder.application_name,
            Some("vault-dotenv/0.1.0".to_string())
        );
    }

    #[test]
    fn test_invalid_address_rejected() {
        let builder = VaultClient::builder("vault:8200 nope", StaticTokenAuth::new("t".into()));
        assert!(matches!(
            builder.parse_base_url(),
            Err(VaultError::InvalidAddress(_))
        ));

        let builder = VaultClient::builder("mailto:ops@example.com", StaticTokenAuth::new("t".into()));
        assert!(matches!(
            builder.parse_base_url(),
            Err(VaultError::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let base = Url::parse("https://vault.local/proxy/").unwrap();
        let url = endpoint(&base, ["v1", "secret", "data", "app"]).unwrap();
        assert_eq!(url.as_str(), "https://vault.local/proxy/v1/secret/data/app");
    }

    #[test]
    fn test_endpoint_encodes_segments() {
        let base = Url::parse("http://127.0.0.1:8200").unwrap();
        let url = endpoint(&base, ["v1", "secret", "data", "a?b#c%d"]).unwrap();
        assert_eq!(url.path(), "/v1/secret/data/a%3Fb%23c%25d");
        assert!(url.query().is_none());
    }
}
