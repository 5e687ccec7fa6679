use super::{AuthMethod, TokenInfo};
use crate::VaultError;
use crate::client::{check_status, endpoint};
use async_trait::async_trait;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

const DEFAULT_MOUNT: &str = "userpass";

/// Username/password authentication against a userpass auth mount
pub struct UserpassAuth {
    pub mount: String,
    pub username: String,
    password: String,
}

impl UserpassAuth {
    pub fn new(username: String, password: String) -> Self {
        Self {
            mount: DEFAULT_MOUNT.to_string(),
            username,
            password,
        }
    }

    pub fn with_mount(mut self, mount: String) -> Self {
        self.mount = mount;
        self
    }
}

impl fmt::Debug for UserpassAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserpassAuth")
            .field("mount", &self.mount)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    #[serde(default)]
    auth: Option<AuthData>,
}

#[derive(Deserialize)]
struct AuthData {
    client_token: String,
    #[serde(default)]
    lease_duration: u64,
    #[serde(default)]
    renewable: bool,
}

#[async_trait]
impl AuthMethod for UserpassAuth {
    async fn authenticate(
        &self,
        http: &reqwest::Client,
        base_url: &Url,
    ) -> Result<TokenInfo, VaultError> {
        let segments = ["v1", "auth"]
            .into_iter()
            .chain(self.mount.split('/').filter(|s| !s.is_empty()))
            .chain(["login", self.username.as_str()]);
        let url = endpoint(base_url, segments)?;

        let response = http
            .post(url)
            .json(&LoginRequest {
                password: &self.password,
            })
            .send()
            .await
            .map_err(|e| VaultError::RequestError(e.to_string()))?;

        let response = check_status(response).await.map_err(|e| match e {
            VaultError::ClientError {
                status, message, ..
            } if status < 500 => {
                VaultError::AuthError(format!("userpass login rejected ({}): {}", status, message))
            }
            other => other,
        })?;

        let login: LoginResponse = response
            .json()
            .await
            .map_err(|e| VaultError::AuthError(format!("Invalid response: {}", e)))?;

        let auth = login.auth.ok_or_else(|| {
            VaultError::AuthError("login response carried no auth data".to_string())
        })?;

        Ok(TokenInfo::new(
            auth.client_token,
            Duration::from_secs(auth.lease_duration),
            auth.renewable,
        ))
    }

    fn name(&self) -> &'static str {
        "userpass"
    }
}
