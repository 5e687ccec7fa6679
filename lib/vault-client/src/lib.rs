//! vault-client - minimal Rust client for HashiCorp Vault
//!
//! The caller picks the authentication method:
//! - [`StaticTokenAuth`] uses a token as is
//! - [`UserpassAuth`] logs in and yields a session token
//!
//! Session tokens are owned by the client and can be given back with
//! [`VaultClient::revoke_self`].

mod auth;
mod client;
mod error;
mod models;

pub use auth::{AuthMethod, StaticTokenAuth, TokenInfo, TokenKind, UserpassAuth};
pub use client::{VaultClient, VaultClientBuilder};
pub use error::VaultError;
pub use models::{KvData, KvVersion};
