use std::fmt;
use std::time::Duration;

/// Where a token came from, which decides who is responsible for revoking it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Supplied by the user; never revoked by this client
    Static,
    /// Issued by a login call made by this client
    Session,
}

/// Token information from authentication
#[derive(Clone)]
pub struct TokenInfo {
    pub token: String,
    pub lease_duration: Duration,
    pub renewable: bool,
    pub kind: TokenKind,
}

impl TokenInfo {
    /// Session token returned by a login call
    pub fn new(token: String, lease_duration: Duration, renewable: bool) -> Self {
        Self {
            token,
            lease_duration,
            renewable,
            kind: TokenKind::Session,
        }
    }

    /// Static token (never expires, never revoked)
    pub fn static_token(token: String) -> Self {
        Self {
            token,
            lease_duration: Duration::ZERO,
            renewable: false,
            kind: TokenKind::Static,
        }
    }

    pub fn is_session(&self) -> bool {
        self.kind == TokenKind::Session
    }
}

impl fmt::Debug for TokenInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenInfo")
            .field("token", &"<redacted>")
            .field("lease_duration", &self.lease_duration)
            .field("renewable", &self.renewable)
            .field("kind", &self.kind)
            .finish()
    }
}
