//! Working out which credentials to log in with.

use std::fmt;

use crate::cli::Options;
use crate::error::Error;
use crate::prompt::Prompter;

const AUTH_METHOD_PROMPT: &str = "Please select your authentication method";
const AUTH_METHODS: [&str; 2] = ["Token", "Username/password"];
const TOKEN_PROMPT: &str = "Please input your auth token used to sign in to Vault";
const USERNAME_PROMPT: &str = "Please input your username";
const PASSWORD_PROMPT: &str = "Please input your password";

/// The single authentication method used for a run.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Long-lived token supplied by the user; never revoked.
    Token(String),
    /// Exchanged for a session token at login; revoked at the end of the run.
    UserPass { username: String, password: String },
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token(_) => f.write_str("Token(<redacted>)"),
            Self::UserPass { username, .. } => f
                .debug_struct("UserPass")
                .field("username", username)
                .finish_non_exhaustive(),
        }
    }
}

/// Pick credentials from the options, prompting for whatever is missing.
///
/// A `-t` token always wins. Without any credential flag, `VAULT_TOKEN` is
/// used if set; otherwise the user chooses a method interactively. A
/// username without a password prompts for the password only.
pub fn resolve_credentials(
    options: &Options,
    prompter: &dyn Prompter,
) -> Result<Credentials, Error> {
    if let Some(token) = &options.token {
        tracing::debug!("Using the supplied auth token");
        return Ok(Credentials::Token(token.clone()));
    }

    if options.username.is_none() && options.password.is_none() {
        if let Some(token) = &options.env_token {
            tracing::debug!("Using the auth token from VAULT_TOKEN");
            return Ok(Credentials::Token(token.clone()));
        }
    }

    let username = match &options.username {
        Some(username) => username.clone(),
        None => {
            tracing::debug!("No token or username given, asking for an auth method");
            match prompter.select(AUTH_METHOD_PROMPT, &AUTH_METHODS)? {
                0 => return Ok(Credentials::Token(prompter.password(TOKEN_PROMPT)?)),
                _ => prompter.input(USERNAME_PROMPT)?,
            }
        }
    };

    let password = match &options.password {
        Some(password) if options.username.is_some() => password.clone(),
        _ => prompter.password(PASSWORD_PROMPT)?,
    };

    tracing::debug!(%username, "Auth token not specified, using user/pass login");
    Ok(Credentials::UserPass { username, password })
}
