//! Command-line options.

use std::env;
use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Fetch secrets from a Vault KV v2 path and write them to a .env file.
#[derive(Debug, Clone, Parser)]
#[command(name = "vault-dotenv", version, about, long_about = None)]
#[command(disable_help_flag = true)]
#[command(
    override_usage = "vault-dotenv -h <hostname> -t <token> -u <username> -p <password> -f <path> -o <output> -d --override"
)]
pub struct Options {
    /// Host of Vault server
    #[arg(short = 'h', long)]
    pub hostname: String,

    /// Path to secrets, e.g. `secret/my-app/dev`
    #[arg(short = 'f', long)]
    pub path: String,

    /// Name of output file
    #[arg(short = 'o', long)]
    pub output: PathBuf,

    /// Auth token
    #[arg(short = 't', long)]
    pub token: Option<String>,

    /// Auth username
    #[arg(short = 'u', long)]
    pub username: Option<String>,

    /// Auth password
    #[arg(short = 'p', long)]
    pub password: Option<String>,

    /// Mount path of the userpass auth method
    #[arg(long, default_value = "userpass")]
    pub userpass_mount: String,

    /// Show debug logs
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// Override file if found
    #[arg(long = "override")]
    pub overwrite: bool,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    pub help: Option<bool>,

    /// `VAULT_TOKEN` from the environment; only used when no credential
    /// flag was given.
    #[arg(skip)]
    pub env_token: Option<String>,
}

impl Options {
    /// Read VAULT_TOKEN, ignoring it when empty
    pub fn with_env_token(mut self) -> Self {
        self.env_token = env::var("VAULT_TOKEN").ok().filter(|t| !t.is_empty());
        self
    }
}
