//! The run itself: authenticate, read, write, clean up.

use std::path::PathBuf;

use vault_client::{StaticTokenAuth, UserpassAuth, VaultClient, VaultClientBuilder};

use crate::auth::{resolve_credentials, Credentials};
use crate::cli::Options;
use crate::dotenv;
use crate::error::Error;
use crate::output::{confirm_overwrite, write_env_file};
use crate::path::kv2_data_path;
use crate::prompt::Prompter;
use crate::ui::Console;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// What a successful run wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub output: PathBuf,
    pub entries: usize,
}

/// Fetch the secrets at `options.path` and write them to `options.output`.
///
/// A session token obtained through userpass login is revoked before
/// returning, whether or not the rest of the run succeeded. A supplied token
/// is left alone.
pub async fn run(
    options: &Options,
    prompter: &dyn Prompter,
    console: &Console,
) -> Result<Summary, Error> {
    tracing::debug!("Modifying Vault path to fit requirements of Vault KV v2 API..");
    let api_path = kv2_data_path(&options.path)?;
    tracing::debug!(path = %api_path, "Successfully modified Vault path");

    let credentials = resolve_credentials(options, prompter)?;
    let client = connect(options, credentials).await?;

    let result = fetch_and_write(&client, &api_path, options, prompter, console).await;

    if !client.token_info().is_session() {
        return result;
    }

    tracing::debug!("Cleaning up.. removing temp Vault auth tokens");
    match (result, client.revoke_self().await) {
        (Ok(summary), Ok(())) => Ok(summary),
        (Ok(_), Err(revoke_err)) => Err(revoke_err.into()),
        (Err(err), Ok(())) => Err(err),
        (Err(err), Err(revoke_err)) => {
            tracing::warn!(error = %revoke_err, "Failed to revoke session token");
            Err(err)
        }
    }
}

async fn connect(options: &Options, credentials: Credentials) -> Result<VaultClient, Error> {
    tracing::debug!(hostname = %options.hostname, "Connecting to Vault server..");
    let builder: VaultClientBuilder = match credentials {
        Credentials::Token(token) => {
            VaultClient::builder(&options.hostname, StaticTokenAuth::new(token))
        }
        Credentials::UserPass { username, password } => VaultClient::builder(
            &options.hostname,
            UserpassAuth::new(username, password).with_mount(options.userpass_mount.clone()),
        ),
    };

    Ok(builder.application_name(USER_AGENT).build().await?)
}

async fn fetch_and_write(
    client: &VaultClient,
    api_path: &str,
    options: &Options,
    prompter: &dyn Prompter,
    console: &Console,
) -> Result<Summary, Error> {
    tracing::debug!("Reading environment variables from Vault...");
    let kv = client
        .kv_read(api_path)
        .await?
        .ok_or_else(|| Error::MissingSecretData {
            path: api_path.to_string(),
        })?;
    tracing::debug!(
        entries = kv.data.len(),
        "Environment variables obtained successfully from Vault"
    );

    confirm_overwrite(&options.output, options.overwrite, prompter, console)?;

    tracing::debug!("Translating environment variables from JSON to .env format..");
    let contents = dotenv::render(&kv.data);
    write_env_file(&options.output, &contents)?;
    tracing::debug!("File written successfully");

    Ok(Summary {
        output: options.output.clone(),
        entries: kv.data.len(),
    })
}
