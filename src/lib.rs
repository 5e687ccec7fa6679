//! Fetch secrets from a Vault KV v2 path into a `.env` file.

mod auth;
mod cli;
mod dotenv;
mod error;
mod logging;
mod output;
mod path;
mod prompt;
mod run;
mod ui;

pub use crate::auth::{resolve_credentials, Credentials};
pub use crate::cli::Options;
pub use crate::dotenv::render;
pub use crate::error::Error;
pub use crate::logging::LogConfig;
pub use crate::output::{confirm_overwrite, write_env_file};
pub use crate::path::kv2_data_path;
pub use crate::prompt::{Prompter, TerminalPrompter};
pub use crate::run::{run, Summary};
pub use crate::ui::Console;
