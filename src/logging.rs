//! Diagnostic logging setup.

use std::env;

use tracing_subscriber::EnvFilter;

use crate::cli::Options;
use crate::error::Error;

const DEBUG_DIRECTIVES: &str = "vault_dotenv=debug,vault_client=debug";
const DEFAULT_DIRECTIVES: &str = "warn";

/// Logging configuration, built once and handed to [`LogConfig::init`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogConfig {
    pub debug: bool,
    pub json: bool,
}

impl LogConfig {
    pub fn from_options(options: &Options) -> Self {
        Self {
            debug: options.debug,
            json: false,
        }
        .json_from_env()
    }

    /// Read JSON_LOG env var to determine if JSON should be enabled
    pub fn json_from_env(mut self) -> Self {
        self.json = env::var("JSON_LOG").is_ok_and(|s| s.parse().unwrap_or_default());
        self
    }

    /// `RUST_LOG` wins; otherwise the debug flag picks the level.
    pub fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.directives()))
    }

    fn directives(&self) -> &'static str {
        if self.debug {
            DEBUG_DIRECTIVES
        } else {
            DEFAULT_DIRECTIVES
        }
    }

    /// Install the global subscriber. Logs go to stderr so stdout stays for
    /// user-facing messages.
    pub fn init(self) -> Result<(), Error> {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(self.filter())
            .with_writer(std::io::stderr);

        let result = if self.json {
            builder.json().try_init()
        } else {
            builder.with_target(false).try_init()
        };

        result.map_err(|e| Error::Logging(e.to_string()))
    }
}
