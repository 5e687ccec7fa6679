#![warn(rust_2018_idioms)]

use std::process::ExitCode;

use clap::Parser;

use vault_dotenv::{run, Console, LogConfig, Options, TerminalPrompter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let options = Options::parse().with_env_token();
    let console = Console::new();

    if let Err(err) = LogConfig::from_options(&options).init() {
        console.failure(&err.to_string());
        return ExitCode::from(err.exit_code());
    }

    match run(&options, &TerminalPrompter::new(), &console).await {
        Ok(summary) => {
            console.info(&format!(
                "Wrote {} variables to {}",
                summary.entries,
                summary.output.display()
            ));
            console.success("Command finished running successfully.");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(error = ?err, "Run failed");
            console.failure("An error has occurred!");
            console.failure(&err.to_string());
            ExitCode::from(err.exit_code())
        }
    }
}
