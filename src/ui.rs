//! User-facing status output.

use console::{style, Term};

/// Where the run reports progress to the user. Diagnostics go through
/// `tracing`; this is only for the lines a user is meant to read.
pub struct Console {
    out: Option<Term>,
    err: Option<Term>,
}

impl Console {
    pub fn new() -> Self {
        Self {
            out: Some(Term::stdout()),
            err: Some(Term::stderr()),
        }
    }

    /// Console that drops everything, for tests and non-interactive callers.
    pub fn silent() -> Self {
        Self {
            out: None,
            err: None,
        }
    }

    pub fn info(&self, message: &str) {
        Self::write(self.out.as_ref(), message);
    }

    pub fn success(&self, message: &str) {
        Self::write(self.out.as_ref(), &success_line(message));
    }

    pub fn failure(&self, message: &str) {
        Self::write(self.err.as_ref(), &failure_line(message));
    }

    fn write(term: Option<&Term>, line: &str) {
        if let Some(term) = term {
            // Nothing sensible to do if the terminal is gone.
            let _ = term.write_line(line);
        }
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

fn success_line(message: &str) -> String {
    style(message).green().to_string()
}

/// Colored by whether stderr, not stdout, is a terminal.
fn failure_line(message: &str) -> String {
    style(message).for_stderr().red().to_string()
}
