//! Interactive prompts.
//!
//! Every prompt is a single blocking call that either yields an answer or
//! [`Error::PromptCancelled`].

use std::io;

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Password, Select};

use crate::error::Error;

pub trait Prompter {
    /// Pick one of `items`, returning its index.
    fn select(&self, prompt: &str, items: &[&str]) -> Result<usize, Error>;

    /// Free text input.
    fn input(&self, prompt: &str) -> Result<String, Error>;

    /// Masked input.
    fn password(&self, prompt: &str) -> Result<String, Error>;

    /// Yes/no question.
    fn confirm(&self, prompt: &str) -> Result<bool, Error>;
}

/// Prompts on the controlling terminal.
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn select(&self, prompt: &str, items: &[&str]) -> Result<usize, Error> {
        Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact_opt()
            .map_err(prompt_error)?
            .ok_or(Error::PromptCancelled)
    }

    fn input(&self, prompt: &str) -> Result<String, Error> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .interact_text()
            .map_err(prompt_error)
    }

    fn password(&self, prompt: &str) -> Result<String, Error> {
        Password::with_theme(&self.theme)
            .with_prompt(prompt)
            .interact()
            .map_err(prompt_error)
    }

    fn confirm(&self, prompt: &str) -> Result<bool, Error> {
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact_opt()
            .map_err(prompt_error)?
            .ok_or(Error::PromptCancelled)
    }
}

fn prompt_error(err: dialoguer::Error) -> Error {
    match err {
        dialoguer::Error::IO(e) if e.kind() == io::ErrorKind::Interrupted => Error::PromptCancelled,
        dialoguer::Error::IO(e) => Error::Prompt(e),
    }
}
