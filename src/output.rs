//! Writing the env file, guarded by an overwrite confirmation.

use std::fs;
use std::path::Path;

use crate::error::Error;
use crate::prompt::Prompter;
use crate::ui::Console;

const OVERWRITE_PROMPT: &str = "Do you want to override the file?";

/// Ask before replacing an existing file unless `overwrite` is set.
///
/// Declining is an error so the caller never reaches the write.
pub fn confirm_overwrite(
    path: &Path,
    overwrite: bool,
    prompter: &dyn Prompter,
    console: &Console,
) -> Result<(), Error> {
    console.info("Checking if file already exists..");
    if !path.exists() {
        return Ok(());
    }

    console.info("File already exists");
    if !overwrite && !prompter.confirm(OVERWRITE_PROMPT)? {
        return Err(Error::OverwriteDeclined {
            path: path.to_path_buf(),
        });
    }

    console.info("Overriding file with latest contents from Vault");
    Ok(())
}

/// Replace the file's contents in one write.
pub fn write_env_file(path: &Path, contents: &str) -> Result<(), Error> {
    tracing::debug!(path = %path.display(), bytes = contents.len(), "Writing env file");
    fs::write(path, contents).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::testing::{Answer, ScriptedPrompter};

    #[test]
    fn test_missing_file_needs_no_prompt() {
        let dir = tempfile::tempdir().unwrap();
        let prompter = ScriptedPrompter::default();

        confirm_overwrite(
            &dir.path().join(".env"),
            false,
            &prompter,
            &Console::silent(),
        )
        .unwrap();

        assert!(prompter.asked.borrow().is_empty());
    }

    #[test]
    fn test_existing_file_with_override_needs_no_prompt() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let prompter = ScriptedPrompter::default();

        confirm_overwrite(file.path(), true, &prompter, &Console::silent()).unwrap();

        assert!(prompter.asked.borrow().is_empty());
    }

    #[test]
    fn test_existing_file_confirmed() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let prompter = ScriptedPrompter::new([Answer::Yes(true)]);

        confirm_overwrite(file.path(), false, &prompter, &Console::silent()).unwrap();

        assert_eq!(*prompter.asked.borrow(), [OVERWRITE_PROMPT]);
    }

    #[test]
    fn test_existing_file_declined() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let prompter = ScriptedPrompter::new([Answer::Yes(false)]);

        let result = confirm_overwrite(file.path(), false, &prompter, &Console::silent());

        assert!(matches!(result, Err(Error::OverwriteDeclined { .. })));
    }

    #[test]
    fn test_write_replaces_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "OLD=value\nSTALE=1\n").unwrap();

        write_env_file(&path, "NEW=value\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "NEW=value\n");
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join(".env");

        let result = write_env_file(&path, "KEY=value\n");

        assert!(matches!(result, Err(Error::Write { .. })));
    }
}
