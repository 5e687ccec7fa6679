use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::Path;

use vault_dotenv::{Error, Options, Prompter};

pub fn options(hostname: &str, path: &str, output: &Path) -> Options {
    Options {
        hostname: hostname.to_string(),
        path: path.to_string(),
        output: output.to_path_buf(),
        token: None,
        username: None,
        password: None,
        userpass_mount: "userpass".to_string(),
        debug: false,
        overwrite: false,
        help: None,
        env_token: None,
    }
}

/// Helper to create a Vault KV2 response in the expected format.
pub fn vault_kv2_response(data: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "request_id": "test-request-id",
        "lease_id": "",
        "renewable": false,
        "lease_duration": 0,
        "data": {
            "data": data,
            "metadata": {
                "created_time": "2024-01-01T00:00:00.000000000Z",
                "deletion_time": "",
                "destroyed": false,
                "version": 1,
                "custom_metadata": null
            }
        },
        "wrap_info": null,
        "warnings": null,
        "auth": null
    })
}

pub fn login_response(token: &str) -> serde_json::Value {
    serde_json::json!({
        "auth": {
            "client_token": token,
            "lease_duration": 2764800,
            "renewable": true
        }
    })
}

/// Answers confirmations from a script and records every prompt shown.
#[derive(Default)]
pub struct ConfirmOnly {
    answers: RefCell<VecDeque<bool>>,
    pub asked: RefCell<Vec<String>>,
}

impl ConfirmOnly {
    pub fn new(answers: &[bool]) -> Self {
        Self {
            answers: RefCell::new(answers.iter().copied().collect()),
            asked: RefCell::default(),
        }
    }
}

impl Prompter for ConfirmOnly {
    fn select(&self, prompt: &str, _items: &[&str]) -> Result<usize, Error> {
        self.asked.borrow_mut().push(prompt.to_string());
        Err(Error::PromptCancelled)
    }

    fn input(&self, prompt: &str) -> Result<String, Error> {
        self.asked.borrow_mut().push(prompt.to_string());
        Err(Error::PromptCancelled)
    }

    fn password(&self, prompt: &str) -> Result<String, Error> {
        self.asked.borrow_mut().push(prompt.to_string());
        Err(Error::PromptCancelled)
    }

    fn confirm(&self, prompt: &str) -> Result<bool, Error> {
        self.asked.borrow_mut().push(prompt.to_string());
        self.answers
            .borrow_mut()
            .pop_front()
            .ok_or(Error::PromptCancelled)
    }
}
