//! Rendering a secret map as `.env` text.

use serde_json::{Map, Value};

/// One `key=value` line per entry, in map order.
///
/// Nothing is quoted or escaped: strings go out verbatim, any other JSON
/// value as its JSON text.
pub fn render(secrets: &Map<String, Value>) -> String {
    secrets
        .iter()
        .map(|(key, value)| match value {
            Value::String(s) => format!("{}={}\n", key, s),
            other => format!("{}={}\n", key, other),
        })
        .collect()
}
