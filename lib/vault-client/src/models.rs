use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};

/// KV v2 secret data with version metadata
///
/// `data` keeps the key order Vault sent.
#[derive(Debug, Clone)]
pub struct KvData {
    pub data: Map<String, Value>,
    pub metadata: Option<KvVersion>,
}

/// Version information for a secret
#[derive(Debug, Clone)]
pub struct KvVersion {
    pub version: u64,
    pub created_time: DateTime<Utc>,
    pub deletion_time: Option<DateTime<Utc>>,
    pub destroyed: bool,
}

/// Metadata as Vault sends it: `deletion_time` is an empty string when unset.
#[derive(Deserialize)]
struct KvVersionResponse {
    version: u64,
    created_time: String,
    #[serde(default)]
    deletion_time: Option<String>,
    #[serde(default)]
    destroyed: bool,
}

impl KvData {
    /// Extract `data.data` from a KV v2 read response.
    ///
    /// Returns `None` when the response has no nested data object, as with a
    /// KV v1 mount read through a `data/` path. Soft-deleted versions never
    /// get here: Vault answers those with 404.
    pub(crate) fn from_response(body: &Value) -> Option<Self> {
        let inner = body.get("data")?;
        let data = inner.get("data")?.as_object()?.clone();
        let metadata = inner.get("metadata").and_then(KvVersion::from_response);

        Some(Self { data, metadata })
    }
}

impl KvVersion {
    fn from_response(value: &Value) -> Option<Self> {
        let raw: KvVersionResponse = serde_json::from_value(value.clone()).ok()?;

        Some(Self {
            version: raw.version,
            created_time: raw.created_time.parse().ok()?,
            deletion_time: raw.deletion_time.and_then(|s| s.parse().ok()),
            destroyed: raw.destroyed,
        })
    }
}
