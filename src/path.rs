//! Secret path translation for the KV v2 data endpoint.

use crate::error::Error;

const DATA_SEGMENT: &str = "data";

/// Insert `data` after the mount, the first path component:
/// `secret/my-app/dev` becomes `secret/data/my-app/dev`.
///
/// Purely structural. A single-segment path has no insertion point and is
/// returned unchanged.
pub fn kv2_data_path(path: &str) -> Result<String, Error> {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        return Err(Error::InvalidPath {
            path: path.to_string(),
            reason: "path is empty",
        });
    }

    match trimmed.split_once('/') {
        Some((mount, rest)) => Ok(format!("{}/{}/{}", mount, DATA_SEGMENT, rest)),
        None => {
            tracing::warn!(path = trimmed, "Secret path has a single segment, reading it as is");
            Ok(trimmed.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inserts_after_first_segment() {
        assert_eq!(kv2_data_path("a/b").unwrap(), "a/data/b");
        assert_eq!(kv2_data_path("a/b/c").unwrap(), "a/data/b/c");
        assert_eq!(
            kv2_data_path("mount/secret/x").unwrap(),
            "mount/data/secret/x"
        );
    }

    #[test]
    fn test_single_segment_unchanged() {
        assert_eq!(kv2_data_path("a").unwrap(), "a");
    }

    #[test]
    fn test_not_idempotent() {
        let once = kv2_data_path("a/b").unwrap();
        assert_eq!(kv2_data_path(&once).unwrap(), "a/data/data/b");
    }

    #[test]
    fn test_surrounding_slashes_trimmed() {
        assert_eq!(kv2_data_path("/app/env/").unwrap(), "app/data/env");
    }

    #[test]
    fn test_empty_path_rejected() {
        assert!(matches!(
            kv2_data_path("//"),
            Err(Error::InvalidPath { .. })
        ));
        assert!(matches!(kv2_data_path(""), Err(Error::InvalidPath { .. })));
    }
}
