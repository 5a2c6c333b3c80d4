//! Argument sanitization for audit logging.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// Maximum length for argument values before truncation.
const MAX_STRING_LENGTH: usize = 1024;

/// Arguments whose values may be large payloads.
const TRUNCATABLE_KEYS: &[&str] = &["content"];

/// Convert task arguments into a JSON object for the audit log.
///
/// Payload arguments longer than the limit are replaced by a size marker.
pub fn sanitize_args(args: &BTreeMap<String, String>) -> Value {
    let sanitized: Map<String, Value> = args
        .iter()
        .map(|(key, value)| {
            let value = if TRUNCATABLE_KEYS.contains(&key.as_str()) && value.len() > MAX_STRING_LENGTH
            {
                format!("[TRUNCATED - {} bytes]", value.len())
            } else {
                value.clone()
            };
            (key.clone(), Value::String(value))
        })
        .collect();
    Value::Object(sanitized)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_short_values_kept() {
        let sanitized = sanitize_args(&args(&[("path", "/tmp/a"), ("content", "hello")]));
        assert_eq!(sanitized["path"], "/tmp/a");
        assert_eq!(sanitized["content"], "hello");
    }

    #[test]
    fn test_large_content_truncated() {
        let large = "x".repeat(2000);
        let sanitized = sanitize_args(&args(&[("content", &large)]));
        assert_eq!(sanitized["content"], "[TRUNCATED - 2000 bytes]");
    }

    #[test]
    fn test_long_path_not_truncated() {
        let long_path = format!("/tmp/{}", "p".repeat(2000));
        let sanitized = sanitize_args(&args(&[("path", &long_path)]));
        assert_eq!(sanitized["path"], long_path.as_str());
    }
}
