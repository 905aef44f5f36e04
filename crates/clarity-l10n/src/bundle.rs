//! Message bundle with raw-key echo fallback

use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

use serde_json::Value;
use tracing::{debug, error};

use crate::error::{L10nError, L10nResult};

/// Built-in English messages, embedded at compile time.
pub const DEFAULT_MESSAGES: &str = include_str!("../assets/en.json");

static DEFAULT_BUNDLE: OnceLock<MessageBundle> = OnceLock::new();

/// A flat key -> message map.
///
/// Lookups never fail: a missing key is echoed back verbatim, so a sparse
/// bundle degrades to showing raw keys rather than breaking rendering.
#[derive(Debug, Clone, Default)]
pub struct MessageBundle {
    messages: HashMap<String, String>,
}

impl MessageBundle {
    /// Empty bundle; every lookup echoes its key
    pub fn empty() -> Self {
        Self::default()
    }

    /// Bundle with the built-in English messages
    pub fn builtin() -> Self {
        match parse_messages(DEFAULT_MESSAGES) {
            Ok(messages) => Self { messages },
            Err(e) => {
                error!("built-in message bundle is malformed: {e}");
                Self::default()
            }
        }
    }

    /// Load a bundle file and lay it over this bundle
    pub fn merge_file(&mut self, path: impl AsRef<Path>) -> L10nResult<()> {
        let raw = std::fs::read_to_string(path)?;
        self.messages.extend(parse_messages(&raw)?);
        Ok(())
    }

    /// Insert a single message
    pub fn insert(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.messages.insert(key.into(), message.into());
    }

    /// Look up `key`, echoing it back when unmapped
    pub fn translate(&self, key: &str) -> String {
        match self.messages.get(key) {
            Some(message) => message.clone(),
            None => {
                debug!(key, "no message for key, echoing");
                key.to_string()
            }
        }
    }

    /// Look up `<namespace>.<key>`
    pub fn translate2(&self, namespace: &str, key: &str) -> String {
        self.translate(&format!("{namespace}.{key}"))
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

fn parse_messages(raw: &str) -> L10nResult<HashMap<String, String>> {
    let value: Value = serde_json::from_str(raw)?;
    let Value::Object(map) = value else {
        return Err(L10nError::NotAStringMap);
    };
    map.into_iter()
        .map(|(k, v)| match v {
            Value::String(s) => Ok((k, s)),
            _ => Err(L10nError::NotAStringMap),
        })
        .collect()
}

/// Process-wide bundle with the built-in messages
pub fn default_bundle() -> &'static MessageBundle {
    DEFAULT_BUNDLE.get_or_init(MessageBundle::builtin)
}

/// Look up `key` in the process-wide bundle
pub fn translate(key: &str) -> String {
    default_bundle().translate(key)
}

/// Look up `<namespace>.<key>` in the process-wide bundle
pub fn translate2(namespace: &str, key: &str) -> String {
    default_bundle().translate2(namespace, key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_bundle_has_messages() {
        let bundle = MessageBundle::builtin();
        assert!(!bundle.is_empty());
        assert_eq!(bundle.translate("version"), "Version");
        assert_eq!(bundle.translate2("event.category", "QUALITY_GATE"), "Quality Gate");
    }

    #[test]
    fn test_missing_key_is_echoed() {
        let bundle = MessageBundle::empty();
        assert_eq!(bundle.translate("event.category.VERSION"), "event.category.VERSION");
        assert_eq!(bundle.translate2("event.category", "MYSTERY"), "event.category.MYSTERY");
    }

    #[test]
    fn test_insert_overrides() {
        let mut bundle = MessageBundle::builtin();
        bundle.insert("version", "Release");
        assert_eq!(bundle.translate("version"), "Release");
    }

    #[test]
    fn test_merge_file_overlays() {
        let dir = std::env::temp_dir().join("clarity-l10n-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("fr.json");
        std::fs::write(&path, r#"{"version": "Version (fr)"}"#).unwrap();

        let mut bundle = MessageBundle::builtin();
        bundle.merge_file(&path).unwrap();
        assert_eq!(bundle.translate("version"), "Version (fr)");
        // Untouched keys survive the overlay
        assert_eq!(bundle.translate("gate.status.ERROR"), "Failed");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = std::env::temp_dir().join("clarity-l10n-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.json");
        std::fs::write(&path, r#"{"version": 12}"#).unwrap();

        let mut bundle = MessageBundle::builtin();
        assert!(matches!(
            bundle.merge_file(&path),
            Err(L10nError::NotAStringMap)
        ));
    }

    #[test]
    fn test_default_bundle_is_shared() {
        assert_eq!(translate("version"), "Version");
        assert_eq!(translate2("gate.status", "OK"), "Passed");
        assert!(std::ptr::eq(default_bundle(), default_bundle()));
    }
}
