//! Locale document model: a tree of string leaves addressed by dot-paths.
//!
//! The structure is deliberately schema-free. Resolution is a total
//! function: a missing segment, a non-object intermediate node, or a
//! non-string leaf all read as "absent", never as an error.

use std::collections::BTreeSet;
use std::str::FromStr;

use serde_json::Value;

/// A parsed locale document for one language.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationDocument {
    root: Value,
}

impl TranslationDocument {
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// Walk nested object keys along `path` ("a.b.c") down to a string
    /// leaf. Safe-navigation semantics: any miss returns `None`.
    pub fn resolve(&self, path: &str) -> Option<&str> {
        let mut node = &self.root;
        for segment in path.split('.') {
            node = node.as_object()?.get(segment)?;
        }
        node.as_str()
    }

    /// All dot-paths that resolve to string leaves, in sorted order.
    /// Used by the locale completeness checker.
    pub fn keys(&self) -> BTreeSet<String> {
        let mut keys = BTreeSet::new();
        collect_keys("", &self.root, &mut keys);
        keys
    }
}

impl FromStr for TranslationDocument {
    type Err = serde_json::Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(serde_json::from_str(raw)?))
    }
}

fn collect_keys(prefix: &str, node: &Value, out: &mut BTreeSet<String>) {
    match node {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                collect_keys(&path, child, out);
            }
        }
        Value::String(_) => {
            if !prefix.is_empty() {
                out.insert(prefix.to_string());
            }
        }
        _ => {}
    }
}

/// A resolved value containing the markup delimiter is injected as raw
/// markup; anything else is plain text. Translations are author-controlled,
/// so raw injection is an accepted tradeoff.
pub fn is_markup(value: &str) -> bool {
    value.contains('<')
}
