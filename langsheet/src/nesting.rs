//! Conversion between dotted flat keys and nested translation objects.
//!
//! `{"a.b": "x"}` denests to `{"a": {"b": "x"}}` and flattens back. Both directions work
//! on one language at a time and never mutate their input.
//!
//! Two lossy edge cases are kept as-is:
//! - Flattening an empty object produces no key at all.
//! - When one key is a prefix of another (`a` and `a.b`), denesting keeps whichever
//!   was written last at the colliding position.

use serde_json::{Map, Value};

use crate::types::{LanguageMap, Translations};

/// Separator between path components of a translation key.
pub const KEY_DELIMITER: char = '.';

/// Flattens nested translations into dotted keys.
///
/// Descending stops at the first value that is not an object; arrays, `null` and
/// scalars are emitted as they are.
pub fn flatten(translations: &Translations) -> Translations {
    let mut flat = Map::new();
    flatten_into(None, translations, &mut flat);
    flat
}

fn flatten_into(prefix: Option<&str>, object: &Map<String, Value>, out: &mut Translations) {
    for (key, value) in object {
        let path = match prefix {
            Some(prefix) => format!("{prefix}{KEY_DELIMITER}{key}"),
            None => key.clone(),
        };
        match value {
            Value::Object(children) => flatten_into(Some(&path), children, out),
            leaf => {
                out.insert(path, leaf.clone());
            }
        }
    }
}

/// Expands dotted keys into nested objects.
pub fn denest(translations: &Translations) -> Translations {
    let mut nested = Map::new();
    for (key, value) in translations {
        insert_path(&mut nested, key, value.clone());
    }
    nested
}

fn insert_path(target: &mut Translations, key: &str, value: Value) {
    let mut parts = key.split(KEY_DELIMITER).peekable();
    let mut current = target;
    while let Some(part) = parts.next() {
        if parts.peek().is_none() {
            current.insert(part.to_string(), value);
            return;
        }

        let slot = current
            .entry(part.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !slot.is_object() {
            *slot = Value::Object(Map::new());
        }
        let Some(children) = slot.as_object_mut() else {
            return;
        };
        current = children;
    }
}

impl LanguageMap {
    /// Returns a copy with every language flattened to dotted keys.
    pub fn flatten(&self) -> LanguageMap {
        self.map_translations(flatten)
    }

    /// Returns a copy with every language's dotted keys expanded into nested objects.
    pub fn denest(&self) -> LanguageMap {
        self.map_translations(denest)
    }
}
