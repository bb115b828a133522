//! Captured field values, keyed by field key

use crate::publication::FieldSchema;
use std::collections::HashMap;

/// Mapping from field key to the captured string value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    values: HashMap<String, String>,
}

impl FieldValues {
    /// Every schema key mapped to an empty string
    pub fn empty_for(schema: &FieldSchema) -> Self {
        Self {
            values: schema.keys().map(|k| (k.to_string(), String::new())).collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Value for `key`, or the empty string when it was never captured
    pub fn get_or_empty(&self, key: &str) -> &str {
        self.get(key).unwrap_or_default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn clear(&mut self, key: &str) {
        if let Some(value) = self.values.get_mut(key) {
            value.clear();
        }
    }

}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
