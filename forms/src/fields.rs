//! Per-field string maps backing form values and form errors.

#[cfg(test)]
#[path = "fields_test.rs"]
mod fields_test;

use serde_json::{Map, Value};

use crate::schema::FormSchema;

/// Ordered `field name -> string` map with a fixed key set taken from a
/// schema. Keys outside that set are never stored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldMap {
    entries: Vec<(&'static str, String)>,
}

/// Current input values, keyed by field name.
pub type FormData = FieldMap;

/// Current error messages, keyed by field name. `""` means no error.
pub type FormErrors = FieldMap;

impl FieldMap {
    /// One empty entry per schema field.
    #[must_use]
    pub fn empty(schema: &FormSchema) -> Self {
        Self { entries: schema.field_names().map(|name| (name, String::new())).collect() }
    }

    /// Value for `name`, or `None` if the key is unknown.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Replace the value for a known key. Returns `false` for unknown keys.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some((_, slot)) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// Reset every value to `""`, keeping the key set.
    pub fn clear(&mut self) {
        for (_, value) in &mut self.entries {
            value.clear();
        }
    }

    /// `true` when every value is `""`.
    #[must_use]
    pub fn all_empty(&self) -> bool {
        self.entries.iter().all(|(_, value)| value.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.entries.iter().map(|(key, value)| (*key, value.as_str()))
    }

    /// Entries whose value is non-empty.
    pub fn non_empty(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.iter().filter(|(_, value)| !value.is_empty())
    }

    /// JSON object with one string member per field, used as request body.
    #[must_use]
    pub fn to_payload(&self) -> Value {
        let map: Map<String, Value> = self
            .entries
            .iter()
            .map(|(key, value)| ((*key).to_owned(), Value::String(value.clone())))
            .collect();
        Value::Object(map)
    }
}

/// DOM id of the inline error element for `field`, e.g. `EmailError`.
#[must_use]
pub fn error_key(field: &str) -> String {
    format!("{field}Error")
}
