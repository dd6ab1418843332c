//! A single row of a tabular source.

use crate::utils::slug::slugify;

/// Flat field name → value mapping, in source column order.
///
/// Empty cells are never stored, so an empty cell and a missing column
/// look the same to every reader.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentRecord {
    fields: Vec<(String, String)>,
}

impl ContentRecord {
    /// Build a record from `(column, value)` pairs, dropping empty values.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut record = Self::default();
        for (key, value) in pairs {
            record.set(key.into(), value.into());
        }
        record
    }

    /// Insert or replace a field. Empty values remove the field.
    pub fn set(&mut self, key: String, value: String) {
        let existing = self.fields.iter().position(|(k, _)| *k == key);
        match (existing, value.is_empty()) {
            (Some(idx), true) => {
                self.fields.remove(idx);
            }
            (Some(idx), false) => self.fields[idx].1 = value,
            (None, true) => {}
            (None, false) => self.fields.push((key, value)),
        }
    }

    /// Field value, if present.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Field value, or `""` when absent.
    pub fn get(&self, key: &str) -> &str {
        self.field(key).unwrap_or_default()
    }

    pub fn title(&self) -> &str {
        self.get("title")
    }

    /// Raw `publish_date`, `""` when absent. Used as the sort key.
    pub fn publish_date(&self) -> &str {
        self.get("publish_date")
    }

    pub fn slug(&self) -> String {
        slugify(self.title())
    }

    /// Present fields in source column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
