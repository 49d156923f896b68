use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::section::Section;
use crate::error::CoreError;

/// One filled-in assessment form: a flat mapping from field key to value.
///
/// Values are always strings. Dates are ISO `YYYY-MM-DD` strings and
/// numeric-looking fields (age, height, weight, BMI) are stored unparsed.
/// Serializes as a plain JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct AssessmentRecord(BTreeMap<String, String>);

impl AssessmentRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// The all-empty record for a section list: every declared key maps to `""`.
    pub fn empty_for(sections: &[Section]) -> Self {
        sections
            .iter()
            .flat_map(|s| &s.fields)
            .map(|f| (f.key.clone(), String::new()))
            .collect()
    }

    /// `{ ...defaults, ...overrides }`.
    ///
    /// Every key of `defaults` is present in the result. Keys present in both
    /// take the override's value. Keys only present in `overrides` are
    /// carried through unchanged.
    pub fn merge(defaults: &AssessmentRecord, overrides: Option<&AssessmentRecord>) -> Self {
        let mut merged = defaults.clone();
        if let Some(overrides) = overrides {
            merged
                .0
                .extend(overrides.0.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        merged
    }

    /// A copy of this record with `key` set to `value`. `self` is untouched.
    pub fn with_field(&self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.0.insert(key.into(), value.into());
        next
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// The value for `key`, or `""` when absent.
    pub fn value(&self, key: &str) -> &str {
        self.get(key).unwrap_or_default()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parse a record from a JSON object whose values are all strings.
    pub fn from_json_str(json: &str) -> Result<Self, CoreError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if !value.is_object() {
            return Err(CoreError::NotAnObject(json_kind(&value).to_string()));
        }
        Ok(serde_json::from_value(value)?)
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

impl<K, V> FromIterator<(K, V)> for AssessmentRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
