//! Caller-supplied context mapping for template resolution.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Key → value mapping used to resolve `{key}` placeholders.
///
/// Values are arbitrary JSON-representable data; they are rendered to their
/// string form at substitution time. Insertion order is preserved.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateContext {
    values: IndexMap<String, Value>,
}

impl TemplateContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value, builder-style.
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Add a value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// Look up a raw value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Render the value for `key` as it should appear in the output text.
    ///
    /// JSON strings are inserted without quotes; everything else uses its
    /// JSON display form.
    pub fn resolve(&self, key: &str) -> Option<String> {
        self.values.get(key).map(|value| match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }

    /// Whether the context holds no entries.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for TemplateContext {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut context = Self::new();
        for (key, value) in iter {
            context.insert(key, value);
        }
        context
    }
}
