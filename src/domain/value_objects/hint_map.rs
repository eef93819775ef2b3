//! Hint map - binary file name to `HintPath` string

use std::collections::BTreeMap;

/// `HintPath` per binary file name, relative to the generated project folder
///
/// Keyed by the exact binary name, so two references that name the same
/// binary share one hint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HintMap(BTreeMap<String, String>);

impl HintMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the hint for a binary, replacing any earlier one
    pub fn insert(&mut self, dll_name: impl Into<String>, hint: impl Into<String>) {
        self.0.insert(dll_name.into(), hint.into());
    }

    pub fn get(&self, dll_name: &str) -> Option<&str> {
        self.0.get(dll_name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
