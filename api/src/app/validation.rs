//! Validation messages attached to a rendered view

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Key under which messages that belong to no particular field are stored
pub const GENERIC_KEY: &str = "";

/// Messages keyed by the field they refer to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// A set holding a single message under the generic key
    pub fn generic(message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add_generic(message);
        errors
    }

    pub fn add(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.0.entry(key.into()).or_default().push(message.into());
    }

    pub fn add_generic(&mut self, message: impl Into<String>) {
        self.add(GENERIC_KEY, message);
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn get(&self, key: &str) -> &[String] {
        self.0.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
