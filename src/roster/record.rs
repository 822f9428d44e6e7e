use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single roster entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    /// Display name, required and non-empty
    pub name: String,
    /// Comma-delimited interest tokens; `None` when the source never
    /// collected interests at all
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interests: Option<String>,
    /// Every other scalar field on the record (school, team, ...)
    #[serde(flatten)]
    pub attrs: BTreeMap<String, String>,
}

impl Person {
    /// Build a minimal record from a bare name, as read from a
    /// newline-delimited roster
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            interests: Some(String::new()),
            attrs: BTreeMap::new(),
        }
    }

    /// All scalar fields eligible for repeated-value detection: the name
    /// plus every extra attribute. Interests are excluded.
    pub fn scalar_fields(&self) -> impl Iterator<Item = (&str, &str)> {
        std::iter::once(("name", self.name.as_str()))
            .chain(self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }
}

/// An ordered subset of the roster assigned to discuss together
pub type Group = Vec<Person>;
