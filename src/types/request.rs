//! Generic key-value request carrier.

use std::collections::HashMap;

use serde::Deserialize;

/// Inbound field data for a use case, keyed by field name.
///
/// The carrier is deliberately untyped: field extraction and validation
/// belong to the use case, not the transport layer.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Request {
    fields: HashMap<String, String>,
}

impl Request {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field insertion.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Get a field value, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Get a field value, defaulting to the empty string when absent.
    pub fn get_or_default(&self, key: &str) -> &str {
        self.get(key).unwrap_or("")
    }
}

impl From<HashMap<String, String>> for Request {
    fn from(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_field_is_returned() {
        let request = Request::new().with("name", "Jo");
        assert_eq!(request.get("name"), Some("Jo"));
        assert_eq!(request.get_or_default("name"), "Jo");
    }

    #[test]
    fn absent_field_defaults_to_empty_string() {
        let request = Request::new();
        assert_eq!(request.get("name"), None);
        assert_eq!(request.get_or_default("name"), "");
    }

    #[test]
    fn later_insertion_overwrites_earlier_value() {
        let request = Request::new().with("name", "Jo").with("name", "Joanna");
        assert_eq!(request.get("name"), Some("Joanna"));
    }
}
