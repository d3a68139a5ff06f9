//! Canonical environment document structure

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Canonical environment document
///
/// An ordered collection of variable records used for template
/// substitution. The record shape is owned by the external parser; fields
/// this crate does not interpret are preserved opaquely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentDocument {
    #[serde(default)]
    pub variables: Vec<EnvVariable>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single environment variable record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvVariable {
    pub name: String,
    #[serde(default)]
    pub value: String,
    /// Disabled records are ignored by variable extraction
    #[serde(default)]
    pub enabled: bool,
    /// Parser-owned record fields (e.g. `secret`)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl EnvVariable {
    /// Convenience constructor for an enabled record.
    pub fn enabled(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            enabled: true,
            extra: Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_variables_deserialize_empty() {
        let doc: EnvironmentDocument = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(doc.variables.is_empty());
    }

    #[test]
    fn test_record_defaults() {
        let variable: EnvVariable =
            serde_json::from_value(serde_json::json!({"name": "host"})).unwrap();
        assert_eq!(variable.name, "host");
        assert_eq!(variable.value, "");
        assert!(!variable.enabled);
    }

    #[test]
    fn test_unknown_record_fields_are_preserved() {
        let variable: EnvVariable = serde_json::from_value(serde_json::json!({
            "name": "token",
            "value": "abc",
            "enabled": true,
            "secret": true
        }))
        .unwrap();
        assert_eq!(variable.extra["secret"], serde_json::json!(true));

        let round_tripped = serde_json::to_value(&variable).unwrap();
        assert_eq!(round_tripped["secret"], serde_json::json!(true));
    }
}
