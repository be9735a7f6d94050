//! Definition description schema
//!
//! serde model of the JSON description listing every built-in function and
//! global. Parsing stays deliberately shallow: engine index values are kept
//! as raw JSON so the table builder can tell a missing key from an explicit
//! null from an integer, and report malformed values with entry context.

use std::collections::BTreeMap;
use std::io::Read;

use serde::Deserialize;

use crate::DefinitionResult;

/// Top-level description: the two ordered collections of raw entries.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BuiltinDescriptions {
    pub functions: Vec<RawBuiltin>,
    pub globals: Vec<RawBuiltin>,
}

/// One raw built-in entry, function or global.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawBuiltin {
    pub name: String,

    /// Value type tag, validated by the builder
    #[serde(rename = "type")]
    pub value_type: String,

    /// Engine key to index value. A key that is absent, maps to null, or
    /// maps to an integer encodes three different states.
    pub engines: BTreeMap<String, serde_json::Value>,

    /// Parameter signature; globals never declare any
    #[serde(default)]
    pub parameters: Vec<RawParameter>,
}

/// One raw parameter record.
///
/// Accepts both description schema versions: the older one predates
/// `many` and `allow_uppercase`, so every flag defaults to false.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawParameter {
    #[serde(rename = "type")]
    pub value_type: String,

    #[serde(default)]
    pub optional: bool,

    #[serde(default)]
    pub many: bool,

    #[serde(default)]
    pub passthrough_last: bool,

    #[serde(default)]
    pub allow_uppercase: bool,
}

impl BuiltinDescriptions {
    /// Parse a description from JSON text.
    pub fn from_json_str(json: &str) -> DefinitionResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a description from a JSON stream.
    pub fn from_json_reader(reader: impl Read) -> DefinitionResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Total number of entries across both collections.
    pub fn len(&self) -> usize {
        self.functions.len() + self.globals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty() && self.globals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_both_schema_versions() {
        // Older schema: no many/allow_uppercase anywhere
        let old = BuiltinDescriptions::from_json_str(
            r#"{
                "functions": [{
                    "name": "object_create",
                    "type": "void",
                    "engines": {"xbox": 41, "mcc-cea": null},
                    "parameters": [{"type": "object_name"}]
                }],
                "globals": []
            }"#,
        )
        .unwrap();
        assert_eq!(old.functions[0].parameters[0].many, false);
        assert_eq!(old.functions[0].parameters[0].allow_uppercase, false);

        // Newer schema: the added flags are honored
        let new = BuiltinDescriptions::from_json_str(
            r#"{
                "functions": [{
                    "name": "min",
                    "type": "passthrough",
                    "engines": {},
                    "parameters": [{"type": "passthrough", "many": true, "allow_uppercase": true}]
                }],
                "globals": []
            }"#,
        )
        .unwrap();
        assert!(new.functions[0].parameters[0].many);
        assert!(new.functions[0].parameters[0].allow_uppercase);
    }

    #[test]
    fn engines_map_keeps_null_and_integer_distinct() {
        let descriptions = BuiltinDescriptions::from_json_str(
            r#"{
                "functions": [],
                "globals": [{"name": "gravity", "type": "real", "engines": {"xbox": 3, "gbx-retail": null}}]
            }"#,
        )
        .unwrap();
        let engines = &descriptions.globals[0].engines;
        assert_eq!(engines.get("xbox"), Some(&serde_json::json!(3)));
        assert_eq!(engines.get("gbx-retail"), Some(&serde_json::Value::Null));
        assert_eq!(engines.get("gbx-custom"), None);
    }

    #[test]
    fn missing_engines_map_is_a_parse_error() {
        let result = BuiltinDescriptions::from_json_str(
            r#"{"functions": [{"name": "sleep", "type": "void"}], "globals": []}"#,
        );
        assert!(result.is_err());
    }
}
