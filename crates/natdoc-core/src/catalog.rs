//! In-memory native catalog as published upstream.
//!
//! The catalog is a JSON object mapping namespace names to objects that map
//! native keys (usually the hash) to native records. Document order is kept so
//! namespaces are processed in the order the catalog declares them.

use serde_json::{Map, Value, from_str, from_value};
use tracing::warn;

use crate::types::NativeDefinition;
use crate::{Error, Result};

/// Legacy field names and their current spelling.
const LEGACY_FIELDS: &[(&str, &str)] = &[("comment", "description"), ("return_type", "results")];

/// Namespace → native key → raw native record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    namespaces: Map<String, Value>,
}

impl Catalog {
    /// Parses a catalog document.
    ///
    /// # Errors
    /// Returns an error if the text is not JSON or not a JSON object
    pub fn from_json_str(text: &str) -> Result<Self> {
        Self::from_value(from_str(text)?)
    }

    /// Wraps an already parsed catalog document.
    ///
    /// # Errors
    /// Returns [`Error::MalformedCatalog`] if the document is not an object
    pub fn from_value(document: Value) -> Result<Self> {
        match document {
            Value::Object(namespaces) => Ok(Self { namespaces }),
            other => Err(Error::MalformedCatalog(format!(
                "expected an object of namespaces, found {}",
                json_kind(&other)
            ))),
        }
    }

    /// Appends another catalog.
    ///
    /// Namespaces already present keep their position and receive the new
    /// entries; a repeated native key replaces the earlier record.
    pub fn merge(&mut self, other: Self) {
        for (namespace, incoming) in other.namespaces {
            let Some(existing) = self.namespaces.get_mut(&namespace) else {
                self.namespaces.insert(namespace, incoming);
                continue;
            };
            match (existing, incoming) {
                (Value::Object(current), Value::Object(additions)) => current.extend(additions),
                (slot, replacement) => {
                    warn!("Namespace `{namespace}` is not an object in every catalog, replacing it");
                    *slot = replacement;
                }
            }
        }
    }

    /// Namespaces with their raw entries, in catalog order.
    pub fn namespaces(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.namespaces
            .iter()
            .map(|(name, entries)| (name.as_str(), entries))
    }

    /// Namespace names in catalog order.
    pub fn namespace_names(&self) -> Vec<String> {
        self.namespaces.keys().cloned().collect()
    }

    /// Number of native records across all well-formed namespaces.
    pub fn native_count(&self) -> usize {
        self.namespaces
            .values()
            .filter_map(Value::as_object)
            .map(Map::len)
            .sum()
    }

    /// Number of namespaces.
    pub fn len(&self) -> usize {
        self.namespaces.len()
    }

    /// Whether the catalog has no namespaces.
    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }
}

/// Renames legacy fields to their current names.
///
/// A legacy field is only moved when the current field is absent.
pub fn normalize_legacy_fields(record: &mut Map<String, Value>) {
    for &(legacy, current) in LEGACY_FIELDS {
        if record.contains_key(current) {
            continue;
        }
        if let Some(value) = record.remove(legacy) {
            record.insert(current.to_owned(), value);
        }
    }
}

/// Parses one native record after legacy-field normalization.
///
/// # Errors
/// Returns [`Error::MalformedNative`] if the record is not an object or lacks
/// required fields such as `params`
pub fn parse_native(namespace: &str, key: &str, record: &Value) -> Result<NativeDefinition> {
    let malformed = |reason: String| Error::MalformedNative {
        namespace: namespace.to_owned(),
        key: key.to_owned(),
        reason,
    };

    let Value::Object(fields) = record else {
        return Err(malformed(format!("expected an object, found {}", json_kind(record))));
    };

    let mut fields = fields.clone();
    normalize_legacy_fields(&mut fields);
    from_value(Value::Object(fields)).map_err(|error| malformed(error.to_string()))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_namespace_order_is_preserved() {
        let catalog = Catalog::from_json_str(r#"{"ZEBRA": {}, "APP": {}, "MISC": {}}"#)
            .expect("catalog should parse");
        assert_eq!(catalog.namespace_names(), vec!["ZEBRA", "APP", "MISC"]);
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_non_object_document_rejected() {
        let error = Catalog::from_json_str("[1, 2]").unwrap_err();
        assert!(matches!(error, Error::MalformedCatalog(_)));
    }

    #[test]
    fn test_native_count_ignores_malformed_namespaces() {
        let catalog = Catalog::from_value(json!({
            "PED": {"0x1": {}, "0x2": {}},
            "BROKEN": "oops"
        }))
        .expect("catalog should parse");
        assert_eq!(catalog.native_count(), 2);
    }

    #[test]
    fn test_merge_extends_existing_namespaces() {
        let mut game = Catalog::from_value(json!({"PED": {"0x1": {}}, "CAM": {"0x2": {}}}))
            .expect("catalog should parse");
        let cfx = Catalog::from_value(json!({"CFX": {"0x3": {}}, "PED": {"0x4": {}}}))
            .expect("catalog should parse");

        game.merge(cfx);

        assert_eq!(game.namespace_names(), vec!["PED", "CAM", "CFX"]);
        assert_eq!(game.native_count(), 4);
    }

    #[test]
    fn test_legacy_fields_are_renamed() {
        let mut record = json!({"comment": "old text", "return_type": "BOOL"})
            .as_object()
            .cloned()
            .expect("object literal");
        normalize_legacy_fields(&mut record);

        assert_eq!(record.get("description"), Some(&json!("old text")));
        assert_eq!(record.get("results"), Some(&json!("BOOL")));
        assert!(!record.contains_key("comment"));
    }

    #[test]
    fn test_current_fields_win_over_legacy() {
        let mut record = json!({"description": "new", "comment": "old"})
            .as_object()
            .cloned()
            .expect("object literal");
        normalize_legacy_fields(&mut record);
        assert_eq!(record.get("description"), Some(&json!("new")));
    }

    #[test]
    fn test_parse_native_with_legacy_fields() {
        let native = parse_native(
            "PLAYER",
            "0x8D32347D6D4C40A2",
            &json!({
                "name": "GET_PLAYER_PED",
                "params": [{"name": "playerId", "type": "Player"}],
                "return_type": "Ped",
                "comment": "Returns the ped.",
                "hash": "0x43A66C31C68491C0"
            }),
        )
        .expect("native should parse");

        assert_eq!(native.declared_result(), "Ped");
        assert_eq!(native.description.as_deref(), Some("Returns the ped."));
    }

    #[test]
    fn test_parse_native_rejects_bad_shapes() {
        let missing_params = parse_native("PED", "0x1", &json!({"name": "FOO"})).unwrap_err();
        assert!(matches!(missing_params, Error::MalformedNative { .. }));

        let not_object = parse_native("PED", "0x2", &json!(42)).unwrap_err();
        assert_eq!(
            not_object.to_string(),
            "Malformed native `0x2` in namespace `PED`: expected an object, found a number"
        );
    }
}
