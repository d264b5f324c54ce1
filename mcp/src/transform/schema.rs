//! Input schema canonicalization.

use serde_json::{Map, Value};

use crate::inventory::{Ability, InputSchema};

/// `{"type": "object", "properties": {}}`: the schema of a tool that takes no input.
pub fn empty_object_schema() -> Map<String, Value> {
    let mut schema = Map::new();
    schema.insert("type".to_string(), Value::String("object".to_string()));
    schema.insert("properties".to_string(), Value::Object(Map::new()));
    schema
}

/// Normalize any declared input schema into an object schema. Never fails.
///
/// Object schemas keep every field verbatim except `type`, which is forced to
/// `"object"`. Every other shape becomes the empty object schema.
pub fn canonicalize(schema: &InputSchema) -> Map<String, Value> {
    match schema {
        InputSchema::Object(fields) => {
            let mut canonical = fields.clone();
            canonical.insert("type".to_string(), Value::String("object".to_string()));
            canonical
        }
        InputSchema::Empty | InputSchema::Unsupported(_) => empty_object_schema(),
    }
}

/// True when the declared schema is an object schema with a `properties` field.
pub fn schema_accepts_input(schema: &InputSchema) -> bool {
    match schema {
        InputSchema::Object(fields) => {
            fields.get("type").and_then(Value::as_str) == Some("object")
                && fields.contains_key("properties")
        }
        InputSchema::Empty | InputSchema::Unsupported(_) => false,
    }
}

pub fn accepts_input(ability: &Ability) -> bool {
    schema_accepts_input(&ability.input_schema)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn object(value: Value) -> InputSchema {
        InputSchema::from(value)
    }

    #[test]
    fn test_empty_sequence_becomes_empty_object() {
        let canonical = canonicalize(&InputSchema::from(json!([])));
        assert_eq!(Value::Object(canonical), json!({"type": "object", "properties": {}}));
    }

    #[test]
    fn test_non_empty_sequence_becomes_empty_object() {
        let canonical = canonicalize(&InputSchema::from(json!([{"type": "string"}])));
        assert_eq!(Value::Object(canonical), json!({"type": "object", "properties": {}}));

        let canonical = canonicalize(&InputSchema::from(json!(42)));
        assert_eq!(Value::Object(canonical), json!({"type": "object", "properties": {}}));
    }

    #[test]
    fn test_object_fields_preserved_and_type_forced() {
        let raw = json!({
            "type": "array",
            "properties": {"id": {"type": "integer"}},
            "required": ["id"],
            "additionalProperties": false,
            "x-vendor": {"ui": "hidden"}
        });
        let canonical = canonicalize(&object(raw.clone()));

        assert_eq!(canonical["type"], "object");
        for (key, value) in raw.as_object().unwrap() {
            if key != "type" {
                assert_eq!(&canonical[key], value, "field {key} preserved");
            }
        }
        assert_eq!(canonical.len(), raw.as_object().unwrap().len());
    }

    #[test]
    fn test_object_without_type_gains_type() {
        let canonical = canonicalize(&object(json!({"properties": {}})));
        assert_eq!(Value::Object(canonical), json!({"type": "object", "properties": {}}));
    }

    #[test]
    fn test_accepts_input() {
        assert!(schema_accepts_input(&object(
            json!({"type": "object", "properties": {"id": {"type": "integer"}}})
        )));
        assert!(schema_accepts_input(&object(json!({"type": "object", "properties": {}}))));

        assert!(!schema_accepts_input(&InputSchema::Empty));
        assert!(!schema_accepts_input(&object(json!({"type": "object"}))));
        assert!(!schema_accepts_input(&object(json!({"properties": {}}))));
        assert!(!schema_accepts_input(&object(json!(["id"]))));
    }
}
