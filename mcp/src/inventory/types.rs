//! Ability records as served by the abilities REST API.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::annotations::AbilityAnnotations;

/// HAL relation carrying the direct execution URL of an ability.
pub const RUN_LINK_RELATION: &str = "wp:action-run";

/// Input schema as declared by an ability.
///
/// The API reports "takes no input" as an empty JSON array rather than an
/// object schema, so the two shapes are kept apart here instead of being
/// inspected at runtime.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum InputSchema {
    /// `[]`, `null`, or missing.
    #[default]
    Empty,
    /// An object-shaped JSON schema.
    Object(Map<String, Value>),
    /// Any other shape (non-empty array, primitive).
    Unsupported(Value),
}

impl From<Value> for InputSchema {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => InputSchema::Empty,
            Value::Array(items) if items.is_empty() => InputSchema::Empty,
            Value::Object(map) => InputSchema::Object(map),
            other => InputSchema::Unsupported(other),
        }
    }
}

impl From<InputSchema> for Value {
    fn from(schema: InputSchema) -> Self {
        match schema {
            InputSchema::Empty => Value::Array(Vec::new()),
            InputSchema::Object(map) => Value::Object(map),
            InputSchema::Unsupported(value) => value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AbilityMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotations: Option<AbilityAnnotations>,
}

/// A named, schema-described operation registered on the WordPress site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ability {
    /// `category/action` identifier.
    pub name: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub input_schema: InputSchema,
    #[serde(default)]
    pub output_schema: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotations: Option<AbilityAnnotations>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<AbilityMeta>,
    #[serde(rename = "_links", default, skip_serializing_if = "HashMap::is_empty")]
    pub links: HashMap<String, Vec<Link>>,
}

impl Ability {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: String::new(),
            description: String::new(),
            category: String::new(),
            input_schema: InputSchema::Empty,
            output_schema: Value::Null,
            annotations: None,
            meta: None,
            links: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_input_schema(mut self, schema: impl Into<InputSchema>) -> Self {
        self.input_schema = schema.into();
        self
    }

    #[must_use]
    pub fn with_annotations(mut self, annotations: AbilityAnnotations) -> Self {
        self.annotations = Some(annotations);
        self
    }

    #[must_use]
    pub fn with_execution_link(mut self, href: impl Into<String>) -> Self {
        self.links.insert(
            RUN_LINK_RELATION.to_string(),
            vec![Link { href: href.into() }],
        );
        self
    }

    /// Declared annotations, top-level first, then `meta.annotations`.
    /// Missing entirely means all hints are `false`.
    pub fn effective_annotations(&self) -> AbilityAnnotations {
        self.annotations
            .or_else(|| self.meta.as_ref().and_then(|m| m.annotations))
            .unwrap_or_default()
    }

    /// Only an explicit `readonly: true` makes an ability side-effect free.
    pub fn is_readonly(&self) -> bool {
        self.effective_annotations().readonly
    }

    pub fn execution_link(&self) -> Option<&str> {
        self.links
            .get(RUN_LINK_RELATION)
            .and_then(|links| links.first())
            .map(|link| link.href.as_str())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_deserialize_full_record() {
        let ability: Ability = serde_json::from_value(json!({
            "name": "core/get-site-info",
            "label": "Get Site Info",
            "description": "Returns site information",
            "category": "core",
            "input_schema": {"type": "object", "properties": {"fields": {"type": "array"}}},
            "output_schema": {"type": "object"},
            "meta": {"annotations": {"readonly": true, "destructive": false, "idempotent": true}},
            "_links": {"wp:action-run": [{"href": "https://example.com/wp-json/wp-abilities/v1/abilities/core/get-site-info/run"}]}
        }))
        .unwrap();

        assert_eq!(ability.name, "core/get-site-info");
        assert!(matches!(ability.input_schema, InputSchema::Object(_)));
        assert!(ability.is_readonly());
        assert!(ability.effective_annotations().idempotent);
        assert_eq!(
            ability.execution_link(),
            Some("https://example.com/wp-json/wp-abilities/v1/abilities/core/get-site-info/run")
        );
    }

    #[test]
    fn test_empty_array_schema_is_empty() {
        let ability: Ability = serde_json::from_value(json!({
            "name": "core/ping",
            "input_schema": []
        }))
        .unwrap();
        assert_eq!(ability.input_schema, InputSchema::Empty);
        assert!(!ability.is_readonly());
        assert_eq!(ability.execution_link(), None);
    }

    #[test]
    fn test_other_schema_shapes() {
        assert_eq!(InputSchema::from(Value::Null), InputSchema::Empty);
        assert!(matches!(
            InputSchema::from(json!(["a"])),
            InputSchema::Unsupported(_)
        ));
        assert!(matches!(
            InputSchema::from(json!("string")),
            InputSchema::Unsupported(_)
        ));
    }

    #[test]
    fn test_top_level_annotations_take_precedence() {
        let ability: Ability = serde_json::from_value(json!({
            "name": "posts/delete",
            "annotations": {"readonly": false, "destructive": true},
            "meta": {"annotations": {"readonly": true}}
        }))
        .unwrap();
        assert!(!ability.is_readonly());
        assert!(ability.effective_annotations().destructive);
    }
}
