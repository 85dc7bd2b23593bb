//! Schema type mapper: capability JSON schema nodes to TypeScript types.
//!
//! The capability vocabulary is closed: `string` (with an optional enum of
//! literals), `integer`/`number`, `array`, and `object`. Anything else is an
//! [`HubgenError::UnsupportedSchema`] error; translation never guesses a
//! fallback type.

use hubgen_core::{AttributeSchema, HubgenError, HubgenResult};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Keys that discriminate the type of a schema node. Pruned from the raw
/// schema before it is embedded in a property doc comment.
const STRUCTURAL_KEYS: [&str; 5] = ["type", "enum", "items", "properties", "required"];

/// A capability schema node, parsed into the closed tagged vocabulary.
///
/// Object properties keep their raw JSON bodies: nested nodes are parsed on
/// recursion, and the raw body (minus structural keys) feeds the property's
/// doc comment.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    /// `string`, optionally narrowed to an enum of literals
    String { enum_values: Option<Vec<String>> },
    /// `integer` or `number`; the output type does not distinguish them
    Number,
    /// `array` with an optional `items` element schema
    Array { items: Option<Box<SchemaNode>> },
    /// `object` with optional named properties and a `required` set
    Object {
        properties: Option<BTreeMap<String, Value>>,
        required: Vec<String>,
    },
}

impl SchemaNode {
    /// Parse a raw schema value, rejecting any type tag outside the closed
    /// vocabulary.
    pub fn parse(raw: &Value) -> HubgenResult<SchemaNode> {
        let tag = raw.get("type").and_then(Value::as_str);
        match tag {
            Some("string") => Ok(SchemaNode::String {
                enum_values: raw.get("enum").and_then(Value::as_array).map(|values| {
                    values
                        .iter()
                        .map(|v| match v.as_str() {
                            Some(s) => s.to_string(),
                            None => v.to_string(),
                        })
                        .collect()
                }),
            }),
            Some("integer") | Some("number") => Ok(SchemaNode::Number),
            Some("array") => {
                // An `items` that is a one-element list means that element.
                let items = match raw.get("items") {
                    None => None,
                    Some(Value::Array(list)) => match list.first() {
                        Some(first) => Some(Box::new(SchemaNode::parse(first)?)),
                        None => None,
                    },
                    Some(single) => Some(Box::new(SchemaNode::parse(single)?)),
                };
                Ok(SchemaNode::Array { items })
            }
            Some("object") => Ok(SchemaNode::Object {
                properties: raw
                    .get("properties")
                    .and_then(Value::as_object)
                    .map(|props| {
                        props
                            .iter()
                            .map(|(k, v)| (k.clone(), v.clone()))
                            .collect::<BTreeMap<_, _>>()
                    }),
                required: raw
                    .get("required")
                    .and_then(Value::as_array)
                    .map(|values| {
                        values
                            .iter()
                            .filter_map(Value::as_str)
                            .map(str::to_string)
                            .collect()
                    })
                    .unwrap_or_default(),
            }),
            other => Err(HubgenError::UnsupportedSchema(format!(
                "unknown type tag {:?}",
                other.unwrap_or("<absent>")
            ))),
        }
    }
}

/// Render a raw schema node as a TypeScript type expression.
///
/// `required_sensitive` controls optionality at the direct properties level
/// of an object node: when true, a property listed in the node's `required`
/// set loses its `?` marker; in relaxed mode every property carries one.
/// Recursion always descends in relaxed mode, matching the attribute `data`
/// sub-schema contract.
pub fn render_type(raw: &Value, required_sensitive: bool) -> HubgenResult<String> {
    match SchemaNode::parse(raw)? {
        SchemaNode::String { enum_values } => match enum_values {
            Some(values) => Ok(values
                .iter()
                .map(|v| format!("\"{v}\""))
                .collect::<Vec<_>>()
                .join("|")),
            None => Ok("string".to_string()),
        },
        SchemaNode::Number => Ok("number".to_string()),
        SchemaNode::Array { items } => match items {
            Some(_) => {
                // Re-render from the raw items value so nested object
                // properties keep their doc payloads.
                let element = match raw.get("items") {
                    Some(Value::Array(list)) => list.first().cloned().unwrap_or(Value::Null),
                    Some(single) => single.clone(),
                    None => Value::Null,
                };
                Ok(format!("{}[]", render_type(&element, false)?))
            }
            None => Ok("any[]".to_string()),
        },
        SchemaNode::Object {
            properties,
            required,
        } => match properties {
            Some(props) => {
                let mut rendered = Vec::new();
                for (name, body) in &props {
                    let optional = if required_sensitive && required.iter().any(|r| r == name) {
                        ""
                    } else {
                        "?"
                    };
                    rendered.push(format!(
                        "\n/**\n * {}\n */\n\"{}\"{}: {}",
                        pruned_doc(body),
                        name,
                        optional,
                        render_type(body, false)?
                    ));
                }
                Ok(format!("{{{}}}", rendered.join(",")))
            }
            None => Ok("any".to_string()),
        },
    }
}

/// Render the attribute-level wrapper: always a `value` field, a `unit`
/// field only if present, and a `data` field (required-sensitive) only if
/// present. Each is optional unless named in the wrapper's `required` list.
pub fn render_attribute(schema: &AttributeSchema) -> HubgenResult<String> {
    let marker = |key: &str| {
        if schema.required.iter().any(|r| r == key) {
            ""
        } else {
            "?"
        }
    };

    let mut fields = Vec::new();
    fields.push(format!(
        "value{}: {}",
        marker("value"),
        render_type(&schema.properties.value, false)?
    ));
    if let Some(unit) = &schema.properties.unit {
        fields.push(format!("unit{}: {}", marker("unit"), render_type(unit, false)?));
    }
    if let Some(data) = &schema.properties.data {
        fields.push(format!("data{}: {}", marker("data"), render_type(data, true)?));
    }
    Ok(fields.join(","))
}

/// Canonical serialization of a raw schema body with the structural keys
/// removed, for embedding in a doc comment. Key order is lexicographic, so
/// regeneration from unchanged source is byte-identical.
fn pruned_doc(body: &Value) -> String {
    match body.as_object() {
        Some(map) => {
            let pruned: Map<String, Value> = map
                .iter()
                .filter(|(key, _)| !STRUCTURAL_KEYS.contains(&key.as_str()))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect();
            Value::Object(pruned).to_string()
        }
        None => body.to_string(),
    }
}
