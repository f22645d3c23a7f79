//! Component descriptor definitions.
//!
//! Descriptors are the JSON records published for every built-in component
//! and extension. Each one lists the component's designer (editor)
//! properties, block-level properties, methods and events. Fields the
//! compiler does not need are tolerated and ignored; every field is optional
//! on input.

use serde::{Deserialize, Deserializer, Serialize};

/// Description of one component type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComponentDescriptor {
    /// Fully-qualified type (e.g. `com.google.appinventor.components.runtime.Button`)
    #[serde(rename = "type")]
    pub component_type: String,
    /// Short display name (e.g. `Button`)
    pub name: String,
    /// Whether the component ships as an extension
    #[serde(deserialize_with = "flag")]
    pub external: bool,
    /// Component version
    #[serde(deserialize_with = "loose_string")]
    pub version: Option<String>,
    /// Palette category (e.g. `USERINTERFACE`)
    pub category_string: Option<String>,
    /// Documentation text
    pub help_string: String,
    /// Whether the component has no on-screen presence
    #[serde(deserialize_with = "flag")]
    pub non_visible: bool,
    /// Designer properties
    pub properties: Vec<EditorProperty>,
    /// Properties accessible from blocks
    pub block_properties: Vec<BlockProperty>,
    /// Callable methods
    pub methods: Vec<MethodDescriptor>,
    /// Events the component raises
    pub events: Vec<EventDescriptor>,
}

/// A designer property.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorProperty {
    pub name: String,
    /// Property editor used by the designer (e.g. `color`, `non_negative_integer`)
    pub editor_type: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub default_value: Option<String>,
}

/// A block-accessible property.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockProperty {
    pub name: String,
    pub description: String,
    /// Block type name (e.g. `number`, `text`, `boolean`)
    #[serde(rename = "type")]
    pub value_type: Option<String>,
    /// `read-write`, `read-only`, `write-only` or `invisible`
    pub rw: Option<String>,
    #[serde(deserialize_with = "flag")]
    pub deprecated: bool,
}

/// A method or event parameter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParamDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub value_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MethodDescriptor {
    pub name: String,
    pub description: String,
    pub params: Vec<ParamDescriptor>,
    /// Absent for methods that return nothing
    pub return_type: Option<String>,
    #[serde(deserialize_with = "flag")]
    pub deprecated: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventDescriptor {
    pub name: String,
    pub description: String,
    pub params: Vec<ParamDescriptor>,
    #[serde(deserialize_with = "flag")]
    pub deprecated: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
}

/// Accept `true`, `"true"` and friends.
fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(match Option::<Loose>::deserialize(deserializer)? {
        Some(Loose::Bool(value)) => value,
        Some(Loose::Text(text)) => text.eq_ignore_ascii_case("true"),
        Some(Loose::Number(number)) => number.as_f64().is_some_and(|n| n != 0.0),
        None => false,
    })
}

/// Accept strings, numbers and booleans as text.
fn loose_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Option::<Loose>::deserialize(deserializer)? {
        Some(Loose::Bool(value)) => Some(value.to_string()),
        Some(Loose::Number(number)) => Some(number.to_string()),
        Some(Loose::Text(text)) => Some(text),
        None => None,
    })
}
