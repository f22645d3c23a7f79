//! Value kinds used by runtime coercion.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The coercion tag attached to property sets, method arguments and
/// primitive calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Any,
    Text,
    Number,
    Boolean,
    List,
    Component,
    Procedure,
    Dictionary,
    Key,
    Pair,
}

impl ValueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Any => "any",
            ValueKind::Text => "text",
            ValueKind::Number => "number",
            ValueKind::Boolean => "boolean",
            ValueKind::List => "list",
            ValueKind::Component => "component",
            ValueKind::Procedure => "procedure",
            ValueKind::Dictionary => "dictionary",
            ValueKind::Key => "key",
            ValueKind::Pair => "pair",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
