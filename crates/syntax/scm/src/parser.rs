//! Wrapper extraction and JSON decoding.

use crate::{Component, ScreenDocument};
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScmError {
    #[error("no #|$JSON ... |# block found")]
    MissingJsonBlock,

    #[error("invalid component JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YaVersion: {0}")]
    InvalidVersion(String),
}

#[derive(Deserialize)]
struct RawScreen {
    #[serde(rename = "YaVersion", default)]
    ya_version: Option<Value>,
    #[serde(rename = "Source", default)]
    source: Option<String>,
    #[serde(rename = "Properties")]
    properties: RawComponent,
    #[serde(rename = "authURL", default)]
    auth_url: Option<Value>,
}

#[derive(Deserialize)]
struct RawComponent {
    #[serde(rename = "$Name")]
    name: String,
    #[serde(rename = "$Type")]
    component_type: String,
    #[serde(rename = "$Version", default)]
    version: Option<Value>,
    #[serde(rename = "Uuid", default)]
    uuid: Option<Value>,
    #[serde(rename = "$Components", default)]
    components: Vec<RawComponent>,
    #[serde(flatten)]
    rest: Map<String, Value>,
}

/// Parse a `.scm` document.
pub fn parse(text: &str) -> Result<ScreenDocument, ScmError> {
    let payload = extract_payload(text).ok_or(ScmError::MissingJsonBlock)?;
    let raw: RawScreen = serde_json::from_str(payload)?;

    let ya_version = raw.ya_version.as_ref().map(coerce_version).transpose()?;
    let form = build_component(raw.properties, None);
    tracing::debug!(form = %form.name, "parsed component tree");

    Ok(ScreenDocument {
        ya_version,
        source: raw.source,
        auth_url: raw.auth_url,
        form,
    })
}

/// The JSON text between `$JSON` and the closing `|#`.
fn extract_payload(text: &str) -> Option<&str> {
    let start = text.find("#|")?;
    let rest = text[start + 2..].trim_start().strip_prefix("$JSON")?;
    let end = rest.rfind("|#")?;
    Some(rest[..end].trim())
}

fn coerce_version(value: &Value) -> Result<u32, ScmError> {
    match value {
        Value::Number(number) => number
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| ScmError::InvalidVersion(number.to_string())),
        Value::String(text) => text
            .trim()
            .parse()
            .map_err(|_| ScmError::InvalidVersion(text.clone())),
        other => Err(ScmError::InvalidVersion(other.to_string())),
    }
}

fn scalar_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        other => other.to_string(),
    }
}

fn build_component(raw: RawComponent, parent: Option<&str>) -> Component {
    let properties = raw
        .rest
        .into_iter()
        .filter(|(key, _)| !key.starts_with('$') && key != "Uuid")
        .collect();
    let children = raw
        .components
        .into_iter()
        .map(|child| build_component(child, Some(&raw.name)))
        .collect();
    Component {
        version: raw.version.map(scalar_text),
        uuid: raw.uuid.map(scalar_text),
        parent: parent.map(str::to_string),
        properties,
        children,
        name: raw.name,
        component_type: raw.component_type,
    }
}
