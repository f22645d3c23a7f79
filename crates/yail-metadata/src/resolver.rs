//! Metadata lookups over an [`Environment`].

use crate::{ComponentDescriptor, Environment, ParamDescriptor};
use rhizome_yail_ir::ValueKind;
use rhizome_yail_ir::builders::RUNTIME_NAMESPACE;
use rhizome_yail_syntax_scm::Component;
use serde::Serialize;
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Expand a short type name into the runtime namespace.
pub(crate) fn qualified(component_type: &str) -> Cow<'_, str> {
    if component_type.contains('.') {
        Cow::Borrowed(component_type)
    } else {
        Cow::Owned(format!("{RUNTIME_NAMESPACE}.{component_type}"))
    }
}

/// Kind of a block-level type name. Unknown names read as text.
pub fn normalize_type(raw: Option<&str>) -> ValueKind {
    match raw.map(str::to_ascii_lowercase).as_deref() {
        Some("number" | "color") => ValueKind::Number,
        Some("boolean") => ValueKind::Boolean,
        Some("list") => ValueKind::List,
        Some("component") => ValueKind::Component,
        Some("any") => ValueKind::Any,
        _ => ValueKind::Text,
    }
}

/// Kind of a designer editor type. Unknown editors read as text.
pub fn editor_kind(raw: Option<&str>) -> ValueKind {
    match raw.map(str::to_ascii_lowercase).as_deref() {
        Some("boolean" | "visibility") => ValueKind::Boolean,
        Some("integer" | "non_negative_integer" | "float" | "color") => ValueKind::Number,
        _ => ValueKind::Text,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertySignature {
    pub name: String,
    pub kind: ValueKind,
    pub description: String,
    pub editor_type: Option<String>,
    pub default_value: Option<String>,
    pub read_write: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParamSignature {
    pub name: String,
    /// `None` when the descriptor gives no type.
    pub kind: Option<ValueKind>,
}

impl From<&ParamDescriptor> for ParamSignature {
    fn from(param: &ParamDescriptor) -> Self {
        Self {
            name: param.name.clone(),
            kind: param
                .value_type
                .as_deref()
                .map(|raw| normalize_type(Some(raw))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodSignature {
    pub name: String,
    pub params: Vec<ParamSignature>,
    pub return_kind: ValueKind,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventSignature {
    pub name: String,
    pub params: Vec<ParamSignature>,
    pub description: String,
}

impl EventSignature {
    pub fn param_names(&self) -> Vec<String> {
        self.params.iter().map(|param| param.name.clone()).collect()
    }
}

/// A component instance whose type has no descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnsupportedComponent {
    pub name: String,
    pub component_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub valid: Vec<String>,
    pub unsupported: Vec<UnsupportedComponent>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.unsupported.is_empty()
    }

    pub fn messages(&self) -> Vec<String> {
        self.unsupported
            .iter()
            .map(|c| format!("Unsupported component: {} ({})", c.component_type, c.name))
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComponentStatistics {
    pub total: usize,
    pub visible: usize,
    pub non_visible: usize,
    pub categories: BTreeMap<String, usize>,
}

/// Read-only metadata queries against one environment.
#[derive(Debug, Clone, Copy)]
pub struct ComponentMetadata<'env> {
    env: &'env Environment,
}

impl<'env> ComponentMetadata<'env> {
    pub fn new(env: &'env Environment) -> Self {
        Self { env }
    }

    pub fn environment(&self) -> &'env Environment {
        self.env
    }

    pub fn resolve(&self, component_type: &str) -> Option<&'env ComponentDescriptor> {
        let found = self.env.descriptor(component_type);
        if found.is_none() {
            tracing::debug!(component_type, "no descriptor for component type");
        }
        found
    }

    pub fn supported_types(&self) -> Vec<&'env str> {
        self.env
            .descriptors()
            .iter()
            .map(|d| d.component_type.as_str())
            .collect()
    }

    /// Property signature, preferring the block-level declaration over the
    /// designer one.
    pub fn property(&self, component_type: &str, name: &str) -> Option<PropertySignature> {
        let descriptor = self.resolve(component_type)?;
        let block = descriptor.block_properties.iter().find(|p| p.name == name);
        let editor = descriptor.properties.iter().find(|p| p.name == name);

        let block_kind = block.map(|p| normalize_type(p.value_type.as_deref()));
        let editor_kind = editor.map(|p| editor_kind(p.editor_type.as_deref()));
        if let (Some(block_kind), Some(editor_kind)) = (block_kind, editor_kind)
            && block_kind != editor_kind
        {
            tracing::warn!(
                component_type,
                property = name,
                %block_kind,
                %editor_kind,
                "block and designer property kinds disagree; using block kind"
            );
        }

        let kind = block_kind.or(editor_kind)?;
        Some(PropertySignature {
            name: name.to_string(),
            kind,
            description: block.map(|p| p.description.clone()).unwrap_or_default(),
            editor_type: editor.and_then(|p| p.editor_type.clone()),
            default_value: editor.and_then(|p| p.default_value.clone()),
            read_write: block.and_then(|p| p.rw.clone()),
        })
    }

    pub fn method(&self, component_type: &str, name: &str) -> Option<MethodSignature> {
        let method = self
            .resolve(component_type)?
            .methods
            .iter()
            .find(|m| m.name == name)?;
        Some(MethodSignature {
            name: method.name.clone(),
            params: method.params.iter().map(ParamSignature::from).collect(),
            // No return type means the method is void, which reads as text.
            return_kind: normalize_type(Some(method.return_type.as_deref().unwrap_or("void"))),
            description: method.description.clone(),
        })
    }

    pub fn event(&self, component_type: &str, name: &str) -> Option<EventSignature> {
        let event = self
            .resolve(component_type)?
            .events
            .iter()
            .find(|e| e.name == name)?;
        Some(EventSignature {
            name: event.name.clone(),
            params: event.params.iter().map(ParamSignature::from).collect(),
            description: event.description.clone(),
        })
    }

    pub fn category(&self, component_type: &str) -> String {
        self.resolve(component_type)
            .and_then(|d| d.category_string.clone())
            .unwrap_or_else(|| "UNKNOWN".to_string())
    }

    pub fn is_visible(&self, component_type: &str) -> bool {
        self.resolve(component_type)
            .is_none_or(|descriptor| !descriptor.non_visible)
    }

    pub fn version(&self, component_type: &str) -> String {
        self.resolve(component_type)
            .and_then(|d| d.version.clone())
            .unwrap_or_else(|| "1".to_string())
    }

    /// Partition components into supported and unsupported ones. Never fails.
    pub fn validate_components<'a>(
        &self,
        components: impl IntoIterator<Item = &'a Component>,
    ) -> ValidationReport {
        let mut report = ValidationReport::default();
        for component in components {
            if self.env.is_supported(&component.component_type) {
                report.valid.push(component.name.clone());
            } else {
                tracing::warn!(
                    name = %component.name,
                    component_type = %component.component_type,
                    "unsupported component"
                );
                report.unsupported.push(UnsupportedComponent {
                    name: component.name.clone(),
                    component_type: component.component_type.clone(),
                });
            }
        }
        report
    }

    pub fn statistics(&self) -> ComponentStatistics {
        let mut stats = ComponentStatistics::default();
        for descriptor in self.env.descriptors() {
            stats.total += 1;
            if descriptor.non_visible {
                stats.non_visible += 1;
            } else {
                stats.visible += 1;
            }
            let category = descriptor
                .category_string
                .clone()
                .unwrap_or_else(|| "UNKNOWN".to_string());
            *stats.categories.entry(category).or_insert(0) += 1;
        }
        stats
    }
}
