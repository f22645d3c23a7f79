//! Component tree model.

use serde::Serialize;
use serde_json::{Map, Value};

/// A designer component. The root of the tree is the screen's form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Component {
    pub name: String,
    /// Short (`Button`) or fully-qualified (`edu.mit.Ext`) type.
    #[serde(rename = "type")]
    pub component_type: String,
    pub version: Option<String>,
    pub uuid: Option<String>,
    /// Name of the enclosing component; `None` for the form.
    pub parent: Option<String>,
    /// Designer properties in document order, reserved keys removed.
    pub properties: Map<String, Value>,
    pub children: Vec<Component>,
}

impl Component {
    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    pub fn is_form(&self) -> bool {
        self.parent.is_none()
    }

    fn walk<'a>(&'a self, out: &mut Vec<&'a Component>) {
        out.push(self);
        for child in &self.children {
            child.walk(out);
        }
    }
}

/// One parsed `.scm` file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreenDocument {
    pub(crate) ya_version: Option<u32>,
    pub(crate) source: Option<String>,
    pub(crate) auth_url: Option<Value>,
    pub(crate) form: Component,
}

impl ScreenDocument {
    pub fn form(&self) -> &Component {
        &self.form
    }

    pub fn form_name(&self) -> &str {
        &self.form.name
    }

    pub fn form_type(&self) -> &str {
        &self.form.component_type
    }

    /// The form's own designer properties.
    pub fn form_properties(&self) -> &Map<String, Value> {
        &self.form.properties
    }

    pub fn ya_version(&self) -> Option<u32> {
        self.ya_version
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn auth_url(&self) -> Option<&Value> {
        self.auth_url.as_ref()
    }

    /// Every component, depth-first, form first.
    pub fn components(&self) -> Vec<&Component> {
        let mut out = Vec::new();
        self.form.walk(&mut out);
        out
    }

    pub fn component(&self, name: &str) -> Option<&Component> {
        self.components()
            .into_iter()
            .find(|component| component.name == name)
    }

    pub fn components_of_type<'a>(&'a self, component_type: &str) -> Vec<&'a Component> {
        self.components()
            .into_iter()
            .filter(|component| component.component_type == component_type)
            .collect()
    }

    /// Number of components including the form.
    pub fn component_count(&self) -> usize {
        self.components().len()
    }
}
