//! Named descriptor sets.

use crate::ComponentDescriptor;
use crate::resolver::qualified;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("invalid descriptor JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// The set of component descriptors a project compiles against.
///
/// Environments are immutable once built; [`Environment::extend`] returns a
/// new environment rather than modifying the receiver.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    name: String,
    descriptors: Vec<ComponentDescriptor>,
}

impl Environment {
    pub fn new(name: impl Into<String>, descriptors: Vec<ComponentDescriptor>) -> Self {
        Self {
            name: name.into(),
            descriptors,
        }
    }

    /// Build from a JSON array of descriptors.
    pub fn from_json(name: impl Into<String>, json: &str) -> Result<Self, MetadataError> {
        let descriptors: Vec<ComponentDescriptor> = serde_json::from_str(json)?;
        Ok(Self::new(name, descriptors))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn descriptors(&self) -> &[ComponentDescriptor] {
        &self.descriptors
    }

    /// A copy of this environment with `extensions` appended.
    pub fn extend(&self, extensions: impl IntoIterator<Item = ComponentDescriptor>) -> Self {
        let mut descriptors = self.descriptors.clone();
        descriptors.extend(extensions);
        Self {
            name: self.name.clone(),
            descriptors,
        }
    }

    /// Look up a descriptor by type, qualifying short names first.
    pub fn descriptor(&self, component_type: &str) -> Option<&ComponentDescriptor> {
        let full = qualified(component_type);
        self.descriptors
            .iter()
            .find(|descriptor| descriptor.component_type == full)
    }

    pub fn is_supported(&self, component_type: &str) -> bool {
        self.descriptor(component_type).is_some()
    }
}
