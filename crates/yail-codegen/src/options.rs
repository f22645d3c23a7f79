//! Generator configuration.

use crate::CompileError;
use rhizome_yail_ir::builders::{RUNTIME_MODULE, RUNTIME_NAMESPACE};
use serde::{Deserialize, Serialize};

/// Per-project settings, loadable from TOML:
///
/// ```toml
/// package_name = "appinventor.ai_someone.Counter"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompileOptions {
    /// Dotted package the screens are defined in.
    pub package_name: String,
    /// Namespace short component types are qualified with.
    pub runtime_namespace: String,
    /// Runtime module every screen requires.
    pub runtime_require: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            package_name: String::new(),
            runtime_namespace: RUNTIME_NAMESPACE.to_string(),
            runtime_require: RUNTIME_MODULE.to_string(),
        }
    }
}

impl CompileOptions {
    pub fn new(package_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            ..Self::default()
        }
    }

    pub fn from_toml(text: &str) -> Result<Self, CompileError> {
        Ok(toml::from_str(text)?)
    }

    /// Fails when the package name is empty or not a dotted identifier.
    pub fn validate(&self) -> Result<(), CompileError> {
        let package = self.package_name.trim();
        if package.is_empty() {
            return Err(CompileError::MissingInput("package name".into()));
        }
        let well_formed = package.split('.').all(|segment| {
            !segment.is_empty() && segment.chars().all(|c| c.is_alphanumeric() || c == '_')
        });
        if !well_formed {
            return Err(CompileError::InvalidPackageName(self.package_name.clone()));
        }
        Ok(())
    }
}
