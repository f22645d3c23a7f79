//! Compilation errors and recoverable warnings.

use serde::Serialize;
use thiserror::Error;

/// Errors that abort compilation of a screen.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("missing input: {0}")]
    MissingInput(String),

    #[error("invalid package name: {0:?}")]
    InvalidPackageName(String),

    #[error("block XML: {0}")]
    Bky(#[from] rhizome_yail_syntax_bky::BkyError),

    #[error("component tree: {0}")]
    Scm(#[from] rhizome_yail_syntax_scm::ScmError),

    #[error("no generator for block type: {0}")]
    UnresolvedSymbol(String),

    #[error("invalid options: {0}")]
    Options(#[from] toml::de::Error),
}

/// Problems that do not stop generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
pub enum Warning {
    #[error("Unsupported component: {component_type} ({name})")]
    UnsupportedComponent {
        name: String,
        component_type: String,
    },

    #[error("no metadata for {component_type}.{member}")]
    MissingMetadata {
        component_type: String,
        member: String,
    },

    #[error("unhandled block type '{0}'")]
    UnhandledBlock(String),
}
