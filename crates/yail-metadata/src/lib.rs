//! Component metadata for the YAIL compiler.
//!
//! An [`Environment`] is a named, immutable set of component descriptors.
//! [`ComponentMetadata`] answers the generator's questions about it: the
//! value kind of a property, the parameters of a method or event, and which
//! components of a screen have no descriptor at all.

mod descriptor;
mod environment;
mod resolver;

pub use descriptor::{
    BlockProperty, ComponentDescriptor, EditorProperty, EventDescriptor, MethodDescriptor,
    ParamDescriptor,
};
pub use environment::{Environment, MetadataError};
pub use resolver::{
    ComponentMetadata, ComponentStatistics, EventSignature, MethodSignature, ParamSignature,
    PropertySignature, UnsupportedComponent, ValidationReport, editor_kind, normalize_type,
};

#[cfg(test)]
mod tests;
