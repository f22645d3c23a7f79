//! Component-tree parser.
//!
//! A `.scm` file is a JSON document wrapped as `#|\n$JSON\n{...}\n|#`
//! describing one screen: the form and its nested components with their
//! designer properties.

mod component;
mod parser;

pub use component::{Component, ScreenDocument};
pub use parser::{ScmError, parse};

#[cfg(test)]
mod tests;
