//! Block program to YAIL code generation.
//!
//! A [`Generator`] turns one screen (its component tree plus its block
//! workspace) into a YAIL module. Block types dispatch through a
//! [`Registry`] of handlers grouped by block family; handlers run
//! against a per-screen [`Pass`] that tracks inferred variable kinds.

mod blocks;
mod error;
mod generator;
mod infer;
mod options;
mod pass;
mod registry;
mod values;

pub use error::{CompileError, Warning};
pub use generator::{Generator, ScreenOutput, ScreenSource};
pub use options::CompileOptions;
pub use pass::Pass;
pub use registry::{BlockHandler, Entry, Registry};
