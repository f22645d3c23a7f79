//! YAIL intermediate representation.
//!
//! YAIL is the Scheme dialect executed by the component runtime. This crate
//! holds the expression tree produced by the code generator, its textual
//! printer, the value kinds used for runtime coercion, and builders for the
//! fixed YAIL constructs (forms, components, events, primitive calls).

pub mod builders;
mod expr;
mod kind;

pub use expr::{CommentStyle, Expr, escape_string, format_number};
pub use kind::ValueKind;

#[cfg(test)]
mod tests;
