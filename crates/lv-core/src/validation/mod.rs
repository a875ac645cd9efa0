//! Validation gate.
//!
//! A [`Schema`] is a declarative set of per-field rules for one step of a
//! form. Validation is pure: given a schema and the submitted values it
//! either passes or produces a [`FieldErrorMap`] with every failing field,
//! never just the first one, so a screen can show all problems at once.
//!
//! Schemas are plain values owned by whoever defines the step. There is no
//! shared "currently active schema" slot: each validation call receives the
//! schema for the step it is checking, which rules out order-of-mount races
//! between screens.

mod error;
mod rule;
mod schema;

pub use error::FieldErrorMap;
pub use rule::Check;
pub use schema::{FieldRules, Schema, SchemaBuilder};
