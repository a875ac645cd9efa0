//! # lv-core
//!
//! Core domain models and business logic for the Levare client.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod form;
pub mod notice;
pub mod ports;
pub mod session;
pub mod signup;
pub mod user;
pub mod validation;

// Re-export commonly used types at the crate root
pub use form::{FieldValue, StepValues};
pub use session::SessionState;
pub use signup::{Progress, StepFlow, WizardState};
pub use user::{AccessToken, CreatedUser, NewUser, UserDraft, UserProfile};
pub use validation::{FieldErrorMap, Schema};
