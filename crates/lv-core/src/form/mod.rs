//! Form field values.
//!
//! A step screen submits its inputs as a flat field-name → value map.
//! The same map shape is what the validation gate checks and what the
//! step accumulator merges into the user draft.

mod value;

pub use value::{FieldValue, StepValues};
