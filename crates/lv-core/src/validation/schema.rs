use serde::{Deserialize, Serialize};

use crate::form::StepValues;
use crate::validation::{Check, FieldErrorMap};

/// All checks declared for one field, evaluated in declaration order.
/// The first failing check supplies the field's message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRules {
    field: String,
    checks: Vec<Check>,
}

impl FieldRules {
    fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            checks: Vec::new(),
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn required(mut self, message: impl Into<String>) -> Self {
        self.checks.push(Check::Required {
            message: message.into(),
        });
        self
    }

    pub fn email(mut self, message: impl Into<String>) -> Self {
        self.checks.push(Check::Email {
            message: message.into(),
        });
        self
    }

    pub fn url(mut self, message: impl Into<String>) -> Self {
        self.checks.push(Check::Url {
            message: message.into(),
        });
        self
    }

    pub fn min_len(mut self, len: usize, message: impl Into<String>) -> Self {
        self.checks.push(Check::MinLen {
            len,
            message: message.into(),
        });
        self
    }

    pub fn max_len(mut self, len: usize, message: impl Into<String>) -> Self {
        self.checks.push(Check::MaxLen {
            len,
            message: message.into(),
        });
        self
    }

    fn first_failure(&self, values: &StepValues) -> Option<&str> {
        self.checks
            .iter()
            .find_map(|check| check.evaluate(values.get(&self.field)).err())
    }
}

/// Declarative per-field validation rules for one step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    rules: Vec<FieldRules>,
}

impl Schema {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    /// Validate a whole step submission.
    ///
    /// Collects every failing field in a single pass (no abort-early), one
    /// message per field.
    pub fn validate(&self, values: &StepValues) -> Result<(), FieldErrorMap> {
        let mut errors = FieldErrorMap::new();
        for rules in &self.rules {
            if let Some(message) = rules.first_failure(values) {
                errors.insert(rules.field(), message);
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Re-validate a single field, for on-blur / on-change feedback.
    ///
    /// A field the schema says nothing about is trivially valid.
    pub fn validate_field(&self, field: &str, values: &StepValues) -> Result<(), String> {
        match self.rules.iter().find(|rules| rules.field() == field) {
            Some(rules) => match rules.first_failure(values) {
                Some(message) => Err(message.to_string()),
                None => Ok(()),
            },
            None => Ok(()),
        }
    }

    /// Validate against an optional schema; no schema trivially passes.
    pub fn validate_opt(schema: Option<&Schema>, values: &StepValues) -> Result<(), FieldErrorMap> {
        match schema {
            Some(schema) => schema.validate(values),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Default)]
pub struct SchemaBuilder {
    rules: Vec<FieldRules>,
}

impl SchemaBuilder {
    /// Declare the rules for one field.
    pub fn field(
        mut self,
        name: impl Into<String>,
        build: impl FnOnce(FieldRules) -> FieldRules,
    ) -> Self {
        self.rules.push(build(FieldRules::new(name)));
        self
    }

    pub fn build(self) -> Schema {
        Schema { rules: self.rules }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials_schema() -> Schema {
        Schema::builder()
            .field("email", |f| {
                f.required("The email is required").email("Invalid email")
            })
            .field("password", |f| f.required("The password is required"))
            .build()
    }

    #[test]
    fn valid_values_pass() {
        let values = StepValues::new()
            .with("email", "ana@x.com")
            .with("password", "secret1");

        assert!(credentials_schema().validate(&values).is_ok());
    }

    #[test]
    fn all_failing_fields_are_collected_in_one_pass() {
        let values = StepValues::new().with("email", "not-an-email");

        let errors = credentials_schema().validate(&values).unwrap_err();

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("email"), Some("Invalid email"));
        assert_eq!(errors.get("password"), Some("The password is required"));
    }

    #[test]
    fn first_failing_check_supplies_the_message() {
        let values = StepValues::new().with("password", "secret1");

        let errors = credentials_schema().validate(&values).unwrap_err();

        // required fires before the email format check
        assert_eq!(errors.get("email"), Some("The email is required"));
    }

    #[test]
    fn single_field_revalidation() {
        let schema = credentials_schema();
        let bad = StepValues::new().with("email", "nope");
        let good = StepValues::new().with("email", "ana@x.com");

        assert_eq!(
            schema.validate_field("email", &bad),
            Err("Invalid email".to_string())
        );
        assert_eq!(schema.validate_field("email", &good), Ok(()));
        // unknown fields are not the schema's concern
        assert_eq!(schema.validate_field("company", &bad), Ok(()));
    }

    #[test]
    fn missing_schema_trivially_passes() {
        let values = StepValues::new().with("anything", "at all");
        assert!(Schema::validate_opt(None, &values).is_ok());
    }
}
