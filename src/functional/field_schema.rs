//! Field schemas: an ordered list of rules for one input field.
//!
//! Rules run in declaration order and the first failure wins, so a field
//! always reports a single message. A schema is itself a [`ValidationRule`],
//! which lets it be handed to the runner wherever a rule is expected.

use crate::functional::validation_rules::{ValidationResult, ValidationRule};

type BoxedRule<T> = Box<dyn ValidationRule<T> + Send + Sync>;
type SkipCondition<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

pub struct FieldSchema<T: ?Sized> {
    rules: Vec<BoxedRule<T>>,
    skip_when: Option<SkipCondition<T>>,
}

impl<T: ?Sized> FieldSchema<T> {
    /// Create a new schema with no rules; it accepts every value
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            skip_when: None,
        }
    }

    /// Append a rule; rules are checked in the order they are added
    pub fn rule<R>(mut self, rule: R) -> Self
    where
        R: ValidationRule<T> + Send + Sync + 'static,
    {
        self.rules.push(Box::new(rule));
        self
    }

    /// Accept the value without running any rule when `condition` holds
    pub fn skip_when<F>(mut self, condition: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.skip_when = Some(Box::new(condition));
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FieldSchema<str> {
    /// Treat the empty string as "not provided" and accept it.
    pub fn optional(self) -> Self {
        self.skip_when(|value: &str| value.is_empty())
    }
}

impl<T: ?Sized> Default for FieldSchema<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> ValidationRule<T> for FieldSchema<T> {
    fn validate(&self, value: &T, field_name: &str) -> ValidationResult<()> {
        if let Some(skip) = &self.skip_when {
            if skip(value) {
                return Ok(());
            }
        }

        for rule in &self.rules {
            rule.validate(value, field_name)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functional::validation_rules::{Length, MustBeTrue, Required};

    #[test]
    fn empty_schema_accepts_anything() {
        let schema = FieldSchema::<str>::new();
        assert!(schema.is_empty());
        assert!(schema.validate("", "field").is_ok());
    }

    #[test]
    fn first_failing_rule_wins() {
        let schema = FieldSchema::<str>::new()
            .rule(Required::with_message("first"))
            .rule(Length::min(3).too_short("second"));

        assert_eq!(schema.len(), 2);
        assert_eq!(schema.validate("", "field").unwrap_err().message, "first");
        assert_eq!(schema.validate("ab", "field").unwrap_err().message, "second");
        assert!(schema.validate("abc", "field").is_ok());
    }

    #[test]
    fn optional_schema_skips_empty_values() {
        let schema = FieldSchema::<str>::new()
            .rule(Length::between(5, 10))
            .optional();

        assert!(schema.validate("", "address").is_ok());
        assert!(schema.validate("abc", "address").is_err());
        assert!(schema.validate("12 Main St", "address").is_ok());
    }

    #[test]
    fn boolean_schema() {
        let schema = FieldSchema::<bool>::new().rule(MustBeTrue::with_message("accept it"));
        assert!(schema.validate(&true, "consent").is_ok());
        assert_eq!(
            schema.validate(&false, "consent").unwrap_err().message,
            "accept it"
        );
    }
}
