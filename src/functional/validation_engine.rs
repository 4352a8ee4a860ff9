//! Form Validation Engine
//!
//! Runs a composite form schema against a whole input record and normalizes
//! the outcome into a validity flag plus one message per field path. Field
//! checks run first, then the schema's cross-field refinements. Constraint
//! violations always come back as data; only input that cannot be read as the
//! schema's record at all is collapsed into a generic `form` error.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde_derive::Serialize;

use crate::error::{SchemaError, SchemaResult};
use crate::functional::validation_rules::{ValidationError, ValidationRule};

/// Error key used when the input could not be validated at all
pub const FORM_ERROR_KEY: &str = "form";
/// Message reported under [`FORM_ERROR_KEY`]
pub const FORM_ERROR_MESSAGE: &str = "An unexpected error occurred during validation";

/// Field name used by the single-value helpers when rendering `{}` messages
const VALUE_FIELD: &str = "value";

/// Validation run configuration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationConfig {
    /// Stop after the first failing field
    pub fail_fast: bool,
    /// Maximum number of field errors to collect
    pub max_errors: Option<usize>,
}

/// Validation context for tracking field paths
#[derive(Debug, Clone, Default)]
pub struct ValidationContext {
    /// Current field path (e.g., "insurance.memberId")
    pub field_path: String,
}

impl ValidationContext {
    pub fn new(field_path: &str) -> Self {
        Self {
            field_path: field_path.to_string(),
        }
    }

    /// Context for a top-level record; children are keyed by their bare name.
    pub fn root() -> Self {
        Self::default()
    }

    /// Extends the current context with a nested field name using dot notation.
    ///
    /// # Examples
    ///
    /// ```
    /// let ctx = ValidationContext::new("profile");
    /// assert_eq!(ctx.child("email").field_path, "profile.email");
    /// assert_eq!(ValidationContext::root().child("email").field_path, "email");
    /// ```
    pub fn child(&self, field_name: &str) -> Self {
        let field_path = if self.field_path.is_empty() {
            field_name.to_string()
        } else {
            format!("{}.{}", self.field_path, field_name)
        };

        Self { field_path }
    }
}

/// A named form shape built from field schemas plus cross-field refinements.
pub trait FormSchema {
    /// The record a screen hands over for validation
    type Input;

    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// First stage: check every field on its own.
    fn check_fields(&self, input: &Self::Input, errors: &mut FieldErrors);

    /// Second stage: relationships between fields. Runs after the field stage
    /// and sees the same record.
    fn refine(&self, _input: &Self::Input, _errors: &mut FieldErrors) {}
}

/// Error accumulator handed to a [`FormSchema`] during one validation run.
#[derive(Debug)]
pub struct FieldErrors {
    context: ValidationContext,
    config: ValidationConfig,
    errors: Vec<ValidationError>,
}

impl FieldErrors {
    pub fn new(context: ValidationContext, config: ValidationConfig) -> Self {
        Self {
            context,
            config,
            errors: Vec::new(),
        }
    }

    /// Validate `value` under `field` and record the first failure, if any.
    pub fn check<T, R>(&mut self, field: &str, value: &T, rule: &R)
    where
        T: ?Sized,
        R: ValidationRule<T> + ?Sized,
    {
        if self.is_saturated() {
            return;
        }

        let path = self.context.child(field).field_path;
        if let Err(error) = rule.validate(value, &path) {
            self.errors.push(error.at(&path));
        }
    }

    /// Like [`FieldErrors::check`], but an absent value is always accepted.
    pub fn check_optional<R>(&mut self, field: &str, value: Option<&str>, rule: &R)
    where
        R: ValidationRule<str> + ?Sized,
    {
        if let Some(value) = value {
            self.check(field, value, rule);
        }
    }

    /// Record a failure that does not come from a rule, e.g. a refinement.
    pub fn reject(&mut self, field: &str, code: &str, message: &str) {
        if self.is_saturated() {
            return;
        }

        let path = self.context.child(field).field_path;
        self.errors.push(ValidationError::new(&path, code, message));
    }

    /// Whether `field` (relative to the current context) already has an error.
    pub fn contains(&self, field: &str) -> bool {
        let path = self.context.child(field).field_path;
        self.errors.iter().any(|error| error.field == path)
    }

    /// Whether the configuration forbids collecting any more errors.
    ///
    /// A cap of zero is treated as one, so a failing record always keeps at
    /// least one error.
    pub fn is_saturated(&self) -> bool {
        if self.config.fail_fast && !self.errors.is_empty() {
            return true;
        }
        matches!(self.config.max_errors, Some(max) if self.errors.len() >= max.max(1))
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }
}

/// Outcome of validating a whole record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormValidation {
    pub valid: bool,
    /// One message per failing field path
    pub errors: BTreeMap<String, String>,
}

impl FormValidation {
    pub fn success() -> Self {
        Self {
            valid: true,
            errors: BTreeMap::new(),
        }
    }

    /// Builds the outcome from collected errors, keeping the first message per
    /// field path. An empty list is a success.
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        let mut by_field = BTreeMap::new();
        for error in errors {
            by_field.entry(error.field).or_insert(error.message);
        }

        Self {
            valid: by_field.is_empty(),
            errors: by_field,
        }
    }

    /// The generic outcome used when validation itself could not run.
    pub fn internal_error() -> Self {
        let mut errors = BTreeMap::new();
        errors.insert(FORM_ERROR_KEY.to_string(), FORM_ERROR_MESSAGE.to_string());
        Self {
            valid: false,
            errors,
        }
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn has_error(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }
}

/// Outcome of validating a single value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldValidation {
    pub valid: bool,
    pub error: Option<String>,
}

/// Runs form schemas under a [`ValidationConfig`]
#[derive(Debug, Clone, Default)]
pub struct ValidationEngine {
    config: ValidationConfig,
}

impl ValidationEngine {
    /// Engine that collects every field error.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Runs both stages of `schema` and returns the raw error list.
    pub fn collect<S>(&self, schema: &S, input: &S::Input) -> Vec<ValidationError>
    where
        S: FormSchema + ?Sized,
    {
        let mut errors = FieldErrors::new(ValidationContext::root(), self.config.clone());
        schema.check_fields(input, &mut errors);
        if !errors.is_saturated() {
            schema.refine(input, &mut errors);
        }
        errors.into_errors()
    }

    /// Validate a typed record and collect every failing field.
    pub fn validate_form<S>(&self, schema: &S, input: &S::Input) -> FormValidation
    where
        S: FormSchema + ?Sized,
    {
        let errors = self.collect(schema, input);
        if errors.is_empty() {
            log::debug!("{} form passed validation", schema.name());
            return FormValidation::success();
        }

        log::debug!(
            "{} form failed validation on {} field(s): {}",
            schema.name(),
            errors.len(),
            errors
                .iter()
                .map(|error| format!("{}={}", error.field, error.code))
                .collect::<Vec<_>>()
                .join(", ")
        );
        FormValidation::from_errors(errors)
    }

    /// Validate an untyped JSON object.
    ///
    /// Missing fields fall back to their defaults and then fail the usual
    /// rules. A value that cannot be read as the record at all (wrong JSON
    /// types, not an object) yields [`FormValidation::internal_error`].
    pub fn validate_form_value<S>(&self, schema: &S, value: serde_json::Value) -> FormValidation
    where
        S: FormSchema,
        S::Input: DeserializeOwned,
    {
        match read_input(schema, value) {
            Ok(input) => self.validate_form(schema, &input),
            Err(error) => {
                log::warn!("{}", error);
                FormValidation::internal_error()
            }
        }
    }
}

fn read_input<S>(schema: &S, value: serde_json::Value) -> SchemaResult<S::Input>
where
    S: FormSchema,
    S::Input: DeserializeOwned,
{
    serde_json::from_value(value).map_err(|source| SchemaError::MalformedInput {
        form: schema.name(),
        source,
    })
}

/// Validate a typed record with the default engine.
pub fn validate_form<S>(schema: &S, input: &S::Input) -> FormValidation
where
    S: FormSchema + ?Sized,
{
    ValidationEngine::new().validate_form(schema, input)
}

/// Validate a JSON object with the default engine.
pub fn validate_form_value<S>(schema: &S, value: serde_json::Value) -> FormValidation
where
    S: FormSchema,
    S::Input: DeserializeOwned,
{
    ValidationEngine::new().validate_form_value(schema, value)
}

/// Validate one value; returns the first failure message, or `None`.
///
/// # Examples
///
/// ```
/// let email = email_schema();
/// assert_eq!(validate_field(&email, "user@example.com"), None);
/// assert!(validate_field(&email, "invalid-email").is_some());
/// ```
pub fn validate_field<T, R>(rule: &R, value: &T) -> Option<String>
where
    T: ?Sized,
    R: ValidationRule<T> + ?Sized,
{
    rule.validate(value, VALUE_FIELD)
        .err()
        .map(|error| error.message)
}

/// Validate one value, in the `{ valid, error }` shape.
pub fn check_field<T, R>(rule: &R, value: &T) -> FieldValidation
where
    T: ?Sized,
    R: ValidationRule<T> + ?Sized,
{
    let error = validate_field(rule, value);
    FieldValidation {
        valid: error.is_none(),
        error,
    }
}
