//! Prelude for form validation
//!
//! Re-exports the rule, schema and runner types a screen or a new form schema
//! needs, so a single `use telehealth_forms::functional::prelude::*;` covers
//! the common cases.

pub use crate::functional::field_schema::FieldSchema;
pub use crate::functional::validation_engine::{
    check_field, validate_field, validate_form, validate_form_value, FieldErrors,
    FieldValidation, FormSchema, FormValidation, ValidationConfig, ValidationContext,
    ValidationEngine, FORM_ERROR_KEY, FORM_ERROR_MESSAGE,
};
pub use crate::functional::validation_rules::{
    Custom, DateOfBirth, Email, Length, MustBeTrue, Pattern, Phone, Required, ValidationError,
    ValidationResult, ValidationRule,
};
pub use crate::models::login::validators::{login_schema, validate_login, LoginSchema};
pub use crate::models::login::LoginInput;
pub use crate::models::profile::validators::{
    profile_setup_schema, validate_profile_setup, ProfileSetupSchema,
};
pub use crate::models::profile::ProfileSetupInput;
pub use crate::models::signup::validators::{sign_up_schema, validate_sign_up, SignUpSchema};
pub use crate::models::signup::SignUpInput;
pub use crate::schemas::*;
