//! Client-side validation and search logic for the telehealth app.
//!
//! Screens build an input record, run it through [`validate_form`] with the
//! matching form schema, and render the returned per-field messages. Every
//! call is synchronous and pure.

pub mod error;
pub mod functional;
pub mod models;
pub mod schemas;
pub mod services;
pub mod utils;

pub use error::SchemaError;
pub use functional::validation_engine::{
    check_field, validate_field, validate_form, validate_form_value, FieldValidation,
    FormValidation, ValidationConfig, ValidationEngine,
};
