//! Composable Validation Rules
//!
//! Pure field rules that can be stacked into field schemas. Every rule checks a
//! single constraint and carries the message shown next to the field when the
//! constraint fails. Messages may contain `{}`, which is replaced with the
//! field name at validation time.

use std::borrow::Cow;
use std::fmt;

use chrono::{Datelike, Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_derive::Serialize;

/// Cached regex patterns for validation
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9_%+\-]+(?:\.[A-Za-z0-9_%+\-]+)*@(?:[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?\.)+[A-Za-z]{2,}$",
    )
    .unwrap()
});
static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\+?[1-9][0-9]{1,14}|0[0-9]{8,14})$").unwrap());
static PERSON_NAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\p{L} '\-]+$").unwrap());

/// Validation result type for composable validation chains
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validation error with detailed information
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub field: String,
    pub code: String,
    pub message: String,
}

impl ValidationError {
    /// Creates a ValidationError with the provided field name, error code, and message.
    ///
    /// # Examples
    ///
    /// ```
    /// let err = ValidationError::new("email", "INVALID_EMAIL", "Invalid email address");
    /// assert_eq!(err.field, "email");
    /// assert_eq!(err.code, "INVALID_EMAIL");
    /// ```
    pub fn new(field: &str, code: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            code: code.to_string(),
            message: message.to_string(),
        }
    }

    /// Re-keys the error to another field path, keeping code and message.
    pub fn at(mut self, field: &str) -> Self {
        self.field = field.to_string();
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Core validation rule trait for composable validation
pub trait ValidationRule<T: ?Sized> {
    fn validate(&self, value: &T, field_name: &str) -> ValidationResult<()>;
}

impl<T: ?Sized, R: ValidationRule<T> + ?Sized> ValidationRule<T> for Box<R> {
    fn validate(&self, value: &T, field_name: &str) -> ValidationResult<()> {
        (**self).validate(value, field_name)
    }
}

fn render(message: &str, field_name: &str) -> String {
    message.replace("{}", field_name)
}

fn fail(field_name: &str, code: &str, message: &str) -> ValidationResult<()> {
    Err(ValidationError::new(
        field_name,
        code,
        &render(message, field_name),
    ))
}

/// Required field validation - rejects empty or whitespace-only strings
#[derive(Debug, Clone)]
pub struct Required {
    message: Cow<'static, str>,
}

impl Required {
    pub fn new() -> Self {
        Self {
            message: Cow::Borrowed("{} is required"),
        }
    }

    pub fn with_message(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for Required {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationRule<str> for Required {
    /// Fails with code `"REQUIRED"` when the value is empty after trimming.
    ///
    /// # Examples
    ///
    /// ```
    /// let rule = Required::with_message("Email is required");
    /// assert!(rule.validate("a@b.co", "email").is_ok());
    /// assert_eq!(rule.validate("  ", "email").unwrap_err().message, "Email is required");
    /// ```
    fn validate(&self, value: &str, field_name: &str) -> ValidationResult<()> {
        if value.trim().is_empty() {
            return fail(field_name, "REQUIRED", &self.message);
        }
        Ok(())
    }
}

/// String length validation, counted in characters rather than bytes
#[derive(Debug, Clone)]
pub struct Length {
    pub min: Option<usize>,
    pub max: Option<usize>,
    too_short: Option<Cow<'static, str>>,
    too_long: Option<Cow<'static, str>>,
}

impl Length {
    pub fn new(min: Option<usize>, max: Option<usize>) -> Self {
        Self {
            min,
            max,
            too_short: None,
            too_long: None,
        }
    }

    pub fn min(min: usize) -> Self {
        Self::new(Some(min), None)
    }

    pub fn max(max: usize) -> Self {
        Self::new(None, Some(max))
    }

    pub fn between(min: usize, max: usize) -> Self {
        Self::new(Some(min), Some(max))
    }

    /// Overrides the message used when the value is shorter than `min`.
    pub fn too_short(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.too_short = Some(message.into());
        self
    }

    /// Overrides the message used when the value is longer than `max`.
    pub fn too_long(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.too_long = Some(message.into());
        self
    }
}

impl ValidationRule<str> for Length {
    /// Validates that a string's length falls within the rule's optional bounds.
    ///
    /// Fails with code `TOO_SHORT` below `min` and `TOO_LONG` above `max`. The
    /// minimum is checked first.
    ///
    /// # Examples
    ///
    /// ```
    /// let rule = Length::between(2, 4);
    /// assert!(rule.validate("hi", "name").is_ok());
    /// assert!(rule.validate("h", "name").is_err()); // TOO_SHORT
    /// assert!(rule.validate("hello", "name").is_err()); // TOO_LONG
    /// ```
    fn validate(&self, value: &str, field_name: &str) -> ValidationResult<()> {
        let len = value.chars().count();

        if let Some(min) = self.min {
            if len < min {
                let message = match &self.too_short {
                    Some(message) => render(message, field_name),
                    None => format!("{} must be at least {} characters", field_name, min),
                };
                return Err(ValidationError::new(field_name, "TOO_SHORT", &message));
            }
        }

        if let Some(max) = self.max {
            if len > max {
                let message = match &self.too_long {
                    Some(message) => render(message, field_name),
                    None => format!("{} must be at most {} characters", field_name, max),
                };
                return Err(ValidationError::new(field_name, "TOO_LONG", &message));
            }
        }

        Ok(())
    }
}

/// Regex match validation against a process-wide compiled pattern
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: &'static Regex,
    code: &'static str,
    message: Cow<'static, str>,
}

impl Pattern {
    pub fn new(
        regex: &'static Regex,
        code: &'static str,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            regex,
            code,
            message: message.into(),
        }
    }

    /// Letters (any script), spaces, hyphens and apostrophes.
    pub fn person_name(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(&PERSON_NAME_REGEX, "INVALID_NAME", message)
    }
}

impl ValidationRule<str> for Pattern {
    fn validate(&self, value: &str, field_name: &str) -> ValidationResult<()> {
        if !self.regex.is_match(value) {
            return fail(field_name, self.code, &self.message);
        }
        Ok(())
    }
}

/// Email format validation using regex
#[derive(Debug, Clone)]
pub struct Email {
    message: Cow<'static, str>,
}

impl Email {
    pub fn new() -> Self {
        Self {
            message: Cow::Borrowed("{} must be a valid email address"),
        }
    }

    pub fn with_message(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for Email {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationRule<str> for Email {
    /// Validates the `local@domain.tld` shape.
    ///
    /// # Examples
    ///
    /// ```
    /// let rule = Email::new();
    /// assert!(rule.validate("user@example.com", "email").is_ok());
    /// assert!(rule.validate("not-an-email", "email").is_err());
    /// ```
    fn validate(&self, value: &str, field_name: &str) -> ValidationResult<()> {
        if !EMAIL_REGEX.is_match(value) {
            return fail(field_name, "INVALID_EMAIL", &self.message);
        }
        Ok(())
    }
}

/// Phone number format validation.
///
/// Accepts an international number (optional `+`, non-zero leading digit) or a
/// local number starting with `0` followed by 8 to 14 digits. Separators such
/// as spaces or hyphens are rejected. Length bounds are a separate [`Length`]
/// rule so that each bound can carry its own message.
#[derive(Debug, Clone)]
pub struct Phone {
    message: Cow<'static, str>,
}

impl Phone {
    pub fn new() -> Self {
        Self {
            message: Cow::Borrowed("{} must be a valid phone number"),
        }
    }

    pub fn with_message(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for Phone {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationRule<str> for Phone {
    fn validate(&self, value: &str, field_name: &str) -> ValidationResult<()> {
        if !PHONE_REGEX.is_match(value) {
            return fail(field_name, "INVALID_PHONE", &self.message);
        }
        Ok(())
    }
}

/// Boolean validation (must be true)
#[derive(Debug, Clone)]
pub struct MustBeTrue {
    message: Cow<'static, str>,
}

impl MustBeTrue {
    pub fn new() -> Self {
        Self {
            message: Cow::Borrowed("{} must be true"),
        }
    }

    pub fn with_message(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for MustBeTrue {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationRule<bool> for MustBeTrue {
    /// Ensures the boolean value is true.
    ///
    /// `false` is a well-formed boolean, but it fails with code `"MUST_BE_TRUE"`.
    fn validate(&self, value: &bool, field_name: &str) -> ValidationResult<()> {
        if !*value {
            return fail(field_name, "MUST_BE_TRUE", &self.message);
        }
        Ok(())
    }
}

/// Date of birth validation for `YYYY/MM/DD` or `YYYY-MM-DD` strings.
///
/// The age is the reference year minus the birth year. Month and day are not
/// taken into account, so someone whose birthday is still ahead this year is
/// treated as one year older than they are.
#[derive(Debug, Clone)]
pub struct DateOfBirth {
    reference_year: Option<i32>,
    pub min_age: i32,
    pub max_age: i32,
}

impl DateOfBirth {
    pub const EARLIEST_YEAR: i32 = 1900;

    /// Uses the local clock's year as the reference year.
    pub fn new() -> Self {
        Self {
            reference_year: None,
            min_age: 18,
            max_age: 120,
        }
    }

    /// Pins the reference year, for reproducible checks.
    pub fn as_of(year: i32) -> Self {
        Self {
            reference_year: Some(year),
            ..Self::new()
        }
    }

    pub fn reference_year(&self) -> i32 {
        self.reference_year.unwrap_or_else(|| Local::now().year())
    }

    /// Splits the value into numeric year, month and day parts.
    ///
    /// Returns `None` unless there are exactly three non-empty, all-digit parts.
    pub fn parse_parts(value: &str) -> Option<(i64, i64, i64)> {
        let parts: Vec<&str> = value.split(['/', '-']).collect();
        if parts.len() != 3 {
            return None;
        }

        let mut numbers = parts.iter().map(|part| {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                None
            } else {
                part.parse::<i64>().ok()
            }
        });

        let year = numbers.next()??;
        let month = numbers.next()??;
        let day = numbers.next()??;
        Some((year, month, day))
    }
}

impl Default for DateOfBirth {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationRule<str> for DateOfBirth {
    fn validate(&self, value: &str, field_name: &str) -> ValidationResult<()> {
        let current_year = i64::from(self.reference_year());

        let Some((year, month, day)) = Self::parse_parts(value) else {
            return fail(field_name, "INVALID_DATE_FORMAT", "Invalid date format");
        };

        if year < i64::from(Self::EARLIEST_YEAR) || year > current_year {
            return fail(field_name, "INVALID_YEAR", "Invalid birth year");
        }
        if !(1..=12).contains(&month) {
            return fail(field_name, "INVALID_MONTH", "Invalid month");
        }
        if !(1..=31).contains(&day) {
            return fail(field_name, "INVALID_DAY", "Invalid day");
        }
        // Year, month and day are range-checked above, so the casts cannot truncate.
        if NaiveDate::from_ymd_opt(year as i32, month as u32, day as u32).is_none() {
            return fail(field_name, "INVALID_DATE", "Invalid date");
        }

        let age = current_year - year;
        if age < i64::from(self.min_age) {
            return fail(
                field_name,
                "UNDERAGE",
                &format!("You must be at least {} years old", self.min_age),
            );
        }
        if age > i64::from(self.max_age) {
            return fail(
                field_name,
                "AGE_OUT_OF_RANGE",
                "Please enter a valid date of birth",
            );
        }

        Ok(())
    }
}

/// Custom validation using a predicate function
pub struct Custom<F> {
    predicate: F,
    error_code: String,
    error_message: String,
}

impl<F> Custom<F> {
    /// Creates a predicate-based custom validation rule.
    ///
    /// The `predicate` should return `true` when the value is considered valid.
    ///
    /// # Examples
    ///
    /// ```
    /// let rule = Custom::new(|v: &i32| *v > 0, "TOO_SMALL", "{} must be greater than 0");
    /// assert!(rule.validate(&5, "age").is_ok());
    /// assert!(rule.validate(&0, "age").is_err());
    /// ```
    pub fn new(predicate: F, error_code: &str, error_message: &str) -> Self {
        Self {
            predicate,
            error_code: error_code.to_string(),
            error_message: error_message.to_string(),
        }
    }
}

impl<F, T> ValidationRule<T> for Custom<F>
where
    T: ?Sized,
    F: Fn(&T) -> bool,
{
    fn validate(&self, value: &T, field_name: &str) -> ValidationResult<()> {
        if !(self.predicate)(value) {
            return fail(field_name, &self.error_code, &self.error_message);
        }
        Ok(())
    }
}
