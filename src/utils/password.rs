//! Password strength checks.
//!
//! Stricter than the length-only rule the login and sign-up forms apply. Nothing
//! in the form schemas uses this yet; screens may call it to show a strength hint.

use serde_derive::Serialize;

use crate::functional::validation_rules::{ValidationError, ValidationResult, ValidationRule};

pub const STRONG_PASSWORD_MIN_LENGTH: usize = 8;

/// Result of a strength check: every unmet requirement, in a fixed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasswordStrength {
    pub valid: bool,
    pub errors: Vec<String>,
}

fn requirements() -> [(&'static str, &'static str, fn(&str) -> bool); 5] {
    [
        (
            "PASSWORD_TOO_SHORT",
            "Password must be at least 8 characters long",
            |p: &str| p.chars().count() >= STRONG_PASSWORD_MIN_LENGTH,
        ),
        (
            "PASSWORD_NO_UPPERCASE",
            "Password must contain at least one uppercase letter",
            |p: &str| p.chars().any(char::is_uppercase),
        ),
        (
            "PASSWORD_NO_LOWERCASE",
            "Password must contain at least one lowercase letter",
            |p: &str| p.chars().any(char::is_lowercase),
        ),
        (
            "PASSWORD_NO_NUMBER",
            "Password must contain at least one number",
            |p: &str| p.chars().any(|c| c.is_ascii_digit()),
        ),
        (
            "PASSWORD_NO_SPECIAL",
            "Password must contain at least one special character",
            |p: &str| p.chars().any(|c| !c.is_alphanumeric() && !c.is_whitespace()),
        ),
    ]
}

pub fn check_password_strength(password: &str) -> PasswordStrength {
    let errors: Vec<String> = requirements()
        .iter()
        .filter(|(_, _, met)| !met(password))
        .map(|(_, message, _)| message.to_string())
        .collect();

    PasswordStrength {
        valid: errors.is_empty(),
        errors,
    }
}

/// The strength requirements as a rule; reports the first unmet one.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrongPassword;

impl ValidationRule<str> for StrongPassword {
    fn validate(&self, value: &str, field_name: &str) -> ValidationResult<()> {
        match requirements().iter().find(|(_, _, met)| !met(value)) {
            Some((code, message, _)) => Err(ValidationError::new(field_name, code, message)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strong_password_passes() {
        let strength = check_password_strength("SecurePass123!");
        assert!(strength.valid);
        assert!(strength.errors.is_empty());
        assert!(StrongPassword.validate("SecurePass123!", "password").is_ok());
    }

    #[test]
    fn reports_every_missing_requirement() {
        let strength = check_password_strength("abc");
        assert!(!strength.valid);
        assert_eq!(
            strength.errors,
            vec![
                "Password must be at least 8 characters long",
                "Password must contain at least one uppercase letter",
                "Password must contain at least one number",
                "Password must contain at least one special character",
            ]
        );
    }

    #[test]
    fn rule_reports_first_missing_requirement() {
        let error = StrongPassword
            .validate("lowercaseonly1!", "password")
            .unwrap_err();
        assert_eq!(error.code, "PASSWORD_NO_UPPERCASE");
        assert_eq!(error.field, "password");
    }

    #[test]
    fn whitespace_is_not_a_special_character() {
        let strength = check_password_strength("Secure Pass123");
        assert_eq!(
            strength.errors,
            vec!["Password must contain at least one special character"]
        );
    }
}
