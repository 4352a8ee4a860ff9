use crate::{
    functional::field_schema::FieldSchema,
    functional::validation_engine::{validate_form, FieldErrors, FormSchema, FormValidation},
    models::signup::SignUpInput,
    schemas::{password_schema, phone_schema},
};

pub const PASSWORD_MISMATCH_MESSAGE: &str = "Passwords do not match";

/// Login fields plus a confirmation that must repeat the password.
pub struct SignUpSchema {
    phone: FieldSchema<str>,
    password: FieldSchema<str>,
    confirm_password: FieldSchema<str>,
}

impl SignUpSchema {
    pub fn new() -> Self {
        Self {
            phone: phone_schema(),
            password: password_schema(),
            confirm_password: password_schema(),
        }
    }
}

impl Default for SignUpSchema {
    fn default() -> Self {
        Self::new()
    }
}

impl FormSchema for SignUpSchema {
    type Input = SignUpInput;

    fn name(&self) -> &'static str {
        "sign_up"
    }

    fn check_fields(&self, input: &SignUpInput, errors: &mut FieldErrors) {
        errors.check("phone", input.phone.as_str(), &self.phone);
        errors.check("password", input.password.as_str(), &self.password);
        errors.check(
            "confirmPassword",
            input.confirm_password.as_str(),
            &self.confirm_password,
        );
    }

    // Runs even when a field failed, so a mismatch is reported alongside other errors.
    fn refine(&self, input: &SignUpInput, errors: &mut FieldErrors) {
        if input.password != input.confirm_password && !errors.contains("confirmPassword") {
            errors.reject(
                "confirmPassword",
                "PASSWORDS_DO_NOT_MATCH",
                PASSWORD_MISMATCH_MESSAGE,
            );
        }
    }
}

pub fn sign_up_schema() -> SignUpSchema {
    SignUpSchema::new()
}

pub fn validate_sign_up(input: &SignUpInput) -> FormValidation {
    validate_form(&sign_up_schema(), input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sign_up(phone: &str, password: &str, confirm: &str) -> SignUpInput {
        SignUpInput {
            phone: phone.to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[test]
    fn matching_passwords_pass() {
        let result = validate_sign_up(&sign_up("0501234567", "SecurePass123!", "SecurePass123!"));
        assert!(result.valid);
    }

    #[test]
    fn mismatch_is_keyed_to_confirm_password() {
        let result = validate_sign_up(&sign_up("0501234567", "SecurePass123!", "SecurePass124!"));
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.error("confirmPassword"), Some(PASSWORD_MISMATCH_MESSAGE));
    }

    #[test]
    fn mismatch_is_reported_with_other_field_errors() {
        let result = validate_sign_up(&sign_up("050", "abcdef", "abcdeg"));
        assert!(result.has_error("phone"));
        assert_eq!(result.error("confirmPassword"), Some(PASSWORD_MISMATCH_MESSAGE));
    }

    #[test]
    fn short_confirmation_keeps_its_length_message() {
        let result = validate_sign_up(&sign_up("0501234567", "abcdef", "abc"));
        assert_eq!(
            result.error("confirmPassword"),
            Some("Password must be at least 6 characters")
        );
    }

    #[test]
    fn weak_but_long_enough_password_is_accepted() {
        let result = validate_sign_up(&sign_up("0501234567", "aaaaaa", "aaaaaa"));
        assert!(result.valid);
    }
}
