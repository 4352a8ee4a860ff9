//! Field schemas for the patient forms.
//!
//! Each function builds the rule list for one input field together with the
//! exact message the screens display. Regexes are compiled once per process,
//! so building a schema is cheap.

use crate::functional::field_schema::FieldSchema;
use crate::functional::validation_rules::{
    DateOfBirth, Email, Length, MustBeTrue, Pattern, Phone, Required,
};

pub const PHONE_MIN_LENGTH: usize = 9;
pub const PHONE_MAX_LENGTH: usize = 15;
pub const PASSWORD_MIN_LENGTH: usize = 6;
pub const PASSWORD_MAX_LENGTH: usize = 128;

pub fn email_schema() -> FieldSchema<str> {
    FieldSchema::new()
        .rule(Required::with_message("Email is required"))
        .rule(Email::with_message("Invalid email address"))
}

/// Length is checked before format so a short number reports "too short"
/// rather than "invalid format".
pub fn phone_schema() -> FieldSchema<str> {
    FieldSchema::new()
        .rule(Length::min(PHONE_MIN_LENGTH).too_short("Phone number must be at least 9 digits"))
        .rule(Length::max(PHONE_MAX_LENGTH).too_long("Phone number must be at most 15 digits"))
        .rule(Phone::with_message("Invalid phone number format"))
}

/// Length bounds only. The stricter checks live in
/// [`crate::utils::password`] and are not applied to the login forms.
pub fn password_schema() -> FieldSchema<str> {
    FieldSchema::new().rule(
        Length::between(PASSWORD_MIN_LENGTH, PASSWORD_MAX_LENGTH)
            .too_short("Password must be at least 6 characters")
            .too_long("Password must be at most 128 characters"),
    )
}

pub fn full_name_schema() -> FieldSchema<str> {
    FieldSchema::new()
        .rule(Required::with_message("Full name is required"))
        .rule(
            Length::between(2, 100)
                .too_short("Full name must be at least 2 characters")
                .too_long("Full name must be at most 100 characters"),
        )
        .rule(Pattern::person_name(
            "Full name can only contain letters, spaces, hyphens, and apostrophes",
        ))
}

/// Date of birth against the local clock's current year.
pub fn date_of_birth_schema() -> FieldSchema<str> {
    FieldSchema::new().rule(DateOfBirth::new()).optional()
}

/// Date of birth against a fixed reference year.
pub fn date_of_birth_schema_as_of(year: i32) -> FieldSchema<str> {
    FieldSchema::new().rule(DateOfBirth::as_of(year)).optional()
}

pub fn address_schema() -> FieldSchema<str> {
    FieldSchema::new()
        .rule(
            Length::between(5, 200)
                .too_short("Address must be at least 5 characters")
                .too_long("Address must be at most 200 characters"),
        )
        .optional()
}

pub fn medical_history_schema() -> FieldSchema<str> {
    FieldSchema::new()
        .rule(Length::max(1000).too_long("Medical history must be at most 1000 characters"))
        .optional()
}

pub fn allergies_schema() -> FieldSchema<str> {
    FieldSchema::new()
        .rule(Length::max(500).too_long("Allergies must be at most 500 characters"))
        .optional()
}

pub fn medications_schema() -> FieldSchema<str> {
    FieldSchema::new()
        .rule(Length::max(500).too_long("Medications must be at most 500 characters"))
        .optional()
}

pub fn insurance_provider_schema() -> FieldSchema<str> {
    FieldSchema::new()
        .rule(
            Length::between(2, 100)
                .too_short("Insurance provider must be at least 2 characters")
                .too_long("Insurance provider must be at most 100 characters"),
        )
        .optional()
}

pub fn insurance_member_id_schema() -> FieldSchema<str> {
    FieldSchema::new()
        .rule(
            Length::between(3, 50)
                .too_short("Member ID must be at least 3 characters")
                .too_long("Member ID must be at most 50 characters"),
        )
        .optional()
}

pub fn telemedicine_consent_schema() -> FieldSchema<bool> {
    FieldSchema::new().rule(MustBeTrue::with_message("You must accept telemedicine consent"))
}

pub fn privacy_consent_schema() -> FieldSchema<bool> {
    FieldSchema::new().rule(MustBeTrue::with_message("You must accept privacy policy"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functional::validation_engine::validate_field;

    #[test]
    fn email_messages() {
        let schema = email_schema();
        assert_eq!(validate_field(&schema, "user@example.com"), None);
        assert_eq!(
            validate_field(&schema, ""),
            Some("Email is required".to_string())
        );
        assert_eq!(
            validate_field(&schema, "invalid-email"),
            Some("Invalid email address".to_string())
        );
    }

    #[test]
    fn phone_length_boundaries() {
        let schema = phone_schema();

        assert_eq!(validate_field(&schema, "050123456"), None); // 9
        assert_eq!(
            validate_field(&schema, "05012345"),
            Some("Phone number must be at least 9 digits".to_string())
        ); // 8
        assert_eq!(validate_field(&schema, "050123456789012"), None); // 15
        assert_eq!(
            validate_field(&schema, "0501234567890123"),
            Some("Phone number must be at most 15 digits".to_string())
        ); // 16
    }

    #[test]
    fn phone_format_message() {
        assert_eq!(
            validate_field(&phone_schema(), "050-123-4567"),
            Some("Invalid phone number format".to_string())
        );
        assert_eq!(validate_field(&phone_schema(), "+971501234567"), None);
    }

    #[test]
    fn password_is_length_only() {
        let schema = password_schema();
        assert_eq!(validate_field(&schema, "abcdef"), None);
        assert_eq!(
            validate_field(&schema, "weak"),
            Some("Password must be at least 6 characters".to_string())
        );
        assert_eq!(
            validate_field(&schema, "x".repeat(129).as_str()),
            Some("Password must be at most 128 characters".to_string())
        );
    }

    #[test]
    fn full_name_rules() {
        let schema = full_name_schema();
        assert_eq!(validate_field(&schema, "Ahmed Al-Mansouri"), None);
        assert_eq!(
            validate_field(&schema, ""),
            Some("Full name is required".to_string())
        );
        assert_eq!(
            validate_field(&schema, "A"),
            Some("Full name must be at least 2 characters".to_string())
        );
        assert_eq!(
            validate_field(&schema, "John 3rd"),
            Some("Full name can only contain letters, spaces, hyphens, and apostrophes".to_string())
        );
    }

    #[test]
    fn optional_fields_accept_empty() {
        for schema in [
            date_of_birth_schema(),
            address_schema(),
            medical_history_schema(),
            allergies_schema(),
            medications_schema(),
            insurance_provider_schema(),
            insurance_member_id_schema(),
        ] {
            assert_eq!(validate_field(&schema, ""), None);
        }
    }

    #[test]
    fn optional_fields_enforce_bounds_when_filled() {
        assert!(validate_field(&address_schema(), "abc").is_some());
        assert!(validate_field(&insurance_provider_schema(), "A").is_some());
        assert!(validate_field(&insurance_member_id_schema(), "AB").is_some());
        assert!(validate_field(&allergies_schema(), "x".repeat(501).as_str()).is_some());
        assert!(validate_field(&medical_history_schema(), "x".repeat(1000).as_str()).is_none());
    }

    #[test]
    fn date_of_birth_with_reference_year() {
        let schema = date_of_birth_schema_as_of(2026);
        assert_eq!(validate_field(&schema, "1990/05/17"), None);
        assert_eq!(
            validate_field(&schema, "2010-01-01"),
            Some("You must be at least 18 years old".to_string())
        );
    }

    #[test]
    fn consent_messages() {
        assert_eq!(validate_field(&telemedicine_consent_schema(), &true), None);
        assert_eq!(
            validate_field(&telemedicine_consent_schema(), &false),
            Some("You must accept telemedicine consent".to_string())
        );
        assert_eq!(
            validate_field(&privacy_consent_schema(), &false),
            Some("You must accept privacy policy".to_string())
        );
    }
}
