use crate::{
    functional::field_schema::FieldSchema,
    functional::validation_engine::{validate_form, FieldErrors, FormSchema, FormValidation},
    models::profile::ProfileSetupInput,
    schemas,
};

/// Every profile setup field, including the two mandatory consents.
pub struct ProfileSetupSchema {
    full_name: FieldSchema<str>,
    phone: FieldSchema<str>,
    email: FieldSchema<str>,
    date_of_birth: FieldSchema<str>,
    address: FieldSchema<str>,
    medical_history: FieldSchema<str>,
    allergies: FieldSchema<str>,
    medications: FieldSchema<str>,
    insurance_provider: FieldSchema<str>,
    insurance_member_id: FieldSchema<str>,
    consent_telemedicine: FieldSchema<bool>,
    consent_privacy: FieldSchema<bool>,
}

impl ProfileSetupSchema {
    /// Ages are computed against the local clock's current year.
    pub fn new() -> Self {
        Self::with_date_of_birth(schemas::date_of_birth_schema())
    }

    /// Ages are computed against `year`.
    pub fn as_of(year: i32) -> Self {
        Self::with_date_of_birth(schemas::date_of_birth_schema_as_of(year))
    }

    fn with_date_of_birth(date_of_birth: FieldSchema<str>) -> Self {
        Self {
            full_name: schemas::full_name_schema(),
            phone: schemas::phone_schema(),
            email: schemas::email_schema(),
            date_of_birth,
            address: schemas::address_schema(),
            medical_history: schemas::medical_history_schema(),
            allergies: schemas::allergies_schema(),
            medications: schemas::medications_schema(),
            insurance_provider: schemas::insurance_provider_schema(),
            insurance_member_id: schemas::insurance_member_id_schema(),
            consent_telemedicine: schemas::telemedicine_consent_schema(),
            consent_privacy: schemas::privacy_consent_schema(),
        }
    }
}

impl Default for ProfileSetupSchema {
    fn default() -> Self {
        Self::new()
    }
}

impl FormSchema for ProfileSetupSchema {
    type Input = ProfileSetupInput;

    fn name(&self) -> &'static str {
        "profile_setup"
    }

    fn check_fields(&self, input: &ProfileSetupInput, errors: &mut FieldErrors) {
        errors.check("fullName", input.full_name.as_str(), &self.full_name);
        errors.check("phone", input.phone.as_str(), &self.phone);
        errors.check("email", input.email.as_str(), &self.email);
        errors.check_optional(
            "dateOfBirth",
            input.date_of_birth.as_deref(),
            &self.date_of_birth,
        );
        errors.check_optional("address", input.address.as_deref(), &self.address);
        errors.check_optional(
            "medicalHistory",
            input.medical_history.as_deref(),
            &self.medical_history,
        );
        errors.check_optional("allergies", input.allergies.as_deref(), &self.allergies);
        errors.check_optional("medications", input.medications.as_deref(), &self.medications);
        errors.check_optional(
            "insuranceProvider",
            input.insurance_provider.as_deref(),
            &self.insurance_provider,
        );
        errors.check_optional(
            "insuranceMemberId",
            input.insurance_member_id.as_deref(),
            &self.insurance_member_id,
        );
        errors.check(
            "consentTelemedicine",
            &input.consent_telemedicine,
            &self.consent_telemedicine,
        );
        errors.check("consentPrivacy", &input.consent_privacy, &self.consent_privacy);
    }
}

pub fn profile_setup_schema() -> ProfileSetupSchema {
    ProfileSetupSchema::new()
}

pub fn validate_profile_setup(input: &ProfileSetupInput) -> FormValidation {
    validate_form(&profile_setup_schema(), input)
}
