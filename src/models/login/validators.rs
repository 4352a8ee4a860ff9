use crate::{
    functional::field_schema::FieldSchema,
    functional::validation_engine::{validate_form, FieldErrors, FormSchema, FormValidation},
    models::login::LoginInput,
    schemas::{password_schema, phone_schema},
};

/// Phone plus password, each checked with its field schema unchanged.
pub struct LoginSchema {
    phone: FieldSchema<str>,
    password: FieldSchema<str>,
}

impl LoginSchema {
    pub fn new() -> Self {
        Self {
            phone: phone_schema(),
            password: password_schema(),
        }
    }
}

impl Default for LoginSchema {
    fn default() -> Self {
        Self::new()
    }
}

impl FormSchema for LoginSchema {
    type Input = LoginInput;

    fn name(&self) -> &'static str {
        "login"
    }

    fn check_fields(&self, input: &LoginInput, errors: &mut FieldErrors) {
        errors.check("phone", input.phone.as_str(), &self.phone);
        errors.check("password", input.password.as_str(), &self.password);
    }
}

pub fn login_schema() -> LoginSchema {
    LoginSchema::new()
}

pub fn validate_login(input: &LoginInput) -> FormValidation {
    validate_form(&login_schema(), input)
}
