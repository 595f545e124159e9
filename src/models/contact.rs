use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;
use validator::Validate;

use crate::utils::{validate_contact_form, validate_email_shape, validate_message, validate_name};

/// Field level error messages of the contact form, absent key means valid
pub type FieldErrors = BTreeMap<ContactField, String>;

/// Fields of the contact form
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    /// Maps a struct field name reported by the validator to the form field
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            "message" => Some(Self::Message),
            _ => None,
        }
    }
}

/// Values typed into the contact form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct ContactForm {
    #[serde(default)]
    #[validate(custom(function = "validate_name"))]
    pub name: String,

    #[serde(default)]
    #[validate(custom(function = "validate_email_shape"))]
    pub email: String,

    #[serde(default)]
    #[validate(custom(function = "validate_message"))]
    pub message: String,
}

impl ContactForm {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FormStatus {
    #[default]
    Editing,
    Submitted,
}

/// Contact form of one contact view: the typed values, the errors of the last
/// submit attempt and whether the simulated submission went through.
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactFormState {
    pub form: ContactForm,
    #[schema(value_type = Object)]
    pub errors: FieldErrors,
    pub status: FormStatus,
}

impl ContactFormState {
    /// Stores a keystroke. Editing a field clears its pending error.
    /// Rejected while the form shows the submitted message.
    pub fn set_field(&mut self, field: ContactField, value: String) -> bool {
        if self.status == FormStatus::Submitted {
            return false;
        }
        self.form.set(field, value);
        self.errors.remove(&field);
        true
    }

    /// Validates the form. On success the state moves to `Submitted` and the
    /// caller is expected to schedule [`ContactFormState::reset`].
    pub fn submit(&mut self) -> bool {
        if self.status == FormStatus::Submitted {
            return false;
        }
        let errors = validate_contact_form(&self.form);
        if !errors.is_empty() {
            self.errors = errors;
            return false;
        }
        tracing::info!(
            "Contact form submitted by {} <{}>",
            self.form.name.trim(),
            self.form.email.trim()
        );
        self.errors.clear();
        self.status = FormStatus::Submitted;
        true
    }

    /// Clears every field and goes back to editing
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
