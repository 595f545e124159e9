use axum::{async_trait, extract::FromRequest, http::Request, Json, RequestExt};
use lazy_static::lazy_static;
use regex::Regex;
use validator::{Validate, ValidationError, ValidationErrors};

use super::AppError;
use crate::{
    constants::*,
    models::{ContactField, ContactForm, FieldErrors},
};

lazy_static! {
    // local@domain.tld, nothing more
    static ref EMAIL_SHAPE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// Length of the trimmed text in UTF-16 code units, the unit browsers report
/// for text field lengths
fn trimmed_len(text: &str) -> usize {
    text.trim().encode_utf16().count()
}

fn field_error(code: &'static str, msg: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(msg.into());
    err
}

/// Custom validator function to check the contact name
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    let len = trimmed_len(name);
    if len == 0 {
        return Err(field_error("required", "Name is required"));
    }
    if len < CONTACT_NAME_MIN_LEN {
        return Err(field_error(
            "length",
            "Name must be at least 2 characters",
        ));
    }
    Ok(())
}

/// Custom validator function to check the contact email.
/// Emptiness is checked on the trimmed value, the shape on the raw one.
pub fn validate_email_shape(email: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() {
        return Err(field_error("required", "Email is required"));
    }
    if !EMAIL_SHAPE.is_match(email) {
        return Err(field_error("email", "Please enter a valid email address"));
    }
    Ok(())
}

/// Custom validator function to check the contact message
pub fn validate_message(message: &str) -> Result<(), ValidationError> {
    let len = trimmed_len(message);
    if len == 0 {
        return Err(field_error("required", "Message is required"));
    }
    if len < CONTACT_MESSAGE_MIN_LEN {
        return Err(field_error(
            "length",
            "Message must be at least 10 characters",
        ));
    }
    Ok(())
}

/// Validates the contact form, returns one message per invalid field.
/// An empty map means the form can be submitted.
pub fn validate_contact_form(form: &ContactForm) -> FieldErrors {
    match form.validate() {
        Ok(()) => FieldErrors::new(),
        Err(errs) => to_field_errors(&errs),
    }
}

fn to_field_errors(errs: &ValidationErrors) -> FieldErrors {
    errs.field_errors()
        .into_iter()
        .filter_map(|(key, errors)| {
            let field = ContactField::from_key(key)?;
            let msg = errors.first()?.message.as_ref()?.to_string();
            Some((field, msg))
        })
        .collect()
}

pub struct ValidatedBody<T>(pub T);

#[async_trait]
impl<S, B, T> FromRequest<S, B> for ValidatedBody<T>
where
    B: Send + 'static,
    S: Send + Sync,
    T: Validate + 'static,
    Json<T>: FromRequest<(), B>,
{
    type Rejection = AppError;

    async fn from_request(req: Request<B>, _state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = req
            .extract::<Json<T>, _>()
            .await
            .map_err(|_| AppError::BadRequestErr("Invalid JSON body".into()))?;
        data.validate().map_err(|err| {
            let msg = format!("Invalid JSON body: {err}");
            AppError::BadRequestErr(msg)
        })?;
        Ok(Self(data))
    }
}
