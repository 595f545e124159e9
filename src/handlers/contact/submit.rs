use axum::Json;

use crate::{
    models::*,
    utils::{validate_contact_form, AppError},
};

/// Contact form submission
///
/// Validates the message and simulates sending it, nothing leaves the server
#[utoipa::path(
    post,
    path = "/api/v1/contact",
    request_body = ContactForm,
    responses(
        (status = StatusCode::OK, description = "Message accepted", body = GenericResponse),
        (status = StatusCode::BAD_REQUEST, description = "Invalid fields", body = ValidationErrResponse)
    ),
    tag = "Contact API"
)]
pub async fn contact_submit_handler(
    Json(form): Json<ContactForm>,
) -> Result<Json<GenericResponse>, AppError> {
    let errors = validate_contact_form(&form);
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }
    tracing::info!(
        "Contact form submitted by {} <{}>",
        form.name.trim(),
        form.email.trim()
    );
    let res = GenericResponse {
        success: true,
        message: "Thank you for your message! We'll get back to you soon.".to_owned(),
    };
    Ok(Json(res))
}
