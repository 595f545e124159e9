use axum::{
    extract::{Path, State},
    Json,
};
use std::{sync::Arc, time::Duration};

use crate::{
    app::AppState,
    constants::*,
    jobs::contact_reset_job,
    models::*,
    utils::{parse_id, AppError, ValidatedBody},
    views::{ContactView, View},
};

/// Mount the contact page with an empty form
#[utoipa::path(
    post,
    path = "/api/v1/view/contact",
    responses(
        (status = StatusCode::OK, description = "Contact view created", body = ContactViewResponse)
    ),
    tag = "View API"
)]
pub async fn create_contact_view_handler(
    State(state): State<Arc<AppState>>,
) -> Json<ContactViewResponse> {
    let view_id = state.views.insert(View::Contact(ContactView::new())).await;
    let res = ContactViewResponse {
        success: true,
        view_id,
        data: ContactFormState::default(),
    };
    Json(res)
}

/// Contact form state
#[utoipa::path(
    get,
    path = "/api/v1/view/contact/{view_id}",
    params(("view_id" = u32, Path, description = "Contact view id")),
    responses(
        (status = StatusCode::OK, description = "Form state", body = ContactViewResponse),
        (status = StatusCode::NOT_FOUND, description = "View not found", body = GenericResponse)
    ),
    tag = "View API"
)]
pub async fn get_contact_view_handler(
    State(state): State<Arc<AppState>>,
    Path(view_id): Path<String>,
) -> Result<Json<ContactViewResponse>, AppError> {
    let view_id = parse_id(&view_id, "invalid view id")?;
    let data = state
        .views
        .with_contact(view_id, |contact| contact.form.clone())
        .await?;
    let res = ContactViewResponse {
        success: true,
        view_id,
        data,
    };
    Ok(Json(res))
}

/// Type into one field of the contact form
///
/// Clears the error previously reported for that field
#[utoipa::path(
    patch,
    path = "/api/v1/view/contact/{view_id}",
    params(("view_id" = u32, Path, description = "Contact view id")),
    request_body = ContactFieldReqBody,
    responses(
        (status = StatusCode::OK, description = "Field updated", body = ContactViewResponse),
        (status = StatusCode::BAD_REQUEST, description = "Form already submitted", body = GenericResponse),
        (status = StatusCode::NOT_FOUND, description = "View not found", body = GenericResponse)
    ),
    tag = "View API"
)]
pub async fn update_contact_field_handler(
    State(state): State<Arc<AppState>>,
    Path(view_id): Path<String>,
    ValidatedBody(body): ValidatedBody<ContactFieldReqBody>,
) -> Result<Json<ContactViewResponse>, AppError> {
    let view_id = parse_id(&view_id, "invalid view id")?;
    let data = state
        .views
        .with_contact(view_id, |contact| {
            if !contact.form.set_field(body.field, body.value) {
                let err = AppError::BadRequestErr("Form is already submitted".into());
                return Err(err);
            }
            Ok(contact.form.clone())
        })
        .await??;
    let res = ContactViewResponse {
        success: true,
        view_id,
        data,
    };
    Ok(Json(res))
}

/// Submit the contact form
///
/// On success the form shows the thank you state and is cleared a few
/// seconds later. Invalid fields are reported and stored on the form.
#[utoipa::path(
    post,
    path = "/api/v1/view/contact/{view_id}/submit",
    params(("view_id" = u32, Path, description = "Contact view id")),
    responses(
        (status = StatusCode::OK, description = "Form submitted", body = ContactViewResponse),
        (status = StatusCode::BAD_REQUEST, description = "Invalid fields", body = ValidationErrResponse),
        (status = StatusCode::NOT_FOUND, description = "View not found", body = GenericResponse)
    ),
    tag = "View API"
)]
pub async fn submit_contact_view_handler(
    State(state): State<Arc<AppState>>,
    Path(view_id): Path<String>,
) -> Result<Json<ContactViewResponse>, AppError> {
    let view_id = parse_id(&view_id, "invalid view id")?;
    let views = Arc::downgrade(&state.views);
    let delay = Duration::from_secs(CONTACT_RESET_DELAY_SECS);
    let data = state
        .views
        .with_contact(view_id, |contact| {
            if contact.form.status == FormStatus::Submitted {
                return Err(AppError::BadRequestErr("Form is already submitted".into()));
            }
            if !contact.form.submit() {
                return Err(AppError::Validation(contact.form.errors.clone()));
            }
            contact.schedule_reset(contact_reset_job(views, view_id, delay));
            Ok(contact.form.clone())
        })
        .await??;
    let res = ContactViewResponse {
        success: true,
        view_id,
        data,
    };
    Ok(Json(res))
}
