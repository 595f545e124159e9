use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::{FieldErrors, GenericResponse, ValidationErrResponse};

#[derive(Debug)]
pub enum AppError {
    BadRequestErr(String),
    NotFound(String),
    Validation(FieldErrors),
    AnyError(anyhow::Error),
}

impl<E: Into<anyhow::Error>> From<E> for AppError {
    fn from(err: E) -> Self {
        Self::AnyError(err.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::BadRequestErr(msg) => {
                tracing::debug!("Bad request: {}", msg);
                let response = GenericResponse {
                    success: false,
                    message: msg,
                };
                (StatusCode::BAD_REQUEST, Json(response)).into_response()
            }
            Self::NotFound(msg) => {
                tracing::debug!("Not Found: {}", msg);
                let response = GenericResponse {
                    success: false,
                    message: msg,
                };
                (StatusCode::NOT_FOUND, Json(response)).into_response()
            }
            Self::Validation(errors) => {
                tracing::debug!("Validation failed: {:?}", errors);
                let response = ValidationErrResponse {
                    success: false,
                    message: "Please correct the highlighted fields".to_owned(),
                    errors,
                };
                (StatusCode::BAD_REQUEST, Json(response)).into_response()
            }
            Self::AnyError(err) => {
                let msg = format!("Something went wrong: {err}");
                tracing::debug!("{msg}");
                let response = GenericResponse {
                    success: false,
                    message: msg,
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response()
            }
        }
    }
}
