use axum::http::{Method, Uri};
use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::models::GenericResponse;

/// Fallback for every unknown route
pub async fn global_404_handler(method: Method, uri: Uri) -> impl IntoResponse {
    let msg = format!("Route `{method} {uri}` does not exist");
    tracing::debug!("{msg}");
    let response = GenericResponse {
        success: false,
        message: msg,
    };
    (StatusCode::NOT_FOUND, Json(response))
}
