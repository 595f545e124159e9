use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::{
    app::AppState,
    models::GenericResponse,
    utils::{parse_id, AppError},
};

/// Unmount a view
///
/// Any view kind. Pending carousel rotation or form reset timers are cancelled.
#[utoipa::path(
    delete,
    path = "/api/v1/view/{view_id}",
    params(("view_id" = u32, Path, description = "View id")),
    responses(
        (status = StatusCode::OK, description = "View removed", body = GenericResponse),
        (status = StatusCode::NOT_FOUND, description = "View not found", body = GenericResponse)
    ),
    tag = "View API"
)]
pub async fn remove_view_handler(
    State(state): State<Arc<AppState>>,
    Path(view_id): Path<String>,
) -> Result<Json<GenericResponse>, AppError> {
    let view_id = parse_id(&view_id, "invalid view id")?;
    if !state.views.remove(view_id).await {
        return Err(AppError::NotFound(format!("View {view_id} not found")));
    }
    let res = GenericResponse {
        success: true,
        message: format!("View {view_id} removed"),
    };
    Ok(Json(res))
}
