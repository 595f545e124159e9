use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::{
    app::AppState,
    models::*,
    utils::{parse_id, AppError},
};

/// News article
#[utoipa::path(
    get,
    path = "/api/v1/news/{news_id}",
    params(("news_id" = u32, Path, description = "News article id")),
    responses(
        (status = StatusCode::OK, description = "Article found", body = NewsResponse),
        (status = StatusCode::NOT_FOUND, description = "Article not found", body = GenericResponse)
    ),
    tag = "News API"
)]
pub async fn news_details_handler(
    State(state): State<Arc<AppState>>,
    Path(news_id): Path<String>,
) -> Result<Json<NewsResponse>, AppError> {
    let news_id = parse_id(&news_id, "invalid news id")?;
    let article = state
        .catalog
        .find_news(news_id)
        .ok_or(AppError::NotFound("News article not found".into()))?;
    let res = NewsResponse {
        success: true,
        data: article.clone(),
    };
    Ok(Json(res))
}
