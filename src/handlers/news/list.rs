use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::{app::AppState, models::*, utils::sort_news};

/// News listing
///
/// Newest first by default, or ordered by category or title
#[utoipa::path(
    get,
    path = "/api/v1/news",
    params(NewsParams),
    responses(
        (status = StatusCode::OK, description = "News articles", body = NewsListResponse)
    ),
    tag = "News API"
)]
pub async fn get_news_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<NewsParams>,
) -> Json<NewsListResponse> {
    let sort_by = params.sort_by.unwrap_or_default();
    let res = NewsListResponse {
        success: true,
        data: sort_news(state.catalog.news(), sort_by),
    };
    Json(res)
}
