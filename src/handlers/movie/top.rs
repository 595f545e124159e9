use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::{app::AppState, constants::*, models::*, utils::top_rated};

/// Top rated movies
///
/// Rating ordered slice of the catalog used by the home page rows
#[utoipa::path(
    get,
    path = "/api/v1/movies/top",
    params(TopMoviesParams),
    responses(
        (status = StatusCode::OK, description = "Top rated movies", body = MoviesResponse)
    ),
    tag = "Movie API"
)]
pub async fn top_movies_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TopMoviesParams>,
) -> Json<MoviesResponse> {
    let skip = params.skip.unwrap_or(0);
    let limit = params.limit.unwrap_or(TOP_MOVIES_COUNT);
    let res = MoviesResponse {
        success: true,
        data: top_rated(state.catalog.movies(), skip, limit),
    };
    Json(res)
}
