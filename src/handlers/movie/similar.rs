use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use crate::{
    app::AppState,
    constants::*,
    models::*,
    utils::{parse_id, similar_movies, AppError},
};

/// Similar movies
///
/// Other movies ranked by genre, release year and rating closeness
#[utoipa::path(
    get,
    path = "/api/v1/movies/{movie_id}/similar",
    params(
        ("movie_id" = u32, Path, description = "Movie id"),
        SimilarParams
    ),
    responses(
        (status = StatusCode::OK, description = "Similar movies", body = MoviesResponse),
        (status = StatusCode::NOT_FOUND, description = "Movie not found", body = GenericResponse)
    ),
    tag = "Movie API"
)]
pub async fn similar_movies_handler(
    State(state): State<Arc<AppState>>,
    Path(movie_id): Path<String>,
    Query(params): Query<SimilarParams>,
) -> Result<Json<MoviesResponse>, AppError> {
    let movie_id = parse_id(&movie_id, "invalid movie id")?;
    let reference = state
        .catalog
        .find_movie(movie_id)
        .ok_or(AppError::NotFound("Movie not found".into()))?;
    let limit = params.limit.unwrap_or(DEFAULT_SIMILAR_LIMIT);
    let res = MoviesResponse {
        success: true,
        data: similar_movies(state.catalog.movies(), reference, limit),
    };
    Ok(Json(res))
}
