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

/// Movie details
///
/// Movie with its star breakdown and user reviews
#[utoipa::path(
    get,
    path = "/api/v1/movies/{movie_id}",
    params(("movie_id" = u32, Path, description = "Movie id")),
    responses(
        (status = StatusCode::OK, description = "Movie found", body = MovieDetailsResponse),
        (status = StatusCode::NOT_FOUND, description = "Movie not found", body = GenericResponse),
        (status = StatusCode::BAD_REQUEST, description = "Invalid movie id", body = GenericResponse)
    ),
    tag = "Movie API"
)]
pub async fn movie_details_handler(
    State(state): State<Arc<AppState>>,
    Path(movie_id): Path<String>,
) -> Result<Json<MovieDetailsResponse>, AppError> {
    let movie_id = parse_id(&movie_id, "invalid movie id")?;
    let movie = state
        .catalog
        .find_movie(movie_id)
        .ok_or(AppError::NotFound("Movie not found".into()))?;
    let data = MovieDetails {
        stars: movie.stars(),
        reviews: state.catalog.reviews_for(movie),
        movie: movie.clone(),
    };
    let res = MovieDetailsResponse {
        success: true,
        data,
    };
    Ok(Json(res))
}
