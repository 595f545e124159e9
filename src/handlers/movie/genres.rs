use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{app::AppState, models::*, utils::genres};

/// Genre selector values
///
/// `All` followed by every genre of the catalog
#[utoipa::path(
    get,
    path = "/api/v1/movies/genres",
    responses(
        (status = StatusCode::OK, description = "Genres", body = GenresResponse)
    ),
    tag = "Movie API"
)]
pub async fn get_genres_handler(State(state): State<Arc<AppState>>) -> Json<GenresResponse> {
    let res = GenresResponse {
        success: true,
        data: genres(state.catalog.movies()),
    };
    Json(res)
}
