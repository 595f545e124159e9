use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::{
    app::AppState,
    constants::ALL_GENRES,
    models::*,
    utils::{filter_and_sort, MovieQuery},
};

/// Movie listing
///
/// Search by title, filter by genre and sort the catalog
#[utoipa::path(
    get,
    path = "/api/v1/movies",
    params(MovieListParams),
    responses(
        (status = StatusCode::OK, description = "Matching movies", body = MovieListResponse)
    ),
    tag = "Movie API"
)]
pub async fn get_movies_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<MovieListParams>,
) -> Json<MovieListResponse> {
    let query = MovieQuery {
        text: params.search.unwrap_or_default(),
        genre: params.genre.unwrap_or_else(|| ALL_GENRES.to_owned()),
        sort_key: params.sort_by,
    };
    let movies = state.catalog.movies();
    let data = filter_and_sort(movies, &query);
    tracing::debug!("{:?} matched {} of {} movies", query, data.len(), movies.len());
    let res = MovieListResponse {
        success: true,
        shown: data.len(),
        total: movies.len(),
        data,
    };
    Json(res)
}
