use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::{
    app::AppState,
    models::*,
    utils::{parse_id, AppError, ValidatedBody},
    views::{MovieDetailView, View},
};

/// Mount a movie detail page
///
/// Creates the star rating widget of the movie, starting at zero
#[utoipa::path(
    post,
    path = "/api/v1/view/movie/{movie_id}",
    params(("movie_id" = u32, Path, description = "Movie id")),
    responses(
        (status = StatusCode::OK, description = "Movie view created", body = RatingResponse),
        (status = StatusCode::NOT_FOUND, description = "Movie not found", body = GenericResponse)
    ),
    tag = "View API"
)]
pub async fn create_movie_view_handler(
    State(state): State<Arc<AppState>>,
    Path(movie_id): Path<String>,
) -> Result<Json<RatingResponse>, AppError> {
    let movie_id = parse_id(&movie_id, "invalid movie id")?;
    if state.catalog.find_movie(movie_id).is_none() {
        return Err(AppError::NotFound("Movie not found".into()));
    }
    let detail = MovieDetailView::new(movie_id);
    let res = rating_response(0, &detail);
    let view_id = state.views.insert(View::MovieDetail(detail)).await;
    Ok(Json(RatingResponse { view_id, ..res }))
}

/// Rating widget state
#[utoipa::path(
    get,
    path = "/api/v1/view/rating/{view_id}",
    params(("view_id" = u32, Path, description = "Movie view id")),
    responses(
        (status = StatusCode::OK, description = "Rating state", body = RatingResponse),
        (status = StatusCode::NOT_FOUND, description = "View not found", body = GenericResponse)
    ),
    tag = "View API"
)]
pub async fn get_rating_handler(
    State(state): State<Arc<AppState>>,
    Path(view_id): Path<String>,
) -> Result<Json<RatingResponse>, AppError> {
    let view_id = parse_id(&view_id, "invalid view id")?;
    let res = state
        .views
        .with_movie_detail(view_id, |detail| rating_response(view_id, detail))
        .await?;
    Ok(Json(res))
}

/// Hover a star, 0 when the pointer leaves the widget
#[utoipa::path(
    put,
    path = "/api/v1/view/rating/{view_id}/hover",
    params(("view_id" = u32, Path, description = "Movie view id")),
    request_body = HoverReqBody,
    responses(
        (status = StatusCode::OK, description = "Hover updated", body = RatingResponse),
        (status = StatusCode::BAD_REQUEST, description = "Star out of range", body = GenericResponse),
        (status = StatusCode::NOT_FOUND, description = "View not found", body = GenericResponse)
    ),
    tag = "View API"
)]
pub async fn hover_rating_handler(
    State(state): State<Arc<AppState>>,
    Path(view_id): Path<String>,
    ValidatedBody(body): ValidatedBody<HoverReqBody>,
) -> Result<Json<RatingResponse>, AppError> {
    let view_id = parse_id(&view_id, "invalid view id")?;
    let res = state
        .views
        .with_movie_detail(view_id, |detail| {
            detail.rating.hover(body.star);
            rating_response(view_id, detail)
        })
        .await?;
    Ok(Json(res))
}

/// Commit a star rating
#[utoipa::path(
    put,
    path = "/api/v1/view/rating/{view_id}/select",
    params(("view_id" = u32, Path, description = "Movie view id")),
    request_body = SelectReqBody,
    responses(
        (status = StatusCode::OK, description = "Rating selected", body = RatingResponse),
        (status = StatusCode::BAD_REQUEST, description = "Star out of range", body = GenericResponse),
        (status = StatusCode::NOT_FOUND, description = "View not found", body = GenericResponse)
    ),
    tag = "View API"
)]
pub async fn select_rating_handler(
    State(state): State<Arc<AppState>>,
    Path(view_id): Path<String>,
    ValidatedBody(body): ValidatedBody<SelectReqBody>,
) -> Result<Json<RatingResponse>, AppError> {
    let view_id = parse_id(&view_id, "invalid view id")?;
    let res = state
        .views
        .with_movie_detail(view_id, |detail| {
            detail.rating.select(body.star);
            tracing::debug!("view {view_id} rated movie {} with {}", detail.movie_id, body.star);
            rating_response(view_id, detail)
        })
        .await?;
    Ok(Json(res))
}

fn rating_response(view_id: u32, detail: &MovieDetailView) -> RatingResponse {
    RatingResponse {
        success: true,
        view_id,
        movie_id: detail.movie_id,
        rating: detail.rating,
        display_value: detail.rating.display_value(),
    }
}
