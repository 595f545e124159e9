use axum::{
    extract::{Path, State},
    Json,
};
use std::{sync::Arc, time::Duration};

use crate::{
    app::AppState,
    constants::*,
    models::*,
    utils::{parse_id, top_rated, AppError, ValidatedBody},
    views::{HomeView, View},
};

/// Mount the home page
///
/// Returns the top rated rows and starts the hero carousel rotation
#[utoipa::path(
    post,
    path = "/api/v1/view/home",
    responses(
        (status = StatusCode::OK, description = "Home view created", body = HomeViewResponse)
    ),
    tag = "View API"
)]
pub async fn create_home_view_handler(
    State(state): State<Arc<AppState>>,
) -> Json<HomeViewResponse> {
    let movies = state.catalog.movies();
    let top_movies = top_rated(movies, 0, TOP_MOVIES_COUNT);
    let more_movies = top_rated(movies, TOP_MOVIES_COUNT, MORE_MOVIES_COUNT);
    let hero_movies: Vec<Movie> = top_movies.iter().take(HERO_MOVIES_COUNT).cloned().collect();
    let period = Duration::from_secs(HERO_ROTATE_INTERVAL_SECS);
    let home = HomeView::new(hero_movies.clone(), period);
    let view_id = state.views.insert(View::Home(home)).await;
    let res = HomeViewResponse {
        success: true,
        view_id,
        hero_index: 0,
        hero_movies,
        top_movies,
        more_movies,
    };
    Json(res)
}

/// Current hero slide of a home view
#[utoipa::path(
    get,
    path = "/api/v1/view/home/{view_id}",
    params(("view_id" = u32, Path, description = "Home view id")),
    responses(
        (status = StatusCode::OK, description = "Current slide", body = HeroResponse),
        (status = StatusCode::NOT_FOUND, description = "View or slide not found", body = GenericResponse)
    ),
    tag = "View API"
)]
pub async fn get_hero_handler(
    State(state): State<Arc<AppState>>,
    Path(view_id): Path<String>,
) -> Result<Json<HeroResponse>, AppError> {
    let view_id = parse_id(&view_id, "invalid view id")?;
    let res = state
        .views
        .with_home(view_id, |home| hero_response(view_id, home))
        .await??;
    Ok(Json(res))
}

/// Jump to a hero slide
#[utoipa::path(
    put,
    path = "/api/v1/view/home/{view_id}/hero",
    params(("view_id" = u32, Path, description = "Home view id")),
    request_body = HeroSlideReqBody,
    responses(
        (status = StatusCode::OK, description = "Slide selected", body = HeroResponse),
        (status = StatusCode::BAD_REQUEST, description = "Slide out of range", body = GenericResponse),
        (status = StatusCode::NOT_FOUND, description = "View not found", body = GenericResponse)
    ),
    tag = "View API"
)]
pub async fn select_hero_handler(
    State(state): State<Arc<AppState>>,
    Path(view_id): Path<String>,
    ValidatedBody(body): ValidatedBody<HeroSlideReqBody>,
) -> Result<Json<HeroResponse>, AppError> {
    let view_id = parse_id(&view_id, "invalid view id")?;
    let res = state
        .views
        .with_home(view_id, |home| {
            if !home.select_hero(body.index) {
                let msg = format!(
                    "Slide {} out of range, home view has {} slides",
                    body.index,
                    home.hero_count()
                );
                return Err(AppError::BadRequestErr(msg));
            }
            hero_response(view_id, home)
        })
        .await??;
    Ok(Json(res))
}

fn hero_response(view_id: u32, home: &HomeView) -> Result<HeroResponse, AppError> {
    let (hero_index, movie) = home
        .current_hero()
        .ok_or(AppError::NotFound("No hero movies in the catalog".into()))?;
    Ok(HeroResponse {
        success: true,
        view_id,
        hero_index,
        hero_count: home.hero_count(),
        movie: movie.clone(),
    })
}
