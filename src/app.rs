use axum::{
    error_handling::HandleErrorLayer,
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
    BoxError, Json, Router,
};
use std::{sync::Arc, time::Duration};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    catalog::AppCatalog, constants::*, handlers::*, models::GenericResponse, swagger::ApiDoc,
    views::ViewRegistry,
};

/// Shared state of every handler
#[derive(Debug)]
pub struct AppState {
    pub catalog: AppCatalog,
    pub views: Arc<ViewRegistry>,
}

impl AppState {
    pub fn new(catalog: AppCatalog, views: Arc<ViewRegistry>) -> Arc<Self> {
        Arc::new(Self { catalog, views })
    }
}

pub fn build_app(state: Arc<AppState>) -> Router {
    tracing::debug!("Initializing the app");
    let api_routes = Router::new()
        .route("/ping", get(ping_handler))
        .nest("/movies", movie_routes())
        .nest("/news", news_routes())
        .route("/contact", post(contact_submit_handler))
        .nest("/view", view_routes());

    Router::new()
        .route("/", get(default_route_handler))
        .nest("/api/v1", api_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(global_404_handler)
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_timeout_error))
                .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS)),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn movie_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(get_movies_handler))
        .route("/genres", get(get_genres_handler))
        .route("/top", get(top_movies_handler))
        .route("/:movie_id", get(movie_details_handler))
        .route("/:movie_id/similar", get(similar_movies_handler))
}

fn news_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(get_news_handler))
        .route("/:news_id", get(news_details_handler))
}

fn view_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/home", post(create_home_view_handler))
        .route("/home/:view_id", get(get_hero_handler))
        .route("/home/:view_id/hero", put(select_hero_handler))
        .route("/movie/:movie_id", post(create_movie_view_handler))
        .route("/rating/:view_id", get(get_rating_handler))
        .route("/rating/:view_id/hover", put(hover_rating_handler))
        .route("/rating/:view_id/select", put(select_rating_handler))
        .route("/contact", post(create_contact_view_handler))
        .route(
            "/contact/:view_id",
            get(get_contact_view_handler).patch(update_contact_field_handler),
        )
        .route("/contact/:view_id/submit", post(submit_contact_view_handler))
        .route("/:view_id", delete(remove_view_handler))
}

async fn handle_timeout_error(err: BoxError) -> impl IntoResponse {
    let (status, message) = if err.is::<tower::timeout::error::Elapsed>() {
        (StatusCode::REQUEST_TIMEOUT, "Request timed out".to_owned())
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Unhandled internal error: {err}"),
        )
    };
    tracing::debug!("{message}");
    let response = GenericResponse {
        success: false,
        message,
    };
    (status, Json(response))
}
