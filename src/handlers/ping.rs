use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{app::AppState, models::GenericResponse};

/// Ping endpoint
///
/// Reports how much of the catalog is loaded and how many views are mounted
#[utoipa::path(
    get,
    path = "/api/v1/ping",
    responses(
        (status = 200, description = "Catalog service is serving", body = GenericResponse)
    ),
    tag = "Debugging API"
)]
pub async fn ping_handler(State(state): State<Arc<AppState>>) -> Json<GenericResponse> {
    let catalog = &state.catalog;
    let views = state.views.len().await;
    let res = GenericResponse {
        success: true,
        message: format!(
            "Serving {} movies and {} news articles, open views: {views}",
            catalog.movies().len(),
            catalog.news().len()
        ),
    };
    Json(res)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::{body::Body, http::Request, routing::get, Router};
    use tower::ServiceExt; // for `oneshot` and `ready`

    use super::*;
    use crate::{
        catalog::AppCatalog,
        models::Movie,
        views::{ContactView, View, ViewRegistry},
    };

    #[tokio::test]
    async fn test_ping_handler() {
        let movies = vec![
            Movie::new(1, "Heat", "Crime", 1995, 4.6),
            Movie::new(2, "Ronin", "Action", 1998, 4.0),
        ];
        let catalog = AppCatalog::new(movies, vec![], vec![]).unwrap();
        let views = Arc::new(ViewRegistry::new());
        views.insert(View::Contact(ContactView::new())).await;
        let app = Router::new()
            .route("/ping", get(ping_handler))
            .with_state(AppState::new(catalog, views));
        let req = Request::builder()
            .uri("/ping")
            .method("GET")
            .body(Body::empty())
            .unwrap();
        let res = app.oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let body = hyper::body::to_bytes(res.into_body()).await.unwrap();
        let res: GenericResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(res.success, true);
        assert_eq!(
            res.message,
            "Serving 2 movies and 0 news articles, open views: 1"
        );
    }
}
