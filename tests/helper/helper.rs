use axum::{body::Body, http::Request, response::Response, Router};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::{path::Path, sync::Arc};

use cinescope_backend::{
    app::{build_app, AppState},
    catalog::AppCatalog,
    constants::DEFAULT_CATALOG_DIR,
    views::ViewRegistry,
};

#[derive(Debug, Serialize, Deserialize)]
pub struct GenericResponse {
    pub success: bool,
    pub message: String,
}

/// Builds the full router over the bundled catalog with a fresh view registry
pub fn get_app() -> Router {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_CATALOG_DIR);
    let catalog = AppCatalog::from_dir(dir).expect("Unable to load the bundled catalog");
    let views = Arc::new(ViewRegistry::new());
    build_app(AppState::new(catalog, views))
}

pub async fn read_json<T: DeserializeOwned>(res: Response) -> T {
    let body = hyper::body::to_bytes(res.into_body()).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn build_request(method: &str, path: &str, body: &str) -> Request<Body> {
    Request::builder()
        .uri(path)
        .method(method)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

pub fn build_post_request(path: &str, body: &str) -> Request<Body> {
    build_request("POST", path, body)
}

pub fn build_put_request(path: &str, body: &str) -> Request<Body> {
    build_request("PUT", path, body)
}

pub fn build_delete_request(path: &str) -> Request<Body> {
    Request::builder()
        .uri(path)
        .method("DELETE")
        .body(Body::empty())
        .unwrap()
}

pub fn build_get_request(path: &str) -> Request<Body> {
    Request::builder().uri(path).body(Body::empty()).unwrap()
}
