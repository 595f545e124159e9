use std::{net::SocketAddr, sync::Arc};

use app::AppState;
use catalog::AppCatalog;
use constants::*;
use dotenvy::dotenv;
use jobs::spawn_all_jobs;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utils::get_env_or;
use views::ViewRegistry;

pub mod app;
pub mod catalog;
pub mod constants;
pub mod handlers;
pub mod jobs;
pub mod models;
pub mod swagger;
pub mod utils;
pub mod views;

pub async fn start_web_server() -> anyhow::Result<()> {
    // import .env file
    dotenv().ok();
    initialize_logging();
    // load the read-only catalog
    let catalog_dir = get_env_or("CATALOG_DIR", DEFAULT_CATALOG_DIR.to_owned());
    let catalog = AppCatalog::from_dir(&catalog_dir)?;
    let views = Arc::new(ViewRegistry::new());
    spawn_all_jobs(views.clone());
    let state = AppState::new(catalog, views);
    start_server(state).await
}

fn initialize_logging() {
    // create default env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or("cinescope_backend=debug,tower_http=debug".into());

    // initialize tracing subscriber for logging
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}

async fn start_server(state: Arc<AppState>) -> anyhow::Result<()> {
    // read the port number from env variable
    let port = get_env_or("PORT", DEFAULT_PORT);
    // build the socket address
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    // create the app instance
    let app = app::build_app(state);
    tracing::debug!("Starting the app in: {addr}");
    // start serving the app in the socket address
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}
