pub mod handlers;
pub mod pages;
pub mod types;

use crate::{
    Result,
    config::Config,
    resume::{Generator, ResumeGenerator},
};
use axum::{Router, routing::get};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Builds the single-route application around an injected generator.
pub fn router(generator: Arc<dyn Generator>) -> Router {
    let app_state = handlers::AppState { generator };

    Router::new()
        .route(
            "/",
            get(handlers::input_form).post(handlers::generate_resume),
        )
        .with_state(app_state)
}

pub async fn run(config: Config) -> Result<()> {
    // Built once; an unusable client degrades every request to the
    // not-initialized message instead of stopping the server.
    let generator = ResumeGenerator::from_config(&config.llm);

    let app = router(Arc::new(generator)).layer(TraceLayer::new_for_http());

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
