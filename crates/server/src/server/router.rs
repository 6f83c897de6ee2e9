use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::server::constants::{MOCK_API_PREFIX, RESOURCES_PATH, RESOURCE_PATH};
use crate::server::demo;
use crate::server::resources::{
    create_resource, delete_resource, get_resource, list_resources, unsupported_method,
    update_resource,
};
use crate::server::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    let mut app: Router<Arc<AppState>> = Router::new()
        .route(
            RESOURCES_PATH,
            get(list_resources)
                .post(create_resource)
                .fallback(unsupported_method),
        )
        .route(
            RESOURCE_PATH,
            get(get_resource)
                .put(update_resource)
                .delete(delete_resource)
                .fallback(unsupported_method),
        );
    if state.mock.is_some() {
        app = app.nest(MOCK_API_PREFIX, demo::routes());
    }
    app.layer(TraceLayer::new_for_http()).with_state(state)
}

pub async fn serve(state: Arc<AppState>) -> anyhow::Result<()> {
    let addr = state.config.server.address.clone();
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("starting server on: {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
