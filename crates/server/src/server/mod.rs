use std::sync::Arc;

use crate::config::{AppConfig, StoreKind};
use crate::server::state::AppState;

pub mod constants;
pub mod demo;
pub mod resources;
pub mod router;
pub mod state;

pub async fn run_all(config: &AppConfig, store: StoreKind) -> anyhow::Result<()> {
    let app_state = Arc::new(AppState::try_init(config, store)?);
    router::serve(app_state).await?;
    Ok(())
}
