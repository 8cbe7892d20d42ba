use project_tracker::AppState;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting project tracker demo...");
    let state = AppState::new();

    state.sync.clone().refresh().await;
    if let Some(err) = state.sync.last_error() {
        warn!("initial load did not settle yet: {}", err);
    }
    for project in state.sync.projects() {
        info!(
            id = %project.id,
            name = %project.name,
            favorite = project.is_favorite,
            "cached project"
        );
    }

    match state.toggle_favorite.execute("project_c").await {
        Ok(project) => {
            info!(id = %project.id, favorite = project.is_favorite, "toggled favorite");
            state.sync.clone().refresh().await;
        }
        Err(err) => warn!(status = err.status(), "toggle failed: {}", err),
    }

    info!(
        favorites = state.sync.favorite_projects().len(),
        total = state.sync.projects().len(),
        "final cache state"
    );
}
