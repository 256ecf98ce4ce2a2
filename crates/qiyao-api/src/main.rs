//! Qiyao race engine API server entry point.

use std::sync::Arc;

use qiyao_api::config::Config;
use qiyao_api::error::AppError;
use qiyao_api::state::AppState;
use qiyao_core::clock::SystemClock;
use qiyao_core::rng::{DeterministicRng, SeededRng};
use qiyao_narrative::application::offline::OfflineNarrator;
use qiyao_save_store::file_save_repository::FileSaveRepository;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Qiyao race API server");

    let config = Config::from_env()?;

    let rng: Box<dyn DeterministicRng> = match config.seed {
        Some(seed) => {
            tracing::info!(seed, "using fixed RNG seed");
            Box::new(SeededRng::from_seed(seed))
        }
        None => Box::new(SeededRng::from_entropy()),
    };

    let app_state = AppState::new(
        rng,
        Arc::new(OfflineNarrator),
        Arc::new(SystemClock),
        Arc::new(FileSaveRepository::new(config.save_dir.clone())),
    );

    let app = qiyao_api::app(app_state);

    tracing::info!(save_dir = %config.save_dir.display(), "Listening on {}", config.addr);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
