use pwd_arena::server::{self, AppState};
use pwd_arena::{AppConfig, init_tracing};
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> Result<(), pwd_arena::Error> {
    let config = AppConfig::from_env()?;
    init_tracing(&config.log_level)?;
    tracing::info!(service = "pwd-arena", "starting");

    let state = AppState::from_config(&config)?;

    let shutdown = CancellationToken::new();
    let signal = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("shutdown requested");
            signal.cancel();
        }
    });

    server::run(&config, state, shutdown).await
}
