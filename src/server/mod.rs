//! HTTP surface: health, password check and password generation.

mod error;
mod handlers;

pub use error::ApiError;

use std::any::Any;
use std::sync::Arc;

use axum::Router;
use axum::http::{Method, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::breach::{BreachSource, HibpClient};
use crate::config::AppConfig;
use crate::wordlist::WordLists;

/// Read-only state shared by every request.
pub struct AppState {
    pub words: WordLists,
    pub breach: Arc<dyn BreachSource>,
}

impl AppState {
    pub fn new(words: WordLists, breach: Arc<dyn BreachSource>) -> Self {
        Self { words, breach }
    }

    /// Loads (or bootstraps) the word lists and builds the range API client.
    pub fn from_config(config: &AppConfig) -> Result<Self, crate::Error> {
        let words = WordLists::load_or_create(&config.wordlist_path)?;
        let breach = HibpClient::new(config.breach_api_url.clone(), config.breach_timeout)?;
        Ok(Self::new(words, Arc::new(breach)))
    }
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unexpected internal error".to_string()
    };
    ApiError::Internal(detail).into_response()
}

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/check_pswd", post(handlers::check_password))
        .route("/generate_pswd", post(handlers::generate_password))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(Arc::new(state))
}

/// Serves on an already bound listener until `shutdown` is cancelled.
pub async fn serve(
    listener: TcpListener,
    state: AppState,
    shutdown: CancellationToken,
) -> std::io::Result<()> {
    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
}

/// Binds `config.bind_addr()` and serves until `shutdown` is cancelled.
pub async fn run(
    config: &AppConfig,
    state: AppState,
    shutdown: CancellationToken,
) -> Result<(), crate::Error> {
    let listener = TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(addr = %config.bind_addr(), "listening");
    serve(listener, state, shutdown).await?;
    tracing::info!("server stopped");
    Ok(())
}
