mod config;
mod dictionary;
mod game;
mod models;
mod routes;
mod websocket;

use std::{sync::Arc, time::Instant};

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use config::Config;
use dashmap::DashMap;
use dictionary::Dictionary;
use game::RootWordList;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

/// Bookkeeping for a connected player. The game itself lives in the connection task.
#[derive(Debug, Clone)]
pub struct ActiveSession {
    pub connected_at: Instant,
    pub root_word: Option<String>,
}

/// Application state shared across all handlers
pub struct AppState {
    pub config: Config,
    pub root_words: Arc<RootWordList>,
    pub dictionary: Arc<Dictionary>,
    /// Open connections keyed by session id
    pub sessions: DashMap<Uuid, ActiveSession>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "word_scramble=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Word Scramble server...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Without root words there is no game to play
    let root_words = RootWordList::load(&config.game.root_words_path)
        .await
        .inspect_err(|e| tracing::error!("Failed to load root words: {}", e))
        .context("Cannot start without a root word list")?;

    // Load dictionary
    let dictionary = match Dictionary::load(&config.game.dictionary_path, &config.game.language)
        .await
    {
        Ok(dict) => {
            tracing::info!("Dictionary loaded successfully");
            dict
        }
        Err(e) => {
            tracing::warn!(
                "Failed to load dictionary: {}. Using empty dictionary for now.",
                e
            );
            tracing::warn!(
                "Download a word list to {} for full functionality",
                config.game.dictionary_path
            );
            Dictionary::empty(&config.game.language)
        }
    };
    if dictionary.is_empty() {
        tracing::warn!("Dictionary is empty; every submitted word will be rejected");
    }

    let addr = config.server_addr();
    let state = Arc::new(AppState {
        config,
        root_words: Arc::new(root_words),
        dictionary: Arc::new(dictionary),
        sessions: DashMap::new(),
    });

    let app = build_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("WebSocket endpoint: ws://{}/ws", addr);
    tracing::info!("Health check: http://{}/health", addr);
    tracing::info!("Game frontend: http://{}/", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Serve frontend static files
    let frontend_service = ServeDir::new(&state.config.server.frontend_dir);

    Router::new()
        // WebSocket endpoint
        .route("/ws", get(websocket::handle_websocket))
        .merge(routes::create_routes())
        .fallback_service(frontend_service)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
