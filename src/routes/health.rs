use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::AppState;

/// Health check endpoint
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    let games_in_progress = state
        .sessions
        .iter()
        .filter(|session| session.root_word.is_some())
        .count();

    Json(json!({
        "status": "ok",
        "service": "word-scramble",
        "version": env!("CARGO_PKG_VERSION"),
        "active_sessions": state.sessions.len(),
        "games_in_progress": games_in_progress,
        "root_words": state.root_words.len(),
        "dictionary_words": state.dictionary.len(),
    }))
}
