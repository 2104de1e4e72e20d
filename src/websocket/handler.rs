use crate::{
    game::{EngineError, GameEngine},
    websocket::messages::{ClientMessage, ServerMessage, UsedWordInfo},
    ActiveSession, AppState,
};
use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    response::IntoResponse,
};
use futures::{sink::SinkExt, stream::StreamExt};
use std::{sync::Arc, time::Instant};
use tokio::sync::mpsc;
use uuid::Uuid;

/// WebSocket upgrade handler
pub async fn handle_websocket(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Handle individual WebSocket connection. Each connection plays its own game.
async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let session_id = Uuid::new_v4();
    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::channel::<ServerMessage>(100);

    state.sessions.insert(
        session_id,
        ActiveSession {
            connected_at: Instant::now(),
            root_word: None,
        },
    );
    tracing::info!("WebSocket connection established for session {}", session_id);

    // Spawn a task to send messages to the client
    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            match serde_json::to_string(&msg) {
                Ok(json) => {
                    if sender.send(Message::Text(json.into())).await.is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!("Failed to serialize message: {}", e);
                }
            }
        }
    });

    // Handle incoming messages from the client
    let state_for_recv = state.clone();
    let mut recv_task = tokio::spawn(async move {
        let mut engine = GameEngine::new(
            state_for_recv.root_words.clone(),
            state_for_recv.dictionary.clone(),
            state_for_recv.config.game.language.clone(),
        );
        tracing::debug!(
            "Session {} checks words against the '{}' dictionary",
            session_id,
            engine.language()
        );

        while let Some(Ok(msg)) = receiver.next().await {
            match msg {
                Message::Text(text) => match serde_json::from_str::<ClientMessage>(&text) {
                    Ok(client_msg) => {
                        if let Err(e) = handle_client_message(
                            client_msg,
                            &mut engine,
                            &state_for_recv,
                            session_id,
                            &tx,
                        )
                        .await
                        {
                            tracing::error!("Error handling message: {}", e);
                            let error_msg = ServerMessage::Error {
                                message: e.to_string(),
                            };
                            let _ = tx.send(error_msg).await;
                        }
                    }
                    Err(e) => {
                        tracing::error!("Failed to parse message: {}", e);
                        let error_msg = ServerMessage::Error {
                            message: format!("Invalid message format: {}", e),
                        };
                        let _ = tx.send(error_msg).await;
                    }
                },
                Message::Close(_) => {
                    tracing::info!("Client disconnected: session {}", session_id);
                    break;
                }
                _ => {}
            }
        }
    });

    // Wait for either task to finish
    tokio::select! {
        _ = (&mut send_task) => {
            recv_task.abort();
        }
        _ = (&mut recv_task) => {
            send_task.abort();
        }
    }

    if let Some((_, session)) = state.sessions.remove(&session_id) {
        tracing::info!(
            "WebSocket connection closed for session {} after {:?}",
            session_id,
            session.connected_at.elapsed()
        );
    }
}

/// Apply one client message to the connection's engine and forward the resulting events
async fn handle_client_message(
    msg: ClientMessage,
    engine: &mut GameEngine,
    state: &AppState,
    session_id: Uuid,
    tx: &mpsc::Sender<ServerMessage>,
) -> anyhow::Result<()> {
    match msg {
        ClientMessage::StartGame => {
            if engine.is_started() {
                tracing::info!("Session {} abandoned its game for a new root word", session_id);
            }
            engine.start_game()?;
            if let Some(mut active) = state.sessions.get_mut(&session_id) {
                active.root_word = engine.session().map(|s| s.root_word().to_string());
            }
        }
        ClientMessage::SubmitWord { word } => match engine.submit_word(&word) {
            Ok(outcome) if outcome.is_accepted() => {
                tracing::debug!("Session {} scored '{}'", session_id, word.trim())
            }
            Ok(outcome) => match outcome.rejection() {
                Some(reason) if reason.is_silent() => {
                    tracing::trace!("Session {} sent blank input", session_id)
                }
                reason => {
                    tracing::debug!("Session {} rejected '{}': {:?}", session_id, word.trim(), reason)
                }
            },
            Err(EngineError::NotStarted) => {
                tracing::warn!("Session {} submitted a word before starting", session_id);
                tx.send(ServerMessage::Error {
                    message: EngineError::NotStarted.to_string(),
                })
                .await?;
            }
            Err(e) => return Err(e.into()),
        },
        ClientMessage::GetState => {
            tx.send(ServerMessage::GameState {
                root_word: engine.root_word().map(str::to_string),
                used_words: UsedWordInfo::from_words(engine.used_words()),
            })
            .await?;
        }
    }

    for event in engine.drain_events() {
        tx.send(event.into()).await?;
    }

    Ok(())
}
