//! WebSocket connection handler

use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};

use super::events::{ClientMessage, PongMessage};
use super::state::AppState;

/// WebSocket upgrade handler
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Handle an individual WebSocket connection
///
/// The subscriber's first message is always the current snapshot, queued by
/// `subscribe` before any later event; this is what makes a reconnect
/// self-healing after missed events.
async fn handle_socket(mut socket: WebSocket, state: Arc<AppState>) {
    let (subscriber_id, mut rx) = state.hub.subscribe(state.store.snapshot());

    loop {
        tokio::select! {
            // Fan-out events to this client
            event = rx.recv() => {
                match event {
                    Some(msg) => {
                        if let Ok(json) = serde_json::to_string(&msg) {
                            if socket.send(Message::Text(json)).await.is_err() {
                                break; // Client disconnected
                            }
                        }
                    }
                    None => break, // Hub dropped us
                }
            }

            // Handle client messages
            result = socket.recv() => {
                match result {
                    Some(Ok(msg)) => {
                        if !handle_client_message(msg, &mut socket).await {
                            break; // Client requested close or error
                        }
                    }
                    Some(Err(_)) => break, // WebSocket error
                    None => break, // Client disconnected
                }
            }
        }
    }

    state.hub.unsubscribe(subscriber_id);
}

/// Handle a message from the client
/// Returns false if the connection should be closed
async fn handle_client_message(msg: Message, socket: &mut WebSocket) -> bool {
    match msg {
        Message::Text(text) => {
            // Malformed payloads are discarded, never a reason to tear down
            if let Ok(ClientMessage::Ping) = serde_json::from_str::<ClientMessage>(&text) {
                let pong = PongMessage::default();
                if let Ok(json) = serde_json::to_string(&pong) {
                    let _ = socket.send(Message::Text(json)).await;
                }
            }
            true
        }
        Message::Binary(_) => true, // Ignore binary messages
        Message::Ping(data) => {
            let _ = socket.send(Message::Pong(data)).await;
            true
        }
        Message::Pong(_) => true,   // Ignore pong responses
        Message::Close(_) => false, // Client requested close
    }
}
