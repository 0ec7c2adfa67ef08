//! WebSocket chat channel (`/chat` namespace).
//!
//! Per connection: `Disconnected → Connected → (JoinedRoom)* → Disconnected`.
//! A connection may join and leave any number of rooms; leaving a room it
//! never joined is allowed.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use crate::{
    domain::{ConnectionId, RoomName, Timestamp, Username},
    infrastructure::dto::websocket::ClientFrame,
    ui::state::AppState,
    usecase::BroadcastScope,
};

pub async fn chat_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Spawns a task that receives frames from the rx channel and pushes them to the WebSocket sender.
///
/// This is the outbound half of a connection: everything the pusher sends to
/// this connection (acknowledgement, room broadcasts) goes through here.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: futures_util::stream::SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(frame) = rx.recv().await {
            if sender.send(Message::Text(frame.into())).await.is_err() {
                break;
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (sender, mut receiver) = socket.split();

    // Create a channel for this connection to receive pushed frames
    let (tx, rx) = mpsc::unbounded_channel();

    let connection_id = match state.connect_participant_usecase.execute(tx).await {
        Ok(id) => id,
        Err(e) => {
            tracing::warn!("Failed to accept chat connection: {}", e);
            return;
        }
    };
    tracing::info!("Client connected: {}", connection_id);

    let mut send_task = pusher_loop(rx, sender);

    let connection_id_clone = connection_id.clone();
    let state_clone = state.clone();

    // Spawn a task to receive frames from this connection
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::warn!("WebSocket error on '{}': {}", connection_id_clone, e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    tracing::debug!("Received frame from '{}': {}", connection_id_clone, text);
                    dispatch(&state_clone, &connection_id_clone, text.as_str()).await;
                }
                Message::Close(_) => {
                    tracing::debug!("Client '{}' requested close", connection_id_clone);
                    break;
                }
                // Ping/pong is handled automatically by the WebSocket protocol
                _ => {}
            }
        }
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    match state
        .disconnect_participant_usecase
        .execute(&connection_id)
        .await
    {
        Ok(rooms) => tracing::info!(
            "Client disconnected: {} (left {} room(s))",
            connection_id,
            rooms.len()
        ),
        Err(e) => tracing::warn!(
            "Client disconnected: {} (room cleanup failed: {})",
            connection_id,
            e
        ),
    }
}

/// Handle one text frame. Bad frames are logged and ignored.
async fn dispatch(state: &AppState, connection_id: &ConnectionId, text: &str) {
    let frame = match ClientFrame::parse(text) {
        Ok(frame) => frame,
        Err(e) => {
            tracing::warn!("Ignoring frame from '{}': {}", connection_id, e);
            return;
        }
    };

    match frame {
        ClientFrame::Join(payload) => {
            let username = Username::or_default(payload.username);
            let room = RoomName::or_default(payload.room);
            match state
                .join_room_usecase
                .execute(connection_id, username.clone(), room.clone())
                .await
            {
                Ok(_) => tracing::info!("{} joined room {}", username, room),
                Err(e) => tracing::warn!("{} could not join room {}: {}", username, room, e),
            }
        }
        ClientFrame::Leave(payload) => {
            let username = Username::or_default(payload.username);
            let room = RoomName::or_default(payload.room);
            match state
                .leave_room_usecase
                .execute(connection_id, username.clone(), room.clone())
                .await
            {
                Ok(_) => tracing::info!("{} left room {}", username, room),
                Err(e) => tracing::warn!("{} could not leave room {}: {}", username, room, e),
            }
        }
        ClientFrame::SendMessage(payload) => {
            let draft = payload.into_draft(Timestamp::new(state.clock.now_iso8601()));
            let room = draft.room.clone();
            match state
                .send_message_usecase
                .execute(draft, BroadcastScope::Room(room.clone()))
                .await
            {
                Ok(message) => {
                    tracing::info!("Message sent to room {}: {}", room, message.message)
                }
                Err(e) => tracing::warn!("Failed to send message to room {}: {}", room, e),
            }
        }
    }
}
