//! WebSocket chat session management.

use futures_util::{SinkExt, StreamExt};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite::protocol::Message};

use devprobe_server::infrastructure::dto::websocket::{
    ClientFrame, MembershipPayload, SendMessagePayload, ServerFrame,
};

use crate::{
    domain::{InputAction, LEAVE_COMMAND, parse_input},
    error::ClientError,
    formatter::MessageFormatter,
    ui::redisplay_prompt,
};

/// Who to chat as and where
#[derive(Debug, Clone)]
pub struct ChatOptions {
    /// WebSocket URL of the chat channel
    pub url: String,
    pub username: String,
    pub room: String,
}

impl ChatOptions {
    fn membership(&self) -> MembershipPayload {
        MembershipPayload {
            username: Some(self.username.clone()),
            room: Some(self.room.clone()),
        }
    }

    fn message(&self, text: String) -> SendMessagePayload {
        SendMessagePayload {
            username: Some(self.username.clone()),
            message: Some(text),
            room: Some(self.room.clone()),
        }
    }
}

/// Run one chat session: connect, join the room, then relay input until the
/// user leaves or the connection drops.
///
/// Returns `Ok(())` when the user ended the session.
pub async fn run_chat_session(options: &ChatOptions) -> Result<(), ClientError> {
    let (ws_stream, _response) = connect_async(options.url.as_str())
        .await
        .map_err(|e| ClientError::ConnectionError(e.to_string()))?;

    tracing::info!("Connected to chat server!");
    println!(
        "\nYou are '{}' in #{}. Type messages and press Enter to send. Type {} or press Ctrl+C to exit.\n",
        options.username, options.room, LEAVE_COMMAND
    );

    let (mut write, mut read) = ws_stream.split();

    send_frame(&mut write, &ClientFrame::Join(options.membership())).await?;

    // Spawn a task to handle incoming frames
    let username_for_read = options.username.clone();
    let mut read_task = tokio::spawn(async move {
        let mut connection_error = false;

        while let Some(message) = read.next().await {
            match message {
                Ok(Message::Text(text)) => {
                    let formatted = match serde_json::from_str::<ServerFrame>(text.as_str()) {
                        Ok(frame) => MessageFormatter::format_frame(&frame, &username_for_read),
                        // If parsing fails, display as raw text
                        Err(_) => {
                            format!("\n{}\n", MessageFormatter::format_raw_message(text.as_str()))
                        }
                    };
                    print!("{}", formatted);
                    redisplay_prompt(&username_for_read);
                }
                Ok(Message::Binary(data)) => {
                    print!("{}", MessageFormatter::format_binary_message(data.len()));
                    redisplay_prompt(&username_for_read);
                }
                Ok(Message::Close(_)) => {
                    tracing::info!("Server closed the connection");
                    connection_error = true;
                    break;
                }
                Err(e) => {
                    tracing::warn!("WebSocket read error: {}", e);
                    connection_error = true;
                    break;
                }
                _ => {}
            }
        }

        connection_error
    });

    // Create channel for rustyline input
    let (input_tx, mut input_rx) = mpsc::unbounded_channel::<String>();

    // Spawn a blocking thread for rustyline (synchronous readline)
    let prompt = format!("{}> ", options.username);
    let _readline_handle = std::thread::spawn(move || {
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(e) => {
                eprintln!("Failed to initialize readline: {}", e);
                return;
            }
        };

        loop {
            match rl.readline(&prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        rl.add_history_entry(line.as_str()).ok();
                    }
                    if input_tx.send(line).is_err() {
                        // Channel closed, exit thread
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    // Ctrl+C
                    tracing::info!("Interrupted");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    // Ctrl+D
                    tracing::info!("EOF");
                    break;
                }
                Err(err) => {
                    tracing::error!("Readline error: {}", err);
                    break;
                }
            }
        }
    });

    // Spawn a task to turn input lines into frames
    let options_for_write = options.clone();
    let mut write_task = tokio::spawn(async move {
        while let Some(line) = input_rx.recv().await {
            let frame = match parse_input(&line) {
                InputAction::Ignore => continue,
                InputAction::Send(text) => {
                    ClientFrame::SendMessage(options_for_write.message(text))
                }
                InputAction::Leave => {
                    send_frame(
                        &mut write,
                        &ClientFrame::Leave(options_for_write.membership()),
                    )
                    .await?;
                    write.send(Message::Close(None)).await.ok();
                    println!("Left #{}", options_for_write.room);
                    return Ok(());
                }
            };

            send_frame(&mut write, &frame).await?;
        }

        Ok::<(), ClientError>(())
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        read_result = &mut read_task => {
            write_task.abort();
            if read_result.unwrap_or(false) {
                return Err(ClientError::ConnectionError("Connection lost".to_string()));
            }
        }
        write_result = &mut write_task => {
            read_task.abort();
            match write_result {
                Ok(result) => result?,
                Err(e) => return Err(ClientError::ConnectionError(e.to_string())),
            }
        }
    }

    Ok(())
}

async fn send_frame<S>(write: &mut S, frame: &ClientFrame) -> Result<(), ClientError>
where
    S: futures_util::Sink<Message> + Unpin,
    S::Error: std::fmt::Display,
{
    let json = frame.to_json()?;
    write
        .send(Message::Text(json.into()))
        .await
        .map_err(|e| ClientError::ConnectionError(e.to_string()))
}
