//! Command-line client for the devprobe demo API.
//!
//! One-shot REST calls, SSE stream printing and an interactive chat session.
//! The chat session reconnects on disconnection (max 5 attempts with 5 second
//! interval) and re-joins its room.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin devprobe-client -- health
//! cargo run --bin devprobe-client -- echo '{"a":1}'
//! cargo run --bin devprobe-client -- stream --logs
//! cargo run --bin devprobe-client -- chat --username Alice --room ops
//! ```

use clap::{Parser, Subcommand};
use serde_json::Value;

use devprobe_client::{
    api::{ApiClient, StreamKind},
    chat::{ChatOptions, run_chat},
    domain::chat_url,
    error::ClientError,
    formatter::MessageFormatter,
};
use devprobe_server::infrastructure::dto::websocket::ChatMessageDto;
use devprobe_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "devprobe-client")]
#[command(about = "Client for the devprobe demo API", long_about = None)]
struct Args {
    /// Base URL of the server
    #[arg(short = 'u', long, env = "DEVPROBE_URL", default_value = "http://127.0.0.1:5000")]
    url: String,

    /// Print raw JSON instead of formatted output
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// GET /health
    Health,
    /// GET /api/info (counts a visit)
    Info,
    /// GET /api/status
    Status,
    /// GET /api/chat/messages
    Messages,
    /// POST /api/echo with a JSON body
    Echo {
        /// Any JSON value, e.g. '{"a":1}'
        body: String,
    },
    /// POST /api/chat/send
    Send {
        #[arg(short = 'n', long)]
        username: Option<String>,
        #[arg(short = 'r', long)]
        room: Option<String>,
        message: String,
    },
    /// Print an SSE stream until the server closes it
    Stream {
        /// Use /api/stream/logs instead of /api/stream
        #[arg(long)]
        logs: bool,
    },
    /// Interactive chat session
    Chat {
        #[arg(short = 'n', long)]
        username: String,
        #[arg(short = 'r', long, default_value = "general")]
        room: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    if let Err(e) = run(args).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), ClientError> {
    let client = ApiClient::new(&args.url);

    match args.command {
        Command::Health => print_json(&client.get_json("/health").await?),
        Command::Info => print_json(&client.get_json("/api/info").await?),
        Command::Status => print_json(&client.get_json("/api/status").await?),
        Command::Messages => {
            let history = client.get_json("/api/chat/messages").await?;
            if args.json {
                print_json(&history);
            } else {
                let messages: Vec<ChatMessageDto> =
                    serde_json::from_value(history["messages"].clone())?;
                if messages.is_empty() {
                    println!("(No messages)");
                }
                for message in &messages {
                    println!("{}", MessageFormatter::format_history_line(message));
                }
            }
        }
        Command::Echo { body } => {
            let body: Value = serde_json::from_str(&body)?;
            print_json(&client.echo(&body).await?);
        }
        Command::Send {
            username,
            room,
            message,
        } => {
            let sent = client.send_chat(username, message, room).await?;
            if args.json {
                print_json(&serde_json::to_value(&sent)?);
            } else {
                println!("{}", MessageFormatter::format_history_line(&sent));
            }
        }
        Command::Stream { logs } => {
            let kind = if logs {
                StreamKind::Logs
            } else {
                StreamKind::Ticks
            };
            let json = args.json;
            let received = client
                .stream(kind, |item| {
                    if json {
                        println!("{}", item.to_json());
                    } else {
                        println!("{}", MessageFormatter::format_stream_item(&item));
                    }
                })
                .await?;
            tracing::info!("Stream closed after {} events", received);
        }
        Command::Chat { username, room } => {
            let options = ChatOptions {
                url: chat_url(client.base_url())?,
                username,
                room,
            };
            run_chat(options).await?;
        }
    }

    Ok(())
}

fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{}", text),
        Err(_) => println!("{}", value),
    }
}
