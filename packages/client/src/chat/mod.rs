//! Interactive chat over the `/chat` WebSocket channel.

mod runner;
mod session;

pub use runner::run_chat;
pub use session::ChatOptions;
