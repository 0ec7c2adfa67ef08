//! InMemory Repository 実装
//!
//! Process-local stores. Everything is lost on restart.

mod chat_history;
mod room;

pub use chat_history::InMemoryChatHistoryRepository;
pub use room::InMemoryRoomRepository;
