//! ドメイン層
//!
//! Chat history, room membership and the event vocabulary of the chat
//! channel. Nothing here knows about HTTP, WebSocket frames or JSON.

pub mod entity;
pub mod error;
pub mod event;
pub mod message_pusher;
pub mod repository;
pub mod stream;
pub mod value_object;

pub use entity::{ChatMessage, HostInfo, NewChatMessage, ServiceInfo, ServiceStatus, VisitCounter};
pub use error::{MessagePushError, RepositoryError};
pub use event::ChatEvent;
pub use message_pusher::{MessagePusher, PusherChannel};
pub use repository::{ChatHistoryRepository, RoomRepository};
pub use stream::{LOG_LEVELS, LOG_MESSAGES, LogEntry, LogLevel, StreamSettings, TickEvent};
pub use value_object::{ConnectionId, RoomName, Timestamp, Username};
