//! UseCase 層
//!
//! Each use case wires domain traits together for one operation of the
//! service. Handlers in the UI layer call these and never touch the stores
//! directly.

mod connect_participant;
mod disconnect_participant;
mod error;
mod get_chat_history;
mod join_room;
mod leave_room;
mod send_message;
mod service_info;
mod stream_logs;
mod stream_ticks;

pub use connect_participant::ConnectParticipantUseCase;
pub use disconnect_participant::DisconnectParticipantUseCase;
pub use error::{ConnectError, MembershipError, SendMessageError};
pub use get_chat_history::GetChatHistoryUseCase;
pub use join_room::JoinRoomUseCase;
pub use leave_room::LeaveRoomUseCase;
pub use send_message::{BroadcastScope, SendMessageUseCase};
pub use service_info::ServiceInfoUseCase;
pub use stream_logs::StreamLogsUseCase;
pub use stream_ticks::StreamTicksUseCase;
