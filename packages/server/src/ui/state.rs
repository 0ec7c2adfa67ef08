//! Shared application state.

use std::sync::Arc;

use devprobe_shared::time::Clock;

use crate::{
    domain::{StreamSettings, VisitCounter},
    infrastructure::{
        host,
        message_pusher::WebSocketMessagePusher,
        repository::{InMemoryChatHistoryRepository, InMemoryRoomRepository},
    },
    usecase::{
        ConnectParticipantUseCase, DisconnectParticipantUseCase, GetChatHistoryUseCase,
        JoinRoomUseCase, LeaveRoomUseCase, SendMessageUseCase, ServiceInfoUseCase,
        StreamLogsUseCase, StreamTicksUseCase,
    },
};

/// Shared application state, injected into every handler
pub struct AppState {
    pub connect_participant_usecase: ConnectParticipantUseCase,
    pub disconnect_participant_usecase: DisconnectParticipantUseCase,
    pub join_room_usecase: JoinRoomUseCase,
    pub leave_room_usecase: LeaveRoomUseCase,
    pub send_message_usecase: SendMessageUseCase,
    pub get_chat_history_usecase: GetChatHistoryUseCase,
    pub service_info_usecase: ServiceInfoUseCase,
    pub stream_ticks_usecase: StreamTicksUseCase,
    pub stream_logs_usecase: StreamLogsUseCase,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Wire the in-memory stores, the WebSocket pusher and every use case.
    ///
    /// Dependencies are created in order:
    /// 1. Repositories
    /// 2. MessagePusher
    /// 3. UseCases
    pub fn in_memory(
        environment: String,
        stream_settings: StreamSettings,
        clock: Arc<dyn Clock>,
    ) -> Self {
        // 1. Repositories (in-memory)
        let history_repository = Arc::new(InMemoryChatHistoryRepository::new());
        let room_repository = Arc::new(InMemoryRoomRepository::new());
        let visit_counter = Arc::new(VisitCounter::new());

        // 2. MessagePusher (WebSocket implementation)
        let message_pusher = Arc::new(WebSocketMessagePusher::new());

        // 3. UseCases
        let host = host::detect();
        let hostname = host.hostname.clone();

        Self {
            connect_participant_usecase: ConnectParticipantUseCase::new(
                message_pusher.clone(),
                clock.clone(),
            ),
            disconnect_participant_usecase: DisconnectParticipantUseCase::new(
                room_repository.clone(),
                message_pusher.clone(),
            ),
            join_room_usecase: JoinRoomUseCase::new(
                room_repository.clone(),
                message_pusher.clone(),
                clock.clone(),
            ),
            leave_room_usecase: LeaveRoomUseCase::new(
                room_repository.clone(),
                message_pusher.clone(),
                clock.clone(),
            ),
            send_message_usecase: SendMessageUseCase::new(
                history_repository.clone(),
                room_repository,
                message_pusher,
            ),
            get_chat_history_usecase: GetChatHistoryUseCase::new(history_repository),
            service_info_usecase: ServiceInfoUseCase::new(
                visit_counter,
                host,
                environment,
                clock.clone(),
            ),
            stream_ticks_usecase: StreamTicksUseCase::new(
                hostname.clone(),
                stream_settings,
                clock.clone(),
            ),
            stream_logs_usecase: StreamLogsUseCase::new(hostname, stream_settings, clock.clone()),
            clock,
        }
    }
}
