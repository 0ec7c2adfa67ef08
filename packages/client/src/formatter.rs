//! Message formatting utilities for client display.

use devprobe_server::infrastructure::dto::{
    sse::{LogEntryDto, TickStreamDto},
    websocket::{ChatMessageDto, ConnectionResponseDto, MembershipNoticeDto, ServerFrame},
};
use devprobe_shared::time::to_clock_time;

use crate::api::StreamItem;

const RULE: &str = "------------------------------------------------------------";

/// Message formatter for client display
pub struct MessageFormatter;

impl MessageFormatter {
    /// Format any frame pushed by the chat channel
    ///
    /// # Arguments
    ///
    /// * `frame` - The decoded server frame
    /// * `current_username` - The username of this session (to mark as "me")
    pub fn format_frame(frame: &ServerFrame, current_username: &str) -> String {
        match frame {
            ServerFrame::ConnectionResponse(ack) => Self::format_connected(ack),
            ServerFrame::UserJoined(notice) => {
                Self::format_user_joined(notice, current_username)
            }
            ServerFrame::UserLeft(notice) => Self::format_user_left(notice),
            ServerFrame::NewMessage(message) => Self::format_chat_message(message),
        }
    }

    pub fn format_connected(ack: &ConnectionResponseDto) -> String {
        format!(
            "\n* {} as {} at {}\n",
            ack.status,
            ack.sid,
            to_clock_time(&ack.timestamp)
        )
    }

    /// Format a user-joined notification; our own join is marked with "(me)"
    pub fn format_user_joined(notice: &MembershipNoticeDto, current_username: &str) -> String {
        let me_suffix = if notice.username == current_username {
            " (me)"
        } else {
            ""
        };
        format!(
            "\n+ {}{} joined #{} at {}\n",
            notice.username,
            me_suffix,
            notice.room,
            to_clock_time(&notice.timestamp)
        )
    }

    pub fn format_user_left(notice: &MembershipNoticeDto) -> String {
        format!(
            "\n- {} left #{} at {}\n",
            notice.username,
            notice.room,
            to_clock_time(&notice.timestamp)
        )
    }

    /// Format a chat message
    pub fn format_chat_message(message: &ChatMessageDto) -> String {
        format!(
            "\n\n{RULE}\n\
             [#{}] @{}: {}\n\
             #{} sent at {}\n\
             {RULE}\n",
            message.room,
            message.username,
            message.message,
            message.id,
            to_clock_time(&message.timestamp)
        )
    }

    /// One line of the chat history listing
    pub fn format_history_line(message: &ChatMessageDto) -> String {
        format!(
            "{:>4} {} [#{}] @{}: {}",
            message.id,
            to_clock_time(&message.timestamp),
            message.room,
            message.username,
            message.message
        )
    }

    /// Format one event of an SSE stream as a single line
    pub fn format_stream_item(item: &StreamItem) -> String {
        match item {
            StreamItem::Tick(TickStreamDto::Tick(tick)) => format!(
                "[{}] #{:<2} {} ({})",
                to_clock_time(&tick.timestamp),
                tick.count,
                tick.message,
                tick.hostname
            ),
            StreamItem::Tick(TickStreamDto::Complete(done)) => {
                format!("{} after {} messages", done.message, done.count)
            }
            StreamItem::Log(entry) => Self::format_log_entry(entry),
            StreamItem::Raw(payload) => Self::format_raw_message(payload),
        }
    }

    pub fn format_log_entry(entry: &LogEntryDto) -> String {
        format!(
            "[{}] {:>2} {:<5} {}: {}",
            to_clock_time(&entry.timestamp),
            entry.index,
            entry.level,
            entry.service,
            entry.message
        )
    }

    /// Format a binary message notification
    pub fn format_binary_message(byte_count: usize) -> String {
        format!("\n← Received {} bytes of binary data\n", byte_count)
    }

    /// Format a raw text message (when parsing fails)
    pub fn format_raw_message(text: &str) -> String {
        format!("← Received: {}", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devprobe_server::infrastructure::dto::sse::{StreamCompleteDto, TickDto};

    const TIMESTAMP: &str = "2023-01-01T09:15:30.123456+09:00";

    fn notice(username: &str) -> MembershipNoticeDto {
        MembershipNoticeDto {
            username: username.to_string(),
            room: "ops".to_string(),
            timestamp: TIMESTAMP.to_string(),
        }
    }

    #[test]
    fn test_format_user_joined_marks_me() {
        // テスト項目: 自分の参加通知には (me) が付く
        // given (前提条件):
        let notice = notice("alice");

        // when (操作):
        let mine = MessageFormatter::format_user_joined(&notice, "alice");
        let theirs = MessageFormatter::format_user_joined(&notice, "bob");

        // then (期待する結果):
        assert!(mine.contains("+ alice (me) joined #ops"));
        assert!(theirs.contains("+ alice joined #ops"));
        assert!(!theirs.contains("(me)"));
        assert!(theirs.contains("09:15:30"));
    }

    #[test]
    fn test_format_user_left() {
        // テスト項目: 退出通知が正しくフォーマットされる
        // given (前提条件):
        let notice = notice("charlie");

        // when (操作):
        let result = MessageFormatter::format_user_left(&notice);

        // then (期待する結果):
        assert!(result.contains("- charlie left #ops"));
        assert!(result.contains("09:15:30"));
    }

    #[test]
    fn test_format_chat_message() {
        // テスト項目: チャットメッセージが正しくフォーマットされる
        // given (前提条件):
        let message = ChatMessageDto {
            id: 7,
            username: "alice".to_string(),
            message: "Hello, world!".to_string(),
            room: "general".to_string(),
            timestamp: TIMESTAMP.to_string(),
        };

        // when (操作):
        let result = MessageFormatter::format_chat_message(&message);

        // then (期待する結果):
        assert!(result.contains("[#general] @alice: Hello, world!"));
        assert!(result.contains("#7 sent at 09:15:30"));
        assert!(result.contains(RULE));
    }

    #[test]
    fn test_format_frame_connection_response() {
        // テスト項目: 接続応答フレームが表示用に整形される
        // given (前提条件):
        let frame = ServerFrame::ConnectionResponse(ConnectionResponseDto {
            status: "connected".to_string(),
            sid: "abc".to_string(),
            timestamp: TIMESTAMP.to_string(),
        });

        // when (操作):
        let result = MessageFormatter::format_frame(&frame, "alice");

        // then (期待する結果):
        assert!(result.contains("connected as abc at 09:15:30"));
    }

    #[test]
    fn test_format_stream_items() {
        // テスト項目: SSE の各イベントが 1 行に整形される
        // given (前提条件):
        let tick = StreamItem::Tick(TickStreamDto::Tick(TickDto {
            count: 3,
            message: "Streaming message 3".to_string(),
            timestamp: TIMESTAMP.to_string(),
            hostname: "probe-1".to_string(),
        }));
        let done = StreamItem::Tick(TickStreamDto::Complete(StreamCompleteDto {
            message: "Stream complete".to_string(),
            count: 10,
        }));
        let log = StreamItem::Log(LogEntryDto {
            timestamp: TIMESTAMP.to_string(),
            level: "WARN".to_string(),
            message: "Cache updated".to_string(),
            service: "probe-1".to_string(),
            index: 4,
        });

        // when (操作):
        let tick = MessageFormatter::format_stream_item(&tick);
        let done = MessageFormatter::format_stream_item(&done);
        let log = MessageFormatter::format_stream_item(&log);

        // then (期待する結果):
        assert_eq!(tick, "[09:15:30] #3  Streaming message 3 (probe-1)");
        assert_eq!(done, "Stream complete after 10 messages");
        assert_eq!(log, "[09:15:30]  4 WARN  probe-1: Cache updated");
        assert!(!tick.contains('\n'));
    }

    #[test]
    fn test_format_history_line() {
        // テスト項目: 履歴の 1 行表示
        let message = ChatMessageDto {
            id: 12,
            username: "bob".to_string(),
            message: "hi".to_string(),
            room: "general".to_string(),
            timestamp: TIMESTAMP.to_string(),
        };
        assert_eq!(
            MessageFormatter::format_history_line(&message),
            "  12 09:15:30 [#general] @bob: hi"
        );
    }

    #[test]
    fn test_format_binary_message() {
        // テスト項目: バイナリメッセージ通知が正しくフォーマットされる
        let result = MessageFormatter::format_binary_message(1024);
        assert!(result.contains("1024 bytes"));
        assert!(result.contains("Received"));
    }
}
