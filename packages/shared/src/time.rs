//! Time-related utilities with clock abstraction for testability.
//!
//! Every timestamp devprobe puts on the wire is an ISO-8601 string in the
//! server's local offset with microsecond precision, e.g.
//! `2026-10-18T09:30:00.123456+09:00`.

use chrono::{DateTime, FixedOffset, Local, SecondsFormat};

/// Clock trait for dependency injection and testing
pub trait Clock: Send + Sync {
    /// Current local time
    fn now(&self) -> DateTime<FixedOffset>;

    /// Current local time formatted as ISO-8601
    fn now_iso8601(&self) -> String {
        to_iso8601(&self.now())
    }
}

/// System clock implementation (uses actual system time)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Fixed clock implementation for testing (returns a fixed time)
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    fixed_time: DateTime<FixedOffset>,
}

impl FixedClock {
    /// Create a new fixed clock with the given time
    pub fn new(fixed_time: DateTime<FixedOffset>) -> Self {
        Self { fixed_time }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.fixed_time
    }
}

/// Format a timestamp as ISO-8601 (RFC 3339, microseconds, numeric offset)
pub fn to_iso8601(time: &DateTime<FixedOffset>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Micros, false)
}

/// Render an ISO-8601 timestamp as `HH:MM:SS` for terminal output.
///
/// Falls back to the raw input when it does not parse.
pub fn to_clock_time(iso8601: &str) -> String {
    DateTime::parse_from_rfc3339(iso8601)
        .map(|time| time.format("%H:%M:%S").to_string())
        .unwrap_or_else(|_| iso8601.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_time() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2023-01-01T00:00:00.123456+09:00").unwrap()
    }

    #[test]
    fn test_system_clock_returns_parseable_timestamp() {
        // テスト項目: SystemClock が RFC 3339 として解釈できる時刻を返す
        // given (前提条件):
        let clock = SystemClock;

        // when (操作):
        let timestamp = clock.now_iso8601();

        // then (期待する結果):
        assert!(DateTime::parse_from_rfc3339(&timestamp).is_ok());
    }

    #[test]
    fn test_system_clock_returns_increasing_timestamps() {
        // テスト項目: SystemClock が呼び出すたびに増加する時刻を返す
        // given (前提条件):
        let clock = SystemClock;

        // when (操作):
        let time1 = clock.now();
        std::thread::sleep(std::time::Duration::from_millis(10));
        let time2 = clock.now();

        // then (期待する結果):
        assert!(time2 >= time1);
    }

    #[test]
    fn test_fixed_clock_returns_fixed_timestamp() {
        // テスト項目: FixedClock が固定された時刻を返し続ける
        // given (前提条件):
        let clock = FixedClock::new(fixed_time());

        // when (操作):
        let first = clock.now_iso8601();
        let second = clock.now_iso8601();

        // then (期待する結果):
        assert_eq!(first, "2023-01-01T00:00:00.123456+09:00");
        assert_eq!(first, second);
    }

    #[test]
    fn test_to_iso8601_keeps_offset() {
        // テスト項目: オフセット付きの ISO-8601 形式に変換される
        // given (前提条件):
        let time = DateTime::parse_from_rfc3339("2023-06-30T12:34:56-05:00").unwrap();

        // when (操作):
        let result = to_iso8601(&time);

        // then (期待する結果):
        assert_eq!(result, "2023-06-30T12:34:56.000000-05:00");
    }

    #[test]
    fn test_to_clock_time() {
        // テスト項目: 端末表示用に時刻部分だけが取り出される
        // given (前提条件):
        let iso = "2023-01-01T08:15:30.000000+09:00";

        // when (操作):
        let result = to_clock_time(iso);

        // then (期待する結果):
        assert_eq!(result, "08:15:30");
        assert_eq!(to_clock_time("not a time"), "not a time");
    }
}
