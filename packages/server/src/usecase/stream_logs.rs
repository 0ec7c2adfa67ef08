//! UseCase: 疑似ログストリーム生成

use std::sync::Arc;

use async_stream::stream;
use devprobe_shared::time::Clock;
use futures_util::Stream;
use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};

use crate::domain::{LOG_LEVELS, LOG_MESSAGES, LogEntry, LogLevel, StreamSettings, Timestamp};

pub struct StreamLogsUseCase {
    service: String,
    settings: StreamSettings,
    clock: Arc<dyn Clock>,
}

impl StreamLogsUseCase {
    pub fn new(service: String, settings: StreamSettings, clock: Arc<dyn Clock>) -> Self {
        Self {
            service,
            settings,
            clock,
        }
    }

    /// `log_count` random log lines, `log_interval` apart. No completion event.
    pub fn execute(&self) -> impl Stream<Item = LogEntry> + Send + use<> {
        self.execute_with_rng(StdRng::from_os_rng())
    }

    /// Same as [`execute`](Self::execute) with a caller-provided generator
    pub fn execute_with_rng(
        &self,
        mut rng: StdRng,
    ) -> impl Stream<Item = LogEntry> + Send + use<> {
        let service = self.service.clone();
        let clock = self.clock.clone();
        let StreamSettings {
            log_count,
            log_interval,
            ..
        } = self.settings;

        stream! {
            for index in 1..=log_count {
                let level = LOG_LEVELS.choose(&mut rng).copied().unwrap_or(LogLevel::Info);
                let message = LOG_MESSAGES.choose(&mut rng).copied().unwrap_or(LOG_MESSAGES[0]);
                yield LogEntry {
                    timestamp: Timestamp::new(clock.now_iso8601()),
                    level,
                    message,
                    service: service.clone(),
                    index,
                };
                tokio::time::sleep(log_interval).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use devprobe_shared::time::SystemClock;
    use futures_util::StreamExt;

    fn usecase() -> StreamLogsUseCase {
        StreamLogsUseCase::new(
            "probe-1".to_string(),
            StreamSettings::immediate(),
            Arc::new(SystemClock),
        )
    }

    #[tokio::test]
    async fn test_emits_twenty_entries_from_fixed_sets() {
        // テスト項目: 20 件のログが固定のレベル・メッセージ集合から生成される
        // given (前提条件):
        let usecase = usecase();

        // when (操作):
        let entries: Vec<LogEntry> = usecase.execute().collect().await;

        // then (期待する結果):
        assert_eq!(entries.len(), 20);
        for (i, entry) in entries.iter().enumerate() {
            assert_eq!(entry.index as usize, i + 1);
            assert!(LOG_LEVELS.contains(&entry.level));
            assert!(LOG_MESSAGES.contains(&entry.message));
            assert_eq!(entry.service, "probe-1");
        }
    }

    #[tokio::test]
    async fn test_seeded_generator_is_deterministic() {
        // テスト項目: 同じシードからは同じログ列が生成される
        // given (前提条件):
        let usecase = usecase();

        // when (操作):
        let first: Vec<(LogLevel, &str)> = usecase
            .execute_with_rng(StdRng::seed_from_u64(7))
            .map(|entry| (entry.level, entry.message))
            .collect()
            .await;
        let second: Vec<(LogLevel, &str)> = usecase
            .execute_with_rng(StdRng::seed_from_u64(7))
            .map(|entry| (entry.level, entry.message))
            .collect()
            .await;

        // then (期待する結果):
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_levels_vary_across_entries() {
        // テスト項目: 200 件生成すると全てのレベルが現れる
        // given (前提条件):
        let usecase = StreamLogsUseCase::new(
            "probe-1".to_string(),
            StreamSettings {
                log_count: 200,
                ..StreamSettings::immediate()
            },
            Arc::new(SystemClock),
        );

        // when (操作):
        let levels: HashSet<&str> = usecase
            .execute_with_rng(StdRng::seed_from_u64(42))
            .map(|entry| entry.level.as_str())
            .collect()
            .await;

        // then (期待する結果):
        assert_eq!(levels.len(), 4);
    }
}
