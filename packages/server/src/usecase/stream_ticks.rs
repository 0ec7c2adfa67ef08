//! UseCase: tick ストリーム生成
//!
//! A fresh, finite stream per request. Dropping the stream (the client went
//! away) stops it at the next await point.

use std::sync::Arc;

use async_stream::stream;
use devprobe_shared::time::Clock;
use futures_util::Stream;

use crate::domain::{StreamSettings, TickEvent, Timestamp};

pub struct StreamTicksUseCase {
    hostname: String,
    settings: StreamSettings,
    clock: Arc<dyn Clock>,
}

impl StreamTicksUseCase {
    pub fn new(hostname: String, settings: StreamSettings, clock: Arc<dyn Clock>) -> Self {
        Self {
            hostname,
            settings,
            clock,
        }
    }

    /// `tick_count` numbered ticks, `tick_interval` apart, then one completion event
    pub fn execute(&self) -> impl Stream<Item = TickEvent> + Send + use<> {
        let hostname = self.hostname.clone();
        let clock = self.clock.clone();
        let StreamSettings {
            tick_count,
            tick_interval,
            ..
        } = self.settings;

        stream! {
            tracing::info!("Starting SSE stream");
            for count in 1..=tick_count {
                yield TickEvent::Tick {
                    count,
                    message: format!("Streaming message {count}"),
                    timestamp: Timestamp::new(clock.now_iso8601()),
                    hostname: hostname.clone(),
                };
                tokio::time::sleep(tick_interval).await;
            }
            yield TickEvent::Complete { count: tick_count };
            tracing::info!("SSE stream completed");
        }
    }
}
