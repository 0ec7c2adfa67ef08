//! UseCase: サービス情報・ステータス取得

use std::sync::Arc;

use devprobe_shared::time::Clock;

use crate::domain::{HostInfo, ServiceInfo, ServiceStatus, Timestamp, VisitCounter};

/// `/api/info` and `/api/status`
pub struct ServiceInfoUseCase {
    visit_counter: Arc<VisitCounter>,
    host: HostInfo,
    environment: String,
    clock: Arc<dyn Clock>,
}

impl ServiceInfoUseCase {
    pub fn new(
        visit_counter: Arc<VisitCounter>,
        host: HostInfo,
        environment: String,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            visit_counter,
            host,
            environment,
            clock,
        }
    }

    /// Count a visit and describe the service
    pub fn record_visit(&self) -> ServiceInfo {
        let visit_count = self.visit_counter.record();
        ServiceInfo {
            host: self.host.clone(),
            visit_count,
            environment: self.environment.clone(),
            timestamp: Timestamp::new(self.clock.now_iso8601()),
        }
    }

    /// Status without side effects
    pub fn status(&self) -> ServiceStatus {
        ServiceStatus {
            requests_processed: self.visit_counter.current(),
        }
    }
}
