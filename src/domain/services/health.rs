#[cfg(test)]
#[path = "health_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc;
use tokio::time;

use crate::domain::models::Event;
use crate::domain::models::HealthReport;
use crate::domain::models::LegalApiRef;

/// Any failure to get a health report counts as the backend being unhealthy.
pub async fn check_health(api: &LegalApiRef) -> HealthReport {
    match api.health_check().await {
        Ok(report) => {
            tracing::debug!(status = %report.status, indexed_documents = ?report.indexed_documents, "Health check");
            return report;
        }
        Err(err) => {
            tracing::warn!(error = ?err, "Health check failed");
            return HealthReport::unhealthy();
        }
    }
}

pub struct HealthService {}

impl HealthService {
    /// Polls the backend forever, starting immediately. Runs independently of
    /// chat and upload requests.
    pub async fn start(
        api: LegalApiRef,
        tx: mpsc::UnboundedSender<Event>,
        interval: Duration,
    ) -> Result<()> {
        let mut ticker = time::interval(interval.max(Duration::from_millis(100)));
        ticker.set_missed_tick_behavior(time::MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            let report = check_health(&api).await;
            tx.send(Event::HealthUpdate(report))?;
        }
    }
}
