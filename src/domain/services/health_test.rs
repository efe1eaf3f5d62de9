use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use tokio::sync::mpsc;
use tokio::time;

use super::check_health;
use super::HealthService;
use crate::domain::models::ApiError;
use crate::domain::models::Event;
use crate::domain::models::HealthStatus;
use crate::domain::services::test_api::FakeApi;

#[tokio::test]
async fn it_passes_through_healthy_reports() {
    let (_, api) = FakeApi::default().into_ref();
    let report = check_health(&api).await;

    assert_eq!(report.status, HealthStatus::Healthy);
    assert_eq!(report.indexed_documents, Some(12));
}

#[tokio::test]
async fn it_treats_failures_as_unhealthy() {
    let (_, api) = FakeApi {
        health: Err(ApiError::Rejected {
            status: 500,
            message: None,
        }),
        ..FakeApi::default()
    }
    .into_ref();
    let report = check_health(&api).await;

    assert_eq!(report.status, HealthStatus::Unhealthy);
    assert_eq!(report.indexed_documents, None);
}

#[tokio::test]
async fn it_polls_on_an_interval() -> Result<()> {
    let (fake, api) = FakeApi::default().into_ref();
    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();

    let poller = tokio::spawn(HealthService::start(api, tx, Duration::from_millis(100)));

    for _ in 0..2 {
        let event = time::timeout(Duration::from_secs(2), rx.recv()).await?;
        match event {
            Some(Event::HealthUpdate(report)) => {
                assert_eq!(report.status, HealthStatus::Healthy)
            }
            _ => bail!("Wrong enum"),
        }
    }
    poller.abort();

    assert!(fake.calls().len() >= 2);
    return Ok(());
}
