use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, service::conditions::ConditionsService};

/// Starts the station conditions collector
///
/// Runs every ten minutes and stores one traffic and one weather report for
/// every monitored station whose provider calls succeed. Stations with
/// failed calls are dropped from the batch and retried on the next run.
///
/// # Arguments
/// - `db`: Database connection
/// - `http_client`: HTTP client for provider requests
pub async fn start_scheduler(
    db: DatabaseConnection,
    http_client: reqwest::Client,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    // Clone resources for the job
    let job_db = db.clone();
    let job_http = http_client.clone();

    // Schedule job to run every ten minutes
    let job = Job::new_async("0 */10 * * * *", move |_uuid, _lock| {
        let db = job_db.clone();
        let http_client = job_http.clone();

        Box::pin(async move {
            if let Err(e) = collect_station_conditions(&db, &http_client).await {
                tracing::error!("Error collecting station conditions: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Station conditions collector started");

    Ok(())
}

/// Runs one collection pass over all monitored stations.
async fn collect_station_conditions(
    db: &DatabaseConnection,
    http_client: &reqwest::Client,
) -> Result<(), AppError> {
    let outcome = ConditionsService::new(db, http_client)
        .collect_and_store()
        .await?;

    if outcome.failed_station_ids.is_empty() {
        tracing::info!("Stored condition reports for {} stations", outcome.stored);
    } else {
        tracing::warn!(
            "Stored condition reports for {} stations; dropped {:?}",
            outcome.stored,
            outcome.failed_station_ids
        );
    }

    Ok(())
}
