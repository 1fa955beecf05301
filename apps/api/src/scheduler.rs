//! Daily generation job using tokio-cron-scheduler.
//!
//! One recurring job, no catch-up for missed runs, no overlap protection: if
//! a run is still in flight when the next fires, both proceed best-effort.
//! A failed firing is logged and the next firing is unaffected.

use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};
use tracing::{error, info};
use uuid::Uuid;

use crate::generation::generator::generate_post;
use crate::state::AppState;

/// The keyword refreshed by the daily job.
/// This is intentionally hardcoded; the job always regenerates the same post.
pub const DAILY_KEYWORD: &str = "wireless earbuds";

/// Cron job scheduler wrapper. Constructed explicitly at startup and held
/// for the process lifetime.
pub struct Scheduler {
    inner: JobScheduler,
}

impl Scheduler {
    pub async fn new() -> Result<Self, JobSchedulerError> {
        Ok(Self {
            inner: JobScheduler::new().await?,
        })
    }

    /// Registers the once-a-day generation job for [`DAILY_KEYWORD`].
    ///
    /// Every failure inside a firing (metrics, LLM, persistence) is caught
    /// and logged here; nothing propagates out of the job.
    pub async fn add_daily_generation(
        &self,
        schedule: &str,
        state: AppState,
    ) -> Result<Uuid, JobSchedulerError> {
        let job = Job::new_async(schedule, move |_uuid, _lock| {
            let state = state.clone();
            Box::pin(async move {
                info!("Running scheduled daily generation for '{DAILY_KEYWORD}'");
                match generate_post(&state, DAILY_KEYWORD).await {
                    Ok(generated) => {
                        info!("Daily post stored under key '{}'", generated.key);
                    }
                    Err(e) => error!("Daily generation failed: {e}"),
                }
            })
        })?;

        let id = self.inner.add(job).await?;
        info!(schedule = %schedule, job_id = %id, "Daily generation job registered");
        Ok(id)
    }

    /// Starts the scheduler.
    pub async fn start(&self) -> Result<(), JobSchedulerError> {
        self.inner.start().await?;
        info!("Scheduler started");
        Ok(())
    }
}
