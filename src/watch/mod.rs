use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};
use tokio::time::sleep;

use crate::client::JobClient;
use crate::job::{JobError, JobResult};
use crate::service::TranscodingService;

/// Errors that end a watch before the job reaches a terminal status
#[derive(thiserror::Error, Debug)]
pub enum WatchError {
    #[error(transparent)]
    Job(#[from] JobError),

    #[error("Job result has no id to poll with")]
    MissingJobId,

    #[error("Job {job_id} still {status} after {attempts} reads")]
    GaveUp {
        job_id: String,
        status: String,
        attempts: u32,
    },
}

/// Polls a job until it completes or fails
pub struct JobWatcher<'a, S> {
    client: &'a JobClient<S>,
    interval: Duration,
    max_attempts: Option<u32>,
    progress: ProgressBar,
}

impl<'a, S: TranscodingService> JobWatcher<'a, S> {
    pub fn new(client: &'a JobClient<S>, interval: Duration) -> Self {
        Self {
            client,
            interval,
            max_attempts: None,
            progress: ProgressBar::hidden(),
        }
    }

    /// Give up after this many reads; unbounded by default
    pub fn max_attempts(mut self, max_attempts: Option<u32>) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Show a spinner with the job status while waiting
    pub fn with_spinner(mut self) -> Self {
        let progress = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        progress.set_style(style);
        progress.enable_steady_tick(Duration::from_millis(120));
        self.progress = progress;
        self
    }

    /// Read the job until its status is terminal.
    ///
    /// `last` is the most recent result the caller holds, typically the one
    /// returned by `create_job`.
    pub async fn wait(&self, last: JobResult) -> Result<JobResult, WatchError> {
        if !last.is_pending() {
            return Ok(last);
        }

        let Some(job_id) = last.id.clone() else {
            self.progress.abandon_with_message("Job has no id");
            return Err(WatchError::MissingJobId);
        };
        let start_time = Instant::now();
        let mut current = last;
        let mut attempts = 0u32;

        while current.is_pending() {
            if self.max_attempts.is_some_and(|max| attempts >= max) {
                self.progress.abandon_with_message(format!("Gave up on job {}", job_id));
                return Err(WatchError::GaveUp {
                    job_id,
                    status: current.status.to_string(),
                    attempts,
                });
            }

            self.progress.set_message(format!(
                "Job {} {} ({}s elapsed, check #{})",
                job_id,
                current.status,
                start_time.elapsed().as_secs(),
                attempts
            ));

            sleep(self.interval).await;
            attempts += 1;

            current = match self.client.read_job(&job_id).await {
                Ok(result) => result,
                Err(err) => {
                    self.progress.abandon_with_message(format!("Job {} failed", job_id));
                    return Err(err.into());
                }
            };

            tracing::debug!(
                pipeline_id = %self.client.pipeline_id(),
                job_id = %job_id,
                status = %current.status,
                attempts,
                "Polled job"
            );
        }

        self.progress
            .finish_with_message(format!("Job {} {}", job_id, current.status));

        Ok(current)
    }
}
