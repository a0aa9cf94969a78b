use anyhow::{Context, Result};

use crate::config::Config;
use crate::job::{classify, DestinationLocation, JobError, JobRequest, JobResult};
use crate::service::{ElasticTranscoderService, TranscodingService};

/// Creates and reads transcoding jobs on one pipeline.
///
/// Holds only immutable configuration, so concurrent calls on a shared client are
/// independent of each other.
pub struct JobClient<S = ElasticTranscoderService> {
    service: S,
    pipeline_id: String,
    location: DestinationLocation,
}

impl JobClient<ElasticTranscoderService> {
    /// Create a client talking to AWS Elastic Transcoder
    pub async fn connect(config: &Config) -> Result<Self> {
        let location = config.destination();
        location
            .base_url()
            .with_context(|| format!("Invalid destination path: {}", location.base_path()))?;

        let service = ElasticTranscoderService::new(config).await;

        tracing::debug!(
            pipeline_id = %config.aws.pipeline_id,
            region = %config.aws.region,
            "Connected to Elastic Transcoder"
        );

        Ok(Self::new(service, config.aws.pipeline_id.clone(), location))
    }
}

impl<S: TranscodingService> JobClient<S> {
    pub fn new(service: S, pipeline_id: impl Into<String>, location: DestinationLocation) -> Self {
        Self {
            service,
            pipeline_id: pipeline_id.into(),
            location,
        }
    }

    pub fn pipeline_id(&self) -> &str {
        &self.pipeline_id
    }

    pub fn location(&self) -> &DestinationLocation {
        &self.location
    }

    /// Submit a job transcoding `source_key` into `destination_key` with a preset.
    ///
    /// The source file and preset must exist and the destination key must not;
    /// the service enforces this and reports violations as errors.
    pub async fn create_job(
        &self,
        source_key: &str,
        destination_key: &str,
        preset_id: &str,
    ) -> Result<JobResult, JobError> {
        let request = JobRequest::new(source_key, destination_key, preset_id);

        tracing::info!(
            pipeline_id = %self.pipeline_id,
            source_key = %request.source_key,
            destination_key = %request.destination_key,
            preset_id = %request.preset_id,
            "Creating transcoding job"
        );

        let outcome = self.service.create_job(&self.pipeline_id, &request).await;
        let result = classify(outcome, &self.location);

        if let Ok(job) = &result {
            tracing::info!(job_id = ?job.id, status = %job.status, "Job created");
        }

        result
    }

    /// Read the current state of a previously created job
    pub async fn read_job(&self, job_id: &str) -> Result<JobResult, JobError> {
        tracing::debug!(job_id = %job_id, "Reading transcoding job");

        let outcome = self.service.read_job(job_id).await;
        classify(outcome, &self.location)
    }
}
