use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::job::JobRequest;

pub mod elastic;

pub use elastic::ElasticTranscoderService;

/// Error code the service uses for authorization failures
pub const ACCESS_DENIED_CODE: &str = "AccessDeniedException";

/// Remote transcoding service that accepts and reports on jobs.
///
/// Implementations return the service's response untouched; interpreting it is
/// the job of [`crate::job::classify`].
#[async_trait]
pub trait TranscodingService: Send + Sync {
    /// Submit a new job to the given pipeline
    async fn create_job(
        &self,
        pipeline_id: &str,
        request: &JobRequest,
    ) -> Result<JobResponse, ServiceError>;

    /// Fetch the current state of a previously submitted job
    async fn read_job(&self, job_id: &str) -> Result<JobResponse, ServiceError>;
}

/// Transport or service level failure reported by the remote call
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("service error (code: {}, status: {}): {message}", or_none(.code), or_none(.status_code))]
pub struct ServiceError {
    /// Error code, e.g. `AccessDeniedException`
    pub code: Option<String>,

    /// HTTP status of the failed response, if one was received
    pub status_code: Option<u16>,

    /// Human readable message
    pub message: String,
}

impl ServiceError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            status_code: None,
            message: message.into(),
        }
    }

    pub fn with_status(mut self, status_code: u16) -> Self {
        self.status_code = Some(status_code);
        self
    }

    pub fn is_access_denied(&self) -> bool {
        self.code.as_deref() == Some(ACCESS_DENIED_CODE)
    }
}

fn or_none<T: std::fmt::Display>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map(|v| v.to_string())
        .unwrap_or_else(|| "none".to_string())
}

/// Response body of a create or read call, usually `{ "Job": { .. } }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JobResponse {
    #[serde(default)]
    pub job: Option<RawJob>,
}

/// Job descriptor as reported by the service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RawJob {
    pub id: Option<String>,
    pub arn: Option<String>,
    pub pipeline_id: Option<String>,
    pub output: Option<RawJobOutput>,
    pub input: Option<RawJobInput>,
}

/// The single output section of a job
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RawJobOutput {
    pub status: Option<String>,
    pub status_detail: Option<String>,
    pub duration: Option<i64>,
    pub file_size: Option<i64>,
    pub key: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RawJobInput {
    pub key: Option<String>,
}
