use crate::service::ServiceError;

/// Errors surfaced by job operations.
///
/// Transport failures and per-job failures are kept apart: `AccessDenied` calls for
/// a credentials or policy fix, `ServiceReported` for a fix to the content or the
/// request. See <https://docs.aws.amazon.com/elastictranscoder/latest/developerguide/error-handling.html>
/// for the meaning of the reported codes.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum JobError {
    #[error("Access denied")]
    AccessDenied,

    #[error("Job failed with service error {code}")]
    ServiceReported {
        /// Numeric error code leading the status detail, e.g. 3002
        code: u32,
        /// Full status detail text
        detail: String,
    },

    #[error("Unexpected response: {0}")]
    Unexpected(UnexpectedResponse),
}

impl JobError {
    /// Short message for the error; the numeric code for service reported errors
    pub fn message(&self) -> String {
        match self {
            JobError::AccessDenied => "AccessDeniedException".to_string(),
            JobError::ServiceReported { code, .. } => code.to_string(),
            JobError::Unexpected(_) => "Unexpected".to_string(),
        }
    }
}

impl From<UnexpectedResponse> for JobError {
    fn from(reason: UnexpectedResponse) -> Self {
        JobError::Unexpected(reason)
    }
}

/// Why a response could not be classified as a result or a known error
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum UnexpectedResponse {
    #[error(transparent)]
    Service(ServiceError),

    #[error("response has no job descriptor")]
    MissingJob,

    #[error("job has no output section")]
    MissingOutput,

    #[error("job has no input section")]
    MissingInput,

    #[error("job output has no status")]
    MissingStatus,

    #[error("unknown job status: {0}")]
    UnknownStatus(String),

    #[error("job error detail has no error code: {}", .0.as_deref().unwrap_or("<empty>"))]
    UnparseableDetail(Option<String>),
}
