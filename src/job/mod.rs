use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod classify;
pub mod error;
pub mod result;

pub use classify::classify;
pub use error::{JobError, UnexpectedResponse};
pub use result::{DestinationLocation, JobResult};

/// Parameters for submitting a job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRequest {
    /// Key of the file to transcode, including any prefix (e.g. `cooking/lasagna.mpg`).
    /// The file must exist in the pipeline's input bucket.
    pub source_key: String,

    /// Key to assign to the transcoded file. The job fails if it already exists.
    pub destination_key: String,

    /// Preset that determines the audio and video settings
    pub preset_id: String,
}

impl JobRequest {
    pub fn new(
        source_key: impl Into<String>,
        destination_key: impl Into<String>,
        preset_id: impl Into<String>,
    ) -> Self {
        Self {
            source_key: source_key.into(),
            destination_key: destination_key.into(),
            preset_id: preset_id.into(),
        }
    }
}

/// Lifecycle status of a job's output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobStatus {
    Submitted,
    Progressing,
    Complete,
    Error,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Submitted => "Submitted",
            JobStatus::Progressing => "Progressing",
            JobStatus::Complete => "Complete",
            JobStatus::Error => "Error",
        }
    }

    /// Whether the job will not change status anymore
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Complete | JobStatus::Error)
    }
}

impl FromStr for JobStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Submitted" => Ok(JobStatus::Submitted),
            "Progressing" => Ok(JobStatus::Progressing),
            "Complete" => Ok(JobStatus::Complete),
            "Error" => Ok(JobStatus::Error),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
