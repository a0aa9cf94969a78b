use serde::{Deserialize, Serialize};
use url::Url;

use super::{JobStatus, UnexpectedResponse};
use crate::service::RawJob;

/// Where transcoded files end up, used to compose the destination path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationLocation {
    /// Storage service name used in the endpoint host, usually `s3`
    pub storage_service: String,

    /// Region of the storage endpoint
    pub region: String,

    /// Output bucket of the pipeline
    pub bucket: String,
}

impl DestinationLocation {
    pub fn new(
        storage_service: impl Into<String>,
        region: impl Into<String>,
        bucket: impl Into<String>,
    ) -> Self {
        Self {
            storage_service: storage_service.into(),
            region: region.into(),
            bucket: bucket.into(),
        }
    }

    /// Base path of the output bucket, like `https://s3-eu-west-1.amazonaws.com/rave-media/`
    pub fn base_path(&self) -> String {
        format!(
            "https://{}-{}.amazonaws.com/{}/",
            self.storage_service, self.region, self.bucket
        )
    }

    /// Parse the base path, failing when the parts do not form a valid URL
    pub fn base_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.base_path())
    }

    /// Full URL of a destination key inside the output bucket
    pub fn object_url(&self, key: &str) -> Option<Url> {
        join_key(&self.base_path(), key)
    }
}

fn join_key(base: &str, key: &str) -> Option<Url> {
    // "./" keeps keys containing ':' from being read as a scheme
    Url::parse(base)
        .ok()?
        .join(&format!("./{}", key.trim_start_matches('/')))
        .ok()
}

/// Result of a job, received from create or read operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct JobResult {
    /// Identifier assigned by the service, e.g. `1463492156553-lf7b8g`
    pub id: Option<String>,

    /// Resource name, e.g. `arn:aws:elastictranscoder:eu-west-1:081290220903:job/1463492156553-lf7b8g`
    pub arn: Option<String>,

    pub pipeline_id: Option<String>,

    pub status: JobStatus,

    /// Information that further explains the status
    pub status_detail: Option<String>,

    /// Duration of the output file in seconds
    pub duration: Option<i64>,

    /// Size of the output file in bytes
    pub file_size: Option<i64>,

    /// Destination key, like `out128/file.mp3`
    pub dst_file: Option<String>,

    /// Destination path, like `https://s3-eu-west-1.amazonaws.com/rave-media/`
    pub dst_path: String,

    /// Source key
    pub src_file: Option<String>,
}

impl JobResult {
    /// Build a result from a job descriptor.
    ///
    /// Fails unless the job carries both an output and an input section and the
    /// output status is one the service documents.
    pub fn from_raw(
        job: RawJob,
        location: &DestinationLocation,
    ) -> Result<Self, UnexpectedResponse> {
        let output = job.output.ok_or(UnexpectedResponse::MissingOutput)?;
        let input = job.input.ok_or(UnexpectedResponse::MissingInput)?;

        let status = output
            .status
            .as_deref()
            .ok_or(UnexpectedResponse::MissingStatus)?
            .parse::<JobStatus>()
            .map_err(UnexpectedResponse::UnknownStatus)?;

        Ok(Self {
            id: job.id,
            arn: job.arn,
            pipeline_id: job.pipeline_id,
            status,
            status_detail: output.status_detail,
            duration: output.duration,
            file_size: output.file_size,
            dst_file: output.key,
            dst_path: location.base_path(),
            src_file: input.key,
        })
    }

    /// Full URL of the transcoded file, once a destination key is known
    pub fn destination_url(&self) -> Option<Url> {
        join_key(&self.dst_path, self.dst_file.as_deref()?)
    }

    /// Whether the caller should poll again
    pub fn is_pending(&self) -> bool {
        !self.status.is_terminal()
    }
}
