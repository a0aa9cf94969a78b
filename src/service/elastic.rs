use async_trait::async_trait;
use aws_config::retry::RetryConfig;
use aws_config::BehaviorVersion;
use aws_sdk_elastictranscoder::config::http::HttpResponse;
use aws_sdk_elastictranscoder::config::Credentials;
use aws_sdk_elastictranscoder::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_elastictranscoder::types::{CreateJobOutput as OutputSpec, Job, JobInput};
use aws_sdk_elastictranscoder::Client as TranscoderClient;

use super::{JobResponse, RawJob, RawJobInput, RawJobOutput, ServiceError, TranscodingService};
use crate::config::Config;
use crate::job::JobRequest;

/// Provider name attached to credentials taken from the configuration file
const CONFIG_CREDENTIALS_PROVIDER: &str = "elastic-encoder-config";

/// AWS Elastic Transcoder backed implementation of [`TranscodingService`]
#[derive(Clone, Debug)]
pub struct ElasticTranscoderService {
    client: TranscoderClient,
    output_key_prefix: Option<String>,
}

impl ElasticTranscoderService {
    /// Create a service from configuration.
    ///
    /// Credentials from the configuration are used when both halves are present,
    /// otherwise the default AWS provider chain applies.
    pub async fn new(config: &Config) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(config.aws_region())
            .retry_config(
                RetryConfig::standard().with_max_attempts(max_attempts(config.aws.max_retries)),
            );

        if let Some((access_key_id, secret_access_key)) = config.static_credentials() {
            tracing::debug!("Using static credentials from configuration");
            loader = loader.credentials_provider(Credentials::new(
                access_key_id,
                secret_access_key,
                None,
                None,
                CONFIG_CREDENTIALS_PROVIDER,
            ));
        }

        let aws_config = loader.load().await;

        Self::from_client(
            TranscoderClient::new(&aws_config),
            config.aws.output_key_prefix.clone(),
        )
    }

    /// Wrap an already configured SDK client
    pub fn from_client(client: TranscoderClient, output_key_prefix: Option<String>) -> Self {
        Self {
            client,
            output_key_prefix,
        }
    }
}

#[async_trait]
impl TranscodingService for ElasticTranscoderService {
    async fn create_job(
        &self,
        pipeline_id: &str,
        request: &JobRequest,
    ) -> Result<JobResponse, ServiceError> {
        let input = JobInput::builder().key(&request.source_key).build();
        let output = OutputSpec::builder()
            .key(&request.destination_key)
            .preset_id(&request.preset_id)
            .build();

        let response = self
            .client
            .create_job()
            .pipeline_id(pipeline_id)
            .input(input)
            .output(output)
            .set_output_key_prefix(self.output_key_prefix.clone())
            .send()
            .await
            .map_err(to_service_error)?;

        Ok(to_response(response.job()))
    }

    async fn read_job(&self, job_id: &str) -> Result<JobResponse, ServiceError> {
        let response = self
            .client
            .read_job()
            .id(job_id)
            .send()
            .await
            .map_err(to_service_error)?;

        Ok(to_response(response.job()))
    }
}

/// Attempts per call: the first try plus the configured retries
fn max_attempts(max_retries: u32) -> u32 {
    max_retries.saturating_add(1)
}

fn to_response(job: Option<&Job>) -> JobResponse {
    JobResponse {
        job: job.map(|job| RawJob {
            id: job.id().map(str::to_string),
            arn: job.arn().map(str::to_string),
            pipeline_id: job.pipeline_id().map(str::to_string),
            output: job.output().map(|output| RawJobOutput {
                status: output.status().map(str::to_string),
                status_detail: output.status_detail().map(str::to_string),
                duration: output.duration(),
                file_size: output.file_size(),
                key: output.key().map(str::to_string),
            }),
            input: job.input().map(|input| RawJobInput {
                key: input.key().map(str::to_string),
            }),
        }),
    }
}

fn to_service_error<E>(err: SdkError<E, HttpResponse>) -> ServiceError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
{
    let status_code = err.raw_response().map(|response| response.status().as_u16());
    let message = err
        .message()
        .map(str::to_string)
        .unwrap_or_else(|| DisplayErrorContext(&err).to_string());

    ServiceError {
        code: err.code().map(str::to_string),
        status_code,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_elastictranscoder::error::ErrorMetadata;
    use aws_sdk_elastictranscoder::operation::read_job::ReadJobError;
    use aws_sdk_elastictranscoder::types::error::AccessDeniedException;
    use aws_sdk_elastictranscoder::types::JobOutput;
    use aws_smithy_types::body::SdkBody;

    #[test]
    fn test_to_response_maps_job_sections() {
        let job = Job::builder()
            .id("1463492156553-lf7b8g")
            .pipeline_id("1463476983943-59pnhu")
            .output(
                JobOutput::builder()
                    .status("Progressing")
                    .key("dst/out.mp3")
                    .duration(215)
                    .build(),
            )
            .input(JobInput::builder().key("src/file.mp3").build())
            .build();

        let response = to_response(Some(&job));
        let raw = response.job.unwrap();

        assert_eq!(raw.id.as_deref(), Some("1463492156553-lf7b8g"));
        assert_eq!(raw.arn, None);
        let output = raw.output.unwrap();
        assert_eq!(output.status.as_deref(), Some("Progressing"));
        assert_eq!(output.duration, Some(215));
        assert_eq!(output.file_size, None);
        assert_eq!(raw.input.unwrap().key.as_deref(), Some("src/file.mp3"));
    }

    #[test]
    fn test_to_response_keeps_missing_sections_missing() {
        let job = Job::builder().id("abc").build();
        let raw = to_response(Some(&job)).job.unwrap();
        assert!(raw.output.is_none());
        assert!(raw.input.is_none());

        assert!(to_response(None).job.is_none());
    }

    #[test]
    fn test_access_denied_error_keeps_code_and_status() {
        let denied = AccessDeniedException::builder()
            .message("User is not authorized to perform ReadJob")
            .meta(
                ErrorMetadata::builder()
                    .code("AccessDeniedException")
                    .message("User is not authorized to perform ReadJob")
                    .build(),
            )
            .build()
            .expect("valid AccessDeniedException");
        let err: SdkError<ReadJobError, HttpResponse> = SdkError::service_error(
            ReadJobError::AccessDeniedException(denied),
            HttpResponse::new(403u16.try_into().unwrap(), SdkBody::empty()),
        );

        let service_err = to_service_error(err);

        assert_eq!(service_err.code.as_deref(), Some("AccessDeniedException"));
        assert_eq!(service_err.status_code, Some(403));
        assert_eq!(service_err.message, "User is not authorized to perform ReadJob");
        assert!(service_err.is_access_denied());
    }

    #[test]
    fn test_timeout_has_no_code() {
        let err: SdkError<ReadJobError, HttpResponse> =
            SdkError::timeout_error("operation timed out");

        let service_err = to_service_error(err);

        assert_eq!(service_err.code, None);
        assert_eq!(service_err.status_code, None);
        assert!(!service_err.message.is_empty());
        assert!(!service_err.is_access_denied());
    }

    #[test]
    fn test_max_attempts_saturates() {
        assert_eq!(max_attempts(3), 4);
        assert_eq!(max_attempts(0), 1);
        assert_eq!(max_attempts(u32::MAX), u32::MAX);
    }
}
