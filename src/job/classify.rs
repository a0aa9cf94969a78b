use super::{DestinationLocation, JobError, JobResult, JobStatus, UnexpectedResponse};
use crate::service::{JobResponse, ServiceError};

/// Turn the outcome of a create or read call into a job result or a job error.
///
/// Rules are applied in order and the first match wins:
/// 1. a service error is `AccessDenied` for the access denied code, `Unexpected` otherwise
/// 2. a response without a job descriptor is `Unexpected`
/// 3. a job without an output or input section is `Unexpected`; only single output
///    jobs are supported
/// 4. an `Error` status becomes `ServiceReported` when the status detail starts with
///    an error code, `Unexpected` when it does not
/// 5. anything else is a [`JobResult`]
pub fn classify(
    outcome: Result<JobResponse, ServiceError>,
    location: &DestinationLocation,
) -> Result<JobResult, JobError> {
    let response = match outcome {
        Ok(response) => response,
        Err(err) => {
            tracing::warn!(
                code = ?err.code,
                status_code = ?err.status_code,
                message = %err.message,
                "Transcoding service call failed"
            );
            if err.is_access_denied() {
                return Err(JobError::AccessDenied);
            }
            return Err(UnexpectedResponse::Service(err).into());
        }
    };

    let job = response.job.ok_or(UnexpectedResponse::MissingJob)?;
    let output = job.output.as_ref().ok_or(UnexpectedResponse::MissingOutput)?;
    if job.input.is_none() {
        return Err(UnexpectedResponse::MissingInput.into());
    }

    // the output status mirrors the job status for single output jobs
    if output.status.as_deref() == Some(JobStatus::Error.as_str()) {
        let detail = output
            .status_detail
            .as_deref()
            .filter(|detail| !detail.is_empty());

        return Err(match detail.and_then(leading_error_code) {
            Some(code) => JobError::ServiceReported {
                code,
                detail: detail.unwrap_or_default().to_string(),
            },
            None => UnexpectedResponse::UnparseableDetail(detail.map(str::to_string)).into(),
        });
    }

    Ok(JobResult::from_raw(job, location)?)
}

/// Error code at the start of a status detail such as
/// `3002 45e4c2a1-...: The specified object could not be saved`.
///
/// Takes the leading digits of the first space separated token; zero is not a code.
fn leading_error_code(detail: &str) -> Option<u32> {
    let token = detail.split(' ').next()?;
    let digits_end = token
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(token.len());

    token[..digits_end]
        .parse::<u32>()
        .ok()
        .filter(|code| *code != 0)
}
