use anyhow::Result;
use console::style;

use crate::cli::OutputFormat;
use crate::job::{JobResult, JobStatus};
use crate::utils::{format_duration, format_file_size};

/// Render a job result in the requested format
pub fn render(result: &JobResult, format: &OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format_as_text(result)),
        OutputFormat::Json => format_as_json(result),
    }
}

/// Print job result to console
pub fn print_to_console(result: &JobResult, format: &OutputFormat) -> Result<()> {
    println!("{}", render(result, format)?);
    Ok(())
}

pub fn format_as_json(result: &JobResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

pub fn format_as_text(result: &JobResult) -> String {
    let status = match result.status {
        JobStatus::Complete => style(result.status.as_str()).green(),
        JobStatus::Error => style(result.status.as_str()).red(),
        JobStatus::Submitted | JobStatus::Progressing => style(result.status.as_str()).yellow(),
    };

    let mut lines = vec![
        format!("Job:         {}", result.id.as_deref().unwrap_or("-")),
        format!("Status:      {}", status),
    ];

    if let Some(detail) = &result.status_detail {
        lines.push(format!("Detail:      {}", detail));
    }
    if let Some(pipeline_id) = &result.pipeline_id {
        lines.push(format!("Pipeline:    {}", pipeline_id));
    }

    lines.push(format!("Source:      {}", result.src_file.as_deref().unwrap_or("-")));

    match result.destination_url() {
        Some(url) => lines.push(format!("Destination: {}", url)),
        None => lines.push(format!(
            "Destination: {}{}",
            result.dst_path,
            result.dst_file.as_deref().unwrap_or("")
        )),
    }

    if let Some(duration) = result.duration {
        lines.push(format!("Duration:    {}", format_duration(duration.max(0) as u64)));
    }
    if let Some(size) = result.file_size {
        lines.push(format!("File size:   {}", format_file_size(size.max(0) as u64)));
    }

    lines.join("\n")
}
