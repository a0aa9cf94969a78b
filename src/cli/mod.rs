use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "encoder",
    about = "Elastic Encoder - Submit and track AWS Elastic Transcoder jobs",
    version,
    long_about = "A CLI tool for creating transcoding jobs on an AWS Elastic Transcoder pipeline and following them until they complete."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file to use instead of the default location
    #[arg(short, long, global = true, value_name = "FILE", env = "ELASTIC_ENCODER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a transcoding job
    Create {
        /// Key of the file to transcode in the pipeline's input bucket
        #[arg(value_name = "SOURCE", value_parser = NonEmptyStringValueParser::new())]
        source: String,

        /// Key for the transcoded file in the pipeline's output bucket (must not exist)
        #[arg(value_name = "DESTINATION", value_parser = NonEmptyStringValueParser::new())]
        destination: String,

        /// Preset id, or a system preset name such as mp3-128 (see `encoder presets`)
        #[arg(short, long, value_name = "ID|NAME", value_parser = NonEmptyStringValueParser::new())]
        preset: String,

        /// Poll the job until it completes
        #[arg(short, long)]
        wait: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show the status of a job
    Read {
        /// Job id returned when the job was created
        #[arg(value_name = "JOB_ID", value_parser = NonEmptyStringValueParser::new())]
        job_id: String,

        /// Poll the job until it completes
        #[arg(short, long)]
        wait: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// List built-in system presets
    Presets,

    /// Show or locate the configuration
    Config {
        /// Show current configuration
        #[arg(short, long)]
        show: bool,
    },
}

#[derive(ValueEnum, Clone, Debug)]
pub enum OutputFormat {
    /// Human readable text
    Text,
    /// JSON with the service's field names
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_create() {
        let cli = Cli::try_parse_from([
            "encoder", "create", "src/file.mp3", "dst/out.mp3", "--preset", "mp3-128", "--wait",
        ])
        .unwrap();

        match cli.command {
            Commands::Create {
                source,
                destination,
                preset,
                wait,
                format,
            } => {
                assert_eq!(source, "src/file.mp3");
                assert_eq!(destination, "dst/out.mp3");
                assert_eq!(preset, "mp3-128");
                assert!(wait);
                assert!(matches!(format, OutputFormat::Text));
            }
            _ => panic!("expected create"),
        }
    }

    #[test]
    fn test_empty_identifiers_rejected() {
        assert!(Cli::try_parse_from(["encoder", "read", ""]).is_err());
        assert!(Cli::try_parse_from(["encoder", "create", "", "dst", "-p", "x"]).is_err());
        assert!(Cli::try_parse_from(["encoder", "create", "src", "dst"]).is_err());
    }
}
