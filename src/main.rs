use anyhow::Result;
use clap::Parser;
use console::style;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use elastic_encoder::cli::{Cli, Commands, OutputFormat};
use elastic_encoder::{output, presets};
use elastic_encoder::{Config, JobClient, JobError, JobResult, JobWatcher, WatchError};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize tracing
    let default_filter = if cli.verbose {
        "elastic_encoder=debug"
    } else {
        "elastic_encoder=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Create {
            source,
            destination,
            preset,
            wait,
            format,
        } => {
            let config = Config::load(cli.config.as_deref()).await?;
            let client = JobClient::connect(&config).await?;

            let preset_id = presets::resolve(&preset);
            let outcome = client.create_job(&source, &destination, preset_id).await;

            finish(&client, &config, outcome, wait, cli.quiet, &format).await
        }
        Commands::Read {
            job_id,
            wait,
            format,
        } => {
            let config = Config::load(cli.config.as_deref()).await?;
            let client = JobClient::connect(&config).await?;

            let outcome = client.read_job(&job_id).await;

            finish(&client, &config, outcome, wait, cli.quiet, &format).await
        }
        Commands::Presets => {
            println!("System presets:");
            for preset in presets::SYSTEM_PRESETS {
                println!("  {:<8} {}  {}", preset.name, preset.id, preset.description);
            }
            println!("Any other value passed to --preset is used as a preset id.");
            Ok(ExitCode::SUCCESS)
        }
        Commands::Config { show } => {
            let path = match cli.config {
                Some(path) => path,
                None => Config::config_path()?,
            };

            if show {
                let config = if path.exists() {
                    Config::read_from(&path)?
                } else {
                    Config::default()
                };
                config.display();
            } else {
                if !path.exists() {
                    Config::default().save_to(&path).await?;
                    println!("Created default configuration.");
                }
                println!("Edit the config file to set aws.pipeline_id and storage.output_bucket:");
                println!("  {}", path.display());
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Optionally wait for a pending job, then print the result or the error
async fn finish(
    client: &JobClient,
    config: &Config,
    outcome: Result<JobResult, JobError>,
    wait: bool,
    quiet: bool,
    format: &OutputFormat,
) -> Result<ExitCode> {
    let outcome = match outcome {
        Ok(result) if wait && result.is_pending() => {
            let mut watcher = JobWatcher::new(client, config.poll_interval())
                .max_attempts(config.polling.max_attempts);
            if !quiet {
                watcher = watcher.with_spinner();
            }
            watcher.wait(result).await
        }
        Ok(result) => Ok(result),
        Err(err) => Err(WatchError::Job(err)),
    };

    match outcome {
        Ok(result) => {
            output::print_to_console(&result, format)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            report(&err);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn report(err: &WatchError) {
    let label = style("error:").red().bold();
    match err {
        WatchError::Job(JobError::AccessDenied) => {
            eprintln!("{} access denied for your user", label);
            eprintln!("  Check the credentials and the IAM policy for Elastic Transcoder.");
        }
        WatchError::Job(JobError::ServiceReported { code, detail }) => {
            eprintln!("{} job failed with service error {}", label, code);
            eprintln!("  {}", detail);
        }
        other => eprintln!("{} {}", label, other),
    }
}
