//! Elastic Encoder - a client for AWS Elastic Transcoder jobs
//!
//! Submits transcoding jobs to a pipeline and reads their status back, turning the
//! service's responses into either a flat [`JobResult`] or a [`JobError`].
//!
//! ```no_run
//! use elastic_encoder::{Config, JobClient, JobError};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::load(None).await?;
//! let client = JobClient::connect(&config).await?;
//!
//! match client.create_job("src/file.mp3", "dst/out.mp3", "1351620000001-300040").await {
//!     Ok(job) => println!("{:?} is {}", job.id, job.status),
//!     Err(JobError::AccessDenied) => eprintln!("access denied for your user"),
//!     Err(err) => eprintln!("{}", err),
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod job;
pub mod output;
pub mod presets;
pub mod service;
pub mod utils;
pub mod watch;

pub use cli::{Cli, Commands, OutputFormat};
pub use client::JobClient;
pub use config::Config;
pub use job::{classify, DestinationLocation, JobError, JobRequest, JobResult, JobStatus};
pub use service::{ElasticTranscoderService, JobResponse, ServiceError, TranscodingService};
pub use watch::{JobWatcher, WatchError};
