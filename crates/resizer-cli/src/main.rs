//! Resizer CLI: run the resize handler locally against the configured store.
//!
//! Storage is selected the same way as in Lambda (STORAGE_BACKEND,
//! LOCAL_STORAGE_PATH, S3_ENDPOINT, AWS_REGION).

use anyhow::Context;
use clap::{Parser, Subcommand};
use resizer_cli::{event_for_key, load_event, plan};
use resizer_core::{LogFormat, ResizerConfig};
use resizer_infra::init_telemetry;
use resizer_lambda::{handle_invocation, initialize_state};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resizer", about = "Run the image resizer outside Lambda")]
struct Cli {
    /// Log output format: json or text
    #[arg(long, global = true)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Invoke the handler with a trigger event
    Invoke {
        /// Path to an event JSON file (`-` for stdin)
        #[arg(long, conflicts_with_all = ["bucket", "key"])]
        event: Option<PathBuf>,
        /// Bucket name (used with --key)
        #[arg(long, requires = "key")]
        bucket: Option<String>,
        /// Object key, not URL-encoded
        #[arg(long, requires = "bucket")]
        key: Option<String>,
        /// Region to put on the generated event
        #[arg(long)]
        region: Option<String>,
    },
    /// Print the derived keys for an object key without touching storage
    Plan {
        /// Object key, not URL-encoded
        key: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Invoke {
            event,
            bucket,
            key,
            region,
        } => {
            let mut config = ResizerConfig::from_env()?;
            if let Some(format) = cli.log_format {
                config.log_format = format;
            }
            init_telemetry(config.log_format, false);

            let payload = match (event, bucket, key) {
                (Some(path), _, _) => load_event(&path)?,
                (None, Some(bucket), Some(key)) => {
                    event_for_key(&bucket, &key, region.as_deref())?
                }
                _ => anyhow::bail!("Provide either --event or both --bucket and --key"),
            };

            let state = initialize_state(config)
                .await
                .context("Failed to initialize resizer")?;
            let response = handle_invocation(&state, payload).await;

            println!("{}", serde_json::to_string_pretty(&response)?);
            if !response.is_success() {
                std::process::exit(1);
            }
        }
        Commands::Plan { key } => {
            let variants = plan(&key);
            if variants.is_empty() {
                println!("{} is in the resized namespace and would be skipped", key);
            } else {
                println!("{}", serde_json::to_string_pretty(&variants)?);
            }
        }
    }

    Ok(())
}
