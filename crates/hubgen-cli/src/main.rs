//! hubgen CLI - typed client generator for a smart-home device catalog
//!
//! Commands:
//! - `hubgen generate` - Fetch the remote catalog and emit the client modules
//! - `hubgen from-snapshot` - Emit the client modules from a saved snapshot

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod generate;
mod output;

#[derive(Parser)]
#[command(name = "hubgen")]
#[command(author, version, about = "Typed client generator for a smart-home device catalog", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the remote catalog and generate the client modules
    Generate {
        /// API bearer token
        #[arg(short, long, env = "HUBGEN_TOKEN", hide_env_values = true)]
        token: String,

        /// Base URL of the catalog API
        #[arg(short, long, env = "HUBGEN_BASE_URL")]
        base_url: String,

        /// Output directory for the generated modules
        #[arg(short, long, default_value = "generated")]
        output: PathBuf,

        /// Cap on simultaneously in-flight API calls
        #[arg(long, default_value_t = 50)]
        max_in_flight: usize,

        /// Also write the resolved catalog snapshot to this path
        #[arg(long)]
        snapshot: Option<PathBuf>,
    },

    /// Generate the client modules offline from a saved snapshot JSON
    FromSnapshot {
        /// Path to a snapshot written by `generate --snapshot`
        input: PathBuf,

        /// Output directory for the generated modules
        #[arg(short, long, default_value = "generated")]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            token,
            base_url,
            output,
            max_in_flight,
            snapshot,
        } => {
            generate::run(&token, &base_url, &output, max_in_flight, snapshot.as_deref()).await?;
        }
        Commands::FromSnapshot { input, output } => {
            generate::run_offline(&input, &output)?;
        }
    }

    Ok(())
}
