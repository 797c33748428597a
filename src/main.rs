//! SegCut CLI
//!
//! Coordinate-aware video segment extraction with automatic scene-based
//! cutting.
//!
//! # Usage
//!
//! ```bash
//! segcut cut --input video.mp4 --output clips/part.mp4 --cuts "[[10,20],[30,40]]"
//! segcut cut --input video.mp4 --output merged.mp4 --cuts "[[0,25],[50,75]]" --mode percentage --merge
//! segcut scenes --input video.mp4 --output scenes/out.mp4 --threshold 30
//! segcut inspect --input video.mp4 --json
//! ```

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use segcut::cli::{commands, Cli, Commands};
use segcut::config::AppConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over the --log-level flag when set
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting SegCut");

    let config = match &cli.config {
        Some(path) => AppConfig::from_file(Path::new(path))?,
        None => AppConfig::load(),
    };

    match cli.command {
        Commands::Cut(args) => commands::cut(args, config)?,
        Commands::Scenes(args) => commands::scenes(args, config)?,
        Commands::Inspect(args) => commands::inspect(args)?,
    }

    info!("SegCut completed successfully");
    Ok(())
}
