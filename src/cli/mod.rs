//! CLI module for SegCut
//!
//! This module handles command-line argument parsing and command execution.

use clap::{Parser, Subcommand};

pub mod args;
pub mod commands;

/// SegCut video cutter
///
/// Extracts segments from a video by time, frame, or percentage
/// coordinates, or cuts it automatically at detected scene changes.
#[derive(Parser)]
#[command(name = "segcut")]
#[command(about = "SegCut - coordinate-aware video segment extraction")]
#[command(version)]
#[command(long_about = None)]
pub struct Cli {
    /// Logging level (overridden by RUST_LOG when set)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,

    /// Explicit configuration file path
    #[arg(long, global = true, env = "SEGCUT_CONFIG")]
    pub config: Option<String>,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Cut a video into segments at explicit boundaries
    Cut(args::CutArgs),
    /// Cut a video at automatically detected scene changes
    Scenes(args::ScenesArgs),
    /// Inspect video file information
    Inspect(args::InspectArgs),
}
