//! Command-line argument definitions

use clap::Args;

/// Arguments for the cut command
#[derive(Args, Debug)]
pub struct CutArgs {
    /// Input video file path
    #[arg(short, long)]
    pub input: String,

    /// Output path: the merged file in merge mode, otherwise the base path
    /// segment labels are inserted into
    #[arg(short, long)]
    pub output: String,

    /// Cut boundaries as a JSON list of [start, end] pairs,
    /// e.g. "[[0,10],[20,30]]"
    #[arg(short, long)]
    pub cuts: String,

    /// Coordinate system of the cut boundaries
    #[arg(long, default_value = "time", env = "SEGCUT_MODE")]
    pub mode: String,

    /// Concatenate all segments into one output file
    #[arg(long)]
    pub merge: bool,

    /// Output quality preset (original, high, medium, low)
    #[arg(long, env = "SEGCUT_QUALITY")]
    pub quality: Option<String>,

    /// Video codec
    #[arg(long, env = "SEGCUT_CODEC")]
    pub codec: Option<String>,

    /// Audio codec
    #[arg(long, env = "SEGCUT_AUDIO_CODEC")]
    pub audio_codec: Option<String>,

    /// Drop audio tracks from the output
    #[arg(long)]
    pub no_audio: bool,

    /// Override the output frame rate
    #[arg(long)]
    pub fps: Option<u32>,

    /// Print the outcome as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the scenes command
#[derive(Args, Debug)]
pub struct ScenesArgs {
    /// Input video file path
    #[arg(short, long)]
    pub input: String,

    /// Base output path segment labels are inserted into
    #[arg(short, long)]
    pub output: String,

    /// Scene-change threshold (mean absolute pixel difference, 0-255)
    #[arg(long, default_value_t = 30.0)]
    pub threshold: f64,

    /// Minimum scene length in seconds
    #[arg(long, default_value_t = 1.0)]
    pub min_scene_length: f64,

    /// Maximum number of scenes to extract
    #[arg(long)]
    pub max_scenes: Option<usize>,

    /// Print the outcome as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the inspect command
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Input video file path
    #[arg(short, long)]
    pub input: String,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}
