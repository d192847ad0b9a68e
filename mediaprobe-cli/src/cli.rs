// mediaprobe-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Args, Parser, Subcommand};
use mediaprobe_core::DEFAULT_FFPROBE_CMD;
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "mediaprobe: ffprobe reports with JPEG 2000 lossless detection",
    long_about = "Runs ffprobe on a media file and prints its format and stream report as JSON, \
                  adding lossless_wavelet_transform to jpeg2000 streams."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Probes a media file and prints the enriched report
    Probe(ProbeArgs),
    /// Checks that ffprobe can be executed and prints its version
    Check(CheckArgs),
}

/// Location of the ffprobe executable, shared by all subcommands.
#[derive(Args, Debug, Clone)]
pub struct FfprobeArgs {
    /// ffprobe executable name or path.
    /// Can also be set via the MEDIAPROBE_FFPROBE environment variable.
    #[arg(
        long = "ffprobe",
        value_name = "PATH",
        env = "MEDIAPROBE_FFPROBE",
        default_value = DEFAULT_FFPROBE_CMD
    )]
    pub ffprobe_path: PathBuf,
}

#[derive(Args, Debug)]
pub struct ProbeArgs {
    /// Media file to probe
    #[arg(required = true, value_name = "INPUT_PATH")]
    pub input_path: PathBuf,

    #[command(flatten)]
    pub ffprobe: FfprobeArgs,

    /// Extra ffprobe option, e.g. -O v=error or -O show_chapters (repeatable)
    #[arg(short = 'O', long = "option", value_name = "KEY[=VALUE]", allow_hyphen_values = true)]
    pub options: Vec<String>,

    /// Print the JSON report on a single line
    #[arg(long, default_value_t = false)]
    pub compact: bool,

    /// Print a readable summary instead of JSON
    #[arg(long, default_value_t = false, conflicts_with = "compact")]
    pub summary: bool,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub ffprobe: FfprobeArgs,
}
