// mediaprobe-cli/src/commands/check.rs
//
// Implements the `check` subcommand.

use mediaprobe_core::{ProbeConfig, Prober};

use crate::cli::CheckArgs;
use crate::output::print_info;

/// Runs `<ffprobe> -version` and prints the version line.
pub fn run_check(args: CheckArgs) -> anyhow::Result<()> {
    let config = ProbeConfig::builder()
        .ffprobe_path(args.ffprobe.ffprobe_path)
        .build()?;
    let path = config.ffprobe_path.clone();

    let version = Prober::new(config).version()?;
    print_info("ffprobe", path.display());
    print_info("Version", version);
    Ok(())
}
