// mediaprobe-cli/src/commands/probe.rs
//
// Implements the `probe` subcommand.

use anyhow::Context;
use mediaprobe_core::{ProbeConfig, ProbeOptions, Prober};

use crate::cli::ProbeArgs;
use crate::output::{print_summary, render_json};

/// Probes the input file and prints the report to stdout.
///
/// ffprobe failures are returned as `mediaprobe_core::CoreError` inside the
/// anyhow error so `main` can print ffprobe's own stderr.
pub fn run_probe(args: ProbeArgs) -> anyhow::Result<()> {
    let config = ProbeConfig::builder()
        .ffprobe_path(args.ffprobe.ffprobe_path)
        .build()?;
    let options = ProbeOptions::from_pairs(&args.options)?;

    log::info!("Probing {}", args.input_path.display());
    let report = Prober::new(config).probe(&args.input_path, &options)?;

    if args.summary {
        print_summary(&report);
    } else {
        let json = render_json(&report, args.compact).context("Failed to render report as JSON")?;
        println!("{json}");
    }
    Ok(())
}
