// mediaprobe-cli/src/main.rs
//
// Entry point of the `mediaprobe` binary.
//
// Responsibilities:
// - Parsing arguments and initializing logging.
// - Dispatching to the subcommand implementations.
// - Mapping errors to output and exit codes. When ffprobe itself fails, its
//   stderr is forwarded unchanged so the user sees ffprobe's explanation.

use clap::Parser;
use mediaprobe_cli::{Cli, Commands, logging, run_check, run_probe};
use mediaprobe_core::CoreError;
use std::io::Write;
use std::process;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Probe(args) => run_probe(args),
        Commands::Check(args) => run_check(args),
    };

    if let Err(e) = result {
        match e.downcast_ref::<CoreError>() {
            Some(core_err @ CoreError::ToolFailed { .. }) => {
                let mut stderr = std::io::stderr().lock();
                stderr.write_all(core_err.stderr().unwrap_or_default()).ok();
                writeln!(stderr, "Error: {core_err}").ok();
            }
            _ => eprintln!("Error: {e:#}"),
        }
        process::exit(1);
    }
}
