// ============================================================================
// mediaprobe-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: env_logger initialization for the CLI
//
// Library code logs through the `log` facade; this module installs the
// backend. Log records go to stderr so stdout only ever carries the report.
//
// USAGE:
// - default: warnings and errors only
// - --verbose: debug records from mediaprobe
// - RUST_LOG=...: overrides both
//
// AI-ASSISTANT-INFO: Logging backend configuration

use log::LevelFilter;
use std::io::Write;

/// Returns the filter used when RUST_LOG is not set.
pub fn default_filter(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Initializes env_logger with a level-tagged format.
///
/// Calling it more than once is harmless; later calls are ignored.
pub fn init(verbose: bool) {
    let default = default_filter(verbose).to_string().to_lowercase();
    let env = env_logger::Env::default().default_filter_or(default);

    let result = env_logger::Builder::from_env(env)
        .format(|buf, record| {
            let level_str = match record.level() {
                log::Level::Error => "ERROR",
                log::Level::Warn => "WARN ",
                log::Level::Info => "INFO ",
                log::Level::Debug => "DEBUG",
                log::Level::Trace => "TRACE",
            };
            writeln!(buf, "{} {} {}", buf.timestamp(), level_str, record.args())
        })
        .target(env_logger::Target::Stderr)
        .try_init();

    if result.is_ok() {
        log::debug!("Logger initialized (verbose: {})", verbose);
    }
}
