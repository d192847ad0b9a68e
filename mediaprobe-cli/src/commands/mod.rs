//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of a specific command.

/// `check`: verifies the configured ffprobe runs.
pub mod check;

/// `probe`: prints the enriched report of a media file.
pub mod probe;
