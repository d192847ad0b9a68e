// ============================================================================
// mediaprobe-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Running ffprobe as a child process
//
// This module owns the process boundary. The `ProbeExecutor` trait is the
// seam that lets tests substitute canned ffprobe output; the default
// implementation spawns the real executable.
//
// KEY COMPONENTS:
// - ProbeExecutor / CommandExecutor (see `executor.rs`)
// - Dependency checking for the configured ffprobe
//
// AI-ASSISTANT-INFO: External tool interactions for ffprobe

// ---- Internal crate imports ----
use crate::error::{CoreError, CoreResult, command_failed_error};

// ---- Standard library imports ----
use std::ffi::OsString;
use std::io;
use std::path::Path;

/// Contains the executor trait and its `std::process` implementation
pub mod executor;

pub use executor::{CommandExecutor, ProbeExecutor};

/// Checks that `program` can be executed and returns the first line of its
/// `-version` output (e.g. "ffprobe version 6.1.1 ...").
///
/// # Errors
///
/// * `CoreError::DependencyNotFound` - the executable does not exist
/// * `CoreError::Io` - it exists but could not be started
/// * `CoreError::ToolFailed` - it ran but exited unsuccessfully
pub fn check_dependency<E: ProbeExecutor>(executor: &E, program: &Path) -> CoreResult<String> {
    let args = [OsString::from("-version")];

    let output = match executor.run(program, &args) {
        Ok(output) => output,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!("Dependency '{}' not found.", program.display());
            return Err(CoreError::DependencyNotFound(program.display().to_string()));
        }
        Err(e) => {
            log::error!(
                "Failed to start dependency check command '{}': {}",
                program.display(),
                e
            );
            return Err(e.into());
        }
    };

    if !output.status.success() {
        return Err(command_failed_error(
            program.display().to_string(),
            output.status,
            output.stdout,
            output.stderr,
        ));
    }

    let version = String::from_utf8_lossy(&output.stdout)
        .lines()
        .next()
        .unwrap_or_default()
        .trim()
        .to_string();
    log::debug!("Found dependency {}: {}", program.display(), version);
    Ok(version)
}
