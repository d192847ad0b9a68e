// ============================================================================
// mediaprobe-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Error types for the mediaprobe-core library
//
// The only failure this library describes itself is "ffprobe exited with a
// non-zero status". Spawn failures and JSON decode failures are passed
// through unchanged from std::io and serde_json.
//
// AI-ASSISTANT-INFO: Error types and result alias for mediaprobe-core

use std::borrow::Cow;
use std::process::ExitStatus;

use thiserror::Error;

/// Errors produced while probing a media file.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The external tool ran but exited unsuccessfully. Both output channels
    /// are kept verbatim; stderr usually explains what went wrong.
    #[error("{tool} error (see stderr output for detail)")]
    ToolFailed {
        tool: String,
        status: Option<i32>,
        stdout: Vec<u8>,
        stderr: Vec<u8>,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("Required external command not found: {0}")]
    DependencyNotFound(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid probe option: {0}")]
    InvalidOption(String),
}

impl CoreError {
    /// Captured stdout of a failed tool run.
    pub fn stdout(&self) -> Option<&[u8]> {
        match self {
            CoreError::ToolFailed { stdout, .. } => Some(stdout),
            _ => None,
        }
    }

    /// Captured stderr of a failed tool run.
    pub fn stderr(&self) -> Option<&[u8]> {
        match self {
            CoreError::ToolFailed { stderr, .. } => Some(stderr),
            _ => None,
        }
    }

    pub fn stderr_lossy(&self) -> Option<Cow<'_, str>> {
        self.stderr().map(String::from_utf8_lossy)
    }

    /// Exit code of a failed tool run. `None` if the process was killed by a
    /// signal or the error is not a tool failure.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            CoreError::ToolFailed { status, .. } => *status,
            _ => None,
        }
    }
}

/// Result type for mediaprobe-core operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Builds a [`CoreError::ToolFailed`] from a finished process.
pub fn command_failed_error(
    tool: impl Into<String>,
    status: ExitStatus,
    stdout: Vec<u8>,
    stderr: Vec<u8>,
) -> CoreError {
    CoreError::ToolFailed {
        tool: tool.into(),
        status: status.code(),
        stdout,
        stderr,
    }
}
