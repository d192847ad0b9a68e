// ============================================================================
// mediaprobe-core/src/config.rs
// ============================================================================
//
// CONFIGURATION: Probe configuration and its builder
//
// The ffprobe executable is an explicit configuration value rather than a
// name baked into the call path, so every invocation can be traced back to
// the binary that produced the report.
//
// KEY COMPONENTS:
// - ProbeConfig: configuration consumed by `Prober`
// - ProbeConfigBuilder: fluent construction with defaults
//
// AI-ASSISTANT-INFO: Configuration structures for mediaprobe-core

use std::path::PathBuf;

use crate::error::{CoreError, CoreResult};

/// Default ffprobe command, resolved through the caller's `PATH`.
pub const DEFAULT_FFPROBE_CMD: &str = "ffprobe";

/// Configuration for running ffprobe.
///
/// # Examples
///
/// ```rust
/// use mediaprobe_core::config::{ProbeConfig, DEFAULT_FFPROBE_CMD};
///
/// let config = ProbeConfig::default();
/// assert_eq!(config.ffprobe_path.to_str(), Some(DEFAULT_FFPROBE_CMD));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Name or path of the ffprobe executable
    pub ffprobe_path: PathBuf,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            ffprobe_path: PathBuf::from(DEFAULT_FFPROBE_CMD),
        }
    }
}

impl ProbeConfig {
    pub fn builder() -> ProbeConfigBuilder {
        ProbeConfigBuilder::new()
    }

    /// Checks that the configuration can be used to spawn ffprobe.
    pub fn validate(&self) -> CoreResult<()> {
        if self.ffprobe_path.as_os_str().is_empty() {
            return Err(CoreError::Config(
                "ffprobe executable path must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Name used for the tool in log lines and error messages.
    pub fn tool_name(&self) -> String {
        self.ffprobe_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.ffprobe_path.display().to_string())
    }
}

/// Builder for [`ProbeConfig`].
///
/// ```rust
/// use mediaprobe_core::config::ProbeConfigBuilder;
///
/// let config = ProbeConfigBuilder::new()
///     .ffprobe_path("/opt/ffmpeg/bin/ffprobe")
///     .build()
///     .unwrap();
/// assert_eq!(config.tool_name(), "ffprobe");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProbeConfigBuilder {
    ffprobe_path: Option<PathBuf>,
}

impl ProbeConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the ffprobe executable. Bare names are looked up in `PATH`.
    pub fn ffprobe_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.ffprobe_path = Some(path.into());
        self
    }

    /// Builds and validates the configuration.
    pub fn build(self) -> CoreResult<ProbeConfig> {
        let config = ProbeConfig {
            ffprobe_path: self
                .ffprobe_path
                .unwrap_or_else(|| PathBuf::from(DEFAULT_FFPROBE_CMD)),
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_to_ffprobe_on_path() {
        let config = ProbeConfigBuilder::new().build().unwrap();
        assert_eq!(config, ProbeConfig::default());
        assert_eq!(config.tool_name(), "ffprobe");
    }

    #[test]
    fn empty_path_is_rejected() {
        let err = ProbeConfigBuilder::new().ffprobe_path("").build().unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }

    #[test]
    fn tool_name_strips_directories() {
        let config = ProbeConfig::builder()
            .ffprobe_path("/usr/local/bin/ffprobe-6.1")
            .build()
            .unwrap();
        assert_eq!(config.tool_name(), "ffprobe-6.1");
    }
}
