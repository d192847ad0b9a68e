// ============================================================================
// mediaprobe-core/src/probe.rs
// ============================================================================
//
// PROBING: ffprobe invocation, decoding and enrichment
//
// One call spawns one ffprobe process with
//
//     <ffprobe> -show_format -show_streams -of json [options...] <path>
//
// waits for it to exit, decodes stdout as a `ProbeReport` and runs the
// stderr enrichment over it. Nothing is shared between calls.
//
// AI-ASSISTANT-INFO: Main probe call path

use std::ffi::OsString;
use std::path::Path;

use crate::config::ProbeConfig;
use crate::enrich::enrich;
use crate::error::{CoreResult, command_failed_error};
use crate::external::{CommandExecutor, ProbeExecutor, check_dependency};
use crate::options::ProbeOptions;
use crate::report::ProbeReport;

/// Arguments that make ffprobe print format and stream sections as JSON.
pub const BASE_ARGS: [&str; 4] = ["-show_format", "-show_streams", "-of", "json"];

/// Runs ffprobe according to a [`ProbeConfig`].
///
/// ```rust,no_run
/// use mediaprobe_core::{ProbeConfig, Prober, ProbeOptions};
///
/// let prober = Prober::new(ProbeConfig::default());
/// let report = prober.probe("movie.mj2", &ProbeOptions::new()).unwrap();
/// for stream in &report.streams {
///     println!("{} {:?} {:?}", stream.index, stream.codec_name, stream.lossless_wavelet_transform);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Prober<E: ProbeExecutor = CommandExecutor> {
    config: ProbeConfig,
    executor: E,
}

impl Prober<CommandExecutor> {
    pub fn new(config: ProbeConfig) -> Self {
        Self::with_executor(config, CommandExecutor)
    }
}

impl Default for Prober<CommandExecutor> {
    fn default() -> Self {
        Self::new(ProbeConfig::default())
    }
}

impl<E: ProbeExecutor> Prober<E> {
    pub fn with_executor(config: ProbeConfig, executor: E) -> Self {
        Self { config, executor }
    }

    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// Probes `path` and returns the enriched report.
    ///
    /// # Errors
    ///
    /// * `CoreError::ToolFailed` - ffprobe exited with a non-zero status; the
    ///   error carries its stdout and stderr unchanged
    /// * `CoreError::Io` - ffprobe could not be started
    /// * `CoreError::Json` - stdout was not a valid report
    pub fn probe(&self, path: impl AsRef<Path>, options: &ProbeOptions) -> CoreResult<ProbeReport> {
        let path = path.as_ref();
        self.config.validate()?;
        let args = build_args(options, path);
        let tool = self.config.tool_name();

        log::debug!(
            "Running {} on {} with {} extra option(s)",
            tool,
            path.display(),
            options.len()
        );

        let output = self
            .executor
            .run(&self.config.ffprobe_path, &args)
            .inspect_err(|e| {
                log::error!("Failed to start {} for {}: {}", tool, path.display(), e);
            })?;

        if !output.status.success() {
            log::error!(
                "{} failed on {} ({}): {}",
                tool,
                path.display(),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
            return Err(command_failed_error(
                tool,
                output.status,
                output.stdout,
                output.stderr,
            ));
        }

        let mut report = ProbeReport::from_slice(&output.stdout)?;
        enrich(&mut report, &output.stderr);

        log::debug!(
            "Probed {}: {} stream(s), format {}",
            path.display(),
            report.streams.len(),
            report.format_name().unwrap_or("unknown")
        );
        Ok(report)
    }

    /// Returns the version line of the configured ffprobe.
    pub fn version(&self) -> CoreResult<String> {
        self.config.validate()?;
        check_dependency(&self.executor, &self.config.ffprobe_path)
    }
}

/// Builds the ffprobe argument list: the fixed JSON output flags, then the
/// caller's options, then the input path.
pub fn build_args(options: &ProbeOptions, path: &Path) -> Vec<OsString> {
    BASE_ARGS
        .into_iter()
        .map(OsString::from)
        .chain(options.to_args().into_iter().map(OsString::from))
        .chain(std::iter::once(path.as_os_str().to_os_string()))
        .collect()
}

/// Probes `path` with the default `ffprobe` on `PATH` and no extra options.
pub fn probe(path: impl AsRef<Path>) -> CoreResult<ProbeReport> {
    Prober::default().probe(path, &ProbeOptions::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    #[test]
    fn args_put_options_between_base_flags_and_path() {
        let options = ProbeOptions::new()
            .with_value("v", "error")
            .with_flag("show_chapters");
        let args = build_args(&options, Path::new("/media/clip 01.mj2"));

        assert_eq!(
            args,
            vec![
                "-show_format",
                "-show_streams",
                "-of",
                "json",
                "-show_chapters",
                "-v",
                "error",
                "/media/clip 01.mj2",
            ]
        );
    }

    #[test]
    fn no_options_yields_base_args_and_path() {
        let args = build_args(&ProbeOptions::new(), Path::new("in.mkv"));
        assert_eq!(args.len(), 5);
        assert_eq!(args.last().map(|a| a.as_os_str()), Some(OsStr::new("in.mkv")));
    }
}
