//! Core library for probing media files with ffprobe.
//!
//! Runs `ffprobe -show_format -show_streams -of json` on a file, decodes the
//! report and fills in `lossless_wavelet_transform` for jpeg2000 streams from
//! ffprobe's stderr, since the JSON output does not carry it.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use mediaprobe_core::{ProbeConfig, ProbeOptions, Prober, CoreError};
//!
//! let config = ProbeConfig::builder()
//!     .ffprobe_path("/usr/bin/ffprobe")
//!     .build()
//!     .unwrap();
//! let options = ProbeOptions::new().with_value("v", "info");
//!
//! match Prober::new(config).probe("/path/to/film.mj2", &options) {
//!     Ok(report) => println!("{} stream(s)", report.streams.len()),
//!     Err(err @ CoreError::ToolFailed { .. }) => {
//!         eprintln!("{}", err.stderr_lossy().unwrap_or_default());
//!     }
//!     Err(err) => eprintln!("{err}"),
//! }
//! ```

pub mod config;
pub mod enrich;
pub mod error;
pub mod external;
pub mod options;
pub mod probe;
pub mod report;

// Re-exports for public API
pub use config::{DEFAULT_FFPROBE_CMD, ProbeConfig, ProbeConfigBuilder};
pub use enrich::{LOSSLESS_WAVELET_TRANSFORM, TRIGGER_CODEC, determine_lossless, enrich};
pub use error::{CoreError, CoreResult};
pub use external::{CommandExecutor, ProbeExecutor, check_dependency};
pub use options::{OptionValue, ProbeOptions};
pub use probe::{Prober, build_args, probe};
pub use report::{ProbeReport, StreamRecord};
