// ============================================================================
// mediaprobe-core/src/report.rs
// ============================================================================
//
// PROBE REPORT: Typed view over ffprobe's JSON output
//
// Only the fields the library reasons about are typed (`index`, `codec_name`
// and the derived `lossless_wavelet_transform`). Everything else ffprobe
// prints is carried through untouched in `extra` maps, so serializing a
// report gives back what ffprobe produced plus the derived attribute.
//
// AI-ASSISTANT-INFO: Probe report data model (format + streams)

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::CoreResult;

/// Parsed result of `ffprobe -show_format -show_streams -of json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProbeReport {
    /// Container-level attributes
    #[serde(default)]
    pub format: Map<String, Value>,

    /// Streams in the order ffprobe listed them
    #[serde(default)]
    pub streams: Vec<StreamRecord>,

    /// Any other top-level section requested through options (chapters,
    /// programs, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One entry of the report's `streams` array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StreamRecord {
    pub index: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codec_name: Option<String>,

    /// Filled in from ffprobe's stderr for jpeg2000 streams, see
    /// [`crate::enrich`]. Absent when it could not be determined.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lossless_wavelet_transform: Option<bool>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProbeReport {
    /// Decodes ffprobe's stdout.
    pub fn from_slice(stdout: &[u8]) -> CoreResult<Self> {
        Ok(serde_json::from_slice(stdout)?)
    }

    pub fn to_value(&self) -> CoreResult<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Container duration in seconds, if ffprobe reported a parsable one.
    pub fn duration_secs(&self) -> Option<f64> {
        self.format
            .get("duration")
            .and_then(Value::as_str)
            .and_then(|d| d.parse::<f64>().ok())
    }

    pub fn format_name(&self) -> Option<&str> {
        self.format.get("format_name").and_then(Value::as_str)
    }

    /// Looks a stream up by its ffprobe index, which need not match its
    /// position in `streams`.
    pub fn stream(&self, index: u64) -> Option<&StreamRecord> {
        self.streams.iter().find(|s| s.index == index)
    }

    pub fn streams_of_type<'a>(
        &'a self,
        codec_type: &'a str,
    ) -> impl Iterator<Item = &'a StreamRecord> + 'a {
        self.streams
            .iter()
            .filter(move |s| s.codec_type() == Some(codec_type))
    }
}

impl StreamRecord {
    pub fn codec_type(&self) -> Option<&str> {
        self.extra.get("codec_type").and_then(Value::as_str)
    }

    /// Returns any attribute of the stream, typed or not, as JSON.
    pub fn attribute(&self, name: &str) -> Option<Value> {
        match name {
            "index" => Some(Value::from(self.index)),
            "codec_name" => self.codec_name.clone().map(Value::String),
            "lossless_wavelet_transform" => self.lossless_wavelet_transform.map(Value::Bool),
            _ => self.extra.get(name).cloned(),
        }
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// Names of all attributes present on the stream.
    pub fn attribute_names(&self) -> Vec<String> {
        let mut names = vec!["index".to_string()];
        if self.codec_name.is_some() {
            names.push("codec_name".to_string());
        }
        if self.lossless_wavelet_transform.is_some() {
            names.push("lossless_wavelet_transform".to_string());
        }
        names.extend(self.extra.keys().cloned());
        names.sort();
        names
    }
}
