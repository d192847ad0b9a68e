// mediaprobe-cli/src/output.rs
//
// Rendering of probe reports: JSON for machines, a colored summary for people.

use mediaprobe_core::{ProbeReport, StreamRecord};
use owo_colors::OwoColorize;
use serde_json::Value;
use std::fmt::Display;

/// Serializes the report as JSON, pretty-printed unless `compact`.
pub fn render_json(report: &ProbeReport, compact: bool) -> serde_json::Result<String> {
    if compact {
        serde_json::to_string(report)
    } else {
        serde_json::to_string_pretty(report)
    }
}

/// Print a heading with colored styling and clear separation
pub fn print_heading(text: &str) {
    let heading = format!(" {} ", text).bold().bright_white().to_string();
    let line = "=".repeat(50).bright_blue().to_string();

    println!("\n{}", line);
    println!("{}", heading);
    println!("{}\n", line);
}

/// Print a section heading (smaller than main heading)
pub fn print_section(text: &str) {
    let section = format!(" {} ", text).bold().white().to_string();
    let line = "-".repeat(40).blue().to_string();

    println!("\n{}", line);
    println!("{}", section);
    println!("{}", line);
}

/// Print an info line with label and value, with the label colored
pub fn print_info<T: Display>(label: &str, value: T) {
    println!("{}: {}", label.bright_cyan(), value);
}

/// Human-readable description of the derived lossless flag.
pub fn describe_lossless(stream: &StreamRecord) -> Option<&'static str> {
    stream.lossless_wavelet_transform.map(|lossless| {
        if lossless {
            "lossless (reversible 5/3)"
        } else {
            "lossy (irreversible 9/7)"
        }
    })
}

fn text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "unknown".to_string(),
    }
}

/// Prints a summary of the container and each stream.
pub fn print_summary(report: &ProbeReport) {
    print_heading("Media Report");

    print_info("File", text(report.format.get("filename")));
    print_info("Format", report.format_name().unwrap_or("unknown"));
    match report.duration_secs() {
        Some(secs) => print_info("Duration", format!("{secs:.3}s")),
        None => print_info("Duration", "unknown"),
    }
    print_info("Streams", report.streams.len());

    for stream in &report.streams {
        print_section(&format!(
            "Stream #{} ({})",
            stream.index,
            stream.codec_type().unwrap_or("unknown")
        ));
        print_info("Codec", stream.codec_name.as_deref().unwrap_or("unknown"));

        if let (Some(w), Some(h)) = (stream.extra.get("width"), stream.extra.get("height")) {
            print_info("Resolution", format!("{w}x{h}"));
        }
        if let Some(pix_fmt) = stream.extra.get("pix_fmt") {
            print_info("Pixel format", text(Some(pix_fmt)));
        }
        if let Some(channels) = stream.extra.get("channels") {
            print_info("Channels", channels);
        }
        if let Some(rate) = stream.extra.get("sample_rate") {
            print_info("Sample rate", text(Some(rate)));
        }
        if let Some(transform) = describe_lossless(stream) {
            print_info("Wavelet transform", transform);
        }
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> ProbeReport {
        ProbeReport::from_slice(
            br#"{"streams":[{"index":0,"codec_name":"jpeg2000","lossless_wavelet_transform":true}],"format":{}}"#,
        )
        .unwrap()
    }

    #[test]
    fn compact_json_is_single_line() {
        let json = render_json(&report(), true).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.contains(r#""lossless_wavelet_transform":true"#));
    }

    #[test]
    fn pretty_json_round_trips() {
        let json = render_json(&report(), false).unwrap();
        assert_eq!(ProbeReport::from_slice(json.as_bytes()).unwrap(), report());
    }

    #[test]
    fn lossless_description_only_for_enriched_streams() {
        let mut stream = report().streams.remove(0);
        assert_eq!(describe_lossless(&stream), Some("lossless (reversible 5/3)"));
        stream.lossless_wavelet_transform = Some(false);
        assert_eq!(describe_lossless(&stream), Some("lossy (irreversible 9/7)"));
        stream.lossless_wavelet_transform = None;
        assert_eq!(describe_lossless(&stream), None);
    }
}
