// ============================================================================
// mediaprobe-core/src/enrich.rs
// ============================================================================
//
// REPORT ENRICHMENT: Backfilling stream attributes from ffprobe's stderr
//
// ffprobe's JSON output does not say whether a JPEG 2000 stream uses the
// reversible (lossless) wavelet transform, but its human-readable stream
// summary on stderr does, e.g.
//
//     Stream #0:0: Video: jpeg2000 (mjp2 / 0x32706A6D), rgb24, 64x64, lossless, ...
//
// This module scans that summary and attaches the flag to matching streams.
// The stderr layout is not a stable interface and differs between ffmpeg
// releases, so this is a stopgap until ffprobe reports the attribute in its
// structured output. When it does, delete this module and the call in
// `probe.rs`.
//
// Matching is a plain substring search for "Stream #0:" followed by the
// decimal index. "Stream #0:1" therefore also matches "Stream #0:12"; the
// first qualifying line in text order wins and this is intentionally left
// as is.
//
// AI-ASSISTANT-INFO: stderr scraping for jpeg2000 lossless_wavelet_transform

use memchr::memmem;

use crate::report::ProbeReport;

/// Codec whose streams get the lossless flag.
pub const TRIGGER_CODEC: &str = "jpeg2000";

/// Name of the derived stream attribute.
pub const LOSSLESS_WAVELET_TRANSFORM: &str = "lossless_wavelet_transform";

const STREAM_DESCRIPTOR_PREFIX: &str = "Stream #0:";
const JPEG2000_VIDEO_MARKER: &[u8] = b"Video: jpeg2000";
const LOSSLESS_MARKER: &[u8] = b"lossless";

/// Attaches `lossless_wavelet_transform` to every jpeg2000 stream of
/// `report` for which ffprobe's stderr describes the stream.
///
/// Streams of other codecs are not touched. Running it again with the same
/// diagnostics produces the same report.
pub fn enrich<'a>(report: &'a mut ProbeReport, diagnostics: &[u8]) -> &'a mut ProbeReport {
    for stream in &mut report.streams {
        if stream.codec_name.as_deref() != Some(TRIGGER_CODEC) {
            continue;
        }

        match determine_lossless(diagnostics, stream.index) {
            Some(lossless) => {
                log::debug!(
                    "Stream #{}: {} = {}",
                    stream.index,
                    LOSSLESS_WAVELET_TRANSFORM,
                    lossless
                );
                stream.lossless_wavelet_transform = Some(lossless);
            }
            None => {
                log::debug!(
                    "Stream #{}: no jpeg2000 summary line in ffprobe stderr, leaving {} unset",
                    stream.index,
                    LOSSLESS_WAVELET_TRANSFORM
                );
            }
        }
    }
    report
}

/// Decides whether the jpeg2000 stream `stream_index` uses the lossless
/// wavelet transform, based on ffprobe's stderr.
///
/// Returns `None` when no line both names the stream and describes it as
/// jpeg2000 video.
///
/// ```rust
/// use mediaprobe_core::enrich::determine_lossless;
///
/// let stderr = b"  Stream #0:0: Video: jpeg2000, rgb24, 64x64, lossless\n";
/// assert_eq!(determine_lossless(stderr, 0), Some(true));
/// assert_eq!(determine_lossless(stderr, 1), None);
/// ```
pub fn determine_lossless(diagnostics: &[u8], stream_index: u64) -> Option<bool> {
    let descriptor = format!("{STREAM_DESCRIPTOR_PREFIX}{stream_index}");
    let descriptor = memmem::Finder::new(descriptor.as_bytes());
    let video = memmem::Finder::new(JPEG2000_VIDEO_MARKER);

    diagnostics
        .split(|&b| b == b'\n')
        .filter(|line| descriptor.find(line).is_some())
        .find(|line| video.find(line).is_some())
        .map(|line| {
            log::trace!(
                "Deciding stream #{} from: {}",
                stream_index,
                String::from_utf8_lossy(line).trim()
            );
            memmem::find(line, LOSSLESS_MARKER).is_some()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ProbeReport;

    fn report(json: &str) -> ProbeReport {
        ProbeReport::from_slice(json.as_bytes()).unwrap()
    }

    const J2K_REPORT: &str = r#"{"streams":[{"index":0,"codec_name":"jpeg2000"}]}"#;

    #[test]
    fn lossless_line_sets_true() {
        let mut report = report(J2K_REPORT);
        enrich(&mut report, b"Stream #0:0: Video: jpeg2000, lossless");
        assert_eq!(report.streams[0].lossless_wavelet_transform, Some(true));
    }

    #[test]
    fn lossy_line_sets_false() {
        let mut report = report(J2K_REPORT);
        enrich(&mut report, b"Stream #0:0: Video: jpeg2000");
        assert_eq!(report.streams[0].lossless_wavelet_transform, Some(false));
    }

    #[test]
    fn no_matching_line_leaves_attribute_absent() {
        let mut report = report(J2K_REPORT);
        enrich(
            &mut report,
            b"Input #0, mov,mp4,m4a,3gp,3g2,mj2, from 'clip.mj2':\n  Stream #0:1: Audio: pcm_s16le\n",
        );
        assert_eq!(report.streams[0].lossless_wavelet_transform, None);

        let value = report.to_value().unwrap();
        assert!(value["streams"][0].get(LOSSLESS_WAVELET_TRANSFORM).is_none());
    }

    #[test]
    fn empty_diagnostics_leave_attribute_absent() {
        let mut report = report(J2K_REPORT);
        enrich(&mut report, b"");
        assert_eq!(report.streams[0].lossless_wavelet_transform, None);
    }

    #[test]
    fn other_codecs_keep_their_key_set() {
        let mut report = report(
            r#"{"streams":[{"index":0,"codec_name":"h264","codec_type":"video"},{"index":1}]}"#,
        );
        let before: Vec<_> = report.streams.iter().map(|s| s.attribute_names()).collect();

        enrich(&mut report, b"Stream #0:0: Video: jpeg2000, lossless\nStream #0:1: Video: jpeg2000, lossless\n");

        let after: Vec<_> = report.streams.iter().map(|s| s.attribute_names()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn each_stream_uses_its_own_line() {
        let mut report = report(
            r#"{"streams":[
                {"index":0,"codec_name":"jpeg2000"},
                {"index":1,"codec_name":"jpeg2000"},
                {"index":2,"codec_name":"pcm_s24le"}
            ]}"#,
        );
        let stderr = b"Input #0, mxf, from 'reel.mxf':\n\
            \x20 Stream #0:0: Video: jpeg2000, xyz12le, 2048x1080, lossless, 24 fps\n\
            \x20 Stream #0:1: Video: jpeg2000, xyz12le, 2048x1080, 24 fps\n\
            \x20 Stream #0:2: Audio: pcm_s24le, 48000 Hz, 6 channels\n";

        enrich(&mut report, stderr);

        assert_eq!(report.streams[0].lossless_wavelet_transform, Some(true));
        assert_eq!(report.streams[1].lossless_wavelet_transform, Some(false));
        assert_eq!(report.streams[2].lossless_wavelet_transform, None);
    }

    #[test]
    fn first_jpeg2000_line_in_text_order_wins() {
        let stderr = b"Stream #0:0: Video: jpeg2000\nStream #0:0: Video: jpeg2000, lossless\n";
        assert_eq!(determine_lossless(stderr, 0), Some(false));
    }

    #[test]
    fn descriptor_lines_for_other_media_are_skipped() {
        let stderr = b"Stream #0:1(eng): Audio: aac, lossless-ish\nStream #0:1: Video: jpeg2000, lossless\n";
        assert_eq!(determine_lossless(stderr, 1), Some(true));
    }

    #[test]
    fn shorter_index_matches_longer_descriptor() {
        // "Stream #0:1" is a prefix of "Stream #0:12"; the first hit stands.
        let stderr = b"Stream #0:12: Video: jpeg2000, lossless\nStream #0:1: Video: jpeg2000\n";
        assert_eq!(determine_lossless(stderr, 1), Some(true));
        assert_eq!(determine_lossless(stderr, 12), Some(true));
    }

    #[test]
    fn crlf_line_endings_still_match() {
        let stderr = b"Stream #0:0: Video: jpeg2000, lossless\r\n";
        assert_eq!(determine_lossless(stderr, 0), Some(true));
    }

    #[test]
    fn enrichment_is_idempotent() {
        let stderr = b"Stream #0:0: Video: jpeg2000, lossless\n";
        let mut once = report(J2K_REPORT);
        enrich(&mut once, stderr);

        let mut twice = once.clone();
        enrich(&mut twice, stderr);

        assert_eq!(once, twice);
    }

    #[test]
    fn previous_value_is_kept_when_no_line_matches() {
        let mut report = report(
            r#"{"streams":[{"index":0,"codec_name":"jpeg2000","lossless_wavelet_transform":true}]}"#,
        );
        enrich(&mut report, b"");
        assert_eq!(report.streams[0].lossless_wavelet_transform, Some(true));
    }
}
