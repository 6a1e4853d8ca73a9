/*!
 * Timing-overlap detection over a sorted track.
 *
 * Strictly diagnostic: cues are flagged, never repaired. Downstream
 * consumers decide remediation.
 */

use std::fmt::Write;

use crate::subtitle_processor::SubtitleEntry;

/// A flagged cue, referenced by its 1-based position in the sorted track
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlapRecord {
    /// 1-based index into the sorted track
    pub index: usize,
}

/// Scan a time-sorted track and flag cues whose interval is not strictly
/// after their predecessor's.
pub fn detect(entries: &[SubtitleEntry]) -> Vec<OverlapRecord> {
    let mut records = Vec::new();

    for i in 1..entries.len() {
        let prev = &entries[i - 1];
        let current = &entries[i];

        if current.start_time_ms < prev.start_time_ms
            || current.end_time_ms < prev.end_time_ms
            || current.start_time_ms < prev.end_time_ms
        {
            records.push(OverlapRecord { index: i + 1 });
        }
    }

    records
}

/// Render the overlap report: one block per flagged cue with its index,
/// timestamp range, and text.
pub fn render_report(entries: &[SubtitleEntry], records: &[OverlapRecord]) -> String {
    let mut report = String::new();

    for record in records {
        let entry = &entries[record.index - 1];
        let _ = writeln!(report, "{}", record.index);
        let _ = writeln!(report, "{} --> {}", entry.format_start_time(), entry.format_end_time());
        let _ = writeln!(report, "{}", entry.text);
        let _ = writeln!(report);
    }

    report
}
