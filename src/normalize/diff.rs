/*!
 * Character-level diff rendering for normalization changes.
 *
 * Each typo record is rendered as two aligned columns: the original text
 * with deleted characters bracket-marked, and the corrected text with
 * inserted characters bracket-marked. The original column is padded per
 * visual line so corrections line up in fixed-width output.
 */

use std::fmt::Write;

use similar::{ChangeTag, TextDiff};

use crate::normalize::reflow::display_width;
use crate::subtitle_processor::SubtitleEntry;

/// A before/after text pair produced when normalization changed a cue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypoRecord {
    /// 1-based index into the sorted track, assigned after the final sort
    pub index: usize,
    /// Start time in ms
    pub start_time_ms: u64,
    /// End time in ms
    pub end_time_ms: u64,
    /// Text before the dictionary delegations
    pub original_text: String,
    /// Text after the dictionary delegations
    pub corrected_text: String,
}

/// Pad target for the original column
const PAD_COLUMNS: usize = 40;

/// Fallback pad when the original line is already wider than the target
const OVERFLOW_PAD: usize = 10;

/// Render one record: index, timestamp range, then the aligned columns.
///
/// The first visual line joins the columns with an arrow marker; subsequent
/// lines of the same record use a blank continuation marker.
pub fn render_record(record: &TypoRecord) -> String {
    let mut block = String::new();

    let _ = writeln!(block, "{}", record.index);
    let _ = writeln!(
        block,
        "{} --> {}",
        SubtitleEntry::format_timestamp(record.start_time_ms),
        SubtitleEntry::format_timestamp(record.end_time_ms),
    );

    let (marked_original, marked_corrected) =
        mark_changes(&record.original_text, &record.corrected_text);

    let original_lines: Vec<&str> = marked_original.split('\n').collect();
    let corrected_lines: Vec<&str> = marked_corrected.split('\n').collect();

    let line_count = original_lines.len().max(corrected_lines.len());
    for i in 0..line_count {
        let original = original_lines.get(i).copied().unwrap_or("");
        let corrected = corrected_lines.get(i).copied().unwrap_or("");

        // Pad the original column to a fixed display width so the corrected
        // column lines up; lines already past the target get a fixed pad
        let mut pad = PAD_COLUMNS.saturating_sub(display_width(original));
        if pad == 0 {
            pad = OVERFLOW_PAD;
        }
        let marker = if i == 0 { "---->" } else { "     " };
        let _ = writeln!(block, "{}{}\t{}\t{}", original, " ".repeat(pad), marker, corrected);
    }

    block
}

/// Render the full report: one block per record, separated by blank lines.
pub fn render_report(records: &[TypoRecord]) -> String {
    let mut report = String::new();
    for record in records {
        report.push_str(&render_record(record));
        report.push('\n');
    }
    report
}

/// Compute the minimal-edit character alignment and mark deletions in the
/// original, insertions in the corrected text.
fn mark_changes(original: &str, corrected: &str) -> (String, String) {
    let diff = TextDiff::from_chars(original, corrected);

    let mut marked_original = String::new();
    let mut marked_corrected = String::new();

    for change in diff.iter_all_changes() {
        let value = change.value();
        match change.tag() {
            ChangeTag::Equal => {
                marked_original.push_str(value);
                marked_corrected.push_str(value);
            }
            ChangeTag::Delete => {
                let _ = write!(marked_original, "【{}】", value);
            }
            ChangeTag::Insert => {
                let _ = write!(marked_corrected, "【{}】", value);
            }
        }
    }

    (marked_original, marked_corrected)
}
