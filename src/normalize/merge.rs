/*!
 * Deduplication and merging of cues that share a time range.
 *
 * The scan is two-pass: the first pass compares each cue against its nearest
 * surviving predecessor and records text updates plus a drop set, the second
 * pass rebuilds the track by filtering. Nothing is deleted mid-iteration, so
 * there are no index-shift hazards, and chain merges accumulate into the same
 * surviving predecessor.
 */

use crate::subtitle_processor::SubtitleEntry;

/// Collapse cues with identical `(start, end)` into one.
///
/// Bracket-stripped-equal texts keep a single cue, preferring the
/// parenthesized annotation variant. Differing texts are concatenated with a
/// line break: the current cue's text is appended after the predecessor,
/// except that an annotation merging into an annotated predecessor lands
/// right after the predecessor's last closed annotation block.
pub fn merge_duplicate_times(entries: Vec<SubtitleEntry>) -> Vec<SubtitleEntry> {
    let mut entries = entries;
    let mut dropped = vec![false; entries.len()];
    let mut prev: Option<usize> = None;

    for i in 0..entries.len() {
        let Some(p) = prev else {
            prev = Some(i);
            continue;
        };

        if entries[i].start_time_ms != entries[p].start_time_ms
            || entries[i].end_time_ms != entries[p].end_time_ms
        {
            prev = Some(i);
            continue;
        }

        let current_text = entries[i].text.clone();
        let prev_text = entries[p].text.clone();

        if strip_brackets(&current_text) == strip_brackets(&prev_text) {
            // Keep exactly one, preferring the annotation variant
            if prev_text.starts_with('（') {
                dropped[i] = true;
            } else {
                dropped[p] = true;
                prev = Some(i);
            }
            continue;
        }

        entries[p].text = merged_text(&prev_text, &current_text);
        dropped[i] = true;
    }

    entries.into_iter()
        .zip(dropped)
        .filter(|(_, drop)| !*drop)
        .map(|(entry, _)| entry)
        .collect()
}

/// Compose the absorbed text for a merge target.
fn merged_text(prev_text: &str, current_text: &str) -> String {
    if current_text.starts_with('（') && prev_text.starts_with('（') {
        // Slot a new annotation after the last closed annotation block
        if let Some(pos) = prev_text.rfind("）\n") {
            let split = pos + "）\n".len();
            return format!("{}{}\n{}", &prev_text[..split], current_text, &prev_text[split..]);
        }
    }
    format!("{}\n{}", prev_text, current_text)
}

fn strip_brackets(text: &str) -> String {
    text.replace('（', "").replace('）', "")
}
