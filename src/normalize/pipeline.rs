/*!
 * Stage orchestration for the normalization pipeline.
 *
 * Stage order per track: normalize each cue (collecting deletions), merge
 * duplicate time ranges, sort, then per sorted cue tidy annotations, scan
 * for illegal characters, rewrap over-width lines, and detect timing
 * overlaps. Every stage fully completes before the next begins; the
 * pipeline is single-threaded and makes exactly one pass per stage.
 */

use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::dictionary::TermDictionary;
use crate::subtitle_processor::SubtitleCollection;

use super::charset::{self, IllegalCharRecord};
use super::diff::TypoRecord;
use super::merge;
use super::overlap::{self, OverlapRecord};
use super::reflow;
use super::rules::{self, CueOutcome};

/// Everything the pipeline found while transforming one track
#[derive(Debug, Default)]
pub struct PipelineReport {
    /// Cue count before any stage ran
    pub original_count: usize,
    /// Cue count after deletion and merging
    pub final_count: usize,
    /// Before/after pairs for cues the dictionary delegations changed
    pub typos: Vec<TypoRecord>,
    /// Cues whose timing violates monotonicity
    pub overlaps: Vec<OverlapRecord>,
    /// Cues carrying characters outside the whitelist
    pub illegal: Vec<IllegalCharRecord>,
}

static NOTE_BLOCK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)（註：.+?）\n").expect("Invalid note block regex")
});

/// The cue normalization and reflow pipeline
pub struct Pipeline<'a> {
    dictionary: &'a dyn TermDictionary,
}

impl<'a> Pipeline<'a> {
    /// Create a pipeline delegating term substitution to `dictionary`
    pub fn new(dictionary: &'a dyn TermDictionary) -> Self {
        Pipeline { dictionary }
    }

    /// Run every stage over the collection in place and report the findings.
    pub fn run(&self, collection: &mut SubtitleCollection) -> PipelineReport {
        let original_count = collection.entries.len();

        // Normalize per cue, dropping cues the deletion policy rejects
        let mut pending_typos: Vec<TypoRecord> = Vec::new();
        let mut kept = Vec::with_capacity(original_count);
        for mut entry in collection.entries.drain(..) {
            match rules::normalize_cue(&entry, self.dictionary) {
                CueOutcome::Delete => continue,
                CueOutcome::Keep { text, typo } => {
                    if let Some((original_text, corrected_text)) = typo {
                        pending_typos.push(TypoRecord {
                            index: 0,
                            start_time_ms: entry.start_time_ms,
                            end_time_ms: entry.end_time_ms,
                            original_text,
                            corrected_text,
                        });
                    }
                    entry.text = text;
                    kept.push(entry);
                }
            }
        }

        // Collapse duplicate time ranges, then order the track
        collection.entries = merge::merge_duplicate_times(kept);
        collection.entries.sort_by_key(|e| (e.start_time_ms, e.end_time_ms));

        let mut illegal = Vec::new();
        for (i, entry) in collection.entries.iter_mut().enumerate() {
            entry.text = tidy_annotations(&entry.text);

            if let Some(record) = charset::scan_entry(i + 1, entry) {
                warn!(
                    "Illegal characters {:?} in cue {} ({} --> {}): {}",
                    record.characters,
                    record.index,
                    entry.format_start_time(),
                    entry.format_end_time(),
                    record.text,
                );
                illegal.push(record);
            }

            entry.text = reflow::reflow_text(&entry.text);
        }

        let overlaps = overlap::detect(&collection.entries);

        // Typo records point into the sorted track; cues merged into a
        // predecessor kept their time range, so the lookup still lands
        for typo in &mut pending_typos {
            if let Some(pos) = collection.entries.iter().position(|e| {
                e.start_time_ms == typo.start_time_ms && e.end_time_ms == typo.end_time_ms
            }) {
                typo.index = pos + 1;
            }
        }

        collection.renumber();

        debug!(
            "Pipeline finished: {} cues in, {} out, {} typos, {} overlaps",
            original_count,
            collection.entries.len(),
            pending_typos.len(),
            overlaps.len(),
        );

        PipelineReport {
            original_count,
            final_count: collection.entries.len(),
            typos: pending_typos,
            overlaps,
            illegal,
        }
    }
}

/// Post-sort annotation tidy: adjacent closed annotation blocks coalesce,
/// a leading note block relocates after the spoken line, and double spaces
/// collapse.
fn tidy_annotations(text: &str) -> String {
    let mut text = text.replace("）\n（", "\n");

    if NOTE_BLOCK_REGEX.is_match(&text) {
        if let Some((note, rest)) = text.split_once("）\n") {
            text = format!("{}\n{}）", rest, note);
        }
    }

    text.replace("  ", " ")
}
