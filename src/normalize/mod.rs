/*!
 * Cue normalization and reflow pipeline.
 *
 * This module provides the order-sensitive core of the application:
 * - Rule-based text normalization (ordered punctuation/bracket rules)
 * - Duplicate time-range deduplication and merging
 * - Timing-overlap detection (diagnostic only)
 * - Display-width-aware line rewrapping
 * - Illegal-character checking against a fixed whitelist
 * - Character-level diff rendering of normalization changes
 *
 * # Architecture
 *
 * - `rules`: Per-cue deletion policy and ordered transformations
 * - `merge`: Collapses cues sharing a time range
 * - `overlap`: Flags timing violations on the sorted track
 * - `reflow`: Rewraps over-width lines under East Asian width rules
 * - `charset`: Whitelist scan over final cue text
 * - `diff`: Renders before/after alignments for changed cues
 * - `pipeline`: Orchestrates all stages over one track
 */

pub mod rules;
pub mod merge;
pub mod overlap;
pub mod reflow;
pub mod charset;
pub mod diff;
pub mod pipeline;

// Re-export main types
pub use pipeline::{Pipeline, PipelineReport};
pub use rules::CueOutcome;
pub use diff::TypoRecord;
pub use overlap::OverlapRecord;
pub use charset::IllegalCharRecord;
