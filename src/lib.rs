/*!
 * # subtidy - Subtitle cue normalization and reflow
 *
 * A Rust library for cleaning up SRT subtitle tracks.
 *
 * ## Features
 *
 * - Ordered, deterministic punctuation and bracket normalization for
 *   CJK-bearing cue text
 * - Deduplication and merging of cues that share a time range
 * - Timing-overlap detection with a plain-text report
 * - Display-width-aware line rewrapping (East Asian width rules)
 * - Character-level diff reports of every normalization change
 * - Pluggable term dictionary for dialect and typo substitution
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `subtitle_processor`: Subtitle file handling and SRT round-trip
 * - `normalize`: The cue normalization and reflow pipeline:
 *   - `normalize::rules`: Ordered per-cue text transformations
 *   - `normalize::merge`: Duplicate time-range collapsing
 *   - `normalize::overlap`: Timing-overlap detection
 *   - `normalize::reflow`: Display-width-aware rewrapping
 *   - `normalize::charset`: Illegal-character checking
 *   - `normalize::diff`: Character-level change reports
 * - `dictionary`: Term substitution collaborator implementations
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod file_utils;
pub mod subtitle_processor;
pub mod normalize;
pub mod dictionary;
pub mod app_controller;
pub mod errors;

// Re-export main types for easier usage
pub use app_config::Config;
pub use subtitle_processor::{SubtitleCollection, SubtitleEntry};
pub use normalize::{Pipeline, PipelineReport, TypoRecord, OverlapRecord, IllegalCharRecord};
pub use dictionary::{TermCategory, TermDictionary, NoopDictionary};
pub use errors::{AppError, DictionaryError, SubtitleError};
