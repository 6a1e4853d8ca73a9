/*!
 * Illegal-character check over final cue text.
 *
 * A fixed whitelist of permitted scripts and symbols; anything outside it is
 * collected and reported, never altered.
 */

use once_cell::sync::Lazy;
use regex::Regex;

use crate::subtitle_processor::SubtitleEntry;

/// Characters outside the permitted set, per cue
#[derive(Debug, Clone)]
pub struct IllegalCharRecord {
    /// 1-based index into the sorted track
    pub index: usize,
    /// Start time in ms
    pub start_time_ms: u64,
    /// End time in ms
    pub end_time_ms: u64,
    /// The cue text the characters were found in
    pub text: String,
    /// The offending characters, in order of appearance
    pub characters: Vec<char>,
}

// Latin, digits, CJK ideographs, permitted ASCII and full-width punctuation,
// arrows, brackets, and the handful of decorative symbols that legitimately
// appear in subtitle text.
static ILLEGAL_CHAR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r#"[^αa-zA-Z0-9\u4E00-\u9FFF!?\[\]{}&/\\,.;:()%$><='"~+\-* "#,
        "（），。、——＋！×？⁉︎：・…「」／→←〈〉《》＞＜～％｜♥★♪＆©\n]",
    )).expect("Invalid illegal character regex")
});

/// Collect every character of `text` outside the whitelist.
pub fn scan_text(text: &str) -> Vec<char> {
    ILLEGAL_CHAR_REGEX.find_iter(text)
        .filter_map(|m| m.as_str().chars().next())
        .collect()
}

/// Build the diagnostic record for a cue, if it carries illegal characters.
pub fn scan_entry(index: usize, entry: &SubtitleEntry) -> Option<IllegalCharRecord> {
    let characters = scan_text(&entry.text);
    if characters.is_empty() {
        return None;
    }

    Some(IllegalCharRecord {
        index,
        start_time_ms: entry.start_time_ms,
        end_time_ms: entry.end_time_ms,
        text: entry.text.clone(),
        characters,
    })
}
