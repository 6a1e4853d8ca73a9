/*!
 * Display-width-aware line rewrapping.
 *
 * Width follows East Asian width rules: wide and full-width glyphs count as
 * two columns, combining marks as zero, everything else as one. Override-tag
 * markup is excluded from the calculation since it never renders.
 */

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_width::UnicodeWidthChar;

/// Lines wider than this are rewrapped
const MAX_LINE_WIDTH: usize = 41;

/// Greedy wrapping fills lines up to this many columns
const FILL_TARGET: usize = 40;

static OVERRIDE_TAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{.+?\}").expect("Invalid override tag regex")
});

/// Column count of a line under East Asian width rules, ignoring `{...}`
/// override-tag markup.
pub fn display_width(line: &str) -> usize {
    let visible = OVERRIDE_TAG_REGEX.replace_all(line, "");
    visible.chars()
        .map(|c| c.width().unwrap_or(0))
        .sum()
}

/// Rewrap each explicit line of cue text to the display-width limit.
///
/// Lines at or under the limit pass through unchanged. Over-width lines are
/// split on plain spaces and greedily refilled; tokens are never split, so a
/// single token wider than the limit stands alone.
pub fn reflow_text(text: &str) -> String {
    text.split('\n')
        .map(reflow_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn reflow_line(line: &str) -> String {
    if display_width(line) <= MAX_LINE_WIDTH {
        return line.to_string();
    }

    let tokens: Vec<&str> = line.split(' ').collect();
    let widths: Vec<usize> = tokens.iter().map(|t| display_width(t)).collect();

    // Greedy fill: break before the token that would push the running
    // total past the target, then restart the count at that token
    let mut break_before = vec![false; tokens.len()];
    let mut running = 0;
    for (i, width) in widths.iter().enumerate() {
        if running + width <= FILL_TARGET || i == 0 {
            running += width;
        } else {
            break_before[i] = true;
            running = *width;
        }
    }

    let mut wrapped = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if break_before[i] {
            wrapped.push('\n');
        } else if i > 0 {
            wrapped.push(' ');
        }
        wrapped.push_str(token);
    }

    wrapped
}
