/*!
 * Tests for the display-width-aware reflow engine
 */

use subtidy::normalize::reflow::{display_width, reflow_text};

/// Test display width of wide, narrow, and combining characters
#[test]
fn test_displayWidth_withMixedScripts_shouldFollowEastAsianRules() {
    assert_eq!(display_width("hello"), 5);
    assert_eq!(display_width("你好"), 4);
    assert_eq!(display_width("你好 ab"), 7);
    // Combining acute accent contributes no columns
    assert_eq!(display_width("e\u{0301}"), 1);
    // Full-width punctuation is wide
    assert_eq!(display_width("（註）"), 6);
}

/// Test that override-tag markup is excluded from the width calculation
#[test]
fn test_displayWidth_withOverrideTag_shouldIgnoreMarkup() {
    assert_eq!(display_width(r"{\an8}你好"), 4);
    assert_eq!(display_width(r"{\an8}"), 0);
}

/// Test lines at or under the threshold passing through unchanged
#[test]
fn test_reflowText_withShortLines_shouldNotChange() {
    let text = "第一行\n第二行比較長一點但還是沒問題";
    assert_eq!(reflow_text(text), text);

    // Exactly 41 columns stays on one line: 20 wide + 1 space + 20 wide
    let at_limit = "一二三四五六七八九十 一二三四五六七八九十";
    assert_eq!(display_width(at_limit), 41);
    assert_eq!(reflow_text(at_limit), at_limit);
}

/// Test greedy wrapping of a 45-column line at the token boundary that
/// would first exceed the fill target
#[test]
fn test_reflowText_withOverWidthLine_shouldWrapGreedily() {
    let line = "一二三四五六七八九十 一二三四五六七八九 hello";
    assert_eq!(display_width(line), 45);

    let wrapped = reflow_text(line);
    assert_eq!(wrapped, "一二三四五六七八九十 一二三四五六七八九\nhello");
    for segment in wrapped.split('\n') {
        assert!(display_width(segment) <= 41);
    }
}

/// Test that explicit breaks are preserved and each line wraps independently
#[test]
fn test_reflowText_withExplicitBreaks_shouldWrapEachLineIndependently() {
    let long_line = "一二三四五六七八九十 一二三四五六七八九 hello";
    let text = format!("短行\n{}", long_line);

    let wrapped = reflow_text(&text);
    let lines: Vec<&str> = wrapped.split('\n').collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "短行");
}

/// Test that a single token wider than the limit is never split
#[test]
fn test_reflowText_withOversizedToken_shouldLeaveTokenIntact() {
    let token = "一二三四五六七八九十一二三四五六七八九十一二";
    assert!(display_width(token) > 41);
    assert_eq!(reflow_text(token), token);
}
