/*!
 * Tests for the character-level diff reporter
 */

use subtidy::normalize::diff::{render_record, render_report, TypoRecord};

fn record(index: usize, original: &str, corrected: &str) -> TypoRecord {
    TypoRecord {
        index,
        start_time_ms: 61234,
        end_time_ms: 63456,
        original_text: original.to_string(),
        corrected_text: corrected.to_string(),
    }
}

/// Test that a substitution is bracket-marked on both sides
#[test]
fn test_renderRecord_withSubstitution_shouldMarkBothColumns() {
    let block = render_record(&record(5, "好象一樣", "好像一樣"));

    assert!(block.starts_with("5\n00:01:01,234 --> 00:01:03,456\n"));
    assert!(block.contains("好【象】一樣"));
    assert!(block.contains("好【像】一樣"));
    assert!(block.contains("---->"));
}

/// Test that an insertion only marks the corrected column
#[test]
fn test_renderRecord_withInsertion_shouldMarkCorrectedOnly() {
    let block = render_record(&record(1, "你好", "你好嗎"));

    assert!(block.contains("【嗎】"));
    assert!(!block.contains("你【好】"));
}

/// Test the continuation marker on multi-line records
#[test]
fn test_renderRecord_withMultilineText_shouldUseArrowOnceThenContinuation() {
    let block = render_record(&record(2, "第一行\n第二個", "第一行\n第二行"));

    assert_eq!(block.matches("---->").count(), 1);
    // Two aligned visual lines after the header
    let body_lines: Vec<&str> = block.lines().skip(2).collect();
    assert_eq!(body_lines.len(), 2);
    assert!(body_lines[0].contains("---->"));
    assert!(!body_lines[1].contains("---->"));
}

/// Test that the full report separates records with a blank line
#[test]
fn test_renderReport_withTwoRecords_shouldSeparateBlocks() {
    let report = render_report(&[
        record(1, "好象", "好像"),
        record(2, "你好", "你好嗎"),
    ]);

    assert!(report.contains("\n\n2\n"));
    assert!(report.ends_with("\n\n"));
}

/// Test that identical texts render with no markers
#[test]
fn test_renderRecord_withEqualTexts_shouldHaveNoMarkers() {
    let block = render_record(&record(1, "一樣", "一樣"));
    assert!(!block.contains('【'));
}
