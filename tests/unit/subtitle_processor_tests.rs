/*!
 * Tests for subtitle model and SRT round-trip functionality
 */

use std::fmt::Write;
use std::path::PathBuf;
use anyhow::Result;
use subtidy::subtitle_processor::{SubtitleEntry, SubtitleCollection};
use crate::common;

/// Test timestamp parsing and formatting
#[test]
fn test_timestamp_parsing_withValidTimestamp_shouldParseAndFormat() {
    let ts = "01:23:45,678";
    let ms = SubtitleEntry::parse_timestamp(ts).unwrap();
    assert_eq!(ms, 5025678);

    let formatted = SubtitleEntry::format_timestamp(ms);
    assert_eq!(formatted, ts);
}

/// Test timestamp parsing rejects malformed input
#[test]
fn test_timestamp_parsing_withInvalidComponents_shouldFail() {
    assert!(SubtitleEntry::parse_timestamp("00:61:00,000").is_err());
    assert!(SubtitleEntry::parse_timestamp("00:00:00").is_err());
}

/// Test subtitle entry display formatting
#[test]
fn test_subtitle_entry_display_withValidEntry_shouldFormatCorrectly() {
    let entry = SubtitleEntry::new(1, 5000, 10000, "Test subtitle".to_string());
    let mut output = String::new();
    write!(output, "{}", entry).unwrap();

    assert!(output.contains("1"));
    assert!(output.contains("00:00:05,000"));
    assert!(output.contains("00:00:10,000"));
    assert!(output.contains("Test subtitle"));
}

/// Test that parsing keeps entries in file order; the pipeline owns sorting
#[test]
fn test_parse_srt_string_withUnorderedEntries_shouldPreserveFileOrder() -> Result<()> {
    let content = "1\n00:00:10,000 --> 00:00:12,000\nSecond in time\n\n2\n00:00:05,000 --> 00:00:07,000\nFirst in time\n";
    let entries = SubtitleCollection::parse_srt_string(content)?;

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].start_time_ms, 10000);
    assert_eq!(entries[1].start_time_ms, 5000);
    assert_eq!(entries[0].seq_num, 1);
    assert_eq!(entries[1].seq_num, 2);
    Ok(())
}

/// Test that an entry with start == end == 0 survives parsing; the
/// normalizer deletion policy handles it, not the parser
#[test]
fn test_parse_srt_string_withZeroTimes_shouldKeepEntry() -> Result<()> {
    let content = "1\n00:00:00,000 --> 00:00:00,000\n片源\n";
    let entries = SubtitleCollection::parse_srt_string(content)?;

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].start_time_ms, 0);
    assert_eq!(entries[0].end_time_ms, 0);
    Ok(())
}

/// Test parsing multi-line cue text
#[test]
fn test_parse_srt_string_withMultilineText_shouldJoinWithNewline() -> Result<()> {
    let content = "1\n00:00:01,000 --> 00:00:02,000\n第一行\n第二行\n";
    let entries = SubtitleCollection::parse_srt_string(content)?;

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].text, "第一行\n第二行");
    Ok(())
}

/// Test parsing content with no entries at all
#[test]
fn test_parse_srt_string_withNoEntries_shouldFail() {
    assert!(SubtitleCollection::parse_srt_string("no subtitles here").is_err());
}

/// Test shifting forwards and backwards with zero saturation
#[test]
fn test_shift_ms_withNegativeOffset_shouldSaturateAtZero() {
    let mut collection = SubtitleCollection::new(PathBuf::from("test.srt"));
    collection.entries.push(common::entry(1, 500, 1500, "early"));
    collection.entries.push(common::entry(2, 5000, 6000, "later"));

    collection.shift_ms(-1000);

    assert_eq!(collection.entries[0].start_time_ms, 0);
    assert_eq!(collection.entries[0].end_time_ms, 500);
    assert_eq!(collection.entries[1].start_time_ms, 4000);

    collection.shift_ms(2500);
    assert_eq!(collection.entries[0].start_time_ms, 2500);
    assert_eq!(collection.entries[1].start_time_ms, 6500);
}

/// Test appending a second collection with a gap
#[test]
fn test_append_collection_withGap_shouldOffsetAndRenumber() {
    let mut first = SubtitleCollection::new(PathBuf::from("part1.srt"));
    first.entries.push(common::entry(1, 0, 2000, "one"));
    first.entries.push(common::entry(2, 3000, 4000, "two"));

    let mut second = SubtitleCollection::new(PathBuf::from("part2.srt"));
    second.entries.push(common::entry(1, 0, 1000, "three"));

    first.append_collection(second, 5000);

    assert_eq!(first.entries.len(), 3);
    assert_eq!(first.entries[2].start_time_ms, 9000);
    assert_eq!(first.entries[2].end_time_ms, 10000);
    assert_eq!(first.entries[2].seq_num, 3);
}

/// Test SRT write/read round-trip through the filesystem
#[test]
fn test_write_to_srt_withEntries_shouldRoundTrip() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("out.srt");

    let mut collection = SubtitleCollection::new(path.clone());
    collection.entries.push(common::entry(1, 1000, 2000, "你好 世界"));
    collection.entries.push(common::entry(2, 3000, 4000, "第一行\n第二行"));
    collection.write_to_srt(&path)?;

    let reloaded = SubtitleCollection::from_file(&path)?;
    assert_eq!(reloaded.entries.len(), 2);
    assert_eq!(reloaded.entries[0].text, "你好 世界");
    assert_eq!(reloaded.entries[1].text, "第一行\n第二行");
    assert_eq!(reloaded.entries[1].start_time_ms, 3000);
    Ok(())
}
