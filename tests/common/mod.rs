/*!
 * Common test utilities for the subtidy test suite
 */

use std::path::PathBuf;
use std::fs;
use anyhow::Result;
use tempfile::TempDir;

use subtidy::subtitle_processor::SubtitleEntry;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a sample subtitle file for testing
pub fn create_test_subtitle(dir: &PathBuf, filename: &str) -> Result<PathBuf> {
    let content = r#"1
00:00:01,000 --> 00:00:04,000
你好,世界

2
00:00:05,000 --> 00:00:09,000
前 情 提 要

3
00:00:10,000 --> 00:00:14,000
平常的一句話
"#;
    create_test_file(dir, filename, content)
}

/// Shorthand for building an entry in tests
pub fn entry(seq_num: usize, start_ms: u64, end_ms: u64, text: &str) -> SubtitleEntry {
    SubtitleEntry::new(seq_num, start_ms, end_ms, text.to_string())
}
