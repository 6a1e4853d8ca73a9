use std::fs;
use std::fs::File;
use std::fmt;
use regex::Regex;
use once_cell::sync::Lazy;
use anyhow::{Result, Context, anyhow};
use std::io::Write;
use std::path::{Path, PathBuf};
use log::warn;

// @module: Subtitle track model and SRT round-trip

// @const: SRT timestamp regex
static TIMESTAMP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{2}):(\d{2}):(\d{2}),(\d{3}) --> (\d{2}):(\d{2}):(\d{2}),(\d{3})").unwrap()
});

// @struct: Single subtitle entry
#[derive(Debug, Clone)]
pub struct SubtitleEntry {
    // @field: Sequence number
    pub seq_num: usize,

    // @field: Start time in ms
    pub start_time_ms: u64,

    // @field: End time in ms
    pub end_time_ms: u64,

    // @field: Subtitle text, lines separated by '\n'
    pub text: String,
}

impl SubtitleEntry {
    /// Creates a new subtitle entry
    pub fn new(seq_num: usize, start_time_ms: u64, end_time_ms: u64, text: String) -> Self {
        SubtitleEntry {
            seq_num,
            start_time_ms,
            end_time_ms,
            text,
        }
    }

    // @creates: Validated subtitle entry
    // @validates: Non-empty text; time ranges are NOT validated here, start > end
    //             is surfaced by the overlap report instead of being repaired
    pub fn new_validated(seq_num: usize, start_time_ms: u64, end_time_ms: u64, text: String) -> Result<Self> {
        let trimmed_text = text.trim();
        if trimmed_text.is_empty() {
            return Err(anyhow!("Empty subtitle text for entry {}", seq_num));
        }

        Ok(SubtitleEntry {
            seq_num,
            start_time_ms,
            end_time_ms,
            text: trimmed_text.to_string(),
        })
    }

    /// Parse an SRT timestamp to milliseconds
    pub fn parse_timestamp(timestamp: &str) -> Result<u64> {
        // Parse HH:MM:SS,mmm format
        let parts: Vec<&str> = timestamp.split(&[':', ',', '.'][..]).collect();

        if parts.len() != 4 {
            return Err(anyhow!("Invalid timestamp format: {}", timestamp));
        }

        let hours: u64 = parts[0].parse().context("Failed to parse hours")?;
        let minutes: u64 = parts[1].parse().context("Failed to parse minutes")?;
        let seconds: u64 = parts[2].parse().context("Failed to parse seconds")?;
        let millis: u64 = parts[3].parse().context("Failed to parse milliseconds")?;

        if minutes >= 60 || seconds >= 60 || millis >= 1000 {
            return Err(anyhow!("Invalid time components in timestamp: {}", timestamp));
        }

        Ok(hours * 3_600_000 + minutes * 60_000 + seconds * 1_000 + millis)
    }

    /// Convert start time to formatted SRT timestamp
    pub fn format_start_time(&self) -> String {
        Self::format_timestamp(self.start_time_ms)
    }

    /// Convert end time to formatted SRT timestamp
    pub fn format_end_time(&self) -> String {
        Self::format_timestamp(self.end_time_ms)
    }

    /// Format a timestamp in milliseconds to SRT format (HH:MM:SS,mmm)
    pub fn format_timestamp(ms: u64) -> String {
        let hours = ms / 3_600_000;
        let minutes = (ms % 3_600_000) / 60_000;
        let seconds = (ms % 60_000) / 1_000;
        let millis = ms % 1_000;

        format!("{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, millis)
    }
}

impl fmt::Display for SubtitleEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.seq_num)?;
        writeln!(f, "{} --> {}", self.format_start_time(), self.format_end_time())?;
        writeln!(f, "{}", self.text)?;
        writeln!(f)
    }
}

/// Collection of subtitle entries with metadata
#[derive(Debug)]
pub struct SubtitleCollection {
    /// Source filename
    pub source_file: PathBuf,

    /// List of subtitle entries
    pub entries: Vec<SubtitleEntry>,
}

impl SubtitleCollection {
    /// Create a new subtitle collection
    pub fn new(source_file: PathBuf) -> Self {
        SubtitleCollection {
            source_file,
            entries: Vec::new(),
        }
    }

    /// Load a subtitle collection from an SRT file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read subtitle file: {}", path.display()))?;
        let entries = Self::parse_srt_string(&content)
            .with_context(|| format!("Failed to parse subtitle file: {}", path.display()))?;

        Ok(SubtitleCollection {
            source_file: path.to_path_buf(),
            entries,
        })
    }

    /// Write subtitles to an SRT file
    pub fn write_to_srt<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let mut file = File::create(path)
            .with_context(|| format!("Failed to create subtitle file: {}", path.display()))?;

        for entry in &self.entries {
            write!(file, "{}", entry)?;
        }

        Ok(())
    }

    /// Shift every entry by the given offset in milliseconds, saturating at zero
    pub fn shift_ms(&mut self, offset_ms: i64) {
        for entry in &mut self.entries {
            entry.start_time_ms = Self::apply_offset(entry.start_time_ms, offset_ms);
            entry.end_time_ms = Self::apply_offset(entry.end_time_ms, offset_ms);
        }
    }

    fn apply_offset(time_ms: u64, offset_ms: i64) -> u64 {
        if offset_ms >= 0 {
            time_ms.saturating_add(offset_ms as u64)
        } else {
            time_ms.saturating_sub(offset_ms.unsigned_abs())
        }
    }

    /// Append another collection after this one, separated by a fixed gap.
    ///
    /// Every entry of `other` is shifted so that the second track starts
    /// `gap_ms` after the last entry of this one, then entries are renumbered.
    pub fn append_collection(&mut self, other: SubtitleCollection, gap_ms: u64) {
        let offset = self.entries.last()
            .map(|entry| entry.end_time_ms + gap_ms)
            .unwrap_or(0);

        for mut entry in other.entries {
            entry.start_time_ms += offset;
            entry.end_time_ms += offset;
            self.entries.push(entry);
        }

        self.renumber();
    }

    /// Renumber entries to ensure sequential order
    pub fn renumber(&mut self) {
        for (i, entry) in self.entries.iter_mut().enumerate() {
            entry.seq_num = i + 1;
        }
    }

    /// Parse SRT format string into subtitle entries.
    ///
    /// File order is preserved: the normalization pipeline depends on the
    /// original cue order for its merge pass and sorts the track itself.
    pub fn parse_srt_string(content: &str) -> Result<Vec<SubtitleEntry>> {
        let mut entries = Vec::new();

        // One cue being accumulated: header lines first, then text until a blank
        let mut seq_num: Option<usize> = None;
        let mut times: Option<(u64, u64)> = None;
        let mut text = String::new();

        for (line_idx, line) in content.lines().enumerate() {
            let trimmed = line.trim();

            // A blank line closes the cue under construction
            if trimmed.is_empty() {
                if let (Some(num), Some((start_ms, end_ms))) = (seq_num, times) {
                    if !text.is_empty() {
                        Self::push_parsed_entry(&mut entries, num, start_ms, end_ms, &text);
                        seq_num = None;
                        times = None;
                        text.clear();
                    }
                }
                continue;
            }

            if seq_num.is_none() && text.is_empty() {
                if let Ok(num) = trimmed.parse::<usize>() {
                    seq_num = Some(num);
                    continue;
                }
            }

            if seq_num.is_some() && times.is_none() {
                if let Some(caps) = TIMESTAMP_REGEX.captures(trimmed) {
                    times = Some((
                        Self::captured_timestamp_ms(&caps, 1),
                        Self::captured_timestamp_ms(&caps, 5),
                    ));
                    continue;
                }
            }

            if times.is_some() {
                if !text.is_empty() {
                    text.push('\n');
                }
                text.push_str(trimmed);
            } else {
                // Malformed SRT; drop the stray line and keep scanning
                warn!("Unexpected text at line {} before sequence number or timestamp: {}", line_idx + 1, trimmed);
            }
        }

        // The last cue may end at EOF instead of a blank line
        if let (Some(num), Some((start_ms, end_ms))) = (seq_num, times) {
            if !text.is_empty() {
                Self::push_parsed_entry(&mut entries, num, start_ms, end_ms, &text);
            }
        }

        if entries.is_empty() {
            warn!("No valid subtitle entries found in content");
            return Err(anyhow!("No valid subtitle entries were found in the SRT content"));
        }

        // Renumber entries to ensure sequential order
        for (i, entry) in entries.iter_mut().enumerate() {
            entry.seq_num = i + 1;
        }

        Ok(entries)
    }

    // @creates: Entry from parser state, skipping unusable cues with a warning
    fn push_parsed_entry(entries: &mut Vec<SubtitleEntry>, seq_num: usize, start_ms: u64, end_ms: u64, text: &str) {
        if text.trim().is_empty() {
            warn!("Skipping empty subtitle entry {}", seq_num);
            return;
        }
        match SubtitleEntry::new_validated(seq_num, start_ms, end_ms, text.trim().to_string()) {
            Ok(entry) => entries.push(entry),
            Err(e) => warn!("Skipping invalid subtitle entry {}: {}", seq_num, e),
        }
    }

    // Timestamp components are guaranteed by TIMESTAMP_REGEX to be digit runs
    fn captured_timestamp_ms(caps: &regex::Captures, start_idx: usize) -> u64 {
        let component = |i: usize| caps[start_idx + i].parse::<u64>().unwrap_or(0);
        (component(0) * 3600 + component(1) * 60 + component(2)) * 1000 + component(3)
    }
}

impl fmt::Display for SubtitleCollection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Subtitle Collection")?;
        writeln!(f, "Source: {:?}", self.source_file)?;
        writeln!(f, "Entries: {}", self.entries.len())?;
        Ok(())
    }
}
