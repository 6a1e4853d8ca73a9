use anyhow::{Result, Context};
use log::{error, warn, info};
use std::path::{Path, PathBuf};
use indicatif::{ProgressBar, ProgressStyle};

use crate::app_config::Config;
use crate::dictionary::{JsonDictionary, NoopDictionary, TermDictionary};
use crate::file_utils::FileManager;
use crate::normalize::{overlap, diff, Pipeline, PipelineReport};
use crate::subtitle_processor::SubtitleCollection;

// @module: Application controller for subtitle processing

/// Gap inserted between two appended subtitle tracks
const APPEND_GAP_MS: u64 = 5000;

/// Main application controller for subtitle normalization
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Term dictionary the pipeline delegates to
    dictionary: Box<dyn TermDictionary>,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let dictionary: Box<dyn TermDictionary> = match config.resolve_dictionary_path() {
            Some(path) => {
                info!("Using term dictionary: {}", path.display());
                Box::new(JsonDictionary::load(&path)
                    .with_context(|| format!("Failed to load dictionary: {}", path.display()))?)
            }
            None => {
                warn!("No term dictionary configured, term substitution is disabled");
                Box::new(NoopDictionary)
            }
        };

        Ok(Self { config, dictionary })
    }

    /// Run the normalization workflow for a single subtitle file
    pub fn run(&self, input_file: PathBuf, force_overwrite: bool) -> Result<()> {
        if !input_file.exists() {
            return Err(anyhow::anyhow!("Input file does not exist: {:?}", input_file));
        }

        let output_dir = input_file.parent().unwrap_or(Path::new(".")).to_path_buf();
        let output_name = FileManager::normalized_output_name(&input_file, &self.config.language_tag);
        let output_path = output_dir.join(&output_name);

        if output_path.exists() && output_path != input_file && !force_overwrite {
            warn!("Skipping file, output already exists (use -f to force overwrite)");
            return Ok(());
        }

        let mut collection = SubtitleCollection::from_file(&input_file)?;
        let report = Pipeline::new(self.dictionary.as_ref()).run(&mut collection);

        collection.write_to_srt(&output_path)?;
        info!("Success: {}", output_path.display());
        info!(
            "Entries: {} in, {} out, {} overlapping",
            report.original_count,
            report.final_count,
            report.overlaps.len(),
        );

        if self.config.write_reports {
            self.write_reports(&collection, &report, &output_path)?;
        }

        Ok(())
    }

    /// Write the overlap and typo reports next to the output file.
    ///
    /// Both artifacts are optional: a report is only written when its
    /// finding list is non-empty.
    fn write_reports(&self, collection: &SubtitleCollection, report: &PipelineReport, output_path: &Path) -> Result<()> {
        let stem = output_path.file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let output_dir = output_path.parent().unwrap_or(Path::new("."));

        if !report.overlaps.is_empty() {
            let overlap_path = output_dir.join(format!("{}.overlaps.txt", stem));
            let rendered = overlap::render_report(&collection.entries, &report.overlaps);
            FileManager::write_to_file(&overlap_path, &rendered)?;
            info!("Overlap report: {}", overlap_path.display());
        }

        if !report.typos.is_empty() {
            let typo_path = output_dir.join(format!("{}.typos.txt", stem));
            let rendered = diff::render_report(&report.typos);
            FileManager::write_to_file(&typo_path, &rendered)?;
            info!("Typo report: {}", typo_path.display());
        }

        Ok(())
    }

    /// Run the workflow in folder mode, processing all subtitle files in a
    /// directory. A failing file is counted and skipped, not fatal.
    pub fn run_folder(&self, input_dir: PathBuf, force_overwrite: bool) -> Result<()> {
        let start_time = std::time::Instant::now();

        if !input_dir.exists() {
            return Err(anyhow::anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        let subtitle_files = FileManager::find_files(&input_dir, "srt")?;
        if subtitle_files.is_empty() {
            return Err(anyhow::anyhow!("No subtitle files found in directory: {:?}", input_dir));
        }

        let progress_bar = ProgressBar::new(subtitle_files.len() as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg} {eta}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(template_result.progress_chars("█▓▒░"));
        progress_bar.set_message("Normalizing");

        let mut processed_count = 0;
        let mut failed_count = 0;

        for file in &subtitle_files {
            if let Err(e) = self.run(file.clone(), force_overwrite) {
                error!("Error processing {:?}: {}", file, e);
                failed_count += 1;
            } else {
                processed_count += 1;
            }
            progress_bar.inc(1);
        }

        progress_bar.finish_and_clear();

        info!(
            "Finished: {} processed, {} failed in {}",
            processed_count,
            failed_count,
            Self::format_duration(start_time.elapsed()),
        );

        Ok(())
    }

    /// Shift every cue of a subtitle file by the given offset, in place
    pub fn shift(&self, input_file: PathBuf, offset_ms: i64) -> Result<()> {
        info!("Shifting subtitles by {} ms", offset_ms);

        let mut collection = SubtitleCollection::from_file(&input_file)?;
        collection.shift_ms(offset_ms);
        collection.write_to_srt(&input_file)?;

        info!("Success: {}", input_file.display());
        Ok(())
    }

    /// Append a second subtitle file after the first, with a fixed gap
    pub fn merge(&self, first_file: PathBuf, second_file: PathBuf) -> Result<()> {
        info!("Appending {:?} after {:?}", second_file, first_file);

        let mut first = SubtitleCollection::from_file(&first_file)?;
        let second = SubtitleCollection::from_file(&second_file)?;
        first.append_collection(second, APPEND_GAP_MS);

        let output_dir = first_file.parent().unwrap_or(Path::new(".")).to_path_buf();
        let output_path = output_dir.join(FileManager::merged_output_name(&first_file));
        first.write_to_srt(&output_path)?;

        info!("Success: {}", output_path.display());
        Ok(())
    }

    // Format duration in a human-readable format
    fn format_duration(duration: std::time::Duration) -> String {
        let total_seconds = duration.as_secs();
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}
