use anyhow::{Result, Context};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use once_cell::sync::Lazy;
use regex::Regex;

// @module: File and directory utilities

// @const: Variant tags stripped from output filenames (-chs, .cht and friends)
static VARIANT_TAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)([-.])ch[st]+").expect("Invalid variant tag regex")
});

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    /// Find files with a specific extension in a directory
    pub fn find_files<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();
        let normalized_ext = if extension.starts_with('.') {
            extension.to_string()
        } else {
            format!(".{}", extension)
        };

        for entry in WalkDir::new(dir.as_ref()).follow_links(true) {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if path.is_file() {
                if let Some(ext) = path.extension() {
                    if ext.to_string_lossy().eq_ignore_ascii_case(&normalized_ext[1..]) {
                        result.push(path.to_path_buf());
                    }
                }
            }
        }

        Ok(result)
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))
    }

    // @generates: Output filename for a normalized subtitle
    // @params: input_file, language_tag
    //
    // Variant tags like "-chs" or ".cht" are stripped and the language tag
    // is inserted before the extension when not already present
    // ("show.chs.srt" -> "show.zh.srt").
    pub fn normalized_output_name<P: AsRef<Path>>(input_file: P, language_tag: &str) -> String {
        let file_name = input_file.as_ref()
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();

        let mut output = VARIANT_TAG_REGEX.replace_all(&file_name, "").into_owned();

        let tag_marker = format!(".{}.", language_tag);
        if !output.contains(&tag_marker) {
            output = output.replace(".srt", &format!(".{}.srt", language_tag));
        }

        output
    }

    // @generates: Output filename for two appended subtitle tracks
    pub fn merged_output_name<P: AsRef<Path>>(input_file: P) -> String {
        let file_name = input_file.as_ref()
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();

        file_name.replace(".srt", "-merge.srt")
    }
}
