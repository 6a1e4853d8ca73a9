/*!
 * Tests for file and directory utilities
 */

use anyhow::Result;
use subtidy::file_utils::FileManager;
use crate::common;

/// Test existence checks for files and directories
#[test]
fn test_existenceChecks_withTempDir_shouldDistinguishKinds() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir_path = temp_dir.path().to_path_buf();
    let file_path = common::create_test_file(&dir_path, "a.srt", "data")?;

    assert!(FileManager::file_exists(&file_path));
    assert!(!FileManager::file_exists(&dir_path));
    assert!(FileManager::dir_exists(&dir_path));
    assert!(!FileManager::dir_exists(&file_path));
    Ok(())
}

/// Test recursive file discovery by extension
#[test]
fn test_findFiles_withNestedDirs_shouldFindAllSrtFiles() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path().to_path_buf();
    let nested = root.join("season1");
    FileManager::ensure_dir(&nested)?;

    common::create_test_file(&root, "a.srt", "1")?;
    common::create_test_file(&nested, "b.SRT", "2")?;
    common::create_test_file(&root, "c.txt", "3")?;

    let found = FileManager::find_files(&root, "srt")?;
    assert_eq!(found.len(), 2);
    Ok(())
}

/// Test write and read round-trip with directory creation
#[test]
fn test_writeToFile_withMissingParent_shouldCreateIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("deep").join("out.txt");

    FileManager::write_to_file(&path, "內容")?;
    assert_eq!(FileManager::read_to_string(&path)?, "內容");
    Ok(())
}

/// Test output naming: variant tags are stripped and the language tag added
#[test]
fn test_normalizedOutputName_withVariantTag_shouldStripAndTag() {
    assert_eq!(
        FileManager::normalized_output_name("Show.S01E01.chs.srt", "zh"),
        "Show.S01E01.zh.srt"
    );
    assert_eq!(
        FileManager::normalized_output_name("Show.S01E01-cht.srt", "zh"),
        "Show.S01E01.zh.srt"
    );
    assert_eq!(
        FileManager::normalized_output_name("Show.S01E01.srt", "zh"),
        "Show.S01E01.zh.srt"
    );
}

/// Test that an already-tagged filename is left alone
#[test]
fn test_normalizedOutputName_withExistingTag_shouldNotDouble() {
    assert_eq!(
        FileManager::normalized_output_name("Show.S01E01.zh.srt", "zh"),
        "Show.S01E01.zh.srt"
    );
}

/// Test the appended-track output name
#[test]
fn test_mergedOutputName_shouldAppendMergeSuffix() {
    assert_eq!(
        FileManager::merged_output_name("Show.S01E01.srt"),
        "Show.S01E01-merge.srt"
    );
}
