/*!
 * Full app lifecycle tests
 */

use anyhow::Result;
use subtidy::app_config::Config;
use subtidy::app_controller::Controller;
use crate::common;

/// Test controller construction with default configuration
#[test]
fn test_controller_withDefaultConfig_shouldConstruct() -> Result<()> {
    let _controller = Controller::new_for_test()?;
    Ok(())
}

/// Test that a missing input file is a fatal error
#[test]
fn test_run_withMissingInput_shouldFail() -> Result<()> {
    let controller = Controller::new_for_test()?;
    assert!(controller.run("does-not-exist.srt".into(), false).is_err());
    Ok(())
}

/// Test that a directory without subtitle files is a fatal error
#[test]
fn test_runFolder_withNoSubtitles_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let controller = Controller::new_for_test()?;
    assert!(controller.run_folder(temp_dir.path().to_path_buf(), false).is_err());
    Ok(())
}

/// Test that one bad file does not abort folder processing
#[test]
fn test_runFolder_withOneBadFile_shouldProcessTheRest() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();

    common::create_test_file(&dir, "broken.srt", "not a subtitle at all")?;
    common::create_test_subtitle(&dir, "good.srt")?;

    let controller = Controller::new_for_test()?;
    controller.run_folder(dir.clone(), false)?;

    assert!(dir.join("good.zh.srt").exists());
    assert!(!dir.join("broken.zh.srt").exists());
    Ok(())
}

/// Test that a configured but unreadable dictionary fails construction;
/// normalization correctness depends on the dictionary, so this run
/// cannot proceed
#[test]
fn test_controller_withMissingDictionary_shouldFailConstruction() {
    let mut config = Config::default();
    config.dictionary_path = Some("no-such-dictionary.json".into());

    assert!(Controller::with_config(config).is_err());
}
