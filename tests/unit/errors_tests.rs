/*!
 * Tests for the application error types
 */

use subtidy::errors::{AppError, DictionaryError, SubtitleError};

/// Test error display formatting
#[test]
fn test_errorDisplay_withEachVariant_shouldFormatMessage() {
    let error = SubtitleError::InvalidTimestamp("99:99:99".to_string());
    assert_eq!(error.to_string(), "Invalid timestamp format: 99:99:99");

    let error = SubtitleError::EmptyTrack("episode.srt".to_string());
    assert!(error.to_string().contains("episode.srt"));

    let error = DictionaryError::ParseError("unexpected token".to_string());
    assert!(error.to_string().contains("unexpected token"));
}

/// Test wrapping source errors into the application error
#[test]
fn test_appError_fromSourceErrors_shouldWrap() {
    let app_error: AppError = SubtitleError::InvalidTimestamp("bad".to_string()).into();
    assert!(matches!(app_error, AppError::Subtitle(_)));

    let app_error: AppError = DictionaryError::ReadFailed("gone".to_string()).into();
    assert!(matches!(app_error, AppError::Dictionary(_)));

    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let app_error: AppError = io_error.into();
    assert!(matches!(app_error, AppError::File(_)));

    let app_error: AppError = anyhow::anyhow!("anything").into();
    assert!(matches!(app_error, AppError::Unknown(_)));
}
