use crate::errors::AppError;

/// Longest text, in characters, that can be displayed or saved.
pub const MAX_TEXT_LENGTH: usize = 200;

/// Rejects text longer than [`MAX_TEXT_LENGTH`] characters.
pub fn validate_length(text: &str) -> Result<(), AppError> {
    if text.chars().count() > MAX_TEXT_LENGTH {
        return Err(AppError::Validation(format!(
            "Text exceeds maximum length of {MAX_TEXT_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validates text for the history and returns the trimmed form that gets stored.
///
/// The length limit applies to the text as submitted, before trimming.
pub fn sanitize_history_text(text: &str) -> Result<String, AppError> {
    if text.trim().is_empty() {
        return Err(AppError::Validation("Text cannot be empty".to_string()));
    }
    validate_length(text)?;
    Ok(text.trim().to_string())
}
