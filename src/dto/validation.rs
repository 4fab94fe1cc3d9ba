//! Validation helpers for DTOs.

use validator::ValidationError;

use crate::sentiment::AnalyzerScores;

/// Shortest accepted input once surrounding whitespace is removed.
pub const MIN_TEXT_CHARS: usize = 2;
/// Longest accepted input once surrounding whitespace is removed.
pub const MAX_TEXT_CHARS: usize = 1000;

/// Validates that the text carries between 2 and 1000 characters after trimming.
///
/// # Examples
///
/// ```ignore
/// validate_text("  a sunny day ") // Ok
/// validate_text("   ")            // Err - blank
/// validate_text(" a ")            // Err - too short
/// ```
pub fn validate_text(text: &str) -> Result<(), ValidationError> {
    let chars = text.trim().chars().count();
    if chars == 0 {
        let mut err = ValidationError::new("text_blank");
        err.message = Some("Text must not be blank".into());
        return Err(err);
    }

    if !(MIN_TEXT_CHARS..=MAX_TEXT_CHARS).contains(&chars) {
        let mut err = ValidationError::new("text_length");
        err.message = Some(
            format!(
                "Text must contain between {MIN_TEXT_CHARS} and {MAX_TEXT_CHARS} characters (got {chars})"
            )
            .into(),
        );
        return Err(err);
    }

    Ok(())
}

/// Validates that every supplied analyzer output lies in its documented range.
pub fn validate_scores(scores: &AnalyzerScores) -> Result<(), ValidationError> {
    let in_range = |value: f64, min: f64, max: f64| (min..=max).contains(&value);

    if let Some(textblob) = scores.textblob {
        if !in_range(textblob.polarity, -1.0, 1.0) || !in_range(textblob.subjectivity, 0.0, 1.0) {
            let mut err = ValidationError::new("textblob_range");
            err.message =
                Some("TextBlob polarity must be in [-1, 1] and subjectivity in [0, 1]".into());
            return Err(err);
        }
    }

    if let Some(vader) = scores.vader {
        if !in_range(vader.compound, -1.0, 1.0) {
            let mut err = ValidationError::new("vader_range");
            err.message = Some("VADER compound score must be in [-1, 1]".into());
            return Err(err);
        }
    }

    Ok(())
}
