//! Request field validation.
//!
//! Failures are reported as `AppError::Validation`, which renders as 422 with the
//! `VALIDATION_ERROR` code. Lengths are counted in characters, not bytes, so Korean text is
//! measured the way users type it.

use std::sync::LazyLock;

use regex::Regex;

use crate::server::error::AppError;

static EMAIL_RE: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$"));

/// Checks that `value` is between `min` and `max` characters long.
///
/// # Arguments
/// - `field` - Field name used in the error detail
/// - `value` - Value to check
/// - `min` - Minimum number of characters, inclusive
/// - `max` - Maximum number of characters, inclusive
///
/// # Returns
/// - `Ok(())` - Length within range
/// - `Err(AppError::Validation)` - Too short or too long
pub fn length(field: &str, value: &str, min: usize, max: usize) -> Result<(), AppError> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(AppError::Validation(format!(
            "{} must be between {} and {} characters",
            field, min, max
        )));
    }

    Ok(())
}

/// Checks that `value` is not blank.
pub fn not_blank(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} must not be empty", field)));
    }

    Ok(())
}

pub fn email(value: &str) -> Result<(), AppError> {
    let re = EMAIL_RE
        .as_ref()
        .map_err(|e| AppError::InternalError(format!("Invalid email pattern: {}", e)))?;

    if value.len() > 128 || !re.is_match(value) {
        return Err(AppError::Validation("email is not a valid address".to_string()));
    }

    Ok(())
}

/// Strips separators from a phone number and checks it has 10 or 11 digits.
///
/// # Returns
/// - `Ok(String)` - Digits only, e.g. `01012345678` for `010-1234-5678`
/// - `Err(AppError::Validation)` - Contains other characters or has the wrong digit count
pub fn phone_digits(value: &str) -> Result<String, AppError> {
    let digits: String = value
        .chars()
        .filter(|c| !matches!(c, '-' | ' '))
        .collect();

    if !digits.chars().all(|c| c.is_ascii_digit()) || !(10..=11).contains(&digits.len()) {
        return Err(AppError::Validation(
            "phone_num must contain 10 or 11 digits".to_string(),
        ));
    }

    Ok(digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests length counting on multi-byte text.
    ///
    /// Expected: two Hangul syllables count as two characters
    #[test]
    fn counts_characters_not_bytes() {
        assert!(length("name", "김치", 2, 20).is_ok());
        assert!(matches!(
            length("name", "김", 2, 20),
            Err(AppError::Validation(_))
        ));
    }

    /// Tests email shape checks.
    ///
    /// Expected: plain address accepted, missing domain rejected
    #[test]
    fn validates_email_shape() {
        assert!(email("cook@example.com").is_ok());
        assert!(email("cook@").is_err());
        assert!(email("no at sign").is_err());
    }

    /// Tests phone normalization.
    ///
    /// Expected: dashes stripped, letters and short numbers rejected
    #[test]
    fn normalizes_phone_numbers() {
        assert_eq!(phone_digits("010-1234-5678").unwrap(), "01012345678");
        assert!(phone_digits("010-12").is_err());
        assert!(phone_digits("010-abcd-5678").is_err());
    }
}
