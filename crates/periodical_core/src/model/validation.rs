//! Field validation rules shared by catalog records.
//!
//! # Responsibility
//! - Own the length/emptiness bounds for titles, magazine names and
//!   categories.
//! - Report violations with the measured length and the accepted range.
//!
//! # Invariants
//! - Lengths are counted in characters, not bytes.
//! - Checks are pure; callers decide whether to mutate after `Ok(())`.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Inclusive bounds for article titles.
pub const TITLE_MIN_CHARS: usize = 5;
pub const TITLE_MAX_CHARS: usize = 50;

/// Inclusive bounds for magazine names assigned through the setter.
pub const MAGAZINE_NAME_MIN_CHARS: usize = 2;
pub const MAGAZINE_NAME_MAX_CHARS: usize = 16;

/// Field constraint violations raised by record constructors and setters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Article title is shorter or longer than allowed.
    TitleLength { len: usize, min: usize, max: usize },
    /// Magazine name is shorter or longer than allowed.
    MagazineNameLength { len: usize, min: usize, max: usize },
    /// Magazine category is the empty string.
    EmptyCategory,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TitleLength { len, min, max } => write!(
                f,
                "title must be between {min} and {max} characters, got {len}"
            ),
            Self::MagazineNameLength { len, min, max } => write!(
                f,
                "magazine name must be between {min} and {max} characters, got {len}"
            ),
            Self::EmptyCategory => write!(f, "category must be a non-empty string"),
        }
    }
}

impl Error for ValidationError {}

pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    let len = title.chars().count();
    if !(TITLE_MIN_CHARS..=TITLE_MAX_CHARS).contains(&len) {
        return Err(ValidationError::TitleLength {
            len,
            min: TITLE_MIN_CHARS,
            max: TITLE_MAX_CHARS,
        });
    }
    Ok(())
}

pub fn validate_magazine_name(name: &str) -> Result<(), ValidationError> {
    let len = name.chars().count();
    if !(MAGAZINE_NAME_MIN_CHARS..=MAGAZINE_NAME_MAX_CHARS).contains(&len) {
        return Err(ValidationError::MagazineNameLength {
            len,
            min: MAGAZINE_NAME_MIN_CHARS,
            max: MAGAZINE_NAME_MAX_CHARS,
        });
    }
    Ok(())
}

/// Whitespace-only categories are accepted; only the empty string is not.
pub fn validate_category(category: &str) -> Result<(), ValidationError> {
    if category.is_empty() {
        return Err(ValidationError::EmptyCategory);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{validate_category, validate_magazine_name, validate_title, ValidationError};

    #[test]
    fn title_bounds_are_inclusive() {
        assert!(validate_title("abcde").is_ok());
        assert!(validate_title(&"x".repeat(50)).is_ok());
        assert_eq!(
            validate_title("abcd").unwrap_err(),
            ValidationError::TitleLength {
                len: 4,
                min: 5,
                max: 50
            }
        );
        assert!(validate_title(&"x".repeat(51)).is_err());
    }

    #[test]
    fn title_length_counts_characters() {
        // 5 characters, 10 bytes.
        assert!(validate_title("ééééé").is_ok());
    }

    #[test]
    fn magazine_name_bounds_are_inclusive() {
        assert!(validate_magazine_name("ab").is_ok());
        assert!(validate_magazine_name(&"m".repeat(16)).is_ok());
        assert!(validate_magazine_name("a").is_err());
        assert!(validate_magazine_name(&"m".repeat(17)).is_err());
    }

    #[test]
    fn category_rejects_only_empty_string() {
        assert_eq!(
            validate_category("").unwrap_err(),
            ValidationError::EmptyCategory
        );
        assert!(validate_category(" ").is_ok());
    }

    #[test]
    fn error_messages_include_measured_length() {
        let message = validate_title("Hi").unwrap_err().to_string();
        assert_eq!(message, "title must be between 5 and 50 characters, got 2");
    }
}
