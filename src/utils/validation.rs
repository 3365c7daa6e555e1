//! Local validation for bug submissions.
//!
//! These rules mirror what the service enforces so that invalid input is
//! rejected before any request is sent.

use thiserror::Error;

use crate::types::BugUpdate;

// ============================================================================
// Constants
// ============================================================================

/// Minimum length for bug titles (in characters).
pub const MIN_TITLE_LENGTH: usize = 5;

/// Maximum length for bug titles (in characters).
pub const MAX_TITLE_LENGTH: usize = 255;

/// Minimum length for bug descriptions (in characters).
pub const MIN_DESCRIPTION_LENGTH: usize = 10;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} cannot be empty")]
    Empty(&'static str),

    #[error("{field} must be at least {min} characters (got {actual})")]
    TooShort {
        field: &'static str,
        min: usize,
        actual: usize,
    },

    #[error("{field} must be at most {max} characters (got {actual})")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    #[error("update has no fields to change")]
    NothingToUpdate,
}

// ============================================================================
// Field Validation
// ============================================================================

/// Validates a bug title.
///
/// Rules:
/// - Must not be empty or whitespace-only
/// - Trimmed length must be between MIN_TITLE_LENGTH and MAX_TITLE_LENGTH
pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    let len = title.trim().chars().count();
    if len == 0 {
        return Err(ValidationError::Empty("title"));
    }
    if len < MIN_TITLE_LENGTH {
        return Err(ValidationError::TooShort {
            field: "title",
            min: MIN_TITLE_LENGTH,
            actual: len,
        });
    }
    if len > MAX_TITLE_LENGTH {
        return Err(ValidationError::TooLong {
            field: "title",
            max: MAX_TITLE_LENGTH,
            actual: len,
        });
    }
    Ok(())
}

/// Validates a bug description (non-empty, at least MIN_DESCRIPTION_LENGTH).
pub fn validate_description(description: &str) -> Result<(), ValidationError> {
    let len = description.trim().chars().count();
    if len == 0 {
        return Err(ValidationError::Empty("description"));
    }
    if len < MIN_DESCRIPTION_LENGTH {
        return Err(ValidationError::TooShort {
            field: "description",
            min: MIN_DESCRIPTION_LENGTH,
            actual: len,
        });
    }
    Ok(())
}

/// Validates a full submission. Title errors are reported first.
pub fn validate_submission(title: &str, description: &str) -> Result<(), ValidationError> {
    validate_title(title)?;
    validate_description(description)
}

/// Validates the fields present in a partial update.
pub fn validate_update(update: &BugUpdate) -> Result<(), ValidationError> {
    if update.is_empty() {
        return Err(ValidationError::NothingToUpdate);
    }
    if let Some(title) = &update.title {
        validate_title(title)?;
    }
    if let Some(description) = &update.description {
        validate_description(description)?;
    }
    if let Some(developer) = &update.assigned_developer
        && developer.trim().is_empty()
    {
        return Err(ValidationError::Empty("assigned developer"));
    }
    Ok(())
}
