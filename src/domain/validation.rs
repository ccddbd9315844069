// src/domain/validation.rs
use crate::constants::{SUBTITLE_MAX_CHARS, TITLE_MAX_CHARS, TITLE_MIN_CHARS};
use crate::domain::ValidationError;
use tracing::instrument;

/// Checks note content against the title/details rules.
///
/// Rules are evaluated on trimmed input in a fixed order and the first
/// violation is returned:
/// 1. title non-empty
/// 2. details non-empty
/// 3. title length within `TITLE_MIN_CHARS..=TITLE_MAX_CHARS`
/// 4. details length at most `SUBTITLE_MAX_CHARS`
///
/// # Examples
///
/// ```
/// use todonotes::domain::{validate, ValidationError};
///
/// assert!(validate("Buy milk", "2% milk, 1 gal").is_ok());
/// assert_eq!(validate("ab", "details"), Err(ValidationError::TitleTooShort { len: 2 }));
/// ```
#[instrument(level = "trace", ret)]
pub fn validate(title: &str, subtitle: &str) -> Result<(), ValidationError> {
    let title = title.trim();
    let subtitle = subtitle.trim();

    if title.is_empty() {
        return Err(ValidationError::TitleEmpty);
    }
    if subtitle.is_empty() {
        return Err(ValidationError::SubtitleEmpty);
    }

    let title_len = title.chars().count();
    if title_len < TITLE_MIN_CHARS {
        return Err(ValidationError::TitleTooShort { len: title_len });
    }
    if title_len > TITLE_MAX_CHARS {
        return Err(ValidationError::TitleTooLong { len: title_len });
    }

    let subtitle_len = subtitle.chars().count();
    if subtitle_len > SUBTITLE_MAX_CHARS {
        return Err(ValidationError::SubtitleTooLong { len: subtitle_len });
    }

    Ok(())
}
