// src/domain/error.rs
use crate::domain::NoteId;
use thiserror::Error;

/// Rejected note content. Each variant names the rule that failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title must not be empty")]
    TitleEmpty,
    #[error("Title is too short ({len} chars, minimum {min})", min = crate::constants::TITLE_MIN_CHARS)]
    TitleTooShort { len: usize },
    #[error("Title is too long ({len} chars, maximum {max})", max = crate::constants::TITLE_MAX_CHARS)]
    TitleTooLong { len: usize },
    #[error("Details must not be empty")]
    SubtitleEmpty,
    #[error("Details are too long ({len} chars, maximum {max})", max = crate::constants::SUBTITLE_MAX_CHARS)]
    SubtitleTooLong { len: usize },
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Note not found: {0}")]
pub struct NoteNotFound(pub NoteId);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Note not found: {0}")]
    NoteNotFound(NoteId),
}

impl From<NoteNotFound> for DomainError {
    fn from(value: NoteNotFound) -> Self {
        Self::NoteNotFound(value.0)
    }
}
