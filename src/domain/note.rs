// src/domain/note.rs
use serde::Serialize;
use std::fmt;

/// Session-unique note identity. Never reused, even after deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NoteId(pub u64);

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for NoteId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub subtitle: String,
    pub done: bool,
}

impl Note {
    /// Builds an open note. Callers are expected to have validated and
    /// trimmed `title` and `subtitle` already.
    pub(crate) fn new(id: NoteId, title: String, subtitle: String) -> Self {
        Self {
            id,
            title,
            subtitle,
            done: false,
        }
    }
}
