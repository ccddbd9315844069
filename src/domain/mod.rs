// src/domain/mod.rs
pub mod error;
pub mod note;
pub mod validation;

pub use error::{DomainError, NoteNotFound, ValidationError};
pub use note::{Note, NoteId};
pub use validation::validate;
