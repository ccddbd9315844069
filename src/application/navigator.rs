// src/application/navigator.rs
use crate::application::NoteStore;
use crate::domain::{DomainError, Note, NoteId, NoteNotFound};
use std::fmt;
use thiserror::Error;
use tracing::{debug, instrument};

/// The three screens a front-end can show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    List,
    Add,
    Edit(NoteId),
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List => write!(f, "list"),
            Self::Add => write!(f, "add"),
            Self::Edit(id) => write!(f, "edit {id}"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("Cannot {action} from the {from} screen")]
    InvalidTransition { from: Screen, action: &'static str },
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl From<NoteNotFound> for NavigationError {
    fn from(value: NoteNotFound) -> Self {
        Self::Domain(value.into())
    }
}

/// Screen state machine on top of a `NoteStore`.
///
/// Forms are left only through a successful `submit` or an explicit `back`.
/// A failed submit keeps the form open so the caller can show the error.
#[derive(Debug, Default)]
pub struct Navigator {
    store: NoteStore,
    screen: Screen,
}

impl Navigator {
    pub fn new(store: NoteStore) -> Self {
        Self {
            store,
            screen: Screen::List,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    /// Mutable access for subscribing observers. Mutations should go
    /// through the navigator so screen rules apply.
    pub fn store_mut(&mut self) -> &mut NoteStore {
        &mut self.store
    }

    pub fn open_add(&mut self) -> Result<(), NavigationError> {
        self.require_list("open the add screen")?;
        self.go(Screen::Add);
        Ok(())
    }

    /// Opens the edit form and returns the note to prefill it with.
    pub fn open_edit(&mut self, id: NoteId) -> Result<Note, NavigationError> {
        self.require_list("open the edit screen")?;
        let note = self.store.get(id)?;
        self.go(Screen::Edit(id));
        Ok(note)
    }

    /// Submits the current form. Returns to the list on success.
    #[instrument(level = "debug", skip(self), fields(screen = %self.screen))]
    pub fn submit(&mut self, title: &str, subtitle: &str) -> Result<Note, NavigationError> {
        let note = match self.screen {
            Screen::List => {
                return Err(NavigationError::InvalidTransition {
                    from: Screen::List,
                    action: "submit a form",
                })
            }
            Screen::Add => self
                .store
                .create(title, subtitle)
                .map_err(DomainError::from)?,
            Screen::Edit(id) => self.store.update(id, title, subtitle)?,
        };
        self.go(Screen::List);
        Ok(note)
    }

    /// Leaves the current form without saving.
    pub fn back(&mut self) {
        self.go(Screen::List);
    }

    pub fn toggle(&mut self, id: NoteId) -> Result<Note, NavigationError> {
        self.require_list("toggle a note")?;
        Ok(self.store.toggle(id)?)
    }

    pub fn delete(&mut self, id: NoteId) -> Result<Note, NavigationError> {
        self.require_list("delete a note")?;
        Ok(self.store.delete(id)?)
    }

    fn require_list(&self, action: &'static str) -> Result<(), NavigationError> {
        if self.screen == Screen::List {
            Ok(())
        } else {
            Err(NavigationError::InvalidTransition {
                from: self.screen,
                action,
            })
        }
    }

    fn go(&mut self, next: Screen) {
        if self.screen != next {
            debug!(from = %self.screen, to = %next, "Navigating");
            self.screen = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;

    #[test]
    fn given_add_screen_when_submitting_valid_input_then_returns_to_list() {
        // Arrange
        let mut nav = Navigator::default();
        nav.open_add().unwrap();

        // Act
        let note = nav.submit("Buy milk", "2% milk").unwrap();

        // Assert
        assert_eq!(nav.screen(), Screen::List);
        assert_eq!(nav.store().list(), vec![note]);
    }

    #[test]
    fn given_add_screen_when_submitting_invalid_input_then_stays_on_add() {
        let mut nav = Navigator::default();
        nav.open_add().unwrap();

        let result = nav.submit("ab", "details");

        assert_eq!(
            result,
            Err(NavigationError::Domain(DomainError::Validation(
                ValidationError::TitleTooShort { len: 2 }
            )))
        );
        assert_eq!(nav.screen(), Screen::Add);
        assert!(nav.store().is_empty());
    }

    #[test]
    fn given_existing_note_when_opening_edit_then_returns_prefill() {
        let mut store = NoteStore::new();
        let note = store.create("Title", "details").unwrap();
        let mut nav = Navigator::new(store);

        let prefill = nav.open_edit(note.id).unwrap();

        assert_eq!(prefill, note);
        assert_eq!(nav.screen(), Screen::Edit(note.id));
    }

    #[test]
    fn given_unknown_id_when_opening_edit_then_stays_on_list() {
        let mut nav = Navigator::default();

        let result = nav.open_edit(NoteId(3));

        assert_eq!(
            result,
            Err(NavigationError::Domain(DomainError::NoteNotFound(NoteId(3))))
        );
        assert_eq!(nav.screen(), Screen::List);
    }

    #[test]
    fn given_edit_screen_when_submitting_invalid_input_then_note_unchanged() {
        let mut store = NoteStore::new();
        let note = store.create("Title", "details").unwrap();
        let mut nav = Navigator::new(store);
        nav.open_edit(note.id).unwrap();

        let result = nav.submit("", "details");

        assert!(result.is_err());
        assert_eq!(nav.screen(), Screen::Edit(note.id));
        assert_eq!(nav.store().get(note.id).unwrap(), note);
    }

    #[test]
    fn given_edit_screen_when_going_back_then_nothing_is_saved() {
        let mut store = NoteStore::new();
        let note = store.create("Title", "details").unwrap();
        let mut nav = Navigator::new(store);
        nav.open_edit(note.id).unwrap();

        nav.back();

        assert_eq!(nav.screen(), Screen::List);
        assert_eq!(nav.store().get(note.id).unwrap(), note);
    }

    #[test]
    fn given_form_screen_when_toggling_then_rejects_transition() {
        let mut store = NoteStore::new();
        let note = store.create("Title", "details").unwrap();
        let mut nav = Navigator::new(store);
        nav.open_add().unwrap();

        let result = nav.toggle(note.id);

        assert!(matches!(
            result,
            Err(NavigationError::InvalidTransition { from: Screen::Add, .. })
        ));
        assert!(!nav.store().get(note.id).unwrap().done);
    }

    #[test]
    fn given_list_screen_when_submitting_then_rejects_transition() {
        let mut nav = Navigator::default();

        let result = nav.submit("Title", "details");

        assert!(matches!(
            result,
            Err(NavigationError::InvalidTransition { from: Screen::List, .. })
        ));
        assert!(nav.store().is_empty());
    }
}
