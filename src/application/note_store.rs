// src/application/note_store.rs
use crate::application::observer::{NoteObserver, StoreEvent, SubscriptionId};
use crate::domain::{validate, DomainError, Note, NoteId, NoteNotFound, ValidationError};
use std::fmt;
use tracing::{debug, info, instrument};

/// Authoritative, ordered, in-memory collection of notes.
///
/// # Invariants
/// - Notes iterate in insertion order.
/// - Ids come from a session counter and are never reused.
/// - Every stored note passed `validate` with its current title/details.
/// - Callers only ever see clones; fields change through `update` and
///   `toggle` alone.
#[derive(Default)]
pub struct NoteStore {
    notes: Vec<Note>,
    next_id: u64,
    observers: Vec<(SubscriptionId, Box<dyn NoteObserver>)>,
    next_subscription: u64,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all notes in insertion order.
    ///
    /// The returned vector does not track later mutations; re-read after
    /// each change.
    pub fn list(&self) -> Vec<Note> {
        self.notes.clone()
    }

    pub fn get(&self, id: NoteId) -> Result<Note, NoteNotFound> {
        self.position(id)
            .map(|index| self.notes[index].clone())
            .ok_or(NoteNotFound(id))
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Validates and appends a new open note.
    ///
    /// On failure the store is untouched and the first violated rule is
    /// returned.
    #[instrument(level = "debug", skip(self))]
    pub fn create(&mut self, title: &str, subtitle: &str) -> Result<Note, ValidationError> {
        validate(title, subtitle)?;

        let id = NoteId(self.next_id);
        self.next_id += 1;

        let note = Note::new(id, title.trim().to_string(), subtitle.trim().to_string());
        self.notes.push(note.clone());
        info!(note_id = %id, "Created note");

        self.notify(StoreEvent::Created(note.clone()));
        Ok(note)
    }

    /// Replaces title and details of an existing note.
    ///
    /// Lookup happens before validation, so an unknown id reports
    /// `NoteNotFound` even when the content is also invalid.
    #[instrument(level = "debug", skip(self))]
    pub fn update(&mut self, id: NoteId, title: &str, subtitle: &str) -> Result<Note, DomainError> {
        let index = self.position(id).ok_or(DomainError::NoteNotFound(id))?;
        validate(title, subtitle)?;

        let note = &mut self.notes[index];
        note.title = title.trim().to_string();
        note.subtitle = subtitle.trim().to_string();
        let updated = note.clone();
        info!(note_id = %id, "Updated note");

        self.notify(StoreEvent::Updated(updated.clone()));
        Ok(updated)
    }

    /// Flips the completion flag.
    #[instrument(level = "debug", skip(self))]
    pub fn toggle(&mut self, id: NoteId) -> Result<Note, NoteNotFound> {
        let index = self.position(id).ok_or(NoteNotFound(id))?;

        let note = &mut self.notes[index];
        note.done = !note.done;
        let toggled = note.clone();
        debug!(note_id = %id, done = toggled.done, "Toggled note");

        self.notify(StoreEvent::Toggled(toggled.clone()));
        Ok(toggled)
    }

    /// Removes one note and returns it. Remaining notes keep ids and order.
    #[instrument(level = "debug", skip(self))]
    pub fn delete(&mut self, id: NoteId) -> Result<Note, NoteNotFound> {
        let index = self.position(id).ok_or_else(|| {
            debug!(note_id = %id, "Note not found for deletion");
            NoteNotFound(id)
        })?;

        let removed = self.notes.remove(index);
        info!(note_id = %id, "Deleted note");

        self.notify(StoreEvent::Deleted(removed.clone()));
        Ok(removed)
    }

    /// Registers an observer that is called after every successful mutation.
    pub fn subscribe<O>(&mut self, observer: O) -> SubscriptionId
    where
        O: NoteObserver + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        debug!(subscription = id.0, "Observer subscribed");
        id
    }

    /// Returns `false` if the subscription was already removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        before != self.observers.len()
    }

    fn position(&self, id: NoteId) -> Option<usize> {
        self.notes.iter().position(|note| note.id == id)
    }

    fn notify(&mut self, event: StoreEvent) {
        for (_, observer) in self.observers.iter_mut() {
            observer.on_event(&event);
        }
    }
}

impl fmt::Debug for NoteStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NoteStore")
            .field("notes", &self.notes)
            .field("next_id", &self.next_id)
            .field("observers", &self.observers.len())
            .finish()
    }
}
