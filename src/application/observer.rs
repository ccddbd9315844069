// src/application/observer.rs
use crate::domain::Note;

/// Change notification emitted by `NoteStore` after a successful mutation.
///
/// Every variant carries a snapshot of the affected note as it is after the
/// change (`Deleted` carries the removed note).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    Created(Note),
    Updated(Note),
    Toggled(Note),
    Deleted(Note),
}

impl StoreEvent {
    pub fn note(&self) -> &Note {
        match self {
            Self::Created(note) | Self::Updated(note) | Self::Toggled(note) | Self::Deleted(note) => {
                note
            }
        }
    }
}

/// Subscriber interface for live list updates.
///
/// Closures taking `&StoreEvent` implement this trait, so
/// `store.subscribe(|event: &StoreEvent| ...)` works directly.
pub trait NoteObserver {
    fn on_event(&mut self, event: &StoreEvent);
}

impl<F> NoteObserver for F
where
    F: FnMut(&StoreEvent),
{
    fn on_event(&mut self, event: &StoreEvent) {
        self(event)
    }
}

/// Handle returned by `NoteStore::subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);
