// src/application/mod.rs
pub mod navigator;
pub mod note_store;
pub mod observer;

pub use navigator::{NavigationError, Navigator, Screen};
pub use note_store::NoteStore;
pub use observer::{NoteObserver, StoreEvent, SubscriptionId};
