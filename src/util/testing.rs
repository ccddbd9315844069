// src/util/testing.rs
//! Test-only helpers: logging setup, seeded stores and event recording.
//!
//! Public so integration tests under `tests/` can use them. Not meant for
//! application code; `seeded_store` panics on invalid seed data.

use anyhow::Result;
use std::cell::RefCell;
use std::env;
use std::rc::Rc;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::{NoteStore, StoreEvent, SubscriptionId};
use crate::domain::Note;

/// Builds a store pre-filled through the regular `create` path.
///
/// # Examples
///
/// ```
/// use todonotes::util::testing::seeded_store;
///
/// let (store, notes) = seeded_store(&[("Buy milk", "2% milk"), ("Call mom", "Sunday")]);
/// assert_eq!(store.len(), 2);
/// assert_eq!(notes[1].id.0, 1);
/// ```
///
/// # Panics
/// If a seed entry fails validation.
pub fn seeded_store(entries: &[(&str, &str)]) -> (NoteStore, Vec<Note>) {
    let mut store = NoteStore::new();
    let notes = entries
        .iter()
        .map(|(title, subtitle)| {
            store
                .create(title, subtitle)
                .unwrap_or_else(|e| panic!("invalid seed note {title:?}: {e}"))
        })
        .collect();
    (store, notes)
}

/// Observer that keeps every event it receives, for assertions.
#[derive(Debug, Clone, Default)]
pub struct EventRecorder {
    events: Rc<RefCell<Vec<StoreEvent>>>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes a recording observer that shares this recorder's buffer.
    pub fn attach(&self, store: &mut NoteStore) -> SubscriptionId {
        let sink = Rc::clone(&self.events);
        store.subscribe(move |event: &StoreEvent| sink.borrow_mut().push(event.clone()))
    }

    pub fn events(&self) -> Vec<StoreEvent> {
        self.events.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["regex", "mio"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // Set up the subscriber with environment filter
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    // Build and set the subscriber
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NoteId;

    #[ctor::ctor]
    fn init() {
        init_test_setup().expect("Failed to initialize test setup");
    }

    #[test]
    fn given_seed_entries_when_building_store_then_ids_follow_order() {
        let (store, notes) = seeded_store(&[("First", "a"), ("Second", "b"), ("Third", "c")]);

        let ids: Vec<_> = store.list().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![NoteId(0), NoteId(1), NoteId(2)]);
        assert_eq!(store.list(), notes);
    }

    #[test]
    #[should_panic(expected = "invalid seed note")]
    fn given_invalid_seed_when_building_store_then_panics() {
        let _ = seeded_store(&[("ab", "details")]);
    }

    #[test]
    fn given_attached_recorder_when_creating_then_records_event() {
        let mut store = NoteStore::new();
        let recorder = EventRecorder::new();
        recorder.attach(&mut store);

        let note = store.create("Title", "details").unwrap();

        assert_eq!(recorder.events(), vec![StoreEvent::Created(note)]);
    }
}
