// src/ports/json.rs
use crate::domain::Note;
use anyhow::{Context, Result};

/// JSON rendering of list snapshots for scripting. Output only.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonPresenter;

impl JsonPresenter {
    pub fn new() -> Self {
        Self
    }

    pub fn render_list(&self, notes: &[Note]) -> Result<String> {
        serde_json::to_string_pretty(notes).context("Failed to serialize notes to JSON")
    }
}
