// src/ports/text.rs
use crate::domain::Note;
use crate::util::text::truncate_chars;
use tracing::instrument;

/// Plain-text rendering of the list screen and of single notes.
#[derive(Debug, Clone)]
pub struct TextPresenter {
    details_width: Option<usize>,
}

impl TextPresenter {
    pub fn new() -> Self {
        Self {
            details_width: None,
        }
    }

    /// Truncates details on the list screen to `width` chars (`0` disables).
    pub fn with_details_width(width: usize) -> Self {
        Self {
            details_width: (width > 0).then_some(width),
        }
    }

    /// One line per note: `[x] #id title: details`, in the given order.
    #[instrument(level = "trace", skip(notes), fields(count = notes.len()))]
    pub fn render_list(&self, notes: &[Note]) -> String {
        if notes.is_empty() {
            return "No notes yet. Use `add` to create one.\n".to_string();
        }

        notes
            .iter()
            .map(|note| {
                let details = match self.details_width {
                    Some(width) => truncate_chars(&note.subtitle, width),
                    None => note.subtitle.clone(),
                };
                format!("{} #{} {}: {}\n", checkbox(note), note.id, note.title, details)
            })
            .collect()
    }

    /// Full, untruncated view of one note, used to prefill the edit form.
    pub fn render_note(&self, note: &Note) -> String {
        format!(
            "{} #{} {}\n    {}\n",
            checkbox(note),
            note.id,
            note.title,
            note.subtitle
        )
    }
}

impl Default for TextPresenter {
    fn default() -> Self {
        Self::new()
    }
}

fn checkbox(note: &Note) -> &'static str {
    if note.done {
        "[x]"
    } else {
        "[ ]"
    }
}
