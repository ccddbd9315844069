// src/constants.rs
//
// Content limits and shell defaults used throughout the crate.
// Lengths are counted in chars of the trimmed input.

/// Shortest accepted note title.
///
/// Used in: `domain/validation.rs`
pub const TITLE_MIN_CHARS: usize = 3;

/// Longest accepted note title.
///
/// Used in: `domain/validation.rs`
pub const TITLE_MAX_CHARS: usize = 50;

/// Longest accepted note details text. The lower bound is "non-empty".
///
/// Used in: `domain/validation.rs`
pub const SUBTITLE_MAX_CHARS: usize = 120;

/// Prompt printed by the interactive shell unless configured otherwise.
///
/// Used in: `infrastructure/config.rs`
pub const DEFAULT_PROMPT: &str = "todo> ";

/// Directory name below the platform config dir holding `config.toml`.
///
/// Used in: `infrastructure/config.rs`
pub const CONFIG_DIR_NAME: &str = "todonotes";
