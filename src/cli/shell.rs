// src/cli/shell.rs
use crate::application::{Navigator, Screen, StoreEvent};
use crate::domain::NoteId;
use crate::infrastructure::ShellConfig;
use crate::ports::{JsonPresenter, TextPresenter};
use anyhow::{bail, Context, Result};
use regex::Regex;
use std::io::{BufRead, Write};
use std::sync::LazyLock;
use thiserror::Error;
use tracing::{debug, instrument, trace};

// A double-quoted group (possibly empty) or a run of non-whitespace.
static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]*)"|(\S+)"#).expect("valid token regex"));

const HELP: &str = "\
Commands:
  list [--json]            show all notes
  add                      open the add screen
  edit <id>                open the edit screen for a note
  save <title> <details>   submit the open add/edit screen
  back                     leave the add/edit screen without saving
  toggle <id>              check or uncheck a note
  delete <id>              delete a note
  help                     show this help
  quit                     end the session
Quote arguments containing spaces: save \"Buy milk\" \"2% milk, 1 gal\"
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    List { json: bool },
    Add,
    Edit(NoteId),
    Save { title: String, subtitle: String },
    Back,
    Toggle(NoteId),
    Delete(NoteId),
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown command: {0} (try `help`)")]
    UnknownCommand(String),
    #[error("Missing {argument} for `{command}`")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error("Too many arguments for `{0}`")]
    TooManyArguments(&'static str),
    #[error("Invalid note id: {0}")]
    InvalidId(String),
    #[error("Unterminated or misplaced quote in: {0}")]
    UnterminatedQuote(String),
}

/// Parses one input line. Blank lines and `#` comments yield `None`.
///
/// # Examples
///
/// ```
/// use todonotes::cli::{parse_command, ShellCommand};
///
/// let cmd = parse_command(r#"save "Buy milk" "2% milk""#).unwrap();
/// assert_eq!(
///     cmd,
///     Some(ShellCommand::Save { title: "Buy milk".into(), subtitle: "2% milk".into() })
/// );
/// ```
pub fn parse_command(line: &str) -> Result<Option<ShellCommand>, ParseError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut tokens: Vec<String> = Vec::new();
    for caps in TOKEN_RE.captures_iter(line) {
        match (caps.get(1), caps.get(2)) {
            (Some(quoted), _) => tokens.push(quoted.as_str().to_string()),
            // A bare word must not carry a quote that groups nothing
            (None, Some(word)) if word.as_str().contains('"') => {
                return Err(ParseError::UnterminatedQuote(word.as_str().to_string()))
            }
            (None, Some(word)) => tokens.push(word.as_str().to_string()),
            (None, None) => {}
        }
    }
    let Some((name, rest)) = tokens.split_first() else {
        return Ok(None);
    };

    let command = match name.to_lowercase().as_str() {
        "list" | "ls" => match rest {
            [] => ShellCommand::List { json: false },
            [flag] if flag == "--json" => ShellCommand::List { json: true },
            _ => return Err(ParseError::TooManyArguments("list")),
        },
        "add" | "new" => {
            no_arguments("add", rest)?;
            ShellCommand::Add
        }
        "edit" => ShellCommand::Edit(single_id("edit", rest)?),
        "save" => match rest {
            [title, subtitle] => ShellCommand::Save {
                title: title.clone(),
                subtitle: subtitle.clone(),
            },
            [] => {
                return Err(ParseError::MissingArgument {
                    command: "save",
                    argument: "title",
                })
            }
            [_] => {
                return Err(ParseError::MissingArgument {
                    command: "save",
                    argument: "details",
                })
            }
            _ => return Err(ParseError::TooManyArguments("save")),
        },
        "back" | "cancel" => {
            no_arguments("back", rest)?;
            ShellCommand::Back
        }
        "toggle" | "check" => ShellCommand::Toggle(single_id("toggle", rest)?),
        "delete" | "rm" => ShellCommand::Delete(single_id("delete", rest)?),
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        _ => return Err(ParseError::UnknownCommand(name.clone())),
    };
    Ok(Some(command))
}

fn no_arguments(command: &'static str, rest: &[String]) -> Result<(), ParseError> {
    if rest.is_empty() {
        Ok(())
    } else {
        Err(ParseError::TooManyArguments(command))
    }
}

fn single_id(command: &'static str, rest: &[String]) -> Result<NoteId, ParseError> {
    match rest {
        [] => Err(ParseError::MissingArgument {
            command,
            argument: "note id",
        }),
        [raw] => raw
            .trim_start_matches('#')
            .parse::<u64>()
            .map(NoteId::from)
            .map_err(|_| ParseError::InvalidId(raw.clone())),
        _ => Err(ParseError::TooManyArguments(command)),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Terminal front-end: list, add and edit screens over a `Navigator`.
///
/// Operation errors are written as `error: ...` lines and never end the
/// session. Only I/O failures and, in script mode, unparsable lines do.
pub struct Shell<W: Write> {
    navigator: Navigator,
    text: TextPresenter,
    json: JsonPresenter,
    config: ShellConfig,
    out: W,
}

impl<W: Write> Shell<W> {
    pub fn new(mut navigator: Navigator, config: &ShellConfig, out: W) -> Self {
        navigator
            .store_mut()
            .subscribe(|event: &StoreEvent| trace!(?event, "Store changed"));
        Self {
            navigator,
            text: TextPresenter::with_details_width(config.details_width),
            json: JsonPresenter::new(),
            config: config.clone(),
            out,
        }
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Reads commands until `quit` or end of input, prompting before each.
    pub fn run_interactive<R: BufRead>(&mut self, input: R) -> Result<()> {
        writeln!(self.out, "Type `help` for commands.")?;
        self.print_prompt()?;
        for line in input.lines() {
            let line = line.context("Failed to read from stdin")?;
            match parse_command(&line) {
                Ok(Some(command)) => {
                    if self.execute(command)? == Flow::Quit {
                        return Ok(());
                    }
                }
                Ok(None) => {}
                Err(e) => writeln!(self.out, "error: {e}")?,
            }
            self.print_prompt()?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    /// Executes a script. Stops with an error at the first unparsable line.
    pub fn run_script<R: BufRead>(&mut self, input: R) -> Result<()> {
        for (index, line) in input.lines().enumerate() {
            let line = line.context("Failed to read script")?;
            let command = match parse_command(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => bail!("Line {}: {e}", index + 1),
            };
            if self.execute(command)? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    #[instrument(level = "debug", skip(self))]
    fn execute(&mut self, command: ShellCommand) -> Result<Flow> {
        let result = match command {
            ShellCommand::List { json } => {
                self.print_list(json || self.config.json)?;
                Ok(String::new())
            }
            ShellCommand::Add => self.navigator.open_add().map(|()| {
                "Adding a new note. Use `save <title> <details>` or `back`.\n".to_string()
            }),
            ShellCommand::Edit(id) => self.navigator.open_edit(id).map(|note| {
                format!(
                    "Editing note #{id}:\n{}Use `save <title> <details>` or `back`.\n",
                    self.text.render_note(&note)
                )
            }),
            ShellCommand::Save { title, subtitle } => {
                let submitted = self.navigator.submit(&title, &subtitle);
                if let Ok(note) = &submitted {
                    // Back on the list screen, so show the fresh snapshot.
                    writeln!(self.out, "Saved #{}", note.id)?;
                    self.print_list(self.config.json)?;
                }
                submitted.map(|_| String::new())
            }
            ShellCommand::Back => {
                self.navigator.back();
                self.print_list(self.config.json)?;
                Ok(String::new())
            }
            ShellCommand::Toggle(id) => self.navigator.toggle(id).map(|note| {
                let state = if note.done { "done" } else { "open" };
                format!("Marked #{} as {state}\n", note.id)
            }),
            ShellCommand::Delete(id) => self
                .navigator
                .delete(id)
                .map(|note| format!("Deleted #{} {}\n", note.id, note.title)),
            ShellCommand::Help => {
                write!(self.out, "{HELP}")?;
                Ok(String::new())
            }
            ShellCommand::Quit => return Ok(Flow::Quit),
        };

        match result {
            Ok(message) => write!(self.out, "{message}")?,
            Err(e) => {
                debug!(error = %e, screen = %self.navigator.screen(), "Command rejected");
                writeln!(self.out, "error: {e}")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn print_list(&mut self, json: bool) -> Result<()> {
        let notes = self.navigator.store().list();
        if json {
            let rendered = self.json.render_list(&notes)?;
            writeln!(self.out, "{rendered}")?;
        } else {
            write!(self.out, "{}", self.text.render_list(&notes))?;
        }
        Ok(())
    }

    fn print_prompt(&mut self) -> Result<()> {
        match self.navigator.screen() {
            Screen::List => write!(self.out, "{}", self.config.prompt)?,
            screen => write!(self.out, "[{screen}] {}", self.config.prompt)?,
        }
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_quoted_arguments_when_parsing_save_then_groups_words() {
        let cmd = parse_command(r#"save "Buy milk" "2% milk, 1 gal""#).unwrap();
        assert_eq!(
            cmd,
            Some(ShellCommand::Save {
                title: "Buy milk".to_string(),
                subtitle: "2% milk, 1 gal".to_string(),
            })
        );
    }

    #[test]
    fn given_empty_quotes_when_parsing_save_then_keeps_empty_argument() {
        let cmd = parse_command(r#"save "" details"#).unwrap();
        assert_eq!(
            cmd,
            Some(ShellCommand::Save {
                title: String::new(),
                subtitle: "details".to_string(),
            })
        );
    }

    #[test]
    fn given_blank_or_comment_when_parsing_then_returns_none() {
        assert_eq!(parse_command("   "), Ok(None));
        assert_eq!(parse_command("# setup"), Ok(None));
    }

    #[test]
    fn given_hash_prefixed_id_when_parsing_toggle_then_accepts() {
        assert_eq!(parse_command("toggle #3"), Ok(Some(ShellCommand::Toggle(NoteId(3)))));
        assert_eq!(parse_command("DELETE 0"), Ok(Some(ShellCommand::Delete(NoteId(0)))));
    }

    #[test]
    fn given_bad_arguments_when_parsing_then_reports_reason() {
        assert_eq!(parse_command("frobnicate"), Err(ParseError::UnknownCommand("frobnicate".into())));
        assert_eq!(
            parse_command("edit"),
            Err(ParseError::MissingArgument { command: "edit", argument: "note id" })
        );
        assert_eq!(parse_command("edit -1"), Err(ParseError::InvalidId("-1".into())));
        assert_eq!(
            parse_command("save only-title"),
            Err(ParseError::MissingArgument { command: "save", argument: "details" })
        );
        assert_eq!(parse_command("add now"), Err(ParseError::TooManyArguments("add")));
    }

    #[test]
    fn given_unclosed_quote_when_parsing_then_reports_unterminated_quote() {
        assert_eq!(
            parse_command("save \"unterminated details"),
            Err(ParseError::UnterminatedQuote("\"unterminated".into()))
        );
    }

    #[test]
    fn given_quote_inside_word_when_parsing_then_reports_unterminated_quote() {
        assert_eq!(
            parse_command("save a\"b\" c"),
            Err(ParseError::UnterminatedQuote("a\"b\"".into()))
        );
    }

    #[test]
    fn given_adjacent_quoted_groups_when_parsing_then_keeps_both() {
        assert_eq!(
            parse_command(r#"save "Buy milk""2% milk""#),
            Ok(Some(ShellCommand::Save {
                title: "Buy milk".to_string(),
                subtitle: "2% milk".to_string(),
            }))
        );
    }

    #[test]
    fn given_unclosed_quote_in_session_when_running_then_nothing_is_saved() {
        let mut shell = Shell::new(Navigator::default(), &ShellConfig::default(), Vec::new());

        shell.run_interactive("add\nsave \"Milk details\n".as_bytes()).unwrap();

        let output = String::from_utf8(shell.into_output()).unwrap();
        assert!(output.contains("error: Unterminated or misplaced quote in: \"Milk"));
        assert!(!output.contains("Saved #"));
    }

    #[test]
    fn given_interactive_input_when_running_then_prompts_per_screen() {
        // Arrange
        let mut shell = Shell::new(Navigator::default(), &ShellConfig::default(), Vec::new());
        let input = "add\nsave ab details\nback\nquit\n";

        // Act
        shell.run_interactive(input.as_bytes()).unwrap();

        // Assert
        let output = String::from_utf8(shell.into_output()).unwrap();
        assert!(output.contains("[add] todo> "));
        assert!(output.contains("error: Title is too short (2 chars, minimum 3)"));
        assert!(output.contains("No notes yet"));
    }
}
