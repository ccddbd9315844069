use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;
use todonotes::application::{Navigator, Screen};
use todonotes::cli::Shell;
use todonotes::domain::Note;
use todonotes::infrastructure::ShellConfig;

/// Script file written to a temporary directory
#[allow(dead_code)]
pub struct TestScript {
    _temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestScript {
    pub fn new(content: &str) -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        let path = temp_dir.path().join("session.todo");
        std::fs::File::create(&path)
            .context("Failed to create script file")?
            .write_all(content.as_bytes())
            .context("Failed to write script file")?;
        Ok(Self {
            _temp_dir: temp_dir,
            path,
        })
    }
}

/// Final state of a scripted shell session
#[allow(dead_code)]
pub struct SessionOutcome {
    pub output: String,
    pub notes: Vec<Note>,
    pub screen: Screen,
}

/// Runs `script` through a fresh shell with an in-memory output buffer
#[allow(dead_code)]
pub fn run_script(script: &str, config: &ShellConfig) -> Result<SessionOutcome> {
    let mut shell = Shell::new(Navigator::default(), config, Vec::new());
    shell.run_script(script.as_bytes())?;
    let notes = shell.navigator().store().list();
    let screen = shell.navigator().screen();
    let output = String::from_utf8(shell.into_output()).context("Shell wrote invalid UTF-8")?;
    Ok(SessionOutcome {
        output,
        notes,
        screen,
    })
}
