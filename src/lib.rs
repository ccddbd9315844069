// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use std::fs::File;
use std::io::{self, BufReader};
use anyhow::{Context, Result};
use application::Navigator;
use cli::Shell;
use infrastructure::Config;
use tracing::{debug, info};
use crate::cli::args::{Args, Command};

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting todonotes with arguments");

    let config = Config::load(args.config.as_deref())?;
    debug!(?config, "Resolved config");

    // State lives only for this process
    let navigator = Navigator::default();
    let stdout = io::stdout();
    let mut shell = Shell::new(navigator, &config.shell, stdout.lock());

    match args.command.unwrap_or(Command::Shell) {
        Command::Shell => {
            info!("Starting interactive shell");
            shell.run_interactive(io::stdin().lock())
        }
        Command::Run { file } => {
            info!(?file, "Running script");
            let script = File::open(&file)
                .with_context(|| format!("Failed to open script: {}", file.display()))?;
            shell.run_script(BufReader::new(script))
        }
    }
}
