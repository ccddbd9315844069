// src/infrastructure/mod.rs
pub mod config;

pub use config::{Config, ShellConfig};
