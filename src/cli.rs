//! CLI argument parsing.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::Deserialize;

/// Preview theme selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeArg {
    /// Show dark and light previews side by side
    #[default]
    Both,
    /// Dark preview only
    Dark,
    /// Light preview only
    Light,
}

/// Terminal preview of chat role gradient colors.
///
/// Without `--interactive`, emits the CSS gradient decoration for one role
/// to stdout (or `--output`). With it, opens the full editor and preview.
#[derive(Parser, Debug)]
#[command(name = "roleprev")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// First gradient stop in hex format (#RRGGBB)
    #[arg(long, value_name = "COLOR", required_unless_present = "interactive")]
    pub color_one: Option<String>,

    /// Second gradient stop; defaults to the first stop
    #[arg(long, value_name = "COLOR")]
    pub color_two: Option<String>,

    /// Role name used for the generated CSS class
    #[arg(short, long)]
    pub name: Option<String>,

    /// Launch the interactive editor and preview
    #[arg(short, long)]
    pub interactive: bool,

    /// Themes shown in the interactive preview
    #[arg(long, value_enum, default_value_t)]
    pub theme: ThemeArg,

    /// Write the generated CSS here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// TOML settings file (preview and palette settings only)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log file path
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log level for the log file (error, warn, info, debug, trace)
    #[arg(long)]
    pub log_level: Option<String>,
}
