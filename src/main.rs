//! CLI entry point for roleprev.

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr, eyre};

use role_preview::cli::Cli;
use role_preview::config::Settings;
use role_preview::css;
use role_preview::gradient::{Decoration, parse_color};
use role_preview::logging::init_logging;
use role_preview::tui;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    // One-shot runs stay silent unless a log file was asked for; the TUI
    // always logs to the file since it owns the terminal
    let _guard = if cli.interactive || cli.log_file.is_some() {
        Some(init_logging(cli.log_file.as_deref(), cli.log_level.as_deref()))
    } else {
        None
    };

    let settings = match cli.config.as_ref() {
        Some(path) => Settings::load(path)
            .map_err(|e| eyre!("Failed to load settings from {}: {}", path.display(), e))?,
        None => Settings::default(),
    };

    // Launch TUI if --interactive flag is set
    if cli.interactive {
        return tui::run(&cli, settings);
    }

    // One-shot mode: emit the CSS decoration for a single role
    let color_one = cli
        .color_one
        .clone()
        .ok_or_else(|| eyre!("First gradient stop is required"))?;
    let color_two = cli.color_two.clone().unwrap_or_else(|| color_one.clone());

    // Colors are never rejected, but an unparseable stop is worth a warning
    for (flag, value) in [("--color-one", &color_one), ("--color-two", &color_two)] {
        if let Err(e) = parse_color(value) {
            eprintln!("Warning: {flag}: {e}; emitting as-is");
        }
    }

    let decoration = Decoration::new(color_one, color_two);
    let stylesheet = match cli.name.as_deref() {
        Some(name) => css::rule_named(name, &decoration),
        None => format!("{}\n", decoration.css()),
    };

    if let Some(ref path) = cli.output {
        std::fs::write(path, &stylesheet)
            .wrap_err_with(|| format!("Failed to write to {}", path.display()))?;
        eprintln!("Wrote stylesheet to {}", path.display());
    } else {
        print!("{stylesheet}");
    }

    Ok(())
}
