//! Layers App - drives the layer stores from JSON commands
//!
//! Reads one [`commands::LayerCommand`] per line from stdin and writes one
//! JSON snapshot per line to stdout. The first argument, if given, is the
//! directory holding `settings.json`.

mod commands;
mod demo;
mod state;

use anyhow::Context;
use commands::{dispatch, snapshot, LayerCommand};
use layer_store::SettingsManager;
use state::AppState;
use std::io::{BufRead, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays line-delimited JSON
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting layers app");

    let settings = match std::env::args().nth(1) {
        Some(dir) => {
            let mut manager = SettingsManager::new(&dir);
            manager
                .load_sync()
                .with_context(|| format!("reading settings from {}", dir))?
                .clone()
        }
        None => Default::default(),
    };

    let mut state = AppState::new(settings);
    state
        .load_document(demo::demo_pages())
        .context("loading demo document")?;

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", serde_json::to_string(&snapshot(&state))?)?;

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match serde_json::from_str::<LayerCommand>(&line) {
            Ok(command) => command,
            Err(e) => {
                tracing::warn!("Skipping malformed command: {}", e);
                continue;
            }
        };

        let response = dispatch(&mut state, command);
        writeln!(stdout, "{}", serde_json::to_string(&response)?)?;
        stdout.flush()?;
    }

    tracing::info!("Input closed, exiting");
    Ok(())
}
