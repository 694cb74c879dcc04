//! Tic-tac-toe - command-line driver.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use serde::Serialize;
use std::path::Path;
use std::time::Instant;
use strictly_tictactoe::{
    Controller, Event, GameConfig, Position, Snapshot, Step, View, parse_script,
};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = GameConfig::load_or_default(&cli.config)?;
    if let Some(start) = cli.start {
        info!(%start, "Overriding starting mark");
        config = config.with_starting_mark(start);
    }

    match cli.command {
        Command::Play { moves, json } => run_play(&config, &moves, json),
        Command::Replay { script, json } => run_replay(&config, &script, json),
        Command::Config => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}

/// Click each listed cell in turn.
#[instrument(skip(config))]
fn run_play(config: &GameConfig, moves: &[String], json: bool) -> Result<()> {
    let mut controller = Controller::new(config);
    let now = Instant::now();

    for raw in moves {
        let pos = Position::from_label_or_number(raw)
            .with_context(|| format!("Unknown cell '{}'", raw))?;
        let handled = controller.handle(&Event::CellClicked(pos), now);
        debug!(?handled, %pos, "Move handled");
    }

    report(&controller, now, json)
}

/// Replay a script file against a fresh controller.
#[instrument(skip(config, script), fields(script_path = %script.display()))]
fn run_replay(config: &GameConfig, script: &Path, json: bool) -> Result<()> {
    let source = std::fs::read_to_string(script)
        .with_context(|| format!("Failed to read script {}", script.display()))?;
    let steps = parse_script(&source)?;
    info!(steps = steps.len(), "Script parsed");

    let mut controller = Controller::new(config);
    let mut clock = Instant::now();
    for step in steps {
        match step {
            Step::Event(event) => {
                controller.handle(&event, clock);
            }
            Step::Wait(duration) => clock += duration,
        }
    }

    report(&controller, clock, json)
}

#[derive(Serialize)]
struct Report {
    view: View,
    snapshot: Snapshot,
}

fn report(controller: &Controller, now: Instant, json: bool) -> Result<()> {
    let view = controller.view(now);
    let engine = controller.engine();

    if json {
        let report = Report {
            view,
            snapshot: engine.snapshot(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", engine.board());
        println!();
        println!("{}", view.status);
        println!("{}", view.moves);
        println!("{}", view.swap_label);
        println!("Outcome: {}", view.outcome);
    }
    Ok(())
}
