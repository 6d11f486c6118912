//! Hot-seat chess in the terminal.
//!
//! Two players share one keyboard: typing a square name clicks it. The board
//! is redrawn after every change and notifications are printed as they are
//! emitted.

mod cli;
mod render;

use std::cell::RefCell;
use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;
use hotseat_core::{GameConfig, GameEvent, TurnEngine};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use cli::{Command, HELP};
use render::{describe, render_board};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML file with board size, placement and first team
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write every emitted event to this file as JSON on exit
    #[arg(short, long)]
    record: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `hotseat_core=info` (overrides RUST_LOG)
    #[arg(long)]
    log: Option<String>,
}

fn main() {
    let args = Args::parse();

    let filter = match &args.log {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(args) {
        error!("{e:#}");
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading game config from {}", path.display()))?,
        None => GameConfig::default(),
    };
    let mut engine = TurnEngine::new(config).context("setting up the board")?;

    let transcript = Rc::new(RefCell::new(Vec::new()));
    if args.record.is_some() {
        let sink = Rc::clone(&transcript);
        engine.subscribe(move |ev: &GameEvent| sink.borrow_mut().push(ev.clone()));
    }

    info!(first = %engine.state().current_team(), "game started");
    play(&mut engine)?;

    if let Some(path) = &args.record {
        write_transcript(path, &transcript.borrow())?;
        println!("Transcript written to {}", path.display());
    }
    Ok(())
}

/// Reads commands until `quit` or end of input.
fn play(engine: &mut TurnEngine) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("{}", render_board(engine.board(), engine.selection()));
    prompt(engine, &mut stdout)?;

    for line in stdin.lock().lines() {
        let line = line.context("reading input")?;
        let Some(cmd) = Command::parse(&line) else {
            prompt(engine, &mut stdout)?;
            continue;
        };

        match cmd {
            Command::Quit => break,
            Command::Help => println!("{HELP}"),
            Command::Show => println!("{}", render_board(engine.board(), engine.selection())),
            Command::Moves => {
                let moves = engine.selection().moves();
                if moves.is_empty() {
                    println!("No moves to show; select a piece first");
                }
                for mv in moves {
                    println!("  {mv}");
                }
            }
            Command::Deselect => {
                engine.deselect();
                println!("{}", render_board(engine.board(), engine.selection()));
            }
            Command::Reset => {
                let events = engine.reset().context("restarting the game")?;
                report(engine, &events);
            }
            Command::Click(at) => {
                if !engine.board().contains(at) {
                    println!("{at} is not on this board");
                } else if engine.state().is_game_over() {
                    println!("The game is over. Type `replay` or `quit`.");
                } else {
                    let events = engine.click_square(at);
                    report(engine, &events);
                }
            }
            Command::Unknown(word) => println!("Unknown command `{word}`, type `help`"),
        }
        prompt(engine, &mut stdout)?;
    }
    Ok(())
}

fn report(engine: &TurnEngine, events: &[GameEvent]) {
    for line in events.iter().filter_map(describe) {
        println!("{line}");
    }
    if !events.is_empty() {
        println!("{}", render_board(engine.board(), engine.selection()));
    }
}

fn prompt(engine: &TurnEngine, stdout: &mut io::Stdout) -> Result<()> {
    let label = match engine.state().winner() {
        Some(winner) => format!("{winner} won"),
        None => format!("{} to move", engine.state().current_team()),
    };
    write!(stdout, "{label}> ")?;
    stdout.flush()?;
    Ok(())
}

fn write_transcript(path: &Path, events: &[GameEvent]) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("creating transcript {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, events).context("writing transcript")?;
    writer.flush()?;
    Ok(())
}
