//! CLI entry point for wooper.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};
use wooper_app::{Outcome, ProjectConfig, TaskService, TaskStore};
use wooper_store_file::FileStore;

mod view;

/// Chatty task list for to-dos, deadlines and events.
#[derive(Parser, Debug)]
#[command(
    name = "wooper",
    version,
    about = "wooper: keep to-dos, deadlines and events in a local JSON file"
)]
struct Cli {
    /// Project directory holding `.wooper/config.toml` (defaults to current).
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Save file to use instead of the configured one.
    #[arg(long)]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a single command line, e.g. `wooper exec todo read book`.
    Exec {
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        line: Vec<String>,
    },
}

/// Whether the read loop should keep going after a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

fn main() -> Result<()> {
    let Cli { dir, data_file, cmd } = Cli::parse();
    install_tracing();

    let workdir = dir.unwrap_or_else(|| PathBuf::from("."));
    let store = FileStore::new(save_path(&workdir, data_file)?);
    debug!(path = %store.path().display(), "Using save file");
    let mut service = TaskService::open(store)?;

    let mut out = io::stdout().lock();
    match cmd {
        Some(Command::Exec { line }) => reply(&mut service, &line.join(" "), &mut out).map(|_| ()),
        None => run_session(&mut service, io::stdin().lock(), &mut out),
    }
}

fn save_path(workdir: &Path, data_file: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = data_file {
        return Ok(path);
    }
    let config = ProjectConfig::from_workdir(workdir)?;
    Ok(config.storage.resolve(workdir))
}

/// Greet, then answer every input line until `bye` or end of input.
fn run_session<S: TaskStore>(
    service: &mut TaskService<S>,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    writeln!(out, "{}", view::GREETING)?;
    for line in input.lines() {
        let line = line.context("failed to read input")?;
        if reply(service, &line, out)? == Flow::Stop {
            break;
        }
    }
    Ok(())
}

/// Execute one line and print its reply. Rejected input is reported and the
/// session goes on; storage failures end it.
fn reply<S: TaskStore>(service: &mut TaskService<S>, line: &str, out: &mut impl Write) -> Result<Flow> {
    match service.execute(line) {
        Ok(outcome) => {
            writeln!(out, "{}", view::render(&outcome))?;
            Ok(if outcome == Outcome::Exit {
                Flow::Stop
            } else {
                Flow::Continue
            })
        }
        Err(err) if err.is_recoverable() => {
            writeln!(out, "{}", view::render_error(&err))?;
            Ok(Flow::Continue)
        }
        Err(err) => Err(err.into()),
    }
}

fn install_tracing() {
    // RUST_LOG overrides the default level. Output goes to stderr, away from replies.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_span_events(FmtSpan::NONE)
        .with_writer(io::stderr)
        .compact()
        .try_init();
}
