use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod command;
mod draw;
mod error;
mod report;
mod session;
mod store;

use session::Session;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Convex polygon calculator driven by a line-oriented command language")]
struct Cmd {
    /// Decimal places used for real-valued responses
    #[arg(long, default_value_t = 3)]
    precision: usize,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Execute commands (stdin unless --script is given), one response line each
    Run {
        #[arg(long)]
        script: Option<PathBuf>,
    },
    /// Print a JSON summary of every polygon stored in a file
    Report {
        #[arg(long)]
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    // stdout carries protocol responses; logs go to stderr.
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run { script } => run(script, cmd.precision),
        Action::Report { input } => report(input),
    }
}

fn run(script: Option<PathBuf>, precision: usize) -> Result<()> {
    tracing::info!(script = ?script, precision, "run");
    let mut session = Session::new(precision);
    let stdout = io::stdout().lock();
    match script {
        Some(path) => {
            let file =
                File::open(&path).with_context(|| format!("opening {}", path.display()))?;
            session::run(&mut session, BufReader::new(file), stdout)
        }
        None => session::run(&mut session, io::stdin().lock(), stdout),
    }
}

fn report(input: PathBuf) -> Result<()> {
    tracing::info!(input = %input.display(), "report");
    let doc = report::report(&input)?;
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
