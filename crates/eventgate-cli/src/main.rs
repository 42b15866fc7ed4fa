//! Eventgate CLI - runs the event handler locally against JSON event files.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, ArgGroup, Parser};
use tracing_subscriber::EnvFilter;

mod inputs;
mod output;
mod runner;

#[derive(Parser, Debug)]
#[command(name = "eventgate", version)]
#[command(about = "Run the event handler locally against JSON event files")]
#[command(group(ArgGroup::new("input").required(true).args(["event", "all"])))]
struct Cli {
    /// Path to a single event JSON file
    #[arg(long, value_name = "PATH")]
    event: Option<PathBuf>,
    /// Run every *.json file in the events directory
    #[arg(long)]
    all: bool,
    /// Directory scanned by --all
    #[arg(long, value_name = "DIR", env = "EVENTGATE_EVENTS_DIR", default_value = "events")]
    events_dir: PathBuf,
    /// Value of `source` in the handler context
    #[arg(long, default_value = "local")]
    source: String,
    /// Exit with status 1 if any event is rejected or unreadable
    #[arg(long)]
    strict: bool,
    /// Enable verbose logging. Repeat for more (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = if cli.all {
        inputs::discover(&cli.events_dir)
    } else {
        Ok(cli.event.into_iter().collect())
    };
    let paths = match paths {
        Ok(paths) => paths,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let context = runner::local_context(&cli.source);
    let mut stdout = std::io::stdout().lock();
    match runner::run(&paths, &context, &mut stdout) {
        Ok(summary) => {
            tracing::info!(
                files = paths.len(),
                accepted = summary.accepted,
                rejected = summary.rejected,
                unreadable = summary.unreadable,
                "run complete"
            );
            if cli.strict && !summary.all_ok() {
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout carries only envelopes.
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
