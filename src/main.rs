//! shotput CLI
//!
//! Play a game of shot put dice in the terminal.

use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use env_logger::{Builder, Env, Target};

use shotput::error::{Error, Result};
use shotput::report::format_summary;
use shotput::tui::run::run;
use shotput::types::{OutputFormat, SessionConfig};

#[derive(Parser)]
#[command(name = "shotput")]
#[command(about = "Shot put dice game: eight throws, three attempts, don't foul")]
#[command(version)]
struct Cli {
    /// Player name (prompted for when omitted)
    name: Option<String>,

    /// Seed the dice for a reproducible session
    #[arg(long)]
    seed: Option<u64>,

    /// Format of the summary printed when the session ends
    #[arg(long, value_enum, default_value = "human")]
    format: OutputFormatArg,

    /// Write diagnostic logs to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cmd_play(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// SETUP
// ============================================================================

/// Route log records to `path`. Without a log file nothing is installed:
/// stderr belongs to the TUI.
fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = File::create(path).map_err(|source| Error::LogFile {
        path: path.to_path_buf(),
        source,
    })?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .format_target(false)
        .target(Target::Pipe(Box::new(file)))
        .try_init()?;

    Ok(())
}

/// Ask for the player's name on stdin. Blank answers become "Player".
fn prompt_name() -> Result<String> {
    print!("Enter your name: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;

    let name = input.trim();
    if name.is_empty() {
        Ok(SessionConfig::default().player)
    } else {
        Ok(name.to_string())
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_play(cli: Cli) -> Result<()> {
    init_logging(cli.log_file.as_deref())?;

    let player = match cli.name {
        Some(name) if !name.trim().is_empty() => name.trim().to_string(),
        _ => prompt_name()?,
    };

    let config = SessionConfig {
        player,
        seed: cli.seed,
    };

    let summary = run(&config)?;
    print!("{}", format_summary(&summary, cli.format.into())?);

    Ok(())
}
