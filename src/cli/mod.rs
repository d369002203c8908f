//! Command-line interface for nn-train
//!
//! Declares the recognized training flags, resolves them into a
//! [`RunConfiguration`], and dispatches to the selected execution mode.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod train;

use crate::config::{Mode, RunConfiguration};

/// Launch neural-network training runs
#[derive(Parser)]
#[command(name = "nn-train")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Execution mode. train: performs training and validation
    #[arg(short, long, value_enum, default_value_t = Mode::Train)]
    mode: Mode,

    /// The batch size
    #[arg(short, long, value_name = "N", default_value_t = 10, allow_negative_numbers = true)]
    batch_size: i64,

    /// Number of training epochs
    #[arg(long, value_name = "N", default_value_t = 20, allow_negative_numbers = true)]
    epochs: i64,

    /// The learning rate (the legacy `-lr` spelling is also accepted)
    #[arg(
        short = 'l',
        long,
        value_name = "RATE",
        default_value_t = 0.001,
        allow_negative_numbers = true
    )]
    learning_rate: f64,

    /// Number of subprocesses to use for data loading
    #[arg(long, value_name = "N", default_value_t = 4, allow_negative_numbers = true)]
    workers: i64,

    /// Device to use for computation, e.g. 'cuda' or 'cpu'
    #[arg(long, value_name = "DEVICE", default_value = "cuda")]
    device: String,

    /// Generate a shell completion script on stdout and exit
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> RunConfiguration {
        RunConfiguration {
            mode: self.mode,
            batch_size: self.batch_size,
            epochs: self.epochs,
            learning_rate: self.learning_rate,
            workers: self.workers,
            device: self.device,
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse_from(normalize_legacy_flags(std::env::args()));

    // Wire verbose flag to the tracing log level.
    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
        return Ok(());
    }

    let config = cli.into_config();
    match config.mode {
        Mode::Train => train::run(config),
    }
}

/// Rewrite the two-character `-lr` option to its long form before clap sees
/// the argument vector. clap short options are single characters; `-lr` is
/// kept for compatibility with the established invocation syntax.
fn normalize_legacy_flags(args: impl IntoIterator<Item = String>) -> Vec<String> {
    args.into_iter()
        .map(|arg| {
            if arg == "-lr" {
                "--learning-rate".to_string()
            } else if let Some(rest) = arg.strip_prefix("-lr=") {
                format!("--learning-rate={rest}")
            } else {
                arg
            }
        })
        .collect()
}
