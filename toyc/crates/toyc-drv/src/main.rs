//! toyc - lexical scanner for the toy language.
//!
//! Prints the token stream of a source file to stdout and any lexical
//! diagnostics to stderr. Exits with status 1 if the file cannot be read or
//! any lexical error is reported.

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use toyc_drv::{Config, DriverError, OutputFormat, Result, Session, StopPolicy};

/// toyc - scan a toy-language source file into tokens
#[derive(Parser, Debug)]
#[command(name = "toyc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lexical scanner for the toy language", long_about = None)]
struct Cli {
    /// Source file to scan
    file: PathBuf,

    /// Enable verbose output
    #[arg(short, long, env = "TOYC_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "TOYC_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, env = "TOYC_NO_COLOR")]
    no_color: bool,

    /// Token output format (default: from config)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Keep scanning after a lexical error
    #[arg(short, long)]
    keep_going: bool,
}

/// Settings after merging the configuration file with the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Settings {
    verbose: bool,
    color: bool,
    format: OutputFormat,
    policy: StopPolicy,
}

impl Settings {
    fn resolve(cli: &Cli, config: &Config) -> Self {
        Self {
            verbose: cli.verbose || config.verbose,
            color: !cli.no_color && config.output.color,
            format: cli.format.unwrap_or(config.output.format),
            policy: if cli.keep_going {
                StopPolicy::Exhaust
            } else {
                config.scan.stop_policy()
            },
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load(cli.config.as_deref())
        .context("could not load configuration")?;
    let settings = Settings::resolve(&cli, &config);

    init_logging(settings.verbose, !settings.color)?;
    debug!(config = ?config, settings = ?settings, "resolved settings");

    let session = Session {
        path: cli.file,
        format: settings.format,
        policy: settings.policy,
    };
    session.run(&mut io::stdout().lock(), &mut io::stderr().lock())?;
    Ok(())
}

/// Initialize the logging system.
///
/// Logs go to stderr so they never mix with the token stream. `RUST_LOG`
/// takes precedence over the verbosity flag.
///
/// # Arguments
/// * `verbose` - Whether to enable debug logging
/// * `no_color` - Whether to disable colored output
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| DriverError::Logging(e.to_string()))
}
