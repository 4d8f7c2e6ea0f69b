//! Scant CLI - A command-line front end for the scanc scanner.
//!
//! This is the main entry point for the scant CLI application.
//! It uses clap for argument parsing and dispatches to appropriate
//! command handlers based on user input.

mod commands;
mod config;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    check::CheckCommand,
    common::{Input, OutputFormat},
    run_check, run_tokens,
    tokens::TokensCommand,
    traits::CommandDescription,
    CheckArgs, TokensArgs,
};
use config::Config;
use error::{Result, ScantError};

/// Scant - Scan source files into classified tokens
#[derive(Parser, Debug)]
#[command(name = "scant")]
#[command(author = "Scanc Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scan source files into classified tokens", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "SCANT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "SCANT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "SCANT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the scant CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = TokensCommand::description(), long_about = TokensCommand::help())]
    Tokens(TokensCli),

    #[command(about = CheckCommand::description(), long_about = CheckCommand::help())]
    Check(CheckCli),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCli {
    /// Source file, or `-` for standard input
    file: PathBuf,

    /// Output format (default: from config, else text)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Print the span of every token
    #[arg(short, long)]
    spans: bool,

    /// Treat newlines as layout
    #[arg(long)]
    fold_newlines: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCli {
    /// Source file, or `-` for standard input
    file: PathBuf,

    /// Treat newlines as layout
    #[arg(long)]
    fold_newlines: bool,
}

/// Main entry point for the scant CLI.
///
/// Exits with status 1 when scanning fails and 2 for any other error.
fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        // already reported as a diagnostic
        Err(ScantError::Lex(_)) => ExitCode::from(1),
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::from(2)
        },
    }
}

/// Load configuration, initialize logging and execute the command.
fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let verbose = cli.verbose || config.verbose;

    init_logging(verbose, cli.no_color)?;

    execute_command(cli.command, verbose, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so that token listings on stdout stay clean.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| ScantError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, verbose: bool, config: Config) -> Result<()> {
    match command {
        Commands::Tokens(args) => execute_tokens(args, config),
        Commands::Check(args) => execute_check(args, verbose, config),
    }
}

/// Execute the tokens command.
fn execute_tokens(args: TokensCli, config: Config) -> Result<()> {
    let tokens_args = TokensArgs {
        input: Input::from(args.file),
        format: args.format.unwrap_or(config.output.format),
        show_spans: args.spans || config.output.show_spans,
        scanner: config.scanner.to_scanner_config(args.fold_newlines),
    };
    run_tokens(tokens_args)
}

/// Execute the check command.
fn execute_check(args: CheckCli, verbose: bool, config: Config) -> Result<()> {
    let check_args = CheckArgs {
        input: Input::from(args.file),
        verbose,
        scanner: config.scanner.to_scanner_config(args.fold_newlines),
    };
    run_check(check_args)
}
