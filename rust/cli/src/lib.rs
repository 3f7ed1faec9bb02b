//! # staybot CLI Library
//!
//! Command-line front end for the stay-or-fold decision engine. It parses
//! card tokens, resolves configuration, and prints decisions.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line
//! arguments and executes the appropriate subcommand.
//!
//! ```no_run
//! use std::io;
//! let args = ["staybot", "decide", "--hole", "Ah", "Kd", "--board", "Qs", "Jc", "Th"];
//! let code = staybot_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `decide`: Recommend STAY or FOLD for one hand
//! - `demo`: Run the built-in example hands
//! - `eval`: Rank a 5 to 7 card hand
//! - `bench`: Measure sampler throughput
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;
pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod logging;
pub mod ui;

use cli::{Commands, StaybotCli};
use commands::{
    DecideOptions, handle_bench_command, handle_cfg_command, handle_decide_command,
    handle_demo_command, handle_eval_command,
};

pub use error::CliError;

const COMMANDS: &[&str] = &["decide", "demo", "eval", "bench", "cfg"];

/// Main entry point for the CLI application.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["staybot", "eval", "Ah", "Ad", "As", "Ac", "Kh"];
/// let code = staybot_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match StaybotCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return usage_error(e, out, err),
    };

    let result = match cli.cmd {
        Commands::Decide {
            hole,
            board,
            seed,
            budget,
            json,
            log,
        } => handle_decide_command(
            DecideOptions {
                hole,
                board,
                seed,
                budget,
                json,
                log,
            },
            out,
        ),
        Commands::Demo { budget, seed } => handle_demo_command(budget, seed, out, err),
        Commands::Eval { cards } => handle_eval_command(&cards, out),
        Commands::Bench { trials, seed } => handle_bench_command(trials, seed, out),
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn usage_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version should print to stdout and exit 0
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            if write!(out, "{}", e).is_err() {
                return exit_code::ERROR;
            }
            exit_code::SUCCESS
        }
        _ => {
            if writeln!(err, "{}", e).is_err()
                || writeln!(err).is_err()
                || writeln!(err, "Usage: staybot <command> [options]\n").is_err()
                || writeln!(err, "Commands:").is_err()
            {
                return exit_code::ERROR;
            }
            for c in COMMANDS {
                if writeln!(err, "  {}", c).is_err() {
                    return exit_code::ERROR;
                }
            }
            let _ = writeln!(err, "\nFor full help, run: staybot --help");
            exit_code::ERROR
        }
    }
}
