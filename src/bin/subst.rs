//! Command-line interface for subst
//! Applies the substitution rules of a script file to standard input and writes the
//! result to standard output.
//!
//! Usage:
//!   subst `<replacement-rules-file>` < input > output
//!
//! Any error is reported on stderr as `ERROR: <message>` and exits with status 1.
//! Diagnostics logging is controlled by the `SUBST_LOG` filter (default `warn`).

use clap::{value_parser, Arg, Command};
use std::ffi::OsString;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use subst::subst::{process, RuleSet, SubstError};
use tracing_subscriber::EnvFilter;

const PROGRAM: &str = "subst";
const LOG_ENV: &str = "SUBST_LOG";

fn main() {
    init_logging();

    if let Err(e) = run(std::env::args_os()) {
        eprintln!("ERROR: {}", e);
        std::process::exit(1);
    }
}

fn command() -> Command {
    Command::new(PROGRAM)
        .about("Apply regular-expression substitution rules to standard input")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("rules")
                .help("Path to the replacement rules file")
                .required(true)
                .index(1)
                .value_parser(value_parser!(PathBuf)),
        )
}

fn run(args: impl IntoIterator<Item = OsString>) -> Result<(), SubstError> {
    let usage = || SubstError::Usage(PROGRAM.to_string());

    let matches = command().try_get_matches_from(args).map_err(|_| usage())?;
    let path = matches.get_one::<PathBuf>("rules").ok_or_else(usage)?;

    // rules are fully loaded before any input is read
    let rules = RuleSet::load(path)?;

    let stdin = io::stdin().lock();
    let stdout = BufWriter::new(io::stdout().lock());
    process(&rules, stdin, stdout)
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
