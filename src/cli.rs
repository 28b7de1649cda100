use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::core::dispatch::EquationKind;

#[derive(Debug, Parser)]
#[command(
    name = "eqsolve",
    about = "eqsolve: linear, quadratic and polynomial equations with exact radical answers",
    version,
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct EqsolveCli {
    /// Global: path to config (TOML); default: ~/.eqsolve/config.toml
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Global: more log output (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Solve one equation
    ///
    /// Examples:
    ///   eqsolve solve quadratic "x^2 - 5x + 6 = 0"
    ///   eqsolve solve polynomial "x^3 - x" --json
    Solve {
        /// Equation category
        #[arg(value_enum, value_name = "KIND")]
        kind: EquationKind,
        /// Equation text (quote it in the shell)
        #[arg(value_name = "EQUATION")]
        equation: String,
        /// Print a JSON object instead of plain text
        #[arg(long = "json", action = ArgAction::SetTrue)]
        json: bool,
    },

    /// Solve every `<kind>: <equation>` line of a file
    Batch {
        #[arg(value_name = "FILE")]
        input: PathBuf,
        /// Write results here instead of stdout
        #[arg(short = 'o', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// List equation kinds and whether they are implemented
    Kinds,

    /// Show the effective solver configuration
    Config {
        /// Write the built-in defaults to the config path
        #[arg(long = "init", action = ArgAction::SetTrue)]
        init: bool,
    },

    /// Interactive prompt (default when no subcommand is given)
    Repl,
}
