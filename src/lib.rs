//! eqsolve: linear, quadratic and polynomial equation solving with exact
//! radical output. The binary wraps the library in a CLI and a shell.
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod shell;

pub use crate::core::{solve, solve_to_message, EquationKind, SolveError};
