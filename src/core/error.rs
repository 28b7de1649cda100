use thiserror::Error;

use crate::core::dispatch::EquationKind;

/// Failures surfaced by the solvers. `dispatch::solve_to_message` turns every
/// variant into a user-facing string.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    #[error("{message}")]
    Format {
        message: String,
        column: Option<usize>,
    },
    #[error("division by zero")]
    DivisionByZero,
    #[error("No variable found in the equation.")]
    NoVariableFound,
    #[error("{0} equations are not implemented yet.")]
    NotImplemented(EquationKind),
}

impl SolveError {
    pub fn format(message: impl Into<String>) -> Self {
        SolveError::Format { message: message.into(), column: None }
    }

    pub fn format_at(message: impl Into<String>, column: usize) -> Self {
        SolveError::Format { message: message.into(), column: Some(column) }
    }

    /// 1-based column of the offending input character, when known.
    pub fn column(&self) -> Option<usize> {
        match self {
            SolveError::Format { column, .. } => *column,
            _ => None,
        }
    }
}

pub type SolveResult<T> = Result<T, SolveError>;
