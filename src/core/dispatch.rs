//! Equation kinds and the solve entry point used by the CLI and the shell.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::SolverConfig;
use crate::core::error::{SolveError, SolveResult};
use crate::core::linear::{LinearSolver, EXTRA_EQUALS, MISSING_EQUALS};
use crate::core::polynomial_solver::PolynomialSolver;
use crate::core::quadratic::QuadraticSolver;
use crate::core::radical::RadicalFormatter;

pub const UNDEFINED: &str = "undefined";
pub const EMPTY_INPUT: &str = "Please enter an equation.";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EquationKind {
    Linear,
    Quadratic,
    Polynomial,
    Rational,
    Exponential,
    Logarithmic,
    System,
    Inequality,
    #[value(alias = "absoluteValue")]
    AbsoluteValue,
    Piecewise,
    Trigonometric,
    Matrix,
}

impl EquationKind {
    pub const ALL: [EquationKind; 12] = [
        EquationKind::Linear,
        EquationKind::Quadratic,
        EquationKind::Polynomial,
        EquationKind::Rational,
        EquationKind::Exponential,
        EquationKind::Logarithmic,
        EquationKind::System,
        EquationKind::Inequality,
        EquationKind::AbsoluteValue,
        EquationKind::Piecewise,
        EquationKind::Trigonometric,
        EquationKind::Matrix,
    ];

    /// The camelCase tag used in batch files and messages.
    pub fn tag(self) -> &'static str {
        match self {
            EquationKind::Linear => "linear",
            EquationKind::Quadratic => "quadratic",
            EquationKind::Polynomial => "polynomial",
            EquationKind::Rational => "rational",
            EquationKind::Exponential => "exponential",
            EquationKind::Logarithmic => "logarithmic",
            EquationKind::System => "system",
            EquationKind::Inequality => "inequality",
            EquationKind::AbsoluteValue => "absoluteValue",
            EquationKind::Piecewise => "piecewise",
            EquationKind::Trigonometric => "trigonometric",
            EquationKind::Matrix => "matrix",
        }
    }

    pub fn is_implemented(self) -> bool {
        matches!(self, EquationKind::Linear | EquationKind::Quadratic | EquationKind::Polynomial)
    }
}

impl fmt::Display for EquationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for EquationKind {
    type Err = String;

    /// Accepts the camelCase tag, kebab/snake case, any letter case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        EquationKind::ALL
            .into_iter()
            .find(|k| k.tag().to_lowercase() == wanted)
            .ok_or_else(|| format!("unknown equation kind '{}'", s.trim()))
    }
}

/// The three working solvers, configured once.
#[derive(Debug, Clone)]
pub struct Solvers {
    pub linear: LinearSolver,
    pub quadratic: QuadraticSolver,
    pub polynomial: PolynomialSolver,
}

impl Solvers {
    pub fn from_config(config: &SolverConfig) -> Self {
        let formatter = RadicalFormatter::new(config.format.decimal_places);
        let max_degree = config.parser.max_degree;
        Self {
            linear: LinearSolver::new(formatter, max_degree),
            quadratic: QuadraticSolver::new(formatter, max_degree),
            polynomial: PolynomialSolver::new(config.newton.clone(), formatter, max_degree),
        }
    }

    pub fn solve(&self, kind: EquationKind, text: &str) -> SolveResult<String> {
        let text = text.trim();
        if text.is_empty() {
            return Err(SolveError::format(EMPTY_INPUT));
        }
        debug!("solve {}: {:?}", kind, text);
        match kind {
            EquationKind::Linear => self.linear.solve(text),
            EquationKind::Quadratic => self.quadratic.solve(text),
            EquationKind::Polynomial => self.polynomial.solve(text),
            other => Err(SolveError::NotImplemented(other)),
        }
    }
}

impl Default for Solvers {
    fn default() -> Self {
        Self::from_config(&SolverConfig::default())
    }
}

pub fn solve(kind: EquationKind, text: &str) -> SolveResult<String> {
    Solvers::default().solve(kind, text)
}

pub fn solve_with(config: &SolverConfig, kind: EquationKind, text: &str) -> SolveResult<String> {
    Solvers::from_config(config).solve(kind, text)
}

/// Solves and renders any failure as the message shown to the user.
pub fn solve_to_message(kind: EquationKind, text: &str) -> String {
    match solve(kind, text) {
        Ok(s) => s,
        Err(e) => message_for(&e),
    }
}

pub fn message_for(err: &SolveError) -> String {
    match err {
        SolveError::DivisionByZero => UNDEFINED.to_string(),
        SolveError::Format { message, .. }
            if message == MISSING_EQUALS || message == EXTRA_EQUALS || message == EMPTY_INPUT =>
        {
            message.clone()
        }
        SolveError::Format { message, .. } => format!("Error in solving the equation: {}", message),
        SolveError::NoVariableFound | SolveError::NotImplemented(_) => err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parsing() {
        assert_eq!("absoluteValue".parse::<EquationKind>(), Ok(EquationKind::AbsoluteValue));
        assert_eq!("absolute-value".parse::<EquationKind>(), Ok(EquationKind::AbsoluteValue));
        assert_eq!(" Quadratic ".parse::<EquationKind>(), Ok(EquationKind::Quadratic));
        assert!("cubic".parse::<EquationKind>().is_err());
        for k in EquationKind::ALL {
            assert_eq!(k.tag().parse::<EquationKind>(), Ok(k));
        }
    }

    #[test]
    fn stubs_are_not_implemented() {
        for k in EquationKind::ALL.into_iter().filter(|k| !k.is_implemented()) {
            assert_eq!(solve(k, "x = 1"), Err(SolveError::NotImplemented(k)));
        }
    }

    #[test]
    fn messages() {
        assert_eq!(message_for(&SolveError::DivisionByZero), UNDEFINED);
        assert_eq!(
            message_for(&SolveError::format("Missing x^2 term")),
            "Error in solving the equation: Missing x^2 term"
        );
        assert_eq!(solve_to_message(EquationKind::Linear, "   "), EMPTY_INPUT);
        assert_eq!(solve_to_message(EquationKind::Linear, "x/0 = 1"), UNDEFINED);
    }
}
