//! LinearSolver: first-degree equations in one variable.

use log::debug;

use crate::core::error::{SolveError, SolveResult};
use crate::core::parser::{Equation, DEFAULT_MAX_DEGREE};
use crate::core::polynomial_solver::{ALL_REALS, NO_SOLUTION};
use crate::core::radical::RadicalFormatter;

pub const MISSING_EQUALS: &str = "Please enter a valid equation with an \"=\" sign.";
pub const EXTRA_EQUALS: &str = "Please enter a valid equation with only one \"=\" sign.";

#[derive(Debug, Clone, Copy)]
pub struct LinearSolver {
    formatter: RadicalFormatter,
    max_degree: usize,
}

impl Default for LinearSolver {
    fn default() -> Self {
        Self { formatter: RadicalFormatter::default(), max_degree: DEFAULT_MAX_DEGREE }
    }
}

impl LinearSolver {
    pub fn new(formatter: RadicalFormatter, max_degree: usize) -> Self {
        Self { formatter, max_degree }
    }

    pub fn solve(&self, text: &str) -> SolveResult<String> {
        let mut equals = text.char_indices().filter(|&(_, c)| c == '=');
        if equals.next().is_none() {
            return Err(SolveError::format(MISSING_EQUALS));
        }
        if let Some((idx, _)) = equals.next() {
            let column = text[..idx].chars().count() + 1;
            return Err(SolveError::format_at(EXTRA_EQUALS, column));
        }
        if !text.chars().any(char::is_alphabetic) {
            return Err(SolveError::NoVariableFound);
        }

        let eq = Equation::parse_with_max_degree(text, self.max_degree)?;
        let p = eq.normalized();
        debug!("linear: {} = 0", p);
        match p.degree() {
            None => Ok(ALL_REALS.to_string()),
            Some(0) => Ok(NO_SOLUTION.to_string()),
            Some(1) => {
                let value = self.formatter.fraction(-p.coeff(0), p.coeff(1))?;
                Ok(format!("{} = {}", eq.variable_or_x(), value))
            }
            Some(d) => Err(SolveError::format(format!(
                "Not a linear equation: the variable appears with degree {}",
                d
            ))),
        }
    }
}
