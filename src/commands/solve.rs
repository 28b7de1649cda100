//! `eqsolve solve <KIND> <EQUATION>`

use serde::Serialize;

use crate::core::diagnostics::print_error;
use crate::core::dispatch::{message_for, EquationKind, Solvers};

#[derive(Debug, Serialize)]
pub struct SolveReport<'a> {
    pub kind: EquationKind,
    pub equation: &'a str,
    pub ok: bool,
    pub result: String,
}

/// Returns the process exit code: 0 when solved, 1 on a solver error.
pub fn main(solvers: &Solvers, kind: EquationKind, equation: &str, json: bool) -> anyhow::Result<i32> {
    let outcome = solvers.solve(kind, equation);
    let code = if outcome.is_ok() { 0 } else { 1 };
    if json {
        let report = SolveReport {
            kind,
            equation,
            ok: outcome.is_ok(),
            result: match &outcome {
                Ok(s) => s.clone(),
                Err(e) => message_for(e),
            },
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(code);
    }
    match outcome {
        Ok(s) => println!("{}", s),
        Err(e) => print_error(equation.trim(), &e),
    }
    Ok(code)
}
