//! src/commands/batch.rs
//! Solve a file of `<kind>: <equation>` lines.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::warn;

use crate::core::dispatch::{message_for, EquationKind, Solvers};
use crate::io::atomic::atomic_write;

/// One parsed batch line.
#[derive(Debug, PartialEq)]
pub enum BatchLine<'a> {
    Skip,
    Equation(EquationKind, &'a str),
    Invalid(String),
}

/// Blank lines and `#` comments are skipped.
pub fn parse_line(line: &str) -> BatchLine<'_> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return BatchLine::Skip;
    }
    let Some((tag, equation)) = line.split_once(':') else {
        return BatchLine::Invalid(format!("expected '<kind>: <equation>', got '{}'", line));
    };
    match tag.parse::<EquationKind>() {
        Ok(kind) => BatchLine::Equation(kind, equation.trim()),
        Err(e) => BatchLine::Invalid(e),
    }
}

/// Solves every line of `source`; returns the report and the failure count.
pub fn run(solvers: &Solvers, source: &str) -> (String, usize) {
    let mut out = String::new();
    let mut failed = 0usize;
    for (n, line) in source.lines().enumerate() {
        match parse_line(line) {
            BatchLine::Skip => {}
            BatchLine::Invalid(msg) => {
                warn!("line {}: {}", n + 1, msg);
                out.push_str(&format!("{} => {}\n", line.trim(), msg));
                failed += 1;
            }
            BatchLine::Equation(kind, eq) => {
                let msg = match solvers.solve(kind, eq) {
                    Ok(s) => s,
                    Err(e) => {
                        failed += 1;
                        message_for(&e)
                    }
                };
                out.push_str(&format!("{}: {} => {}\n", kind, eq, msg));
            }
        }
    }
    (out, failed)
}

/// Returns 0 when every line solved, 1 otherwise.
pub fn main(solvers: &Solvers, input: &Path, out: Option<PathBuf>) -> anyhow::Result<i32> {
    let source = fs::read_to_string(input)
        .with_context(|| format!("reading {}", input.display()))?;
    let (report, failed) = run(solvers, &source);
    match out {
        Some(p) => {
            atomic_write(&p, report.as_bytes()).with_context(|| format!("writing {}", p.display()))?;
            println!("wrote {}", p.display());
        }
        None => print!("{}", report),
    }
    Ok(if failed == 0 { 0 } else { 1 })
}
