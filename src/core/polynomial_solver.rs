//! PolynomialSolver: real roots by multi-seed Newton-Raphson.
//!
//! The seed sweep is fixed and each seed is bounded by `max_iterations`, so
//! roots far outside the seeds or hidden between close critical points can be
//! missed. This is an approximation, not a complete root isolation.
//!
//! A root at zero is split off exactly as a factor `x^k` before iterating.
//! Other repeated roots converge only linearly and may print a few
//! millionths off.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::core::error::SolveResult;
use crate::core::parser::{Equation, DEFAULT_MAX_DEGREE};
use crate::core::polynomial::Polynomial;
use crate::core::radical::{round_to, RadicalFormatter};

pub const DEFAULT_SEEDS: [f64; 5] = [-10.0, -5.0, 0.0, 5.0, 10.0];
pub const DEFAULT_MAX_ITERATIONS: usize = 100;
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

pub const ALL_REALS: &str = "all real numbers";
pub const NO_SOLUTION: &str = "no solution";
pub const NO_REAL_ROOTS: &str = "no real roots found";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewtonOptions {
    pub seeds: Vec<f64>,
    pub max_iterations: usize,
    /// Step size under which an iteration has converged; also the smallest
    /// derivative magnitude accepted and the deduplication radius.
    pub tolerance: f64,
}

impl Default for NewtonOptions {
    fn default() -> Self {
        Self {
            seeds: DEFAULT_SEEDS.to_vec(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

/// Runs Newton-Raphson from `seed`, stopping early on an exact zero of `p`.
/// `None` when the derivative vanishes, the iterate blows up, or the step
/// bound is reached first.
pub fn newton_raphson(p: &Polynomial, seed: f64, opts: &NewtonOptions) -> Option<f64> {
    let mut x = seed;
    for step in 0..opts.max_iterations {
        let fx = p.evaluate(x);
        if fx == 0.0 {
            return Some(x);
        }
        let dfx = p.evaluate_derivative(x);
        if dfx.abs() < opts.tolerance {
            trace!("seed {}: derivative {} vanishes at x={} (step {})", seed, dfx, x, step);
            return None;
        }
        let next = x - fx / dfx;
        if !next.is_finite() {
            return None;
        }
        if (next - x).abs() < opts.tolerance {
            return Some(next);
        }
        x = next;
    }
    trace!("seed {}: no convergence after {} steps", seed, opts.max_iterations);
    None
}

/// Rounds each root to `places`, drops any within `tolerance` of an accepted
/// root, and sorts ascending.
pub fn dedup_roots<I: IntoIterator<Item = f64>>(roots: I, tolerance: f64, places: u32) -> Vec<f64> {
    let mut accepted: Vec<f64> = Vec::new();
    for r in roots {
        let r = round_to(r, places);
        if !accepted.iter().any(|a| (a - r).abs() <= tolerance) {
            accepted.push(r);
        }
    }
    accepted.sort_by(f64::total_cmp);
    accepted
}

#[derive(Debug, Clone)]
pub struct PolynomialSolver {
    newton: NewtonOptions,
    formatter: RadicalFormatter,
    max_degree: usize,
}

impl Default for PolynomialSolver {
    fn default() -> Self {
        Self {
            newton: NewtonOptions::default(),
            formatter: RadicalFormatter::default(),
            max_degree: DEFAULT_MAX_DEGREE,
        }
    }
}

impl PolynomialSolver {
    pub fn new(newton: NewtonOptions, formatter: RadicalFormatter, max_degree: usize) -> Self {
        Self { newton, formatter, max_degree }
    }

    /// Distinct real roots found from the seed sweep, ascending.
    pub fn find_roots(&self, p: &Polynomial) -> Vec<f64> {
        let (zeros, rest) = p.split_zero_roots();
        let mut found = Vec::new();
        if zeros > 0 {
            debug!("x^{} factor: root 0", zeros);
            found.push(0.0);
        }
        if rest.degree().is_some_and(|d| d > 0) {
            found.extend(self.newton.seeds.iter().filter_map(|&seed| {
                let root = newton_raphson(&rest, seed, &self.newton);
                debug!("seed {} -> {:?}", seed, root);
                root
            }));
        }
        dedup_roots(found, self.newton.tolerance, self.formatter.decimal_places)
    }

    pub fn solve(&self, text: &str) -> SolveResult<String> {
        let eq = Equation::parse_with_max_degree(text, self.max_degree)?;
        let p = eq.normalized();
        debug!("polynomial: {} = 0", p);
        match p.degree() {
            None => return Ok(ALL_REALS.to_string()),
            Some(0) => return Ok(NO_SOLUTION.to_string()),
            Some(_) => {}
        }
        let roots = self.find_roots(&p);
        if roots.is_empty() {
            return Ok(NO_REAL_ROOTS.to_string());
        }
        let v = eq.variable_or_x();
        let parts = roots
            .iter()
            .map(|&r| Ok(format!("{} = {}", v, self.formatter.fraction(r, 1.0)?)))
            .collect::<SolveResult<Vec<_>>>()?;
        Ok(parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newton_converges_from_seed() {
        let p = Polynomial::from_coeffs(vec![-4.0, 0.0, 1.0]); // x^2 - 4
        let r = newton_raphson(&p, 5.0, &NewtonOptions::default()).unwrap();
        assert!((r - 2.0).abs() < 1e-9);
    }

    #[test]
    fn newton_aborts_on_flat_derivative() {
        let p = Polynomial::from_coeffs(vec![-4.0, 0.0, 1.0]);
        assert_eq!(newton_raphson(&p, 0.0, &NewtonOptions::default()), None);
    }

    #[test]
    fn newton_gives_up_without_real_root() {
        let p = Polynomial::from_coeffs(vec![1.0, 0.0, 1.0]); // x^2 + 1
        assert_eq!(newton_raphson(&p, 5.0, &NewtonOptions::default()), None);
    }

    #[test]
    fn dedup_collapses_close_roots() {
        assert_eq!(dedup_roots([2.0, 1.0, 1.0000004, 2.0000001], 1e-6, 6), vec![1.0, 2.0]);
        assert_eq!(dedup_roots([-0.0000001], 1e-6, 6), vec![0.0]);
    }

    #[test]
    fn solves_cubic_with_three_roots() {
        let s = PolynomialSolver::default();
        assert_eq!(s.solve("x^3 - x = 0").unwrap(), "x = -1, x = 0, x = 1");
    }

    #[test]
    fn implicit_zero_right_hand_side() {
        let s = PolynomialSolver::default();
        assert_eq!(s.solve("x^2 - 4").unwrap(), "x = -2, x = 2");
    }

    #[test]
    fn constant_equations() {
        let s = PolynomialSolver::default();
        assert_eq!(s.solve("x^2 = x^2").unwrap(), ALL_REALS);
        assert_eq!(s.solve("x^2 + 1 = x^2").unwrap(), NO_SOLUTION);
        assert_eq!(s.solve("x^2 + 1 = 0").unwrap(), NO_REAL_ROOTS);
    }

    #[test]
    fn repeated_root_at_zero() {
        let s = PolynomialSolver::default();
        assert_eq!(s.solve("x^2 = 0").unwrap(), "x = 0");
        assert_eq!(s.solve("x^3 = 0").unwrap(), "x = 0");
        assert_eq!(s.solve("x^3 - x^2 = 0").unwrap(), "x = 0, x = 1");
    }

    #[test]
    fn newton_accepts_exact_seed() {
        let p = Polynomial::from_coeffs(vec![-25.0, 0.0, 1.0]); // x^2 - 25
        assert_eq!(newton_raphson(&p, 5.0, &NewtonOptions::default()), Some(5.0));
    }

    #[test]
    fn irrational_root_prints_decimal() {
        let s = PolynomialSolver::default();
        assert_eq!(s.solve("x^2 - 2 = 0").unwrap(), "x = -1.414214, x = 1.414214");
    }
}
