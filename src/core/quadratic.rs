//! QuadraticSolver: `a·x² + b·x + c = 0` with exact radical output.

use log::debug;
use num_complex::Complex64;

use crate::core::error::{SolveError, SolveResult};
use crate::core::parser::{Equation, DEFAULT_MAX_DEGREE};
use crate::core::radical::{as_integer, is_perfect_square, isqrt, Radical, RadicalFormatter, MAX_EXACT_INTEGER};

/// Relative tolerance under which a floating discriminant counts as zero.
const DISCRIMINANT_EPSILON: f64 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuadraticRoots {
    /// `(−b + √Δ)/2a`, `(−b − √Δ)/2a`
    Distinct(f64, f64),
    Repeated(f64),
    /// Conjugate pair, positive imaginary part first.
    Complex(Complex64, Complex64),
}

/// Coefficients extracted from a quadratic equation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadratic {
    pub variable: char,
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Quadratic {
    pub fn discriminant(&self) -> f64 {
        self.b * self.b - 4.0 * self.a * self.c
    }
}

#[derive(Debug, Clone, Copy)]
pub struct QuadraticSolver {
    formatter: RadicalFormatter,
    max_degree: usize,
}

impl Default for QuadraticSolver {
    fn default() -> Self {
        Self { formatter: RadicalFormatter::default(), max_degree: DEFAULT_MAX_DEGREE }
    }
}

impl QuadraticSolver {
    pub fn new(formatter: RadicalFormatter, max_degree: usize) -> Self {
        Self { formatter, max_degree }
    }

    /// Parses `text` and checks it is a quadratic with a right-hand side.
    pub fn parse(&self, text: &str) -> SolveResult<Quadratic> {
        let eq = Equation::parse_with_max_degree(text, self.max_degree)?;
        if !eq.has_equals() {
            return Err(SolveError::format_at(
                "Missing '= 0' right-hand side",
                text.chars().count() + 1,
            ));
        }
        let p = eq.normalized();
        match p.degree() {
            Some(2) => {}
            Some(d) if d > 2 => {
                return Err(SolveError::format(format!(
                    "Degree {} is too high for a quadratic; use the polynomial solver",
                    d
                )))
            }
            _ => return Err(SolveError::format("Missing x^2 term")),
        }
        Ok(Quadratic { variable: eq.variable_or_x(), a: p.coeff(2), b: p.coeff(1), c: p.coeff(0) })
    }

    /// Numeric roots of `a·x² + b·x + c`. `a` must be non-zero.
    pub fn roots(a: f64, b: f64, c: f64) -> QuadraticRoots {
        let disc = b * b - 4.0 * a * c;
        let scale = (b * b).max((4.0 * a * c).abs());
        let two_a = 2.0 * a;
        if disc.abs() <= DISCRIMINANT_EPSILON * scale {
            QuadraticRoots::Repeated(-b / two_a)
        } else if disc > 0.0 {
            let s = disc.sqrt();
            QuadraticRoots::Distinct((-b + s) / two_a, (-b - s) / two_a)
        } else {
            let re = -b / two_a;
            let im = (-disc).sqrt() / two_a.abs();
            QuadraticRoots::Complex(Complex64::new(re, im), Complex64::new(re, -im))
        }
    }

    pub fn solve(&self, text: &str) -> SolveResult<String> {
        let q = self.parse(text)?;
        debug!(
            "quadratic {}: a={} b={} c={} discriminant={}",
            q.variable, q.a, q.b, q.c, q.discriminant()
        );
        self.format_roots(&q)
    }

    pub fn format_roots(&self, q: &Quadratic) -> SolveResult<String> {
        let v = q.variable;
        match (as_integer(q.a), as_integer(q.b), as_integer(q.c)) {
            (Some(a), Some(b), Some(c)) => match exact_discriminant(a, b, c) {
                Some(disc) => exact_roots(v, a, b, disc),
                None => Ok(self.decimal_roots(v, q)),
            },
            _ => Ok(self.decimal_roots(v, q)),
        }
    }

    fn decimal_roots(&self, v: char, q: &Quadratic) -> String {
        let fmt = &self.formatter;
        match Self::roots(q.a, q.b, q.c) {
            QuadraticRoots::Distinct(r1, r2) => {
                format!("{v} = {}, {v} = {}", fmt.decimal(r1), fmt.decimal(r2))
            }
            QuadraticRoots::Repeated(r) => format!("{v} = {}", fmt.decimal(r)),
            QuadraticRoots::Complex(z, _) => {
                complex_text(v, &fmt.decimal(z.re), z.re == 0.0, &fmt.decimal(z.im))
            }
        }
    }
}

/// `b² − 4ac` when it stays in the exactly representable integer range.
fn exact_discriminant(a: i64, b: i64, c: i64) -> Option<i128> {
    let disc = (b as i128) * (b as i128) - 4 * (a as i128) * (c as i128);
    if (disc.unsigned_abs() as f64) <= MAX_EXACT_INTEGER {
        Some(disc)
    } else {
        None
    }
}

fn exact_roots(v: char, a: i64, b: i64, disc: i128) -> SolveResult<String> {
    let two_a = 2 * a;
    if disc > 0 {
        let d = disc as u64;
        let (r1, r2) = if is_perfect_square(d) {
            let s = isqrt(d) as i64;
            (Radical::fraction(-b + s, two_a)?, Radical::fraction(-b - s, two_a)?)
        } else {
            (Radical::new(-b, 1, d, two_a)?, Radical::new(-b, -1, d, two_a)?)
        };
        Ok(format!("{v} = {r1}, {v} = {r2}"))
    } else if disc == 0 {
        Ok(format!("{v} = {}", Radical::fraction(-b, two_a)?))
    } else {
        let re = Radical::fraction(-b, two_a)?;
        let im = Radical::sqrt((-disc) as u64, two_a.abs())?;
        Ok(complex_text(v, &re.to_string(), re.is_zero(), &im.to_string()))
    }
}

fn complex_text(v: char, re: &str, re_is_zero: bool, im: &str) -> String {
    if re_is_zero {
        format!("{v} = ±{im}i")
    } else {
        format!("{v} = {re} ± {im}i")
    }
}
