//! RadicalFormatter: exact rendering of fractions and square roots.
//!
//! Values are rendered in the shortest canonical form:
//! - `8/2` → `4`, `-2/4` → `-1/2`
//! - `√12/4` → `(√3)/2`, `√9/2` → `3/2`
//! - `(5 + √13)/2` for a full quadratic root
//!
//! Inputs that are not integral fall back to a rounded decimal.

use std::fmt;

use crate::core::error::{SolveError, SolveResult};

/// Absolute distance from the nearest integer still treated as that integer.
pub const INTEGRAL_EPSILON: f64 = 1e-9;
pub const DEFAULT_DECIMAL_PLACES: u32 = 6;
/// Largest magnitude for which every integer is exactly representable in `f64`.
pub const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0; // 2^53

/// Euclidean algorithm.
pub fn gcd(a: u128, b: u128) -> u128 {
    let mut x = a;
    let mut y = b;
    while y != 0 {
        let temp = y;
        y = x % y;
        x = temp;
    }
    x
}

pub fn is_integral(v: f64) -> bool {
    v.is_finite() && (v - v.round()).abs() <= INTEGRAL_EPSILON
}

/// The integer `v` stands for, when it is integral and exactly representable.
pub fn as_integer(v: f64) -> Option<i64> {
    if is_integral(v) && v.abs() <= MAX_EXACT_INTEGER {
        Some(v.round() as i64)
    } else {
        None
    }
}

/// Integer square root, exact for the whole `u64` range.
pub fn isqrt(n: u64) -> u64 {
    let mut s = (n as f64).sqrt() as u64;
    while (s as u128) * (s as u128) > n as u128 {
        s -= 1;
    }
    while ((s + 1) as u128) * ((s + 1) as u128) <= n as u128 {
        s += 1;
    }
    s
}

pub fn is_perfect_square(n: u64) -> bool {
    let s = isqrt(n);
    (s as u128) * (s as u128) == n as u128
}

/// Splits `n` into `(k, m)` with `n = k² · m` and `m` square-free.
pub fn square_free_decomposition(n: u64) -> (u64, u64) {
    if n == 0 {
        return (0, 1);
    }
    if is_perfect_square(n) {
        return (isqrt(n), 1);
    }
    let mut k = 1u64;
    let mut m = n;
    let mut p = 2u64;
    while p.saturating_mul(p) <= m {
        let sq = p * p;
        while m % sq == 0 {
            m /= sq;
            k *= p;
        }
        p += if p == 2 { 1 } else { 2 };
    }
    (k, m)
}

/// `(constant + coefficient·√radicand) / denominator`, kept reduced:
/// square-free radicand, GCD of the three integer parts equal to one, and a
/// positive denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Radical {
    constant: i128,
    coefficient: i128,
    radicand: u64,
    denominator: i128,
}

impl Radical {
    pub fn new(constant: i64, coefficient: i64, radicand: u64, denominator: i64) -> SolveResult<Self> {
        if denominator == 0 {
            return Err(SolveError::DivisionByZero);
        }
        let (k, m) = square_free_decomposition(radicand);
        let mut constant = constant as i128;
        let mut coefficient = coefficient as i128 * k as i128;
        let mut radicand = m;
        let mut denominator = denominator as i128;

        if radicand == 1 {
            constant += coefficient;
            coefficient = 0;
        }
        if coefficient == 0 {
            radicand = 1;
        }

        let g = gcd(
            gcd(constant.unsigned_abs(), coefficient.unsigned_abs()),
            denominator.unsigned_abs(),
        ) as i128;
        if g > 1 {
            constant /= g;
            coefficient /= g;
            denominator /= g;
        }
        if denominator < 0 {
            constant = -constant;
            coefficient = -coefficient;
            denominator = -denominator;
        }
        Ok(Self { constant, coefficient, radicand, denominator })
    }

    /// `numerator / denominator` with no radical part.
    pub fn fraction(numerator: i64, denominator: i64) -> SolveResult<Self> {
        Self::new(numerator, 0, 1, denominator)
    }

    /// `√radicand / denominator`.
    pub fn sqrt(radicand: u64, denominator: i64) -> SolveResult<Self> {
        Self::new(0, 1, radicand, denominator)
    }

    pub fn constant(&self) -> i128 { self.constant }
    pub fn coefficient(&self) -> i128 { self.coefficient }
    pub fn radicand(&self) -> u64 { self.radicand }
    pub fn denominator(&self) -> i128 { self.denominator }

    pub fn is_rational(&self) -> bool {
        self.coefficient == 0
    }

    pub fn is_zero(&self) -> bool {
        self.constant == 0 && self.coefficient == 0
    }

    pub fn value(&self) -> f64 {
        (self.constant as f64 + self.coefficient as f64 * (self.radicand as f64).sqrt())
            / self.denominator as f64
    }

    fn sqrt_part(&self) -> String {
        match self.coefficient.unsigned_abs() {
            1 => format!("√{}", self.radicand),
            k => format!("{}√{}", k, self.radicand),
        }
    }
}

impl fmt::Display for Radical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = self.denominator;
        if self.coefficient == 0 {
            return if d == 1 {
                write!(f, "{}", self.constant)
            } else {
                write!(f, "{}/{}", self.constant, d)
            };
        }
        let numerator = if self.constant == 0 {
            let sign = if self.coefficient < 0 { "-" } else { "" };
            format!("{}{}", sign, self.sqrt_part())
        } else {
            let op = if self.coefficient < 0 { '-' } else { '+' };
            format!("{} {} {}", self.constant, op, self.sqrt_part())
        };
        if d == 1 {
            write!(f, "{}", numerator)
        } else {
            write!(f, "({})/{}", numerator, d)
        }
    }
}

/// Renders fractions and radicals; non-integral inputs become decimals with
/// `decimal_places` digits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadicalFormatter {
    pub decimal_places: u32,
}

impl Default for RadicalFormatter {
    fn default() -> Self {
        Self { decimal_places: DEFAULT_DECIMAL_PLACES }
    }
}

impl RadicalFormatter {
    pub fn new(decimal_places: u32) -> Self {
        Self { decimal_places }
    }

    /// `numerator / denominator`, reduced by GCD.
    pub fn fraction(&self, numerator: f64, denominator: f64) -> SolveResult<String> {
        if denominator == 0.0 {
            return Err(SolveError::DivisionByZero);
        }
        match (as_integer(numerator), as_integer(denominator)) {
            (Some(n), Some(d)) => Ok(Radical::fraction(n, d)?.to_string()),
            _ => Ok(self.decimal(numerator / denominator)),
        }
    }

    /// `√radicand / denominator` with square factors pulled out of the root.
    pub fn sqrt(&self, radicand: f64, denominator: f64) -> SolveResult<String> {
        if denominator == 0.0 {
            return Err(SolveError::DivisionByZero);
        }
        if radicand < 0.0 {
            return Err(SolveError::format("Cannot take the square root of a negative number"));
        }
        match (as_integer(radicand), as_integer(denominator)) {
            (Some(r), Some(d)) => Ok(Radical::sqrt(r as u64, d)?.to_string()),
            _ => Ok(self.decimal(radicand.sqrt() / denominator)),
        }
    }

    pub fn decimal(&self, value: f64) -> String {
        format_decimal(value, self.decimal_places)
    }
}

/// Rounds to `places` digits and trims trailing zeros; `-0` prints as `0`.
pub fn format_decimal(value: f64, places: u32) -> String {
    let factor = 10f64.powi(places as i32);
    let rounded = (value * factor).round() / factor;
    let mut s = format!("{:.*}", places as usize, rounded);
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

/// Rounds `value` to `places` decimal digits.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    let r = (value * factor).round() / factor;
    if r == 0.0 { 0.0 } else { r }
}

/// `fraction` with the default formatter.
pub fn format_fraction(numerator: f64, denominator: f64) -> SolveResult<String> {
    RadicalFormatter::default().fraction(numerator, denominator)
}

/// `sqrt` with the default formatter.
pub fn format_sqrt(radicand: f64, denominator: f64) -> SolveResult<String> {
    RadicalFormatter::default().sqrt(radicand, denominator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gcd_basics() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(0, 5), 5);
        assert_eq!(gcd(7, 0), 7);
    }

    #[test]
    fn perfect_squares() {
        assert!(is_perfect_square(0));
        assert!(is_perfect_square(144));
        assert!(!is_perfect_square(145));
        // (2^31 + 1)^2 is not exactly representable as f64
        let big = (1u64 << 31) + 1;
        assert!(is_perfect_square(big * big));
        assert!(!is_perfect_square(big * big + 1));
        assert_eq!(isqrt(u64::MAX), 4_294_967_295);
    }

    #[test]
    fn square_free() {
        assert_eq!(square_free_decomposition(12), (2, 3));
        assert_eq!(square_free_decomposition(72), (6, 2));
        assert_eq!(square_free_decomposition(13), (1, 13));
        assert_eq!(square_free_decomposition(49), (7, 1));
    }

    #[test]
    fn integral_tolerance() {
        assert!(is_integral(3.0000000001));
        assert!(!is_integral(3.001));
        assert!(!is_integral(100_000_000.05));
        assert!(is_integral(1e12));
        assert_eq!(as_integer(-4.0), Some(-4));
        assert_eq!(as_integer(1e300), None);
        assert_eq!(as_integer(f64::NAN), None);
    }

    #[test]
    fn fractions() {
        assert_eq!(format_fraction(8.0, 2.0).unwrap(), "4");
        assert_eq!(format_fraction(0.0, 5.0).unwrap(), "0");
        assert_eq!(format_fraction(-1.0, 2.0).unwrap(), "-1/2");
        assert_eq!(format_fraction(6.0, -4.0).unwrap(), "-3/2");
        assert_eq!(format_fraction(1.5, 1.0).unwrap(), "1.5");
        assert_eq!(format_fraction(1.0, 3.0).unwrap(), "1/3");
        assert_eq!(format_fraction(3.0, 0.0).unwrap_err(), SolveError::DivisionByZero);
    }

    #[test]
    fn square_roots() {
        assert_eq!(format_sqrt(3.0, 2.0).unwrap(), "(√3)/2");
        assert_eq!(format_sqrt(12.0, 4.0).unwrap(), "(√3)/2");
        assert_eq!(format_sqrt(9.0, 2.0).unwrap(), "3/2");
        assert_eq!(format_sqrt(8.0, 2.0).unwrap(), "√2");
        assert_eq!(format_sqrt(18.0, 4.0).unwrap(), "(3√2)/4");
        assert_eq!(format_sqrt(3.0, -2.0).unwrap(), "(-√3)/2");
        assert_eq!(format_sqrt(2.5, 1.0).unwrap(), "1.581139");
        assert!(format_sqrt(-1.0, 1.0).is_err());
    }

    #[test]
    fn full_radicals() {
        assert_eq!(Radical::new(5, 1, 13, 2).unwrap().to_string(), "(5 + √13)/2");
        assert_eq!(Radical::new(-4, -2, 8, 4).unwrap().to_string(), "-1 - √2");
        assert_eq!(Radical::new(2, -1, 3, 1).unwrap().to_string(), "2 - √3");
        assert_eq!(Radical::new(3, 1, 4, 5).unwrap().to_string(), "1");
    }

    #[test]
    fn decimals() {
        assert_eq!(format_decimal(2.0000004, 6), "2");
        assert_eq!(format_decimal(-0.0000001, 6), "0");
        assert_eq!(format_decimal(1.25, 6), "1.25");
        assert_eq!(format_decimal(-3.1415926, 3), "-3.142");
        assert_eq!(round_to(-0.0000001, 6), 0.0);
    }
}
