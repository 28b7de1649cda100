//! Dense univariate polynomial over `f64`.
//!
//! Coefficients are stored by ascending power: `coeffs[i]` multiplies `x^i`.
//! Trailing zeros are trimmed so `degree()` is exact; the zero polynomial has
//! no coefficients.

use std::ops::{Add, Mul, Neg, Sub};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polynomial {
    coeffs: Vec<f64>,
}

impl Polynomial {
    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    pub fn constant(c: f64) -> Self {
        Self::from_coeffs(vec![c])
    }

    /// `coefficient · x^degree`
    pub fn monomial(coefficient: f64, degree: usize) -> Self {
        let mut coeffs = vec![0.0; degree + 1];
        coeffs[degree] = coefficient;
        Self::from_coeffs(coeffs)
    }

    pub fn from_coeffs(mut coeffs: Vec<f64>) -> Self {
        while coeffs.last() == Some(&0.0) {
            coeffs.pop();
        }
        Self { coeffs }
    }

    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    /// Coefficient of `x^degree`, zero when absent.
    pub fn coeff(&self, degree: usize) -> f64 {
        self.coeffs.get(degree).copied().unwrap_or(0.0)
    }

    /// `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// The constant value when the degree is at most zero.
    pub fn as_constant(&self) -> Option<f64> {
        match self.coeffs.len() {
            0 => Some(0.0),
            1 => Some(self.coeffs[0]),
            _ => None,
        }
    }

    pub fn scale(&self, k: f64) -> Self {
        Self::from_coeffs(self.coeffs.iter().map(|c| c * k).collect())
    }

    /// Horner evaluation.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
    }

    /// Evaluates `p'(x)` without materializing the derivative.
    pub fn evaluate_derivative(&self, x: f64) -> f64 {
        self.coeffs
            .iter()
            .enumerate()
            .skip(1)
            .rev()
            .fold(0.0, |acc, (i, &c)| acc * x + c * i as f64)
    }

    /// Factors out `x^k` for the largest `k`, returning `(k, p / x^k)`.
    pub fn split_zero_roots(&self) -> (usize, Self) {
        let k = self.coeffs.iter().take_while(|&&c| c == 0.0).count();
        if k == 0 || self.is_zero() {
            return (0, self.clone());
        }
        (k, Self::from_coeffs(self.coeffs[k..].to_vec()))
    }

    /// Square-and-multiply.
    pub fn pow(&self, mut exp: u32) -> Self {
        let mut out = Polynomial::constant(1.0);
        let mut base = self.clone();
        while exp > 0 {
            if exp & 1 == 1 {
                out = &out * &base;
            }
            exp >>= 1;
            if exp > 0 {
                base = &base * &base;
            }
        }
        out
    }
}

impl Add for &Polynomial {
    type Output = Polynomial;
    fn add(self, rhs: &Polynomial) -> Polynomial {
        let n = self.coeffs.len().max(rhs.coeffs.len());
        Polynomial::from_coeffs((0..n).map(|i| self.coeff(i) + rhs.coeff(i)).collect())
    }
}

impl Sub for &Polynomial {
    type Output = Polynomial;
    fn sub(self, rhs: &Polynomial) -> Polynomial {
        let n = self.coeffs.len().max(rhs.coeffs.len());
        Polynomial::from_coeffs((0..n).map(|i| self.coeff(i) - rhs.coeff(i)).collect())
    }
}

impl Mul for &Polynomial {
    type Output = Polynomial;
    fn mul(self, rhs: &Polynomial) -> Polynomial {
        if self.is_zero() || rhs.is_zero() {
            return Polynomial::zero();
        }
        let mut out = vec![0.0; self.coeffs.len() + rhs.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in rhs.coeffs.iter().enumerate() {
                out[i + j] += a * b;
            }
        }
        Polynomial::from_coeffs(out)
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;
    fn neg(self) -> Polynomial {
        self.scale(-1.0)
    }
}

impl std::fmt::Display for Polynomial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let mut first = true;
        for (i, &c) in self.coeffs.iter().enumerate().rev() {
            if c == 0.0 {
                continue;
            }
            let sign = if c < 0.0 { "-" } else { "+" };
            if first {
                if c < 0.0 {
                    write!(f, "-")?;
                }
            } else {
                write!(f, " {} ", sign)?;
            }
            let mag = c.abs();
            match (i, mag == 1.0) {
                (0, _) => write!(f, "{}", mag)?,
                (1, true) => write!(f, "x")?,
                (1, false) => write!(f, "{}x", mag)?,
                (_, true) => write!(f, "x^{}", i)?,
                (_, false) => write!(f, "{}x^{}", mag, i)?,
            }
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_reports_degree() {
        let p = Polynomial::from_coeffs(vec![1.0, 2.0, 0.0, 0.0]);
        assert_eq!(p.degree(), Some(1));
        assert_eq!(Polynomial::zero().degree(), None);
        assert_eq!(Polynomial::from_coeffs(vec![0.0]).as_constant(), Some(0.0));
    }

    #[test]
    fn splits_zero_roots() {
        // x^4 - x^2
        let p = Polynomial::from_coeffs(vec![0.0, 0.0, -1.0, 0.0, 1.0]);
        let (k, rest) = p.split_zero_roots();
        assert_eq!(k, 2);
        assert_eq!(rest.coeffs(), &[-1.0, 0.0, 1.0]);
        assert_eq!(Polynomial::monomial(3.0, 3).split_zero_roots(), (3, Polynomial::constant(3.0)));
        assert_eq!(Polynomial::zero().split_zero_roots(), (0, Polynomial::zero()));
    }

    #[test]
    fn evaluate_and_derivative() {
        // x^3 - 2x + 1
        let p = Polynomial::from_coeffs(vec![1.0, -2.0, 0.0, 1.0]);
        assert_eq!(p.evaluate(2.0), 5.0);
        assert_eq!(p.evaluate_derivative(2.0), 10.0);
    }

    #[test]
    fn arithmetic() {
        let a = Polynomial::from_coeffs(vec![-1.0, 1.0]); // x - 1
        let b = Polynomial::from_coeffs(vec![1.0, 1.0]); // x + 1
        assert_eq!((&a * &b).coeffs(), &[-1.0, 0.0, 1.0]);
        assert_eq!((&a + &b).coeffs(), &[0.0, 2.0]);
        assert!((&a - &a).is_zero());
        assert_eq!(a.pow(2).coeffs(), &[1.0, -2.0, 1.0]);
        assert_eq!(a.pow(0).coeffs(), &[1.0]);
        assert_eq!(a.pow(5).coeffs(), &[-1.0, 5.0, -10.0, 10.0, -5.0, 1.0]);
    }

    #[test]
    fn display() {
        let p = Polynomial::from_coeffs(vec![6.0, -5.0, 1.0]);
        assert_eq!(p.to_string(), "x^2 - 5x + 6");
        assert_eq!(Polynomial::from_coeffs(vec![-1.0, 0.0, -2.0]).to_string(), "-2x^2 - 1");
    }
}
