//! Core module tree: tokenizer, parser, polynomial arithmetic and the solvers.

pub mod diagnostics;
pub mod dispatch;
pub mod error;
pub mod lexer;
pub mod linear;
pub mod parser;
pub mod polynomial;
pub mod polynomial_solver;
pub mod quadratic;
pub mod radical;
pub mod token;

pub use dispatch::{solve, solve_to_message, solve_with, EquationKind, Solvers};
pub use error::{SolveError, SolveResult};
pub use linear::LinearSolver;
pub use polynomial::Polynomial;
pub use polynomial_solver::{NewtonOptions, PolynomialSolver};
pub use quadratic::{QuadraticRoots, QuadraticSolver};
pub use radical::{Radical, RadicalFormatter};
