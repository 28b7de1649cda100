use eqsolve::config::SolverConfig;
use eqsolve::core::dispatch::{solve_with, EquationKind};
use eqsolve::core::parser::Equation;
use eqsolve::core::polynomial_solver::{dedup_roots, NewtonOptions, PolynomialSolver};

#[test]
fn same_input_same_roots() {
    let s = PolynomialSolver::default();
    let p = Equation::parse("x^3 - x = 0").unwrap().normalized();
    let first = s.find_roots(&p);
    let second = s.find_roots(&p);
    assert_eq!(first, second);
    assert_eq!(first, vec![-1.0, 0.0, 1.0]);
}

#[test]
fn close_roots_collapse() {
    assert_eq!(dedup_roots([3.0, 3.0000003, 2.9999998], 1e-6, 6), vec![3.0]);
    assert_eq!(dedup_roots([1.5, -1.5], 1e-6, 6), vec![-1.5, 1.5]);
}

#[test]
fn right_hand_side_terms_move_left() {
    let s = PolynomialSolver::default();
    assert_eq!(s.solve("x^3 = 8").unwrap(), "x = 2");
    assert_eq!(s.solve("x^2 = 3x - 2 + 2").unwrap(), "x = 0, x = 3");
}

#[test]
fn roots_outside_default_seeds_need_wider_seeds() {
    let far = "x^2 - 10000 = 0";
    let mut cfg = SolverConfig::default();
    cfg.newton = NewtonOptions { seeds: vec![-150.0, 150.0], ..NewtonOptions::default() };
    assert_eq!(
        solve_with(&cfg, EquationKind::Polynomial, far).unwrap(),
        "x = -100, x = 100"
    );
}

#[test]
fn huge_constant_exponent_returns_promptly() {
    let started = std::time::Instant::now();
    let cfg = SolverConfig::default();
    assert_eq!(
        solve_with(&cfg, EquationKind::Polynomial, "1^4294967295 = x").unwrap(),
        "x = 1"
    );
    assert!(started.elapsed() < std::time::Duration::from_secs(2));
}

#[test]
fn repeated_zero_root_prints_once() {
    let s = PolynomialSolver::default();
    assert_eq!(s.solve("x^4 - x^2 = 0").unwrap(), "x = -1, x = 0, x = 1");
}
