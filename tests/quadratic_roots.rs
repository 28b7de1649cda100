use eqsolve::core::quadratic::{QuadraticRoots, QuadraticSolver};
use eqsolve::core::radical::Radical;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn eval(a: f64, b: f64, c: f64, x: f64) -> f64 {
    a * x * x + b * x + c
}

/// Discriminant sign picks the root shape; every real root substitutes to ~0.
#[test]
fn discriminant_sign_decides_root_shape() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..500 {
        let a = loop {
            let a: i64 = rng.gen_range(-9..=9);
            if a != 0 {
                break a;
            }
        };
        let b: i64 = rng.gen_range(-30..=30);
        let c: i64 = rng.gen_range(-30..=30);
        let (af, bf, cf) = (a as f64, b as f64, c as f64);
        let disc = b * b - 4 * a * c;
        let text = format!("{}x^2 + {}x + {} = 0", a, b, c);
        let shown = QuadraticSolver::default().solve(&text).unwrap();

        match QuadraticSolver::roots(af, bf, cf) {
            QuadraticRoots::Distinct(r1, r2) => {
                assert!(disc > 0, "{text}");
                assert_eq!(shown.matches(" = ").count(), 2, "{text} -> {shown}");
                for r in [r1, r2] {
                    assert!(eval(af, bf, cf, r).abs() < 1e-7, "{text}: {r}");
                }
                // the exact form evaluates to the same roots
                let e1 = Radical::new(-b, 1, disc as u64, 2 * a).unwrap().value();
                let e2 = Radical::new(-b, -1, disc as u64, 2 * a).unwrap().value();
                assert!((e1 - r1).abs() < 1e-9 && (e2 - r2).abs() < 1e-9, "{text}");
            }
            QuadraticRoots::Repeated(r) => {
                assert_eq!(disc, 0, "{text}");
                assert_eq!(shown.matches(" = ").count(), 1, "{text} -> {shown}");
                assert!(eval(af, bf, cf, r).abs() < 1e-9);
            }
            QuadraticRoots::Complex(z, w) => {
                assert!(disc < 0, "{text}");
                assert!(shown.contains('±') && shown.ends_with('i'), "{text} -> {shown}");
                for root in [z, w] {
                    let v = root * root * af + root * bf + cf;
                    assert!(v.norm() < 1e-9, "{text}: {root}");
                }
            }
        }
    }
}

#[test]
fn concrete_scenarios() {
    let s = QuadraticSolver::default();
    assert_eq!(s.solve("x^2-5x+6=0").unwrap(), "x = 3, x = 2");
    assert_eq!(s.solve("x^2-4x+4=0").unwrap(), "x = 2");
    assert_eq!(s.solve("x^2+x+1=0").unwrap(), "x = -1/2 ± (√3)/2i");
}

#[test]
fn whitespace_and_order_do_not_matter() {
    let s = QuadraticSolver::default();
    assert_eq!(s.solve("  6 - 5x + x^2 = 0 ").unwrap(), "x = 3, x = 2");
    assert_eq!(s.solve("x² = 5x - 6").unwrap(), "x = 3, x = 2");
}
