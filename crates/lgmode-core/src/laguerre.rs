//! Laguerre polynomial numerics.
//!
//! Everything here is for the zero-order polynomials $L_p(x) = L_p^{(0)}(x)$.
//! Values are computed with the three-term recurrence
//!
//! $$(k+1) L_{k+1}(x) = (2k + 1 - x) L_k(x) - k L_{k-1}(x)$$
//!
//! which stays accurate at high degree where the explicit power series
//! suffers catastrophic cancellation.
//!
//! Roots come from the eigenvalues of the symmetric tridiagonal Jacobi
//! matrix of the recurrence (Golub & Welsch, *Math. Comp.* **23**, 221, 1969),
//! then get a Newton polish against the recurrence itself.

use log::{debug, warn};
use nalgebra::{DMatrix, SymmetricEigen};

use crate::error::ModeError;

const NEWTON_STEPS: usize = 3;
const BISECTION_MAX_ITER: usize = 200;
const BRACKET_MAX_EXPANSIONS: usize = 64;

/// Evaluate $L_p(x)$.
pub fn laguerre(p: u32, x: f64) -> f64 {
    laguerre_with_derivative(p, x).0
}

/// Evaluate $L_p(x)$ and $L_p'(x)$ together.
///
/// The derivative uses the differentiated recurrence
/// $(k+1) L'_{k+1} = (2k+1-x) L'_k - L_k - k L'_{k-1}$, which avoids the
/// division by $x$ in the usual closed form and is valid at $x = 0$.
pub fn laguerre_with_derivative(p: u32, x: f64) -> (f64, f64) {
    if p == 0 {
        return (1.0, 0.0);
    }

    let (mut l_prev, mut l_curr) = (1.0, 1.0 - x);
    let (mut d_prev, mut d_curr) = (0.0, -1.0);

    for k in 1..p {
        let kf = k as f64;
        let a = 2.0 * kf + 1.0 - x;
        let l_next = (a * l_curr - kf * l_prev) / (kf + 1.0);
        let d_next = (a * d_curr - l_curr - kf * d_prev) / (kf + 1.0);
        l_prev = l_curr;
        l_curr = l_next;
        d_prev = d_curr;
        d_curr = d_next;
    }

    (l_curr, d_curr)
}

/// The `p` roots of $L_p$, ascending. Empty for `p = 0`.
///
/// All roots are real, simple and positive.
///
/// # Errors
/// [`ModeError::EigenFailure`] if the eigenvalue solve yields non-finite values.
pub fn laguerre_roots(p: u32) -> Result<Vec<f64>, ModeError> {
    if p == 0 {
        return Ok(Vec::new());
    }

    let n = p as usize;
    // Jacobi matrix: diagonal 2k+1, off-diagonal k.
    let jacobi = DMatrix::<f64>::from_fn(n, n, |i, j| {
        if i == j {
            2.0 * i as f64 + 1.0
        } else if i.abs_diff(j) == 1 {
            i.max(j) as f64
        } else {
            0.0
        }
    });

    let eigen = SymmetricEigen::new(jacobi);
    let mut roots: Vec<f64> = eigen.eigenvalues.iter().copied().collect();

    if let Some(bad) = roots.iter().find(|x| !x.is_finite()) {
        return Err(ModeError::EigenFailure(format!(
            "non-finite eigenvalue {} for p = {}",
            bad, p
        )));
    }

    roots.sort_by(f64::total_cmp);

    for root in roots.iter_mut() {
        *root = newton_polish(p, *root);
    }

    debug!("Computed {} Laguerre roots for p = {}", roots.len(), p);
    Ok(roots)
}

fn newton_polish(p: u32, x0: f64) -> f64 {
    let mut x = x0;
    for _ in 0..NEWTON_STEPS {
        let (l, dl) = laguerre_with_derivative(p, x);
        if dl == 0.0 || !dl.is_finite() {
            break;
        }
        let step = l / dl;
        let next = x - step;
        // A good eigenvalue is already within a few ulps; a large jump means
        // Newton is heading for a neighbouring root.
        if !next.is_finite() || step.abs() > 1e-6 * x.abs().max(1.0) {
            warn!("Newton polish rejected for p = {} at x = {:.6e}", p, x);
            return x;
        }
        x = next;
        if step.abs() <= 4.0 * f64::EPSILON * x.abs() {
            break;
        }
    }
    x
}

/// Derivative of the Laguerre function $f(x) = L_p(x)\,e^{-x/2}$, without
/// the positive $e^{-x/2}$ factor: $g(x) = L_p'(x) - L_p(x)/2$.
fn laguerre_function_slope(p: u32, x: f64) -> f64 {
    let (l, dl) = laguerre_with_derivative(p, x);
    dl - 0.5 * l
}

/// Critical points of $L_p(x)\,e^{-x/2}$ on $x > 0$, ascending.
///
/// There is exactly one between each pair of neighbouring roots of $L_p$
/// and one beyond the largest root, `p` in total. These are the maxima of
/// $[L_p(x)]^2 e^{-x}$ away from the axis.
///
/// # Errors
/// Propagates [`ModeError::EigenFailure`] from [`laguerre_roots`].
pub fn critical_points(p: u32) -> Result<Vec<f64>, ModeError> {
    let roots = laguerre_roots(p)?;
    let Some(&last) = roots.last() else {
        return Ok(Vec::new());
    };

    let mut points = Vec::with_capacity(roots.len());
    for pair in roots.windows(2) {
        points.push(bisect(p, pair[0], pair[1]));
    }

    // Beyond the last root the slope changes sign once more; widen until it does.
    let mut width = if roots.len() > 1 {
        last - roots[roots.len() - 2]
    } else {
        1.0
    };
    let slope_at_last = laguerre_function_slope(p, last);
    let mut upper = last + width;
    for _ in 0..BRACKET_MAX_EXPANSIONS {
        if laguerre_function_slope(p, upper).signum() != slope_at_last.signum() {
            break;
        }
        width *= 2.0;
        upper = last + width;
    }
    points.push(bisect(p, last, upper));

    Ok(points)
}

fn bisect(p: u32, mut a: f64, mut b: f64) -> f64 {
    let mut fa = laguerre_function_slope(p, a);

    for _ in 0..BISECTION_MAX_ITER {
        let mid = 0.5 * (a + b);
        if (b - a) <= 4.0 * f64::EPSILON * b.abs().max(1.0) {
            return mid;
        }
        let fmid = laguerre_function_slope(p, mid);
        if fmid == 0.0 {
            return mid;
        }
        if fa.signum() != fmid.signum() {
            b = mid;
        } else {
            a = mid;
            fa = fmid;
        }
    }

    0.5 * (a + b)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Explicit low-degree forms for comparison with the recurrence.
    fn explicit(p: u32, x: f64) -> f64 {
        match p {
            0 => 1.0,
            1 => 1.0 - x,
            2 => 0.5 * (x * x - 4.0 * x + 2.0),
            3 => (-x * x * x + 9.0 * x * x - 18.0 * x + 6.0) / 6.0,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_recurrence_matches_explicit_forms() {
        for p in 0..=3 {
            for &x in &[0.0, 0.3, 1.0, 2.5, 7.0] {
                let got = laguerre(p, x);
                let want = explicit(p, x);
                assert!(
                    (got - want).abs() < 1e-12,
                    "L_{}({}) = {} but expected {}",
                    p,
                    x,
                    got,
                    want
                );
            }
        }
    }

    #[test]
    fn test_value_at_origin_is_one() {
        for p in [0, 1, 5, 40, 100] {
            assert_eq!(laguerre(p, 0.0), 1.0);
        }
    }

    #[test]
    fn test_derivative_at_origin() {
        // L_p'(0) = -p
        for p in [1, 2, 7, 30] {
            let (_, d) = laguerre_with_derivative(p, 0.0);
            assert!((d + p as f64).abs() < 1e-9, "p={} d={}", p, d);
        }
    }

    #[test]
    fn test_derivative_matches_finite_difference() {
        let h = 1e-6;
        for p in [3, 8] {
            for &x in &[0.5, 2.0, 9.0] {
                let (_, d) = laguerre_with_derivative(p, x);
                let fd = (laguerre(p, x + h) - laguerre(p, x - h)) / (2.0 * h);
                assert!((d - fd).abs() < 1e-5 * fd.abs().max(1.0));
            }
        }
    }

    #[test]
    fn test_roots_of_degree_two() {
        let roots = laguerre_roots(2).unwrap();
        let s = 2.0_f64.sqrt();
        assert_eq!(roots.len(), 2);
        assert!((roots[0] - (2.0 - s)).abs() < 1e-13);
        assert!((roots[1] - (2.0 + s)).abs() < 1e-13);
    }

    #[test]
    fn test_roots_empty_for_p_zero() {
        assert!(laguerre_roots(0).unwrap().is_empty());
        assert!(critical_points(0).unwrap().is_empty());
    }

    #[test]
    fn test_roots_are_zeros_of_polynomial() {
        let p = 12;
        let roots = laguerre_roots(p).unwrap();
        assert_eq!(roots.len(), p as usize);
        for pair in roots.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        for &x in &roots {
            assert!(x > 0.0);
            let (l, dl) = laguerre_with_derivative(p, x);
            // Residual relative to the local slope, i.e. the implied root error.
            assert!((l / dl).abs() < 1e-10 * x.max(1.0), "x={} L={}", x, l);
        }
    }

    #[test]
    fn test_sum_of_roots() {
        // Trace of the Jacobi matrix: sum of (2k+1) for k < p = p².
        let p = 25;
        let sum: f64 = laguerre_roots(p).unwrap().iter().sum();
        assert!((sum - (p * p) as f64).abs() < 1e-8);
    }

    #[test]
    fn test_critical_points_interlace_roots() {
        let p = 6;
        let roots = laguerre_roots(p).unwrap();
        let crit = critical_points(p).unwrap();
        assert_eq!(crit.len(), p as usize);
        for k in 0..roots.len() - 1 {
            assert!(roots[k] < crit[k] && crit[k] < roots[k + 1]);
        }
        assert!(crit[crit.len() - 1] > roots[roots.len() - 1]);
    }

    #[test]
    fn test_critical_point_for_p_one() {
        // f = (1-x) e^{-x/2}, f' = 0 at x = 3.
        let crit = critical_points(1).unwrap();
        assert_eq!(crit.len(), 1);
        assert!((crit[0] - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_high_degree_stays_finite() {
        let roots = laguerre_roots(100).unwrap();
        assert_eq!(roots.len(), 100);
        assert!(roots.iter().all(|x| x.is_finite() && *x > 0.0));
        for x in [0.0, 10.0, 50.0, 200.0] {
            assert!(laguerre(100, x).is_finite());
        }
    }
}
