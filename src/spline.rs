//! Cubic spline interpolation following "Computer Methods for Mathematical Computations" by
//! Forsythe, Malcolm and Moler.
//!
//! The spline through the knots `(x[i], y[i])` is evaluated on the interval `x[i] <= u < x[i+1]`
//! as `y[i] + b[i]*dx + c[i]*dx^2 + d[i]*dx^3` where `dx = u - x[i]`. The end conditions match the
//! third derivative at each end to the third divided difference of the four nearest knots, so
//! cubic data is reproduced exactly.

use crate::algorithms::knot_interval;
use crate::errors::{NacaError, Result};

/// The linear, quadratic and cubic coefficients of a fitted spline, one entry per knot.
#[derive(Debug, Clone, PartialEq)]
pub struct SplineCoefficients {
    pub b: Vec<f64>,
    pub c: Vec<f64>,
    pub d: Vec<f64>,
}

/// Computes the spline coefficients for the knots `x` (strictly increasing) and `y`. Both slices
/// must have the same, non-zero length. With fewer than three knots the result is a straight line
/// (or a constant for a single knot).
pub fn fit(x: &[f64], y: &[f64]) -> SplineCoefficients {
    let n = x.len().min(y.len());
    let mut b = vec![0.0; n];
    let mut c = vec![0.0; n];
    let mut d = vec![0.0; n];

    if n < 3 {
        if n == 2 {
            b[0] = (y[1] - y[0]) / (x[1] - x[0]);
            b[1] = b[0];
        }
        return SplineCoefficients { b, c, d };
    }

    // Tridiagonal system: b is the diagonal, d the off-diagonal and c the right hand side
    d[0] = x[1] - x[0];
    c[1] = (y[1] - y[0]) / d[0];
    for i in 1..n - 1 {
        d[i] = x[i + 1] - x[i];
        b[i] = 2.0 * (d[i - 1] + d[i]);
        c[i + 1] = (y[i + 1] - y[i]) / d[i];
        c[i] = c[i + 1] - c[i];
    }

    b[0] = -d[0];
    b[n - 1] = -d[n - 2];
    c[0] = 0.0;
    c[n - 1] = 0.0;
    if n > 3 {
        c[0] = c[2] / (x[3] - x[1]) - c[1] / (x[2] - x[0]);
        c[n - 1] = c[n - 2] / (x[n - 1] - x[n - 3]) - c[n - 3] / (x[n - 2] - x[n - 4]);
        c[0] = c[0] * d[0] * d[0] / (x[3] - x[0]);
        c[n - 1] = -c[n - 1] * d[n - 2] * d[n - 2] / (x[n - 1] - x[n - 4]);
    }

    // Forward elimination
    for i in 1..n {
        let t = d[i - 1] / b[i - 1];
        b[i] -= t * d[i - 1];
        c[i] -= t * c[i - 1];
    }

    // Back substitution, after which c holds sigma
    c[n - 1] /= b[n - 1];
    for i in (0..n - 1).rev() {
        c[i] = (c[i] - d[i] * c[i + 1]) / b[i];
    }

    b[n - 1] = (y[n - 1] - y[n - 2]) / d[n - 2] + d[n - 2] * (c[n - 2] + 2.0 * c[n - 1]);
    for i in 0..n - 1 {
        b[i] = (y[i + 1] - y[i]) / d[i] - d[i] * (c[i + 1] + 2.0 * c[i]);
        d[i] = (c[i + 1] - c[i]) / d[i];
        c[i] *= 3.0;
    }
    c[n - 1] *= 3.0;
    d[n - 1] = d[n - 2];

    SplineCoefficients { b, c, d }
}

/// Evaluates a fitted spline at `u`. Values outside of the knot range are extrapolated from the
/// nearest end interval.
pub fn evaluate(u: f64, x: &[f64], y: &[f64], coef: &SplineCoefficients) -> f64 {
    if x.len() <= 1 {
        return y[0];
    }

    let i = knot_interval(x, u);
    let dx = u - x[i];
    y[i] + dx * (coef.b[i] + dx * (coef.c[i] + dx * coef.d[i]))
}

/// Evaluates a fitted spline and its first derivative at `u`, returned as `(value, slope)`.
pub fn evaluate_with_derivative(
    u: f64,
    x: &[f64],
    y: &[f64],
    coef: &SplineCoefficients,
) -> (f64, f64) {
    if x.len() <= 1 {
        return (y[0], 0.0);
    }

    let i = knot_interval(x, u);
    let dx = u - x[i];
    let value = y[i] + dx * (coef.b[i] + dx * (coef.c[i] + dx * coef.d[i]));
    let slope = coef.b[i] + dx * (2.0 * coef.c[i] + 3.0 * dx * coef.d[i]);
    (value, slope)
}

/// A spline which owns its knots together with the fitted coefficients.
#[derive(Debug, Clone)]
pub struct CubicSpline {
    x: Vec<f64>,
    y: Vec<f64>,
    coef: SplineCoefficients,
}

impl CubicSpline {
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        if x.is_empty() || x.len() != y.len() {
            return Err(NacaError::NotEnoughPoints);
        }

        let coef = fit(&x, &y);
        Ok(CubicSpline { x, y, coef })
    }

    pub fn knots(&self) -> (&[f64], &[f64]) {
        (&self.x, &self.y)
    }

    pub fn coefficients(&self) -> &SplineCoefficients {
        &self.coef
    }

    pub fn value(&self, u: f64) -> f64 {
        evaluate(u, &self.x, &self.y, &self.coef)
    }

    pub fn value_and_slope(&self, u: f64) -> (f64, f64) {
        evaluate_with_derivative(u, &self.x, &self.y, &self.coef)
    }

    /// The first derivative of the spline at each of its own knots
    pub fn knot_slopes(&self) -> Vec<f64> {
        self.x.iter().map(|u| self.value_and_slope(*u).1).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::prelude::*;
    use test_case::test_case;

    fn cubic(x: f64) -> f64 {
        x * x * x - 2.0 * x + 1.0
    }

    fn cubic_slope(x: f64) -> f64 {
        3.0 * x * x - 2.0
    }

    fn uneven_knots() -> Vec<f64> {
        vec![-1.0, -0.7, -0.2, 0.0, 0.35, 0.5, 1.1, 1.3, 2.0]
    }

    #[test]
    fn test_passes_through_knots() {
        let x: Vec<f64> = (0..20).map(|i| i as f64 * 0.15).collect();
        let y: Vec<f64> = x.iter().map(|v| v.sin()).collect();
        let spline = CubicSpline::new(x.clone(), y.clone()).unwrap();

        for (xi, yi) in x.iter().zip(y.iter()) {
            assert_relative_eq!(*yi, spline.value(*xi), epsilon = 1e-9);
        }
    }

    #[test_case(-0.85)]
    #[test_case(-0.1)]
    #[test_case(0.42)]
    #[test_case(1.2)]
    #[test_case(1.75)]
    fn test_reproduces_cubic(u: f64) {
        let x = uneven_knots();
        let y: Vec<f64> = x.iter().map(|v| cubic(*v)).collect();
        let spline = CubicSpline::new(x, y).unwrap();

        let (value, slope) = spline.value_and_slope(u);
        assert_relative_eq!(cubic(u), value, epsilon = 1e-9);
        assert_relative_eq!(cubic_slope(u), slope, epsilon = 1e-8);
    }

    #[test]
    fn test_free_functions_agree_with_wrapper() {
        let x = uneven_knots();
        let y: Vec<f64> = x.iter().map(|v| v.exp()).collect();
        let coef = fit(&x, &y);
        let spline = CubicSpline::new(x.clone(), y.clone()).unwrap();

        assert_eq!(&coef, spline.coefficients());
        for u in [-0.5, 0.1, 0.9, 1.9] {
            assert_eq!(spline.value(u), evaluate(u, &x, &y, &coef));
            assert_eq!(spline.value_and_slope(u), evaluate_with_derivative(u, &x, &y, &coef));
        }
    }

    #[test_case(0.5, 2.0)]
    #[test_case(-1.0, -1.0)]
    #[test_case(3.0, 7.0)]
    fn test_two_knots_are_linear(u: f64, e: f64) {
        let spline = CubicSpline::new(vec![0.0, 1.0], vec![1.0, 3.0]).unwrap();
        let (value, slope) = spline.value_and_slope(u);
        assert_relative_eq!(e, value, epsilon = 1e-12);
        assert_relative_eq!(2.0, slope, epsilon = 1e-12);
    }

    #[test]
    fn test_single_knot_is_constant() {
        let spline = CubicSpline::new(vec![0.3], vec![4.0]).unwrap();
        assert_eq!((4.0, 0.0), spline.value_and_slope(12.0));
    }

    #[test]
    fn test_three_knots() {
        let x = vec![0.0, 1.0, 3.0];
        let y = vec![1.0, 0.0, 2.0];
        let spline = CubicSpline::new(x.clone(), y.clone()).unwrap();
        for (xi, yi) in x.iter().zip(y.iter()) {
            assert_relative_eq!(*yi, spline.value(*xi), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_monotone_data_has_positive_slopes() {
        let x: Vec<f64> = (1..30).map(|i| i as f64 * 0.1).collect();
        let y: Vec<f64> = x.iter().map(|v| v.sqrt()).collect();
        let spline = CubicSpline::new(x.clone(), y.clone()).unwrap();
        let slopes = spline.knot_slopes();

        for i in 2..x.len() - 2 {
            let fd = (y[i + 1] - y[i - 1]) / (x[i + 1] - x[i - 1]);
            assert!(slopes[i] > 0.0);
            assert_relative_eq!(fd, slopes[i], epsilon = 5e-2);
        }
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(CubicSpline::new(vec![], vec![]).is_err());
        assert!(CubicSpline::new(vec![0.0, 1.0], vec![1.0]).is_err());
    }

    #[test]
    fn test_random_knots_reproduced() {
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let count: usize = rng.gen_range(4..100);
            let mut x = vec![rng.gen_range(-5.0..5.0)];
            for _ in 1..count {
                let last = *x.last().unwrap();
                x.push(last + rng.gen_range(0.1..1.0));
            }
            let y: Vec<f64> = x.iter().map(|_| rng.gen_range(-1.0..1.0)).collect();
            let spline = CubicSpline::new(x.clone(), y.clone()).unwrap();

            for (xi, yi) in x.iter().zip(y.iter()) {
                assert_relative_eq!(*yi, spline.value(*xi), epsilon = 1e-8);
            }
        }
    }
}
