//! Ordinary least-squares line over an implicit sample axis.
//!
//! Fits `y[i] ≈ slope * i + intercept` for `i = 0..n`:
//!
//! ```text
//! slope     = SS_xy / SS_xx
//! intercept = ȳ - slope * x̄
//! r         = SS_xy / √(SS_xx · SS_yy)
//! stderr    = √(SS_res / (n - 2) / SS_xx)
//! ```
use ndarray::ArrayView1;
use crate::analysis::AnalysisError;
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    pub rvalue: f64,
    /// Standard error of the slope.
    pub stderr: f64,
}
pub fn linear_fit(y: ArrayView1<'_, f64>) -> Result<LinearFit, AnalysisError> {
    let n = y.len();
    if n < 2 {
        return Err(AnalysisError::invalid(format!(
            "regression requires at least 2 samples, got {n}"
        )));
    }
    // A flat finite series fits exactly; summing centred terms could leave rounding residue.
    let first = y[0];
    if first.is_finite() && y.iter().all(|&v| v == first) {
        return Ok(LinearFit {
            slope: 0.0,
            intercept: first,
            rvalue: 0.0,
            stderr: 0.0,
        });
    }
    let n_f = n as f64;
    let mean_x = (n_f - 1.0) / 2.0;
    let mean_y = y.sum() / n_f;
    let mut ss_xx = 0.0;
    let mut ss_xy = 0.0;
    let mut ss_yy = 0.0;
    for (i, &v) in y.iter().enumerate() {
        let dx = i as f64 - mean_x;
        let dy = v - mean_y;
        ss_xx += dx * dx;
        ss_xy += dx * dy;
        ss_yy += dy * dy;
    }
    let slope = ss_xy / ss_xx;
    let intercept = mean_y - slope * mean_x;
    let rvalue = if ss_yy > 0.0 {
        (ss_xy / (ss_xx * ss_yy).sqrt()).clamp(-1.0, 1.0)
    } else {
        0.0
    };
    let stderr = if n > 2 {
        let ss_res = (ss_yy - slope * ss_xy).max(0.0);
        (ss_res / (n_f - 2.0) / ss_xx).sqrt()
    } else {
        0.0
    };
    Ok(LinearFit {
        slope,
        intercept,
        rvalue,
        stderr,
    })
}
#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array1;
    #[test]
    fn recovers_exact_line() {
        let y: Array1<f64> = (0..50).map(|i| 3.0 - 0.25 * i as f64).collect();
        let fit = linear_fit(y.view()).unwrap();
        assert!((fit.slope + 0.25).abs() < 1e-12);
        assert!((fit.intercept - 3.0).abs() < 1e-12);
        assert!((fit.rvalue + 1.0).abs() < 1e-12);
        assert!(fit.stderr < 1e-6);
    }
    #[test]
    fn flat_series_has_zero_slope() {
        let y = Array1::from_elem(500, 0.1);
        let fit = linear_fit(y.view()).unwrap();
        assert_eq!(fit.slope, 0.0);
        assert_eq!(fit.intercept, 0.1);
        assert_eq!(fit.rvalue, 0.0);
    }
    #[test]
    fn noisy_series_matches_hand_computation() {
        // x = 0..4, y = [1, 3, 2, 5]: SS_xx = 5, SS_xy = 5.5
        let y = Array1::from(vec![1.0, 3.0, 2.0, 5.0]);
        let fit = linear_fit(y.view()).unwrap();
        assert!((fit.slope - 1.1).abs() < 1e-12);
        assert!((fit.intercept - 1.1).abs() < 1e-12);
        assert!(fit.rvalue > 0.0 && fit.rvalue < 1.0);
        assert!(fit.stderr > 0.0);
    }
    #[test]
    fn two_points_define_the_line() {
        let y = Array1::from(vec![4.0, 1.0]);
        let fit = linear_fit(y.view()).unwrap();
        assert_eq!(fit.slope, -3.0);
        assert_eq!(fit.stderr, 0.0);
    }
    #[test]
    fn single_point_is_rejected() {
        let y = Array1::from(vec![7.0]);
        assert!(matches!(
            linear_fit(y.view()),
            Err(AnalysisError::InvalidInput(_))
        ));
    }
}
