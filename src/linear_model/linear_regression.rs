use log::{debug, warn};
use ndarray::Axis;

use super::base::{LinearFit, Regressor, fit_linear};
use crate::error::{RegressionError, Result};
use crate::linalg::solve_gram;
use crate::{Matrix, Vector};

/// Relative ridge added to each diagonal entry of a singular Gram matrix.
const SINGULAR_JITTER: f64 = 1e-8;

/// Ordinary least squares.
#[derive(Clone, Debug)]
pub struct LinearRegression {
    fitted: Option<LinearFit>,
    fit_intercept: bool,
}

impl LinearRegression {
    pub fn new() -> Self {
        Self {
            fitted: None,
            fit_intercept: true,
        }
    }

    pub fn fit_intercept(mut self, fit_intercept: bool) -> Self {
        self.fit_intercept = fit_intercept;
        self
    }

    fn solve_least_squares(x: &Matrix, y: &Vector) -> Result<Vector> {
        let gram = x.t().dot(x);
        let rhs = x.t().dot(y);
        match solve_gram(&gram, &rhs) {
            Err(RegressionError::SingularMatrix) => Self::solve_rank_deficient(&gram, &rhs),
            other => other,
        }
    }

    /// Zero features get a zero coefficient. If the remaining system is still
    /// singular, each diagonal entry is inflated by [`SINGULAR_JITTER`].
    fn solve_rank_deficient(gram: &Matrix, rhs: &Vector) -> Result<Vector> {
        let n_features = gram.nrows();
        let active: Vec<usize> = (0..n_features).filter(|&j| gram[(j, j)] > 0.0).collect();

        let mut coefficients = Vector::zeros(n_features);
        if active.is_empty() {
            warn!("all features are zero, coefficients set to zero");
            return Ok(coefficients);
        }
        if active.len() < n_features {
            debug!(
                "{} zero features get a zero coefficient",
                n_features - active.len()
            );
        }

        let mut reduced = gram.select(Axis(0), &active).select(Axis(1), &active);
        let reduced_rhs = rhs.select(Axis(0), &active);
        let solution = match solve_gram(&reduced, &reduced_rhs) {
            Err(RegressionError::SingularMatrix) => {
                warn!("least-squares system is singular, retrying with a small ridge term");
                reduced
                    .diag_mut()
                    .mapv_inplace(|d| d * (1.0 + SINGULAR_JITTER));
                solve_gram(&reduced, &reduced_rhs)?
            }
            other => other?,
        };

        for (&j, &value) in active.iter().zip(solution.iter()) {
            coefficients[j] = value;
        }
        Ok(coefficients)
    }
}

impl Regressor for LinearRegression {
    fn fit(&mut self, x: &Matrix, y: &Vector) -> Result<()> {
        let fit = fit_linear(x, y, self.fit_intercept, Self::solve_least_squares)?;
        debug!(
            "LinearRegression fitted on {} samples: coefficients={}, intercept={:.6}",
            x.nrows(),
            fit.coefficients(),
            fit.intercept()
        );
        self.fitted = Some(fit);
        Ok(())
    }

    fn fitted(&self) -> Option<&LinearFit> {
        self.fitted.as_ref()
    }
}

impl Default for LinearRegression {
    fn default() -> Self {
        Self::new()
    }
}
