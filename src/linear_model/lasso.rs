use log::debug;

use super::base::{LinearFit, Regressor, check_alpha, fit_linear};
use super::coordinate_descent::CoordinateDescent;
use crate::error::Result;
use crate::{Matrix, Vector};

/// Least squares with an L1 penalty, fitted by coordinate descent.
///
/// Minimizes `(1/2n)‖y − Xβ − b‖² + α‖β‖₁`. Large `alpha` drives
/// coefficients of weak features to exactly zero.
#[derive(Clone, Debug)]
pub struct Lasso {
    fitted: Option<LinearFit>,
    alpha: f64,
    fit_intercept: bool,
    max_iter: usize,
    tolerance: f64,
}

impl Lasso {
    pub const DEFAULT_ALPHA: f64 = 1.0;

    pub fn new() -> Self {
        Self {
            fitted: None,
            alpha: Self::DEFAULT_ALPHA,
            fit_intercept: true,
            max_iter: 1000,
            tolerance: 1e-4,
        }
    }

    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn fit_intercept(mut self, fit_intercept: bool) -> Self {
        self.fit_intercept = fit_intercept;
        self
    }

    pub fn max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn get_alpha(&self) -> f64 {
        self.alpha
    }
}

impl Regressor for Lasso {
    fn fit(&mut self, x: &Matrix, y: &Vector) -> Result<()> {
        check_alpha(self.alpha)?;

        let solver = CoordinateDescent {
            l1: self.alpha,
            l2: 0.0,
            max_iter: self.max_iter,
            tolerance: self.tolerance,
        };

        let mut n_iter = 0;
        let mut converged = false;
        let fit = fit_linear(x, y, self.fit_intercept, |x, y| {
            let solution = solver.solve(x, y);
            n_iter = solution.n_iter;
            converged = solution.converged;
            Ok(solution.coefficients)
        })?;

        debug!(
            "Lasso(alpha={}) fitted in {} iterations (converged: {}): coefficients={}, intercept={:.6}",
            self.alpha,
            n_iter,
            converged,
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

impl Default for Lasso {
    fn default() -> Self {
        Self::new()
    }
}
