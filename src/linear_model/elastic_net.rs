use log::debug;

use super::base::{LinearFit, Regressor, check_alpha, fit_linear};
use super::coordinate_descent::CoordinateDescent;
use crate::error::{RegressionError, Result};
use crate::{Matrix, Vector};

/// Least squares with a mixed L1/L2 penalty, fitted by coordinate descent.
///
/// Minimizes `(1/2n)‖y − Xβ − b‖² + α·ρ‖β‖₁ + α(1 − ρ)/2·‖β‖²` where ρ is
/// `l1_ratio`. `l1_ratio = 1` is the lasso, `l1_ratio = 0` a (differently
/// scaled) ridge.
#[derive(Clone, Debug)]
pub struct ElasticNet {
    fitted: Option<LinearFit>,
    alpha: f64,
    l1_ratio: f64,
    fit_intercept: bool,
    max_iter: usize,
    tolerance: f64,
}

impl ElasticNet {
    pub const DEFAULT_ALPHA: f64 = 1.0;
    pub const DEFAULT_L1_RATIO: f64 = 0.5;

    pub fn new() -> Self {
        Self {
            fitted: None,
            alpha: Self::DEFAULT_ALPHA,
            l1_ratio: Self::DEFAULT_L1_RATIO,
            fit_intercept: true,
            max_iter: 1000,
            tolerance: 1e-4,
        }
    }

    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn l1_ratio(mut self, l1_ratio: f64) -> Self {
        self.l1_ratio = l1_ratio;
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

    pub fn get_l1_ratio(&self) -> f64 {
        self.l1_ratio
    }

    pub fn l1_penalty(&self) -> f64 {
        self.alpha * self.l1_ratio
    }

    pub fn l2_penalty(&self) -> f64 {
        self.alpha * (1.0 - self.l1_ratio)
    }

    fn check_params(&self) -> Result<()> {
        check_alpha(self.alpha)?;
        if !(0.0..=1.0).contains(&self.l1_ratio) {
            return Err(RegressionError::InvalidParameter(format!(
                "l1_ratio must be between 0 and 1, got {}",
                self.l1_ratio
            )));
        }
        Ok(())
    }
}

impl Regressor for ElasticNet {
    fn fit(&mut self, x: &Matrix, y: &Vector) -> Result<()> {
        self.check_params()?;

        let solver = CoordinateDescent {
            l1: self.l1_penalty(),
            l2: self.l2_penalty(),
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
            "ElasticNet(alpha={}, l1_ratio={}) fitted in {} iterations (converged: {}): coefficients={}, intercept={:.6}",
            self.alpha,
            self.l1_ratio,
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

impl Default for ElasticNet {
    fn default() -> Self {
        Self::new()
    }
}
