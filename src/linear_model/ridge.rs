use log::debug;

use super::base::{LinearFit, Regressor, check_alpha, fit_linear};
use crate::error::Result;
use crate::linalg::solve_normal_equations;
use crate::{Matrix, Vector};

/// Least squares with an L2 penalty: minimizes `‖y − Xβ − b‖² + α‖β‖²`.
#[derive(Clone, Debug)]
pub struct Ridge {
    fitted: Option<LinearFit>,
    alpha: f64,
    fit_intercept: bool,
}

impl Ridge {
    pub const DEFAULT_ALPHA: f64 = 1.0;

    pub fn new() -> Self {
        Self {
            fitted: None,
            alpha: Self::DEFAULT_ALPHA,
            fit_intercept: true,
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

    pub fn get_alpha(&self) -> f64 {
        self.alpha
    }
}

impl Regressor for Ridge {
    fn fit(&mut self, x: &Matrix, y: &Vector) -> Result<()> {
        check_alpha(self.alpha)?;

        let alpha = self.alpha;
        let fit = fit_linear(x, y, self.fit_intercept, |x, y| {
            solve_normal_equations(x, y, alpha)
        })?;

        debug!(
            "Ridge(alpha={}) fitted on {} samples: coefficients={}, intercept={:.6}",
            alpha,
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

impl Default for Ridge {
    fn default() -> Self {
        Self::new()
    }
}
