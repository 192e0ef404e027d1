use crate::error::{RegressionError, Result};
use crate::linalg::center_columns;
use crate::{Matrix, Vector};

/// Coefficients and intercept produced by a fit.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearFit {
    coefficients: Vector,
    intercept: f64,
}

impl LinearFit {
    pub fn new(coefficients: Vector, intercept: f64) -> Self {
        Self {
            coefficients,
            intercept,
        }
    }

    pub fn coefficients(&self) -> &Vector {
        &self.coefficients
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    pub fn predict(&self, x: &Matrix) -> Result<Vector> {
        if x.ncols() != self.n_features() {
            return Err(RegressionError::mismatch(
                "predict features",
                self.n_features(),
                x.ncols(),
            ));
        }

        Ok(x.dot(&self.coefficients) + self.intercept)
    }
}

/// Shared capability of every linear estimator.
///
/// Implementors only provide [`fit`](Regressor::fit) and
/// [`fitted`](Regressor::fitted); prediction and the parameter accessors go
/// through the stored [`LinearFit`].
pub trait Regressor {
    /// Fits the model, replacing any previous fit.
    fn fit(&mut self, x: &Matrix, y: &Vector) -> Result<()>;

    fn fitted(&self) -> Option<&LinearFit>;

    fn predict(&self, x: &Matrix) -> Result<Vector> {
        self.fitted().ok_or(RegressionError::Unfitted)?.predict(x)
    }

    fn coefficients(&self) -> Result<&Vector> {
        self.fitted()
            .map(LinearFit::coefficients)
            .ok_or(RegressionError::Unfitted)
    }

    fn intercept(&self) -> Result<f64> {
        self.fitted()
            .map(LinearFit::intercept)
            .ok_or(RegressionError::Unfitted)
    }

    /// R² of the predictions for `x` against `y`.
    fn score(&self, x: &Matrix, y: &Vector) -> Result<f64> {
        let y_pred = self.predict(x)?;
        crate::metrics::r2_score(y, &y_pred)
    }
}

pub(crate) fn check_training_data(x: &Matrix, y: &Vector) -> Result<()> {
    if x.nrows() != y.len() {
        return Err(RegressionError::mismatch("fit samples", x.nrows(), y.len()));
    }

    if x.nrows() == 0 || x.ncols() == 0 {
        return Err(RegressionError::EmptyDataset);
    }

    Ok(())
}

/// Runs `solver` on centered data when `fit_intercept` is set and recovers the
/// intercept from the column means; otherwise solves on raw data with a zero
/// intercept.
pub(crate) fn fit_linear<F>(
    x: &Matrix,
    y: &Vector,
    fit_intercept: bool,
    solver: F,
) -> Result<LinearFit>
where
    F: FnOnce(&Matrix, &Vector) -> Result<Vector>,
{
    check_training_data(x, y)?;

    if !fit_intercept {
        return Ok(LinearFit::new(solver(x, y)?, 0.0));
    }

    let (x_means, x_centered) = center_columns(x);
    let y_mean = y.mean().ok_or(RegressionError::EmptyDataset)?;
    let y_centered = y - y_mean;

    let coefficients = solver(&x_centered, &y_centered)?;
    let intercept = y_mean - coefficients.dot(&x_means);

    Ok(LinearFit::new(coefficients, intercept))
}

pub(crate) fn check_alpha(alpha: f64) -> Result<()> {
    if alpha.is_finite() && alpha >= 0.0 {
        Ok(())
    } else {
        Err(RegressionError::InvalidParameter(format!(
            "alpha must be non-negative and finite, got {}",
            alpha
        )))
    }
}
