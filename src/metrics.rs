use crate::Vector;
use crate::error::{RegressionError, Result};

fn check_lengths(y_true: &Vector, y_pred: &Vector) -> Result<()> {
    if y_true.len() != y_pred.len() {
        return Err(RegressionError::mismatch(
            "metric inputs",
            y_true.len(),
            y_pred.len(),
        ));
    }
    if y_true.is_empty() {
        return Err(RegressionError::EmptyDataset);
    }
    Ok(())
}

pub fn mean_squared_error(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    check_lengths(y_true, y_pred)?;

    let diff = y_true - y_pred;
    Ok(diff.mapv(|x| x * x).sum() / diff.len() as f64)
}

pub fn mean_absolute_error(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    check_lengths(y_true, y_pred)?;

    let diff = y_true - y_pred;
    Ok(diff.mapv(f64::abs).sum() / diff.len() as f64)
}

/// Coefficient of determination, `1 − SS_res / SS_tot`.
///
/// Returns [`RegressionError::DegenerateScore`] when `y_true` is constant,
/// since `SS_tot` is then zero.
pub fn r2_score(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    check_lengths(y_true, y_pred)?;

    let y_mean = y_true.sum() / y_true.len() as f64;
    let ss_res = (y_true - y_pred).mapv(|x| x * x).sum();
    let ss_tot = y_true.mapv(|x| (x - y_mean) * (x - y_mean)).sum();

    if ss_tot == 0.0 {
        return Err(RegressionError::DegenerateScore);
    }

    Ok(1.0 - ss_res / ss_tot)
}
