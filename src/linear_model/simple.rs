use crate::error::{RegressionError, Result};

/// Closed-form result of a one-variable least-squares line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimpleRegression {
    pub slope: f64,
    pub intercept: f64,
    /// Pearson correlation between `x` and `y`.
    pub r_value: f64,
}

impl SimpleRegression {
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    pub fn r_squared(&self) -> f64 {
        self.r_value * self.r_value
    }
}

/// Fits `y = slope · x + intercept` over paired samples.
pub fn linregress(x: &[f64], y: &[f64]) -> Result<SimpleRegression> {
    if x.len() != y.len() {
        return Err(RegressionError::mismatch("linregress samples", x.len(), y.len()));
    }
    if x.len() < 2 {
        return Err(RegressionError::EmptyDataset);
    }

    let n = x.len() as f64;
    let x_mean = x.iter().sum::<f64>() / n;
    let y_mean = y.iter().sum::<f64>() / n;

    let (sxx, syy, sxy) = x.iter().zip(y).fold((0.0, 0.0, 0.0), |(sxx, syy, sxy), (&xi, &yi)| {
        let dx = xi - x_mean;
        let dy = yi - y_mean;
        (sxx + dx * dx, syy + dy * dy, sxy + dx * dy)
    });

    if sxx == 0.0 {
        return Err(RegressionError::DegenerateScore);
    }

    let slope = sxy / sxx;
    let intercept = y_mean - slope * x_mean;
    let r_value = if syy == 0.0 {
        0.0
    } else {
        (sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0)
    };

    Ok(SimpleRegression {
        slope,
        intercept,
        r_value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linregress_exact_line() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y: Vec<f64> = x.iter().map(|v| 2.0 * v + 3.0).collect();

        let fit = linregress(&x, &y).unwrap();
        assert!((fit.slope - 2.0).abs() < 1e-12);
        assert!((fit.intercept - 3.0).abs() < 1e-12);
        assert!((fit.r_value - 1.0).abs() < 1e-12);
        assert!((fit.predict(10.0) - 23.0).abs() < 1e-12);
    }

    #[test]
    fn test_linregress_negative_correlation() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [4.1, 2.9, 2.2, 0.8];

        let fit = linregress(&x, &y).unwrap();
        assert!(fit.slope < 0.0);
        assert!(fit.r_value < -0.9);
        assert!(fit.r_squared() > 0.8);
    }

    #[test]
    fn test_linregress_errors() {
        assert!(matches!(
            linregress(&[1.0, 2.0], &[1.0]),
            Err(RegressionError::DimensionMismatch { .. })
        ));
        assert!(matches!(
            linregress(&[1.0], &[1.0]),
            Err(RegressionError::EmptyDataset)
        ));
        assert!(matches!(
            linregress(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0]),
            Err(RegressionError::DegenerateScore)
        ));
    }
}
