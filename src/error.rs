use thiserror::Error;

/// Errors raised while splitting, fitting, predicting or scoring.
#[derive(Debug, Error)]
pub enum RegressionError {
    /// A split or fold assignment would leave an empty subset.
    #[error("invalid split: {0}")]
    InvalidSplit(String),

    #[error("model not fitted, call fit() first")]
    Unfitted,

    #[error("dimension mismatch in {what}: expected {expected}, got {actual}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The expected values have no variance, so R² is undefined.
    #[error("R² is undefined: expected values have zero variance")]
    DegenerateScore,

    #[error("dataset must contain at least one sample and one feature")]
    EmptyDataset,

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("matrix is singular or nearly singular")]
    SingularMatrix,

    #[error("column `{0}` not found in CSV header")]
    MissingColumn(String),

    #[error("cannot parse `{value}` in column `{column}` on line {line} as a number")]
    Parse {
        column: String,
        line: u64,
        value: String,
    },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RegressionError>;

impl RegressionError {
    pub(crate) fn mismatch(what: &'static str, expected: usize, actual: usize) -> Self {
        RegressionError::DimensionMismatch {
            what,
            expected,
            actual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RegressionError::mismatch("predict features", 3, 2);
        assert_eq!(
            err.to_string(),
            "dimension mismatch in predict features: expected 3, got 2"
        );

        let err = RegressionError::InvalidSplit("test subset would be empty".to_string());
        assert_eq!(err.to_string(), "invalid split: test subset would be empty");

        assert_eq!(
            RegressionError::Unfitted.to_string(),
            "model not fitted, call fit() first"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.csv");
        let err: RegressionError = io.into();
        assert!(matches!(err, RegressionError::Io(_)));
    }
}
