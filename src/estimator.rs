use std::fmt;

use crate::linear_model::{ElasticNet, Lasso, LinearRegression, Regressor, Ridge};

/// Closed set of estimators the pipeline knows how to build, each carrying
/// its own hyperparameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EstimatorKind {
    LinearRegression,
    Lasso { alpha: f64 },
    Ridge { alpha: f64 },
    ElasticNet { alpha: f64, l1_ratio: f64 },
}

impl EstimatorKind {
    pub fn lasso() -> Self {
        EstimatorKind::Lasso {
            alpha: Lasso::DEFAULT_ALPHA,
        }
    }

    pub fn ridge() -> Self {
        EstimatorKind::Ridge {
            alpha: Ridge::DEFAULT_ALPHA,
        }
    }

    pub fn elastic_net() -> Self {
        EstimatorKind::ElasticNet {
            alpha: ElasticNet::DEFAULT_ALPHA,
            l1_ratio: ElasticNet::DEFAULT_L1_RATIO,
        }
    }

    /// The four estimators with default hyperparameters, in comparison order.
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::elastic_net(),
            Self::lasso(),
            EstimatorKind::LinearRegression,
            Self::ridge(),
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            EstimatorKind::LinearRegression => "LinearRegression",
            EstimatorKind::Lasso { .. } => "Lasso",
            EstimatorKind::Ridge { .. } => "Ridge",
            EstimatorKind::ElasticNet { .. } => "ElasticNet",
        }
    }

    /// A fresh, unfitted estimator.
    pub fn build(&self) -> Box<dyn Regressor> {
        match *self {
            EstimatorKind::LinearRegression => Box::new(LinearRegression::new()),
            EstimatorKind::Lasso { alpha } => Box::new(Lasso::new().alpha(alpha)),
            EstimatorKind::Ridge { alpha } => Box::new(Ridge::new().alpha(alpha)),
            EstimatorKind::ElasticNet { alpha, l1_ratio } => {
                Box::new(ElasticNet::new().alpha(alpha).l1_ratio(l1_ratio))
            }
        }
    }
}

impl fmt::Display for EstimatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EstimatorKind::LinearRegression => write!(f, "LinearRegression"),
            EstimatorKind::Lasso { alpha } => write!(f, "Lasso(alpha={})", alpha),
            EstimatorKind::Ridge { alpha } => write!(f, "Ridge(alpha={})", alpha),
            EstimatorKind::ElasticNet { alpha, l1_ratio } => {
                write!(f, "ElasticNet(alpha={}, l1_ratio={})", alpha, l1_ratio)
            }
        }
    }
}
