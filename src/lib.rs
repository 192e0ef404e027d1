//! Train/test evaluation of linear regression estimators.
//!
//! The crate fits ordinary least squares and its ridge, lasso and elastic-net
//! variants on a [`Dataset`], scores them with R², and compares them through
//! k-fold cross-validation over one shared fold partition.
//!
//! ```rust
//! use linreg::{Dataset, EstimatorKind, PipelineConfig, pipeline};
//! use ndarray::array;
//!
//! let x = array![[1.0], [2.0], [3.0], [4.0], [5.0], [6.0], [7.0], [8.0]];
//! let y = array![5.0, 7.0, 9.0, 11.0, 13.0, 15.0, 17.0, 19.0];
//! let dataset = Dataset::new(x, y).unwrap();
//!
//! let config = PipelineConfig::default().seed(7);
//! let kind = EstimatorKind::LinearRegression;
//! let report = pipeline::evaluate_holdout(&kind, &dataset, &config).unwrap();
//! assert!((report.coefficients[0] - 2.0).abs() < 1e-8);
//! ```

pub use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

pub mod dataset;
pub mod error;
pub mod estimator;
pub mod linalg;
pub mod linear_model;
pub mod metrics;
pub mod model_selection;
pub mod pipeline;

pub use dataset::Dataset;
pub use error::{RegressionError, Result};
pub use estimator::EstimatorKind;
pub use linear_model::{
    ElasticNet, Lasso, LinearFit, LinearRegression, Regressor, Ridge, SimpleRegression, linregress,
};
pub use model_selection::{Fold, KFold, SplitIndices};
pub use pipeline::{CrossValidationScores, EstimatorComparison, HoldoutReport, PipelineConfig};

pub type Vector = Array1<f64>;
pub type Matrix = Array2<f64>;
