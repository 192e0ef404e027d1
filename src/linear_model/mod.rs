//! Linear models for regression.
//!
//! This module provides:
//! - `LinearRegression`: ordinary least squares
//! - `Ridge`: L2-penalized least squares
//! - `Lasso`: L1-penalized least squares
//! - `ElasticNet`: mixed L1/L2 penalty
//! - `linregress`: closed-form simple regression over two slices
//!
//! Every estimator implements [`Regressor`] and starts out unfitted; `fit`
//! stores a [`LinearFit`] that `predict`, `coefficients` and `intercept` read.
//!
//! # Examples
//!
//! ## Linear Regression
//! ```rust
//! use linreg::{LinearRegression, Regressor};
//! use ndarray::array;
//!
//! let x = array![[1.0], [2.0], [3.0]];
//! let y = array![2.0, 4.0, 6.0];
//!
//! let mut model = LinearRegression::new();
//! model.fit(&x, &y).unwrap();
//! let predictions = model.predict(&x).unwrap();
//! assert!((predictions[2] - 6.0).abs() < 1e-10);
//! ```
//!
//! ## Lasso
//! ```rust
//! use linreg::{Lasso, Regressor};
//! use ndarray::array;
//!
//! let x = array![[1.0, 0.0], [2.0, 0.0], [3.0, 0.0], [4.0, 0.0]];
//! let y = array![2.0, 4.0, 6.0, 8.0];
//!
//! let mut model = Lasso::new().alpha(0.1);
//! model.fit(&x, &y).unwrap();
//! assert_eq!(model.coefficients().unwrap()[1], 0.0);
//! ```

mod base;
mod coordinate_descent;
mod elastic_net;
mod lasso;
mod linear_regression;
mod ridge;
mod simple;

pub use base::{LinearFit, Regressor};
pub use elastic_net::ElasticNet;
pub use lasso::Lasso;
pub use linear_regression::LinearRegression;
pub use ridge::Ridge;
pub use simple::{SimpleRegression, linregress};
