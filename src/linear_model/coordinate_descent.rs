//! Cyclic coordinate descent for L1/L2-penalized least squares.
//!
//! Minimizes `(1/2n)‖y − Xβ‖² + l1‖β‖₁ + (l2/2)‖β‖²` on already-centered data.
//! The residual `y − Xβ` is kept up to date incrementally, so one sweep costs
//! `O(n_samples · n_features)`.

use log::warn;

use crate::{Matrix, Vector};

#[derive(Clone, Copy, Debug)]
pub(crate) struct CoordinateDescent {
    pub l1: f64,
    pub l2: f64,
    pub max_iter: usize,
    pub tolerance: f64,
}

#[derive(Debug)]
pub(crate) struct Solution {
    pub coefficients: Vector,
    pub n_iter: usize,
    pub converged: bool,
}

impl CoordinateDescent {
    pub fn solve(&self, x: &Matrix, y: &Vector) -> Solution {
        let n_features = x.ncols();
        let n_samples = x.nrows() as f64;

        let mut beta = Vector::zeros(n_features);
        let mut residual = y.clone();

        let norms: Vector = x
            .columns()
            .into_iter()
            .map(|col| col.dot(&col) / n_samples)
            .collect();

        let mut n_iter = 0;
        let mut converged = false;

        while n_iter < self.max_iter {
            n_iter += 1;
            let mut max_delta = 0.0_f64;
            let mut max_beta = 0.0_f64;

            for j in 0..n_features {
                if norms[j] == 0.0 {
                    continue;
                }

                let col = x.column(j);
                let old = beta[j];
                let rho = col.dot(&residual) / n_samples + norms[j] * old;
                let new = soft_threshold(rho, self.l1) / (norms[j] + self.l2);

                if new != old {
                    residual.scaled_add(old - new, &col);
                    beta[j] = new;
                }

                max_delta = max_delta.max((new - old).abs());
                max_beta = max_beta.max(new.abs());
            }

            if max_beta == 0.0 || max_delta <= self.tolerance * max_beta {
                converged = true;
                break;
            }
        }

        if !converged {
            warn!(
                "coordinate descent did not converge in {} iterations (l1={}, l2={})",
                self.max_iter, self.l1, self.l2
            );
        }

        Solution {
            coefficients: beta,
            n_iter,
            converged,
        }
    }
}

pub(crate) fn soft_threshold(z: f64, gamma: f64) -> f64 {
    if z > gamma {
        z - gamma
    } else if z < -gamma {
        z + gamma
    } else {
        0.0
    }
}
