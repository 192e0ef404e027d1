//! Train/test splitting and k-fold assignment.
//!
//! Every shuffle draws from a caller-supplied [`Rng`]; the `*_seeded` helpers
//! and [`KFold`] build a [`StdRng`] from an explicit seed, so identical seeds
//! always reproduce identical memberships.

use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::dataset::Dataset;
use crate::error::{RegressionError, Result};

/// Row indices of a train/test partition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitIndices {
    pub train: Vec<usize>,
    pub test: Vec<usize>,
}

/// Partitions `0..n_samples` into train and test indices.
///
/// The test subset holds `ceil(test_size * n_samples)` samples.
pub fn split_indices<R: Rng + ?Sized>(
    n_samples: usize,
    test_size: f64,
    rng: &mut R,
) -> Result<SplitIndices> {
    if !(test_size > 0.0 && test_size < 1.0) {
        return Err(RegressionError::InvalidSplit(format!(
            "test_size must be in (0, 1), got {}",
            test_size
        )));
    }

    let n_test = (n_samples as f64 * test_size).ceil() as usize;
    let n_train = n_samples.saturating_sub(n_test);

    if n_test == 0 || n_train == 0 {
        return Err(RegressionError::InvalidSplit(format!(
            "test_size={} on {} samples leaves {} train and {} test samples",
            test_size, n_samples, n_train, n_test
        )));
    }

    let mut indices: Vec<usize> = (0..n_samples).collect();
    indices.shuffle(rng);

    let train = indices.split_off(n_test);
    Ok(SplitIndices {
        train,
        test: indices,
    })
}

pub fn train_test_split<R: Rng + ?Sized>(
    dataset: &Dataset,
    test_size: f64,
    rng: &mut R,
) -> Result<(Dataset, Dataset)> {
    let split = split_indices(dataset.n_samples(), test_size, rng)?;
    debug!(
        "split {} samples into {} train / {} test",
        dataset.n_samples(),
        split.train.len(),
        split.test.len()
    );
    Ok((dataset.select(&split.train)?, dataset.select(&split.test)?))
}

pub fn train_test_split_seeded(
    dataset: &Dataset,
    test_size: f64,
    seed: u64,
) -> Result<(Dataset, Dataset)> {
    let mut rng = StdRng::seed_from_u64(seed);
    train_test_split(dataset, test_size, &mut rng)
}

/// One cross-validation round: `test` is the held-out fold, `train` the rest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fold {
    pub train: Vec<usize>,
    pub test: Vec<usize>,
}

/// K-fold assignment.
///
/// The first `n % k` folds hold one extra sample. Without shuffling, fold `i`
/// is a contiguous block of rows.
#[derive(Clone, Debug)]
pub struct KFold {
    n_splits: usize,
    shuffle: bool,
    seed: u64,
}

impl KFold {
    pub fn new(n_splits: usize) -> Self {
        Self {
            n_splits,
            shuffle: true,
            seed: 0,
        }
    }

    pub fn shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn n_splits(&self) -> usize {
        self.n_splits
    }

    pub fn folds(&self, n_samples: usize) -> Result<Vec<Fold>> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        self.folds_with_rng(n_samples, &mut rng)
    }

    pub fn folds_with_rng<R: Rng + ?Sized>(
        &self,
        n_samples: usize,
        rng: &mut R,
    ) -> Result<Vec<Fold>> {
        let k = self.n_splits;
        if k < 2 {
            return Err(RegressionError::InvalidSplit(format!(
                "k-fold needs at least 2 folds, got {}",
                k
            )));
        }
        if k > n_samples {
            return Err(RegressionError::InvalidSplit(format!(
                "cannot build {} folds from {} samples",
                k, n_samples
            )));
        }

        let mut indices: Vec<usize> = (0..n_samples).collect();
        if self.shuffle {
            indices.shuffle(rng);
        }

        let base = n_samples / k;
        let extra = n_samples % k;

        let mut folds = Vec::with_capacity(k);
        let mut start = 0;
        for i in 0..k {
            let size = base + usize::from(i < extra);
            let end = start + size;

            let test = indices[start..end].to_vec();
            let train = indices[..start]
                .iter()
                .chain(&indices[end..])
                .copied()
                .collect();

            folds.push(Fold { train, test });
            start = end;
        }

        Ok(folds)
    }
}

impl Default for KFold {
    fn default() -> Self {
        Self::new(10)
    }
}
