//! Hold-out evaluation and k-fold comparison of estimators.
//!
//! Every entry point is a pure function of its inputs and a
//! [`PipelineConfig`]; nothing is cached between calls. In a comparison the
//! fold partition is computed once and shared by every estimator, so their
//! scores are directly comparable.

use log::{debug, info, warn};

use crate::Vector;
use crate::dataset::Dataset;
use crate::error::{RegressionError, Result};
use crate::estimator::EstimatorKind;
use crate::metrics::r2_score;
use crate::model_selection::{Fold, KFold, train_test_split_seeded};

/// Options recognised by the pipeline.
#[derive(Clone, Debug, PartialEq)]
pub struct PipelineConfig {
    /// Held-out fraction for the train/test split.
    pub test_size: f64,
    /// Seeds both the split shuffle and the fold shuffle.
    pub seed: u64,
    pub n_splits: usize,
    pub shuffle: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            test_size: 0.25,
            seed: 11,
            n_splits: 10,
            shuffle: true,
        }
    }
}

impl PipelineConfig {
    pub fn test_size(mut self, test_size: f64) -> Self {
        self.test_size = test_size;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn n_splits(mut self, n_splits: usize) -> Self {
        self.n_splits = n_splits;
        self
    }

    pub fn shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Checks every option.
    pub fn validate(&self) -> Result<()> {
        self.validate_holdout()?;
        self.validate_kfold()
    }

    /// Checks the options a hold-out run uses; fold settings are ignored.
    pub fn validate_holdout(&self) -> Result<()> {
        if !(self.test_size > 0.0 && self.test_size < 1.0) {
            return Err(RegressionError::InvalidSplit(format!(
                "test_size must be in (0, 1), got {}",
                self.test_size
            )));
        }
        Ok(())
    }

    /// Checks the options a k-fold comparison uses.
    pub fn validate_kfold(&self) -> Result<()> {
        if self.n_splits < 2 {
            return Err(RegressionError::InvalidSplit(format!(
                "k-fold needs at least 2 folds, got {}",
                self.n_splits
            )));
        }
        Ok(())
    }

    pub fn kfold(&self) -> KFold {
        KFold::new(self.n_splits)
            .shuffle(self.shuffle)
            .seed(self.seed)
    }
}

/// Outcome of fitting on the training subset and scoring on the test subset.
#[derive(Clone, Debug)]
pub struct HoldoutReport {
    pub estimator: EstimatorKind,
    pub coefficients: Vector,
    pub intercept: f64,
    pub score: f64,
    pub expected: Vector,
    pub predicted: Vector,
    pub n_train: usize,
    pub n_test: usize,
}

pub fn evaluate_holdout(
    kind: &EstimatorKind,
    dataset: &Dataset,
    config: &PipelineConfig,
) -> Result<HoldoutReport> {
    config.validate_holdout()?;

    let (train, test) = train_test_split_seeded(dataset, config.test_size, config.seed)?;

    let mut model = kind.build();
    model.fit(train.features(), train.targets())?;

    let predicted = model.predict(test.features())?;
    let score = r2_score(test.targets(), &predicted)?;

    let n_train = train.n_samples();
    let n_test = test.n_samples();
    let (_, expected) = test.into_parts();
    info!(
        "{} hold-out R² = {:.4} ({} train / {} test)",
        kind, score, n_train, n_test
    );

    Ok(HoldoutReport {
        estimator: *kind,
        coefficients: model.coefficients()?.clone(),
        intercept: model.intercept()?,
        score,
        expected,
        predicted,
        n_train,
        n_test,
    })
}

/// Per-fold R² scores, in fold order.
#[derive(Clone, Debug, PartialEq)]
pub struct CrossValidationScores {
    pub scores: Vec<f64>,
}

impl CrossValidationScores {
    pub fn mean(&self) -> f64 {
        self.scores.iter().sum::<f64>() / self.scores.len() as f64
    }

    /// Population standard deviation of the fold scores.
    pub fn std(&self) -> f64 {
        let mean = self.mean();
        let var = self
            .scores
            .iter()
            .map(|s| (s - mean) * (s - mean))
            .sum::<f64>()
            / self.scores.len() as f64;
        var.sqrt()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// Trains a fresh `kind` estimator per fold and scores it on the held-out
/// fold. The first failing fold aborts the run.
pub fn cross_val_score(
    kind: &EstimatorKind,
    dataset: &Dataset,
    folds: &[Fold],
) -> Result<CrossValidationScores> {
    if folds.is_empty() {
        return Err(RegressionError::InvalidSplit("no folds to evaluate".to_string()));
    }

    let mut scores = Vec::with_capacity(folds.len());
    for (i, fold) in folds.iter().enumerate() {
        let train = dataset.select(&fold.train)?;
        let test = dataset.select(&fold.test)?;

        let mut model = kind.build();
        model.fit(train.features(), train.targets())?;
        let score = model.score(test.features(), test.targets())?;

        debug!("{} fold {}: R² = {:.4}", kind, i, score);
        scores.push(score);
    }

    Ok(CrossValidationScores { scores })
}

/// One estimator's row in a comparison. A failed evaluation keeps its error
/// instead of a substitute score.
#[derive(Debug)]
pub struct EstimatorComparison {
    pub estimator: EstimatorKind,
    pub outcome: Result<CrossValidationScores>,
}

impl EstimatorComparison {
    pub fn mean_score(&self) -> Option<f64> {
        self.outcome.as_ref().ok().map(CrossValidationScores::mean)
    }
}

/// Cross-validates every kind against one shared fold partition.
pub fn compare_estimators(
    kinds: &[EstimatorKind],
    dataset: &Dataset,
    kfold: &KFold,
) -> Result<Vec<EstimatorComparison>> {
    let folds = kfold.folds(dataset.n_samples())?;
    debug!(
        "comparing {} estimators over {} folds of {} samples",
        kinds.len(),
        folds.len(),
        dataset.n_samples()
    );

    Ok(kinds
        .iter()
        .map(|kind| {
            let outcome = cross_val_score(kind, dataset, &folds);
            match &outcome {
                Ok(scores) => info!(
                    "{}: mean R² = {:.4} (std {:.4})",
                    kind,
                    scores.mean(),
                    scores.std()
                ),
                Err(e) => warn!("{}: evaluation failed: {}", kind, e),
            }
            EstimatorComparison {
                estimator: *kind,
                outcome,
            }
        })
        .collect())
}

/// [`compare_estimators`] with folds built from `config`.
pub fn compare(
    kinds: &[EstimatorKind],
    dataset: &Dataset,
    config: &PipelineConfig,
) -> Result<Vec<EstimatorComparison>> {
    config.validate_kfold()?;
    compare_estimators(kinds, dataset, &config.kfold())
}
