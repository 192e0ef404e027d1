use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;
use ndarray::Axis;

use crate::error::{RegressionError, Result};
use crate::model_selection;
use crate::{Matrix, Vector};

/// Feature matrix plus target vector, one row per sample.
///
/// The sample count always matches between features and targets and is
/// never zero; the fields stay private so that holds after construction.
#[derive(Clone, Debug)]
pub struct Dataset {
    features: Matrix,
    targets: Vector,
    feature_names: Vec<String>,
    target_name: String,
}

impl Dataset {
    pub fn new(features: Matrix, targets: Vector) -> Result<Self> {
        if features.nrows() != targets.len() {
            return Err(RegressionError::mismatch(
                "dataset samples",
                features.nrows(),
                targets.len(),
            ));
        }

        if features.nrows() == 0 || features.ncols() == 0 {
            return Err(RegressionError::EmptyDataset);
        }

        let feature_names = (0..features.ncols()).map(|j| format!("x{}", j)).collect();

        Ok(Self {
            features,
            targets,
            feature_names,
            target_name: "target".to_string(),
        })
    }

    pub fn with_feature_names<S: Into<String>>(
        mut self,
        names: impl IntoIterator<Item = S>,
    ) -> Result<Self> {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.len() != self.n_features() {
            return Err(RegressionError::mismatch(
                "feature names",
                self.n_features(),
                names.len(),
            ));
        }
        self.feature_names = names;
        Ok(self)
    }

    pub fn with_target_name(mut self, name: impl Into<String>) -> Self {
        self.target_name = name.into();
        self
    }

    pub fn features(&self) -> &Matrix {
        &self.features
    }

    pub fn targets(&self) -> &Vector {
        &self.targets
    }

    pub fn into_parts(self) -> (Matrix, Vector) {
        (self.features, self.targets)
    }

    /// Applies `f` to every feature value, keeping the shape and names.
    pub fn map_features(mut self, f: impl Fn(f64) -> f64) -> Self {
        self.features.mapv_inplace(f);
        self
    }

    pub fn n_samples(&self) -> usize {
        self.features.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn target_name(&self) -> &str {
        &self.target_name
    }

    /// Copies the given rows, in the given order, into a new dataset.
    pub fn select(&self, indices: &[usize]) -> Result<Self> {
        if let Some(&bad) = indices.iter().find(|&&i| i >= self.n_samples()) {
            return Err(RegressionError::InvalidParameter(format!(
                "sample index {} out of range for {} samples",
                bad,
                self.n_samples()
            )));
        }

        let features = self.features.select(Axis(0), indices);
        let targets = self.targets.select(Axis(0), indices);

        Ok(Self {
            feature_names: self.feature_names.clone(),
            target_name: self.target_name.clone(),
            ..Self::new(features, targets)?
        })
    }

    /// Keeps only the named feature columns, in the given order.
    pub fn select_features(&self, names: &[&str]) -> Result<Self> {
        let columns = names
            .iter()
            .map(|name| {
                self.feature_names
                    .iter()
                    .position(|f| f == name)
                    .ok_or_else(|| RegressionError::MissingColumn(name.to_string()))
            })
            .collect::<Result<Vec<usize>>>()?;

        let features = self.features.select(Axis(1), &columns);
        Ok(Self::new(features, self.targets.clone())?
            .with_feature_names(names.iter().copied())?
            .with_target_name(self.target_name.clone()))
    }

    /// Shuffled train/test split seeded with `seed`.
    pub fn train_test_split(&self, test_size: f64, seed: u64) -> Result<(Self, Self)> {
        model_selection::train_test_split_seeded(self, test_size, seed)
    }

    pub fn from_csv_path(path: impl AsRef<Path>, target_column: &str) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        debug!("loading dataset from {}", path.as_ref().display());
        Self::from_csv_reader(file, target_column)
    }

    /// Reads a headered, all-numeric CSV. `target_column` becomes the target
    /// and every other column a feature, in header order.
    pub fn from_csv_reader<R: Read>(reader: R, target_column: &str) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let target_idx = headers
            .iter()
            .position(|h| h == target_column)
            .ok_or_else(|| RegressionError::MissingColumn(target_column.to_string()))?;

        let feature_names: Vec<String> = headers
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != target_idx)
            .map(|(_, h)| h.to_string())
            .collect();

        let mut feature_data = Vec::new();
        let mut target_data = Vec::new();

        for record in reader.records() {
            let record = record?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);

            for (j, field) in record.iter().enumerate() {
                let value: f64 = field.parse().map_err(|_| RegressionError::Parse {
                    column: headers.get(j).unwrap_or_default().to_string(),
                    line,
                    value: field.to_string(),
                })?;

                if j == target_idx {
                    target_data.push(value);
                } else {
                    feature_data.push(value);
                }
            }
        }

        let n_samples = target_data.len();
        let features = Matrix::from_shape_vec((n_samples, feature_names.len()), feature_data)
            .map_err(|e| RegressionError::InvalidParameter(e.to_string()))?;
        let targets = Vector::from(target_data);

        debug!(
            "loaded {} samples with {} features, target `{}`",
            n_samples,
            feature_names.len(),
            target_column
        );

        Self::new(features, targets)?
            .with_feature_names(feature_names)
            .map(|d| d.with_target_name(target_column))
    }
}
