//! Tree-ensemble classifier loaded from a model file

use crate::tree::{DecisionTree, TreeArrays};
use crate::ModelError;
use potability_domain::{Feature, PotabilityOracle, SampleRecord};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Kind of ensemble stored in the model file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    /// A single tree
    DecisionTree,
    /// Probability-averaging forest
    RandomForest,
}

#[derive(Debug, Deserialize)]
struct ModelFile {
    model_type: ModelKind,
    feature_names: Vec<String>,
    n_classes: usize,
    trees: Vec<TreeArrays>,
}

/// The potability classifier
///
/// `predict_proba` averages the leaf distributions of all trees (the
/// scikit-learn forest rule) and `predict` is its argmax, resolving an exact
/// tie to class 0.
#[derive(Debug, Clone)]
pub struct ForestModel {
    kind: ModelKind,
    trees: Vec<DecisionTree>,
    source: Option<PathBuf>,
}

impl ForestModel {
    /// Load a model from a JSON file
    ///
    /// # Errors
    ///
    /// [`ModelError::Io`] if the file cannot be read, [`ModelError::Parse`] if
    /// it is not valid model JSON, [`ModelError::Invalid`] if its schema does
    /// not match the nine potability features or a tree is malformed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        info!(path = %path.display(), "loading potability model");

        let contents = fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut model = Self::from_json(&contents)?;
        model.source = Some(path.to_path_buf());

        info!(
            kind = ?model.kind,
            trees = model.trees.len(),
            "potability model loaded"
        );
        Ok(model)
    }

    /// Parse a model from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let file: ModelFile = serde_json::from_str(json)?;
        Self::from_model_file(file)
    }

    fn from_model_file(file: ModelFile) -> Result<Self, ModelError> {
        let expected: Vec<&str> = Feature::ALL.iter().map(|f| f.name()).collect();
        if file.feature_names != expected {
            return Err(ModelError::Invalid(format!(
                "feature names {:?} do not match expected {:?}",
                file.feature_names, expected
            )));
        }
        if file.n_classes != 2 {
            return Err(ModelError::Invalid(format!(
                "expected a binary classifier, got {} classes",
                file.n_classes
            )));
        }
        match (file.model_type, file.trees.len()) {
            (_, 0) => return Err(ModelError::Invalid("model has no trees".into())),
            (ModelKind::DecisionTree, n) if n > 1 => {
                return Err(ModelError::Invalid(format!(
                    "decision_tree model must have exactly one tree, got {}",
                    n
                )))
            }
            _ => {}
        }

        let trees = file
            .trees
            .iter()
            .enumerate()
            .map(|(i, arrays)| {
                DecisionTree::from_tree_arrays(arrays).map_err(|e| match e {
                    ModelError::Invalid(msg) => ModelError::Invalid(format!("tree {}: {}", i, msg)),
                    other => other,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        for (i, tree) in trees.iter().enumerate() {
            debug!(tree = i, nodes = tree.n_nodes(), leaves = tree.n_leaves(), "tree checked");
        }

        Ok(Self {
            kind: file.model_type,
            trees,
            source: None,
        })
    }

    /// Kind of ensemble
    pub fn kind(&self) -> ModelKind {
        self.kind
    }

    /// Number of trees in the ensemble
    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }

    /// File the model was loaded from, if any
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    fn features(record: &SampleRecord) -> Result<[f64; Feature::COUNT], ModelError> {
        let values = record.values();
        if let Some(feature) = Feature::ALL.into_iter().find(|f| !values[f.index()].is_finite()) {
            return Err(ModelError::Prediction(format!(
                "{} is not a finite number",
                feature
            )));
        }
        Ok(values)
    }

    fn mean_proba(&self, record: &SampleRecord) -> Result<(f64, f64), ModelError> {
        let features = Self::features(record)?;
        let mut sum = [0.0f64; 2];
        for (i, tree) in self.trees.iter().enumerate() {
            let proba = tree.predict_proba(&features).map_err(|e| match e {
                ModelError::Prediction(msg) => {
                    ModelError::Prediction(format!("tree {}: {}", i, msg))
                }
                other => other,
            })?;
            sum[0] += proba[0];
            sum[1] += proba[1];
        }
        let n = self.trees.len() as f64;
        let (p0, p1) = (sum[0] / n, sum[1] / n);
        debug!(p0, p1, trees = self.trees.len(), "forest probabilities");
        Ok((p0, p1))
    }
}

impl PotabilityOracle for ForestModel {
    type Error = ModelError;

    fn predict(&self, record: &SampleRecord) -> Result<u8, Self::Error> {
        let (p0, p1) = self.mean_proba(record)?;
        Ok(u8::from(p1 > p0))
    }

    fn predict_proba(&self, record: &SampleRecord) -> Result<(f64, f64), Self::Error> {
        self.mean_proba(record)
    }
}
