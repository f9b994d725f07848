//! Decision tree inference
//!
//! Array-based tree representation with node traversal. Internal nodes send
//! `x[feature] <= threshold` left; leaves carry a class distribution.

use crate::ModelError;
use potability_domain::Feature;
use serde::Deserialize;

/// Parallel node arrays as stored in the model file
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TreeArrays {
    pub feature: Vec<i32>,
    pub threshold: Vec<f64>,
    pub left: Vec<i32>,
    pub right: Vec<i32>,
    pub value: Vec<Vec<f64>>,
}

#[derive(Debug, Clone, Copy)]
enum Node {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        proba: [f64; 2],
    },
}

/// A binary decision tree classifier
#[derive(Debug, Clone)]
pub struct DecisionTree {
    nodes: Vec<Node>,
}

impl DecisionTree {
    /// Build a tree from parallel arrays
    ///
    /// Any node with a negative feature index is a leaf. Leaf values may be
    /// raw class counts; they are normalized to probabilities here.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Invalid`] if array lengths disagree, a split
    /// references an unknown feature or an out-of-bounds child, or a leaf has
    /// an unusable class distribution.
    pub fn from_arrays(
        feature: &[i32],
        threshold: &[f64],
        left: &[i32],
        right: &[i32],
        value: &[Vec<f64>],
    ) -> Result<Self, ModelError> {
        let n = feature.len();
        if n == 0 {
            return Err(ModelError::Invalid("tree has no nodes".into()));
        }
        if threshold.len() != n || left.len() != n || right.len() != n || value.len() != n {
            return Err(ModelError::Invalid("inconsistent node array lengths".into()));
        }

        let child = |idx: i32, node: usize| -> Result<usize, ModelError> {
            usize::try_from(idx)
                .ok()
                .filter(|&c| c < n && c != node)
                .ok_or_else(|| {
                    ModelError::Invalid(format!("node {} has invalid child {}", node, idx))
                })
        };

        let mut nodes = Vec::with_capacity(n);
        for i in 0..n {
            let node = if feature[i] < 0 {
                Node::Leaf {
                    proba: normalize(&value[i], i)?,
                }
            } else {
                let feature_idx = feature[i] as usize;
                if feature_idx >= Feature::COUNT {
                    return Err(ModelError::Invalid(format!(
                        "node {} splits on feature {}, model has {}",
                        i,
                        feature_idx,
                        Feature::COUNT
                    )));
                }
                if !threshold[i].is_finite() {
                    return Err(ModelError::Invalid(format!(
                        "node {} has a non-finite threshold",
                        i
                    )));
                }
                Node::Split {
                    feature: feature_idx,
                    threshold: threshold[i],
                    left: child(left[i], i)?,
                    right: child(right[i], i)?,
                }
            };
            nodes.push(node);
        }

        Ok(Self { nodes })
    }

    pub(crate) fn from_tree_arrays(arrays: &TreeArrays) -> Result<Self, ModelError> {
        Self::from_arrays(
            &arrays.feature,
            &arrays.threshold,
            &arrays.left,
            &arrays.right,
            &arrays.value,
        )
    }

    /// Class distribution of the leaf reached by `features`
    ///
    /// Traversal is bounded by the node count, so a malformed tree with a
    /// cycle fails instead of looping.
    pub fn predict_proba(&self, features: &[f64; Feature::COUNT]) -> Result<[f64; 2], ModelError> {
        let mut idx = 0usize;
        for _ in 0..self.nodes.len() {
            match self.nodes[idx] {
                Node::Leaf { proba } => return Ok(proba),
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    idx = if features[feature] <= threshold { left } else { right };
                }
            }
        }
        Err(ModelError::Prediction(
            "tree traversal did not reach a leaf".into(),
        ))
    }

    /// Number of nodes in the tree
    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of leaf nodes
    pub fn n_leaves(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n, Node::Leaf { .. }))
            .count()
    }
}

fn normalize(value: &[f64], node: usize) -> Result<[f64; 2], ModelError> {
    let [c0, c1] = <[f64; 2]>::try_from(value).map_err(|_| {
        ModelError::Invalid(format!(
            "leaf {} has {} class values, expected 2",
            node,
            value.len()
        ))
    })?;
    if !(c0.is_finite() && c1.is_finite()) || c0 < 0.0 || c1 < 0.0 {
        return Err(ModelError::Invalid(format!("leaf {} has negative or non-finite values", node)));
    }
    let total = c0 + c1;
    if total <= 0.0 {
        return Err(ModelError::Invalid(format!("leaf {} has an empty distribution", node)));
    }
    Ok([c0 / total, c1 / total])
}
