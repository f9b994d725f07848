//! Potability Model
//!
//! Loads the pre-trained potability classifier from disk and runs inference
//! in pure Rust.
//!
//! The model file is a JSON export of a tree ensemble using the parallel-array
//! layout of scikit-learn trees:
//!
//! ```json
//! {
//!   "model_type": "random_forest",
//!   "feature_names": ["ph", "Hardness", "Solids", "Chloramines", "Sulfate",
//!                     "Conductivity", "Organic_carbon", "Trihalomethanes", "Turbidity"],
//!   "n_classes": 2,
//!   "trees": [
//!     { "feature": [0, -2, -2], "threshold": [7.2, -2.0, -2.0],
//!       "left": [1, -1, -1], "right": [2, -1, -1],
//!       "value": [[0.0, 0.0], [30.0, 10.0], [5.0, 25.0]] }
//!   ]
//! }
//! ```
//!
//! The model is loaded once and handed to the gatekeeper by reference; it is
//! read-only afterwards.

#![warn(missing_docs)]

mod error;
mod forest;
mod tree;

pub use error::ModelError;
pub use forest::{ForestModel, ModelKind};
pub use tree::DecisionTree;
