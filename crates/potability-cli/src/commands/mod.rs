//! Command implementations.

pub mod assess;
pub mod batch;
pub mod configure;
pub mod standards;

pub use self::assess::execute_assess;
pub use self::batch::execute_batch;
pub use self::configure::execute_config;
pub use self::standards::execute_standards;

use crate::error::Result;
use potability_model::ForestModel;
use std::path::Path;

/// Load the classifier used by `form`, `assess` and `batch`.
pub fn load_model(path: &Path) -> Result<ForestModel> {
    Ok(ForestModel::load(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use potability_model::ModelError;

    #[test]
    fn test_missing_model_is_a_model_error() {
        let err = load_model(Path::new("/nonexistent/potability.json")).unwrap_err();
        assert!(matches!(err, CliError::Model(ModelError::Io { .. })));
        assert!(err.to_string().contains("/nonexistent/potability.json"));
    }

    #[test]
    fn test_bundled_model_loads() {
        let path =
            Path::new(env!("CARGO_MANIFEST_DIR")).join("../../models/potability_forest.json");
        let model = load_model(&path).unwrap();
        assert_eq!(model.n_trees(), 3);
    }
}
