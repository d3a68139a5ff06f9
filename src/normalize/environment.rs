//! Environment tree normalization
//!
//! The environment document's structure is owned by the external parser;
//! this module only lifts the tree into the typed model and wraps any
//! structural fault uniformly.

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::document::environment::EnvironmentDocument;

use super::error::NormalizeError;

/// Normalize a parsed environment tree into a canonical environment document.
///
/// Applies no field-level policy of its own. A tree whose structure cannot
/// be lifted fails with [`NormalizeError::EnvironmentShape`].
pub fn normalize_environment(tree: &Value) -> Result<EnvironmentDocument, NormalizeError> {
    let document =
        EnvironmentDocument::deserialize(tree).map_err(NormalizeError::environment_shape)?;
    debug!(
        variables = document.variables.len(),
        "normalized environment tree"
    );
    Ok(document)
}
