//! Variable extraction from environment documents

use std::collections::HashMap;

use crate::document::environment::EnvironmentDocument;
use crate::template::EscapeStrategy;

/// Extract the enabled variables of an environment as a name-to-value map.
///
/// Values keep their exact byte content ([`EscapeStrategy::Identity`]).
/// Disabled records are skipped silently and an empty or missing variable
/// list yields an empty map; extraction has no failure path. Later records
/// with a duplicate name overwrite earlier ones.
pub fn extract_variables(environment: &EnvironmentDocument) -> HashMap<String, String> {
    extract_variables_with(environment, EscapeStrategy::Identity)
}

/// Extract enabled variables, passing each value through `strategy`.
pub fn extract_variables_with(
    environment: &EnvironmentDocument,
    strategy: EscapeStrategy,
) -> HashMap<String, String> {
    let mut vars = HashMap::new();
    for variable in &environment.variables {
        if variable.enabled {
            vars.insert(
                variable.name.clone(),
                strategy.escape(&variable.value).into_owned(),
            );
        }
    }
    vars
}
