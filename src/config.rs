//! Options read by the rule-pairing policy and by catalog construction.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Switches for the policy branches of [`Predicate::conclusion_constraints`]
/// and [`Predicate::allowed_in_same_rule`].
///
/// [`Predicate::conclusion_constraints`]: crate::catalog::Predicate::conclusion_constraints
/// [`Predicate::allowed_in_same_rule`]: crate::catalog::Predicate::allowed_in_same_rule
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RestrictionOptions {
    /// Only predicates on the conclusion allow-list may conclude a rule.
    pub limit_conclusion_predicates: bool,
    /// Pair conclusions with dependence antecedents by name.
    pub prefer_dependence_predicates: bool,
    /// `after_` predicates may support `added_` conclusions.
    pub allow_after_in_antecedent: bool,
}

impl RestrictionOptions {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let options: RestrictionOptions = toml::from_str(text)?;
        tracing::debug!(?options, "loaded restriction options");
        Ok(options)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CatalogOptions {
    /// Also register `<tense>_p_<family>` twins of conclusion predicates.
    pub primed_conclusions: bool,
}
