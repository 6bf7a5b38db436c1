//! Which predicates may be combined into one candidate rule.

use crate::catalog::predicate::{Predicate, PredicateKind};
use crate::config::RestrictionOptions;

/// Predicates that may serve as a rule conclusion when conclusions are
/// limited.
pub const CONCLUSION_ALLOW_LIST: [&str; 10] = [
    "modified_method",
    "modified_type",
    "added_accesses",
    "deleted_accesses",
    "added_calls",
    "deleted_calls",
    "added_return",
    "deleted_return",
    "added_fieldoftype",
    "deleted_fieldoftype",
];

impl Predicate {
    /// Returns `true` if this predicate may conclude a rule under `options`.
    pub fn conclusion_constraints(&self, options: &RestrictionOptions) -> bool {
        !options.limit_conclusion_predicates || CONCLUSION_ALLOW_LIST.contains(&self.name())
    }

    /// Returns `true` if this predicate may support `conclusion` in one rule.
    ///
    /// When `antecedent` names a predicate already chosen for the rule,
    /// this one must have the same kind. Otherwise the dependence rules
    /// apply first (if enabled), then the tense pairing of the default
    /// policy.
    pub fn allowed_in_same_rule(
        &self,
        conclusion: &Predicate,
        antecedent: Option<&Predicate>,
        options: &RestrictionOptions,
    ) -> bool {
        if let Some(antecedent) = antecedent {
            return self.kind() == antecedent.kind();
        }

        if options.prefer_dependence_predicates {
            if let Some(allowed) = self.dependence_rule(conclusion.name()) {
                return allowed;
            }
        }

        match conclusion.kind() {
            PredicateKind::Deleted => self.kind() == PredicateKind::Before,
            PredicateKind::Added => match self.kind() {
                PredicateKind::Deleted | PredicateKind::Before => true,
                PredicateKind::After => options.allow_after_in_antecedent,
                _ => false,
            },
            PredicateKind::Modified => self.kind() == PredicateKind::Before,
            _ => false,
        }
    }

    /// `None` if no dependence rule covers the conclusion.
    fn dependence_rule(&self, conclusion: &str) -> Option<bool> {
        let name = self.name();
        let any_of = |parts: &[&str]| parts.iter().any(|p| name.contains(p));

        let allowed = if conclusion.contains("added_calls") {
            any_of(&[
                "deleted_accesses",
                "deleted_calls",
                "deleted_fieldoftype",
                "deleted_inheritedmethod",
            ])
        } else if conclusion.contains("deleted_accesses") || conclusion.contains("added_accesses") {
            any_of(&["before_calls"])
        } else if conclusion.contains("added_return") {
            any_of(&["deleted_return"])
        } else if conclusion.contains("deleted_return") {
            // No catalog name contains "add_return".
            any_of(&["add_return"])
        } else if conclusion.contains("_method") {
            any_of(&["before_calls", "before_accesses", "before_inheritedmethod"])
        } else if conclusion.contains("_type") {
            any_of(&["before_subtype", "before_extends", "before_implements"])
        } else if conclusion.contains("_inherited") {
            any_of(&["_subtype", "_extends", "_implements"])
        } else {
            return None;
        };
        Some(allowed)
    }
}
