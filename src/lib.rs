//! Rule and query core of a structural diff engine.
//!
//! The [`catalog`] describes program facts (types, fields, methods, calls,
//! inheritance) and their before/after/added/deleted/modified variants.
//! The [`core`] module provides what a rule evaluator needs to search over
//! them: binding modes, typed compound terms and lazily polled element
//! sources.

#[macro_use]
pub mod macros;
pub mod catalog;
pub mod config;
pub mod core;
pub mod database;
pub mod error;
pub mod prelude;

#[cfg(test)]
mod acceptance_tests;
#[cfg(test)]
mod testing;

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn it_works() {
        let catalog = Catalog::global();
        let options = RestrictionOptions::default();

        let conclusion = catalog.get("deleted_method").unwrap();
        assert!(conclusion.is_conclusion_predicate());
        assert!(conclusion.conclusion_constraints(&options));
        assert_eq!(conclusion.key_argument(), Some(0));

        let template = conclusion.fresh_bindings_for_conclusion();
        assert!(conclusion.type_checks(&template));
        assert_eq!(
            template.iter().map(|b| b.to_string()).collect::<Vec<_>>(),
            vec!["?x0", "?c0", "?c1"]
        );

        let antecedents: Vec<_> = catalog
            .predicates()
            .into_iter()
            .filter(|p| p.allowed_in_same_rule(conclusion, None, &options))
            .collect();
        assert!(antecedents.iter().all(|p| p.is_antecedent_predicate()));
        assert!(antecedents.iter().any(|p| p.name() == "before_calls"));

        let calls = catalog.get("before_calls").unwrap();
        assert_eq!(
            catalog.to_class_level(calls).map(Predicate::name),
            Some("before_dependency")
        );

        let mut db = FactBase::new();
        for (caller, callee) in [("A.run", "B.go"), ("C.main", "A.run")].iter() {
            let fact = vec![
                Binding::ground(*caller, TypeTag::Method),
                Binding::ground(*callee, TypeTag::Method),
            ];
            db.insert(catalog, calls.name(), &fact).unwrap();
        }
        let callers: Vec<_> = drain(db.query(calls.name(), &[None, Some("A.run")]))
            .map(|row| row[0].to_string())
            .collect();
        assert_eq!(callers, vec!["C.main"]);
    }
}
