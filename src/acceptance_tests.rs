use crate::bindings;
use crate::prelude::*;
use crate::testing::{int, pair_constructor, scripted, string, Step};

#[test]
fn every_signature_matches_its_arity() {
    let catalog = Catalog::standard();
    for p in catalog.all() {
        assert_eq!(p.arity(), p.signature().len());
        for tag in p.signature() {
            assert!("ptfmabc".contains(tag.letter()));
        }
    }
}

#[test]
fn lookup_by_name() {
    let catalog = Catalog::global();
    let field = catalog.get("deleted_field").unwrap();
    assert_eq!(field.name(), "deleted_field");
    assert_eq!(field.arity(), 1);
    assert!(catalog.get("added_bogusMethod").is_none());
}

#[test]
fn inherited_method_bindings_type_check() {
    let catalog = Catalog::global();
    let p = catalog.get("added_inheritedmethod").unwrap();
    assert_eq!(p.arity(), 3);
    assert!(!p.type_checks(&bindings![m, t]));
    assert!(p.type_checks(&bindings![m, t, t]));
    assert!(!p.type_checks(&bindings![f, t, t]));
}

#[test]
fn display_form_lists_signature_tags() {
    let catalog = Catalog::standard();
    for p in catalog.all() {
        let tags: Vec<String> = p.signature().iter().map(|t| t.to_string()).collect();
        assert_eq!(p.to_string(), format!("{}({})", p.name(), tags.join(",")));
    }
    insta::assert_snapshot!(
        catalog.get("added_inheritedmethod").unwrap().to_string(),
        @"added_inheritedmethod(c,t,t)"
    );
    insta::assert_snapshot!(
        catalog.get("before_type").unwrap().to_string(),
        @"before_type(t,a,p)"
    );
}

#[test]
fn deleted_conclusions_pair_with_before_predicates_only() {
    let catalog = Catalog::standard();
    let options = RestrictionOptions::default();
    let conclusion = catalog.get("deleted_type").unwrap();
    for p in catalog.predicates() {
        assert_eq!(
            p.allowed_in_same_rule(conclusion, None, &options),
            p.kind() == PredicateKind::Before,
            "{}",
            p
        );
    }
}

#[test]
fn options_loaded_from_toml_reach_the_policy() {
    let catalog = Catalog::standard();
    let options = RestrictionOptions::from_toml_str("allow_after_in_antecedent = true").unwrap();
    let conclusion = catalog.get("added_type").unwrap();
    let after = catalog.get("after_subtype").unwrap();
    assert!(after.allowed_in_same_rule(conclusion, None, &options));
    assert!(!after.allowed_in_same_rule(conclusion, None, &RestrictionOptions::default()));
}

#[test]
fn composite_drains_ready_children_and_skips_exhausted_ones() {
    let (first, _) = scripted(vec![Step::Ready(1)]);
    let (exhausted, exhausted_polls) = scripted(vec![]);
    let (late, _) = scripted(vec![Step::NotReady, Step::Ready(3)]);

    let mut c = CompositeElementSource::new();
    c.add(first);
    c.add(exhausted);
    c.add(late);

    let mut seen = vec![];
    loop {
        match c.status() {
            Status::ElementReady => seen.push(c.next_element()),
            Status::NoElementsReady => continue,
            Status::NoMoreElements => break,
        }
    }

    assert_eq!(seen, vec![1, 3]);
    assert_eq!(c.status(), Status::NoMoreElements);
    assert_eq!(c.number_of_children(), 0);
    assert_eq!(exhausted_polls.get(), 1);
}

#[test]
fn simplify_returns_empty_source_or_the_only_child() {
    let none: BoxSource<i32> = Box::new(CompositeElementSource::new());
    let mut simplified = none.simplify();
    assert_eq!(simplified.status(), Status::NoMoreElements);
    assert_eq!(format!("{:?}", simplified), "EmptySource");

    let (only, polls) = scripted(vec![Step::Ready("x")]);
    let mut one = CompositeElementSource::new();
    one.add(only);
    let mut simplified = Box::new(one).simplify();
    assert_eq!(simplified.status(), Status::ElementReady);
    assert_eq!(polls.get(), 1);
    assert_eq!(simplified.next_element(), "x");
}

#[test]
fn generic_constructor_applications_do_not_interfere() {
    let (pair, _, _) = pair_constructor();
    let ctor = TypeConstructor::new("Pair", 2);

    let first = pair.apply_type(&Type::tuple(vec![int(), string()]));
    let second = pair.apply_type(&Type::tuple(vec![string(), int()]));
    assert_eq!(first, Ok(Type::Composite(ctor.apply(vec![int(), string()]))));
    assert_eq!(second, Ok(Type::Composite(ctor.apply(vec![string(), int()]))));

    assert!(pair.apply_type(&int()).is_err());
    assert_eq!(
        pair.apply_type(&Type::tuple(vec![int(), int()])),
        Ok(Type::Composite(ctor.apply(vec![int(), int()])))
    );
}

#[test]
fn bound_arguments_satisfy_any_mode() {
    let bound = Binding::ground("A", TypeTag::Type).mode();
    let free = bindings![t][0].mode();
    assert!(bound.satisfies(BindingMode::Free));
    assert!(bound.satisfies(BindingMode::Bound));
    assert!(free.satisfies(BindingMode::Free));
    assert!(!free.satisfies(BindingMode::Bound));
}
