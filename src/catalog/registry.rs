//! The closed set of predicates a rule may mention.

use crate::catalog::predicate::{Predicate, PredicateKind};
use crate::catalog::tag::TypeTag;
use crate::config::CatalogOptions;
use crate::error::CatalogError;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Fact families and their signatures, registered bare and under each
/// temporal prefix.
const FAMILIES: [(&str, &str); 14] = [
    ("package", "p"),
    ("type", "tap"),
    ("field", "f"),
    ("method", "mct"),
    ("return", "mt"),
    ("subtype", "tt"),
    ("accesses", "fm"),
    ("calls", "mm"),
    ("inheritedfield", "btt"),
    ("inheritedmethod", "ctt"),
    ("fieldoftype", "ft"),
    ("typeintype", "tt"),
    ("extends", "tt"),
    ("implements", "tt"),
];

const TENSES: [&str; 4] = ["before", "after", "deleted", "added"];

const MODIFIED: [(&str, &str); 4] = [
    ("modified_package", "p"),
    ("modified_type", "tap"),
    ("modified_method", "mct"),
    ("modified_field", "f"),
];

/// Name of the class-level roll-up of every conclusion predicate.
pub const CHANGED_TYPE: &str = "changed_type";

static GLOBAL: Lazy<Catalog> = Lazy::new(Catalog::standard);

/// Immutable predicate registry.
///
/// Built once, then only read. Registrations that fail are dropped and
/// kept as [`diagnostics`](Catalog::diagnostics).
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<Predicate>,
    index: HashMap<String, usize>,
    diagnostics: Vec<CatalogError>,
}

impl Catalog {
    /// The standard catalog, shared by the whole process.
    pub fn global() -> &'static Catalog {
        &GLOBAL
    }

    pub fn standard() -> Self {
        Self::with_options(CatalogOptions::default())
    }

    pub fn with_options(options: CatalogOptions) -> Self {
        let mut builder = CatalogBuilder::new();
        for (family, signature) in FAMILIES.iter() {
            builder.register(family, signature);
            for tense in TENSES.iter() {
                builder.register(&format!("{}_{}", tense, family), signature);
            }
        }
        for (name, signature) in MODIFIED.iter() {
            builder.register(name, signature);
        }
        for tense in TENSES.iter() {
            builder.register(&format!("{}_dependency", tense), "tt");
        }
        builder.register(CHANGED_TYPE, "t");

        if options.primed_conclusions {
            for (family, signature) in FAMILIES.iter() {
                for tense in ["deleted", "added"].iter() {
                    builder.register(&format!("{}_p_{}", tense, family), signature);
                }
            }
            for (name, signature) in MODIFIED.iter() {
                builder.register(&name.replacen('_', "_p_", 1), signature);
            }
        }

        builder.build()
    }

    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    pub fn get(&self, name: &str) -> Option<&Predicate> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    /// Every registered predicate, in registration order.
    pub fn all(&self) -> &[Predicate] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Predicates that carry a temporal or diff kind.
    pub fn predicates(&self) -> Vec<&Predicate> {
        self.entries
            .iter()
            .filter(|p| p.kind() != PredicateKind::Undefined)
            .collect()
    }

    /// `None` if no predicate has this kind and arity.
    pub fn predicates_by_kind_arity(
        &self,
        kind: PredicateKind,
        arity: usize,
    ) -> Option<Vec<&Predicate>> {
        non_empty(
            self.entries
                .iter()
                .filter(|p| p.kind() == kind && p.arity() == arity)
                .collect(),
        )
    }

    /// `None` if no predicate of this kind mentions `tag`.
    pub fn predicates_by_kind_tag(
        &self,
        kind: PredicateKind,
        tag: TypeTag,
    ) -> Option<Vec<&Predicate>> {
        non_empty(
            self.entries
                .iter()
                .filter(|p| p.kind() == kind && p.signature().contains(&tag))
                .collect(),
        )
    }

    /// The sibling of `p` under another temporal prefix.
    pub fn prefix_predicate(&self, p: &Predicate, prefix: &str) -> Option<&Predicate> {
        self.get(&format!("{}_{}", prefix, p.suffix()))
    }

    /// Roll `p` up to class level.
    ///
    /// Conclusions become [`CHANGED_TYPE`], method dependencies become
    /// `<tense>_dependency`, anything else stays as it is. `None` if the
    /// roll-up target is not in the catalog.
    pub fn to_class_level<'a>(&'a self, p: &'a Predicate) -> Option<&'a Predicate> {
        if p.is_conclusion_predicate() {
            self.get(CHANGED_TYPE)
        } else if p.is_dependency_predicate() {
            let tense = &p.name()[..p.name().find('_')?];
            self.get(&format!("{}_dependency", tense))
        } else {
            Some(p)
        }
    }

    /// The `calls` and `accesses` siblings sharing the prefix of `p`.
    pub fn method_level_dependency(&self, p: &Predicate) -> Vec<&Predicate> {
        ["calls", "accesses"]
            .iter()
            .filter_map(|family| self.get(&format!("{}_{}", p.prefix(), family)))
            .collect()
    }

    /// Registrations dropped or replaced while building this catalog.
    pub fn diagnostics(&self) -> &[CatalogError] {
        &self.diagnostics
    }
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}

/// Collects registrations into a [`Catalog`].
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    catalog: Catalog,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name` with a signature such as `"mct"`.
    ///
    /// A malformed signature drops this registration only. A repeated
    /// name replaces the earlier entry.
    pub fn register(&mut self, name: &str, signature: &str) -> &mut Self {
        let catalog = &mut self.catalog;
        match Predicate::new(name, signature) {
            Ok(p) => {
                if let Some(&i) = catalog.index.get(name) {
                    let err = CatalogError::DuplicateName {
                        predicate: name.to_string(),
                    };
                    tracing::warn!(predicate = name, "{}", err);
                    catalog.diagnostics.push(err);
                    catalog.entries[i] = p;
                } else {
                    catalog.index.insert(name.to_string(), catalog.entries.len());
                    catalog.entries.push(p);
                }
            }
            Err(err) => {
                tracing::warn!(predicate = name, signature, "dropping predicate: {}", err);
                catalog.diagnostics.push(err);
            }
        }
        self
    }

    pub fn build(self) -> Catalog {
        tracing::debug!(
            predicates = self.catalog.entries.len(),
            diagnostics = self.catalog.diagnostics.len(),
            "built predicate catalog"
        );
        self.catalog
    }
}
