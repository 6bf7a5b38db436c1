pub use crate::{
    catalog::{
        combine_arguments, Binding, Catalog, Level, Predicate, PredicateKind, TypeTag, Variable,
    },
    config::{CatalogOptions, RestrictionOptions},
    core::{
        binding_mode::BindingMode,
        constructor::{FunctorId, GenericConstructorType},
        logic_variable::Var,
        source::{drain, BoxSource, CompositeElementSource, ElementSource, Status},
        substitution::Substitution,
        term::Term,
        types::{CompositeType, Type, TypeConstructor},
    },
    database::{FactBase, Row},
    error::{ArgumentError, CatalogError, ConfigError, FactError, TypeError},
};
