//! Predicates describing program structure and its changes

pub mod args;
pub mod policy;
pub mod predicate;
pub mod registry;
pub mod tag;
pub mod variable;

pub use args::combine_arguments;
pub use policy::CONCLUSION_ALLOW_LIST;
pub use predicate::{Family, Level, Predicate, PredicateKind};
pub use registry::{Catalog, CatalogBuilder, CHANGED_TYPE};
pub use tag::TypeTag;
pub use variable::{Binding, Quantifier, Variable};
