//! Runtime primitives: binding modes, types, terms and element sources

pub mod binding_mode;
pub mod constructor;
pub mod logic_variable;
pub mod source;
pub mod substitution;
pub mod term;
pub mod types;
