//! Terms: constants, variables, tuples and compound terms.

use crate::core::constructor::GenericConstructorType;
use crate::core::logic_variable::Var;
use std::fmt;
use std::sync::Arc;

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Term {
    Constant(Arc<str>),
    Var(Var),
    Tuple(Vec<Term>),
    Compound(Box<CompoundTerm>),
}

/// A constructor applied to its argument term.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct CompoundTerm {
    constructor: GenericConstructorType,
    args: Term,
}

impl Term {
    pub fn constant(text: &str) -> Self {
        Term::Constant(text.into())
    }

    pub fn var(v: Var) -> Self {
        Term::Var(v)
    }

    pub fn compound(constructor: GenericConstructorType, args: Term) -> Self {
        Term::Compound(Box::new(CompoundTerm { constructor, args }))
    }

    pub fn is_ground(&self) -> bool {
        match self {
            Term::Constant(_) => true,
            Term::Var(_) => false,
            Term::Tuple(items) => items.iter().all(Term::is_ground),
            Term::Compound(c) => c.args.is_ground(),
        }
    }

    pub fn try_as_compound(&self) -> Option<&CompoundTerm> {
        match self {
            Term::Compound(c) => Some(c),
            _ => None,
        }
    }
}

impl From<Var> for Term {
    fn from(v: Var) -> Self {
        Term::Var(v)
    }
}

impl From<&str> for Term {
    fn from(text: &str) -> Self {
        Term::constant(text)
    }
}

impl CompoundTerm {
    pub fn constructor(&self) -> &GenericConstructorType {
        &self.constructor
    }

    pub fn args(&self) -> &Term {
        &self.args
    }

    /// Decompose the argument into its parts.
    pub fn arg_list(&self) -> Vec<&Term> {
        match &self.args {
            Term::Tuple(items) => items.iter().collect(),
            single => vec![single],
        }
    }
}

fn write_items(f: &mut fmt::Formatter, items: &[Term]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ",")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Term::Constant(text) => write!(f, "{}", text),
            Term::Var(v) => write!(f, "{}", v),
            Term::Tuple(items) => {
                write!(f, "<")?;
                write_items(f, items)?;
                write!(f, ">")
            }
            Term::Compound(c) => {
                write!(f, "{}<", c.constructor.functor_id().name())?;
                match &c.args {
                    Term::Tuple(items) => write_items(f, items)?,
                    single => write!(f, "{}", single)?,
                }
                write!(f, ">")
            }
        }
    }
}
