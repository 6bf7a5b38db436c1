//! Type values for compound terms.
//!
//! A type is atomic, a type variable, a tuple of types, or a composite
//! type built by applying a [`TypeConstructor`] to argument types.

use crate::core::logic_variable::Var;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Type {
    Atomic(Arc<str>),
    Var(Var),
    Tuple(Vec<Type>),
    Composite(CompositeType),
}

/// Named type former of fixed arity, e.g. `List` of arity 1.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TypeConstructor {
    name: Arc<str>,
    arity: usize,
}

/// A type constructor applied to argument types.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct CompositeType {
    constructor: TypeConstructor,
    args: Vec<Type>,
}

impl Type {
    pub fn atomic(name: &str) -> Self {
        Type::Atomic(name.into())
    }

    pub fn var(v: Var) -> Self {
        Type::Var(v)
    }

    pub fn tuple(items: Vec<Type>) -> Self {
        Type::Tuple(items)
    }

    pub fn try_as_var(&self) -> Option<Var> {
        match self {
            Type::Var(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns `true` if `x` appears anywhere inside this type.
    ///
    /// Does not look through a substitution; see
    /// [`Substitution::occurs`](crate::core::substitution::Substitution::occurs).
    pub fn mentions(&self, x: &Var) -> bool {
        match self {
            Type::Atomic(_) => false,
            Type::Var(v) => v == x,
            Type::Tuple(items) => items.iter().any(|t| t.mentions(x)),
            Type::Composite(c) => c.args.iter().any(|t| t.mentions(x)),
        }
    }

    /// Copy this type, replacing each type variable by a fresh one.
    pub fn rename(&self, renamings: &mut HashMap<Var, Var>) -> Type {
        match self {
            Type::Atomic(_) => self.clone(),
            Type::Var(v) => Type::Var(v.renamed(renamings)),
            Type::Tuple(items) => Type::Tuple(items.iter().map(|t| t.rename(renamings)).collect()),
            Type::Composite(c) => Type::Composite(c.rename(renamings)),
        }
    }
}

impl From<Var> for Type {
    fn from(v: Var) -> Self {
        Type::Var(v)
    }
}

impl From<CompositeType> for Type {
    fn from(c: CompositeType) -> Self {
        Type::Composite(c)
    }
}

impl TypeConstructor {
    pub fn new(name: &str, arity: usize) -> Self {
        TypeConstructor {
            name: name.into(),
            arity,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Build the composite type `self<args>`.
    pub fn apply(&self, args: Vec<Type>) -> CompositeType {
        debug_assert_eq!(args.len(), self.arity, "wrong number of type arguments");
        CompositeType {
            constructor: self.clone(),
            args,
        }
    }
}

impl CompositeType {
    pub fn type_constructor(&self) -> &TypeConstructor {
        &self.constructor
    }

    pub fn args(&self) -> &[Type] {
        &self.args
    }

    pub fn rename(&self, renamings: &mut HashMap<Var, Var>) -> CompositeType {
        CompositeType {
            constructor: self.constructor.clone(),
            args: self.args.iter().map(|t| t.rename(renamings)).collect(),
        }
    }
}

fn write_list(f: &mut fmt::Formatter, items: &[Type]) -> fmt::Result {
    let mut iter = items.iter();
    if let Some(first) = iter.next() {
        write!(f, "{}", first)?;
    }
    for item in iter {
        write!(f, ", {}", item)?;
    }
    Ok(())
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Type::Atomic(name) => write!(f, "{}", name),
            Type::Var(v) => write!(f, "{}", v),
            Type::Tuple(items) => {
                write!(f, "<")?;
                write_list(f, items)?;
                write!(f, ">")
            }
            Type::Composite(c) => write!(f, "{}", c),
        }
    }
}

impl fmt::Display for CompositeType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.constructor.name)?;
        if !self.args.is_empty() {
            write!(f, "<")?;
            write_list(f, &self.args)?;
            write!(f, ">")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Type::Var(v) => write!(f, "{:?}", v),
            _ => write!(f, "{}", self),
        }
    }
}

impl fmt::Debug for TypeConstructor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.arity)
    }
}

impl fmt::Debug for CompositeType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{:?}", self.constructor.name, self.args)
    }
}
