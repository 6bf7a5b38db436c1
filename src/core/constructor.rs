//! Generic constructor types.
//!
//! A constructor builds compound terms out of their parts. Its type maps
//! an argument type to the type of the resulting compound term. Generic
//! constructors mention type variables, which are renamed on every
//! application so that separate call sites never share bindings.

use crate::core::logic_variable::Var;
use crate::core::substitution::Substitution;
use crate::core::term::Term;
use crate::core::types::{CompositeType, Type, TypeConstructor};
use crate::error::TypeError;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Name and arity of a term constructor, e.g. `pair/2`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FunctorId {
    name: Arc<str>,
    arity: usize,
}

impl FunctorId {
    pub fn new(name: &str, arity: usize) -> Self {
        FunctorId {
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
}

impl fmt::Display for FunctorId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.arity)
    }
}

impl fmt::Debug for FunctorId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// Type of a constructor whose argument and result types may contain
/// type variables.
///
/// Equality is structural over identifier, argument type and result type.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct GenericConstructorType {
    identifier: FunctorId,
    args: Type,
    result: CompositeType,
}

impl GenericConstructorType {
    pub fn new(identifier: FunctorId, args: Type, result: CompositeType) -> Self {
        GenericConstructorType {
            identifier,
            args,
            result,
        }
    }

    pub fn functor_id(&self) -> &FunctorId {
        &self.identifier
    }

    pub fn type_constructor(&self) -> &TypeConstructor {
        self.result.type_constructor()
    }

    pub fn arg_type(&self) -> &Type {
        &self.args
    }

    pub fn result_type(&self) -> &CompositeType {
        &self.result
    }

    /// Number of arguments: the tuple width if the declared argument type
    /// is a tuple, otherwise 1.
    pub fn arity(&self) -> usize {
        match &self.args {
            Type::Tuple(items) => items.len(),
            _ => 1,
        }
    }

    /// Build the compound term `self(args)`.
    ///
    /// Argument count is not checked.
    pub fn apply(&self, args: Term) -> Term {
        Term::compound(self.clone(), args)
    }

    /// Build a compound term from several arguments, wrapped in a tuple.
    pub fn apply_all(&self, args: Vec<Term>) -> Term {
        self.apply(Term::Tuple(args))
    }

    /// Compute the type of applying this constructor to `arg`.
    ///
    /// The declared argument and result types are copied with fresh type
    /// variables before unifying, so the declaration itself is never
    /// constrained by any particular application.
    pub fn apply_type(&self, arg: &Type) -> Result<Type, TypeError> {
        let mut renamings: HashMap<Var, Var> = HashMap::new();
        let iargs = self.args.rename(&mut renamings);
        let iresult = self.result.rename(&mut renamings);

        match Substitution::empty().unify(&iargs, arg) {
            Some(subst) => Ok(subst.walk_star(&Type::Composite(iresult))),
            None => {
                tracing::trace!(constructor = %self.identifier, expected = %iargs, found = %arg, "constructor application does not unify");
                Err(TypeError::Mismatch {
                    constructor: self.identifier.to_string(),
                    expected: iargs.to_string(),
                    found: arg.to_string(),
                })
            }
        }
    }
}

impl fmt::Display for GenericConstructorType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} :: {} -> {}", self.identifier.name, self.args, self.result)
    }
}
