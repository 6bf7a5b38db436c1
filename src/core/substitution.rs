//! Substitutions map type variables to types.
//!
//! Types can be atomic, composite or variables themselves.

use crate::core::logic_variable::Var;
use crate::core::types::{CompositeType, Type};
use std::collections::HashMap;
use std::fmt::Formatter;

/// Mapping of type variables to types.
#[derive(Clone, PartialEq, Default)]
pub struct Substitution {
    subs: HashMap<Var, Type>,
}

impl Substitution {
    /// Initialize an empty substitution
    pub fn empty() -> Self {
        Substitution {
            subs: HashMap::new(),
        }
    }

    /// Recursively attempt to resolve the value of a variable.
    ///
    /// If `t` is no variable or a variable that is not substituted,
    /// `t` is returned.
    pub fn walk<'a>(&'a self, t: &'a Type) -> &'a Type {
        if let Some(var) = t.try_as_var() {
            if let Some(next) = self.subs.get(&var) {
                return self.walk(next);
            }
        }
        t
    }

    /// Attempt to resolve any variables contained in `t`.
    pub fn walk_star(&self, t: &Type) -> Type {
        match self.walk(t) {
            Type::Tuple(items) => Type::Tuple(items.iter().map(|i| self.walk_star(i)).collect()),
            Type::Composite(c) => Type::Composite(
                c.type_constructor()
                    .apply(c.args().iter().map(|a| self.walk_star(a)).collect()),
            ),
            other => other.clone(),
        }
    }

    /// Extend substitution with a variable => type mapping.
    ///
    /// Returns `None` if the insertion would result in a
    /// cyclic substitution.
    pub fn extend(mut self, x: Var, t: Type) -> Option<Self> {
        if self.occurs(&x, &t) {
            None
        } else {
            self.subs.insert(x, t);
            Some(self)
        }
    }

    /// Returns `true` if `t` contains a variable that is equivalent
    /// to `x` under this substitution.
    pub fn occurs(&self, x: &Var, t: &Type) -> bool {
        match self.walk(t) {
            Type::Atomic(_) => false,
            Type::Var(v) => v == x,
            Type::Tuple(items) => items.iter().any(|i| self.occurs(x, i)),
            Type::Composite(c) => c.args().iter().any(|a| self.occurs(x, a)),
        }
    }

    /// Attempt to unify types `u` and `v` under this substitution.
    pub fn unify(self, u: &Type, v: &Type) -> Option<Self> {
        let u = self.walk(u).clone();
        let v = self.walk(v).clone();

        match (&u, &v) {
            (Type::Var(a), Type::Var(b)) if a == b => Some(self),
            (Type::Var(a), _) => self.extend(*a, v.clone()),
            (_, Type::Var(b)) => self.extend(*b, u.clone()),
            (Type::Atomic(a), Type::Atomic(b)) => {
                if a == b {
                    Some(self)
                } else {
                    None
                }
            }
            (Type::Tuple(xs), Type::Tuple(ys)) => self.unify_all(xs, ys),
            (Type::Composite(x), Type::Composite(y)) => self.unify_composite(x, y),
            _ => None,
        }
    }

    fn unify_composite(self, x: &CompositeType, y: &CompositeType) -> Option<Self> {
        if x.type_constructor() != y.type_constructor() {
            return None;
        }
        self.unify_all(x.args(), y.args())
    }

    fn unify_all(self, xs: &[Type], ys: &[Type]) -> Option<Self> {
        if xs.len() != ys.len() {
            return None;
        }
        xs.iter()
            .zip(ys)
            .try_fold(self, |s, (x, y)| s.unify(x, y))
    }
}

impl std::fmt::Debug for Substitution {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{{")?;
        let mut iter = self.subs.iter();
        if let Some((var, val)) = iter.next() {
            write!(f, "{:?}: {:?}", var, val)?;
        }
        for (var, val) in iter {
            write!(f, ", {:?}: {:?}", var, val)?;
        }
        write!(f, "}}")
    }
}
