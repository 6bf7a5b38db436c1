use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

static VAR_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Named logic variable.
///
/// Used for type variables inside generic constructor types and for
/// variables inside compound terms. The name is purely descriptive.
/// Any newly created variable is different from all previously
/// created variables, even if they have the same name.
/// Copies preserve identity.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Var {
    name: &'static str,
    id: usize,
}

impl Var {
    /// Create a new unique logic variable.
    pub fn new(name: &'static str) -> Self {
        // The C++ reference says: "typical use for relaxed memory is incrementing counters"
        let id = VAR_COUNTER.fetch_add(1, Ordering::Relaxed);
        Var { name, id }
    }

    /// Return the variable's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Return a fresh variable with the same name.
    ///
    /// `renamings` memoizes the mapping so that every occurrence of this
    /// variable within one copy is renamed to the same fresh variable.
    pub fn renamed(&self, renamings: &mut HashMap<Var, Var>) -> Var {
        *renamings.entry(*self).or_insert_with(|| Var::new(self.name))
    }
}

impl From<&'static str> for Var {
    fn from(name: &'static str) -> Self {
        Var::new(name)
    }
}

impl std::fmt::Debug for Var {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}#{}", self.name, self.id)
    }
}

impl std::fmt::Display for Var {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "?{}", self.name)
    }
}
