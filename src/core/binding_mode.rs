//! Binding modes tell whether a query argument is already instantiated.

use std::fmt;

/// Instantiation mode of a single argument position.
///
/// `Bound` is the top of the two-element lattice: a bound argument
/// satisfies any requirement, a free one only satisfies `Free`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BindingMode {
    Bound,
    Free,
}

impl BindingMode {
    /// Mode of an optional value: `Some` is bound, `None` is free.
    pub fn of<T>(value: Option<T>) -> Self {
        match value {
            Some(_) => BindingMode::Bound,
            None => BindingMode::Free,
        }
    }

    /// Returns `true` if an argument in this mode may be passed where
    /// `required` is expected.
    pub fn satisfies(self, required: BindingMode) -> bool {
        match self {
            BindingMode::Bound => true,
            BindingMode::Free => required == BindingMode::Free,
        }
    }

    pub fn is_bound(self) -> bool {
        self == BindingMode::Bound
    }

    pub fn is_free(self) -> bool {
        self == BindingMode::Free
    }
}

impl fmt::Display for BindingMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BindingMode::Bound => write!(f, "B"),
            BindingMode::Free => write!(f, "F"),
        }
    }
}
