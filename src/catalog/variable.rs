//! Rule variables and argument bindings.

use crate::catalog::tag::TypeTag;
use crate::core::binding_mode::BindingMode;
use std::fmt;

/// How a rule variable is quantified when a rule template is instantiated.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Quantifier {
    /// Fresh, existentially quantified variable.
    Free,
    /// Placeholder later replaced by a constant.
    ConstantHolder,
}

/// Named, typed rule variable such as `?x0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Variable {
    name: String,
    tag: TypeTag,
    quantifier: Quantifier,
}

impl Variable {
    pub fn new(name: impl Into<String>, tag: TypeTag) -> Self {
        Variable {
            name: name.into(),
            tag,
            quantifier: Quantifier::Free,
        }
    }

    /// Fresh free variable whose name is not used in `existing`.
    pub fn new_free(existing: &[Variable], tag: TypeTag) -> Self {
        Variable {
            name: unused_name("?x", existing),
            tag,
            quantifier: Quantifier::Free,
        }
    }

    /// Fresh constant holder whose name is not used in `existing`.
    pub fn new_constant_holder(existing: &[Variable], tag: TypeTag) -> Self {
        Variable {
            name: unused_name("?c", existing),
            tag,
            quantifier: Quantifier::ConstantHolder,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tag(&self) -> TypeTag {
        self.tag
    }

    pub fn quantifier(&self) -> Quantifier {
        self.quantifier
    }

    pub fn is_constant_holder(&self) -> bool {
        self.quantifier == Quantifier::ConstantHolder
    }
}

fn unused_name(prefix: &str, existing: &[Variable]) -> String {
    (existing.len()..)
        .map(|n| format!("{}{}", prefix, n))
        .find(|name| existing.iter().all(|v| &v.name != name))
        .unwrap_or_default()
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// One argument of a predicate occurrence: a variable or a ground value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Binding {
    Variable(Variable),
    Ground { value: String, tag: TypeTag },
}

impl Binding {
    pub fn variable(v: Variable) -> Self {
        Binding::Variable(v)
    }

    pub fn ground(value: impl Into<String>, tag: TypeTag) -> Self {
        Binding::Ground {
            value: value.into(),
            tag,
        }
    }

    pub fn tag(&self) -> TypeTag {
        match self {
            Binding::Variable(v) => v.tag(),
            Binding::Ground { tag, .. } => *tag,
        }
    }

    pub fn mode(&self) -> BindingMode {
        match self {
            Binding::Variable(_) => BindingMode::Free,
            Binding::Ground { .. } => BindingMode::Bound,
        }
    }

    pub fn try_as_variable(&self) -> Option<&Variable> {
        match self {
            Binding::Variable(v) => Some(v),
            Binding::Ground { .. } => None,
        }
    }

    pub fn ground_value(&self) -> Option<&str> {
        match self {
            Binding::Ground { value, .. } => Some(value),
            Binding::Variable(_) => None,
        }
    }

    /// Returns `true` if this binding may fill a position tagged `required`.
    pub fn type_checks(&self, required: TypeTag) -> bool {
        self.tag().matches(required)
    }
}

impl From<Variable> for Binding {
    fn from(v: Variable) -> Self {
        Binding::Variable(v)
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Binding::Variable(v) => write!(f, "{}", v),
            Binding::Ground { value, .. } => write!(f, "\"{}\"", value),
        }
    }
}
