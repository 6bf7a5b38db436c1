//! Predicate values and their derived classification.

use crate::catalog::tag::TypeTag;
use crate::catalog::variable::{Binding, Variable};
use crate::error::CatalogError;
use std::borrow::Cow;
use std::fmt;

/// Temporal or diff classification of a predicate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PredicateKind {
    Deleted,
    Added,
    Before,
    After,
    Modified,
    DeletedPrimed,
    AddedPrimed,
    ModifiedPrimed,
    Undefined,
}

impl PredicateKind {
    /// Classify a predicate name. The first matching tense wins, in the
    /// order before, after, deleted, added, modified.
    pub fn of_name(name: &str) -> Self {
        if name.contains("before_") {
            PredicateKind::Before
        } else if name.contains("after_") {
            PredicateKind::After
        } else if name.contains("deleted_") {
            if name.contains("deleted_p_") {
                PredicateKind::DeletedPrimed
            } else {
                PredicateKind::Deleted
            }
        } else if name.contains("added_") {
            if name.contains("added_p_") {
                PredicateKind::AddedPrimed
            } else {
                PredicateKind::Added
            }
        } else if name.contains("modified_") {
            if name.contains("modified_p_") {
                PredicateKind::ModifiedPrimed
            } else {
                PredicateKind::Modified
            }
        } else {
            PredicateKind::Undefined
        }
    }

    pub fn is_primed(self) -> bool {
        matches!(
            self,
            PredicateKind::AddedPrimed | PredicateKind::DeletedPrimed | PredicateKind::ModifiedPrimed
        )
    }
}

/// Structural granularity of a predicate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Level {
    Package,
    Class,
    Method,
}

impl Level {
    fn of_signature(signature: &[TypeTag]) -> Self {
        match signature.first() {
            Some(TypeTag::Package) => Level::Package,
            Some(TypeTag::Type) => Level::Class,
            _ => Level::Method,
        }
    }
}

/// The fact family a predicate belongs to, independent of its tense.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Family {
    Package,
    Type,
    Field,
    Method,
    Return,
    Subtype,
    Accesses,
    Calls,
    InheritedField,
    InheritedMethod,
    FieldOfType,
    TypeInType,
    Extends,
    Implements,
    Dependency,
    Unknown,
}

impl Family {
    pub fn parse(text: &str) -> Self {
        match text {
            "package" => Family::Package,
            "type" => Family::Type,
            "field" => Family::Field,
            "method" => Family::Method,
            "return" => Family::Return,
            "subtype" => Family::Subtype,
            "accesses" => Family::Accesses,
            "calls" => Family::Calls,
            "inheritedfield" => Family::InheritedField,
            "inheritedmethod" => Family::InheritedMethod,
            "fieldoftype" => Family::FieldOfType,
            "typeintype" => Family::TypeInType,
            "extends" => Family::Extends,
            "implements" => Family::Implements,
            "dependency" => Family::Dependency,
            _ => Family::Unknown,
        }
    }

    fn key_argument(self) -> Option<usize> {
        match self {
            Family::Package
            | Family::Type
            | Family::TypeInType
            | Family::Method
            | Family::Field
            | Family::FieldOfType
            | Family::Calls
            | Family::Extends
            | Family::Implements
            | Family::Subtype
            | Family::Return => Some(0),
            Family::Accesses | Family::InheritedMethod | Family::InheritedField => Some(1),
            Family::Dependency | Family::Unknown => None,
        }
    }

    fn reference_argument(self) -> usize {
        match self {
            Family::Subtype | Family::Accesses => 1,
            Family::InheritedField | Family::InheritedMethod => 2,
            _ => 0,
        }
    }

    fn primary_types(self) -> Option<&'static [TypeTag]> {
        match self {
            Family::Type | Family::Dependency | Family::TypeInType => Some(&[TypeTag::Type]),
            Family::Field => Some(&[TypeTag::Field]),
            Family::Method => Some(&[TypeTag::Method]),
            Family::InheritedMethod => Some(&[TypeTag::Method, TypeTag::Type]),
            Family::InheritedField => Some(&[TypeTag::Field, TypeTag::Type]),
            _ => None,
        }
    }
}

/// A named, typed relation over program entities.
///
/// Kind, level and family are derived once from the name and signature.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Predicate {
    name: String,
    signature: Vec<TypeTag>,
    kind: PredicateKind,
    level: Level,
    /// Family named by the text after the last underscore.
    family: Family,
    /// Family named by the text after the first underscore.
    root: Family,
}

impl Predicate {
    pub(crate) fn new(name: &str, signature: &str) -> Result<Self, CatalogError> {
        let signature =
            TypeTag::parse_signature(signature).map_err(|tag| CatalogError::InvalidTypeTag {
                predicate: name.to_string(),
                tag,
            })?;
        if signature.is_empty() {
            return Err(CatalogError::EmptySignature {
                predicate: name.to_string(),
            });
        }

        let root = match name.find('_') {
            Some(i) if i > 0 => &name[i + 1..],
            _ => name,
        };

        Ok(Predicate {
            kind: PredicateKind::of_name(name),
            level: Level::of_signature(&signature),
            family: Family::parse(suffix_of(name)),
            root: Family::parse(root),
            name: name.to_string(),
            signature,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name with the primed marker removed.
    pub fn display_name(&self) -> Cow<str> {
        if self.is_p_predicate() {
            Cow::Owned(self.name.replacen("_p_", "_", 1))
        } else {
            Cow::Borrowed(&self.name)
        }
    }

    pub fn signature(&self) -> &[TypeTag] {
        &self.signature
    }

    pub fn arity(&self) -> usize {
        self.signature.len()
    }

    pub fn kind(&self) -> PredicateKind {
        self.kind
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn is_element(&self) -> bool {
        self.arity() == 1
    }

    pub fn is_method_level(&self) -> bool {
        self.level == Level::Method
    }

    pub fn is_kb_before_predicate(&self) -> bool {
        matches!(
            self.kind,
            PredicateKind::Deleted | PredicateKind::Before | PredicateKind::DeletedPrimed
        )
    }

    pub fn is_kb_after_predicate(&self) -> bool {
        matches!(
            self.kind,
            PredicateKind::Added | PredicateKind::After | PredicateKind::AddedPrimed
        )
    }

    pub fn is_conclusion_predicate(&self) -> bool {
        matches!(
            self.kind,
            PredicateKind::Deleted | PredicateKind::Added | PredicateKind::Modified
        )
    }

    pub fn is_2kb_predicate(&self) -> bool {
        matches!(self.kind, PredicateKind::Before | PredicateKind::After) || self.is_p_predicate()
    }

    pub fn is_antecedent_predicate(&self) -> bool {
        self.kind == PredicateKind::Before
    }

    pub fn is_p_predicate(&self) -> bool {
        self.kind.is_primed()
    }

    /// Method-level dependency facts: accesses and calls.
    pub fn is_dependency_predicate(&self) -> bool {
        self.name.contains("accesses") || self.name.contains("calls")
    }

    pub fn is_compatible_method_level(&self) -> bool {
        !self.suffix().eq_ignore_ascii_case("dependency")
    }

    /// Text after the last underscore.
    pub fn suffix(&self) -> &str {
        suffix_of(&self.name)
    }

    /// Text before the last underscore.
    pub fn prefix(&self) -> &str {
        match self.name.rfind('_') {
            Some(i) if i > 0 => &self.name[..i],
            _ => &self.name,
        }
    }

    /// `false` on count mismatch, otherwise whether every binding fits
    /// the tag at its position.
    pub fn type_checks(&self, bindings: &[Binding]) -> bool {
        bindings.len() == self.signature.len()
            && bindings
                .iter()
                .zip(&self.signature)
                .all(|(b, &tag)| b.type_checks(tag))
    }

    /// Returns `true` if any signature tag is in `tags`.
    pub fn type_matches(&self, tags: &[TypeTag]) -> bool {
        self.signature.iter().any(|t| tags.contains(t))
    }

    pub fn equals_ignoring_primes(&self, other: &Predicate) -> bool {
        self.display_name() == other.display_name()
    }

    /// Argument that receives a fresh variable in a rule template.
    ///
    /// `None` for names without a tense prefix and for families that
    /// have no key, such as `dependency`.
    pub fn key_argument(&self) -> Option<usize> {
        if self.prefix() == self.name {
            return None;
        }
        self.family.key_argument()
    }

    /// Argument groups that identify the subject of a fact.
    ///
    /// Groups reaching past the arity are dropped, so the element form
    /// of a family keeps only its entity argument.
    pub fn primary_arguments(&self) -> Vec<Vec<usize>> {
        let groups = match self.family {
            Family::Type | Family::TypeInType => vec![vec![0]],
            Family::Field | Family::Method => vec![vec![0], vec![1, 2]],
            _ => return vec![(0..self.arity()).collect()],
        };
        groups
            .into_iter()
            .filter(|g| g.iter().all(|&i| i < self.arity()))
            .collect()
    }

    /// Argument that refers to another entity, e.g. the subtype.
    pub fn reference_argument(&self) -> usize {
        self.family.reference_argument()
    }

    /// Tags of this predicate abstracted to its base family.
    pub fn primary_types(&self) -> Vec<TypeTag> {
        match self.root.primary_types() {
            Some(tags) => tags.to_vec(),
            None => self.signature.clone(),
        }
    }

    /// Bindings for instantiating this predicate as a rule conclusion:
    /// a free variable at the key argument, constant holders elsewhere.
    pub fn fresh_bindings_for_conclusion(&self) -> Vec<Binding> {
        let key = self.key_argument();
        let mut variables: Vec<Variable> = vec![];
        let mut const_holders: Vec<Variable> = vec![];

        self.signature
            .iter()
            .enumerate()
            .map(|(i, &tag)| {
                let next = if Some(i) == key {
                    let v = Variable::new_free(&variables, tag);
                    variables.push(v.clone());
                    v
                } else {
                    let v = Variable::new_constant_holder(&const_holders, tag);
                    const_holders.push(v.clone());
                    v
                };
                Binding::variable(next)
            })
            .collect()
    }

    /// Put `accesses` bindings into logical order (method first).
    pub fn update_bindings(&self, bindings: &mut [Binding]) {
        if self.suffix() == "accesses" && bindings.len() >= 2 {
            bindings.swap(0, 1);
        }
    }
}

fn suffix_of(name: &str) -> &str {
    match name.rfind('_') {
        Some(i) if i > 0 => &name[i + 1..],
        _ => name,
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, tag) in self.signature.iter().enumerate() {
            if i >= 1 {
                write!(f, ",")?;
            }
            write!(f, "{}", tag)?;
        }
        write!(f, ")")
    }
}
