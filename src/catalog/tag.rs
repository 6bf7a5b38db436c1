use std::fmt;

/// Type tag of a predicate argument.
///
/// The name tags (`a`, `b`, `c`) hold the simple name of a type, field
/// or method and belong to the same entity as `t`, `f` and `m`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TypeTag {
    Package,
    Type,
    Field,
    Method,
    TypeName,
    FieldName,
    MethodName,
}

impl TypeTag {
    pub const ALL: [TypeTag; 7] = [
        TypeTag::Package,
        TypeTag::Type,
        TypeTag::Field,
        TypeTag::Method,
        TypeTag::TypeName,
        TypeTag::FieldName,
        TypeTag::MethodName,
    ];

    pub fn letter(self) -> char {
        match self {
            TypeTag::Package => 'p',
            TypeTag::Type => 't',
            TypeTag::Field => 'f',
            TypeTag::Method => 'm',
            TypeTag::TypeName => 'a',
            TypeTag::FieldName => 'b',
            TypeTag::MethodName => 'c',
        }
    }

    /// The program entity this tag talks about.
    pub fn entity(self) -> TypeTag {
        match self {
            TypeTag::TypeName => TypeTag::Type,
            TypeTag::FieldName => TypeTag::Field,
            TypeTag::MethodName => TypeTag::Method,
            other => other,
        }
    }

    /// Returns `true` if a value tagged `self` may fill a position
    /// tagged `required`.
    pub fn matches(self, required: TypeTag) -> bool {
        self == required || self.entity() == required.entity()
    }

    /// Parse a signature string such as `"mct"`.
    pub fn parse_signature(signature: &str) -> Result<Vec<TypeTag>, char> {
        signature.chars().map(TypeTag::try_from).collect()
    }
}

impl TryFrom<char> for TypeTag {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        TypeTag::ALL
            .iter()
            .copied()
            .find(|t| t.letter() == c)
            .ok_or(c)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
