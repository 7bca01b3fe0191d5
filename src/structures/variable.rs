//! Atomic propositional symbols.

/// An atomic propositional symbol, identified by name.
///
/// Names are case-insensitive, and are normalised to lowercase on construction.
/// By convention names are single letters, though any alphabetic identifier is supported.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Variable {
    name: String,
}

impl Variable {
    /// A variable with the given name, normalised to lowercase.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            name: name.as_ref().to_lowercase(),
        }
    }

    /// The (normalised) name of the variable.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl From<&str> for Variable {
    fn from(name: &str) -> Self {
        Variable::new(name)
    }
}
