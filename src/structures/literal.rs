//! Literals: variables, or their negations.

use crate::structures::variable::Variable;

/// The representation of a literal as a variable paired with a polarity.
///
/// A literal with positive polarity is the variable; negative polarity, its negation.
#[derive(Clone, Debug)]
pub struct Literal {
    /// The variable of the literal.
    variable: Variable,

    /// The polarity of the literal.
    polarity: bool,
}

impl Literal {
    pub fn new(variable: Variable, polarity: bool) -> Self {
        Self { variable, polarity }
    }

    /// The literal over the same variable with inverted polarity.
    pub fn negate(&self) -> Self {
        Self {
            variable: self.variable.clone(),
            polarity: !self.polarity,
        }
    }

    pub fn variable(&self) -> &Variable {
        &self.variable
    }

    pub fn polarity(&self) -> bool {
        self.polarity
    }
}

// Traits

impl PartialOrd for Literal {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Literal {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        if self.variable == other.variable {
            self.polarity.cmp(&other.polarity)
        } else {
            self.variable.cmp(&other.variable)
        }
    }
}

impl PartialEq for Literal {
    fn eq(&self, other: &Self) -> bool {
        self.variable == other.variable && self.polarity == other.polarity
    }
}

impl Eq for Literal {}

impl std::hash::Hash for Literal {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.variable.hash(state);
        self.polarity.hash(state);
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "{}", self.variable),
            false => write!(f, "-{}", self.variable),
        }
    }
}
