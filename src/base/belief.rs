//! Beliefs: formulas held at some priority.

use crate::structures::formula::Formula;

/// A formula paired with the priority at which it is held.
///
/// Priority is a degree of entrenchment in [0, 1]: the higher, the harder the belief is to
/// remove under contraction.
/// The range is a convention of the input layer --- a base stores whatever priority it is
/// given.
#[derive(Clone, Debug)]
pub struct Belief {
    formula: Formula,
    priority: f64,
}

impl Belief {
    pub fn new(formula: Formula, priority: f64) -> Self {
        Self { formula, priority }
    }

    pub fn formula(&self) -> &Formula {
        &self.formula
    }

    pub fn priority(&self) -> f64 {
        self.priority
    }

    pub(crate) fn set_priority(&mut self, priority: f64) {
        self.priority = priority;
    }
}

impl std::fmt::Display for Belief {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.formula, self.priority)
    }
}
