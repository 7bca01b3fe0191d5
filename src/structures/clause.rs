//! Clauses: sets of literals, interpreted as their disjunction.

use std::collections::BTreeSet;

use crate::structures::literal::Literal;

/// A set of [literals](Literal), interpreted as their disjunction.
///
/// The empty clause denotes a contradiction: no literal can be made true.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Clause {
    literals: BTreeSet<Literal>,
}

impl Clause {
    /// A clause containing a single literal.
    pub fn unit(literal: Literal) -> Self {
        Self {
            literals: BTreeSet::from([literal]),
        }
    }

    pub fn insert(&mut self, literal: Literal) {
        self.literals.insert(literal);
    }

    pub fn contains(&self, literal: &Literal) -> bool {
        self.literals.contains(literal)
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// The literals of the clause, in variable order.
    pub fn literals(&self) -> impl Iterator<Item = &Literal> {
        self.literals.iter()
    }

    /// The literal of the clause, if the clause is a unit.
    pub fn unit_literal(&self) -> Option<&Literal> {
        match self.literals.len() {
            1 => self.literals.first(),
            _ => None,
        }
    }

    /// A copy of the clause with the given literal removed, if present.
    pub fn without(&self, literal: &Literal) -> Clause {
        let mut literals = self.literals.clone();
        literals.remove(literal);
        Clause { literals }
    }

    /// Whether the clause contains some literal together with its negation.
    ///
    /// Such a clause is trivially satisfiable, whatever value the variable takes.
    pub fn is_tautological(&self) -> bool {
        self.literals
            .iter()
            .any(|literal| self.literals.contains(&literal.negate()))
    }
}

impl FromIterator<Literal> for Clause {
    fn from_iter<I: IntoIterator<Item = Literal>>(iter: I) -> Self {
        Self {
            literals: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.literals.is_empty() {
            return write!(f, "⊥");
        }
        let mut literals = self.literals.iter();
        if let Some(first) = literals.next() {
            write!(f, "{first}")?;
        }
        for literal in literals {
            write!(f, " | {literal}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod clause_tests {
    use super::*;
    use crate::structures::variable::Variable;

    fn literal(name: &str, polarity: bool) -> Literal {
        Literal::new(Variable::new(name), polarity)
    }

    #[test]
    fn duplicates_collapse() {
        let clause: Clause = [literal("p", true), literal("p", true), literal("q", false)]
            .into_iter()
            .collect();
        assert_eq!(clause.len(), 2);
    }

    #[test]
    fn tautological() {
        let clause: Clause = [literal("p", true), literal("p", false)].into_iter().collect();
        assert!(clause.is_tautological());

        let clause: Clause = [literal("p", true), literal("q", false)].into_iter().collect();
        assert!(!clause.is_tautological());
    }

    #[test]
    fn unit() {
        let clause = Clause::unit(literal("p", false));
        assert_eq!(clause.unit_literal(), Some(&literal("p", false)));
        assert!(clause.without(&literal("p", false)).is_empty());
    }
}
