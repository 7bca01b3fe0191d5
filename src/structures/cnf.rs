//! Conjunctive normal form: an ordered collection of clauses, interpreted as their conjunction.

use crate::structures::clause::Clause;

/// A formula in conjunctive normal form --- a conjunction of [clauses](Clause).
///
/// Values are produced by [to_cnf](crate::structures::formula::Formula::to_cnf) and consumed
/// by the satisfiability search; an empty collection is vacuously satisfiable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cnf {
    clauses: Vec<Clause>,
}

impl Cnf {
    pub fn push(&mut self, clause: Clause) {
        self.clauses.push(clause);
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn into_clauses(self) -> Vec<Clause> {
        self.clauses
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// A best-effort redundancy pass: the cnf without clauses containing some literal
    /// together with its negation.
    ///
    /// Tautological clauses are satisfied by any valuation, so the result is equisatisfiable.
    pub fn without_tautologies(self) -> Cnf {
        Cnf {
            clauses: self
                .clauses
                .into_iter()
                .filter(|clause| !clause.is_tautological())
                .collect(),
        }
    }
}

impl FromIterator<Clause> for Cnf {
    fn from_iter<I: IntoIterator<Item = Clause>>(iter: I) -> Self {
        Self {
            clauses: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for Cnf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.clauses.is_empty() {
            return write!(f, "⊤");
        }
        let mut clauses = self.clauses.iter();
        if let Some(first) = clauses.next() {
            write!(f, "({first})")?;
        }
        for clause in clauses {
            write!(f, " & ({clause})")?;
        }
        Ok(())
    }
}
