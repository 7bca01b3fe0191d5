//! Key structures, such as formulas, literals, and clauses.
//!
//! # Formulas and their normal form
//!
//! A [formula](formula) is a tree of connectives over [variables](variable), built by the
//! parser or programmatically.
//!
//! For the purposes of a satisfiability search a formula is flattened to
//! [conjunctive normal form](cnf): a conjunction of [clauses](clause), each clause a
//! disjunction of [literals](literal).
//! The conversion is given in [procedures::cnf](crate::procedures::cnf).
//!
//! Formula values are immutable, and equality and hashing are structural.
//! Clause and cnf values are transient --- constructed fresh per entailment query and
//! discarded after the query returns.

pub mod clause;
pub mod cnf;
pub mod formula;
pub mod literal;
pub mod variable;
