//! The algorithms of the library, factored into a collection of procedures.
//!
//! - [cnf] flattens a formula to conjunctive normal form.
//! - [dpll] decides the satisfiability of a collection of clauses.
//! - [entailment] reduces entailment to unsatisfiability, by refutation.
//! - [consistency] builds on entailment to detect contradictions against a base.

pub mod cnf;
pub mod consistency;
pub mod dpll;
pub mod entailment;
