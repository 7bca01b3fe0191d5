/*!
A Davis–Putnam satisfiability search over clauses.

# Overview

[is_unsat] decides whether a collection of clauses is unsatisfiable, by depth-first
recursion:

- No clauses remain: satisfiable (every clause has been satisfied).
- Some clause is empty: unsatisfiable (no literal of the clause can be made true).
- *Unit propagation*: while some clause is a unit, its literal must hold.
  Clauses containing the literal are dropped as satisfied, and the complementary literal is
  struck from the rest; a clause emptied by striking closes the branch as unsatisfiable.
- *Case split*: otherwise, some literal occurring in a remaining clause is chosen, and both
  values of the literal are examined.
  The branch is unsatisfiable exactly when *both* sub-branches are unsatisfiable --- the
  split is an exhaustive case analysis on the chosen literal.

Each recursive call strictly reduces the count of distinct variables in the clauses, so the
search terminates after at most that many levels of splitting.
The worst case is exponential in the count of distinct variables, and the search is run to
completion --- callers bound formula size instead.

Which literal is split on is [configurable](SplitSelection), and affects the shape of the
search, never its answer.

A clause containing some literal together with its negation is satisfiable however the
variable is valued, and such clauses are dropped before the search so they are never
misreported as grounds for unsatisfiability.
*/

use crate::{
    config::SplitSelection,
    misc::log::targets::{self},
    structures::{clause::Clause, literal::Literal},
};

/// Whether the given clauses are unsatisfiable.
pub fn is_unsat<R: rand::Rng>(
    clauses: Vec<Clause>,
    selection: SplitSelection,
    rng: &mut R,
) -> bool {
    let clauses: Vec<Clause> = clauses
        .into_iter()
        .filter(|clause| {
            if clause.is_tautological() {
                log::trace!(target: targets::SEARCH, "tautological clause {clause} dropped");
                false
            } else {
                true
            }
        })
        .collect();

    search(clauses, selection, rng)
}

fn search<R: rand::Rng>(mut clauses: Vec<Clause>, selection: SplitSelection, rng: &mut R) -> bool {
    loop {
        if clauses.is_empty() {
            return false;
        }

        if clauses.iter().any(Clause::is_empty) {
            return true;
        }

        // Unit propagation.
        let Some(unit) = clauses.iter().find_map(Clause::unit_literal).cloned() else {
            break;
        };

        log::trace!(target: targets::PROPAGATION, "unit {unit}");
        match assume(&clauses, &unit) {
            None => return true,
            Some(reduced) => clauses = reduced,
        }
    }

    // Case split, exhaustive over the chosen literal.
    let split = choose_split(&clauses, selection, rng);
    log::trace!(target: targets::SEARCH, "split on {split}");

    let positive_unsat = match assume(&clauses, &split) {
        None => true,
        Some(branch) => search(branch, selection, rng),
    };

    if !positive_unsat {
        return false;
    }

    match assume(&clauses, &split.negate()) {
        None => true,
        Some(branch) => search(branch, selection, rng),
    }
}

/// The clauses under the assumption the given literal holds.
///
/// Clauses containing the literal are dropped as satisfied, and the complementary literal is
/// struck from the rest.
/// [None] if striking emptied some clause, closing the branch as unsatisfiable.
fn assume(clauses: &[Clause], literal: &Literal) -> Option<Vec<Clause>> {
    let complement = literal.negate();
    let mut reduced = Vec::with_capacity(clauses.len());

    for clause in clauses {
        if clause.contains(literal) {
            continue;
        }

        let struck = clause.without(&complement);
        if struck.is_empty() {
            return None;
        }
        reduced.push(struck);
    }

    Some(reduced)
}

/// A literal occurring in some remaining clause, to split on.
fn choose_split<R: rand::Rng>(
    clauses: &[Clause],
    selection: SplitSelection,
    rng: &mut R,
) -> Literal {
    let chosen = match selection {
        SplitSelection::First => clauses[0].literals().next(),

        SplitSelection::Random => {
            let clause = &clauses[rng.random_range(0..clauses.len())];
            clause.literals().nth(rng.random_range(0..clause.len()))
        }
    };

    match chosen {
        Some(literal) => literal.clone(),
        // Empty clauses are handled before a split is reached.
        None => unreachable!("split requested over an empty clause"),
    }
}
