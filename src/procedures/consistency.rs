/*!
Consistency checks against a base, built on [entailment](crate::procedures::entailment).

A candidate contradicts a collection of beliefs when the beliefs entail the negation of the
candidate.
A second, redundant, path is always taken as well: the conjunction of the beliefs with the
candidate is checked for unsatisfiability directly.
A contradiction is reported when either path finds one.

The checks operate over a caller-supplied snapshot of beliefs, so contraction may probe
hypothetical reduced bases without mutating the live one.

A contradiction is an expected outcome, driving contraction --- never an error.
*/

use crate::{
    base::{Belief, GenericBase},
    config::SplitSelection,
    misc::log::targets::{self},
    procedures::{dpll::is_unsat, entailment::entails},
    structures::{clause::Clause, formula::Formula},
};

/// Whether the candidate contradicts the given snapshot of beliefs.
pub(crate) fn contradicted<R: rand::Rng>(
    snapshot: &[Belief],
    candidate: &Formula,
    selection: SplitSelection,
    rng: &mut R,
) -> bool {
    // Primary path: the snapshot entails the negation of the candidate.
    if entails(
        snapshot.iter().map(Belief::formula),
        &Formula::not(candidate.clone()),
        selection,
        rng,
    ) {
        log::trace!(target: targets::CONTRACTION, "{candidate} negated by the snapshot");
        return true;
    }

    // Redundant path: the snapshot together with the candidate is unsatisfiable.
    let mut clauses: Vec<Clause> = snapshot
        .iter()
        .flat_map(|belief| belief.formula().to_cnf().into_clauses())
        .collect();
    clauses.extend(candidate.to_cnf().into_clauses());

    is_unsat(clauses, selection, rng)
}

impl<R: rand::Rng + std::default::Default> GenericBase<R> {
    /// Whether believing the candidate would contradict the held beliefs.
    pub fn has_contradiction(&mut self, candidate: &Formula) -> bool {
        self.counters.entailment_queries += 1;

        let mut rng = std::mem::take(&mut self.rng);
        let result = contradicted(
            &self.beliefs,
            candidate,
            self.config.split_selection,
            &mut rng,
        );
        self.rng = rng;

        result
    }

    /// Whether the held beliefs are jointly satisfiable.
    pub fn is_consistent(&mut self) -> bool {
        let clauses: Vec<Clause> = self
            .beliefs
            .iter()
            .flat_map(|belief| belief.formula().to_cnf().into_clauses())
            .collect();

        let mut rng = std::mem::take(&mut self.rng);
        let consistent = !is_unsat(clauses, self.config.split_selection, &mut rng);
        self.rng = rng;

        consistent
    }
}
