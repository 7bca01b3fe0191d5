/*!
Entailment, by refutation.

A collection of formulas entails a candidate exactly when the conjunction of the collection
with the *negation* of the candidate is unsatisfiable: every way of making the collection
true also makes the candidate true.

So, the procedure negates the candidate, converts everything to conjunctive normal form, and
hands the union of the clauses to the [satisfiability search](crate::procedures::dpll).
As conjunctive normal form is itself a conjunction, the cnf of a conjunction of formulas is
the union of the cnfs of the formulas, and no conjunction is ever built as a tree.

When the collection is empty, entailment reduces to the candidate being a tautology.

# Example

```rust
# use entrench::base::Base;
# use entrench::structures::formula::Formula;
let mut base = Base::default();

// The empty base entails exactly the tautologies.
let excluded_middle = Formula::parse("p | ~p").unwrap();
assert!(base.entails(&excluded_middle));

let p = Formula::parse("p").unwrap();
assert!(!base.entails(&p));

base.expand(Formula::parse("p & q").unwrap(), 0.5);
assert!(base.entails(&p));
```
*/

use crate::{
    base::GenericBase,
    config::SplitSelection,
    misc::log::targets::{self},
    procedures::dpll::is_unsat,
    structures::{clause::Clause, formula::Formula},
};

/// Whether the given formulas entail the candidate.
///
/// The satisfiability search is driven by the given split selection and source of rng.
pub fn entails<'f, R: rand::Rng>(
    formulas: impl IntoIterator<Item = &'f Formula>,
    candidate: &Formula,
    selection: SplitSelection,
    rng: &mut R,
) -> bool {
    let mut clauses: Vec<Clause> = Vec::new();

    for formula in formulas {
        clauses.extend(formula.to_cnf().into_clauses());
    }
    clauses.extend(Formula::not(candidate.clone()).to_cnf().into_clauses());

    let entailed = is_unsat(clauses, selection, rng);
    log::trace!(target: targets::ENTAILMENT, "{candidate} entailed: {entailed}");
    entailed
}

impl<R: rand::Rng + std::default::Default> GenericBase<R> {
    /// Whether the held beliefs entail the candidate.
    pub fn entails(&mut self, candidate: &Formula) -> bool {
        self.counters.entailment_queries += 1;

        let mut rng = std::mem::take(&mut self.rng);
        let entailed = entails(
            self.beliefs.iter().map(|belief| belief.formula()),
            candidate,
            self.config.split_selection,
            &mut rng,
        );
        self.rng = rng;

        entailed
    }
}
