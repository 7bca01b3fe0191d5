/*!
The belief base --- a prioritised set of formulas, revised to stay consistent.

Strictly, a [GenericBase] and a [Base].

The generic base is parameterised to the source of randomness used by the satisfiability
search when [random split selection](crate::config::SplitSelection::Random) is configured.
[from_config](Base::from_config) is implemented for a base rather than a generic base to
avoid requiring a source of randomness to be supplied alongside a config.

A base maps formulas to priorities, keys unique.
The base is satisfiable after every successful [revise](GenericBase::revise),
[contract](GenericBase::contract), or [expand](GenericBase::expand) driven through revision
--- except where a no-op guard rejected the operation, in which case the base is untouched.

A base is created empty and lives for the duration of the owning session.
Operations run to completion before returning, and a base has no internal locking: an
embedding with concurrent callers must serialise access, as contraction and revision are
read-modify-write sequences.

# Example

```rust
# use entrench::base::{Base, ReviseOk};
# use entrench::config::Config;
# use entrench::structures::formula::Formula;
let mut base = Base::from_config(Config::default());

let p = Formula::parse("p").unwrap();
let not_p = Formula::parse("~p").unwrap();

assert_eq!(base.revise(Some(p.clone()), 0.5), ReviseOk::Expanded);

// ~p contradicts p, and is held more strongly, so p is contracted away.
assert_eq!(base.revise(Some(not_p.clone()), 0.7), ReviseOk::Contracted);
assert!(base.contains(&not_p));
assert!(!base.contains(&p));

// p contradicts ~p, but is held less strongly, so the revision is vetoed.
assert_eq!(base.revise(Some(p.clone()), 0.3), ReviseOk::Vetoed);
assert!(!base.contains(&p));
```
*/

mod belief;
pub use belief::Belief;

mod counters;
pub use counters::Counters;

use std::collections::HashMap;

use rand::SeedableRng;

use crate::{
    config::Config,
    generic::MinimalPCG32,
    misc::log::targets::{self},
    procedures::consistency::contradicted,
    structures::formula::Formula,
};

/// Ok results when expanding a base with a formula.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExpandOk {
    /// The formula was not held, and was added.
    Added,

    /// The formula was held at a strictly lower priority, which was raised.
    Raised,

    /// The formula was held at the same or a higher priority, and the base is unchanged.
    Unchanged,
}

/// Ok results when contracting a base against an incoming formula.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContractOk {
    /// Contradicting beliefs of lower priority were removed, and the formula expanded in.
    Contracted,

    /// The base is unchanged: either a contradicting belief at least as entrenched as the
    /// incoming formula was found, or the incoming formula is unsatisfiable on its own.
    Vetoed,
}

/// Ok results when revising a base with a formula.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReviseOk {
    /// No contradiction, so the formula was expanded in directly.
    Expanded,

    /// A contradiction was resolved by contraction, and the formula expanded in.
    Contracted,

    /// A contradiction was found which contraction could not resolve --- a contradicting
    /// belief was at least as entrenched as the incoming formula, or the formula is
    /// unsatisfiable on its own --- and the base is unchanged.
    Vetoed,

    /// No formula was given, and the base is unchanged.
    Noop,
}

/// A generic belief base, parameterised to a source of randomness.
///
/// Requires a source of [rng](rand::Rng) which (also) implements [Default].
/// [Default] is used to take the rng from the base while beliefs are borrowed, to appease
/// the borrow checker.
pub struct GenericBase<R: rand::Rng + std::default::Default> {
    /// The configuration of the base.
    pub config: Config,

    /// Counters related to the operations applied to the base.
    pub counters: Counters,

    /// The beliefs held, keyed by formula, in insertion order.
    pub(crate) beliefs: Vec<Belief>,

    /// The source of rng.
    pub rng: R,
}

/// A base which uses [MinimalPCG32] as a source of randomness.
pub type Base = GenericBase<MinimalPCG32>;

impl Base {
    /// Creates an empty base from some given configuration.
    pub fn from_config(config: Config) -> Self {
        Self {
            rng: MinimalPCG32::from_seed(config.rng_seed.to_le_bytes()),

            config,

            counters: Counters::default(),
            beliefs: Vec::default(),
        }
    }
}

impl Default for Base {
    fn default() -> Self {
        Self::from_config(Config::default())
    }
}

impl<R: rand::Rng + std::default::Default> GenericBase<R> {
    /// Adds `formula → priority` to the base, with no consistency check.
    ///
    /// If the formula is already held, its priority is raised when strictly lower than the
    /// given priority, and kept otherwise.
    ///
    /// Expansion is a raw insertion, and may by itself render the base unsatisfiable ---
    /// within revision it is only applied after a consistency decision has been made.
    pub fn expand(&mut self, formula: Formula, priority: f64) -> ExpandOk {
        self.counters.expansions += 1;

        match self.position_of(&formula) {
            Some(index) => {
                let held = &mut self.beliefs[index];
                if held.priority() < priority {
                    log::trace!(target: targets::REVISION, "{held} raised to {priority}");
                    held.set_priority(priority);
                    ExpandOk::Raised
                } else {
                    ExpandOk::Unchanged
                }
            }

            None => {
                log::trace!(target: targets::REVISION, "{formula} added at {priority}");
                self.beliefs.push(Belief::new(formula, priority));
                ExpandOk::Added
            }
        }
    }

    /// Contracts the base against `formula`, about to be believed at `priority`, and expands
    /// the formula into the survivors.
    ///
    /// Beliefs are scanned in insertion order, greedily keeping each unless it raises a
    /// contradiction with the formula over the beliefs kept so far *and* is held at a
    /// priority strictly below the incoming one.
    /// Finding a contradicting belief at least as entrenched as the incoming formula vetoes
    /// the whole contraction: more entrenched beliefs win, and the base is unchanged.
    ///
    /// A formula which is unsatisfiable on its own contradicts every prefix of the scan,
    /// the empty prefix included, so no belief is the cause of the contradiction.
    /// Such a formula cannot be consistently believed, and the contraction is vetoed before
    /// any belief is examined.
    pub fn contract(&mut self, formula: Formula, priority: f64) -> ContractOk {
        self.counters.contractions += 1;

        let mut rng = std::mem::take(&mut self.rng);
        let selection = self.config.split_selection;

        if contradicted(&[], &formula, selection, &mut rng) {
            log::info!(
                target: targets::CONTRACTION,
                "{formula} ({priority}) is unsatisfiable on its own, contraction vetoed",
            );
            self.rng = rng;
            self.counters.vetoed_contractions += 1;
            return ContractOk::Vetoed;
        }

        let mut kept: Vec<Belief> = Vec::with_capacity(self.beliefs.len());
        let mut vetoed = false;

        for belief in &self.beliefs {
            kept.push(belief.clone());

            if contradicted(&kept, &formula, selection, &mut rng) {
                let culprit = kept.pop().expect("a belief was pushed above");

                if culprit.priority() >= priority {
                    log::info!(
                        target: targets::CONTRACTION,
                        "{culprit} is at least as entrenched as {formula} ({priority}), contraction vetoed",
                    );
                    vetoed = true;
                    break;
                }

                log::info!(target: targets::CONTRACTION, "{culprit} removed for {formula} ({priority})");
            }
        }

        self.rng = rng;

        if vetoed {
            self.counters.vetoed_contractions += 1;
            return ContractOk::Vetoed;
        }

        self.beliefs = kept;
        self.expand(formula, priority);

        ContractOk::Contracted
    }

    /// Revises the base with a formula at a priority.
    ///
    /// - Without a formula, revision is a no-op and the base is unchanged.
    /// - On an empty base, revision degenerates to expansion --- unless the formula is
    ///   unsatisfiable on its own, which vetoes the revision.
    /// - If the formula contradicts the base, contraction resolves the contradiction (or
    ///   vetoes the revision); otherwise the formula is expanded in directly.
    ///
    /// The base is satisfiable after every revision which is not vetoed.
    pub fn revise(&mut self, formula: Option<Formula>, priority: f64) -> ReviseOk {
        self.counters.revisions += 1;

        let Some(formula) = formula else {
            log::trace!(target: targets::REVISION, "revision without a formula is a no-op");
            return ReviseOk::Noop;
        };

        if self.beliefs.is_empty() {
            // Over an empty base a contradiction means the formula alone is unsatisfiable.
            if self.has_contradiction(&formula) {
                log::info!(
                    target: targets::REVISION,
                    "{formula} ({priority}) is unsatisfiable on its own, revision vetoed",
                );
                return ReviseOk::Vetoed;
            }

            self.expand(formula, priority);
            return ReviseOk::Expanded;
        }

        if self.has_contradiction(&formula) {
            match self.contract(formula, priority) {
                ContractOk::Contracted => ReviseOk::Contracted,
                ContractOk::Vetoed => ReviseOk::Vetoed,
            }
        } else {
            self.expand(formula, priority);
            ReviseOk::Expanded
        }
    }

    /// Removes every belief.
    pub fn clear(&mut self) {
        log::info!(target: targets::REVISION, "base cleared");
        self.beliefs.clear();
    }

    /// A read-only snapshot of the base, as a map from formula to priority.
    pub fn snapshot(&self) -> HashMap<Formula, f64> {
        self.beliefs
            .iter()
            .map(|belief| (belief.formula().clone(), belief.priority()))
            .collect()
    }

    /// The beliefs held, in insertion order.
    pub fn beliefs(&self) -> impl Iterator<Item = &Belief> {
        self.beliefs.iter()
    }

    /// The formulas held, in insertion order.
    pub fn formulas(&self) -> impl Iterator<Item = &Formula> {
        self.beliefs.iter().map(Belief::formula)
    }

    pub fn len(&self) -> usize {
        self.beliefs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.beliefs.is_empty()
    }

    /// Whether the formula is held, as a key.
    pub fn contains(&self, formula: &Formula) -> bool {
        self.position_of(formula).is_some()
    }

    /// The priority at which the formula is held, if held.
    pub fn priority_of(&self, formula: &Formula) -> Option<f64> {
        self.position_of(formula)
            .map(|index| self.beliefs[index].priority())
    }

    fn position_of(&self, formula: &Formula) -> Option<usize> {
        self.beliefs
            .iter()
            .position(|belief| belief.formula() == formula)
    }
}
