/*!
Conversion of a formula to conjunctive normal form.

# Overview

The conversion is a pipeline of rewrites, applied in order:

1. *Eliminate derived connectives*, bottom-up:
   - A > B ⤳ ~A | B
   - A = B ⤳ (~A | B) & (~B | A)
2. *Push negation inward*, by De Morgan duality and double-negation elimination:
   - ~(A & B) ⤳ ~A | ~B
   - ~(A | B) ⤳ ~A & ~B
   - ~~A ⤳ A

   Negation applied directly to a variable is a literal, and is left as-is.
3. *Distribute disjunction over conjunction*, to a fixed point:
   - (A & B) | C ⤳ (A | C) & (B | C), and symmetrically.

   Each rewrite strictly reduces the count of disjunctions directly above conjunctions, so a
   fixed point exists.
   Still, the loop carries a termination guard derived from the size of the formula, and a
   structurally unchanged formula after a full pass is taken as the fixed point.
4. *Flatten* the resulting tree: each maximal chain of disjunctions becomes one clause, and
   the chain of conjunctions above becomes the clause collection.

The converter does not simplify: a tautological formula may still yield a non-trivial
clause collection.
Redundancy at the literal level may be pruned afterwards, via
[without_tautologies](crate::structures::cnf::Cnf::without_tautologies).

# Example

```rust
# use entrench::structures::formula::Formula;
let formula = Formula::parse("p > (q & r)").unwrap();
let cnf = formula.to_cnf();

// (~p | q) & (~p | r)
assert_eq!(cnf.len(), 2);
for clause in cnf.clauses() {
    assert_eq!(clause.len(), 2);
}
```
*/

use crate::{
    misc::log::targets::{self},
    structures::{clause::Clause, cnf::Cnf, formula::Formula, literal::Literal},
};

impl Formula {
    /// The formula, flattened to conjunctive normal form.
    ///
    /// A formula which is a single variable yields a one-clause, one-literal cnf.
    pub fn to_cnf(&self) -> Cnf {
        let eliminated = eliminate_connectives(self.clone());
        let negation_normal = push_negations(eliminated);
        let distributed = distribute(negation_normal);

        let mut cnf = Cnf::default();
        flatten(&distributed, &mut cnf);

        log::trace!(target: targets::CNF, "{self} flattened to {cnf}");
        cnf
    }
}

/// Rewrites implications and equivalences in terms of negation, conjunction, and disjunction.
///
/// Subtrees are rewritten first, so nested occurrences are fully eliminated.
fn eliminate_connectives(formula: Formula) -> Formula {
    match formula {
        Formula::Variable(v) => Formula::Variable(v),

        Formula::Not(inner) => Formula::not(eliminate_connectives(*inner)),

        Formula::And(a, b) => {
            Formula::and(eliminate_connectives(*a), eliminate_connectives(*b))
        }

        Formula::Or(a, b) => Formula::or(eliminate_connectives(*a), eliminate_connectives(*b)),

        Formula::Implies(a, b) => {
            let antecedent = eliminate_connectives(*a);
            let consequent = eliminate_connectives(*b);
            Formula::or(Formula::not(antecedent), consequent)
        }

        Formula::Equivalent(a, b) => {
            let left = eliminate_connectives(*a);
            let right = eliminate_connectives(*b);
            Formula::and(
                Formula::or(Formula::not(left.clone()), right.clone()),
                Formula::or(Formula::not(right), left),
            )
        }
    }
}

/// Pushes negation inward until it applies only to variables.
///
/// Expects derived connectives to have been eliminated, and fails loudly otherwise.
fn push_negations(formula: Formula) -> Formula {
    match formula {
        Formula::Variable(v) => Formula::Variable(v),

        Formula::And(a, b) => Formula::and(push_negations(*a), push_negations(*b)),

        Formula::Or(a, b) => Formula::or(push_negations(*a), push_negations(*b)),

        Formula::Not(inner) => match *inner {
            Formula::Variable(v) => Formula::not(Formula::Variable(v)),

            Formula::Not(f) => push_negations(*f),

            Formula::And(a, b) => Formula::or(
                push_negations(Formula::not(*a)),
                push_negations(Formula::not(*b)),
            ),

            Formula::Or(a, b) => Formula::and(
                push_negations(Formula::not(*a)),
                push_negations(Formula::not(*b)),
            ),

            derived => panic!("derived connective {derived} survived elimination"),
        },

        derived => panic!("derived connective {derived} survived elimination"),
    }
}

/// Distributes disjunction over conjunction, to a fixed point.
fn distribute(formula: Formula) -> Formula {
    let pass_limit = formula.size();
    let mut current = formula;

    for _ in 0..pass_limit {
        let next = distribute_pass(current.clone());
        if next == current {
            return current;
        }
        current = next;
    }

    log::warn!(target: targets::CNF, "distribution pass limit reached, taken as a fixed point");
    current
}

/// One full rewrite pass over the formula.
fn distribute_pass(formula: Formula) -> Formula {
    match formula {
        Formula::And(a, b) => Formula::and(distribute_pass(*a), distribute_pass(*b)),

        Formula::Or(a, b) => {
            let a = distribute_pass(*a);
            let b = distribute_pass(*b);
            match (a, b) {
                (Formula::And(p, q), c) => {
                    Formula::and(Formula::or(*p, c.clone()), Formula::or(*q, c))
                }

                (c, Formula::And(p, q)) => {
                    Formula::and(Formula::or(c.clone(), *p), Formula::or(c, *q))
                }

                (a, b) => Formula::or(a, b),
            }
        }

        other => other,
    }
}

/// Collects each branch of the conjunction chain as a clause.
fn flatten(formula: &Formula, cnf: &mut Cnf) {
    match formula {
        Formula::And(a, b) => {
            flatten(a, cnf);
            flatten(b, cnf);
        }

        disjunct => {
            let mut clause = Clause::default();
            collect_literals(disjunct, &mut clause);
            cnf.push(clause);
        }
    }
}

/// Collects the literals of a disjunction chain into a clause.
fn collect_literals(formula: &Formula, clause: &mut Clause) {
    match formula {
        Formula::Or(a, b) => {
            collect_literals(a, clause);
            collect_literals(b, clause);
        }

        literal => clause.insert(literal_of(literal)),
    }
}

/// Reads a literal from a formula in negation normal form.
///
/// A non-literal here is an invariant violation of the rewrite pipeline, and a defect.
fn literal_of(formula: &Formula) -> Literal {
    match formula {
        Formula::Variable(v) => Literal::new(v.clone(), true),

        Formula::Not(inner) => match inner.as_ref() {
            Formula::Variable(v) => Literal::new(v.clone(), false),
            other => panic!("negation of a non-variable {other} in a clause position"),
        },

        other => panic!("non-literal {other} in a clause position"),
    }
}

#[cfg(test)]
mod cnf_tests {
    use super::*;

    #[test]
    fn single_variable() {
        let cnf = Formula::variable("p").to_cnf();
        assert_eq!(cnf.len(), 1);
        assert_eq!(cnf.clauses()[0].len(), 1);
    }

    #[test]
    fn implication_elimination() {
        let cnf = Formula::parse("p > q").unwrap().to_cnf();
        let expected = Formula::parse("~p | q").unwrap().to_cnf();
        assert_eq!(cnf, expected);
    }

    #[test]
    fn nested_implications() {
        // (p > q) > r ⤳ (p | r) & (~q | r), after distribution.
        let cnf = Formula::parse("(p > q) > r").unwrap().to_cnf();
        assert_eq!(cnf.len(), 2);
    }

    #[test]
    fn equivalence_elimination() {
        let p = Formula::variable("p");
        let q = Formula::variable("q");
        let cnf = Formula::equivalent(p, q).to_cnf();
        // (~p | q) & (~q | p)
        assert_eq!(cnf.len(), 2);
    }

    #[test]
    fn de_morgan() {
        let cnf = Formula::parse("~(p | q)").unwrap().to_cnf();
        let expected = Formula::parse("~p & ~q").unwrap().to_cnf();
        assert_eq!(cnf, expected);

        let cnf = Formula::parse("~(p & q)").unwrap().to_cnf();
        let expected = Formula::parse("~p | ~q").unwrap().to_cnf();
        assert_eq!(cnf, expected);
    }

    #[test]
    fn double_negation() {
        let cnf = Formula::parse("~~p").unwrap().to_cnf();
        let expected = Formula::parse("p").unwrap().to_cnf();
        assert_eq!(cnf, expected);
    }

    #[test]
    fn distribution() {
        // (p & q) | r ⤳ (p | r) & (q | r)
        let cnf = Formula::parse("(p & q) | r").unwrap().to_cnf();
        assert_eq!(cnf.len(), 2);
        for clause in cnf.clauses() {
            assert_eq!(clause.len(), 2);
        }
    }

    #[test]
    fn tautologies_kept_by_converter() {
        let cnf = Formula::parse("p | ~p").unwrap().to_cnf();
        assert_eq!(cnf.len(), 1);
        assert!(cnf.clauses()[0].is_tautological());

        assert!(cnf.without_tautologies().is_empty());
    }
}
