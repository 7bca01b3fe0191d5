/*!
Propositional formulas.

A formula is an immutable tree over a closed set of connectives:
negation, conjunction, disjunction, implication, and equivalence, with
[variables](crate::structures::variable::Variable) at the leaves.

Formulas are built by [parsing](Formula::parse) text, or programmatically via the
associated constructors.
Equality and hashing are structural, so a formula may be used as a key (e.g. by a
[base](crate::base)) and freely shared read-only.

# Example

```rust
# use entrench::structures::formula::Formula;
let parsed = Formula::parse("~p & (q | r)").unwrap();

let built = Formula::and(
    Formula::not(Formula::variable("p")),
    Formula::or(Formula::variable("q"), Formula::variable("r")),
);

assert_eq!(parsed, built);
```
*/

mod parse;

use std::collections::BTreeSet;

use crate::structures::variable::Variable;

/// A propositional formula.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Formula {
    /// An atomic proposition.
    Variable(Variable),

    /// The negation of a formula.
    Not(Box<Formula>),

    /// The conjunction of two formulas.
    And(Box<Formula>, Box<Formula>),

    /// The disjunction of two formulas.
    Or(Box<Formula>, Box<Formula>),

    /// A material implication.
    Implies(Box<Formula>, Box<Formula>),

    /// A material equivalence.
    ///
    /// Equivalence has no token in the text grammar, though the conversion to conjunctive
    /// normal form handles the connective wherever it occurs.
    Equivalent(Box<Formula>, Box<Formula>),
}

impl Formula {
    /// An atomic formula over a variable with the given name.
    pub fn variable(name: impl AsRef<str>) -> Self {
        Formula::Variable(Variable::new(name))
    }

    /// The negation of a formula.
    pub fn not(formula: Formula) -> Self {
        Formula::Not(Box::new(formula))
    }

    /// The conjunction of two formulas.
    pub fn and(left: Formula, right: Formula) -> Self {
        Formula::And(Box::new(left), Box::new(right))
    }

    /// The disjunction of two formulas.
    pub fn or(left: Formula, right: Formula) -> Self {
        Formula::Or(Box::new(left), Box::new(right))
    }

    /// An implication from `left` to `right`.
    pub fn implies(left: Formula, right: Formula) -> Self {
        Formula::Implies(Box::new(left), Box::new(right))
    }

    /// An equivalence of two formulas.
    pub fn equivalent(left: Formula, right: Formula) -> Self {
        Formula::Equivalent(Box::new(left), Box::new(right))
    }

    /// A count of the nodes of the formula tree.
    pub fn size(&self) -> usize {
        match self {
            Self::Variable(_) => 1,
            Self::Not(f) => 1 + f.size(),
            Self::And(a, b)
            | Self::Or(a, b)
            | Self::Implies(a, b)
            | Self::Equivalent(a, b) => 1 + a.size() + b.size(),
        }
    }

    /// The distinct variables occurring in the formula.
    pub fn variables(&self) -> BTreeSet<Variable> {
        let mut variables = BTreeSet::new();
        self.collect_variables(&mut variables);
        variables
    }

    fn collect_variables(&self, variables: &mut BTreeSet<Variable>) {
        match self {
            Self::Variable(v) => {
                variables.insert(v.clone());
            }
            Self::Not(f) => f.collect_variables(variables),
            Self::And(a, b)
            | Self::Or(a, b)
            | Self::Implies(a, b)
            | Self::Equivalent(a, b) => {
                a.collect_variables(variables);
                b.collect_variables(variables);
            }
        }
    }
}


impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Variable(v) => write!(f, "{v}"),
            Self::Not(inner) => match inner.as_ref() {
                Self::Variable(_) | Self::Not(_) => write!(f, "~{inner}"),
                _ => write!(f, "~({inner})"),
            },
            Self::And(a, b) => write!(f, "({a} & {b})"),
            Self::Or(a, b) => write!(f, "({a} | {b})"),
            Self::Implies(a, b) => write!(f, "({a} > {b})"),
            Self::Equivalent(a, b) => write!(f, "({a} = {b})"),
        }
    }
}
