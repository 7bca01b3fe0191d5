/// How the literal to split on is chosen when unit propagation is exhausted and clauses remain.
///
/// Any choice of a literal occurring in some remaining clause is sound, as both values of the
/// literal are examined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SplitSelection {
    /// The first literal of the first remaining clause.
    #[default]
    First,

    /// A random literal of a random remaining clause, from the rng of the base.
    Random,
}

impl std::fmt::Display for SplitSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::First => write!(f, "first"),
            Self::Random => write!(f, "random"),
        }
    }
}
