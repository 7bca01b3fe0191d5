/// Counters over the operations applied to a base.
#[derive(Clone, Debug, Default)]
pub struct Counters {
    /// Revisions requested, including no-op revisions without a formula.
    pub revisions: u64,

    /// Expansions applied, whether directly or as the trailing step of a contraction.
    pub expansions: u64,

    /// Contractions attempted.
    pub contractions: u64,

    /// Contractions abandoned: a contradicting belief was at least as entrenched as the
    /// incoming formula, or the formula was unsatisfiable on its own.
    pub vetoed_contractions: u64,

    /// Entailment queries answered, over the live base or a hypothetical snapshot.
    pub entailment_queries: u64,
}
