/*!
Configuration of a base.

All configuration for a base is contained within the base, and is fixed when the base is created.
*/

mod split;
pub use split::SplitSelection;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// How the literal to split on is chosen during the satisfiability search.
    ///
    /// The choice affects the shape of the search, never its answer.
    pub split_selection: SplitSelection,

    /// The seed for the source of randomness held by a base.
    pub rng_seed: u64,
}

impl Default for Config {
    /// The default configuration is deterministic: splits take the first literal of the first clause.
    fn default() -> Self {
        Config {
            split_selection: SplitSelection::First,
            rng_seed: 0,
        }
    }
}
