/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [parsing](crate::structures::formula) formula text.
    pub const PARSE: &str = "parse";

    /// Logs related to [conversion to conjunctive normal form](crate::procedures::cnf).
    pub const CNF: &str = "cnf";

    /// Logs related to unit propagation during the [satisfiability search](crate::procedures::dpll).
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to case splits during the [satisfiability search](crate::procedures::dpll).
    pub const SEARCH: &str = "search";

    /// Logs related to [entailment](crate::procedures::entailment) queries.
    pub const ENTAILMENT: &str = "entailment";

    /// Logs related to [revision](crate::base) of a belief base.
    pub const REVISION: &str = "revision";

    /// Logs related to [contraction](crate::base) of a belief base.
    pub const CONTRACTION: &str = "contraction";
}
