//! Error types used in the library.
//!
//! - Parse errors are external --- malformed formula text surfaces to the caller with a
//!   descriptive message, and the operation which required the formula is abandoned.
//! - A contradiction is *not* an error. Contradictions are expected control-flow outcomes
//!   of revision, handled by contraction.
//! - Internal invariant violations (e.g. a non-literal reaching a clause position during
//!   flattening) are defects, and fail loudly via a panic rather than an error value.

/// A general error, wrapping the specific errors of the library.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Parse(ParseError),
}

/// Errors from parsing formula text.
///
/// Each variant [displays](std::fmt::Display) as `Invalid proposition syntax: <reason>`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// An empty string, where a formula was required.
    Empty,

    /// Opening and closing brackets do not pair.
    UnbalancedBrackets,

    /// A character outside the formula alphabet.
    UnexpectedCharacter(char),

    /// A binary operator where an operand was required.
    ///
    /// Covers consecutive binary operators, a leading binary operator, and a binary
    /// operator directly after an opening bracket or a negation.
    MisplacedOperator,

    /// An operator with no operand to its right.
    TrailingOperator,

    /// Two operands with no connective between them.
    MissingConnective,

    /// A pair of brackets with nothing inside.
    EmptyBrackets,

    /// A token the parser could not fit into the grammar.
    ///
    /// Unexpected, as token-sequence validation happens before parsing.
    UnexpectedToken,
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

#[cfg(test)]
mod err_tests {
    use super::*;

    #[test]
    fn parse_errors_wrap_and_display() {
        let kind = ErrorKind::from(ParseError::EmptyBrackets);
        assert_eq!(kind, ErrorKind::Parse(ParseError::EmptyBrackets));
        assert_eq!(
            kind.to_string(),
            "Invalid proposition syntax: brackets with nothing inside"
        );
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid proposition syntax: ")?;
        match self {
            Self::Empty => write!(f, "empty formula"),
            Self::UnbalancedBrackets => write!(f, "unbalanced brackets"),
            Self::UnexpectedCharacter(c) => write!(f, "unexpected character '{c}'"),
            Self::MisplacedOperator => write!(f, "operator where an operand was required"),
            Self::TrailingOperator => write!(f, "operator with nothing to apply to"),
            Self::MissingConnective => write!(f, "adjacent operands without a connective"),
            Self::EmptyBrackets => write!(f, "brackets with nothing inside"),
            Self::UnexpectedToken => write!(f, "token sequence does not form a formula"),
        }
    }
}
