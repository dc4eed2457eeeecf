/// The error returned when a range expression cannot be resolved.
///
/// Every variant means the same thing to a caller (the input is not a valid
/// range expression and the manifest carrying it should be rejected), but the
/// message names the specific contract that was violated.
#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
pub enum ParseError {
    /// A token failed the anchored `COMPARATOR? VERSION` grammar.
    #[error("token `{token}` should match the Toolkit version format")]
    InvalidToken {
        /// The offending token, as split from the input.
        token: String,
    },

    /// The input split into more whitespace-separated tokens than a range
    /// expression can have.
    #[error("range expression should have at most 3 tokens, got {count}")]
    TooManyTokens {
        /// How many tokens the input split into.
        count: usize,
    },

    /// A three-token expression whose middle token is not the literal `-`.
    #[error("middle token of a dash range should be `-`, got `{token}`")]
    BadRangeSeparator {
        /// The token found where `-` was expected.
        token: String,
    },

    /// The resolved bounds describe an empty interval.
    #[error("resolved minimum `{min}` should not exceed maximum `{max}`")]
    EmptyRange {
        /// The resolved lower bound.
        min: String,
        /// The resolved upper bound.
        max: String,
    },
}
