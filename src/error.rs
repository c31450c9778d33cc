#[derive(Debug, PartialEq)]
/// Represents all errors that can occur while parsing an expression.
///
/// Each variant names the token kind the grammar expected at the point of
/// failure. Tokens carry no source positions, so neither do these errors.
pub enum SyntaxError {
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen,
    /// A numeric literal was expected, but something else was found.
    ExpectedNumber {
        /// A rendering of what was found instead, which may be another
        /// token or the end of the input.
        found: String,
    },
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExpectedClosingParen => {
                write!(f, "Expected closing parenthesis ')' but none found.")
            },

            Self::ExpectedNumber { found } => {
                write!(f, "Expected a numeric literal, found {found}.")
            },
        }
    }
}

impl std::error::Error for SyntaxError {}
