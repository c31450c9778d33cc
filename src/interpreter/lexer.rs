use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the expression grammar.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14` or `3.`.
    ///
    /// A literal is a run of digits, optionally followed by a single `.` and
    /// a further run of digits. The leading digit is mandatory, so a bare
    /// `.5` is not a number; a trailing-dot literal like `3.` is, and lexes
    /// as the integer value.
    #[regex(r"[0-9]+\.?[0-9]*", parse_number)]
    Number(f64),
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// Any character the grammar has no use for.
    ///
    /// Lexing never fails; an unrecognized character is consumed as one
    /// `Invalid` token and rejected by the parser once it reaches a grammar
    /// position.
    #[regex(r".", priority = 0)]
    Invalid,
    /// Spaces, tabs and line breaks.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// Produces the lazy token stream for a source string.
///
/// Tokens are pulled from the underlying lexer one at a time; nothing is
/// materialized up front, so memory stays bounded to the active line. The
/// stream ends (`None`) when the input is exhausted.
///
/// # Parameters
/// - `source`: The text to tokenize.
///
/// # Returns
/// An iterator yielding one [`Token`] per pull.
pub fn token_stream(source: &str) -> impl Iterator<Item = Token> + '_ {
    Token::lexer(source).map(|token| token.unwrap_or(Token::Invalid))
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the token slice is not a valid number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
