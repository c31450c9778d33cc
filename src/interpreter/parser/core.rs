use std::iter::Peekable;

use crate::{
    ast::Expr,
    interpreter::{lexer::Token, parser::binary::parse_additive},
};

pub type ParseResult<T> = Result<T, crate::error::SyntaxError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, addition and subtraction, and
/// recursively descends through the precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// Exactly one expression is consumed. This function does not require the
/// stream to be exhausted afterwards; the caller decides what to do with any
/// trailing tokens.
///
/// # Parameters
/// - `tokens`: Token iterator with single-token lookahead.
///
/// # Returns
/// The root node of the parsed expression.
pub fn parse_expression<I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = Token>
{
    parse_additive(tokens)
}
