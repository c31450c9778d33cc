use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::SyntaxError,
    interpreter::{
        lexer::Token,
        parser::core::{parse_expression, ParseResult},
    },
};

/// Parses a sign-prefixed expression.
///
/// Supports the prefix operators `+` (identity) and `-` (negation). Sign
/// prefixes are right-associative and chain through recursion, so `--3`
/// parses as `Negate(Negate(3))` and `-+-3` is accepted as well.
///
/// If no sign is present, the function delegates to [`parse_primary`].
///
/// Grammar:
/// ```text
///     unary := ("+" | "-") unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::Unary`] node or a primary expression.
pub(crate) fn parse_unary<I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = Token>
{
    let op = match tokens.peek() {
        Some(Token::Plus) => UnaryOperator::Identity,
        Some(Token::Minus) => UnaryOperator::Negate,
        _ => return parse_primary(tokens),
    };
    tokens.next();
    let operand = parse_unary(tokens)?;
    Ok(Expr::Unary { op,
                     operand: Box::new(operand) })
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the grammar and include numeric
/// literals and parenthesized sub-expressions. The function dispatches on
/// the lookahead token; anything other than a number or `(` is a grammar
/// violation here, including [`Token::Invalid`] produced for unrecognized
/// characters.
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary.
///
/// # Returns
/// The parsed primary [`Expr`].
///
/// # Errors
/// - [`SyntaxError::ExpectedNumber`] for any token that cannot begin a
///   primary, or when the stream is exhausted (a bare trailing operator).
/// - Propagates errors from the parenthesized sub-expression.
pub(crate) fn parse_primary<I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = Token>
{
    match tokens.peek() {
        Some(Token::Number(_)) => parse_literal(tokens),
        Some(Token::LeftParen) => parse_grouping(tokens),
        Some(token) => Err(SyntaxError::ExpectedNumber { found: format!("{token:?}"), }),
        None => Err(SyntaxError::ExpectedNumber { found: "end of input".to_string(), }),
    }
}

/// Parses a parenthesized sub-expression.
///
/// Consumes the opening `(`, a full expression, and the matching `)`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at a `(` token.
///
/// # Returns
/// An [`Expr::Grouping`] node wrapping the inner expression.
///
/// # Errors
/// [`SyntaxError::ExpectedClosingParen`] if the `)` is missing.
fn parse_grouping<I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = Token>
{
    tokens.next(); // consume '('
    let expr = parse_expression(tokens)?;
    match tokens.next() {
        Some(Token::RightParen) => Ok(Expr::Grouping { expr: Box::new(expr), }),
        _ => Err(SyntaxError::ExpectedClosingParen),
    }
}

/// Parses a numeric literal.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at a [`Token::Number`].
///
/// # Returns
/// An [`Expr::Number`] containing the literal value.
///
/// # Errors
/// [`SyntaxError::ExpectedNumber`] if the next token is not a numeric
/// literal.
fn parse_literal<I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = Token>
{
    match tokens.next() {
        Some(Token::Number(value)) => Ok(Expr::Number(value)),
        Some(token) => Err(SyntaxError::ExpectedNumber { found: format!("{token:?}"), }),
        None => Err(SyntaxError::ExpectedNumber { found: "end of input".to_string(), }),
    }
}
