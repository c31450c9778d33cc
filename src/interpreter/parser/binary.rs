use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
/// The tree leans left: `a + b - c` parses as `(a + b) - c`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::Binary`] tree representing the parsed expression.
pub fn parse_additive<I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = Token>
{
    let mut left = parse_multiplicative(tokens)?;
    loop {
        let op = match tokens.peek().and_then(token_to_binary_operator) {
            Some(op @ (BinaryOperator::Add | BinaryOperator::Sub)) => op,
            _ => break,
        };
        tokens.next();
        let right = parse_multiplicative(tokens)?;
        left = Expr::Binary { left: Box::new(left),
                              op,
                              right: Box::new(right) };
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`, which bind tighter than
/// the additive level because this is the production invoked to build each
/// additive operand.
///
/// The rule is: `multiplicative := exponent (("*" | "/") exponent)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// A binary expression tree combining exponent-level nodes.
pub fn parse_multiplicative<I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = Token>
{
    let mut left = parse_exponent(tokens)?;
    loop {
        let op = match tokens.peek().and_then(token_to_binary_operator) {
            Some(op @ (BinaryOperator::Mul | BinaryOperator::Div)) => op,
            _ => break,
        };
        tokens.next();
        let right = parse_exponent(tokens)?;
        left = Expr::Binary { left: Box::new(left),
                              op,
                              right: Box::new(right) };
    }
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// Exponentiation is right-associative, implemented by right recursion:
/// `a ^ b ^ c` parses as `a ^ (b ^ c)`. The operands are sign-prefixed
/// primaries, so `-2 ^ 2` parses as `(-2) ^ 2`.
///
/// The rule is: `exponent := unary ("^" exponent)?`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An exponentiation expression tree.
pub fn parse_exponent<I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = Token>
{
    let base = parse_unary(tokens)?;
    if let Some(Token::Caret) = tokens.peek() {
        tokens.next();
        let exponent = parse_exponent(tokens)?;
        return Ok(Expr::Binary { left: Box::new(base),
                                 op: BinaryOperator::Pow,
                                 right: Box::new(exponent) });
    }
    Ok(base)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents a binary
/// operator (`+`, `-`, `*`, `/`, `^`), and `None` for all other tokens.
/// This is the only place tokens become AST operators, which is what
/// guarantees that no non-arithmetic operator can appear in a
/// [`Expr::Binary`] node.
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Returns
/// `Some(BinaryOperator)` if the token corresponds to a binary operator,
/// otherwise `None`.
///
/// # Example
/// ```
/// use numeval::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::LeftParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Caret => Some(BinaryOperator::Pow),
        _ => None,
    }
}
