//! # numeval
//!
//! numeval is an arithmetic expression evaluator written in Rust.
//! It tokenizes, parses, and evaluates a single line of arithmetic with the
//! usual operator precedence, unary signs, parentheses, and right-associative
//! exponentiation.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::SyntaxError,
    interpreter::{evaluator::eval, lexer::token_stream, parser::core::parse_expression},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator types that
/// represent the syntactic structure of an expression as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression nodes for literals, signs, binary operations, and
///   explicit grouping.
/// - Restricts operator fields to the arithmetic operator set by type.
pub mod ast;
/// Provides the error type for parsing.
///
/// This module defines the single failure mode of the pipeline: a syntax
/// error raised when the lookahead token does not satisfy a grammar
/// production. Each error names the token kind that was expected.
///
/// # Responsibilities
/// - Defines the `SyntaxError` enum for all grammar violations.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together lexing, parsing, and evaluation to provide a
/// complete pipeline from source text to numeric result.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Evaluates one line of arithmetic and returns the numeric result.
///
/// The input is tokenized lazily, parsed into an AST by recursive descent,
/// and reduced to an `f64`. Each call is independent: a fresh lexer and
/// parser are bound to the given line and no state survives the call.
///
/// Exactly one expression is parsed; tokens after it are ignored rather
/// than rejected, matching the grammar, which does not require the whole
/// input to be consumed.
///
/// # Errors
/// Returns a [`SyntaxError`] describing the expected token kind if the
/// input does not conform to the grammar.
///
/// # Examples
/// ```
/// use numeval::evaluate;
///
/// // Multiplication binds tighter than addition.
/// assert_eq!(evaluate("2 + 3 * 4"), Ok(14.0));
///
/// // Exponentiation is right-associative.
/// assert_eq!(evaluate("2^3^2"), Ok(512.0));
///
/// // Malformed input reports what the grammar expected.
/// assert!(evaluate("(2 + 3").is_err());
/// ```
pub fn evaluate(input: &str) -> Result<f64, SyntaxError> {
    let mut tokens = token_stream(input).peekable();
    let expr = parse_expression(&mut tokens)?;
    Ok(eval(&expr))
}
