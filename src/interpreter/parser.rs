/// Core parsing entry point.
///
/// Declares the `ParseResult` alias and the top-level `parse_expression`
/// function that begins the recursive descent.
pub mod core;

/// Binary operator parsing.
///
/// Implements the precedence ladder for all binary operators: the
/// left-associative additive and multiplicative levels and the
/// right-associative exponentiation level.
pub mod binary;

/// Unary and primary parsing.
///
/// Handles sign prefixes, numeric literals and parenthesized groupings at
/// the bottom of the grammar.
pub mod unary;
