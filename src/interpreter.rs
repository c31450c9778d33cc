/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST and reduces it to a double-precision
/// result. It is the final stage of the pipeline.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported arithmetic operations.
/// - Follows IEEE 754 semantics throughout: division by zero and invalid
///   power operations produce infinities or NaN, never errors.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer (tokenizer) reads the raw input and produces a lazy stream of
/// tokens, each corresponding to a meaningful element such as a number, an
/// operator, or a parenthesis. This is the first stage of the pipeline.
///
/// # Responsibilities
/// - Converts the input character stream into tokens, one per pull.
/// - Handles numeric literals, operators, and parentheses; skips whitespace.
/// - Never fails: unrecognized characters become [`lexer::Token::Invalid`]
///   and are rejected later by the parser.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser consumes the token stream produced by the lexer with a single
/// token of lookahead and constructs an AST representing the structure of
/// the expression. This is the second stage of the pipeline.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes via recursive descent.
/// - Enforces operator precedence and associativity through the grammar.
/// - Reports syntax errors naming the token kind that was expected.
pub mod parser;
