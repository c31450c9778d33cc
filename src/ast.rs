/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// `Expr` covers every construct the grammar can produce: numeric literals,
/// sign-prefixed operands, binary arithmetic, and explicit parenthesized
/// grouping. Each node exclusively owns its children, so a parsed expression
/// forms a strict tree that is built once by the parser, walked once by the
/// evaluator, and then dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal such as `3.14`.
    Number(f64),
    /// A sign-prefixed operand (e.g. `-x` or `+x`).
    Unary {
        /// The unary operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
    },
    /// A binary arithmetic operation (addition, subtraction, etc.).
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// An explicitly parenthesized sub-expression.
    ///
    /// Grouping is a semantic no-op: evaluation simply unwraps it. The node
    /// is kept so the tree records exactly what was written.
    Grouping {
        /// The wrapped expression.
        expr: Box<Self>,
    },
}

/// Represents a binary arithmetic operator.
///
/// These are the only operators an [`Expr::Binary`] node can carry; the
/// conversion from tokens happens in the parser, so no other operator can
/// reach the evaluator by construction.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
}

/// Represents a unary sign operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Leading `+`; leaves the operand unchanged.
    Identity,
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Identity => "+",
            Self::Negate => "-",
        };
        write!(f, "{operator}")
    }
}
