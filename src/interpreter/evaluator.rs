use crate::ast::{BinaryOperator, Expr, UnaryOperator};

/// Evaluates an expression tree and returns the resulting value.
///
/// This is the main entry point for evaluation. The evaluator dispatches on
/// the expression variant and recursively reduces the tree to an `f64`.
/// Evaluation cannot fail: the operator enums admit only arithmetic
/// operators, and floating-point domain issues (division by zero, invalid
/// powers) propagate as IEEE 754 infinities or NaN rather than errors.
///
/// # Parameters
/// - `expr`: Expression to evaluate.
///
/// # Returns
/// The computed value.
///
/// # Example
/// ```
/// use numeval::{ast::Expr, interpreter::evaluator::eval};
///
/// assert_eq!(eval(&Expr::Number(2.5)), 2.5);
/// ```
#[must_use]
pub fn eval(expr: &Expr) -> f64 {
    match expr {
        Expr::Number(value) => *value,
        Expr::Unary { op, operand } => eval_unary(*op, eval(operand)),
        Expr::Binary { left, op, right } => eval_binary(eval(left), *op, eval(right)),
        Expr::Grouping { expr } => eval(expr),
    }
}

/// Evaluates a unary sign operation on a value.
///
/// `Identity` returns the value unchanged; `Negate` flips its sign.
#[must_use]
pub fn eval_unary(op: UnaryOperator, value: f64) -> f64 {
    match op {
        UnaryOperator::Identity => value,
        UnaryOperator::Negate => -value,
    }
}

/// Evaluates a binary arithmetic operation.
///
/// Exponentiation uses [`f64::powf`], so fractional and negative exponents
/// follow its domain rules: a negative base with a fractional exponent
/// yields NaN. Division follows IEEE 754: `1 / 0` is infinity and `0 / 0`
/// is NaN, never an error.
///
/// # Example
/// ```
/// use numeval::{ast::BinaryOperator, interpreter::evaluator::eval_binary};
///
/// assert_eq!(eval_binary(2.0, BinaryOperator::Pow, 10.0), 1024.0);
/// assert_eq!(eval_binary(1.0, BinaryOperator::Div, 0.0), f64::INFINITY);
/// ```
#[must_use]
pub fn eval_binary(left: f64, op: BinaryOperator, right: f64) -> f64 {
    match op {
        BinaryOperator::Add => left + right,
        BinaryOperator::Sub => left - right,
        BinaryOperator::Mul => left * right,
        BinaryOperator::Div => left / right,
        BinaryOperator::Pow => left.powf(right),
    }
}
