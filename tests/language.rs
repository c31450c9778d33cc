use numeval::{error::SyntaxError, evaluate};

fn assert_evaluates(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(value) => {
            assert!(value == expected,
                    "Expression '{src}' evaluated to {value}, expected {expected}")
        },
        Err(e) => panic!("Expression '{src}' failed: {e}"),
    }
}

fn assert_syntax_error(src: &str) {
    if let Ok(value) = evaluate(src) {
        panic!("Expression '{src}' evaluated to {value} but was expected to fail")
    }
}

#[test]
fn basic_arithmetic() {
    assert_evaluates("1 + 2", 3.0);
    assert_evaluates("7 * 9", 63.0);
    assert_evaluates("8 - 5", 3.0);
    assert_evaluates("10 / 2", 5.0);
    assert_evaluates("42", 42.0);
}

#[test]
fn additive_operators_are_left_associative() {
    assert_evaluates("2 - 3 - 4", -5.0);
    assert_evaluates("1 - 2 + 3", 2.0);
}

#[test]
fn multiplicative_operators_are_left_associative() {
    assert_evaluates("8 / 4 / 2", 1.0);
    assert_evaluates("8 / 2 * 4", 16.0);
}

#[test]
fn exponentiation_is_right_associative() {
    assert_evaluates("2^3^2", 512.0);
    assert_evaluates("2 ^ 2 ^ 3", 256.0);
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_evaluates("2 + 3 * 4", 14.0);
    assert_evaluates("2 - 6 / 3", 0.0);
}

#[test]
fn exponentiation_binds_tighter_than_multiplication() {
    assert_evaluates("2 * 3 ^ 2", 18.0);
    assert_evaluates("16 / 2 ^ 3", 2.0);
}

#[test]
fn parentheses_override_precedence() {
    assert_evaluates("(2 + 3) * 4", 20.0);
    assert_evaluates("2 ^ (1 + 2)", 8.0);
    assert_evaluates("((1))", 1.0);
}

#[test]
fn unary_signs_chain() {
    assert_evaluates("-3", -3.0);
    assert_evaluates("+3", 3.0);
    assert_evaluates("--3", 3.0);
    assert_evaluates("-+-3", 3.0);
    assert_evaluates("2 - -3", 5.0);
}

#[test]
fn sign_is_part_of_the_exponentiation_base() {
    // The grammar puts the sign inside the primary, so it binds tighter
    // than `^`.
    assert_evaluates("-2 ^ 2", 4.0);
    assert_evaluates("2 ^ -1", 0.5);
}

#[test]
fn numeric_literal_forms() {
    assert_evaluates("3.14", 3.14);
    // A trailing dot is legal and reads as the integer value.
    assert_evaluates("3.", 3.0);
    assert_evaluates("0.5", 0.5);
}

#[test]
fn whitespace_is_insignificant() {
    assert_evaluates(" 3 + 4 ", 7.0);
    assert_evaluates("3+4", 7.0);
    assert_evaluates("\t1 +\n2", 3.0);
}

#[test]
fn division_by_zero_follows_ieee_semantics() {
    assert_evaluates("1 / 0", f64::INFINITY);
    assert_evaluates("-1 / 0", f64::NEG_INFINITY);
    assert!(evaluate("0 / 0").unwrap().is_nan());
}

#[test]
fn invalid_power_domain_yields_nan() {
    assert!(evaluate("(-2) ^ 0.5").unwrap().is_nan());
}

#[test]
fn unbalanced_parentheses_are_rejected() {
    assert_eq!(evaluate("(2 + 3"), Err(SyntaxError::ExpectedClosingParen));
    assert_syntax_error("(");
    assert_syntax_error("(1 + (2 * 3)");
}

#[test]
fn bare_operator_is_rejected() {
    assert_eq!(evaluate("+"),
               Err(SyntaxError::ExpectedNumber { found: "end of input".to_string(), }));
    assert_syntax_error("2 +");
    assert_syntax_error("*");
    assert_syntax_error("");
}

#[test]
fn unrecognized_characters_are_rejected_in_grammar_positions() {
    // The lexer itself never fails; the '&' becomes an Invalid token and
    // the parser rejects it where an operand is required.
    assert_syntax_error("& 2");
    assert_syntax_error("3 + & 4");
    assert_syntax_error("(3 & 4)");
}

#[test]
fn trailing_input_after_one_expression_is_ignored() {
    // The grammar consumes exactly one expression and does not require the
    // input to be exhausted, so trailing tokens are silently dropped. This
    // pins the original permissive behavior rather than fixing it.
    assert_evaluates("3 + 4 banana", 7.0);
    assert_evaluates("3 & 4", 3.0);
    assert_evaluates("1 2 3", 1.0);
    assert_evaluates("(1 + 2) )", 3.0);
}

#[test]
fn independent_evaluations_share_no_state() {
    assert_syntax_error("(2 + 3");
    // A failed parse leaves nothing behind that affects the next call.
    assert_evaluates("(2 + 3)", 5.0);
}
