//! End-to-end evaluation tests through `Interpreter::evaluate`.

use labka::{Error, Interpreter, ParseError, RuntimeError, ScanError};
use rstest::rstest;

fn eval(source: &str) -> Result<f64, Error> {
    Interpreter::new().evaluate(source)
}

#[rstest]
#[case("0", 0.0)]
#[case("7", 7.0)]
#[case("42", 42.0)]
#[case("007", 7.0)]
#[case("9007199254740992", 9007199254740992.0)]
fn integer_literals_are_exact(#[case] source: &str, #[case] expected: f64) {
    assert_eq!(eval(source), Ok(expected));
}

#[rstest]
#[case("8-3-2", 3.0)]
#[case("16/4/2", 2.0)]
#[case("2+3*4", 14.0)]
#[case("(2+3)*4", 20.0)]
#[case("5 + 3 * 2", 11.0)]
#[case("  ((1 + 2) * (3 + 4)) / 2 ", 10.5)]
#[case("10 - 2 * 3 + 8 / 4", 6.0)]
#[case("1 +\x0B2", 3.0)]
#[case("\x0C4\t*\r2\n", 8.0)]
fn arithmetic(#[case] source: &str, #[case] expected: f64) {
    assert_eq!(eval(source), Ok(expected));
}

#[test]
fn division_by_zero_yields_infinity() {
    assert_eq!(eval("1/0"), Ok(f64::INFINITY));
    assert_eq!(eval("(0-1)/0"), Ok(f64::NEG_INFINITY));
    assert!(eval("0/0").unwrap().is_nan());
}

#[rstest]
#[case("(1+2", Error::Parse(ParseError::MismatchedParentheses))]
#[case("1+#", Error::Scan(ScanError::InvalidCharacter('#')))]
#[case("abs 3", Error::Parse(ParseError::ExpectedLeftParen))]
#[case("*2", Error::Parse(ParseError::InvalidPrimaryExpression("'*'".into())))]
#[case("x", Error::Runtime(RuntimeError::NotImplemented("Variable evaluation")))]
#[case("1 + y * 2", Error::Runtime(RuntimeError::NotImplemented("Variable evaluation")))]
#[case("pow(2,3)", Error::Runtime(RuntimeError::NotImplemented("Function call evaluation")))]
#[case("min()", Error::Runtime(RuntimeError::NotImplemented("Function call evaluation")))]
fn failures(#[case] source: &str, #[case] expected: Error) {
    assert_eq!(eval(source), Err(expected));
}

#[test]
fn function_calls_parse_before_failing() {
    let interpreter = Interpreter::new();
    let expr = interpreter.parse("pow(2,3)").unwrap();
    assert_eq!(expr.to_string(), "(call pow 2 3)");
    assert!(matches!(
        expr.evaluate(),
        Err(RuntimeError::NotImplemented(_))
    ));
}

#[test]
fn error_messages() {
    assert_eq!(eval("1+#").unwrap_err().to_string(), "Invalid character '#'");
    assert_eq!(eval("(1+2").unwrap_err().to_string(), "Mismatched parentheses");
    assert_eq!(
        eval("x").unwrap_err().to_string(),
        "Variable evaluation not implemented"
    );
}

#[test]
fn evaluations_are_independent() {
    let interpreter = Interpreter::new();
    let first = interpreter.evaluate("(12 + 30) / 7 * 3");
    assert!(interpreter.evaluate("x").is_err());
    let second = interpreter.evaluate("(12 + 30) / 7 * 3");
    assert_eq!(first, second);
    assert_eq!(first, Interpreter::new().evaluate("(12 + 30) / 7 * 3"));
}
