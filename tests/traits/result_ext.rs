use dare_rail::prelude::*;
use std::num::ParseIntError;

#[test]
fn or_raise_uses_the_error_text() {
    let result: Result<u8, ParseIntError> = "300".parse();
    let failure = result.or_raise(2000).unwrap_err();

    assert_eq!(failure.message(), "number too large to fit in target type");
    assert_eq!(failure.code(), 2000);
    assert_eq!(failure.trace_len(), 1);
    assert!(failure.cause().is_none());
}

#[test]
fn or_raise_passes_success_through() {
    let result: Result<u8, ParseIntError> = "30".parse();
    assert_eq!(result.or_raise(2000).ok(), Some(30));
}

#[test]
fn or_raise_as_keeps_the_error_as_cause() {
    let result: Result<f64, _> = "abc".parse::<f64>();
    let failure = result.or_raise_as("Syntax error!", 2000).unwrap_err();

    assert_eq!(failure.message(), "Syntax error!");
    assert_eq!(failure.trace_len(), 1);

    let cause = failure.cause().expect("foreign error kept as cause");
    assert_eq!(cause.message(), "invalid float literal");
    assert_eq!(cause.code(), 2000);
    assert_eq!(cause.trace_len(), 0);
}

#[test]
fn or_raise_traces_the_call_site() {
    let line = line!() + 1;
    let failure = Err::<(), _>("denied").or_raise(1).unwrap_err();

    let entry = failure.trace().next().expect("entry").as_str().replace('\\', "/");
    assert_eq!(entry, format!("tests/traits/result_ext.rs:{line}"));
}

#[test]
fn question_mark_composes_with_check() {
    fn parse(token: &str) -> Outcome<i64> {
        let value = token.parse::<i64>().or_raise(2001)?;
        Ok(value)
    }

    fn sum(tokens: &[&str]) -> Outcome<i64> {
        let mut total = 0;
        for token in tokens {
            total += check!(parse(token));
        }
        Ok(total)
    }

    assert_eq!(sum(&["1", "2", "3"]).ok(), Some(6));

    let failure = sum(&["1", "x"]).unwrap_err();
    assert_eq!(failure.code(), 2001);
    assert_eq!(failure.trace_len(), 2);
}
