use pretty_assertions::assert_eq;

use crate::{precedence_of, Operator, Token, Value};

#[test]
fn test_symbol_roundtrip() {
    for op in Operator::ALL {
        assert_eq!(Operator::from_symbol(op.as_symbol()), Some(op));
    }
}

#[test]
fn test_from_symbol_rejects_lookalikes() {
    for symbol in ["//", "**", "$", "!", "@", "%", " +", "+ ", "", "plus"] {
        assert_eq!(Operator::from_symbol(symbol), None, "symbol {symbol:?}");
    }
}

#[test]
fn test_precedence_table() {
    assert_eq!(Operator::Plus.precedence(), 1);
    assert_eq!(Operator::Minus.precedence(), 1);
    assert_eq!(Operator::Multiply.precedence(), 2);
    assert_eq!(Operator::Divide.precedence(), 2);
}

#[test]
fn test_precedence_of_symbols() {
    assert_eq!(precedence_of("+"), 1);
    assert_eq!(precedence_of("-"), 1);
    assert_eq!(precedence_of("*"), 2);
    assert_eq!(precedence_of("/"), 2);
    assert_eq!(precedence_of("%"), 0);
    assert_eq!(precedence_of("//"), 0);
}

#[test]
fn test_sentinels() {
    assert_eq!(Operator::Plus.sentinel(), 0.0);
    assert_eq!(Operator::Minus.sentinel(), 0.0);
    assert_eq!(Operator::Multiply.sentinel(), 1.0);
    assert_eq!(Operator::Divide.sentinel(), 1.0);
}

#[test]
fn test_value_as_number() {
    assert_eq!(Value::Number(2.5).as_number(), Some(2.5));
    assert_eq!(Value::Number(f64::NAN).as_number(), None);
    assert_eq!(Value::from("2").as_number(), None);
}

#[test]
fn test_value_as_operator() {
    assert_eq!(Value::from("*").as_operator(), Some(Operator::Multiply));
    assert_eq!(Value::from("//").as_operator(), None);
    assert_eq!(Value::from(3).as_operator(), None);
}

#[test]
fn test_args_macro() {
    assert_eq!(args![], Vec::<Value>::new());
    assert_eq!(
        args![-8, "+", 3.5, Operator::Divide],
        vec![
            Value::Number(-8.0),
            Value::Str("+".to_string()),
            Value::Number(3.5),
            Value::Str("/".to_string()),
        ]
    );
}

#[test]
fn test_display() {
    assert_eq!(Value::from("a").to_string(), "\"a\"");
    assert_eq!(Value::from(1011).to_string(), "1011");
    assert_eq!(Token::from(Operator::Minus).to_string(), "-");
    assert_eq!(Token::from(0.5).to_string(), "0.5");
}
