use simplecalc::calculator::{Operator, Token, reduce, tokenize};
use simplecalc::{CalcError, Key, KeypadState, Messages, evaluate, evaluate_to_string};

#[test]
fn test_string_contract() {
    assert_eq!(evaluate_to_string(""), "");
    assert_eq!(evaluate_to_string("2+3"), "5.0");
    assert_eq!(evaluate_to_string("2+3*4"), "14.0");
    assert_eq!(evaluate_to_string("2*3+4*5"), "26.0");
    assert_eq!(evaluate_to_string("5/0"), "0'a bölünemez");
    assert_eq!(evaluate_to_string("*5"), "Hata");
    assert_eq!(evaluate_to_string("abc"), "");
    assert_eq!(evaluate_to_string("2++3"), evaluate_to_string("2+3"));
}

#[test]
fn test_chained_multiplication() {
    // Each `*` folds into the single last pushed value
    assert_eq!(evaluate_to_string("1+2*3*4"), "25.0");
    assert_eq!(evaluate_to_string("2*3*4+1"), "25.0");
    assert_eq!(evaluate_to_string("8/2/2+1"), "3.0");
    assert_eq!(evaluate_to_string("1-2*3"), "-5.0");
}

#[test]
fn test_binary_sign_after_number() {
    assert_eq!(evaluate_to_string("2*3-1"), "5.0");
    assert_eq!(evaluate_to_string("6/3-1"), "1.0");
    assert_eq!(evaluate_to_string("2*3+4"), "10.0");
    assert_eq!(evaluate_to_string("2*-3"), "-6.0");
    assert_eq!(evaluate_to_string("-5+2"), "-3.0");
}

#[test]
fn test_exponent_formatting() {
    assert_eq!(evaluate_to_string("10000000000000000"), "1.0E16");
    assert_eq!(evaluate_to_string("9999999+1"), "1.0E7");
    assert_eq!(evaluate_to_string("9999998+1"), "9999999.0");
    assert_eq!(evaluate_to_string("1/10000"), "1.0E-4");
}

#[test]
fn test_number_edge_cases() {
    assert_eq!(evaluate_to_string("12."), "12.0");
    assert_eq!(evaluate_to_string(".5+.5"), "1.0");
    assert_eq!(evaluate_to_string("5--3"), "8.0");
    assert_eq!(evaluate_to_string("+"), "0.0");
    assert_eq!(evaluate_to_string("/5"), "Hata");
    assert_eq!(evaluate_to_string("/0"), "Hata");
}

#[test]
fn test_idempotent() {
    for input in ["", "2+3*4", "7/0", "*1", "1.5*4-2", "x1y2"] {
        assert_eq!(evaluate_to_string(input), evaluate_to_string(input));
    }
}

#[test]
fn test_outputs_are_closed() {
    let inputs = [
        "0", "1+", "+1", "9/3", "3/9", "1.1*1.1", "0/0", "00.00", "-0", "99*99*99/3-.25",
        "1-1", "4/", "*/", "5+-*/2",
    ];
    for input in inputs {
        let out = evaluate_to_string(input);
        let ok = out.is_empty()
            || out == "Hata"
            || out == "0'a bölünemez"
            || out.parse::<f64>().is_ok();
        assert!(ok, "unexpected output {out:?} for {input:?}");
    }
}

#[test]
fn test_tagged_result() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(evaluate("6/4")?, 1.5);
    assert_eq!(evaluate(""), Err(CalcError::EmptyInput));
    assert_eq!(evaluate("3/0"), Err(CalcError::DivideByZero));
    assert_eq!(
        evaluate("/3"),
        Err(CalcError::StackUnderflow(Operator::Divide))
    );

    let tokens = vec![
        Token::Number("2".to_string()),
        Token::Operator(Operator::Multiply),
        Token::Number(".".to_string()),
    ];
    assert_eq!(reduce(&tokens), Err(CalcError::ParseFailure(".".to_string())));

    assert_eq!(reduce(&tokenize("10-4/2"))?, 8.0);

    Ok(())
}

#[test]
fn test_keypad_session() {
    let mut state = KeypadState::new(Messages::english());

    for label in ["1", "2", ".", "5", "*", "2", "="] {
        state.press(Key::from_label(label).unwrap());
    }
    assert_eq!(state.input(), "25.0");

    for label in ["/", "0", "="] {
        state.press(Key::from_label(label).unwrap());
    }
    assert_eq!(state.input(), "Cannot divide by zero");
    assert_eq!(state.last_result(), Some(25.0));

    state.press(Key::Clear);
    assert_eq!(state.input(), "");
}
