use crate::{Value, Vector3};

fn parse(json: &str) -> Value {
    serde_json::from_str(json).unwrap()
}

#[test]
fn integers_stay_integers() {
    assert_eq!(parse("5"), Value::Int(5));
    assert_eq!(parse("-1"), Value::Int(-1));
}

#[test]
fn decimals_become_floats() {
    assert_eq!(parse("2.75"), Value::Float(2.75));
    assert_eq!(parse("1.0"), Value::Float(1.0));
}

#[test]
fn special_floats() {
    assert_eq!(parse(r#"{"float": "inf"}"#), Value::Float(f64::INFINITY));
    assert_eq!(parse(r#"{"float": "-inf"}"#), Value::Float(f64::NEG_INFINITY));

    let Value::Float(nan) = parse(r#"{"float": "nan"}"#) else {
        panic!("expected float");
    };
    assert!(nan.is_nan());
}

#[test]
fn arrays_become_vectors() {
    assert_eq!(
        parse("[1.0, 2.5, -3]"),
        Value::Vector(Vector3::new(1.0, 2.5, -3.0))
    );
}

#[test]
fn strings_keep_symbolic_names() {
    assert_eq!(parse(r#""OBJECT_SELF""#), Value::from("OBJECT_SELF"));
}

#[test]
fn integers_past_i64_are_rejected() {
    let err = serde_json::from_str::<Value>("9223372036854775808").unwrap_err();
    assert!(err.to_string().contains("integer 9223372036854775808 is out of range"), "{err}");

    assert_eq!(parse("9223372036854775807"), Value::Int(i64::MAX));
    assert_eq!(parse("-9223372036854775808"), Value::Int(i64::MIN));
}

#[test]
fn integers_past_u64_read_as_floats() {
    assert_eq!(parse("18446744073709551616"), Value::Float(18446744073709551616.0));
}

#[test]
fn display_is_default_representation() {
    assert_eq!(Value::Int(-7).to_string(), "-7");
    assert_eq!(Value::Float(2.0).to_string(), "2.0");
    assert_eq!(Value::from("a\"b").to_string(), "a\"b");
    assert_eq!(
        Value::Vector(Vector3::new(0.0, 1.5, -2.0)).to_string(),
        "[0.0, 1.5, -2.0]"
    );
}
