use pretty_assertions::assert_eq;

use super::ops::*;
use crate::{
    error::ErrorKind,
    values::scalar::{Kind, ScalarValue},
};

fn v<T: Into<ScalarValue>>(x: T) -> ScalarValue {
    x.into()
}

#[test]
fn test_add_promotes_to_wider_kind() {
    assert_eq!(add(&v(5), &v(6)).unwrap(), ScalarValue::Integer(11));
    assert_eq!(add(&v(5), &v(4.5)).unwrap(), ScalarValue::Double(9.5));
    assert_eq!(add(&v(5.0), &v(4)).unwrap().get_string(), "9");
    assert_eq!(add(&v(1i8), &v(2i64)).unwrap(), ScalarValue::Long(3));
    assert_eq!(add(&v(1.5f32), &v(2)).unwrap(), ScalarValue::Float(3.5));
    assert_eq!(add(&v(true), &v(2)).unwrap(), ScalarValue::Integer(3));
}

#[test]
fn test_add_concatenates_strings() {
    assert_eq!(add(&v("abc"), &v("def")).unwrap(), v("abcdef"));
    assert_eq!(add(&v("x"), &v(42)).unwrap(), v("x42"));
    assert_eq!(add(&v(4.5), &v("!")).unwrap(), v("4.5!"));
    assert_eq!(add(&v(true), &v("")).unwrap(), v("true"));
}

#[test]
fn test_string_arithmetic_requires_numeric_text() {
    assert_eq!(mul(&v("6"), &v(7)).unwrap(), ScalarValue::Integer(42));
    assert_eq!(sub(&v("1.5"), &v("0.5")).unwrap(), ScalarValue::Double(1.0));

    let err = sub(&v("abc"), &v(1)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conversion);
    let err = div(&v("abc"), &v("def")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conversion);
}

#[test]
fn test_integer_arithmetic() {
    assert_eq!(sub(&v(3), &v(10)).unwrap(), ScalarValue::Integer(-7));
    assert_eq!(mul(&v(-2), &v(5)).unwrap(), ScalarValue::Integer(-10));
    assert_eq!(div(&v(7), &v(3)).unwrap(), ScalarValue::Integer(2));
}

#[test]
fn test_integer_overflow_is_an_error() {
    let err = add(&v(i32::MAX), &v(1)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conversion);

    let err = mul(&v(100i8), &v(2i8)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conversion);

    let err = div(&v(i64::MIN), &v(-1i64)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conversion);
}

#[test]
fn test_division_by_zero() {
    let err = div(&v(10), &v(0)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conversion);

    let result = div(&v(10.0), &v(0)).unwrap();
    assert!(matches!(result, ScalarValue::Double(d) if d.is_infinite() && d > 0.0));
}

#[test]
fn test_bool_arithmetic_rejected() {
    let err = add(&v(true), &v(false)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conversion);
}

#[test]
fn test_invalid_operands_rejected() {
    let err = add(&ScalarValue::Invalid, &v(1)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conversion);
    let err = equal(&v(1), &ScalarValue::Invalid).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conversion);
}

#[test]
fn test_comparisons_across_kinds() {
    assert_eq!(equal(&v(11), &v(11.0)).unwrap(), v(true));
    assert_eq!(equal(&v(9.5), &add(&v(5), &v(4.5)).unwrap()).unwrap(), v(true));
    assert_eq!(not_equal(&v(1i8), &v(2i64)).unwrap(), v(true));
    assert_eq!(less(&v(5), &v(5.2)).unwrap(), v(true));
    assert_eq!(greater(&v(10), &v(5)).unwrap(), v(true));
    assert_eq!(less_equal(&v(5.2), &v(42.2)).unwrap(), v(true));
    assert_eq!(greater_equal(&v(4), &v(4)).unwrap(), v(true));
    assert_eq!(equal(&v(2), &v(4)).unwrap(), v(false));
}

#[test]
fn test_string_comparisons() {
    assert_eq!(equal(&v("abc"), &v("abc")).unwrap(), v(true));
    assert_eq!(less(&v("abc"), &v("abd")).unwrap(), v(true));
    // Numbers are rendered and compared as text.
    assert_eq!(equal(&v("42"), &v(42)).unwrap(), v(true));
    assert_eq!(less(&v("10"), &v(9)).unwrap(), v(true));
}

#[test]
fn test_bool_comparisons() {
    assert_eq!(equal(&v(true), &v(true)).unwrap(), v(true));
    assert_eq!(less(&v(false), &v(true)).unwrap(), v(true));

    let err = equal(&v(true), &v(1)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conversion);
}

#[test]
fn test_nan_is_unordered() {
    let nan = v(f64::NAN);
    assert_eq!(equal(&nan, &nan).unwrap(), v(false));
    assert_eq!(not_equal(&nan, &nan).unwrap(), v(true));
    assert_eq!(less_equal(&nan, &v(1)).unwrap(), v(false));
}

#[test]
fn test_negate() {
    assert_eq!(negate(&v(5)).unwrap(), v(-5));
    assert_eq!(negate(&v(2.5)).unwrap(), v(-2.5));
    assert_eq!(negate(&v(true)).unwrap(), v(false));
    assert_eq!(negate(&v(i8::MIN)).unwrap_err().kind(), ErrorKind::Conversion);
    assert_eq!(negate(&v("x")).unwrap_err().kind(), ErrorKind::Conversion);
}

#[test]
fn test_logical_not_requires_bool() {
    assert_eq!(logical_not(&v(true)).unwrap(), v(false));
    assert_eq!(logical_not(&v(1)).unwrap_err().kind(), ErrorKind::BadSyntax);
}

#[test]
fn test_convert_type_reports_saturation() {
    assert_eq!(
        convert_type(&v(7.5), Kind::Integer).unwrap(),
        (ScalarValue::Integer(7), true)
    );
    assert_eq!(
        convert_type(&v(1_340_000_010), Kind::Short).unwrap(),
        (ScalarValue::Short(32767), false)
    );
    assert_eq!(
        convert_type(&v("abc"), Kind::Double).unwrap_err().kind(),
        ErrorKind::Conversion
    );
}
