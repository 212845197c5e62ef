use pretty_assertions::assert_eq;

use crate::{
    error::ErrorKind,
    values::scalar::{Kind, ScalarValue},
};

#[test]
fn test_type_length() {
    assert_eq!(Kind::Bool.type_length(), 0);
    assert_eq!(Kind::Invalid.type_length(), 0);
    assert_eq!(Kind::Char.type_length(), 1);
    assert_eq!(Kind::Short.type_length(), 2);
    assert_eq!(Kind::Integer.type_length(), 4);
    assert_eq!(Kind::Long.type_length(), 8);
    assert_eq!(Kind::Float.type_length(), 4);
    assert_eq!(Kind::Double.type_length(), 8);
    assert_eq!(ScalarValue::from(7i16).type_length(), 2);
}

#[test]
fn test_kind_names() {
    assert_eq!(Kind::from_name("int"), Some(Kind::Integer));
    assert_eq!(Kind::from_name("dword"), Some(Kind::Integer));
    assert_eq!(Kind::from_name("byte"), Some(Kind::Char));
    assert_eq!(Kind::from_name("word"), Some(Kind::Short));
    assert_eq!(Kind::from_name("qword"), Some(Kind::Long));
    assert_eq!(Kind::from_name("Integer"), None);
    assert_eq!(Kind::Integer.name(), "integer");
    assert!(Kind::Bool < Kind::Char && Kind::Double < Kind::String);
}

#[test]
fn test_bool_from_integers_and_doubles() {
    assert_eq!(ScalarValue::from(false).get_integer().unwrap(), 0);
    assert_eq!(ScalarValue::from(true).get_integer().unwrap(), 1);

    let mut t_bool = ScalarValue::new(Kind::Bool);
    assert!(t_bool.set_integer(2));
    assert!(t_bool.set_integer(1));
    assert!(t_bool.get_boolean().unwrap());
    assert_eq!(t_bool.get_string(), "true");

    assert!(t_bool.set_double(0.3));
    assert!(!t_bool.get_boolean().unwrap());
    assert_eq!(t_bool.get_string(), "false");

    assert!(t_bool.set_string("t"));
    assert_eq!(t_bool.get_string(), "true");
    assert!(!t_bool.set_string("maybe"));
    assert_eq!(t_bool, ScalarValue::Bool(true));
}

#[test]
fn test_integer_setters() {
    let mut t_integer = ScalarValue::new(Kind::Integer);
    assert!(t_integer.set_integer(42));
    assert!(t_integer.get_boolean().unwrap());
    assert_eq!(t_integer.get_integer().unwrap(), 42);
    assert_eq!(t_integer.get_string(), "42");

    assert!(t_integer.set_double(42.2));
    assert_eq!(t_integer.get_integer().unwrap(), 42);

    assert!(!t_integer.set_string("42.2"));
    assert!(t_integer.set_string("42"));
    assert_eq!(t_integer.get_string(), "42");
}

#[test]
fn test_float_setters() {
    let mut t_float = ScalarValue::new(Kind::Float);
    assert!(t_float.set_double(42.0));
    assert!(t_float.get_boolean().unwrap());
    assert_eq!(t_float.get_integer().unwrap(), 42);
    assert_eq!(t_float.get_double().unwrap(), 42.0);
    assert_eq!(t_float.get_string(), "42");

    assert!(t_float.set_double(42.42));
    assert_eq!(t_float.get_integer().unwrap(), 42);
    assert_eq!(t_float.get_string(), "42.42");

    assert!(t_float.set_string("42.42"));
    assert_eq!(t_float.get_string(), "42.42");
}

#[test]
fn test_string_setters() {
    let mut t_string = ScalarValue::new(Kind::String);
    assert!(t_string.set_integer(20));
    assert_eq!(
        t_string.get_boolean().unwrap_err().kind(),
        ErrorKind::Conversion
    );
    assert_eq!(t_string.get_string(), "20");

    assert!(t_string.set_integer(0));
    assert!(!t_string.get_boolean().unwrap());

    assert!(t_string.set_integer(-20));
    assert_eq!(t_string.get_string(), "-20");

    assert!(t_string.set_string_quoted("\"bla\\n\\\\\\\"h\""));
    assert_eq!(t_string.get_string(), "bla\n\\\"h");
}

#[test]
fn test_string_truthy_tokens_ignore_case() {
    for text in ["true", "T", "Yes", "y", "1"] {
        assert!(ScalarValue::from(text).get_boolean().unwrap(), "{}", text);
    }
    for text in ["FALSE", "f", "no", "N", "0"] {
        assert!(!ScalarValue::from(text).get_boolean().unwrap(), "{}", text);
    }
    assert!(ScalarValue::from("truthy").get_boolean().is_err());
}

#[test]
fn test_saturation_positive_overflow() {
    let mut c = ScalarValue::new(Kind::Char);
    assert!(!c.set_integer(10010));
    assert_eq!(c, ScalarValue::Char(127));

    let mut s = ScalarValue::new(Kind::Short);
    assert!(!s.set_integer(1_340_000_010));
    assert_eq!(s, ScalarValue::Short(32767));

    let mut i = ScalarValue::new(Kind::Integer);
    assert!(!i.set_integer(1 << 40));
    assert_eq!(i, ScalarValue::Integer(i32::MAX));
}

#[test]
fn test_saturation_negative_overflow() {
    let mut c = ScalarValue::new(Kind::Char);
    assert!(!c.set_integer(-10010));
    assert_eq!(c, ScalarValue::Char(-128));

    let mut s = ScalarValue::new(Kind::Short);
    assert!(!s.set_integer(-1_340_000_010));
    assert_eq!(s, ScalarValue::Short(-32768));

    let mut l = ScalarValue::new(Kind::Long);
    assert!(!l.set_double(-1e300));
    assert_eq!(l, ScalarValue::Long(i64::MIN));
}

#[test]
fn test_saturation_from_text() {
    let mut c = ScalarValue::new(Kind::Char);
    assert!(!c.set_string("300"));
    assert_eq!(c, ScalarValue::Char(127));

    let mut l = ScalarValue::new(Kind::Long);
    assert!(!l.set_string("-99999999999999999999999"));
    assert_eq!(l, ScalarValue::Long(i64::MIN));
}

#[test]
fn test_auto_string_classification() {
    assert_eq!(ScalarValue::from_auto_string("0").kind(), Kind::Integer);
    assert_eq!(ScalarValue::from_auto_string("-2147483648").kind(), Kind::Integer);
    assert_eq!(ScalarValue::from_auto_string("12345678901234567").kind(), Kind::Long);
    assert_eq!(ScalarValue::from_auto_string("3.25").kind(), Kind::Double);
    assert_eq!(
        ScalarValue::from_auto_string("123456789012345678901234").kind(),
        Kind::Double
    );
    assert_eq!(ScalarValue::from_auto_string("hello").kind(), Kind::String);
    assert_eq!(ScalarValue::from_auto_string("").kind(), Kind::String);
    assert_eq!(ScalarValue::from_auto_string("inf").kind(), Kind::String);
    assert_eq!(ScalarValue::from_auto_string("nan"), ScalarValue::from("nan"));
}

#[test]
fn test_convert_type_saturation_vs_failure() {
    let mut v = ScalarValue::from(10010);
    assert_eq!(v.convert_type(Kind::Char), Ok(false));
    assert_eq!(v, ScalarValue::Char(127));

    let mut v = ScalarValue::from(42);
    assert_eq!(v.convert_type(Kind::String), Ok(true));
    assert_eq!(v, ScalarValue::from("42"));
    assert_eq!(v.get_integer().unwrap(), 42);

    let mut v = ScalarValue::from("4x2");
    let err = v.convert_type(Kind::Integer).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conversion);
    assert_eq!(v, ScalarValue::from("4x2"));

    let mut v = ScalarValue::from(7.9);
    assert_eq!(v.convert_type(Kind::Integer), Ok(true));
    assert_eq!(v, ScalarValue::Integer(7));
}

#[test]
fn test_convert_type_to_bool() {
    let mut v = ScalarValue::from(0.3);
    assert_eq!(v.convert_type(Kind::Bool), Ok(true));
    assert_eq!(v, ScalarValue::Bool(true));

    let mut v = ScalarValue::from("no");
    assert_eq!(v.convert_type(Kind::Bool), Ok(true));
    assert_eq!(v, ScalarValue::Bool(false));

    let mut v = ScalarValue::Invalid;
    assert!(v.convert_type(Kind::Bool).is_err());
}

#[test]
fn test_canonical_rendering() {
    assert_eq!(ScalarValue::from(9.5).to_string(), "9.5");
    assert_eq!(ScalarValue::from(42.0).to_string(), "42");
    assert_eq!(ScalarValue::from(0.1f32).to_string(), "0.1");
    assert_eq!(ScalarValue::from(-3i8).to_string(), "-3");
    assert_eq!(ScalarValue::Invalid.to_string(), "invalid");
}

#[test]
fn test_structural_equality() {
    assert_eq!(ScalarValue::from(5), ScalarValue::Integer(5));
    assert_ne!(ScalarValue::from(5), ScalarValue::Long(5));
    assert_ne!(ScalarValue::from(5), ScalarValue::from("5"));
}
