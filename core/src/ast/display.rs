//! Canonical text rendering of a tree.
//!
//! The output parses back to an equivalent tree: every compound node is
//! wrapped in parentheses, so precedence never has to be reconstructed.

use core::fmt;

use crate::{ast::node::Node, syntax::string_literal::escape_string, values::ScalarValue};

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Constant(value) => write_constant(f, value),
            Node::Variable(name) => f.write_str(name),
            Node::FunctionCall { name, args } => {
                write!(f, "{}(", name)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", arg)?;
                }
                f.write_str(")")
            }
            Node::Unary { op, operand } => write!(f, "({} {})", op.symbol(), operand),
            Node::Arith { op, left, right } => write!(f, "({} {} {})", left, op.symbol(), right),
            Node::Cast { kind, operand } => write!(f, "(({}){})", kind.name(), operand),
            Node::Compare { op, left, right } => {
                write!(f, "({} {} {})", left, op.symbol(), right)
            }
            Node::Logic { op, left, right } => write!(f, "({} {} {})", left, op.symbol(), right),
        }
    }
}

/// Literal spelling of a constant.
///
/// The spelling re-lexes as the same kind. Doubles always carry a point or an
/// exponent. Kinds with no literal of their own are written as a cast of one.
/// Non-finite floats have no literal form, so they are written as the
/// division that produces them.
fn write_constant(f: &mut fmt::Formatter<'_>, value: &ScalarValue) -> fmt::Result {
    match value {
        ScalarValue::String(s) => escape_string(f, s),
        ScalarValue::Double(v) if !v.is_finite() => f.write_str(non_finite(*v)),
        ScalarValue::Double(v) => write!(f, "{:?}", v),
        ScalarValue::Float(v) if !v.is_finite() => write!(f, "((float){})", non_finite(*v as f64)),
        ScalarValue::Float(v) => write!(f, "((float){:?})", v),
        ScalarValue::Char(v) => write!(f, "((char){})", v),
        ScalarValue::Short(v) => write!(f, "((short){})", v),
        // Digits beyond the integer range lex as a long on their own, except
        // the magnitude of i64::MIN, which only fits a double.
        ScalarValue::Long(v) if i32::try_from(*v).is_err() && *v != i64::MIN => {
            write!(f, "{}", v)
        }
        ScalarValue::Long(v) => write!(f, "((long){})", v),
        // The magnitude of i32::MIN only lexes as a long.
        ScalarValue::Integer(v) if *v == i32::MIN => write!(f, "((integer){})", v),
        other => write!(f, "{}", other),
    }
}

fn non_finite(v: f64) -> &'static str {
    if v.is_nan() {
        "(0.0 / 0)"
    } else if v > 0.0 {
        "(1.0 / 0)"
    } else {
        "(-1.0 / 0)"
    }
}
