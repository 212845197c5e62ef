//! Binary and unary operator implementations on scalar values.
//!
//! Operands of mixed kinds are promoted to the wider kind before the
//! operator runs (bool < char < short < integer < long < float < double <
//! string). All functions are pure and never consult an evaluation context.

use core::cmp::Ordering;

use crate::{
    error::{Error, Result},
    values::scalar::{Kind, ScalarValue},
};

/// Arithmetic operator selector shared with the AST.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl ArithOp {
    pub fn symbol(self) -> char {
        match self {
            ArithOp::Add => '+',
            ArithOp::Sub => '-',
            ArithOp::Mul => '*',
            ArithOp::Div => '/',
        }
    }
}

fn promoted_kind(op: &str, left: &ScalarValue, right: &ScalarValue) -> Result<Kind> {
    if !left.is_valid() || !right.is_valid() {
        return Err(Error::conversion(format!(
            "Invalid operand for {}.",
            op
        )));
    }
    Ok(left.kind().max(right.kind()))
}

fn promote(value: &ScalarValue, kind: Kind) -> Result<ScalarValue> {
    let mut promoted = value.clone();
    promoted.convert_type(kind)?;
    Ok(promoted)
}

/// Strings taking part in `- * /` must look like numbers.
fn numeric_operand(op: ArithOp, value: &ScalarValue) -> Result<ScalarValue> {
    match value {
        ScalarValue::String(s) => {
            let auto = ScalarValue::from_auto_string(s);
            if auto.is_string() {
                Err(Error::conversion(format!(
                    "Cannot apply operator {} to string {:?}.",
                    op.symbol(),
                    s
                )))
            } else {
                Ok(auto)
            }
        }
        other => Ok(other.clone()),
    }
}

fn int_op(op: ArithOp, kind: Kind, a: i64, b: i64) -> Result<i64> {
    let result = match op {
        ArithOp::Add => a.checked_add(b),
        ArithOp::Sub => a.checked_sub(b),
        ArithOp::Mul => a.checked_mul(b),
        ArithOp::Div => {
            if b == 0 {
                return Err(Error::conversion("Division by zero."));
            }
            a.checked_div(b)
        }
    };
    result.ok_or_else(|| overflow(op, kind))
}

fn overflow(op: ArithOp, kind: Kind) -> Error {
    Error::conversion(format!(
        "Arithmetic overflow in operator {} on {} values.",
        op.symbol(),
        kind
    ))
}

fn float_op(op: ArithOp, a: f64, b: f64) -> f64 {
    match op {
        ArithOp::Add => a + b,
        ArithOp::Sub => a - b,
        ArithOp::Mul => a * b,
        ArithOp::Div => a / b,
    }
}

/// Apply an arithmetic operator.
///
/// `+` with a string operand concatenates the canonical renderings. The
/// other operators accept strings only when they look like numbers.
pub fn arith(op: ArithOp, left: &ScalarValue, right: &ScalarValue) -> Result<ScalarValue> {
    if op == ArithOp::Add && (left.is_string() || right.is_string()) {
        promoted_kind("+", left, right)?;
        let mut joined = left.get_string();
        joined.push_str(&right.get_string());
        return Ok(ScalarValue::String(joined));
    }

    let left = numeric_operand(op, left)?;
    let right = numeric_operand(op, right)?;
    let kind = promoted_kind(&op.symbol().to_string(), &left, &right)?;

    match kind {
        Kind::Char | Kind::Short | Kind::Integer | Kind::Long => {
            let a = promote(&left, kind)?.as_i64().unwrap_or_default();
            let b = promote(&right, kind)?.as_i64().unwrap_or_default();
            let v = int_op(op, kind, a, b)?;
            let mut result = ScalarValue::new(kind);
            if result.set_integer(v) {
                Ok(result)
            } else {
                Err(overflow(op, kind))
            }
        }
        Kind::Float => {
            let a = promote(&left, kind)?.as_f64().unwrap_or_default();
            let b = promote(&right, kind)?.as_f64().unwrap_or_default();
            Ok(ScalarValue::Float(float_op(op, a, b) as f32))
        }
        Kind::Double => {
            let a = left.as_f64().unwrap_or_default();
            let b = right.as_f64().unwrap_or_default();
            Ok(ScalarValue::Double(float_op(op, a, b)))
        }
        Kind::Bool => Err(Error::conversion(format!(
            "No arithmetic operator {} is allowed on bool values.",
            op.symbol()
        ))),
        Kind::String | Kind::Invalid => Err(Error::conversion(format!(
            "Invalid operands for {}.",
            op.symbol()
        ))),
    }
}

pub fn add(left: &ScalarValue, right: &ScalarValue) -> Result<ScalarValue> {
    arith(ArithOp::Add, left, right)
}

pub fn sub(left: &ScalarValue, right: &ScalarValue) -> Result<ScalarValue> {
    arith(ArithOp::Sub, left, right)
}

pub fn mul(left: &ScalarValue, right: &ScalarValue) -> Result<ScalarValue> {
    arith(ArithOp::Mul, left, right)
}

pub fn div(left: &ScalarValue, right: &ScalarValue) -> Result<ScalarValue> {
    arith(ArithOp::Div, left, right)
}

/// Three-way comparison after promotion. `None` for unordered floats.
fn compare(op: &str, left: &ScalarValue, right: &ScalarValue) -> Result<Option<Ordering>> {
    let kind = promoted_kind(op, left, right)?;

    if left.is_bool() != right.is_bool() {
        return Err(Error::conversion(format!(
            "Cannot compare {} with {} using {}.",
            left.kind(),
            right.kind(),
            op
        )));
    }

    let left = promote(left, kind)?;
    let right = promote(right, kind)?;
    let ordering = match (&left, &right) {
        (ScalarValue::String(a), ScalarValue::String(b)) => Some(a.cmp(b)),
        _ if kind.is_floating() => {
            let a = left.as_f64().unwrap_or_default();
            let b = right.as_f64().unwrap_or_default();
            a.partial_cmp(&b)
        }
        _ => {
            let a = left.as_i64().unwrap_or_default();
            let b = right.as_i64().unwrap_or_default();
            Some(a.cmp(&b))
        }
    };
    Ok(ordering)
}

pub fn equal(left: &ScalarValue, right: &ScalarValue) -> Result<ScalarValue> {
    Ok(ScalarValue::Bool(compare("==", left, right)? == Some(Ordering::Equal)))
}

pub fn not_equal(left: &ScalarValue, right: &ScalarValue) -> Result<ScalarValue> {
    Ok(ScalarValue::Bool(compare("!=", left, right)? != Some(Ordering::Equal)))
}

pub fn less(left: &ScalarValue, right: &ScalarValue) -> Result<ScalarValue> {
    Ok(ScalarValue::Bool(compare("<", left, right)? == Some(Ordering::Less)))
}

pub fn greater(left: &ScalarValue, right: &ScalarValue) -> Result<ScalarValue> {
    Ok(ScalarValue::Bool(compare(">", left, right)? == Some(Ordering::Greater)))
}

pub fn less_equal(left: &ScalarValue, right: &ScalarValue) -> Result<ScalarValue> {
    let ordering = compare("<=", left, right)?;
    Ok(ScalarValue::Bool(matches!(
        ordering,
        Some(Ordering::Less | Ordering::Equal)
    )))
}

pub fn greater_equal(left: &ScalarValue, right: &ScalarValue) -> Result<ScalarValue> {
    let ordering = compare(">=", left, right)?;
    Ok(ScalarValue::Bool(matches!(
        ordering,
        Some(Ordering::Greater | Ordering::Equal)
    )))
}

/// Unary minus. Negating a bool flips it.
pub fn negate(value: &ScalarValue) -> Result<ScalarValue> {
    let negated = match *value {
        ScalarValue::Bool(b) => Some(ScalarValue::Bool(!b)),
        ScalarValue::Char(v) => v.checked_neg().map(ScalarValue::Char),
        ScalarValue::Short(v) => v.checked_neg().map(ScalarValue::Short),
        ScalarValue::Integer(v) => v.checked_neg().map(ScalarValue::Integer),
        ScalarValue::Long(v) => v.checked_neg().map(ScalarValue::Long),
        ScalarValue::Float(v) => Some(ScalarValue::Float(-v)),
        ScalarValue::Double(v) => Some(ScalarValue::Double(-v)),
        ScalarValue::String(_) | ScalarValue::Invalid => {
            return Err(Error::conversion(format!(
                "Cannot negate a {} value.",
                value.kind()
            )));
        }
    };
    negated.ok_or_else(|| {
        Error::conversion(format!("Arithmetic overflow negating {} value.", value.kind()))
    })
}

/// Boolean negation, only defined for bool operands.
pub fn logical_not(value: &ScalarValue) -> Result<ScalarValue> {
    match value {
        ScalarValue::Bool(b) => Ok(ScalarValue::Bool(!b)),
        _ => Err(Error::bad_syntax(
            "Invalid operand for !. Operand must be of type bool.",
        )),
    }
}

/// Explicit cast. The flag is `false` when a numeric conversion saturated.
pub fn convert_type(value: &ScalarValue, kind: Kind) -> Result<(ScalarValue, bool)> {
    let mut converted = value.clone();
    let exact = converted.convert_type(kind)?;
    Ok((converted, exact))
}
