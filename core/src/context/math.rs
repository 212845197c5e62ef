//! Standard math functions available through [`BasicContext`].
//!
//! Functions: PI, SIN, COS, TAN, EXP, LOGN, SQRT, POW, ABS
//!
//! Names are matched case-insensitively. Arguments are read as doubles,
//! except for ABS which keeps integer arguments integral.
//!
//! [`BasicContext`]: super::BasicContext

use hashbrown::HashMap;
use lazy_static::lazy_static;

use crate::{
    error::{Error, Result},
    values::ScalarValue,
};

type MathFn = fn(&[ScalarValue]) -> Result<ScalarValue>;

struct Builtin {
    arity: usize,
    func: MathFn,
}

lazy_static! {
    static ref BUILTINS: HashMap<&'static str, Builtin> = {
        let mut table: HashMap<&'static str, Builtin> = HashMap::new();
        table.insert("PI", Builtin { arity: 0, func: math_pi });
        table.insert("SIN", Builtin { arity: 1, func: math_sin });
        table.insert("COS", Builtin { arity: 1, func: math_cos });
        table.insert("TAN", Builtin { arity: 1, func: math_tan });
        table.insert("EXP", Builtin { arity: 1, func: math_exp });
        table.insert("LOGN", Builtin { arity: 1, func: math_logn });
        table.insert("SQRT", Builtin { arity: 1, func: math_sqrt });
        table.insert("POW", Builtin { arity: 2, func: math_pow });
        table.insert("ABS", Builtin { arity: 1, func: math_abs });
        table
    };
}

/// Names of all builtin functions, upper case.
pub fn function_names() -> impl Iterator<Item = &'static str> {
    BUILTINS.keys().copied()
}

/// Call a builtin by name.
pub fn call(name: &str, args: &[ScalarValue]) -> Result<ScalarValue> {
    let upper = name.to_ascii_uppercase();
    let builtin = BUILTINS
        .get(upper.as_str())
        .ok_or_else(|| Error::UnknownSymbol(format!("Unknown function {}", upper)))?;

    if args.len() != builtin.arity {
        return Err(Error::BadFunctionCall(format!(
            "Function {} expects {} argument(s), got {}",
            upper,
            builtin.arity,
            args.len()
        )));
    }

    (builtin.func)(args)
}

fn double_arg(args: &[ScalarValue], index: usize) -> Result<f64> {
    args[index].get_double().map_err(|e| {
        Error::BadFunctionCall(format!("Invalid argument {}: {}", index + 1, e.message()))
    })
}

fn math_pi(_args: &[ScalarValue]) -> Result<ScalarValue> {
    Ok(ScalarValue::Double(core::f64::consts::PI))
}

fn math_sin(args: &[ScalarValue]) -> Result<ScalarValue> {
    Ok(ScalarValue::Double(double_arg(args, 0)?.sin()))
}

fn math_cos(args: &[ScalarValue]) -> Result<ScalarValue> {
    Ok(ScalarValue::Double(double_arg(args, 0)?.cos()))
}

fn math_tan(args: &[ScalarValue]) -> Result<ScalarValue> {
    Ok(ScalarValue::Double(double_arg(args, 0)?.tan()))
}

fn math_exp(args: &[ScalarValue]) -> Result<ScalarValue> {
    Ok(ScalarValue::Double(double_arg(args, 0)?.exp()))
}

/// Natural logarithm
fn math_logn(args: &[ScalarValue]) -> Result<ScalarValue> {
    Ok(ScalarValue::Double(double_arg(args, 0)?.ln()))
}

fn math_sqrt(args: &[ScalarValue]) -> Result<ScalarValue> {
    Ok(ScalarValue::Double(double_arg(args, 0)?.sqrt()))
}

fn math_pow(args: &[ScalarValue]) -> Result<ScalarValue> {
    let base = double_arg(args, 0)?;
    let exponent = double_arg(args, 1)?;
    Ok(ScalarValue::Double(base.powf(exponent)))
}

/// Absolute value. Integer kinds stay integral: longs give a long, the
/// narrower kinds an integer.
fn math_abs(args: &[ScalarValue]) -> Result<ScalarValue> {
    let value = &args[0];
    if let ScalarValue::Long(v) = value {
        let abs = v
            .checked_abs()
            .ok_or_else(|| Error::BadFunctionCall(format!("ABS({}) overflows long", v)))?;
        Ok(ScalarValue::Long(abs))
    } else if value.is_integer_kind() {
        let v = value.get_long()?;
        let abs = i32::try_from(v)
            .ok()
            .and_then(i32::checked_abs)
            .ok_or_else(|| Error::BadFunctionCall(format!("ABS({}) overflows integer", v)))?;
        Ok(ScalarValue::Integer(abs))
    } else if value.is_floating_kind() {
        Ok(ScalarValue::Double(value.get_double()?.abs()))
    } else {
        Err(Error::BadFunctionCall(format!(
            "ABS expects a numeric argument, got {}",
            value.kind()
        )))
    }
}
