#[macro_use]
mod cases;

use std::cell::Cell;

use exparse::{BasicContext, Context, ErrorKind, Result, ScalarValue, parse_expression};
use pretty_assertions::assert_eq;

test_case!(
    cosine_of_zero,
    input: "5 + COS(0)",
    formatted: "(5 + COS(0))",
    value: 6.0,
);

test_case!(
    names_ignore_case,
    input: "pi() * 2",
    formatted: "(pi() * 2)",
    value: std::f64::consts::PI * 2.0,
);

test_case!(
    power,
    input: "POW(2, 10)",
    formatted: "POW(2,10)",
    value: 1024.0,
);

test_case!(
    abs_of_integer_stays_integer,
    input: "ABS(-7)",
    formatted: "ABS(-7)",
    value: 7,
);

test_case!(
    abs_of_long_beyond_integer_range,
    input: "ABS(x)",
    vars: { "x" => -5_000_000_000i64 },
    value: 5_000_000_000i64,
);

test_case!(
    abs_of_double,
    input: "ABS(x)",
    vars: { "x" => -2.5 },
    value: 2.5,
);

test_case!(
    nested_calls_and_arithmetic,
    input: "SQRT(x * x)",
    vars: { "x" => 3 },
    formatted: "SQRT((x * x))",
    value: 3.0,
);

test_case!(
    wrong_arity,
    input: "5 + COS(2,2)",
    error: BadFunctionCall,
);

test_case!(
    unknown_function,
    input: "FOO(1)",
    error: UnknownSymbol,
);

test_case!(
    unknown_variable,
    input: "5 + xyz",
    error: UnknownSymbol,
);

/// Context counting lookups, with the math table as fallback.
struct Counting {
    lookups: Cell<usize>,
    inner: BasicContext,
}

impl Context for Counting {
    fn lookup_variable(&self, name: &str) -> Result<ScalarValue> {
        self.lookups.set(self.lookups.get() + 1);
        match name {
            "answer" => Ok(ScalarValue::Integer(42)),
            _ => self.inner.lookup_variable(name),
        }
    }

    fn call_function(&self, name: &str, args: &[ScalarValue]) -> Result<ScalarValue> {
        match name {
            "twice" => Ok(ScalarValue::Integer(args[0].get_integer()? * 2)),
            _ => self.inner.call_function(name, args),
        }
    }
}

#[test]
fn test_custom_context() {
    let ctx = Counting {
        lookups: Cell::new(0),
        inner: BasicContext::new(),
    };
    let tree = parse_expression("twice(answer) + ABS(answer - 50) + answer").unwrap();
    assert_eq!(tree.evaluate(&ctx).unwrap(), ScalarValue::Integer(84 + 8 + 42));
    assert_eq!(ctx.lookups.get(), 3);

    let err = parse_expression("missing").unwrap().evaluate(&ctx).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownSymbol);
}

#[test]
fn test_context_through_box() {
    let mut ctx = BasicContext::new();
    ctx.set_variable("x", 2);
    let boxed: Box<dyn Context> = Box::new(ctx);
    let tree = parse_expression("x * x").unwrap();
    assert_eq!(tree.evaluate(&boxed).unwrap(), ScalarValue::Integer(4));
}
