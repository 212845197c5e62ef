//! Shared harness for the expression test files.
//!
//! Each `test_case!` parses `input`, checks the canonical rendering (and that
//! it parses back to itself), then evaluates the tree against a context
//! holding the given `vars`.

use exparse::{BasicContext, ErrorKind, ScalarValue, parse_expression};
use pretty_assertions::assert_eq;

pub struct Case {
    pub input: &'static str,
    pub vars: Vec<(&'static str, ScalarValue)>,
    pub formatted: Option<&'static str>,
    pub value: Option<ScalarValue>,
    pub error: Option<ErrorKind>,
}

impl Case {
    pub fn run(self) {
        let mut ctx = BasicContext::new();
        for (name, value) in self.vars {
            ctx.set_variable(name, value);
        }

        let tree = match (parse_expression(self.input), self.error) {
            (Ok(tree), _) => tree,
            (Err(e), Some(kind)) => {
                assert_eq!(e.kind(), kind, "wrong error for {:?}: {}", self.input, e);
                return;
            }
            (Err(e), None) => panic!("Expression parsing failed: {}\n{}", self.input, e),
        };

        let rendered = tree.to_string();
        if let Some(formatted) = self.formatted {
            assert_eq!(rendered, formatted, "rendering of {:?}", self.input);
        }
        let reparsed = parse_expression(&rendered)
            .unwrap_or_else(|e| panic!("Rendering does not parse: {}\n{}", rendered, e));
        assert_eq!(reparsed.to_string(), rendered, "round trip of {:?}", self.input);

        let result = tree.evaluate(&ctx);
        match (result, self.error) {
            (Err(e), Some(kind)) => {
                assert_eq!(e.kind(), kind, "wrong error for {:?}: {}", self.input, e)
            }
            (Ok(value), Some(kind)) => {
                panic!("Expected {:?} from {:?}, got {:?}", kind, self.input, value)
            }
            (Err(e), None) => panic!("Evaluation failed: {}\n{}", self.input, e),
            (Ok(value), None) => {
                if let Some(expected) = self.value {
                    assert_eq!(value, expected, "value of {:?}", self.input);
                }
            }
        }
    }
}

macro_rules! test_case {
    (
        $name:ident,
        input: $input:expr,
        $( vars: { $( $var:literal => $val:expr ),* $(,)? }, )?
        $( formatted: $formatted:expr, )?
        $( value: $value:expr, )?
        $( error: $error:ident, )?
    ) => {
        #[test]
        fn $name() {
            #[allow(unused_mut)]
            let mut vars: Vec<(&'static str, exparse::ScalarValue)> = Vec::new();
            $( $( vars.push(($var, exparse::ScalarValue::from($val))); )* )?

            let case = $crate::cases::Case {
                input: $input,
                vars,
                formatted: None $( .or(Some($formatted)) )?,
                value: None $( .or(Some(exparse::ScalarValue::from($value))) )?,
                error: None $( .or(Some(exparse::ErrorKind::$error)) )?,
            };
            case.run();
        }
    };
}
