//! Evaluation contexts: how a parse tree resolves names.
//!
//! The evaluator never interprets identifiers itself. Every variable read and
//! every function call is forwarded to a [`Context`] supplied by the host.

pub mod math;

use hashbrown::HashMap;

use crate::{
    error::{Error, Result},
    values::ScalarValue,
};

/// Resolves variable and function names during evaluation.
pub trait Context {
    /// Current value of the variable `name`.
    fn lookup_variable(&self, name: &str) -> Result<ScalarValue>;

    /// Call function `name` with already evaluated arguments.
    fn call_function(&self, name: &str, args: &[ScalarValue]) -> Result<ScalarValue>;
}

impl<T: Context + ?Sized> Context for &T {
    fn lookup_variable(&self, name: &str) -> Result<ScalarValue> {
        (**self).lookup_variable(name)
    }

    fn call_function(&self, name: &str, args: &[ScalarValue]) -> Result<ScalarValue> {
        (**self).call_function(name, args)
    }
}

impl<T: Context + ?Sized> Context for Box<T> {
    fn lookup_variable(&self, name: &str) -> Result<ScalarValue> {
        (**self).lookup_variable(name)
    }

    fn call_function(&self, name: &str, args: &[ScalarValue]) -> Result<ScalarValue> {
        (**self).call_function(name, args)
    }
}

/// Default context: a variable table plus the standard math functions.
///
/// Host contexts that only add variables can hold a `BasicContext` and
/// delegate unknown names to it.
///
/// # Example
///
/// ```
/// use exparse_core::{context::{BasicContext, Context}, values::ScalarValue};
///
/// let mut ctx = BasicContext::new();
/// ctx.set_variable("x", 3);
/// assert_eq!(ctx.lookup_variable("x").unwrap(), ScalarValue::Integer(3));
/// assert!(ctx.lookup_variable("y").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct BasicContext {
    variables: HashMap<String, ScalarValue>,
}

impl BasicContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define or replace a variable. Names are case-sensitive.
    pub fn set_variable(&mut self, name: impl Into<String>, value: impl Into<ScalarValue>) {
        self.variables.insert(name.into(), value.into());
    }

    pub fn clear_variables(&mut self) {
        self.variables.clear();
    }

    pub fn variables(&self) -> &HashMap<String, ScalarValue> {
        &self.variables
    }
}

impl Context for BasicContext {
    fn lookup_variable(&self, name: &str) -> Result<ScalarValue> {
        self.variables
            .get(name)
            .cloned()
            .ok_or_else(|| Error::UnknownSymbol(format!("Unknown variable {}", name)))
    }

    fn call_function(&self, name: &str, args: &[ScalarValue]) -> Result<ScalarValue> {
        math::call(name, args)
    }
}
