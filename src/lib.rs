//! exparse - an embeddable expression language
//!
//! # Overview
//!
//! exparse parses arithmetic, comparison, boolean and string expressions,
//! folds their constant parts at parse time, and evaluates the result
//! against a host supplied [`Context`] that resolves variable and function
//! names. Common use cases include:
//!
//! - Row filters over delimited text
//! - Calculators and formula fields
//! - User supplied conditions in configuration
//!
//! # Quick Start
//!
//! ```
//! use exparse::{parse_expression, BasicContext, ScalarValue};
//!
//! let tree = parse_expression("qty * price > 100 and not closed").unwrap();
//!
//! let mut ctx = BasicContext::new();
//! ctx.set_variable("qty", 3);
//! ctx.set_variable("price", 40.5);
//! ctx.set_variable("closed", false);
//!
//! assert_eq!(tree.evaluate(&ctx).unwrap(), ScalarValue::Bool(true));
//! ```
//!
//! # Custom contexts
//!
//! Implement [`Context`] to resolve names from your own data. Delegate to a
//! [`BasicContext`] to keep the standard math functions:
//!
//! ```
//! use exparse::{parse_expression, BasicContext, Context, Result, ScalarValue};
//!
//! struct Row<'a> {
//!     fields: &'a [(&'a str, &'a str)],
//!     fallback: BasicContext,
//! }
//!
//! impl Context for Row<'_> {
//!     fn lookup_variable(&self, name: &str) -> Result<ScalarValue> {
//!         match self.fields.iter().find(|(k, _)| *k == name) {
//!             Some((_, v)) => Ok(ScalarValue::from_auto_string(v)),
//!             None => self.fallback.lookup_variable(name),
//!         }
//!     }
//!
//!     fn call_function(&self, name: &str, args: &[ScalarValue]) -> Result<ScalarValue> {
//!         self.fallback.call_function(name, args)
//!     }
//! }
//!
//! let row = Row { fields: &[("age", "42")], fallback: BasicContext::new() };
//! let tree = parse_expression("age >= 18").unwrap();
//! assert_eq!(tree.evaluate(&row).unwrap(), ScalarValue::Bool(true));
//! ```

mod error_renderer;

// Re-export public API from exparse_core
pub use exparse_core::api::{
    expression_list_to_string, parse_expression, parse_expression_list, parse_expression_markup,
    parse_expression_with, ParseOptions, ParseTree,
};

// Re-export commonly used types and values
pub use exparse_core::ast::{self, Node};
pub use exparse_core::context::{self, BasicContext, Context};
pub use exparse_core::values::{self, Kind, ScalarValue};

// Re-export errors
pub use exparse_core::error::{Error, ErrorKind, Result};

pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};
