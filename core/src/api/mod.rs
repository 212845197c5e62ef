//! Public API: turn text into parse trees and evaluate them.
//!
//! # Example
//!
//! ```
//! use exparse_core::{api::parse_expression, context::BasicContext, values::ScalarValue};
//!
//! let tree = parse_expression("price * (1 + vat)").unwrap();
//! assert_eq!(tree.to_string(), "(price * (1 + vat))");
//!
//! let mut ctx = BasicContext::new();
//! ctx.set_variable("price", 100);
//! ctx.set_variable("vat", 0.25);
//! assert_eq!(tree.evaluate(&ctx).unwrap(), ScalarValue::Double(125.0));
//! ```

pub mod options;
pub mod parse_tree;

pub use options::ParseOptions;
pub use parse_tree::{
    expression_list_to_string, parse_expression, parse_expression_list, parse_expression_markup,
    parse_expression_with, ParseTree,
};
