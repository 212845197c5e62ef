//! Core of the exparse expression language: scalar values, the grammar,
//! constant folding and tree evaluation.

pub mod api;
pub mod ast;
pub mod context;
pub mod error;
pub mod parser;
pub mod syntax;
pub mod values;

pub use api::{
    expression_list_to_string, parse_expression, parse_expression_list, parse_expression_markup,
    parse_expression_with, ParseOptions, ParseTree,
};
pub use context::{BasicContext, Context};
pub use error::{Error, ErrorKind, Result};
pub use values::{Kind, ScalarValue};
