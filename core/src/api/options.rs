//! Configuration options for parsing.

/// Configuration options for the parser.
///
/// # Example
///
/// ```
/// use exparse_core::api::{parse_expression_with, ParseOptions};
///
/// let options = ParseOptions { max_depth: 16 };
/// let deep = format!("{}1{}", "(".repeat(32), ")".repeat(32));
/// assert!(parse_expression_with(&deep, &options).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum nesting of parentheses and call arguments, and maximum
    /// height of the built tree. A chain like `a + b + c` nests one level
    /// per operator; constant parts fold to a single leaf and do not count.
    ///
    /// Default: 64
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { max_depth: 64 }
    }
}
