//! Owning handle around a parsed expression.

use core::fmt;

use crate::{
    api::ParseOptions,
    ast::{markup, Node},
    context::{BasicContext, Context},
    error::{Error, Result},
    parser,
    values::ScalarValue,
};

/// A parsed, constant-folded expression.
///
/// The tree is immutable once built; evaluating it only reads it, so one
/// tree can be evaluated against many contexts, from several threads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseTree {
    root: Option<Node>,
}

impl ParseTree {
    pub fn new(root: Node) -> Self {
        Self { root: Some(root) }
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// True when folding reduced the whole expression to a single value.
    pub fn is_constant(&self) -> bool {
        self.root.as_ref().is_some_and(Node::is_constant)
    }

    /// Evaluate against a caller supplied context.
    pub fn evaluate(&self, ctx: &dyn Context) -> Result<ScalarValue> {
        let root = self
            .root
            .as_ref()
            .ok_or_else(|| Error::bad_syntax("empty parse tree"))?;
        root.evaluate(ctx)
    }

    /// Evaluate against an empty [`BasicContext`]: no variables, only the
    /// standard math functions.
    pub fn evaluate_basic(&self) -> Result<ScalarValue> {
        self.evaluate(&BasicContext::new())
    }

    /// Debug dump of the tree. Empty for an empty tree.
    pub fn to_markup(&self) -> String {
        self.root.as_ref().map(markup::to_markup).unwrap_or_default()
    }
}

impl From<Node> for ParseTree {
    fn from(root: Node) -> Self {
        Self::new(root)
    }
}

/// Canonical rendering. Parsing the output again yields the same rendering.
impl fmt::Display for ParseTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.root {
            Some(root) => write!(f, "{}", root),
            None => Ok(()),
        }
    }
}

/// Parse a single expression with the default options.
pub fn parse_expression(text: &str) -> Result<ParseTree> {
    parse_expression_with(text, &ParseOptions::default())
}

pub fn parse_expression_with(text: &str, options: &ParseOptions) -> Result<ParseTree> {
    let root = parser::parse(text, options)?;
    tracing::debug!(input = text, folded = root.is_constant(), "Parsed expression");
    Ok(ParseTree::new(root))
}

/// Parse a comma separated list of expressions, such as the arguments of a
/// select clause. An empty input yields an empty list.
pub fn parse_expression_list(text: &str) -> Result<Vec<ParseTree>> {
    let nodes = parser::parse_list(text, &ParseOptions::default())?;
    tracing::debug!(input = text, count = nodes.len(), "Parsed expression list");
    Ok(nodes.into_iter().map(ParseTree::new).collect())
}

/// Render a list of trees joined by `", "`.
pub fn expression_list_to_string(trees: &[ParseTree]) -> String {
    trees
        .iter()
        .map(ParseTree::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse `text` and return the debug markup of its tree.
pub fn parse_expression_markup(text: &str) -> Result<String> {
    Ok(parse_expression(text)?.to_markup())
}
