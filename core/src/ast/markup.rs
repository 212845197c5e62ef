//! XML-like debug dump of a tree.
//!
//! Not a stable format; meant for eyeballing what the parser and the
//! constant folder produced.

use core::fmt::{self, Write};

use crate::ast::node::Node;

/// Render `node` as nested markup elements, two spaces per level.
pub fn to_markup(node: &Node) -> String {
    Markup(node).to_string()
}

struct Markup<'a>(&'a Node);

impl fmt::Display for Markup<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, self.0, 0)
    }
}

fn write_node(out: &mut dyn Write, node: &Node, depth: usize) -> fmt::Result {
    let indent = "  ".repeat(depth);
    match node {
        Node::Constant(value) => writeln!(
            out,
            "{}<Constant kind=\"{}\">{}</Constant>",
            indent,
            value.kind(),
            escape(&value.to_string())
        ),
        Node::Variable(name) => writeln!(out, "{}<Variable name=\"{}\"/>", indent, escape(name)),
        Node::FunctionCall { name, args } => {
            writeln!(out, "{}<FunctionCall name=\"{}\">", indent, escape(name))?;
            for arg in args {
                write_node(out, arg, depth + 1)?;
            }
            writeln!(out, "{}</FunctionCall>", indent)
        }
        Node::Unary { op, operand } => {
            writeln!(out, "{}<Unary op=\"{}\">", indent, escape(&op.symbol().to_string()))?;
            write_node(out, operand, depth + 1)?;
            writeln!(out, "{}</Unary>", indent)
        }
        Node::Arith { op, left, right } => {
            write_binary(out, depth, "Arith", &op.symbol().to_string(), left, right)
        }
        Node::Cast { kind, operand } => {
            writeln!(out, "{}<Cast kind=\"{}\">", indent, kind)?;
            write_node(out, operand, depth + 1)?;
            writeln!(out, "{}</Cast>", indent)
        }
        Node::Compare { op, left, right } => {
            write_binary(out, depth, "Compare", op.symbol(), left, right)
        }
        Node::Logic { op, left, right } => {
            write_binary(out, depth, "Logic", op.symbol(), left, right)
        }
    }
}

fn write_binary(
    out: &mut dyn Write,
    depth: usize,
    tag: &str,
    op: &str,
    left: &Node,
    right: &Node,
) -> fmt::Result {
    let indent = "  ".repeat(depth);
    writeln!(out, "{}<{} op=\"{}\">", indent, tag, escape(op))?;
    write_node(out, left, depth + 1)?;
    write_node(out, right, depth + 1)?;
    writeln!(out, "{}</{}>", indent, tag)
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            c => escaped.push(c),
        }
    }
    escaped
}
