//! Smart constructors used by the parser to build the tree bottom-up.
//!
//! Whenever every child of a new node is a constant, the operator is applied
//! right away and the node is replaced by a single [`Node::Constant`]. An
//! operator error raised here aborts the parse. Variables and function calls
//! never fold, so they keep their ancestors alive as well.

use crate::{
    ast::node::{cast as apply_cast, CompareOp, LogicOp, Node, UnaryOp},
    error::Result,
    values::{ops, ArithOp, Kind, ScalarValue},
};

pub fn constant(value: impl Into<ScalarValue>) -> Node {
    Node::Constant(value.into())
}

pub fn variable(name: impl Into<String>) -> Node {
    Node::Variable(name.into())
}

pub fn call(name: impl Into<String>, args: Vec<Node>) -> Node {
    Node::FunctionCall {
        name: name.into(),
        args,
    }
}

pub fn unary(op: UnaryOp, operand: Node) -> Result<Node> {
    if let Some(value) = operand.try_constant_fold() {
        let folded = op.apply(&value)?;
        tracing::debug!(op = %op.symbol(), result = %folded, "Folded unary operator");
        return Ok(Node::Constant(folded));
    }
    Ok(Node::Unary {
        op,
        operand: Box::new(operand),
    })
}

pub fn arith(op: ArithOp, left: Node, right: Node) -> Result<Node> {
    if let (Some(l), Some(r)) = (left.try_constant_fold(), right.try_constant_fold()) {
        let folded = ops::arith(op, &l, &r)?;
        tracing::debug!(op = %op.symbol(), result = %folded, "Folded arithmetic operator");
        return Ok(Node::Constant(folded));
    }
    Ok(Node::Arith {
        op,
        left: Box::new(left),
        right: Box::new(right),
    })
}

pub fn cast(kind: Kind, operand: Node) -> Result<Node> {
    if let Some(value) = operand.try_constant_fold() {
        let folded = apply_cast(&value, kind)?;
        tracing::debug!(kind = %kind, result = %folded, "Folded cast");
        return Ok(Node::Constant(folded));
    }
    Ok(Node::Cast {
        kind,
        operand: Box::new(operand),
    })
}

pub fn compare(op: CompareOp, left: Node, right: Node) -> Result<Node> {
    if let (Some(l), Some(r)) = (left.try_constant_fold(), right.try_constant_fold()) {
        let folded = op.apply(&l, &r)?;
        tracing::debug!(op = op.symbol(), result = %folded, "Folded comparison");
        return Ok(Node::Constant(folded));
    }
    Ok(Node::Compare {
        op,
        left: Box::new(left),
        right: Box::new(right),
    })
}

/// Build a logic node.
///
/// Constant sides must be bools. A constant side that decides the result
/// (`false` for `and`, `true` for `or`) folds the whole node; any other
/// constant side is dropped and the live side is returned as is.
pub fn logic(op: LogicOp, left: Node, right: Node) -> Result<Node> {
    let l = left.try_constant_fold().map(|v| op.operand(&v)).transpose()?;
    let r = right.try_constant_fold().map(|v| op.operand(&v)).transpose()?;

    let absorbing = op == LogicOp::Or;
    let node = match (l, r) {
        (Some(a), Some(b)) => {
            let value = match op {
                LogicOp::And => a && b,
                LogicOp::Or => a || b,
            };
            Node::Constant(ScalarValue::Bool(value))
        }
        (Some(a), None) | (None, Some(a)) if a == absorbing => {
            Node::Constant(ScalarValue::Bool(absorbing))
        }
        (Some(_), None) => right,
        (None, Some(_)) => left,
        (None, None) => {
            return Ok(Node::Logic {
                op,
                left: Box::new(left),
                right: Box::new(right),
            })
        }
    };
    tracing::debug!(op = op.symbol(), result = %node_summary(&node), "Folded logic operator");
    Ok(node)
}

fn node_summary(node: &Node) -> String {
    match node {
        Node::Constant(value) => value.to_string(),
        _ => "live operand".to_string(),
    }
}
