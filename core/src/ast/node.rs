//! AST node model and tree-walking evaluation.

use smallvec::SmallVec;

use crate::{
    context::Context,
    error::{Error, Result},
    values::{
        ops::{self, ArithOp},
        Kind, ScalarValue,
    },
};

/// Prefix operators. Each applies to a single atom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Plus,
    Minus,
    Not,
}

impl UnaryOp {
    pub fn symbol(self) -> char {
        match self {
            UnaryOp::Plus => '+',
            UnaryOp::Minus => '-',
            UnaryOp::Not => '!',
        }
    }

    pub fn apply(self, value: &ScalarValue) -> Result<ScalarValue> {
        match self {
            UnaryOp::Plus => Ok(value.clone()),
            UnaryOp::Minus => ops::negate(value),
            UnaryOp::Not => ops::logical_not(value),
        }
    }
}

/// Comparison operators, keeping the spelling they were written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    /// `==`
    EqEq,
    /// `=`
    Eq,
    /// `!=`
    Ne,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `<=`
    Le,
    /// `>=`
    Ge,
    /// `=<`
    LeAlt,
    /// `=>`
    GeAlt,
}

impl CompareOp {
    pub fn symbol(self) -> &'static str {
        match self {
            CompareOp::EqEq => "==",
            CompareOp::Eq => "=",
            CompareOp::Ne => "!=",
            CompareOp::Lt => "<",
            CompareOp::Gt => ">",
            CompareOp::Le => "<=",
            CompareOp::Ge => ">=",
            CompareOp::LeAlt => "=<",
            CompareOp::GeAlt => "=>",
        }
    }

    /// Collapse synonymous spellings: `=` to `==`, `=<` to `<=`, `=>` to `>=`.
    pub fn normalized(self) -> CompareOp {
        match self {
            CompareOp::Eq => CompareOp::EqEq,
            CompareOp::LeAlt => CompareOp::Le,
            CompareOp::GeAlt => CompareOp::Ge,
            other => other,
        }
    }

    pub fn apply(self, left: &ScalarValue, right: &ScalarValue) -> Result<ScalarValue> {
        match self.normalized() {
            CompareOp::Ne => ops::not_equal(left, right),
            CompareOp::Lt => ops::less(left, right),
            CompareOp::Gt => ops::greater(left, right),
            CompareOp::Le => ops::less_equal(left, right),
            CompareOp::Ge => ops::greater_equal(left, right),
            _ => ops::equal(left, right),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicOp {
    And,
    Or,
}

impl LogicOp {
    pub fn symbol(self) -> &'static str {
        match self {
            LogicOp::And => "&&",
            LogicOp::Or => "||",
        }
    }

    /// Check that `value` is a bool, the only kind logic operators accept.
    pub fn operand(self, value: &ScalarValue) -> Result<bool> {
        match value {
            ScalarValue::Bool(b) => Ok(*b),
            _ => Err(Error::bad_syntax(format!(
                "Invalid operands for {}. Operands must be of type bool.",
                self.symbol()
            ))),
        }
    }

    pub fn apply(self, left: &ScalarValue, right: &ScalarValue) -> Result<ScalarValue> {
        let l = self.operand(left)?;
        let r = self.operand(right)?;
        Ok(ScalarValue::Bool(match self {
            LogicOp::And => l && r,
            LogicOp::Or => l || r,
        }))
    }
}

/// One node of an expression tree. Children are owned exclusively.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Constant(ScalarValue),
    Variable(String),
    FunctionCall {
        name: String,
        args: Vec<Node>,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Node>,
    },
    Arith {
        op: ArithOp,
        left: Box<Node>,
        right: Box<Node>,
    },
    Cast {
        kind: Kind,
        operand: Box<Node>,
    },
    Compare {
        op: CompareOp,
        left: Box<Node>,
        right: Box<Node>,
    },
    Logic {
        op: LogicOp,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    /// Value of this node if it is a literal. Never evaluates anything.
    pub fn try_constant_fold(&self) -> Option<ScalarValue> {
        match self {
            Node::Constant(value) => Some(value.clone()),
            _ => None,
        }
    }

    pub fn is_constant(&self) -> bool {
        matches!(self, Node::Constant(_))
    }

    /// Evaluate the subtree rooted here against `ctx`.
    pub fn evaluate(&self, ctx: &dyn Context) -> Result<ScalarValue> {
        match self {
            Node::Constant(value) => Ok(value.clone()),
            Node::Variable(name) => {
                tracing::trace!(name = %name, "Looking up variable");
                ctx.lookup_variable(name)
            }
            Node::FunctionCall { name, args } => {
                let values = args
                    .iter()
                    .map(|arg| arg.evaluate(ctx))
                    .collect::<Result<SmallVec<[ScalarValue; 4]>>>()?;
                tracing::trace!(name = %name, args = values.len(), "Calling function");
                ctx.call_function(name, &values)
            }
            Node::Unary { op, operand } => op.apply(&operand.evaluate(ctx)?),
            Node::Arith { op, left, right } => {
                let l = left.evaluate(ctx)?;
                let r = right.evaluate(ctx)?;
                ops::arith(*op, &l, &r)
            }
            Node::Cast { kind, operand } => cast(&operand.evaluate(ctx)?, *kind),
            Node::Compare { op, left, right } => {
                let l = left.evaluate(ctx)?;
                let r = right.evaluate(ctx)?;
                op.apply(&l, &r)
            }
            Node::Logic { op, left, right } => {
                // Both sides are always evaluated; there is no short circuit.
                let l = left.evaluate(ctx)?;
                let r = right.evaluate(ctx)?;
                op.apply(&l, &r)
            }
        }
    }
}

/// Explicit cast. Saturation is not an error, only worth a log line.
pub(crate) fn cast(value: &ScalarValue, kind: Kind) -> Result<ScalarValue> {
    let (converted, exact) = ops::convert_type(value, kind)?;
    if !exact {
        tracing::debug!(from = %value, to = %kind, result = %converted, "Cast saturated");
    }
    Ok(converted)
}
