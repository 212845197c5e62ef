//! Expression tree: node model, constant-folding builders, rendering.

mod display;
pub mod fold;
pub mod markup;
pub mod node;

pub use node::{CompareOp, LogicOp, Node, UnaryOp};
