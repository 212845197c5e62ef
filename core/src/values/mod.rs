//! The scalar value type and the operators defined on it.

pub mod ops;
pub mod scalar;

pub use ops::ArithOp;
pub use scalar::{Kind, ScalarValue};

#[cfg(test)]
mod scalar_test;

#[cfg(test)]
mod ops_test;
