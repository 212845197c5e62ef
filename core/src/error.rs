//! Error types shared by the parser, the constant folder and the evaluator.
//!
//! Every failure surfaces as one [`Error`] value. Parse-time errors abort the
//! whole parse; evaluation errors abort the evaluation of the current tree.

use core::ops::Range;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All errors raised while parsing or evaluating an expression.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The input text does not match the grammar.
    #[error("Syntax error at position {offset} near {near:?}: {message}")]
    Syntax {
        /// Byte offset where parsing stopped.
        offset: usize,
        /// The unparsed rest of the input, starting at `offset`.
        near: String,
        /// Short description of what went wrong.
        message: String,
    },

    /// The context could not resolve a variable or function name.
    #[error("{0}")]
    UnknownSymbol(String),

    /// A function was resolved but called with invalid arguments.
    #[error("{0}")]
    BadFunctionCall(String),

    /// A scalar operation requested an undefined or unrepresentable conversion.
    #[error("{0}")]
    Conversion(String),

    /// An operator was applied to operands it is not defined for.
    #[error("{0}")]
    BadSyntax(String),
}

/// Fieldless mirror of [`Error`], convenient for matching in host code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Syntax,
    UnknownSymbol,
    BadFunctionCall,
    Conversion,
    BadSyntax,
}

impl Error {
    pub(crate) fn syntax(source: &str, offset: usize, message: impl Into<String>) -> Self {
        let offset = offset.min(source.len());
        Error::Syntax {
            offset,
            near: source.get(offset..).unwrap_or_default().to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn conversion(message: impl Into<String>) -> Self {
        Error::Conversion(message.into())
    }

    pub(crate) fn bad_syntax(message: impl Into<String>) -> Self {
        Error::BadSyntax(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Syntax { .. } => ErrorKind::Syntax,
            Error::UnknownSymbol(_) => ErrorKind::UnknownSymbol,
            Error::BadFunctionCall(_) => ErrorKind::BadFunctionCall,
            Error::Conversion(_) => ErrorKind::Conversion,
            Error::BadSyntax(_) => ErrorKind::BadSyntax,
        }
    }

    /// Source range of the error, only known for syntax errors.
    pub fn span(&self) -> Option<Range<usize>> {
        match self {
            Error::Syntax { offset, near, .. } => {
                let len = near.chars().next().map_or(0, char::len_utf8);
                Some(*offset..*offset + len)
            }
            _ => None,
        }
    }

    /// The human readable message without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            Error::Syntax { message, .. } => message,
            Error::UnknownSymbol(m)
            | Error::BadFunctionCall(m)
            | Error::Conversion(m)
            | Error::BadSyntax(m) => m,
        }
    }
}
