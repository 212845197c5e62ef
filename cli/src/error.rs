use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    /// An expression error that has already been printed to stderr.
    #[error("expression failed")]
    Reported,

    #[error("invalid variable definition '{0}'")]
    #[diagnostic(help("variables are given as NAME=VALUE"))]
    BadVariable(String),

    #[error(transparent)]
    #[diagnostic(code(exparse::io))]
    Io(#[from] std::io::Error),
}
