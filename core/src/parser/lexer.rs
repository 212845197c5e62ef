//! Tokenizer for the expression grammar.
//!
//! Keywords (`and`, `or`, `not`, `true`, `false`) match regardless of case
//! and only as whole words: `android` lexes as a single identifier because
//! the longest match wins.

use core::ops::Range;

use logos::Logos;

use crate::ast::CompareOp;

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f\x0B]+")]
pub enum Token<'src> {
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(",")]
    Comma,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,

    #[token("!")]
    #[token("not", ignore(ascii_case))]
    Not,
    #[token("&&")]
    #[token("and", ignore(ascii_case))]
    And,
    #[token("||")]
    #[token("or", ignore(ascii_case))]
    Or,

    // Comparison operators keep their written spelling.
    #[token("==", |_| CompareOp::EqEq)]
    #[token("=", |_| CompareOp::Eq)]
    #[token("!=", |_| CompareOp::Ne)]
    #[token("<", |_| CompareOp::Lt)]
    #[token(">", |_| CompareOp::Gt)]
    #[token("<=", |_| CompareOp::Le)]
    #[token(">=", |_| CompareOp::Ge)]
    #[token("=<", |_| CompareOp::LeAlt)]
    #[token("=>", |_| CompareOp::GeAlt)]
    Compare(CompareOp),

    #[token("true", |_| true, ignore(ascii_case))]
    #[token("false", |_| false, ignore(ascii_case))]
    Bool(bool),

    #[regex(r"[A-Za-z][A-Za-z0-9_]*", |lex| lex.slice())]
    Ident(&'src str),

    #[regex(r"[0-9]+", |lex| lex.slice())]
    Integer(&'src str),

    // A float needs a decimal point or an exponent.
    #[regex(r"[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?", |lex| lex.slice())]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", |lex| lex.slice())]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", |lex| lex.slice())]
    Float(&'src str),

    // Raw literal including quotes; escapes are processed by the parser.
    #[regex(r#""([^"\\]|\\.|\\\n)*""#, |lex| lex.slice())]
    Str(&'src str),
}

impl Token<'_> {
    /// Short description used in syntax error messages.
    pub fn describe(&self) -> String {
        match self {
            Token::LParen => "'('".to_string(),
            Token::RParen => "')'".to_string(),
            Token::Comma => "','".to_string(),
            Token::Plus => "'+'".to_string(),
            Token::Minus => "'-'".to_string(),
            Token::Star => "'*'".to_string(),
            Token::Slash => "'/'".to_string(),
            Token::Not => "'not'".to_string(),
            Token::And => "'and'".to_string(),
            Token::Or => "'or'".to_string(),
            Token::Compare(op) => format!("'{}'", op.symbol()),
            Token::Bool(b) => format!("'{}'", b),
            Token::Ident(name) => format!("identifier '{}'", name),
            Token::Integer(text) | Token::Float(text) => format!("number '{}'", text),
            Token::Str(_) => "string literal".to_string(),
        }
    }
}

/// A token together with its byte range in the source.
pub type Spanned<'src> = (Token<'src>, Range<usize>);

/// Tokenize `source`.
///
/// On failure returns the byte offset of the first character that does not
/// start any token.
pub fn tokenize(source: &str) -> Result<Vec<Spanned<'_>>, usize> {
    Token::lexer(source)
        .spanned()
        .map(|(token, span)| token.map(|t| (t, span.clone())).map_err(|()| span.start))
        .collect()
}
