//! Recursive-descent parser producing folded AST nodes.
//!
//! Precedence, loosest first:
//!
//! ```text
//! or       := and (("or" | "||") and)*
//! and      := compare (("and" | "&&") compare)*
//! compare  := cast (CMP cast)*
//! cast     := ["(" KIND ")"] additive
//! additive := term (("+" | "-") term)*
//! term     := unary (("*" | "/") unary)*
//! unary    := ["+" | "-" | "!" | "not"] atom
//! atom     := "(" or ")" | literal | IDENT "(" [or ("," or)*] ")" | IDENT
//! ```
//!
//! Nodes are built through [`crate::ast::fold`], so constant subtrees are
//! already collapsed when the parser returns. Both the parenthesis nesting
//! and the height of the built tree are limited by
//! [`ParseOptions::max_depth`]; rendering, evaluating and dropping a tree all
//! recurse over its height.

use crate::{
    api::ParseOptions,
    ast::{fold, LogicOp, Node, UnaryOp},
    error::{Error, Result},
    parser::lexer::{tokenize, Spanned, Token},
    syntax::string_literal::unescape_quoted,
    values::{scalar::parse_real, ArithOp, Kind, ScalarValue},
};

/// Parse a single expression. The whole input must be consumed.
pub fn parse(source: &str, options: &ParseOptions) -> Result<Node> {
    let mut parser = Parser::new(source, options)?;
    let parsed = parser.expression()?;
    parser.expect_end()?;
    Ok(parsed.node)
}

/// Parse a comma separated, possibly empty, list of expressions.
pub fn parse_list(source: &str, options: &ParseOptions) -> Result<Vec<Node>> {
    let mut parser = Parser::new(source, options)?;
    let mut nodes = Vec::new();
    if parser.at_end() {
        return Ok(nodes);
    }
    loop {
        nodes.push(parser.expression()?.node);
        if !parser.eat(&Token::Comma) {
            break;
        }
    }
    parser.expect_end()?;
    Ok(nodes)
}

/// A built node and the height of the tree below it, counting the node.
struct Parsed {
    node: Node,
    height: usize,
}

/// `depth` counts open parentheses and call argument lists, which is what the
/// parser's own recursion follows. Tree height is tracked separately through
/// [`Parsed`], since operator chains grow the tree without recursing.
struct Parser<'src> {
    source: &'src str,
    tokens: Vec<Spanned<'src>>,
    pos: usize,
    depth: usize,
    max_depth: usize,
}

impl<'src> Parser<'src> {
    fn new(source: &'src str, options: &ParseOptions) -> Result<Self> {
        let tokens = tokenize(source)
            .map_err(|offset| Error::syntax(source, offset, "unexpected character"))?;
        Ok(Parser {
            source,
            tokens,
            pos: 0,
            depth: 0,
            max_depth: options.max_depth,
        })
    }

    // ---- token cursor ----

    fn peek(&self) -> Option<&Token<'src>> {
        self.tokens.get(self.pos).map(|(t, _)| t)
    }

    fn peek_at(&self, ahead: usize) -> Option<&Token<'src>> {
        self.tokens.get(self.pos + ahead).map(|(t, _)| t)
    }

    fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn offset(&self) -> usize {
        self.tokens
            .get(self.pos)
            .map_or(self.source.len(), |(_, span)| span.start)
    }

    fn eat(&mut self, expected: &Token<'src>) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn error(&self, message: impl Into<String>) -> Error {
        Error::syntax(self.source, self.offset(), message)
    }

    fn unexpected(&self) -> Error {
        match self.peek() {
            Some(token) => self.error(format!("unexpected {}", token.describe())),
            None => self.error("unexpected end of input"),
        }
    }

    fn expect(&mut self, expected: &Token<'src>) -> Result<()> {
        if self.eat(expected) {
            Ok(())
        } else {
            Err(match self.peek() {
                Some(found) => self.error(format!(
                    "expected {}, found {}",
                    expected.describe(),
                    found.describe()
                )),
                None => self.error(format!("expected {}", expected.describe())),
            })
        }
    }

    fn expect_end(&self) -> Result<()> {
        if self.at_end() {
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }

    /// Wrap a freshly built node, rejecting it when its tree is too deep.
    /// Constants are leaves whatever they were folded from.
    fn bounded(&self, node: Node, height: usize) -> Result<Parsed> {
        let height = if node.is_constant() { 1 } else { height };
        if height > self.max_depth {
            return Err(self.depth_error());
        }
        Ok(Parsed { node, height })
    }

    fn depth_error(&self) -> Error {
        self.error(format!(
            "nesting depth exceeds maximum of {}",
            self.max_depth
        ))
    }

    // ---- grammar ----

    fn expression(&mut self) -> Result<Parsed> {
        if self.depth >= self.max_depth {
            return Err(self.depth_error());
        }
        self.depth += 1;
        let parsed = self.or_expr();
        self.depth -= 1;
        parsed
    }

    fn or_expr(&mut self) -> Result<Parsed> {
        let mut left = self.and_expr()?;
        while self.eat(&Token::Or) {
            let right = self.and_expr()?;
            let height = left.height.max(right.height) + 1;
            left = self.bounded(fold::logic(LogicOp::Or, left.node, right.node)?, height)?;
        }
        Ok(left)
    }

    fn and_expr(&mut self) -> Result<Parsed> {
        let mut left = self.compare_expr()?;
        while self.eat(&Token::And) {
            let right = self.compare_expr()?;
            let height = left.height.max(right.height) + 1;
            left = self.bounded(fold::logic(LogicOp::And, left.node, right.node)?, height)?;
        }
        Ok(left)
    }

    fn compare_expr(&mut self) -> Result<Parsed> {
        let mut left = self.cast_expr()?;
        while let Some(&Token::Compare(op)) = self.peek() {
            self.pos += 1;
            let right = self.cast_expr()?;
            let height = left.height.max(right.height) + 1;
            left = self.bounded(fold::compare(op, left.node, right.node)?, height)?;
        }
        Ok(left)
    }

    /// A leading `(kind)` casts the whole additive expression after it.
    fn cast_expr(&mut self) -> Result<Parsed> {
        let kind = match (self.peek(), self.peek_at(1), self.peek_at(2)) {
            (Some(Token::LParen), Some(Token::Ident(name)), Some(Token::RParen)) => {
                Kind::from_name(name)
            }
            _ => None,
        };
        match kind {
            Some(kind) => {
                self.pos += 3;
                let operand = self.additive_expr()?;
                self.bounded(fold::cast(kind, operand.node)?, operand.height + 1)
            }
            None => self.additive_expr(),
        }
    }

    fn additive_expr(&mut self) -> Result<Parsed> {
        let mut left = self.term()?;
        loop {
            let op = match self.peek() {
                Some(Token::Plus) => ArithOp::Add,
                Some(Token::Minus) => ArithOp::Sub,
                _ => return Ok(left),
            };
            self.pos += 1;
            let right = self.term()?;
            let height = left.height.max(right.height) + 1;
            left = self.bounded(fold::arith(op, left.node, right.node)?, height)?;
        }
    }

    fn term(&mut self) -> Result<Parsed> {
        let mut left = self.unary()?;
        loop {
            let op = match self.peek() {
                Some(Token::Star) => ArithOp::Mul,
                Some(Token::Slash) => ArithOp::Div,
                _ => return Ok(left),
            };
            self.pos += 1;
            let right = self.unary()?;
            let height = left.height.max(right.height) + 1;
            left = self.bounded(fold::arith(op, left.node, right.node)?, height)?;
        }
    }

    /// At most one prefix operator, applied to an atom.
    fn unary(&mut self) -> Result<Parsed> {
        let op = match self.peek() {
            Some(Token::Plus) => UnaryOp::Plus,
            Some(Token::Minus) => UnaryOp::Minus,
            Some(Token::Not) => UnaryOp::Not,
            _ => return self.atom(),
        };
        self.pos += 1;
        let operand = self.atom()?;
        self.bounded(fold::unary(op, operand.node)?, operand.height + 1)
    }

    fn atom(&mut self) -> Result<Parsed> {
        let start = self.offset();
        let token = match self.peek() {
            Some(token) => *token,
            None => return Err(self.unexpected()),
        };

        let leaf = match token {
            Token::LParen => {
                self.pos += 1;
                let inner = self.expression()?;
                self.expect(&Token::RParen)?;
                return Ok(inner);
            }
            Token::Integer(text) => {
                self.pos += 1;
                // Digits only, so this is an integer, a long, or a double
                // when even a long overflows.
                fold::constant(ScalarValue::from_auto_string(text))
            }
            Token::Float(text) => {
                self.pos += 1;
                parse_real(text)
                    .map(fold::constant)
                    .ok_or_else(|| Error::syntax(self.source, start, "malformed number"))?
            }
            Token::Str(raw) => {
                self.pos += 1;
                unescape_quoted(raw)
                    .map(fold::constant)
                    .ok_or_else(|| Error::syntax(self.source, start, "malformed string literal"))?
            }
            Token::Bool(b) => {
                self.pos += 1;
                fold::constant(b)
            }
            Token::Ident(name) => {
                self.pos += 1;
                if self.eat(&Token::LParen) {
                    let args = self.arguments()?;
                    let height = args.iter().map(|arg| arg.height).max().unwrap_or(0) + 1;
                    let args = args.into_iter().map(|arg| arg.node).collect();
                    return self.bounded(fold::call(name, args), height);
                }
                fold::variable(name)
            }
            _ => return Err(self.unexpected()),
        };
        Ok(Parsed {
            node: leaf,
            height: 1,
        })
    }

    /// Call arguments after the opening parenthesis, including the closing one.
    fn arguments(&mut self) -> Result<Vec<Parsed>> {
        let mut args = Vec::new();
        if self.eat(&Token::RParen) {
            return Ok(args);
        }
        loop {
            args.push(self.expression()?);
            if self.eat(&Token::Comma) {
                continue;
            }
            self.expect(&Token::RParen)?;
            return Ok(args);
        }
    }
}
