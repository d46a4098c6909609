//! Variables, names and the lookups chained onto them.
//!
//! ```text
//! variable        ::= '&' variable | base chain*
//! base            ::= simple_variable | T_STATIC | name
//! simple_variable ::= T_VARIABLE | '$' simple_variable | '$' '{' expr '}'
//! chain           ::= arguments | '[' expr? ']' | '{' expr '}'
//!                   | T_DOUBLE_COLON (simple_variable | identifier)
//!                   | T_OBJECT_OPERATOR (simple_variable | '{' expr '}' | identifier)
//! arguments       ::= '(' (argument (',' argument)* ','?)? ')'
//! argument        ::= T_ELLIPSIS? expr
//! ```

use php_ir::{NameResolution, Node, NodeKind, TokenKind, VariableName};
use php_stack::ensure_sufficient_stack;

use crate::classify::Category;
use crate::error::{Expected, PResult};
use crate::Parser;

impl Parser<'_> {
    /// A variable with its lookup chain. With `read_only`, `(` ends the
    /// chain instead of making a call, as after `new`.
    pub(crate) fn parse_variable(&mut self, read_only: bool) -> PResult<Node> {
        let base = match self.kind() {
            TokenKind::Amp => {
                let start = self.open();
                self.advance();
                let what = ensure_sufficient_stack(|| self.parse_variable(read_only))?;
                return Ok(self.finish(
                    start,
                    NodeKind::ByRef {
                        what: Box::new(what),
                    },
                ));
            }
            TokenKind::Variable | TokenKind::Dollar => self.parse_simple_variable()?,
            TokenKind::Static => {
                let start = self.open();
                self.advance();
                self.finish(
                    start,
                    NodeKind::Name {
                        name: "static".to_owned(),
                        resolution: NameResolution::Unqualified,
                    },
                )
            }
            TokenKind::Identifier | TokenKind::NsSeparator | TokenKind::Namespace => {
                let name = self.parse_name()?;
                if matches!(self.kind(), TokenKind::DoubleColon | TokenKind::LParen) {
                    name
                } else {
                    literal_constant(name)
                }
            }
            _ => return self.error(Expected::Category(Category::Variable)),
        };
        self.parse_chain(base, read_only)
    }

    /// `$a`, `$$a` or `${expr}`.
    pub(crate) fn parse_simple_variable(&mut self) -> PResult<Node> {
        let start = self.open();
        let name = match self.kind() {
            TokenKind::Variable => {
                let text = self.text();
                let name = text.strip_prefix('$').unwrap_or(text).to_owned();
                self.advance();
                VariableName::Named(name)
            }
            TokenKind::Dollar => {
                self.advance();
                if self.eat(TokenKind::LBrace) {
                    let expr = self.parse_expr()?;
                    self.expect_next(TokenKind::RBrace)?;
                    VariableName::Dynamic(Box::new(expr))
                } else {
                    let inner = ensure_sufficient_stack(|| self.parse_simple_variable())?;
                    VariableName::Dynamic(Box::new(inner))
                }
            }
            _ => {
                let mut error = self.error(Expected::Token(TokenKind::Variable))?;
                self.abandon(start, &mut error);
                return Ok(error);
            }
        };
        Ok(self.finish(start, NodeKind::Variable { name }))
    }

    /// Calls, offsets and member lookups applied to `node`.
    pub(crate) fn parse_chain(&mut self, mut node: Node, read_only: bool) -> PResult<Node> {
        loop {
            node = match self.kind() {
                TokenKind::LParen if !read_only => {
                    let start = self.open_at(node.loc.start);
                    let arguments = self.parse_arguments()?;
                    self.finish(
                        start,
                        NodeKind::Call {
                            what: Box::new(node),
                            arguments,
                        },
                    )
                }
                TokenKind::LBracket => {
                    let start = self.open_at(node.loc.start);
                    self.advance();
                    let offset = if self.at(TokenKind::RBracket) {
                        None
                    } else {
                        Some(Box::new(self.parse_expr()?))
                    };
                    self.expect_next(TokenKind::RBracket)?;
                    self.finish(
                        start,
                        NodeKind::OffsetLookup {
                            what: Box::new(node),
                            offset,
                        },
                    )
                }
                // legacy `$s{0}`
                TokenKind::LBrace if takes_brace_offset(&node) => {
                    let start = self.open_at(node.loc.start);
                    self.advance();
                    let offset = self.parse_expr()?;
                    self.expect_next(TokenKind::RBrace)?;
                    self.finish(
                        start,
                        NodeKind::OffsetLookup {
                            what: Box::new(node),
                            offset: Some(Box::new(offset)),
                        },
                    )
                }
                TokenKind::DoubleColon => {
                    let start = self.open_at(node.loc.start);
                    self.advance();
                    let offset = match self.kind() {
                        TokenKind::Variable | TokenKind::Dollar => self.parse_simple_variable()?,
                        _ => self.parse_reserved_identifier()?,
                    };
                    self.finish(
                        start,
                        NodeKind::StaticLookup {
                            what: Box::new(node),
                            offset: Box::new(offset),
                        },
                    )
                }
                TokenKind::ObjectOperator => {
                    let start = self.open_at(node.loc.start);
                    self.advance();
                    let offset = match self.kind() {
                        TokenKind::Variable | TokenKind::Dollar => self.parse_simple_variable()?,
                        TokenKind::LBrace => {
                            self.advance();
                            let expr = self.parse_expr()?;
                            self.expect_next(TokenKind::RBrace)?;
                            expr
                        }
                        _ => self.parse_reserved_identifier()?,
                    };
                    self.finish(
                        start,
                        NodeKind::PropertyLookup {
                            what: Box::new(node),
                            offset: Box::new(offset),
                        },
                    )
                }
                _ => return Ok(node),
            };
        }
    }

    /// `( args )` of a call or `new`.
    pub(crate) fn parse_arguments(&mut self) -> PResult<Vec<Node>> {
        if !self.expect_next(TokenKind::LParen)? {
            return Ok(Vec::new());
        }
        self.parse_delimited(TokenKind::RParen, |p| p.parse_argument())
    }

    fn parse_argument(&mut self) -> PResult<Node> {
        if !self.at(TokenKind::Ellipsis) {
            return self.parse_expr();
        }
        let start = self.open();
        self.advance();
        let what = self.parse_expr()?;
        Ok(self.finish(
            start,
            NodeKind::Variadic {
                what: Box::new(what),
            },
        ))
    }
}

fn takes_brace_offset(node: &Node) -> bool {
    matches!(
        node.kind,
        NodeKind::Variable { .. }
            | NodeKind::OffsetLookup { .. }
            | NodeKind::PropertyLookup { .. }
            | NodeKind::StaticLookup { .. }
    )
}

/// `true`, `false` and `null` written as bare names become literals.
fn literal_constant(name: Node) -> Node {
    let NodeKind::Name {
        name: raw,
        resolution: NameResolution::Unqualified,
    } = &name.kind
    else {
        return name;
    };
    let raw = raw.clone();
    let kind = match raw.to_ascii_lowercase().as_str() {
        "true" => NodeKind::Boolean { value: true, raw },
        "false" => NodeKind::Boolean { value: false, raw },
        "null" => NodeKind::Null { raw },
        _ => return name,
    };
    Node { kind, ..name }
}
