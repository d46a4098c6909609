//! Expressions.
//!
//! Binary operators are parsed by precedence climbing over [`infix`]; every
//! prefix form goes through [`Parser::parse_unary`].
//!
//! Precedence, loosest first:
//!
//! ```text
//! or  xor  and  ?:  ??  ||  &&  |  ^  &  == != === !== <=>
//! < <= > >=  << >>  + - .  * / %  instanceof  !  ** (right)
//! ```
//!
//! Assignment is not an infix operator here: it is recognized right after a
//! variable, so `$a = $b + 1` nests as `$a = ($b + 1)`.

use php_ir::{
    AssignOp, BinaryOp, CastType, EncapsedKind, Node, NodeKind, TokenKind, UnaryOp, UpdateOp,
};
use php_stack::ensure_sufficient_stack;

use crate::classify::{Category, SYNC};
use crate::error::{Expected, PResult};
use crate::Parser;

/// Binding power of `print`, `include`, `yield` operands.
const LOW_PREC: u8 = 5;
/// Operand of `!`: binds `instanceof` and tighter.
const NOT_PREC: u8 = 17;
/// Operand of casts, `@` and the sign operators.
const PREFIX_PREC: u8 = 18;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Infix {
    Binary(BinaryOp),
    Ternary,
    Coalesce,
}

/// Operator, precedence and right-associativity of an infix token.
fn infix(kind: TokenKind) -> Option<(Infix, u8, bool)> {
    let prec = match kind {
        TokenKind::LogicalOr => 1,
        TokenKind::LogicalXor => 2,
        TokenKind::LogicalAnd => 3,
        TokenKind::Question => return Some((Infix::Ternary, 5, false)),
        TokenKind::Coalesce => return Some((Infix::Coalesce, 6, true)),
        TokenKind::BooleanOr => 7,
        TokenKind::BooleanAnd => 8,
        TokenKind::Pipe => 9,
        TokenKind::Caret => 10,
        TokenKind::Amp => 11,
        TokenKind::IsEqual
        | TokenKind::IsNotEqual
        | TokenKind::IsIdentical
        | TokenKind::IsNotIdentical
        | TokenKind::Spaceship => 12,
        TokenKind::Less
        | TokenKind::IsSmallerOrEqual
        | TokenKind::Greater
        | TokenKind::IsGreaterOrEqual => 13,
        TokenKind::ShiftLeft | TokenKind::ShiftRight => 14,
        TokenKind::Plus | TokenKind::Minus | TokenKind::Dot => 15,
        TokenKind::Star | TokenKind::Slash | TokenKind::Percent => 16,
        TokenKind::InstanceOf => 17,
        TokenKind::Pow => return Some((Infix::Binary(BinaryOp::Pow), 18, true)),
        _ => return None,
    };
    BinaryOp::from_token(kind).map(|op| (Infix::Binary(op), prec, false))
}

impl Parser<'_> {
    pub(crate) fn parse_expr(&mut self) -> PResult<Node> {
        ensure_sufficient_stack(|| self.parse_binary(0))
    }

    /// Operators binding at least as tight as `min`.
    ///
    /// Prefix operators and right operands re-enter here once per nesting
    /// level, so the operand is parsed under the stack guard.
    fn parse_binary(&mut self, min: u8) -> PResult<Node> {
        let mut left = ensure_sufficient_stack(|| self.parse_unary())?;
        while let Some((op, prec, right_assoc)) = infix(self.kind()) {
            if prec < min {
                break;
            }
            let next = if right_assoc { prec } else { prec + 1 };
            let start = self.open_at(left.loc.start);
            let kind = match op {
                Infix::Binary(op) => {
                    if op == BinaryOp::Spaceship && !self.options.php7 {
                        self.unsupported()?;
                    }
                    self.advance();
                    let right = self.parse_binary(next)?;
                    NodeKind::Bin {
                        op,
                        left: Box::new(left),
                        right: Box::new(right),
                    }
                }
                Infix::Coalesce => {
                    if !self.options.php7 {
                        self.unsupported()?;
                    }
                    self.advance();
                    let ifnull = self.parse_binary(next)?;
                    NodeKind::Coalesce {
                        test: Box::new(left),
                        ifnull: Box::new(ifnull),
                    }
                }
                Infix::Ternary => {
                    self.advance();
                    let true_expr = if self.eat(TokenKind::Colon) {
                        None
                    } else {
                        let true_expr = self.parse_expr()?;
                        self.expect_next(TokenKind::Colon)?;
                        Some(Box::new(true_expr))
                    };
                    let false_expr = self.parse_binary(next)?;
                    NodeKind::Ternary {
                        test: Box::new(left),
                        true_expr,
                        false_expr: Box::new(false_expr),
                    }
                }
            };
            left = self.finish(start, kind);
        }
        Ok(left)
    }

    /// Prefix operators and keyword expressions taking one operand.
    fn parse_unary(&mut self) -> PResult<Node> {
        let kind = self.kind();
        if let Some(op) = UnaryOp::from_token(kind) {
            let start = self.open();
            self.advance();
            let prec = if op == UnaryOp::Not {
                NOT_PREC
            } else {
                PREFIX_PREC
            };
            let what = self.parse_binary(prec)?;
            return Ok(self.finish(
                start,
                NodeKind::Unary {
                    op,
                    what: Box::new(what),
                },
            ));
        }
        if let Some(cast) = CastType::from_token(kind) {
            let start = self.open();
            let raw = self.text().to_owned();
            self.advance();
            let what = self.parse_binary(PREFIX_PREC)?;
            return Ok(self.finish(
                start,
                NodeKind::Cast {
                    kind: cast,
                    raw,
                    what: Box::new(what),
                },
            ));
        }

        match kind {
            TokenKind::At => {
                let start = self.open();
                self.advance();
                let expr = self.parse_binary(PREFIX_PREC)?;
                Ok(self.finish(
                    start,
                    NodeKind::Silent {
                        expr: Box::new(expr),
                    },
                ))
            }
            TokenKind::Clone => {
                let start = self.open();
                self.advance();
                let what = ensure_sufficient_stack(|| self.parse_unary())?;
                Ok(self.finish(
                    start,
                    NodeKind::Clone {
                        what: Box::new(what),
                    },
                ))
            }
            TokenKind::Print => {
                let start = self.open();
                self.advance();
                let expression = self.parse_binary(LOW_PREC)?;
                Ok(self.finish(
                    start,
                    NodeKind::Print {
                        expression: Box::new(expression),
                    },
                ))
            }
            TokenKind::Include
            | TokenKind::IncludeOnce
            | TokenKind::Require
            | TokenKind::RequireOnce => {
                let start = self.open();
                let once = matches!(kind, TokenKind::IncludeOnce | TokenKind::RequireOnce);
                let require = matches!(kind, TokenKind::Require | TokenKind::RequireOnce);
                self.advance();
                let target = self.parse_binary(LOW_PREC)?;
                Ok(self.finish(
                    start,
                    NodeKind::Include {
                        target: Box::new(target),
                        once,
                        require,
                    },
                ))
            }
            TokenKind::Yield => self.parse_yield(),
            TokenKind::YieldFrom => {
                let start = self.open();
                self.advance();
                let value = self.parse_binary(LOW_PREC)?;
                Ok(self.finish(
                    start,
                    NodeKind::YieldFrom {
                        value: Box::new(value),
                    },
                ))
            }
            _ => self.parse_item(),
        }
    }

    /// `yield`, `yield value` or `yield key => value`.
    fn parse_yield(&mut self) -> PResult<Node> {
        let start = self.open();
        self.advance();
        if SYNC.contains(self.kind()) {
            return Ok(self.finish(
                start,
                NodeKind::Yield {
                    key: None,
                    value: None,
                },
            ));
        }
        let first = self.parse_binary(LOW_PREC)?;
        let (key, value) = if self.eat(TokenKind::DoubleArrow) {
            let value = self.parse_binary(LOW_PREC)?;
            (Some(Box::new(first)), value)
        } else {
            (None, first)
        };
        Ok(self.finish(
            start,
            NodeKind::Yield {
                key,
                value: Some(Box::new(value)),
            },
        ))
    }

    /// An operand: literals, variables and the keyword forms.
    fn parse_item(&mut self) -> PResult<Node> {
        match self.kind() {
            TokenKind::LParen => {
                let start = self.open();
                self.advance();
                let inner = self.parse_expr()?;
                self.expect_next(TokenKind::RParen)?;
                let node = self.finish(
                    start,
                    NodeKind::Parenthesis {
                        inner: Box::new(inner),
                    },
                );
                self.parse_chain(node, false)
            }
            TokenKind::ShellCommand => {
                let start = self.open();
                let raw = self.text().to_owned();
                self.advance();
                Ok(self.finish(
                    start,
                    NodeKind::Encapsed {
                        raw,
                        kind: EncapsedKind::Shell,
                    },
                ))
            }
            TokenKind::List => {
                let list = self.parse_list_pattern()?;
                self.parse_destructuring(list)
            }
            TokenKind::Inc | TokenKind::Dec => {
                let start = self.open();
                let op = update_op(self.kind());
                self.advance();
                let what = self.parse_variable(false)?;
                Ok(self.finish(
                    start,
                    NodeKind::Pre {
                        op,
                        what: Box::new(what),
                    },
                ))
            }
            TokenKind::New => self.parse_new(),
            TokenKind::Isset => {
                let start = self.open();
                self.advance();
                let variables = if self.expect_next(TokenKind::LParen)? {
                    self.parse_delimited(TokenKind::RParen, |p| p.parse_variable(false))?
                } else {
                    Vec::new()
                };
                Ok(self.finish(start, NodeKind::Isset { variables }))
            }
            TokenKind::Empty => {
                let start = self.open();
                self.advance();
                let expression = self.parse_parenthesized()?;
                Ok(self.finish(
                    start,
                    NodeKind::Empty {
                        expression: Box::new(expression),
                    },
                ))
            }
            TokenKind::Eval => {
                let start = self.open();
                self.advance();
                let source = self.parse_parenthesized()?;
                Ok(self.finish(
                    start,
                    NodeKind::Eval {
                        source: Box::new(source),
                    },
                ))
            }
            TokenKind::Exit => self.parse_exit(),
            TokenKind::Function => {
                let start = self.open();
                self.parse_closure(start, false)
            }
            TokenKind::Fn => {
                let start = self.open();
                self.parse_arrow_function(start, false)
            }
            TokenKind::Static if matches!(self.peek(), TokenKind::Function | TokenKind::Fn) => {
                let start = self.open();
                self.advance();
                if self.at(TokenKind::Function) {
                    self.parse_closure(start, true)
                } else {
                    self.parse_arrow_function(start, true)
                }
            }
            _ if self.is(Category::Variable) => {
                let variable = self.parse_variable(false)?;
                if let Some(op) = AssignOp::from_token(self.kind()) {
                    return self.parse_assignment(variable, op);
                }
                if matches!(self.kind(), TokenKind::Inc | TokenKind::Dec) {
                    let start = self.open_at(variable.loc.start);
                    let op = update_op(self.kind());
                    self.advance();
                    return Ok(self.finish(
                        start,
                        NodeKind::Post {
                            op,
                            what: Box::new(variable),
                        },
                    ));
                }
                Ok(variable)
            }
            _ if self.is(Category::Scalar) => {
                let short_array = self.at(TokenKind::LBracket);
                let scalar = self.parse_scalar()?;
                if short_array && self.at(TokenKind::Equal) {
                    return self.parse_assignment(into_list(scalar), AssignOp::Assign);
                }
                if matches!(
                    scalar.kind,
                    NodeKind::Array { .. } | NodeKind::String { .. }
                ) {
                    return self.parse_chain(scalar, false);
                }
                Ok(scalar)
            }
            _ => {
                let error = self.error(Expected::Category(Category::Expr))?;
                if !SYNC.contains(self.kind()) {
                    self.advance();
                }
                Ok(error)
            }
        }
    }

    /// `( expr )` after `empty` and `eval`.
    fn parse_parenthesized(&mut self) -> PResult<Node> {
        self.expect_next(TokenKind::LParen)?;
        let expr = self.parse_expr()?;
        self.expect_next(TokenKind::RParen)?;
        Ok(expr)
    }

    /// `exit`, `exit(status)`, `die(...)`.
    fn parse_exit(&mut self) -> PResult<Node> {
        let start = self.open();
        let use_die = self
            .text()
            .get(..3)
            .is_some_and(|head| head.eq_ignore_ascii_case("die"));
        self.advance();
        let status = if self.eat(TokenKind::LParen) {
            let status = if self.at(TokenKind::RParen) {
                None
            } else {
                Some(Box::new(self.parse_expr()?))
            };
            self.expect_next(TokenKind::RParen)?;
            status
        } else {
            None
        };
        Ok(self.finish(start, NodeKind::Exit { status, use_die }))
    }

    /// `new Foo(args)`, `new $class`, `new static`, `new class { ... }`.
    fn parse_new(&mut self) -> PResult<Node> {
        let start = self.open();
        self.advance();
        if self.at(TokenKind::Class) {
            let (class, arguments) = self.parse_anonymous_class()?;
            return Ok(self.finish(
                start,
                NodeKind::New {
                    what: Box::new(class),
                    arguments,
                },
            ));
        }
        let what = match self.kind() {
            TokenKind::Variable | TokenKind::Dollar | TokenKind::Static => {
                self.parse_variable(true)?
            }
            TokenKind::Identifier | TokenKind::NsSeparator | TokenKind::Namespace => {
                self.parse_name()?
            }
            _ => self.error(Expected::OneOf(&[
                TokenKind::Class,
                TokenKind::Identifier,
                TokenKind::Variable,
            ]))?,
        };
        let arguments = if self.at(TokenKind::LParen) {
            self.parse_arguments()?
        } else {
            Vec::new()
        };
        Ok(self.finish(
            start,
            NodeKind::New {
                what: Box::new(what),
                arguments,
            },
        ))
    }

    /// `list(...)` must be assigned to.
    fn parse_destructuring(&mut self, list: Node) -> PResult<Node> {
        if self.at(TokenKind::Equal) {
            return self.parse_assignment(list, AssignOp::Assign);
        }
        let start = self.open_at(list.loc.start);
        let right = self.error(Expected::Token(TokenKind::Equal))?;
        Ok(self.finish(
            start,
            NodeKind::Assign {
                op: AssignOp::Assign,
                left: Box::new(list),
                right: Box::new(right),
            },
        ))
    }

    /// `left op right` with the current token being `op`.
    fn parse_assignment(&mut self, left: Node, op: AssignOp) -> PResult<Node> {
        let start = self.open_at(left.loc.start);
        if matches!(
            left.kind,
            NodeKind::Name { .. } | NodeKind::Boolean { .. } | NodeKind::Null { .. }
        ) {
            self.error(Expected::Category(Category::Variable))?;
        }
        if op == AssignOp::Coalesce && !self.options.php74 {
            self.unsupported()?;
        }
        self.advance();
        // `=&` binds a reference
        let right = if op == AssignOp::Assign && self.at(TokenKind::Amp) {
            self.parse_variable(false)?
        } else {
            self.parse_expr()?
        };
        Ok(self.finish(
            start,
            NodeKind::Assign {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
        ))
    }
}

fn update_op(kind: TokenKind) -> UpdateOp {
    if kind == TokenKind::Inc {
        UpdateOp::Increment
    } else {
        UpdateOp::Decrement
    }
}

/// Reinterpret a short array literal as a destructuring target, nested
/// short arrays included.
fn into_list(node: Node) -> Node {
    let kind = match node.kind {
        NodeKind::Array {
            items,
            shortform: true,
        } => NodeKind::List {
            items: items.into_iter().map(into_list).collect(),
            shortform: true,
        },
        NodeKind::Entry { key, value, unpack } => NodeKind::Entry {
            key,
            value: Box::new(into_list(*value)),
            unpack,
        },
        other => other,
    };
    Node { kind, ..node }
}
