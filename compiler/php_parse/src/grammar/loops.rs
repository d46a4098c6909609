//! Loops.
//!
//! ```text
//! while            ::= T_WHILE '(' expr ')' (statement | ':' inner_statement* T_ENDWHILE ';')
//! do               ::= T_DO statement T_WHILE '(' expr ')' ';'
//! for              ::= T_FOR '(' for_exprs ';' for_exprs ';' for_exprs ')' for_statement
//! for_exprs        ::= (expr (',' expr)*)?
//! foreach          ::= T_FOREACH '(' expr T_AS foreach_variable
//!                      (T_DOUBLE_ARROW foreach_variable)? ')' foreach_statement
//! foreach_variable ::= variable | '&' variable | T_LIST '(' array_pairs ')' | '[' array_pairs ']'
//! ```
//!
//! `for` and `foreach` record the positions of their header punctuation as
//! location anchors. Each anchor is taken from the previous-token boundary
//! right after the token is consumed. Its column is stepped back by the
//! token's width to the token's first character; its offset stays at the
//! boundary.

use php_ir::{Anchor, Node, NodeKind, Position, TokenKind};

use crate::error::{ErrorCode, Expected, PResult};
use crate::Parser;

/// Width of `(` and `)`.
const PAREN_WIDTH: u32 = 1;
/// Width of `;`.
const SEMICOLON_WIDTH: u32 = 1;
/// Width of `as`.
const AS_WIDTH: u32 = 2;
/// Width of `=>`.
const DOUBLE_ARROW_WIDTH: u32 = 2;

impl Parser<'_> {
    pub(crate) fn parse_while(&mut self) -> PResult<Node> {
        let start = self.open();
        self.advance();
        self.expect_next(TokenKind::LParen)?;
        let test = self.parse_expr()?;
        self.expect_next(TokenKind::RParen)?;
        let (body, shortform) = self.parse_loop_body(TokenKind::EndWhile)?;
        Ok(self.finish(
            start,
            NodeKind::While {
                test: Box::new(test),
                body: Box::new(body),
                shortform,
            },
        ))
    }

    pub(crate) fn parse_do(&mut self) -> PResult<Node> {
        let start = self.open();
        self.advance();
        let body = self.parse_statement()?;
        let test = if self.eat(TokenKind::While) {
            self.expect_next(TokenKind::LParen)?;
            let test = self.parse_expr()?;
            self.expect_next(TokenKind::RParen)?;
            self.expect_end_of_statement()?;
            test
        } else {
            self.error(Expected::Token(TokenKind::While))?
        };
        Ok(self.finish(
            start,
            NodeKind::Do {
                test: Box::new(test),
                body: Box::new(body),
            },
        ))
    }

    pub(crate) fn parse_for(&mut self) -> PResult<Node> {
        let start = self.open();
        self.advance();
        let left_paren = self.consume_anchor(TokenKind::LParen, PAREN_WIDTH)?;
        let (init, first_semicolon) = self.parse_for_clause(TokenKind::Semicolon, SEMICOLON_WIDTH)?;
        let (test, second_semicolon) =
            self.parse_for_clause(TokenKind::Semicolon, SEMICOLON_WIDTH)?;
        let (increment, right_paren) = self.parse_for_clause(TokenKind::RParen, PAREN_WIDTH)?;
        let (body, shortform) = self.parse_loop_body(TokenKind::EndFor)?;

        let mut node = self.finish(
            start,
            NodeKind::For {
                init,
                test,
                increment,
                body: Box::new(body),
                shortform,
            },
        );
        set_anchors(
            &mut node,
            [
                (Anchor::LeftParen, left_paren),
                (Anchor::FirstSemicolon, first_semicolon),
                (Anchor::SecondSemicolon, second_semicolon),
                (Anchor::RightParen, right_paren),
            ],
        );
        Ok(node)
    }

    /// Optional expressions, then `close`.
    fn parse_for_clause(
        &mut self,
        close: TokenKind,
        width: u32,
    ) -> PResult<(Vec<Node>, Option<Position>)> {
        let exprs = if self.at(close) {
            Vec::new()
        } else {
            self.parse_separated(|p| p.parse_expr())?
        };
        let anchor = self.consume_anchor(close, width)?;
        Ok((exprs, anchor))
    }

    pub(crate) fn parse_foreach(&mut self) -> PResult<Node> {
        let start = self.open();
        self.advance();
        let left_paren = self.consume_anchor(TokenKind::LParen, PAREN_WIDTH)?;
        let source = self.parse_expr()?;

        let mut key = None;
        let mut as_keyword = None;
        let mut arrow = None;
        let value = if self.eat(TokenKind::As) {
            as_keyword = Some(self.stream.prev().back(AS_WIDTH));
            let first = self.parse_foreach_variable()?;
            if self.eat(TokenKind::DoubleArrow) {
                arrow = Some(self.stream.prev().back(DOUBLE_ARROW_WIDTH));
                key = Some(Box::new(first));
                self.parse_foreach_variable()?
            } else {
                first
            }
        } else {
            self.error(Expected::Token(TokenKind::As))?
        };

        // accepted by the token grammar, rejected by the language
        if matches!(
            key.as_deref(),
            Some(Node {
                kind: NodeKind::List { .. },
                ..
            })
        ) {
            return self.fatal(
                ErrorCode::E1100,
                "Fatal Error : Cannot use list as key element",
            );
        }

        let right_paren = self.consume_anchor(TokenKind::RParen, PAREN_WIDTH)?;
        let (body, shortform) = self.parse_loop_body(TokenKind::EndForeach)?;

        let mut node = self.finish(
            start,
            NodeKind::Foreach {
                source: Box::new(source),
                key,
                value: Box::new(value),
                body: Box::new(body),
                shortform,
            },
        );
        set_anchors(
            &mut node,
            [
                (Anchor::LeftParen, left_paren),
                (Anchor::As, as_keyword),
                (Anchor::Arrow, arrow),
                (Anchor::RightParen, right_paren),
            ],
        );
        Ok(node)
    }

    fn parse_foreach_variable(&mut self) -> PResult<Node> {
        match self.kind() {
            TokenKind::List | TokenKind::LBracket => self.parse_list_pattern(),
            _ => self.parse_variable(false),
        }
    }

    /// A statement, or a short form closed by `end` when a `:` follows.
    fn parse_loop_body(&mut self, end: TokenKind) -> PResult<(Node, bool)> {
        if self.at(TokenKind::Colon) {
            Ok((self.parse_short_form(end)?, true))
        } else {
            Ok((self.parse_statement()?, false))
        }
    }

    /// Consume `kind` and return its start, or `None` if it is missing.
    fn consume_anchor(&mut self, kind: TokenKind, width: u32) -> PResult<Option<Position>> {
        let found = self.expect_next(kind)?;
        Ok(found.then(|| self.stream.prev().back(width)))
    }
}

fn set_anchors<const N: usize>(node: &mut Node, anchors: [(Anchor, Option<Position>); N]) {
    for (anchor, pos) in anchors {
        if let Some(pos) = pos {
            node.loc.set_anchor(anchor, pos);
        }
    }
}
