//! `if` statements.
//!
//! ```text
//! if ::= T_IF '(' expr ')' statement (T_ELSEIF '(' expr ')' statement)* (T_ELSE statement)?
//!      | T_IF '(' expr ')' ':' inner_statement*
//!        (T_ELSEIF '(' expr ')' ':' inner_statement*)*
//!        (T_ELSE ':' inner_statement*)? T_ENDIF ';'
//! ```
//!
//! `elseif` chains nest: each `elseif` is the alternate of the branch
//! before it.

use php_ir::{Node, NodeKind, TokenKind};

use crate::classify::TokenSet;
use crate::error::PResult;
use crate::Parser;

/// Tokens that end a short-form branch.
const SHORT_BRANCH_END: TokenSet =
    TokenSet::of(&[TokenKind::EndIf, TokenKind::ElseIf, TokenKind::Else]);

const END_IF: TokenSet = TokenSet::new().with(TokenKind::EndIf);

impl Parser<'_> {
    /// `if` or, for the tail of a chain, `elseif`.
    pub(crate) fn parse_if(&mut self) -> PResult<Node> {
        let start = self.open();
        self.advance();
        let test = self.parse_condition()?;

        if self.eat(TokenKind::Colon) {
            let (body, alternate) = self.parse_short_branch()?;
            self.expect_next(TokenKind::EndIf)?;
            self.expect_end_of_statement()?;
            return Ok(self.finish(
                start,
                NodeKind::If {
                    test: Box::new(test),
                    body: Box::new(body),
                    alternate,
                    shortform: true,
                },
            ));
        }

        let body = self.parse_statement()?;
        let alternate = match self.kind() {
            TokenKind::ElseIf => Some(Box::new(self.parse_if()?)),
            TokenKind::Else => {
                self.advance();
                Some(Box::new(self.parse_statement()?))
            }
            _ => None,
        };
        Ok(self.finish(
            start,
            NodeKind::If {
                test: Box::new(test),
                body: Box::new(body),
                alternate,
                shortform: false,
            },
        ))
    }

    /// `( expr )`
    pub(crate) fn parse_condition(&mut self) -> PResult<Node> {
        self.expect_next(TokenKind::LParen)?;
        let test = self.parse_expr()?;
        self.expect_next(TokenKind::RParen)?;
        Ok(test)
    }

    /// Body of a short-form branch and whatever `elseif`/`else` follows,
    /// stopping before `endif`.
    fn parse_short_branch(&mut self) -> PResult<(Node, Option<Box<Node>>)> {
        let block = self.open();
        let children = self.parse_inner_statements(SHORT_BRANCH_END)?;
        let body = self.finish(block, NodeKind::Block { children });
        let alternate = match self.kind() {
            TokenKind::ElseIf => Some(Box::new(self.parse_short_elseif()?)),
            TokenKind::Else => Some(Box::new(self.parse_short_else()?)),
            _ => None,
        };
        Ok((body, alternate))
    }

    fn parse_short_elseif(&mut self) -> PResult<Node> {
        let start = self.open();
        self.advance();
        let test = self.parse_condition()?;
        self.expect_next(TokenKind::Colon)?;
        let (body, alternate) = self.parse_short_branch()?;
        Ok(self.finish(
            start,
            NodeKind::If {
                test: Box::new(test),
                body: Box::new(body),
                alternate,
                shortform: true,
            },
        ))
    }

    fn parse_short_else(&mut self) -> PResult<Node> {
        self.advance();
        self.expect_next(TokenKind::Colon)?;
        let start = self.open();
        let children = self.parse_inner_statements(END_IF)?;
        Ok(self.finish(start, NodeKind::Block { children }))
    }
}
