//! `try` statements.
//!
//! ```text
//! try   ::= T_TRY '{' inner_statement* '}' catch* (T_FINALLY '{' inner_statement* '}')?
//! catch ::= T_CATCH '(' name ('|' name)* T_VARIABLE ')' '{' inner_statement* '}'
//! ```

use php_ir::{Node, NodeKind, TokenKind};

use crate::error::PResult;
use crate::Parser;

impl Parser<'_> {
    pub(crate) fn parse_try(&mut self) -> PResult<Node> {
        let start = self.open();
        self.advance();
        let body = self.parse_code_block()?;
        let mut catches = Vec::new();
        while self.at(TokenKind::Catch) {
            catches.push(self.parse_catch()?);
        }
        let always = if self.eat(TokenKind::Finally) {
            Some(Box::new(self.parse_code_block()?))
        } else {
            None
        };
        Ok(self.finish(
            start,
            NodeKind::Try {
                body: Box::new(body),
                catches,
                always,
            },
        ))
    }

    fn parse_catch(&mut self) -> PResult<Node> {
        let start = self.open();
        self.advance();
        self.expect_next(TokenKind::LParen)?;
        let mut types = vec![self.parse_name()?];
        while self.eat(TokenKind::Pipe) {
            types.push(self.parse_name()?);
        }
        let variable = self.parse_simple_variable()?;
        self.expect_next(TokenKind::RParen)?;
        let body = self.parse_code_block()?;
        Ok(self.finish(
            start,
            NodeKind::Catch {
                types,
                variable: Box::new(variable),
                body: Box::new(body),
            },
        ))
    }
}
