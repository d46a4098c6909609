//! `switch` statements.
//!
//! ```text
//! switch    ::= T_SWITCH '(' expr ')' case_list
//! case_list ::= '{' ';'? case* '}' | ':' ';'? case* T_ENDSWITCH ';'
//! case      ::= (T_CASE expr | T_DEFAULT) (':' | ';') inner_statement*
//! ```

use php_ir::{Node, NodeKind, TokenKind};

use crate::classify::TokenSet;
use crate::error::{Expected, PResult};
use crate::Parser;

impl Parser<'_> {
    pub(crate) fn parse_switch(&mut self) -> PResult<Node> {
        let start = self.open();
        self.advance();
        let test = self.parse_condition()?;
        let shortform = self.at(TokenKind::Colon);
        let body = self.parse_case_list()?;
        Ok(self.finish(
            start,
            NodeKind::Switch {
                test: Box::new(test),
                body: Box::new(body),
                shortform,
            },
        ))
    }

    fn parse_case_list(&mut self) -> PResult<Node> {
        let start = self.open();
        let close = match self.kind() {
            TokenKind::Colon => TokenKind::EndSwitch,
            TokenKind::LBrace => TokenKind::RBrace,
            _ => {
                self.error(Expected::OneOf(&[TokenKind::LBrace, TokenKind::Colon]))?;
                TokenKind::RBrace
            }
        };
        if matches!(self.kind(), TokenKind::Colon | TokenKind::LBrace) {
            self.advance();
        }
        self.eat(TokenKind::Semicolon);

        let mut children = Vec::new();
        while !self.stream.is_eof() && !self.at(close) {
            children.push(self.parse_case(close)?);
        }
        // comments in an empty body need a node to land on
        if children.is_empty()
            && self.options.extract_doc
            && self.trivia.has_unread(self.stream.comments())
        {
            let noop = self.open();
            children.push(self.finish(noop, NodeKind::Noop));
        }

        self.expect_next(close)?;
        if close == TokenKind::EndSwitch {
            self.expect_end_of_statement()?;
        }
        Ok(self.finish(start, NodeKind::Block { children }))
    }

    fn parse_case(&mut self, close: TokenKind) -> PResult<Node> {
        let start = self.open();
        let test = match self.kind() {
            TokenKind::Case => {
                self.advance();
                Some(Box::new(self.parse_expr()?))
            }
            TokenKind::Default => {
                self.advance();
                None
            }
            _ => {
                let error =
                    self.error(Expected::OneOf(&[TokenKind::Case, TokenKind::Default]))?;
                Some(Box::new(error))
            }
        };
        if self.expect_one_of(&[TokenKind::Colon, TokenKind::Semicolon])? {
            self.advance();
        }
        let stop = TokenSet::of(&[TokenKind::Case, TokenKind::Default]).with(close);
        let body = self.parse_inner_statements(stop)?;
        Ok(self.finish(start, NodeKind::Case { test, body }))
    }
}
