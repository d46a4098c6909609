//! Array literals and destructuring lists.
//!
//! ```text
//! array ::= T_ARRAY '(' pairs ')' | '[' pairs ']'
//! list  ::= T_LIST '(' pairs ')' | '[' pairs ']'
//! pairs ::= (pair? ',')* pair?
//! pair  ::= T_ELLIPSIS expr | (value T_DOUBLE_ARROW)? value
//! value ::= '&' variable | list | expr
//! ```

use php_ir::{Node, NodeKind, TokenKind};

use crate::error::PResult;
use crate::Parser;

impl Parser<'_> {
    /// `array(...)` or `[...]`.
    pub(crate) fn parse_array(&mut self) -> PResult<Node> {
        let start = self.open();
        let shortform = self.at(TokenKind::LBracket);
        let close = self.open_pairs(shortform)?;
        let items = self.parse_array_pairs(close, false)?;
        Ok(self.finish(start, NodeKind::Array { items, shortform }))
    }

    /// `list(...)` or `[...]` as an assignment target.
    pub(crate) fn parse_list_pattern(&mut self) -> PResult<Node> {
        let start = self.open();
        let shortform = self.at(TokenKind::LBracket);
        let close = self.open_pairs(shortform)?;
        let items = self.parse_array_pairs(close, true)?;
        Ok(self.finish(start, NodeKind::List { items, shortform }))
    }

    /// Consume the opening of a pair list, returning its closing token.
    fn open_pairs(&mut self, shortform: bool) -> PResult<TokenKind> {
        self.advance();
        if shortform {
            return Ok(TokenKind::RBracket);
        }
        self.expect_next(TokenKind::LParen)?;
        Ok(TokenKind::RParen)
    }

    /// Entries up to `close`, which is consumed. Patterns may skip
    /// positions: `list(, $b)`.
    fn parse_array_pairs(&mut self, close: TokenKind, pattern: bool) -> PResult<Vec<Node>> {
        let mut items = Vec::new();
        while !self.at(close) && !self.stream.is_eof() {
            if pattern && self.at(TokenKind::Comma) {
                let skipped = self.open();
                items.push(self.finish(skipped, NodeKind::Noop));
                self.advance();
                continue;
            }
            items.push(self.parse_array_entry(pattern)?);
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect_next(close)?;
        Ok(items)
    }

    fn parse_array_entry(&mut self, pattern: bool) -> PResult<Node> {
        let start = self.open();
        if self.at(TokenKind::Ellipsis) {
            if !self.options.php74 {
                self.unsupported()?;
            }
            self.advance();
            let value = self.parse_expr()?;
            return Ok(self.finish(
                start,
                NodeKind::Entry {
                    key: None,
                    value: Box::new(value),
                    unpack: true,
                },
            ));
        }

        let first = self.parse_entry_value(pattern)?;
        let (key, value) = if self.eat(TokenKind::DoubleArrow) {
            (Some(Box::new(first)), self.parse_entry_value(pattern)?)
        } else {
            (None, first)
        };
        Ok(self.finish(
            start,
            NodeKind::Entry {
                key,
                value: Box::new(value),
                unpack: false,
            },
        ))
    }

    fn parse_entry_value(&mut self, pattern: bool) -> PResult<Node> {
        match self.kind() {
            TokenKind::Amp => self.parse_variable(false),
            TokenKind::List | TokenKind::LBracket if pattern => self.parse_list_pattern(),
            _ => self.parse_expr(),
        }
    }
}
