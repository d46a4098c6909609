//! Top-level statements.
//!
//! ```text
//! start         ::= namespace | top_statement
//! namespace     ::= T_NAMESPACE name? '{' top_statement* '}'
//!                 | T_NAMESPACE name ';' top_statement*
//! top_statement ::= use | const | T_HALT_COMPILER '(' ')' ';' | inner_statement
//! use           ::= T_USE use_type? use_item (',' use_item)* ';'
//!                 | T_USE use_type? name '\' '{' use_item (',' use_item)* ','? '}' ';'
//! ```

use php_ir::{Node, NodeKind, TokenKind, UseKind};

use super::CLOSE_BRACE;
use crate::builder::NodeStart;
use crate::error::{ErrorCode, Expected, PResult};
use crate::Parser;

impl Parser<'_> {
    /// One production of the program body.
    pub(crate) fn parse_start(&mut self) -> PResult<Node> {
        if self.at_namespace_declaration() {
            self.parse_namespace()
        } else {
            self.parse_top_statement()
        }
    }

    pub(crate) fn parse_top_statement(&mut self) -> PResult<Node> {
        match self.kind() {
            TokenKind::Namespace if self.peek() != TokenKind::NsSeparator => {
                self.parse_namespace()
            }
            TokenKind::Use => self.parse_use_statement(),
            TokenKind::Const => self.parse_constant_statement(),
            TokenKind::HaltCompiler => self.parse_halt_compiler(true),
            _ => self.parse_inner_statement(),
        }
    }

    /// `namespace` that starts a declaration rather than a relative name.
    fn at_namespace_declaration(&mut self) -> bool {
        self.at(TokenKind::Namespace) && self.peek() != TokenKind::NsSeparator
    }

    fn parse_namespace(&mut self) -> PResult<Node> {
        let start = self.open();
        if !self.namespaces.is_empty() {
            self.report(
                ErrorCode::E1004,
                "Parse Error : Namespace declarations cannot be nested",
            )?;
        }
        self.advance();
        let name = if self.at(TokenKind::Identifier) {
            Some(Box::new(self.parse_name()?))
        } else {
            None
        };
        let label = match name.as_deref() {
            Some(Node {
                kind: NodeKind::Name { name, .. },
                ..
            }) => name.clone(),
            _ => String::new(),
        };

        self.namespaces.push(label);
        let body = self.parse_namespace_body(name.is_none());
        self.namespaces.pop();
        let (children, with_braces) = body?;

        Ok(self.finish(
            start,
            NodeKind::Namespace {
                name,
                children,
                with_braces,
            },
        ))
    }

    /// Returns the children and whether they were braced.
    fn parse_namespace_body(&mut self, anonymous: bool) -> PResult<(Vec<Node>, bool)> {
        if self.eat(TokenKind::LBrace) {
            let children = self.parse_top_statements(CLOSE_BRACE)?;
            self.expect_next(TokenKind::RBrace)?;
            return Ok((children, true));
        }
        if anonymous {
            self.error(Expected::Token(TokenKind::LBrace))?;
            return Ok((Vec::new(), false));
        }

        // `namespace A;` runs until the next declaration
        self.expect_end_of_statement()?;
        let mut children = Vec::new();
        while !self.stream.is_eof() && !self.at_namespace_declaration() {
            let before = self.stream.start();
            children.push(self.parse_top_statement()?);
            self.force_progress(before);
        }
        Ok((children, false))
    }

    fn parse_use_statement(&mut self) -> PResult<Node> {
        let start = self.open();
        self.advance();
        let declared = self.parse_use_kind();
        let kind = declared.unwrap_or_default();

        let item = self.open();
        let mut name = self.parse_name()?;
        let (prefix, items) =
            if self.at(TokenKind::NsSeparator) && self.peek() == TokenKind::LBrace {
                self.abandon(item, &mut name);
                if !self.options.php7 {
                    self.unsupported()?;
                }
                self.advance();
                self.advance();
                let items = self.parse_delimited(TokenKind::RBrace, |p| {
                    p.parse_use_item(kind, declared.is_none())
                })?;
                (Some(Box::new(name)), items)
            } else {
                let mut items = vec![self.finish_use_item(item, name, kind)?];
                while self.eat(TokenKind::Comma) {
                    items.push(self.parse_use_item(kind, false)?);
                }
                (None, items)
            };
        self.expect_end_of_statement()?;

        Ok(self.finish(
            start,
            NodeKind::UseGroup {
                prefix,
                kind,
                items,
            },
        ))
    }

    /// `function` or `const` after `use`, or inside a mixed group.
    fn parse_use_kind(&mut self) -> Option<UseKind> {
        let kind = match self.kind() {
            TokenKind::Function => UseKind::Function,
            TokenKind::Const => UseKind::Const,
            _ => return None,
        };
        self.advance();
        Some(kind)
    }

    /// `name (as alias)?`, with its own kind when `mixed`.
    fn parse_use_item(&mut self, kind: UseKind, mixed: bool) -> PResult<Node> {
        let start = self.open();
        let kind = if mixed {
            self.parse_use_kind().unwrap_or(kind)
        } else {
            kind
        };
        let name = self.parse_name()?;
        self.finish_use_item(start, name, kind)
    }

    fn finish_use_item(&mut self, start: NodeStart, name: Node, kind: UseKind) -> PResult<Node> {
        let alias = if self.eat(TokenKind::As) {
            Some(Box::new(self.parse_identifier()?))
        } else {
            None
        };
        Ok(self.finish(
            start,
            NodeKind::UseItem {
                name: Box::new(name),
                alias,
                kind,
            },
        ))
    }

    fn parse_constant_statement(&mut self) -> PResult<Node> {
        let start = self.open();
        self.advance();
        let constants = self.parse_separated(|p| p.parse_constant(false))?;
        self.expect_end_of_statement()?;
        Ok(self.finish(start, NodeKind::ConstantStatement { constants }))
    }

    /// `NAME = expr`. Class constants accept reserved words as names.
    pub(crate) fn parse_constant(&mut self, reserved: bool) -> PResult<Node> {
        let start = self.open();
        let name = if reserved {
            self.parse_reserved_identifier()?
        } else {
            self.parse_identifier()?
        };
        self.expect_next(TokenKind::Equal)?;
        let value = self.parse_expr()?;
        Ok(self.finish(
            start,
            NodeKind::Constant {
                name: Box::new(name),
                value: Box::new(value),
            },
        ))
    }

    /// `__halt_compiler();`
    ///
    /// At the outermost scope scanning stops after the terminator and the
    /// rest of the input is kept raw. Anywhere else it is an error and
    /// parsing goes on.
    pub(crate) fn parse_halt_compiler(&mut self, outermost: bool) -> PResult<Node> {
        if !outermost {
            self.report(
                ErrorCode::E1001,
                "Parse Error : __HALT_COMPILER() can only be used from the outermost scope",
            )?;
        }
        let start = self.open();
        self.advance();
        self.expect_next(TokenKind::LParen)?;
        self.expect_next(TokenKind::RParen)?;

        let after = if outermost {
            self.expect(TokenKind::Semicolon)?;
            self.stream.halt().to_owned()
        } else {
            self.expect_end_of_statement()?;
            String::new()
        };
        Ok(self.finish(start, NodeKind::HaltCompiler { after }))
    }
}
