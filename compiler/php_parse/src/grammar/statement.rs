//! Inner statements.
//!
//! ```text
//! inner_statement ::= function | class | interface | trait | statement
//! statement       ::= '{' inner_statement* '}' | if | while | do | for | foreach
//!                   | switch | break | continue | return | global | static
//!                   | echo | T_INLINE_HTML | unset | declare | try | throw
//!                   | goto | label | ';' | expr ';'
//! ```

use php_ir::{DeclareMode, Node, NodeKind, TokenKind};
use php_stack::ensure_sufficient_stack;

use crate::classify::{Category, TokenSet};
use crate::error::PResult;
use crate::Parser;

/// Where a `declare(...);` without a body stops applying.
const DECLARE_SCOPE_END: TokenSet = TokenSet::of(&[
    TokenKind::Declare,
    TokenKind::Namespace,
    TokenKind::RBrace,
]);

const END_DECLARE: TokenSet = TokenSet::new().with(TokenKind::EndDeclare);

impl Parser<'_> {
    /// A statement, or a function, class, interface or trait declaration.
    pub(crate) fn parse_inner_statement(&mut self) -> PResult<Node> {
        match self.kind() {
            TokenKind::Function if self.peek() != TokenKind::LParen => {
                self.parse_function_declaration()
            }
            TokenKind::Abstract | TokenKind::Final | TokenKind::Class => {
                self.parse_class_declaration()
            }
            TokenKind::Interface => self.parse_interface(),
            TokenKind::Trait => self.parse_trait(),
            TokenKind::HaltCompiler => self.parse_halt_compiler(false),
            _ => self.parse_statement(),
        }
    }

    pub(crate) fn parse_statement(&mut self) -> PResult<Node> {
        ensure_sufficient_stack(|| self.parse_statement_inner())
    }

    fn parse_statement_inner(&mut self) -> PResult<Node> {
        match self.kind() {
            TokenKind::LBrace => self.parse_code_block(),
            TokenKind::If => self.parse_if(),
            TokenKind::Switch => self.parse_switch(),
            TokenKind::For => self.parse_for(),
            TokenKind::Foreach => self.parse_foreach(),
            TokenKind::While => self.parse_while(),
            TokenKind::Do => self.parse_do(),
            TokenKind::Break | TokenKind::Continue => self.parse_jump(),
            TokenKind::Return => self.parse_return(),
            TokenKind::Global => self.parse_global(),
            TokenKind::Static
                if !matches!(
                    self.peek(),
                    TokenKind::DoubleColon | TokenKind::Function | TokenKind::Fn
                ) =>
            {
                self.parse_static_statement()
            }
            TokenKind::Echo => self.parse_echo(),
            TokenKind::InlineHtml => self.parse_inline(),
            TokenKind::Unset => self.parse_unset(),
            TokenKind::Declare => self.parse_declare(),
            TokenKind::Try => self.parse_try(),
            TokenKind::Throw => self.parse_throw(),
            TokenKind::Goto => self.parse_goto(),
            TokenKind::Identifier if self.peek() == TokenKind::Colon => self.parse_label(),
            TokenKind::Semicolon => {
                let start = self.open();
                self.advance();
                Ok(self.finish(start, NodeKind::Noop))
            }
            _ => self.parse_expression_statement(),
        }
    }

    fn parse_expression_statement(&mut self) -> PResult<Node> {
        let start = self.open();
        let expression = self.parse_expr()?;
        self.expect_end_of_statement()?;
        Ok(self.finish(
            start,
            NodeKind::ExpressionStatement {
                expression: Box::new(expression),
            },
        ))
    }

    /// `break` / `continue` with an optional level.
    fn parse_jump(&mut self) -> PResult<Node> {
        let start = self.open();
        let is_break = self.at(TokenKind::Break);
        self.advance();
        let level = self.parse_optional_expr()?;
        self.expect_end_of_statement()?;
        let kind = if is_break {
            NodeKind::Break { level }
        } else {
            NodeKind::Continue { level }
        };
        Ok(self.finish(start, kind))
    }

    fn parse_return(&mut self) -> PResult<Node> {
        let start = self.open();
        self.advance();
        let expression = self.parse_optional_expr()?;
        self.expect_end_of_statement()?;
        Ok(self.finish(start, NodeKind::Return { expression }))
    }

    /// An expression, unless the statement ends here.
    fn parse_optional_expr(&mut self) -> PResult<Option<Box<Node>>> {
        if self.is(Category::Eos) {
            return Ok(None);
        }
        Ok(Some(Box::new(self.parse_expr()?)))
    }

    fn parse_global(&mut self) -> PResult<Node> {
        let start = self.open();
        self.advance();
        let items = self.parse_separated(|p| p.parse_simple_variable())?;
        self.expect_end_of_statement()?;
        Ok(self.finish(start, NodeKind::Global { items }))
    }

    /// `static $a = 1, $b;`
    fn parse_static_statement(&mut self) -> PResult<Node> {
        let start = self.open();
        self.advance();
        let variables = self.parse_separated(|p| {
            let start = p.open();
            let variable = p.parse_simple_variable()?;
            let default = if p.eat(TokenKind::Equal) {
                Some(Box::new(p.parse_expr()?))
            } else {
                None
            };
            Ok(p.finish(
                start,
                NodeKind::StaticVariable {
                    variable: Box::new(variable),
                    default,
                },
            ))
        })?;
        self.expect_end_of_statement()?;
        Ok(self.finish(start, NodeKind::Static { variables }))
    }

    fn parse_echo(&mut self) -> PResult<Node> {
        let start = self.open();
        let shortform = self.text().starts_with("<?=");
        self.advance();
        let expressions = self.parse_separated(|p| p.parse_expr())?;
        self.expect_end_of_statement()?;
        Ok(self.finish(
            start,
            NodeKind::Echo {
                expressions,
                shortform,
            },
        ))
    }

    fn parse_inline(&mut self) -> PResult<Node> {
        let start = self.open();
        let raw = self.text().to_owned();
        self.advance();
        Ok(self.finish(start, NodeKind::Inline { raw }))
    }

    fn parse_unset(&mut self) -> PResult<Node> {
        let start = self.open();
        self.advance();
        let variables = if self.expect_next(TokenKind::LParen)? {
            self.parse_delimited(TokenKind::RParen, |p| p.parse_variable(false))?
        } else {
            Vec::new()
        };
        self.expect_end_of_statement()?;
        Ok(self.finish(start, NodeKind::Unset { variables }))
    }

    /// `declare(directives)` followed by `;`, a block or a short form.
    ///
    /// Without a body the directives apply to the statements that follow,
    /// which become its children.
    fn parse_declare(&mut self) -> PResult<Node> {
        let start = self.open();
        self.advance();
        let directives = if self.expect_next(TokenKind::LParen)? {
            self.parse_delimited(TokenKind::RParen, |p| p.parse_declare_directive())?
        } else {
            Vec::new()
        };

        let (children, mode) = match self.kind() {
            TokenKind::Colon => {
                self.advance();
                let children = self.parse_inner_statements(END_DECLARE)?;
                self.expect_next(TokenKind::EndDeclare)?;
                self.expect_end_of_statement()?;
                (children, DeclareMode::Short)
            }
            TokenKind::LBrace => {
                self.advance();
                let children = self.parse_top_statements(super::CLOSE_BRACE)?;
                self.expect_next(TokenKind::RBrace)?;
                (children, DeclareMode::Block)
            }
            _ => {
                self.expect_end_of_statement()?;
                let children = self.parse_top_statements(DECLARE_SCOPE_END)?;
                (children, DeclareMode::None)
            }
        };

        Ok(self.finish(
            start,
            NodeKind::Declare {
                directives,
                children,
                mode,
            },
        ))
    }

    fn parse_declare_directive(&mut self) -> PResult<Node> {
        let start = self.open();
        let key = self.parse_identifier()?;
        self.expect_next(TokenKind::Equal)?;
        let value = self.parse_expr()?;
        Ok(self.finish(
            start,
            NodeKind::DeclareDirective {
                key: Box::new(key),
                value: Box::new(value),
            },
        ))
    }

    fn parse_throw(&mut self) -> PResult<Node> {
        let start = self.open();
        self.advance();
        let what = self.parse_expr()?;
        self.expect_end_of_statement()?;
        Ok(self.finish(
            start,
            NodeKind::Throw {
                what: Box::new(what),
            },
        ))
    }

    fn parse_goto(&mut self) -> PResult<Node> {
        let start = self.open();
        self.advance();
        let label = self.parse_identifier()?;
        self.expect_end_of_statement()?;
        Ok(self.finish(
            start,
            NodeKind::Goto {
                label: Box::new(label),
            },
        ))
    }

    /// `name:`
    fn parse_label(&mut self) -> PResult<Node> {
        let start = self.open();
        let name = self.parse_identifier()?;
        self.expect_next(TokenKind::Colon)?;
        Ok(self.finish(
            start,
            NodeKind::Label {
                name: Box::new(name),
            },
        ))
    }
}
