//! Functions, methods, closures and arrow functions.
//!
//! ```text
//! function    ::= T_FUNCTION '&'? T_STRING parameters return_type? '{' inner_statement* '}'
//! closure     ::= T_STATIC? T_FUNCTION '&'? parameters
//!                 (T_USE '(' lexical_var (',' lexical_var)* ','? ')')? return_type? block
//! arrow       ::= T_STATIC? T_FN '&'? parameters return_type? T_DOUBLE_ARROW expr
//! parameters  ::= '(' (parameter (',' parameter)* ','?)? ')'
//! parameter   ::= '?'? type? '&'? T_ELLIPSIS? T_VARIABLE ('=' expr)?
//! return_type ::= ':' '?'? type
//! ```

use php_ir::{Modifiers, NameResolution, Node, NodeKind, TokenKind};

use crate::builder::NodeStart;
use crate::error::PResult;
use crate::Parser;

impl Parser<'_> {
    pub(crate) fn parse_function_declaration(&mut self) -> PResult<Node> {
        let start = self.open();
        self.advance();
        let by_ref = self.eat(TokenKind::Amp);
        let name = self.parse_identifier()?;
        let arguments = self.parse_parameter_list()?;
        let (return_type, nullable) = self.parse_return_type()?;
        let body = self.parse_code_block()?;
        Ok(self.finish(
            start,
            NodeKind::Function {
                name: Box::new(name),
                arguments,
                by_ref,
                return_type,
                nullable,
                body: Box::new(body),
            },
        ))
    }

    /// A class member function, opened at its first modifier. Abstract and
    /// interface methods end with `;` and have no body.
    pub(crate) fn parse_method(
        &mut self,
        start: NodeStart,
        modifiers: Modifiers,
    ) -> PResult<Node> {
        self.advance();
        let by_ref = self.eat(TokenKind::Amp);
        // PHP 7 allows reserved words as method names
        let name = if self.options.php7 {
            self.parse_reserved_identifier()?
        } else {
            self.parse_identifier()?
        };
        let arguments = self.parse_parameter_list()?;
        let (return_type, nullable) = self.parse_return_type()?;
        let body = if self.at(TokenKind::Semicolon) {
            self.expect_end_of_statement()?;
            None
        } else {
            Some(Box::new(self.parse_code_block()?))
        };
        Ok(self.finish(
            start,
            NodeKind::Method {
                name: Box::new(name),
                arguments,
                by_ref,
                return_type,
                nullable,
                body,
                modifiers,
            },
        ))
    }

    /// A closure starting at `function`, or at `static` when `is_static`.
    pub(crate) fn parse_closure(&mut self, start: NodeStart, is_static: bool) -> PResult<Node> {
        self.advance();
        let by_ref = self.eat(TokenKind::Amp);
        let arguments = self.parse_parameter_list()?;
        let uses = if self.eat(TokenKind::Use) {
            if self.expect_next(TokenKind::LParen)? {
                self.parse_delimited(TokenKind::RParen, |p| p.parse_lexical_variable())?
            } else {
                Vec::new()
            }
        } else {
            Vec::new()
        };
        let (return_type, nullable) = self.parse_return_type()?;
        let body = self.parse_code_block()?;
        Ok(self.finish(
            start,
            NodeKind::Closure {
                arguments,
                uses,
                by_ref,
                return_type,
                nullable,
                body: Box::new(body),
                is_static,
            },
        ))
    }

    /// `$x` or `&$x` in a closure's `use` list.
    fn parse_lexical_variable(&mut self) -> PResult<Node> {
        if !self.at(TokenKind::Amp) {
            return self.parse_simple_variable();
        }
        let start = self.open();
        self.advance();
        let what = self.parse_simple_variable()?;
        Ok(self.finish(
            start,
            NodeKind::ByRef {
                what: Box::new(what),
            },
        ))
    }

    /// `fn (params) => expr`. Without the 7.4 grammar `fn` never reaches
    /// here: the token stream hands it over as a plain identifier.
    pub(crate) fn parse_arrow_function(
        &mut self,
        start: NodeStart,
        is_static: bool,
    ) -> PResult<Node> {
        self.advance();
        let by_ref = self.eat(TokenKind::Amp);
        let arguments = self.parse_parameter_list()?;
        let (return_type, nullable) = self.parse_return_type()?;
        self.expect_next(TokenKind::DoubleArrow)?;
        let body = self.parse_expr()?;
        Ok(self.finish(
            start,
            NodeKind::ArrowFunc {
                arguments,
                by_ref,
                return_type,
                nullable,
                body: Box::new(body),
                is_static,
            },
        ))
    }

    pub(crate) fn parse_parameter_list(&mut self) -> PResult<Vec<Node>> {
        if !self.expect_next(TokenKind::LParen)? {
            return Ok(Vec::new());
        }
        self.parse_delimited(TokenKind::RParen, |p| p.parse_parameter())
    }

    fn parse_parameter(&mut self) -> PResult<Node> {
        let start = self.open();
        let nullable = self.eat(TokenKind::Question);
        let type_hint = match self.kind() {
            TokenKind::Amp | TokenKind::Ellipsis | TokenKind::Variable => None,
            _ => Some(Box::new(self.parse_type()?)),
        };
        let by_ref = self.eat(TokenKind::Amp);
        let variadic = self.eat(TokenKind::Ellipsis);
        let name = self.parse_variable_name()?;
        let default = if self.eat(TokenKind::Equal) {
            Some(Box::new(self.parse_expr()?))
        } else {
            None
        };
        Ok(self.finish(
            start,
            NodeKind::Parameter {
                name: Box::new(name),
                type_hint,
                default,
                by_ref,
                variadic,
                nullable,
            },
        ))
    }

    /// A type: `array`, `callable` or a class name.
    pub(crate) fn parse_type(&mut self) -> PResult<Node> {
        if !matches!(self.kind(), TokenKind::Array | TokenKind::Callable) {
            return self.parse_name();
        }
        let start = self.open();
        let name = self.text().to_ascii_lowercase();
        self.advance();
        Ok(self.finish(
            start,
            NodeKind::Name {
                name,
                resolution: NameResolution::Unqualified,
            },
        ))
    }

    /// `: ?type`, returning the type and whether it is nullable.
    fn parse_return_type(&mut self) -> PResult<(Option<Box<Node>>, bool)> {
        if !self.at(TokenKind::Colon) {
            return Ok((None, false));
        }
        if !self.options.php7 {
            self.unsupported()?;
        }
        self.advance();
        let nullable = self.eat(TokenKind::Question);
        let return_type = self.parse_type()?;
        Ok((Some(Box::new(return_type)), nullable))
    }
}
