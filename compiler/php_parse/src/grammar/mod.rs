//! Grammar rules.
//!
//! Each module extends `Parser` with the rules of one grammar area:
//!
//! - [`main`]: top-level statements, namespaces, `use`, `const`
//! - [`statement`]: inner statements
//! - [`loops`]: `while`, `do`, `for`, `foreach`
//! - [`conditional`]: `if` and its short form
//! - [`switch`]: `switch` and its cases
//! - [`try_catch`]: `try`, `catch`, `finally`
//! - [`function`]: declarations, parameters, closures, arrow functions
//! - [`class`]: classes, interfaces, traits and their members
//! - [`expr`]: operators and precedence
//! - [`variable`]: variables, names, lookups and calls
//! - [`scalar`]: literals
//! - [`array`]: array literals and destructuring lists
//!
//! # Design
//!
//! - **One token of lookahead**: alternatives are chosen from the current
//!   token, consulting [`Category`] first sets. `peek` is used where a
//!   keyword starts two productions (`static`, `function`, labels).
//! - **Deferred construction**: a rule opens its node on its first token and
//!   finishes it after its last one, so the span ends at the previous-token
//!   boundary.
//! - **Recovery**: a failed expectation yields an `error` node in place of
//!   the missing child; statement lists skip a token when a statement
//!   consumed nothing.

mod array;
mod class;
mod conditional;
mod expr;
mod function;
mod loops;
mod main;
mod scalar;
mod statement;
mod switch;
mod try_catch;
mod variable;

use php_ir::{NameResolution, Node, NodeKind, Position, TokenKind};
use tracing::debug;

use crate::classify::{Category, TokenSet};
use crate::error::{Expected, PResult};
use crate::Parser;

const CLOSE_BRACE: TokenSet = TokenSet::new().with(TokenKind::RBrace);

impl Parser<'_> {
    /// Statements until a token of `stop` or end of input.
    pub(crate) fn parse_inner_statements(&mut self, stop: TokenSet) -> PResult<Vec<Node>> {
        let mut children = Vec::new();
        while !self.stream.is_eof() && !stop.contains(self.kind()) {
            let before = self.stream.start();
            children.push(self.parse_inner_statement()?);
            self.force_progress(before);
        }
        Ok(children)
    }

    /// Top-level statements until a token of `stop` or end of input.
    pub(crate) fn parse_top_statements(&mut self, stop: TokenSet) -> PResult<Vec<Node>> {
        let mut children = Vec::new();
        while !self.stream.is_eof() && !stop.contains(self.kind()) {
            let before = self.stream.start();
            children.push(self.parse_top_statement()?);
            self.force_progress(before);
        }
        Ok(children)
    }

    /// Skip the current token if nothing was consumed since `before`.
    ///
    /// Only reachable in fault-tolerant mode: in strict mode a rule that
    /// cannot consume its first token has already aborted.
    pub(crate) fn force_progress(&mut self, before: Position) {
        if !self.stream.is_eof() && self.stream.start().offset == before.offset {
            debug!(
                line = before.line,
                column = before.column,
                "skipping {:?}",
                self.kind()
            );
            self.advance();
        }
    }

    /// `: statements end ;`
    pub(crate) fn parse_short_form(&mut self, end: TokenKind) -> PResult<Node> {
        let start = self.open();
        self.expect_next(TokenKind::Colon)?;
        let children = self.parse_inner_statements(TokenSet::new().with(end))?;
        self.expect_next(end)?;
        self.expect_end_of_statement()?;
        Ok(self.finish(start, NodeKind::Block { children }))
    }

    /// `{ statements }`
    pub(crate) fn parse_code_block(&mut self) -> PResult<Node> {
        if !self.at(TokenKind::LBrace) {
            return self.error(Expected::Token(TokenKind::LBrace));
        }
        let start = self.open();
        self.advance();
        let children = self.parse_inner_statements(CLOSE_BRACE)?;
        self.expect_next(TokenKind::RBrace)?;
        Ok(self.finish(start, NodeKind::Block { children }))
    }

    /// Items separated by commas, at least one.
    pub(crate) fn parse_separated<F>(&mut self, mut item: F) -> PResult<Vec<Node>>
    where
        F: FnMut(&mut Self) -> PResult<Node>,
    {
        let mut items = vec![item(self)?];
        while self.eat(TokenKind::Comma) {
            items.push(item(self)?);
        }
        Ok(items)
    }

    /// Comma-separated items up to `close`, which is consumed. A trailing
    /// comma is accepted.
    pub(crate) fn parse_delimited<F>(&mut self, close: TokenKind, mut item: F) -> PResult<Vec<Node>>
    where
        F: FnMut(&mut Self) -> PResult<Node>,
    {
        let mut items = Vec::new();
        while !self.at(close) && !self.stream.is_eof() {
            items.push(item(self)?);
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect_next(close)?;
        Ok(items)
    }

    /// A plain identifier (`T_STRING`).
    pub(crate) fn parse_identifier(&mut self) -> PResult<Node> {
        if !self.at(TokenKind::Identifier) {
            return self.error(Expected::Token(TokenKind::Identifier));
        }
        self.identifier_here()
    }

    /// An identifier where reserved words are allowed too, as in member
    /// names.
    pub(crate) fn parse_reserved_identifier(&mut self) -> PResult<Node> {
        if !self.at(TokenKind::Identifier) && !self.is(Category::Identifier) {
            return self.error(Expected::Category(Category::Identifier));
        }
        self.identifier_here()
    }

    fn identifier_here(&mut self) -> PResult<Node> {
        let start = self.open();
        let name = self.text().to_owned();
        self.advance();
        Ok(self.finish(start, NodeKind::Identifier { name }))
    }

    /// `$name` as a declaration: an identifier without the `$`.
    pub(crate) fn parse_variable_name(&mut self) -> PResult<Node> {
        if !self.at(TokenKind::Variable) {
            return self.error(Expected::Token(TokenKind::Variable));
        }
        let start = self.open();
        let text = self.text();
        let name = text.strip_prefix('$').unwrap_or(text).to_owned();
        self.advance();
        Ok(self.finish(start, NodeKind::Identifier { name }))
    }

    /// A possibly qualified name: `Foo`, `Foo\Bar`, `\Foo` or
    /// `namespace\Foo`.
    ///
    /// Stops before a `\` that is not followed by a segment, which leaves a
    /// group `use` prefix (`A\{`) for the caller.
    pub(crate) fn parse_name(&mut self) -> PResult<Node> {
        let start = self.open();
        let mut name = String::new();
        let mut resolution = NameResolution::Unqualified;
        if self.at(TokenKind::Namespace) {
            self.advance();
            self.expect_next(TokenKind::NsSeparator)?;
            resolution = NameResolution::Relative;
        } else if self.eat(TokenKind::NsSeparator) {
            name.push('\\');
            resolution = NameResolution::FullyQualified;
        }

        if !self.at(TokenKind::Identifier) {
            let mut node = self.error(Expected::Token(TokenKind::Identifier))?;
            self.abandon(start, &mut node);
            return Ok(node);
        }
        name.push_str(self.text());
        self.advance();
        while self.at(TokenKind::NsSeparator) && self.peek() == TokenKind::Identifier {
            self.advance();
            name.push('\\');
            name.push_str(self.text());
            self.advance();
            if resolution == NameResolution::Unqualified {
                resolution = NameResolution::Qualified;
            }
        }
        Ok(self.finish(start, NodeKind::Name { name, resolution }))
    }
}
