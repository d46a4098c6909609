//! Classes, interfaces and traits.
//!
//! ```text
//! class     ::= (T_ABSTRACT | T_FINAL)* T_CLASS T_STRING
//!               (T_EXTENDS name)? (T_IMPLEMENTS name (',' name)*)? '{' member* '}'
//! interface ::= T_INTERFACE T_STRING (T_EXTENDS name (',' name)*)? '{' member* '}'
//! trait     ::= T_TRAIT T_STRING '{' member* '}'
//! member    ::= T_USE name (',' name)* (';' | '{' ... '}')
//!             | flags T_CONST constant (',' constant)* ';'
//!             | flags T_FUNCTION method
//!             | (flags | T_VAR) ('?'? type)? property (',' property)* ';'
//! ```

use php_ir::{Modifiers, Node, NodeKind, TokenKind, Visibility};

use crate::builder::NodeStart;
use crate::classify::{Category, TokenSet, SYNC};
use crate::error::{ErrorCode, Expected, PResult};
use crate::Parser;

/// Tokens that can begin a property type.
const PROPERTY_TYPE: TokenSet = TokenSet::of(&[
    TokenKind::Question,
    TokenKind::Identifier,
    TokenKind::NsSeparator,
    TokenKind::Namespace,
    TokenKind::Array,
    TokenKind::Callable,
]);

impl Parser<'_> {
    pub(crate) fn parse_class_declaration(&mut self) -> PResult<Node> {
        let start = self.open();
        let (is_abstract, is_final) = self.parse_class_flags()?;
        if !self.at(TokenKind::Class) {
            let mut error = self.error(Expected::Token(TokenKind::Class))?;
            self.abandon(start, &mut error);
            return Ok(error);
        }
        self.advance();
        let name = self.parse_identifier()?;
        let (extends, implements) = self.parse_class_heritage()?;
        let body = self.parse_class_body()?;
        Ok(self.finish(
            start,
            NodeKind::Class {
                name: Some(Box::new(name)),
                extends,
                implements,
                body,
                is_abstract,
                is_final,
                is_anonymous: false,
            },
        ))
    }

    /// `new class (args) extends X implements Y { ... }`, returning the
    /// class and the constructor arguments.
    pub(crate) fn parse_anonymous_class(&mut self) -> PResult<(Node, Vec<Node>)> {
        let start = self.open();
        self.advance();
        let arguments = if self.at(TokenKind::LParen) {
            self.parse_arguments()?
        } else {
            Vec::new()
        };
        let (extends, implements) = self.parse_class_heritage()?;
        let body = self.parse_class_body()?;
        let class = self.finish(
            start,
            NodeKind::Class {
                name: None,
                extends,
                implements,
                body,
                is_abstract: false,
                is_final: false,
                is_anonymous: true,
            },
        );
        Ok((class, arguments))
    }

    /// `abstract` / `final` before `class`.
    fn parse_class_flags(&mut self) -> PResult<(bool, bool)> {
        let mut is_abstract = false;
        let mut is_final = false;
        loop {
            let repeated = match self.kind() {
                TokenKind::Abstract => std::mem::replace(&mut is_abstract, true),
                TokenKind::Final => std::mem::replace(&mut is_final, true),
                _ => break,
            };
            if repeated {
                self.report(
                    ErrorCode::E1001,
                    "Parse Error : Multiple class modifiers are not allowed",
                )?;
            } else if is_abstract && is_final {
                self.report(
                    ErrorCode::E1001,
                    "Parse Error : Cannot use the final modifier on an abstract class",
                )?;
            }
            self.advance();
        }
        Ok((is_abstract, is_final))
    }

    fn parse_class_heritage(&mut self) -> PResult<(Option<Box<Node>>, Vec<Node>)> {
        let extends = if self.eat(TokenKind::Extends) {
            Some(Box::new(self.parse_name()?))
        } else {
            None
        };
        let implements = if self.eat(TokenKind::Implements) {
            self.parse_separated(|p| p.parse_name())?
        } else {
            Vec::new()
        };
        Ok((extends, implements))
    }

    pub(crate) fn parse_interface(&mut self) -> PResult<Node> {
        let start = self.open();
        self.advance();
        let name = self.parse_identifier()?;
        let extends = if self.eat(TokenKind::Extends) {
            self.parse_separated(|p| p.parse_name())?
        } else {
            Vec::new()
        };
        let body = self.parse_class_body()?;
        Ok(self.finish(
            start,
            NodeKind::Interface {
                name: Box::new(name),
                extends,
                body,
            },
        ))
    }

    pub(crate) fn parse_trait(&mut self) -> PResult<Node> {
        let start = self.open();
        self.advance();
        let name = self.parse_identifier()?;
        let body = self.parse_class_body()?;
        Ok(self.finish(
            start,
            NodeKind::Trait {
                name: Box::new(name),
                body,
            },
        ))
    }

    /// `{ member* }`
    fn parse_class_body(&mut self) -> PResult<Vec<Node>> {
        if !self.expect_next(TokenKind::LBrace)? {
            return Ok(Vec::new());
        }
        let mut members = Vec::new();
        while !self.stream.is_eof() && !self.at(TokenKind::RBrace) {
            let before = self.stream.start();
            members.push(self.parse_class_member()?);
            self.force_progress(before);
        }
        self.expect_next(TokenKind::RBrace)?;
        Ok(members)
    }

    fn parse_class_member(&mut self) -> PResult<Node> {
        if self.at(TokenKind::Use) {
            return self.parse_trait_use();
        }

        let start = self.open();
        if self.eat(TokenKind::Var) {
            return self.parse_property_statement(start, Modifiers::default());
        }
        let modifiers = self.parse_member_flags()?;
        match self.kind() {
            TokenKind::Const => self.parse_class_constant(start, modifiers),
            TokenKind::Function => self.parse_method(start, modifiers),
            TokenKind::Variable => self.parse_property_statement(start, modifiers),
            kind if PROPERTY_TYPE.contains(kind) && modifiers != Modifiers::default() => {
                self.parse_property_statement(start, modifiers)
            }
            _ => {
                let mut error = self.error(Expected::OneOf(&[
                    TokenKind::Const,
                    TokenKind::Variable,
                    TokenKind::Function,
                ]))?;
                self.abandon(start, &mut error);
                if !SYNC.contains(self.kind()) {
                    self.advance();
                }
                Ok(error)
            }
        }
    }

    /// Visibility and modifier keywords, in any order.
    fn parse_member_flags(&mut self) -> PResult<Modifiers> {
        let mut modifiers = Modifiers::default();
        while self.is(Category::MemberFlags) {
            let repeated = match self.kind() {
                TokenKind::Public | TokenKind::Protected | TokenKind::Private => {
                    let visibility = match self.kind() {
                        TokenKind::Public => Visibility::Public,
                        TokenKind::Protected => Visibility::Protected,
                        _ => Visibility::Private,
                    };
                    modifiers
                        .visibility
                        .replace(visibility)
                        .map(|_| "Parse Error : Multiple access type modifiers are not allowed")
                }
                TokenKind::Static => std::mem::replace(&mut modifiers.is_static, true)
                    .then_some("Parse Error : Multiple static modifiers are not allowed"),
                TokenKind::Abstract => std::mem::replace(&mut modifiers.is_abstract, true)
                    .then_some("Parse Error : Multiple abstract modifiers are not allowed"),
                _ => std::mem::replace(&mut modifiers.is_final, true)
                    .then_some("Parse Error : Multiple final modifiers are not allowed"),
            };
            if let Some(message) = repeated {
                self.report(ErrorCode::E1001, message)?;
            }
            self.advance();
        }
        Ok(modifiers)
    }

    fn parse_class_constant(&mut self, start: NodeStart, modifiers: Modifiers) -> PResult<Node> {
        self.advance();
        let constants = self.parse_separated(|p| p.parse_constant(true))?;
        self.expect_end_of_statement()?;
        Ok(self.finish(
            start,
            NodeKind::ClassConstant {
                constants,
                modifiers,
            },
        ))
    }

    /// `?type $a = 1, $b;` after the modifiers. A type needs the 7.4
    /// grammar.
    fn parse_property_statement(
        &mut self,
        start: NodeStart,
        modifiers: Modifiers,
    ) -> PResult<Node> {
        let (type_hint, nullable) = if self.at(TokenKind::Variable) {
            (None, false)
        } else {
            if !self.options.php74 {
                self.unsupported()?;
            }
            let nullable = self.eat(TokenKind::Question);
            (Some(Box::new(self.parse_type()?)), nullable)
        };
        let properties = self.parse_separated(|p| p.parse_property())?;
        self.expect_end_of_statement()?;
        Ok(self.finish(
            start,
            NodeKind::PropertyStatement {
                properties,
                modifiers,
                type_hint,
                nullable,
            },
        ))
    }

    fn parse_property(&mut self) -> PResult<Node> {
        let start = self.open();
        let name = self.parse_variable_name()?;
        let value = if self.eat(TokenKind::Equal) {
            Some(Box::new(self.parse_expr()?))
        } else {
            None
        };
        Ok(self.finish(
            start,
            NodeKind::Property {
                name: Box::new(name),
                value,
            },
        ))
    }

    /// `use A, B;` or `use A { ... }` inside a class body. The adaptation
    /// block is kept as raw text.
    fn parse_trait_use(&mut self) -> PResult<Node> {
        let start = self.open();
        self.advance();
        let traits = self.parse_separated(|p| p.parse_name())?;
        let adaptations = if self.at(TokenKind::LBrace) {
            Some(self.skip_brace_group()?)
        } else {
            self.expect_end_of_statement()?;
            None
        };
        Ok(self.finish(start, NodeKind::TraitUse { traits, adaptations }))
    }

    /// Consume a balanced `{ ... }` group and return its source text.
    fn skip_brace_group(&mut self) -> PResult<String> {
        let from = self.stream.start().offset;
        let mut depth = 0usize;
        loop {
            match self.kind() {
                TokenKind::LBrace => depth += 1,
                TokenKind::RBrace => depth = depth.saturating_sub(1),
                TokenKind::Eof => {
                    self.error(Expected::Token(TokenKind::RBrace))?;
                    break;
                }
                _ => {}
            }
            self.advance();
            if depth == 0 {
                break;
            }
        }
        let to = self.stream.prev().offset;
        Ok(self
            .stream
            .source()
            .get(from..to)
            .unwrap_or_default()
            .to_owned())
    }
}
