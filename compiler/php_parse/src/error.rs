//! Parse errors and the expectation reporter.
//!
//! Two outcomes for a failed expectation:
//! - strict mode: the parse aborts with a [`ParseError`]
//! - fault-tolerant mode: an `error` placeholder node is recorded in the
//!   program's error list and handed back to the rule in place of the
//!   missing child
//!
//! Fatal grammar violations and the unclosed-node check always abort.

use std::fmt;

use php_ir::{Location, Node, NodeKind, TokenKind};
use tracing::debug;

use crate::classify::Category;
use crate::Parser;

/// Stable identifier of an error condition.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Unexpected token
    E1001,
    /// Expected an expression
    E1002,
    /// Syntax not available in the selected PHP version
    E1003,
    /// Nested namespace declaration
    E1004,
    /// Destructuring list used as a `foreach` key
    E1100,
    /// A node was opened but never sealed
    E9001,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1100 => "E1100",
            ErrorCode::E9001 => "E9001",
        }
    }

    /// Whether this condition aborts the parse in every mode.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ErrorCode::E1100 | ErrorCode::E9001)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error surfaced to the caller when a parse aborts.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ParseError {
    pub code: ErrorCode,
    /// Full message, including the `on line N` suffix.
    pub message: String,
    pub file_name: String,
    pub line: u32,
    pub column: u32,
}

impl ParseError {
    pub fn new(
        code: ErrorCode,
        message: impl Into<String>,
        file_name: impl Into<String>,
        line: u32,
        column: u32,
    ) -> Self {
        ParseError {
            code,
            message: message.into(),
            file_name: file_name.into(),
            line,
            column,
        }
    }
}

pub(crate) type PResult<T> = Result<T, ParseError>;

/// What a failed rule was looking for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Expected {
    Nothing,
    Token(TokenKind),
    OneOf(&'static [TokenKind]),
    Category(Category),
}

impl Expected {
    /// Descriptor stored on the error placeholder.
    fn describe(self) -> Option<String> {
        match self {
            Expected::Nothing => None,
            Expected::Token(kind) => Some(kind_descriptor(kind)),
            Expected::OneOf(kinds) => Some(
                kinds
                    .iter()
                    .map(|kind| kind_descriptor(*kind))
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            Expected::Category(category) => Some(category.name().to_owned()),
        }
    }

    /// The `, expecting X` clause. Only a single token kind produces one.
    fn clause(self) -> String {
        match self {
            Expected::Token(kind) => format!(", expecting {}", token_name(kind)),
            _ => String::new(),
        }
    }
}

/// Human-readable token name: `'x'` for punctuation, the `T_*` name for
/// named kinds, `the end of file (EOF)` for end of input.
pub(crate) fn token_name(kind: TokenKind) -> String {
    if kind == TokenKind::Eof {
        return "the end of file (EOF)".to_owned();
    }
    match (kind.name(), kind.symbol()) {
        (Some(name), _) => name.to_owned(),
        (None, Some(symbol)) => format!("'{symbol}'"),
        (None, None) => format!("{kind:?}"),
    }
}

fn kind_descriptor(kind: TokenKind) -> String {
    match (kind.name(), kind.symbol()) {
        (Some(name), _) => name.to_owned(),
        (None, Some(symbol)) => symbol.to_owned(),
        (None, None) => "EOF".to_owned(),
    }
}

/// Longest token text quoted verbatim in a message.
const MAX_QUOTED_TEXT: usize = 10;
/// Characters kept when quoted text is cut.
const CUT_QUOTED_TEXT: usize = 7;

fn quote_text(text: &str) -> String {
    if text.chars().count() > MAX_QUOTED_TEXT {
        let cut: String = text.chars().take(CUT_QUOTED_TEXT).collect();
        format!("{cut}...")
    } else {
        text.to_owned()
    }
}

impl Parser<'_> {
    /// Description of the current token for messages.
    fn unexpected_token(&self) -> String {
        let kind = self.stream.kind();
        match kind.name() {
            Some(name) => format!("'{}' ({name})", quote_text(self.stream.text())),
            None => token_name(kind),
        }
    }

    /// Report that the current token does not satisfy `expected`.
    pub(crate) fn error(&mut self, expected: Expected) -> PResult<Node> {
        let code = match expected {
            Expected::Category(Category::Expr) => ErrorCode::E1002,
            _ => ErrorCode::E1001,
        };
        self.error_with(code, expected)
    }

    /// [`Parser::error`] with an explicit code.
    pub(crate) fn error_with(&mut self, code: ErrorCode, expected: Expected) -> PResult<Node> {
        let mut message = String::from("Parse Error : syntax error");
        let token = self.unexpected_token();
        if !self.stream.is_eof() {
            message.push_str(", unexpected ");
            message.push_str(&token);
        }
        message.push_str(&expected.clause());
        self.raise(code, message, expected, token)
    }

    /// Record or throw an error with a ready-made message.
    ///
    /// The message gets an `on line N` suffix naming the current token's
    /// line.
    pub(crate) fn raise(
        &mut self,
        code: ErrorCode,
        message: String,
        expected: Expected,
        token: String,
    ) -> PResult<Node> {
        let at = self.stream.start();
        let message = format!("{message} on line {}", at.line);
        if !self.options.suppress_errors {
            return Err(ParseError::new(
                code,
                message,
                self.file_name.as_str(),
                at.line,
                at.column,
            ));
        }
        debug!(%code, line = at.line, column = at.column, "{message}");
        let node = Node {
            id: self.fresh_id(),
            kind: NodeKind::Error {
                message,
                token: Some(token),
                line: at.line,
                expected: expected.describe(),
            },
            loc: Location::new(at, at),
            leading_comments: Vec::new(),
            trailing_comments: Vec::new(),
        };
        self.errors.push(node.clone());
        Ok(node)
    }

    /// Record or throw an error with a fixed message about the current
    /// token.
    pub(crate) fn report(&mut self, code: ErrorCode, message: &str) -> PResult<Node> {
        let token = self.unexpected_token();
        self.raise(code, message.to_owned(), Expected::Nothing, token)
    }

    /// Abort with a fatal grammar violation, regardless of mode.
    pub(crate) fn fatal<T>(&self, code: ErrorCode, message: &str) -> PResult<T> {
        let at = self.stream.start();
        Err(ParseError::new(
            code,
            format!("{message} on line {}", at.line),
            self.file_name.as_str(),
            at.line,
            at.column,
        ))
    }

    /// Check the current token without consuming it.
    ///
    /// Returns `Ok(false)` after recording the mismatch in fault-tolerant
    /// mode.
    pub(crate) fn expect(&mut self, kind: TokenKind) -> PResult<bool> {
        if self.at(kind) {
            return Ok(true);
        }
        self.error(Expected::Token(kind))?;
        Ok(false)
    }

    /// [`Parser::expect`] against several acceptable kinds.
    pub(crate) fn expect_one_of(&mut self, kinds: &'static [TokenKind]) -> PResult<bool> {
        if kinds.contains(&self.stream.kind()) {
            return Ok(true);
        }
        self.error(Expected::OneOf(kinds))?;
        Ok(false)
    }

    /// Consume `kind` if present, otherwise report it as missing.
    pub(crate) fn expect_next(&mut self, kind: TokenKind) -> PResult<bool> {
        if self.expect(kind)? {
            self.advance();
            return Ok(true);
        }
        Ok(false)
    }

    /// Consume a statement terminator: `;`, inline HTML or end of input.
    ///
    /// Inline HTML is left for the statement list to turn into an `inline`
    /// node. On a mismatch nothing is consumed.
    pub(crate) fn expect_end_of_statement(&mut self) -> PResult<bool> {
        match self.stream.kind() {
            TokenKind::Semicolon => {
                self.advance();
                Ok(true)
            }
            TokenKind::InlineHtml | TokenKind::Eof => Ok(true),
            _ => {
                self.error(Expected::Token(TokenKind::Semicolon))?;
                Ok(false)
            }
        }
    }

    /// Report syntax that the selected PHP version does not accept.
    pub(crate) fn unsupported(&mut self) -> PResult<Node> {
        self.error_with(ErrorCode::E1003, Expected::Nothing)
    }
}
