//! Grammar token stream over the raw scanner.
//!
//! Filters trivia, rewrites the tag tokens the grammar does not know about,
//! collects comments and the optional raw token log, and tracks the end of
//! the previously consumed token.

use php_ir::{Comment, Position, Token, TokenKind, TokenLogEntry};
use php_lexer::Scanner;
use tracing::{debug, trace};

use crate::ParserOptions;

/// Flags consulted while filtering raw tokens.
#[derive(Copy, Clone, Debug)]
struct Filter {
    extract_doc: bool,
    php74: bool,
}

/// A token scanned ahead of the current one, with the trivia that came
/// before it.
struct Lookahead<'src> {
    token: Token<'src>,
    comments: Vec<Comment>,
    log: Vec<TokenLogEntry>,
}

pub(crate) struct TokenStream<'src> {
    scanner: Scanner<'src>,
    current: Token<'src>,
    lookahead: Option<Lookahead<'src>>,
    /// End of the last consumed grammar token.
    prev: Position,
    /// Every comment seen so far, in arrival order.
    comments: Vec<Comment>,
    log: Option<Vec<TokenLogEntry>>,
    filter: Filter,
    debug: bool,
}

impl<'src> TokenStream<'src> {
    /// Attach to `source`. The stream is not primed: the current token is a
    /// zero-width end-of-input marker until the first [`advance`].
    ///
    /// [`advance`]: TokenStream::advance
    pub(crate) fn new(source: &'src str, options: &ParserOptions) -> Self {
        TokenStream {
            scanner: Scanner::new(source),
            current: Token::eof(Position::START),
            lookahead: None,
            prev: Position::START,
            comments: Vec::new(),
            log: options.extract_tokens.then(Vec::new),
            filter: Filter {
                extract_doc: options.extract_doc,
                php74: options.php74,
            },
            debug: options.debug,
        }
    }

    /// Move to the next grammar token.
    pub(crate) fn advance(&mut self) {
        // `?>` stands in for `;` but must not move the boundary past it
        if !self.at_synthetic_terminator() {
            self.prev = self.current.end;
        }

        let token = match self.lookahead.take() {
            Some(ahead) => {
                self.comments.extend(ahead.comments);
                if let Some(log) = &mut self.log {
                    log.extend(ahead.log);
                }
                ahead.token
            }
            None => pull(
                &mut self.scanner,
                self.filter,
                &mut self.comments,
                self.log.as_mut(),
            ),
        };
        self.current = token;

        trace!(
            kind = ?token.kind,
            line = token.start.line,
            column = token.start.column,
            "advance"
        );
        if self.debug {
            debug!(
                "Line {} : {}>{}<",
                token.start.line,
                crate::error::token_name(token.kind),
                token.text
            );
        }
    }

    /// Kind of the token after the current one.
    pub(crate) fn peek(&mut self) -> TokenKind {
        if self.lookahead.is_none() {
            let mut comments = Vec::new();
            let mut log = Vec::new();
            let logging = self.log.is_some();
            let token = pull(
                &mut self.scanner,
                self.filter,
                &mut comments,
                logging.then_some(&mut log),
            );
            self.lookahead = Some(Lookahead {
                token,
                comments,
                log,
            });
        }
        self.lookahead
            .as_ref()
            .map_or(TokenKind::Eof, |ahead| ahead.token.kind)
    }

    #[inline]
    pub(crate) fn kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Raw text of the current token.
    #[inline]
    pub(crate) fn text(&self) -> &'src str {
        self.current.text
    }

    /// Start of the current token.
    #[inline]
    pub(crate) fn start(&self) -> Position {
        self.current.start
    }

    /// End of the previously consumed token.
    #[inline]
    pub(crate) fn prev(&self) -> Position {
        self.prev
    }

    #[inline]
    pub(crate) fn at(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.current.kind == TokenKind::Eof
    }

    /// Whether the current token is the `;` produced by a `?>` tag.
    pub(crate) fn at_synthetic_terminator(&self) -> bool {
        self.current.kind == TokenKind::Semicolon && self.current.text != ";"
    }

    /// The full input text.
    #[inline]
    pub(crate) fn source(&self) -> &'src str {
        self.scanner.source()
    }

    /// Every comment collected so far.
    #[inline]
    pub(crate) fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Stop scanning and return the text after the current token.
    ///
    /// The current token becomes end of input.
    pub(crate) fn halt(&mut self) -> &'src str {
        let source = self.scanner.source();
        let from = if self.is_eof() {
            source.len()
        } else {
            self.current.end.offset
        };
        let end = self.scanner.end_position();
        self.lookahead = None;
        self.current = Token::eof(end);
        self.scanner.set_input("");
        source.get(from..).unwrap_or_default()
    }

    /// Move the boundary to the end of input.
    pub(crate) fn finish(&mut self) {
        self.prev = if self.current.is(TokenKind::Eof) {
            self.current.end
        } else {
            self.scanner.end_position()
        };
    }

    /// Hand back the collected comments and token log.
    pub(crate) fn take_collected(&mut self) -> (Vec<Comment>, Option<Vec<TokenLogEntry>>) {
        (std::mem::take(&mut self.comments), self.log.take())
    }
}

/// Scan up to the next grammar token, diverting trivia.
fn pull<'src>(
    scanner: &mut Scanner<'src>,
    filter: Filter,
    comments: &mut Vec<Comment>,
    mut log: Option<&mut Vec<TokenLogEntry>>,
) -> Token<'src> {
    loop {
        let Some(raw) = scanner.next_token() else {
            return Token::eof(Scanner::position(scanner));
        };
        if let Some(log) = log.as_deref_mut() {
            log.push(TokenLogEntry::from(&raw));
        }
        match raw.kind {
            TokenKind::Whitespace | TokenKind::OpenTag => {}
            TokenKind::Comment | TokenKind::DocComment => {
                if filter.extract_doc {
                    comments.extend(Comment::from_token(&raw));
                }
            }
            TokenKind::CloseTag => {
                return Token {
                    kind: TokenKind::Semicolon,
                    ..raw
                }
            }
            TokenKind::OpenTagWithEcho => {
                return Token {
                    kind: TokenKind::Echo,
                    ..raw
                }
            }
            TokenKind::Fn if !filter.php74 => {
                return Token {
                    kind: TokenKind::Identifier,
                    ..raw
                }
            }
            _ => return raw,
        }
    }
}

#[cfg(test)]
mod tests;
