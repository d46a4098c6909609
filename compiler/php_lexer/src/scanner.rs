//! Mode-switching scanner.
//!
//! Source text starts in inline-HTML mode. An open tag switches to PHP mode,
//! where a logos lexer runs over the rest of the text until a close tag
//! hands control back to HTML mode.

use logos::Logos;
use php_ir::{Position, Token, TokenKind};

use crate::raw_token::RawToken;

enum Mode<'src> {
    Html,
    Php {
        lexer: logos::Lexer<'src, RawToken>,
        /// Byte offset of the lexer's input within the full source.
        base: usize,
    },
}

/// Produces every raw token of a source text, trivia included.
///
/// Tokens are contiguous: concatenating their text reproduces the input.
pub struct Scanner<'src> {
    source: &'src str,
    pos: Position,
    mode: Mode<'src>,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str) -> Self {
        Scanner {
            source,
            pos: Position::START,
            mode: Mode::Html,
        }
    }

    /// Restart on a new input text.
    pub fn set_input(&mut self, source: &'src str) {
        *self = Scanner::new(source);
    }

    /// The full input text.
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Position just past the last token returned.
    ///
    /// Once `next_token` has returned `None` this is the end of input.
    pub fn position(&self) -> Position {
        self.pos
    }

    /// Position of the end of the input text.
    pub fn end_position(&self) -> Position {
        self.pos.advance(&self.source[self.pos.offset..])
    }

    /// Next raw token, or `None` at end of input.
    pub fn next_token(&mut self) -> Option<Token<'src>> {
        let source = self.source;
        match &mut self.mode {
            Mode::Html => self.next_html(),
            Mode::Php { lexer, base } => {
                let base = *base;
                let Some(result) = lexer.next() else {
                    self.mode = Mode::Html;
                    return None;
                };
                let span = lexer.span();
                let text = &source[base + span.start..base + span.end];
                let kind = match result {
                    Ok(raw) => raw.kind(text),
                    Err(()) => TokenKind::BadCharacter,
                };
                if kind == TokenKind::CloseTag {
                    self.mode = Mode::Html;
                }
                Some(self.emit(kind, text))
            }
        }
    }

    fn next_html(&mut self) -> Option<Token<'src>> {
        let source = self.source;
        let offset = self.pos.offset;
        let rest = &source[offset..];
        if rest.is_empty() {
            return None;
        }

        match find_open_tag(rest) {
            Some((0, kind, len)) => {
                let text = &rest[..len];
                let token = self.emit(kind, text);
                self.mode = Mode::Php {
                    lexer: RawToken::lexer(&source[offset + len..]),
                    base: offset + len,
                };
                Some(token)
            }
            Some((at, _, _)) => Some(self.emit(TokenKind::InlineHtml, &rest[..at])),
            None => Some(self.emit(TokenKind::InlineHtml, rest)),
        }
    }

    fn emit(&mut self, kind: TokenKind, text: &'src str) -> Token<'src> {
        let start = self.pos;
        self.pos = start.advance(text);
        Token::new(kind, text, start, self.pos)
    }
}

impl<'src> Iterator for Scanner<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

/// Locate the next `<?php` or `<?=` tag.
///
/// Returns the tag's offset, kind and length. A `<?php` tag includes one
/// trailing whitespace character (`\r\n` counts as one).
fn find_open_tag(text: &str) -> Option<(usize, TokenKind, usize)> {
    let mut from = 0;
    while let Some(found) = text[from..].find("<?") {
        let at = from + found;
        let after = &text[at + 2..];
        if after.starts_with('=') {
            return Some((at, TokenKind::OpenTagWithEcho, 3));
        }
        if after.get(..3).is_some_and(|tag| tag.eq_ignore_ascii_case("php")) {
            let tail = &after[3..];
            if tail.starts_with("\r\n") {
                return Some((at, TokenKind::OpenTag, 7));
            }
            match tail.chars().next() {
                None => return Some((at, TokenKind::OpenTag, 5)),
                Some(' ' | '\t' | '\n' | '\r') => return Some((at, TokenKind::OpenTag, 6)),
                Some(_) => {}
            }
        }
        from = at + 2;
    }
    None
}

#[cfg(test)]
mod tests;
