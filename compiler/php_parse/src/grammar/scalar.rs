//! Literals.
//!
//! ```text
//! scalar ::= T_LNUMBER | T_DNUMBER | T_CONSTANT_ENCAPSED_STRING
//!          | T_ENCAPSED_STRING | T_HEREDOC | magic_constant | array
//! ```
//!
//! Strings that interpolate are kept raw as `encapsed`; the rest are
//! unescaped into their value.

use php_ir::{EncapsedKind, Node, NodeKind, TokenKind};

use crate::classify::Category;
use crate::error::{Expected, PResult};
use crate::Parser;

impl Parser<'_> {
    pub(crate) fn parse_scalar(&mut self) -> PResult<Node> {
        let kind = match self.kind() {
            TokenKind::Array | TokenKind::LBracket => return self.parse_array(),
            TokenKind::LNumber | TokenKind::DNumber => NodeKind::Number {
                value: self.text().to_owned(),
            },
            TokenKind::ConstantString => string_literal(self.text()),
            TokenKind::EncapsedString => NodeKind::Encapsed {
                raw: self.text().to_owned(),
                kind: EncapsedKind::String,
            },
            TokenKind::Heredoc => heredoc_literal(self.text()),
            _ if self.is(Category::MagicConst) => NodeKind::MagicConstant {
                value: self.text().to_owned(),
            },
            _ => return self.error(Expected::Category(Category::Scalar)),
        };
        let start = self.open();
        self.advance();
        Ok(self.finish(start, kind))
    }
}

/// A quoted string without interpolation.
fn string_literal(raw: &str) -> NodeKind {
    let quoted = raw
        .strip_prefix(['b', 'B'])
        .filter(|rest| rest.starts_with(['\'', '"']))
        .unwrap_or(raw);
    let is_double_quote = quoted.starts_with('"');
    let inner = quoted
        .get(1..quoted.len().saturating_sub(1))
        .unwrap_or_default();
    let value = if is_double_quote {
        unescape_double(inner)
    } else {
        unescape_single(inner)
    };
    NodeKind::String {
        value,
        raw: raw.to_owned(),
        is_double_quote,
    }
}

/// A heredoc stays raw; a nowdoc gets its label and dedented body.
fn heredoc_literal(raw: &str) -> NodeKind {
    let Some((label, body)) = split_heredoc(raw) else {
        return NodeKind::Encapsed {
            raw: raw.to_owned(),
            kind: EncapsedKind::Heredoc,
        };
    };
    if !label.starts_with('\'') {
        return NodeKind::Encapsed {
            raw: raw.to_owned(),
            kind: EncapsedKind::Heredoc,
        };
    }
    NodeKind::Nowdoc {
        raw: raw.to_owned(),
        label: label.trim_matches('\'').to_owned(),
        value: body,
    }
}

/// Split `<<<LABEL\n...\nLABEL` into the head label as written and the
/// body with the closing label's indentation removed from every line.
fn split_heredoc(raw: &str) -> Option<(&str, String)> {
    let rest = raw.strip_prefix("<<<")?;
    let (head, rest) = rest.split_once('\n')?;
    let label = head.trim();
    let (body, closing) = match rest.rfind('\n') {
        Some(newline) => (&rest[..newline], &rest[newline + 1..]),
        None => ("", rest),
    };
    let body = body.strip_suffix('\r').unwrap_or(body);
    let indent = leading_blanks(closing);
    let value = body
        .split('\n')
        .map(|line| &line[leading_blanks(line).min(indent)..])
        .collect::<Vec<_>>()
        .join("\n");
    Some((label, value))
}

fn leading_blanks(line: &str) -> usize {
    line.len() - line.trim_start_matches([' ', '\t']).len()
}

/// `\\` and `\'` are the only escapes in single quotes.
fn unescape_single(inner: &str) -> String {
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&next @ ('\\' | '\'')) = chars.peek() {
                out.push(next);
                chars.next();
                continue;
            }
        }
        out.push(c);
    }
    out
}

/// Double-quoted escapes. Unknown sequences keep their backslash.
fn unescape_double(inner: &str) -> String {
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let Some(&next) = chars.peek() else {
            out.push('\\');
            break;
        };
        let simple = match next {
            'n' => Some('\n'),
            't' => Some('\t'),
            'r' => Some('\r'),
            'v' => Some('\u{0B}'),
            'e' => Some('\u{1B}'),
            'f' => Some('\u{0C}'),
            '\\' => Some('\\'),
            '$' => Some('$'),
            '"' => Some('"'),
            _ => None,
        };
        if let Some(escaped) = simple {
            out.push(escaped);
            chars.next();
            continue;
        }
        match next {
            '0'..='7' => {
                let digits = take_digits(&mut chars, 3, 8);
                push_code(&mut out, u32::from_str_radix(&digits, 8).unwrap_or(0) & 0xFF);
            }
            'x' => {
                chars.next();
                let digits = take_digits(&mut chars, 2, 16);
                if digits.is_empty() {
                    out.push_str("\\x");
                } else {
                    push_code(&mut out, u32::from_str_radix(&digits, 16).unwrap_or(0));
                }
            }
            'u' => {
                chars.next();
                if chars.peek() != Some(&'{') {
                    out.push_str("\\u");
                    continue;
                }
                chars.next();
                let digits = take_digits(&mut chars, 6, 16);
                if chars.peek() == Some(&'}') {
                    chars.next();
                    let code = u32::from_str_radix(&digits, 16).unwrap_or(0);
                    out.push(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER));
                } else {
                    out.push_str("\\u{");
                    out.push_str(&digits);
                }
            }
            _ => out.push('\\'),
        }
    }
    out
}

fn take_digits(
    chars: &mut std::iter::Peekable<std::str::Chars<'_>>,
    max: usize,
    radix: u32,
) -> String {
    let mut digits = String::new();
    while digits.len() < max {
        match chars.peek() {
            Some(&c) if c.is_digit(radix) => {
                digits.push(c);
                chars.next();
            }
            _ => break,
        }
    }
    digits
}

/// A byte escape: ASCII values map to their character, the rest to the
/// matching Latin-1 code point.
fn push_code(out: &mut String, code: u32) {
    out.push(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER));
}
