//! Comment and documentation block records.
//!
//! The parser collects comments in arrival order and threads each one onto
//! exactly one node as leading or trailing trivia.

use crate::{Position, Token, TokenKind};
use std::fmt;

/// A comment or documentation block lifted out of the token stream.
#[derive(Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Comment {
    pub kind: CommentKind,
    /// Full text including the delimiters.
    pub text: String,
    /// Byte offset of the first delimiter character.
    pub offset: usize,
    pub position: Position,
}

impl Comment {
    #[inline]
    pub fn new(kind: CommentKind, text: impl Into<String>, position: Position) -> Self {
        Comment {
            kind,
            text: text.into(),
            offset: position.offset,
            position,
        }
    }

    /// Lift a comment token into a record, or `None` for any other kind.
    pub fn from_token(token: &Token<'_>) -> Option<Self> {
        let kind = match token.kind {
            TokenKind::DocComment => CommentKind::Doc,
            TokenKind::Comment if token.text.starts_with("/*") => CommentKind::Block,
            TokenKind::Comment => CommentKind::Line,
            _ => return None,
        };
        Some(Comment::new(kind, token.text, token.start))
    }

    pub fn is_doc(&self) -> bool {
        self.kind == CommentKind::Doc
    }
}

impl fmt::Debug for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?} @ {:?}", self.kind, self.text, self.position)
    }
}

/// Comment flavour.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommentKind {
    /// `// text` or `# text`
    Line,
    /// `/* text */`
    Block,
    /// `/** text */`
    Doc,
}
