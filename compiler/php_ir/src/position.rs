//! Source coordinates and node locations.
//!
//! A [`Position`] is an exact `(line, column, offset)` triple. A [`Location`]
//! spans two positions and may carry extra named positions ([`Anchor`]s) for
//! interior punctuation that tooling needs to find without re-lexing.

use smallvec::SmallVec;
use std::fmt;

/// An exact source coordinate.
///
/// - `line` is 1-based
/// - `column` is 0-based and counted in characters
/// - `offset` is the 0-based byte offset into the source
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub offset: usize,
}

impl Position {
    /// The first byte of any source text.
    pub const START: Position = Position {
        line: 1,
        column: 0,
        offset: 0,
    };

    #[inline]
    pub const fn new(line: u32, column: u32, offset: usize) -> Self {
        Position {
            line,
            column,
            offset,
        }
    }

    /// Step the column back over `width` characters on the same line.
    ///
    /// The byte offset is kept: an anchor built from the end of a
    /// just-consumed token reports the token's first column and the
    /// boundary right after it.
    #[inline]
    #[must_use]
    pub const fn back(self, width: u32) -> Self {
        Position {
            line: self.line,
            column: self.column.saturating_sub(width),
            offset: self.offset,
        }
    }

    /// Advance past `text`, tracking newlines.
    #[must_use]
    pub fn advance(self, text: &str) -> Self {
        let mut line = self.line;
        let mut column = self.column;
        for ch in text.chars() {
            if ch == '\n' {
                line += 1;
                column = 0;
            } else {
                column += 1;
            }
        }
        Position {
            line,
            column,
            offset: self.offset + text.len(),
        }
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}@{}", self.line, self.column, self.offset)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Role of an auxiliary position recorded on a node's location.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Anchor {
    /// Opening `(` of a loop header.
    LeftParen,
    /// Closing `)` of a loop header.
    RightParen,
    /// First `;` of a counted loop header.
    FirstSemicolon,
    /// Second `;` of a counted loop header.
    SecondSemicolon,
    /// The `as` keyword of a collection loop.
    As,
    /// The `=>` separating key and value of a collection loop.
    Arrow,
}

/// Source span of a node plus its named auxiliary positions.
#[derive(Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub start: Position,
    pub end: Position,
    anchors: SmallVec<[(Anchor, Position); 2]>,
}

impl Location {
    #[inline]
    pub fn new(start: Position, end: Position) -> Self {
        Location {
            start,
            end,
            anchors: SmallVec::new(),
        }
    }

    /// Look up a named auxiliary position.
    pub fn anchor(&self, anchor: Anchor) -> Option<Position> {
        self.anchors
            .iter()
            .find(|(role, _)| *role == anchor)
            .map(|(_, pos)| *pos)
    }

    /// Record (or overwrite) a named auxiliary position.
    pub fn set_anchor(&mut self, anchor: Anchor, pos: Position) {
        if let Some(slot) = self.anchors.iter_mut().find(|(role, _)| *role == anchor) {
            slot.1 = pos;
        } else {
            self.anchors.push((anchor, pos));
        }
    }

    /// All auxiliary positions, in recording order.
    pub fn anchors(&self) -> impl Iterator<Item = (Anchor, Position)> + '_ {
        self.anchors.iter().copied()
    }

    /// Whether `other` lies within this span (inclusive on both ends).
    pub fn contains(&self, other: &Location) -> bool {
        self.start.offset <= other.start.offset && other.end.offset <= self.end.offset
    }

    /// Whether `pos` lies within this span (inclusive on both ends).
    pub fn contains_position(&self, pos: Position) -> bool {
        self.start.offset <= pos.offset && pos.offset <= self.end.offset
    }
}

impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}..{:?}", self.start, self.end)?;
        if !self.anchors.is_empty() {
            write!(f, " {:?}", self.anchors)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
