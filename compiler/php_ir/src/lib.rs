//! PHP IR - tokens, positions and syntax tree types.
//!
//! This crate holds the data shared by the scanner and the parser:
//! - [`Position`] / [`Location`] for exact source coordinates
//! - [`TokenKind`] / [`Token`] for scanner output
//! - [`Comment`] for trivia lifted out of the token stream
//! - [`Node`] / [`NodeKind`] / [`Program`] for the finished tree
//!
//! Enable the `serde` feature to serialize trees.

mod comment;
mod node;
mod position;
mod token;

pub use comment::{Comment, CommentKind};
pub use node::{
    AssignOp, BinaryOp, CastType, DeclareMode, EncapsedKind, Modifiers, NameResolution, Node,
    NodeId, NodeKind, Program, UnaryOp, UpdateOp, UseKind, VariableName, Visibility,
};
pub use position::{Anchor, Location, Position};
pub use token::{Token, TokenKind, TokenLogEntry};
