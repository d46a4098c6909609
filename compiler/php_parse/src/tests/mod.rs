//! End-to-end parser tests.
//!
//! - `statements`: statement forms and declarations
//! - `loops`: loop forms and header anchors
//! - `nesting`: inputs nested far deeper than the native stack allows
//! - `recovery`: fault-tolerant mode and strict aborts
//! - `trivia`: comment attachment and the token log
//! - `properties`: invariants over generated inputs

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod nesting;
mod properties;
mod recovery;
mod trivia;

use crate::{parse, Node, ParserOptions, Program};

/// Parse in strict mode, failing the test on any error.
pub(crate) fn parse_ok(source: &str) -> Program {
    parse(source, None, &ParserOptions::default())
        .unwrap_or_else(|error| panic!("{source:?} failed: {error}"))
}

pub(crate) fn parse_tolerant(source: &str) -> Program {
    parse(source, None, &ParserOptions::tolerant())
        .unwrap_or_else(|error| panic!("{source:?} aborted: {error}"))
}

/// The only top-level node of `source`.
pub(crate) fn single(source: &str) -> Node {
    let mut program = parse_ok(source);
    assert_eq!(program.children.len(), 1, "{:?}", program.children);
    program.children.remove(0)
}

/// Node names of the program body.
pub(crate) fn names(program: &Program) -> Vec<&'static str> {
    program.children.iter().map(Node::name).collect()
}
