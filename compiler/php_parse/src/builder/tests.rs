#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::ParserOptions;
use pretty_assertions::assert_eq;

fn primed<'a>(source: &'a str, options: ParserOptions) -> Parser<'a> {
    let mut parser = Parser::new(source, "eval", options);
    parser.advance();
    parser
}

#[test]
fn test_finish_ends_at_previous_token() {
    let mut parser = primed("<?php foo bar baz", ParserOptions::default());
    let start = parser.open();
    parser.advance();
    parser.advance();
    let node = parser.finish(start, NodeKind::Noop);

    assert_eq!(node.loc.start, Position::new(1, 6, 6));
    assert_eq!(node.loc.end, Position::new(1, 13, 13));
    assert_eq!(parser.open_nodes, 0);
}

#[test]
fn test_empty_node_is_zero_width() {
    let mut parser = primed("<?php foo", ParserOptions::default());
    let start = parser.open();
    let node = parser.finish(start, NodeKind::Noop);
    assert_eq!(node.loc.start, node.loc.end);
    assert_eq!(node.loc.start.offset, 6);
}

#[test]
fn test_open_at_spans_from_earlier_position() {
    let mut parser = primed("<?php a + b", ParserOptions::default());
    let left = parser.open();
    parser.advance();
    let left = parser.finish(left, NodeKind::Noop);
    let wrapper = parser.open_at(left.loc.start);
    parser.advance();
    parser.advance();
    let node = parser.finish(wrapper, NodeKind::Noop);
    assert_eq!(node.loc.start.offset, 6);
    assert_eq!(node.loc.end.offset, 11);
    assert!(node.loc.contains(&left.loc));
}

#[test]
fn test_ids_are_unique() {
    let mut parser = primed("<?php a b", ParserOptions::default());
    let first = parser.open();
    let first = parser.finish(first, NodeKind::Noop);
    let second = parser.open();
    let second = parser.finish(second, NodeKind::Noop);
    assert_ne!(first.id, second.id);
}

#[test]
fn test_abandon_hands_over_leading_comments() {
    let options = ParserOptions::default().with_extract_doc(true);
    let mut parser = primed("<?php /* a */ foo", options);
    let outer = parser.open();
    let inner = parser.open();
    parser.advance();
    let mut node = parser.finish(inner, NodeKind::Noop);
    assert!(node.leading_comments.is_empty());

    parser.abandon(outer, &mut node);
    assert_eq!(node.leading_comments.len(), 1);
    assert_eq!(node.leading_comments[0].text, "/* a */");
    assert_eq!(parser.open_nodes, 0);
}

#[test]
fn test_comments_ignored_without_extraction() {
    let mut parser = primed("<?php /* a */ foo", ParserOptions::default());
    let start = parser.open();
    parser.advance();
    let node = parser.finish(start, NodeKind::Noop);
    assert!(node.leading_comments.is_empty());
}
