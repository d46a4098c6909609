use php_ir::{CommentKind, NodeKind, UnaryOp};
use pretty_assertions::assert_eq;

use super::parse_ok;
use crate::{parse, ParserOptions};

const DEPTH: usize = 100_000;

#[test]
fn test_deep_prefix_chain() {
    let source = format!("<?php {}$a;", "!".repeat(DEPTH));
    let program = parse_ok(&source);

    let mut nots = 0;
    let mut variables = 0;
    program.walk(&mut |node| match &node.kind {
        NodeKind::Unary {
            op: UnaryOp::Not, ..
        } => nots += 1,
        NodeKind::Variable { .. } => variables += 1,
        _ => {}
    });
    assert_eq!(nots, DEPTH);
    assert_eq!(variables, 1);
    drop(program);
}

#[test]
fn test_deep_parentheses() {
    let source = format!("<?php {}$a{};", "(".repeat(DEPTH), ")".repeat(DEPTH));
    let program = parse_ok(&source);
    assert_eq!(program.children.len(), 1);
    assert_eq!(program.loc.end.offset, source.len());
    drop(program);
}

#[test]
fn test_deep_casts_and_variable_variables() {
    let source = format!("<?php {}{}a;", "(int)".repeat(DEPTH), "$".repeat(DEPTH));
    let program = parse_ok(&source);
    let mut casts = 0;
    program.walk(&mut |node| {
        if matches!(node.kind, NodeKind::Cast { .. }) {
            casts += 1;
        }
    });
    assert_eq!(casts, DEPTH);
}

#[test]
fn test_deep_blocks() {
    let source = format!("<?php {}echo 1;{}", "{".repeat(DEPTH), "}".repeat(DEPTH));
    let program = parse_ok(&source);
    assert_eq!(program.children.len(), 1);
}

#[test]
fn test_trailing_comment_reaches_deep_tree() {
    let source = format!("<?php {}$a; // end", "~".repeat(DEPTH));
    let options = ParserOptions::default().with_extract_doc(true);
    let mut program = parse(&source, None, &options).unwrap();

    let mut trailing = Vec::new();
    program.walk_mut(&mut |node| trailing.extend(node.trailing_comments.drain(..)));
    trailing.append(&mut program.trailing_comments);
    assert_eq!(trailing.len(), 1);
    assert_eq!(trailing[0].kind, CommentKind::Line);
    assert_eq!(trailing[0].text, "// end");
}

#[test]
fn test_deep_tree_in_tolerant_mode() {
    let source = format!("<?php {}$a = ;", "@".repeat(DEPTH));
    let program = parse(&source, None, &ParserOptions::tolerant()).unwrap();
    assert_eq!(program.errors.len(), 1);
    let mut count = 0;
    program.walk(&mut |_| count += 1);
    assert!(count > DEPTH);
}
