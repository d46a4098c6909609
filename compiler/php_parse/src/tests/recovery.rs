use php_ir::NodeKind;
use pretty_assertions::assert_eq;

use super::{parse_ok, parse_tolerant};
use crate::{parse, ErrorCode, ParserOptions};

const MISSING_SEMICOLONS: &str = "<?php\n$a = 1\n$b = 2\necho 3;";

#[test]
fn test_tolerant_mode_collects_every_error() {
    let program = parse_tolerant(MISSING_SEMICOLONS);
    assert_eq!(program.errors.len(), 2);
    assert_eq!(program.children.len(), 3);
    assert_eq!(program.children[2].name(), "echo");

    let recorded: Vec<(u32, Option<&str>)> = program
        .errors
        .iter()
        .filter_map(|error| match &error.kind {
            NodeKind::Error { line, expected, .. } => Some((*line, expected.as_deref())),
            _ => None,
        })
        .collect();
    assert_eq!(recorded, [(3, Some(";")), (4, Some(";"))]);

    // a missing terminator is only listed; the statements stay intact
    let mut in_tree = 0;
    for child in &program.children {
        child.walk(&mut |node| in_tree += usize::from(node.is_error()));
    }
    assert_eq!(in_tree, 0);
    assert!(program.children[..2]
        .iter()
        .all(|node| matches!(node.kind, NodeKind::ExpressionStatement { .. })));
}

#[test]
fn test_strict_mode_stops_at_first_error() {
    let error =
        parse(MISSING_SEMICOLONS, None, &ParserOptions::default()).expect_err("missing ';'");
    assert_eq!(error.code, ErrorCode::E1001);
    assert_eq!(error.line, 3);
}

#[test]
fn test_error_nodes_stand_in_for_missing_children() {
    let program = parse_tolerant("<?php $a = ;");
    assert_eq!(program.errors.len(), 1);
    let NodeKind::ExpressionStatement { expression } = &program.children[0].kind else {
        panic!("expected expression statement");
    };
    let NodeKind::Assign { right, .. } = &expression.kind else {
        panic!("expected assignment");
    };
    assert!(right.is_error());
}

#[test]
fn test_junk_input_terminates() {
    let inputs = [
        "<?php )))",
        "<?php class {",
        "<?php function (",
        "<?php $a = [1, 2",
        "<?php if ($a",
        "<?php }}}",
        "<?php foreach",
        "<?php switch ($a) { echo 1; }",
        "<?php class A { 42 }",
        "<?php use ;",
        "<?php $a->",
        "<?php new",
    ];
    for source in inputs {
        let program = parse_tolerant(source);
        assert!(!program.errors.is_empty(), "{source:?} produced no errors");
        assert_eq!(program.loc.end.offset, source.len());
    }
}

#[test]
fn test_debug_mode_accepts_balanced_tree() {
    let options = ParserOptions::default().with_debug(true);
    let program = parse(
        "<?php class A { public function f() { return [1, fn($x) => $x]; } }",
        None,
        &options,
    )
    .expect("balanced tree");
    assert_eq!(program.children.len(), 1);
}

#[test]
fn test_empty_inputs() {
    assert!(parse_ok("").children.is_empty());
    assert!(parse_ok("<?php").children.is_empty());
    assert!(parse_ok("<?php ").children.is_empty());
}

#[test]
fn test_tracing_setup_is_repeatable() {
    crate::init_tracing();
    crate::init_tracing();
    let program = parse_tolerant("<?php $a = 1\n$b;");
    assert_eq!(program.errors.len(), 1);
}
