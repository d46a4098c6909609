use php_ir::{Comment, CommentKind, NodeKind};
use pretty_assertions::assert_eq;

use crate::{parse, ParserOptions, Program};

const DOCUMENTED: &str = "<?php
/** Adds. */
function add($a, $b) {
    // sum
    return $a + $b; // done
}
# last
$x = add(1, 2);
/* tail */
";

fn with_comments(source: &str) -> Program {
    parse(
        source,
        None,
        &ParserOptions::default().with_extract_doc(true),
    )
    .unwrap()
}

/// Every attached comment, in tree order.
fn attached(program: &Program) -> Vec<Comment> {
    let mut found = program.leading_comments.clone();
    for child in &program.children {
        child.walk(&mut |node| {
            found.extend(node.leading_comments.iter().cloned());
            found.extend(node.trailing_comments.iter().cloned());
        });
    }
    found.extend(program.trailing_comments.iter().cloned());
    found
}

#[test]
fn test_each_comment_attached_once() {
    let program = with_comments(DOCUMENTED);
    let collected = program.comments.clone().expect("comments are extracted");
    assert_eq!(collected.len(), 5);

    let mut attached = attached(&program);
    attached.sort_by_key(|comment| comment.offset);
    assert_eq!(attached, collected);
}

#[test]
fn test_doc_comment_leads_function() {
    let program = with_comments(DOCUMENTED);
    let function = &program.children[0];
    assert_eq!(function.name(), "function");
    assert_eq!(function.leading_comments.len(), 1);
    assert_eq!(function.leading_comments[0].kind, CommentKind::Doc);
    assert_eq!(function.leading_comments[0].text, "/** Adds. */");

    let statement = &program.children[1];
    assert_eq!(statement.leading_comments[0].text, "# last");
}

#[test]
fn test_comment_after_statement_trails_it() {
    let program = with_comments(DOCUMENTED);
    let NodeKind::Function { body, .. } = &program.children[0].kind else {
        panic!("expected function");
    };
    let NodeKind::Block { children } = &body.kind else {
        panic!("expected block");
    };
    let statement = &children[0];
    assert_eq!(statement.name(), "return");
    assert_eq!(statement.leading_comments[0].text, "// sum");
    assert_eq!(statement.trailing_comments[0].text, "// done");
}

#[test]
fn test_extraction_off_keeps_no_comments() {
    let program = parse(DOCUMENTED, None, &ParserOptions::default()).unwrap();
    assert!(program.comments.is_none());
    assert!(attached(&program).is_empty());
}

#[test]
fn test_comments_in_empty_switch_land_on_noop() {
    let program = with_comments("<?php switch ($a) { /* none */ }");
    let NodeKind::Switch { body, .. } = &program.children[0].kind else {
        panic!("expected switch");
    };
    let NodeKind::Block { children } = &body.kind else {
        panic!("expected block");
    };
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].name(), "noop");
    assert_eq!(children[0].leading_comments[0].text, "/* none */");
}

#[test]
fn test_token_log() {
    let options = ParserOptions::default().with_extract_tokens(true);
    let mut program = parse("<?php echo 1; // c", None, &options).unwrap();
    let tokens = program.tokens.take().expect("token log");

    assert_eq!(tokens[0].text, "<?php ");
    assert_eq!(tokens[0].name, Some("T_OPEN_TAG"));
    assert_eq!(tokens[0].start, 0);
    // whitespace and comments are logged too
    let texts: Vec<&str> = tokens.iter().map(|entry| entry.text.as_str()).collect();
    assert_eq!(texts, ["<?php ", "echo", " ", "1", ";", " ", "// c"]);

    let program = parse("<?php echo 1;", None, &ParserOptions::default()).unwrap();
    assert!(program.tokens.is_none());
}
