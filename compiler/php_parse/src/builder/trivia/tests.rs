use super::*;
use php_ir::CommentKind;
use pretty_assertions::assert_eq;

fn comment(text: &str, offset: usize) -> Comment {
    Comment::new(CommentKind::Line, text, Position::new(1, offset as u32, offset))
}

fn at(offset: usize) -> Position {
    Position::new(1, offset as u32, offset)
}

#[test]
fn test_drain_leading_takes_unread_once() {
    let queue = vec![comment("// a", 0), comment("// b", 5)];
    let mut trivia = Trivia::default();
    assert_eq!(trivia.drain_leading(&queue).len(), 2);
    assert!(trivia.drain_leading(&queue).is_empty());
}

#[test]
fn test_post_attach_parks_comments_before_boundary() {
    let queue = vec![comment("// a", 4), comment("// b", 20)];
    let mut trivia = Trivia::default();
    assert!(trivia
        .post_attach(NodeId::new(0), &[], at(3), false)
        .is_empty());

    // boundary at 10: only `// a` trails node 0
    let own = trivia.post_attach(NodeId::new(1), &queue, at(10), false);
    assert!(own.is_empty());
    assert_eq!(trivia.deferred.get(&NodeId::new(0)).map(Vec::len), Some(1));

    // `// b` is still unread and becomes leading of the next node
    let leading = trivia.drain_leading(&queue);
    assert_eq!(leading, vec![comment("// b", 20)]);
}

#[test]
fn test_post_attach_keeps_remainder_at_eof_without_previous_node() {
    let queue = vec![comment("// only", 6)];
    let mut trivia = Trivia::default();
    let own = trivia.post_attach(NodeId::new(0), &queue, at(13), true);
    assert_eq!(own, queue);
    assert!(trivia.drain_leading(&queue).is_empty());
}

#[test]
fn test_post_attach_without_eof_or_previous_node_leaves_queue() {
    let queue = vec![comment("// x", 0)];
    let mut trivia = Trivia::default();
    assert!(trivia
        .post_attach(NodeId::new(0), &queue, at(10), false)
        .is_empty());
    assert_eq!(trivia.drain_leading(&queue).len(), 1);
}
