use super::*;
use crate::Position;
use pretty_assertions::assert_eq;

fn leaf(id: u32, kind: NodeKind, start: usize, end: usize) -> Node {
    Node {
        id: NodeId::new(id),
        kind,
        loc: Location::new(
            Position::new(1, u32::try_from(start).unwrap_or(0), start),
            Position::new(1, u32::try_from(end).unwrap_or(0), end),
        ),
        leading_comments: Vec::new(),
        trailing_comments: Vec::new(),
    }
}

fn var(id: u32, name: &str, start: usize) -> Node {
    leaf(
        id,
        NodeKind::Variable {
            name: VariableName::Named(name.to_owned()),
        },
        start,
        start + name.len() + 1,
    )
}

#[test]
fn test_names() {
    assert_eq!(NodeKind::Noop.name(), "noop");
    assert_eq!(
        NodeKind::Number {
            value: "1".to_owned()
        }
        .name(),
        "number"
    );
    assert_eq!(
        NodeKind::Coalesce {
            test: Box::new(var(0, "a", 0)),
            ifnull: Box::new(var(1, "b", 6)),
        }
        .name(),
        "coalesce"
    );
}

#[test]
fn test_children_in_source_order() {
    let foreach = leaf(
        4,
        NodeKind::Foreach {
            source: Box::new(var(0, "arr", 9)),
            key: Some(Box::new(var(1, "k", 17))),
            value: Box::new(var(2, "v", 23)),
            body: Box::new(leaf(3, NodeKind::Block { children: vec![] }, 27, 29)),
            shortform: false,
        },
        0,
        29,
    );

    let names: Vec<&str> = foreach.children().iter().map(|n| n.name()).collect();
    assert_eq!(names, vec!["variable", "variable", "variable", "block"]);

    let ids: Vec<u32> = foreach.children().iter().map(|n| n.id.raw()).collect();
    assert_eq!(ids, vec![0, 1, 2, 3]);
}

#[test]
fn test_walk_visits_dynamic_variable_name() {
    let inner = var(0, "name", 2);
    let outer = leaf(
        1,
        NodeKind::Variable {
            name: VariableName::Dynamic(Box::new(inner)),
        },
        0,
        7,
    );

    let mut seen = Vec::new();
    outer.walk(&mut |n| seen.push(n.id.raw()));
    assert_eq!(seen, vec![1, 0]);
}

#[test]
fn test_for_each_child_mut() {
    let mut bin = leaf(
        2,
        NodeKind::Bin {
            op: BinaryOp::Add,
            left: Box::new(var(0, "a", 0)),
            right: Box::new(var(1, "b", 5)),
        },
        0,
        7,
    );

    bin.for_each_child_mut(&mut |child| {
        child.trailing_comments.push(crate::Comment::new(
            crate::CommentKind::Line,
            "// x",
            Position::START,
        ));
    });

    for child in bin.children() {
        assert_eq!(child.trailing_comments.len(), 1);
    }
}

#[test]
fn test_program_walk_includes_errors() {
    let program = Program {
        id: NodeId::new(9),
        children: vec![var(0, "a", 6)],
        errors: vec![leaf(
            1,
            NodeKind::Error {
                message: "Parse Error".to_owned(),
                token: None,
                line: 1,
                expected: None,
            },
            8,
            8,
        )],
        comments: None,
        tokens: None,
        loc: Location::default(),
        leading_comments: Vec::new(),
        trailing_comments: Vec::new(),
    };

    let mut count = 0;
    program.walk(&mut |_| count += 1);
    assert_eq!(count, 2);
    assert!(program.errors[0].is_error());
}
