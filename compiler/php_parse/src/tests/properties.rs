//! Property-based tests over generated programs.

use proptest::prelude::*;

use crate::{parse, Node, ParserOptions, Program};

// Strategies

fn arb_variable() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,5}".prop_map(|name| format!("${name}"))
}

fn arb_leaf() -> impl Strategy<Value = String> {
    prop_oneof![
        arb_variable(),
        (0u32..10_000).prop_map(|n| n.to_string()),
        "[a-z ]{0,8}".prop_map(|s| format!("'{s}'")),
        Just("true".to_owned()),
        Just("null".to_owned()),
        Just("__LINE__".to_owned()),
    ]
}

fn arb_binop() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("+"),
        Just("-"),
        Just("*"),
        Just("."),
        Just("=="),
        Just("<"),
        Just("&&"),
        Just("??"),
        Just("and"),
        Just("instanceof"),
    ]
}

fn arb_expr() -> impl Strategy<Value = String> {
    arb_leaf().prop_recursive(4, 24, 3, |inner| {
        prop_oneof![
            (inner.clone(), arb_binop(), inner.clone())
                .prop_map(|(left, op, right)| format!("{left} {op} {right}")),
            inner.clone().prop_map(|e| format!("({e})")),
            inner.clone().prop_map(|e| format!("!{e}")),
            proptest::collection::vec(inner.clone(), 0..3)
                .prop_map(|args| format!("f({})", args.join(", "))),
            proptest::collection::vec(inner.clone(), 0..3)
                .prop_map(|items| format!("[{}]", items.join(", "))),
            (arb_variable(), inner.clone()).prop_map(|(v, e)| format!("{v}[{e}]")),
            (inner.clone(), inner.clone(), inner).prop_map(|(a, b, c)| format!("{a} ? {b} : {c}")),
        ]
    })
}

fn arb_simple_statement() -> impl Strategy<Value = String> {
    prop_oneof![
        (arb_variable(), arb_expr()).prop_map(|(v, e)| format!("{v} = {e};")),
        arb_expr().prop_map(|e| format!("echo {e};")),
        arb_expr().prop_map(|e| format!("return {e};")),
        arb_expr().prop_map(|e| format!("yield {e};")),
        arb_expr().prop_map(|e| format!("$v = (int) {e};")),
        Just(";".to_owned()),
        "[a-z ]{0,10}".prop_map(|s| format!("// {s}\n")),
        "[a-z ]{0,10}".prop_map(|s| format!("/* {s} */")),
    ]
}

fn arb_type() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just(""),
        Just("int "),
        Just("?int "),
        Just("array "),
        Just("callable "),
        Just("string "),
        Just("?Foo "),
        Just("\\Bar\\Baz "),
    ]
}

fn arb_parameters() -> impl Strategy<Value = String> {
    proptest::collection::vec((arb_type(), any::<bool>()), 0..4).prop_map(|params| {
        params
            .iter()
            .enumerate()
            .map(|(i, (hint, defaulted))| {
                let default = if *defaulted { " = null" } else { "" };
                format!("{hint}$p{i}{default}")
            })
            .collect::<Vec<_>>()
            .join(", ")
    })
}

fn arb_statement() -> impl Strategy<Value = String> {
    arb_simple_statement().prop_recursive(3, 16, 4, |inner| {
        let block = proptest::collection::vec(inner, 0..4).prop_map(|body| body.join("\n"));
        prop_oneof![
            (arb_expr(), block.clone(), block.clone())
                .prop_map(|(e, a, b)| format!("if ({e}) {{\n{a}\n}} else {{\n{b}\n}}")),
            (arb_expr(), block.clone()).prop_map(|(e, body)| format!("while ({e}) {{\n{body}\n}}")),
            (arb_expr(), block.clone()).prop_map(|(e, body)| {
                format!("foreach ({e} as $k => $v) {{\n{body}\n}}")
            }),
            ("[a-z]{1,6}", arb_parameters(), block).prop_map(|(name, params, body)| {
                format!("function func_{name}({params}) {{\n{body}\n}}")
            }),
        ]
    })
}

fn arb_program() -> impl Strategy<Value = String> {
    proptest::collection::vec(arb_statement(), 0..6)
        .prop_map(|statements| format!("<?php\n{}\n", statements.join("\n")))
}

/// Fragments glued together without regard for the grammar.
fn arb_soup() -> impl Strategy<Value = String> {
    let fragment = prop_oneof![
        Just("$a"),
        Just("1"),
        Just("("),
        Just(")"),
        Just("{"),
        Just("}"),
        Just("["),
        Just("]"),
        Just(";"),
        Just(","),
        Just("="),
        Just("+"),
        Just("?"),
        Just(":"),
        Just("->"),
        Just("::"),
        Just("=>"),
        Just("if"),
        Just("else"),
        Just("while"),
        Just("function"),
        Just("fn"),
        Just("class"),
        Just("new"),
        Just("echo"),
        Just("static"),
        Just("namespace"),
        Just("use"),
        Just("'s'"),
        Just("?>x<?php"),
        Just("// c\n"),
    ];
    proptest::collection::vec(fragment, 0..40)
        .prop_map(|parts| format!("<?php {}", parts.join(" ")))
}

// Invariants

/// Every child lies within its parent.
fn check_nesting(node: &Node) -> Result<(), String> {
    for child in node.children() {
        if !node.loc.contains(&child.loc) {
            return Err(format!(
                "{} {:?} does not contain {} {:?}",
                node.name(),
                node.loc,
                child.name(),
                child.loc
            ));
        }
        check_nesting(child)?;
    }
    Ok(())
}

fn count_attached(program: &Program) -> usize {
    let mut count = program.leading_comments.len() + program.trailing_comments.len();
    for child in &program.children {
        child.walk(&mut |node| {
            count += node.leading_comments.len() + node.trailing_comments.len();
        });
    }
    count
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn generated_programs_parse(source in arb_program()) {
        let program = parse(&source, None, &ParserOptions::default());
        prop_assert!(program.is_ok(), "{:?}: {:?}", source, program.err());
    }

    #[test]
    fn spans_nest(source in arb_program()) {
        let program = parse(&source, None, &ParserOptions::default()).unwrap();
        prop_assert_eq!(program.loc.start.offset, 0);
        prop_assert_eq!(program.loc.end.offset, source.len());
        for child in &program.children {
            prop_assert!(program.loc.contains(&child.loc));
            let nested = check_nesting(child);
            prop_assert!(nested.is_ok(), "{}", nested.unwrap_err());
        }
    }

    #[test]
    fn every_comment_is_attached_once(source in arb_program()) {
        let options = ParserOptions::default().with_extract_doc(true);
        let program = parse(&source, None, &options).unwrap();
        let collected = program.comments.as_ref().map_or(0, Vec::len);
        prop_assert_eq!(count_attached(&program), collected);
    }

    #[test]
    fn parsing_is_deterministic(source in arb_program()) {
        let options = ParserOptions::default().with_extract_doc(true).with_extract_tokens(true);
        let first = parse(&source, None, &options).unwrap();
        let second = parse(&source, None, &options).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn tolerant_mode_never_aborts(source in arb_soup()) {
        let program = parse(&source, None, &ParserOptions::tolerant());
        prop_assert!(program.is_ok(), "{:?}: {:?}", source, program.err());
        let program = program.unwrap();
        prop_assert_eq!(program.loc.end.offset, source.len());
        for error in &program.errors {
            prop_assert!(error.is_error());
        }
    }
}
