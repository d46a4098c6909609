use super::*;
use logos::Logos;

fn raw(source: &str) -> Vec<(Result<RawToken, ()>, &str)> {
    let mut lexer = RawToken::lexer(source);
    let mut out = Vec::new();
    while let Some(token) = lexer.next() {
        out.push((token, lexer.slice()));
    }
    out
}

#[test]
fn test_keywords_ignore_case() {
    let tokens = raw("FOREACH Function fn");
    assert_eq!(tokens[0], (Ok(RawToken::Foreach), "FOREACH"));
    assert_eq!(tokens[2], (Ok(RawToken::Function), "Function"));
    assert_eq!(tokens[4], (Ok(RawToken::Fn), "fn"));
}

#[test]
fn test_identifier_prefixed_by_keyword() {
    let tokens = raw("format");
    assert_eq!(tokens, vec![(Ok(RawToken::Identifier), "format")]);
}

#[test]
fn test_line_comment_stops_before_close_tag() {
    let tokens = raw("// note ?>rest");
    assert_eq!(tokens[0], (Ok(RawToken::LineComment), "// note "));
    assert_eq!(tokens[1], (Ok(RawToken::CloseTag), "?>"));
}

#[test]
fn test_line_comment_stops_before_newline() {
    let tokens = raw("# hash\n$a");
    assert_eq!(tokens[0], (Ok(RawToken::LineComment), "# hash"));
    assert_eq!(tokens[1], (Ok(RawToken::Whitespace), "\n"));
}

#[test]
fn test_block_and_doc_comments() {
    let tokens = raw("/* a */ /** b */ /**/");
    assert_eq!(
        tokens[0],
        (Ok(RawToken::BlockComment(CommentStyle::Block)), "/* a */")
    );
    assert_eq!(
        tokens[2],
        (Ok(RawToken::BlockComment(CommentStyle::Doc)), "/** b */")
    );
    assert_eq!(
        tokens[4],
        (Ok(RawToken::BlockComment(CommentStyle::Block)), "/**/")
    );
}

#[test]
fn test_unterminated_block_comment_runs_to_end() {
    let tokens = raw("/* open");
    assert_eq!(
        tokens,
        vec![(Ok(RawToken::BlockComment(CommentStyle::Block)), "/* open")]
    );
}

#[test]
fn test_casts() {
    let tokens = raw("(int) ( string ) (BOOLEAN)");
    assert_eq!(tokens[0], (Ok(RawToken::LParen(Paren::Cast(TokenKind::IntCast))), "(int)"));
    assert_eq!(tokens[2].0, Ok(RawToken::LParen(Paren::Cast(TokenKind::StringCast))));
    assert_eq!(tokens[2].1, "( string )");
    assert_eq!(tokens[4].0, Ok(RawToken::LParen(Paren::Cast(TokenKind::BoolCast))));
}

#[test]
fn test_paren_before_type_name_is_plain() {
    let tokens = raw("(int $a");
    assert_eq!(tokens[0], (Ok(RawToken::LParen(Paren::Open)), "("));
    assert_eq!(tokens[1], (Ok(RawToken::Identifier), "int"));

    let tokens = raw("(array $a, (integer)");
    assert_eq!(tokens[0], (Ok(RawToken::LParen(Paren::Open)), "("));
    assert_eq!(tokens[1], (Ok(RawToken::Array), "array"));

    let tokens = raw("(\n int)");
    assert_eq!(tokens[0], (Ok(RawToken::LParen(Paren::Open)), "("));
    assert_eq!(raw("()")[0], (Ok(RawToken::LParen(Paren::Open)), "("));
}

#[test]
fn test_yield_and_yield_from() {
    let tokens = raw("yield $a");
    assert_eq!(tokens[0], (Ok(RawToken::Yield(YieldForm::Plain)), "yield"));
    assert_eq!(tokens[1], (Ok(RawToken::Whitespace), " "));

    let tokens = raw("YIELD \n From gen()");
    assert_eq!(
        tokens[0],
        (Ok(RawToken::Yield(YieldForm::From)), "YIELD \n From")
    );

    // `fromage` is an identifier, not the `from` keyword
    let tokens = raw("yield fromage");
    assert_eq!(tokens[0], (Ok(RawToken::Yield(YieldForm::Plain)), "yield"));
    assert_eq!(tokens[2], (Ok(RawToken::Identifier), "fromage"));
    assert_eq!(raw("yield")[0], (Ok(RawToken::Yield(YieldForm::Plain)), "yield"));
}

#[test]
fn test_numbers() {
    let tokens = raw("10 0x1F 1.5 .5 1e3 1_000");
    let kinds: Vec<_> = tokens
        .iter()
        .filter(|(t, _)| *t != Ok(RawToken::Whitespace))
        .map(|(t, _)| *t)
        .collect();
    assert_eq!(
        kinds,
        vec![
            Ok(RawToken::LNumber),
            Ok(RawToken::LNumber),
            Ok(RawToken::DNumber),
            Ok(RawToken::DNumber),
            Ok(RawToken::DNumber),
            Ok(RawToken::LNumber),
        ]
    );
}

#[test]
fn test_heredoc_and_nowdoc() {
    let source = "<<<EOT\nhello $name\nEOT;";
    let tokens = raw(source);
    assert_eq!(
        tokens[0],
        (
            Ok(RawToken::Heredoc(HeredocStyle::Heredoc)),
            "<<<EOT\nhello $name\nEOT"
        )
    );
    assert_eq!(tokens[1], (Ok(RawToken::Semicolon), ";"));

    let tokens = raw("<<<'EOT'\n  raw\n  EOT\n");
    assert_eq!(tokens[0].0, Ok(RawToken::Heredoc(HeredocStyle::Nowdoc)));
    assert_eq!(tokens[0].1, "<<<'EOT'\n  raw\n  EOT");
}

#[test]
fn test_heredoc_label_must_end_line() {
    let tokens = raw("<<<A\nAB\nA\n");
    assert_eq!(tokens[0].1, "<<<A\nAB\nA");
}

#[test]
fn test_double_quoted_classification() {
    assert_eq!(
        RawToken::DoubleQuoted.kind("\"plain\""),
        TokenKind::ConstantString
    );
    assert_eq!(
        RawToken::DoubleQuoted.kind("\"cost: \\$5\""),
        TokenKind::ConstantString
    );
    assert_eq!(
        RawToken::DoubleQuoted.kind("\"hi $name\""),
        TokenKind::EncapsedString
    );
    assert_eq!(
        RawToken::DoubleQuoted.kind("\"hi {$a->b}\""),
        TokenKind::EncapsedString
    );
}

#[test]
fn test_operators_longest_match() {
    let tokens = raw("??= ?? <=> === !== ... ->");
    let kinds: Vec<_> = tokens
        .iter()
        .filter(|(t, _)| *t != Ok(RawToken::Whitespace))
        .map(|(t, _)| *t)
        .collect();
    assert_eq!(
        kinds,
        vec![
            Ok(RawToken::CoalesceEqual),
            Ok(RawToken::Coalesce),
            Ok(RawToken::Spaceship),
            Ok(RawToken::IsIdentical),
            Ok(RawToken::IsNotIdentical),
            Ok(RawToken::Ellipsis),
            Ok(RawToken::ObjectOperator),
        ]
    );
}
