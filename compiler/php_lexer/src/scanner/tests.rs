use super::*;
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> Vec<(TokenKind, &str)> {
    crate::tokenize(source)
        .into_iter()
        .map(|t| (t.kind, t.text))
        .collect()
}

#[test]
fn test_inline_html_then_php() {
    assert_eq!(
        kinds("<p><?php echo 1; ?>\n</p>"),
        vec![
            (TokenKind::InlineHtml, "<p>"),
            (TokenKind::OpenTag, "<?php "),
            (TokenKind::Echo, "echo"),
            (TokenKind::Whitespace, " "),
            (TokenKind::LNumber, "1"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Whitespace, " "),
            (TokenKind::CloseTag, "?>\n"),
            (TokenKind::InlineHtml, "</p>"),
        ]
    );
}

#[test]
fn test_open_tag_with_echo() {
    assert_eq!(
        kinds("<?= $a ?>"),
        vec![
            (TokenKind::OpenTagWithEcho, "<?="),
            (TokenKind::Whitespace, " "),
            (TokenKind::Variable, "$a"),
            (TokenKind::Whitespace, " "),
            (TokenKind::CloseTag, "?>"),
        ]
    );
}

#[test]
fn test_open_tag_needs_whitespace() {
    // `<?phpx` is not a tag
    assert_eq!(kinds("<?phpx"), vec![(TokenKind::InlineHtml, "<?phpx")]);
    assert_eq!(kinds("<?php"), vec![(TokenKind::OpenTag, "<?php")]);
    assert_eq!(kinds("<?PHP\r\n")[0], (TokenKind::OpenTag, "<?PHP\r\n"));
}

#[test]
fn test_positions_track_lines_and_columns() {
    let tokens: Vec<_> = Scanner::new("<?php\n  $a;\n$b").collect();
    let a = tokens
        .iter()
        .find(|t| t.text == "$a")
        .map(|t| (t.start, t.end));
    assert_eq!(a, Some((Position::new(2, 2, 8), Position::new(2, 4, 10))));

    let b = tokens.last().map(|t| (t.kind, t.start));
    assert_eq!(b, Some((TokenKind::Variable, Position::new(3, 0, 12))));
}

#[test]
fn test_tokens_are_contiguous() {
    let source = "<html><?php /** doc */ $x = \"a $b\"; // c\n?>tail<?= 1 ?>";
    let joined: String = Scanner::new(source).map(|t| t.text).collect();
    assert_eq!(joined, source);
}

#[test]
fn test_bad_character() {
    let tokens = kinds("<?php \u{1}");
    assert_eq!(tokens[1].0, TokenKind::BadCharacter);
}

#[test]
fn test_end_position() {
    let mut scanner = Scanner::new("<?php\n$a;\n");
    assert_eq!(scanner.end_position(), Position::new(3, 0, 10));
    while scanner.next_token().is_some() {}
    assert_eq!(scanner.position(), Position::new(3, 0, 10));
}

#[test]
fn test_set_input_restarts() {
    let mut scanner = Scanner::new("<?php $a;");
    scanner.next_token();
    scanner.set_input("text");
    assert_eq!(
        scanner.next_token().map(|t| t.kind),
        Some(TokenKind::InlineHtml)
    );
}

#[test]
fn test_typed_parameter_and_cast() {
    let significant: Vec<_> = kinds("<?php f(int $a, (int) $b);")
        .into_iter()
        .filter(|(kind, _)| *kind != TokenKind::Whitespace)
        .collect();
    assert_eq!(
        significant,
        vec![
            (TokenKind::OpenTag, "<?php "),
            (TokenKind::Identifier, "f"),
            (TokenKind::LParen, "("),
            (TokenKind::Identifier, "int"),
            (TokenKind::Variable, "$a"),
            (TokenKind::Comma, ","),
            (TokenKind::IntCast, "(int)"),
            (TokenKind::Variable, "$b"),
            (TokenKind::RParen, ")"),
            (TokenKind::Semicolon, ";"),
        ]
    );
}

#[test]
fn test_yield_forms() {
    assert_eq!(
        kinds("<?php yield $a;")[1..3],
        [(TokenKind::Yield, "yield"), (TokenKind::Whitespace, " ")]
    );
    assert_eq!(
        kinds("<?php yield from $a;")[1],
        (TokenKind::YieldFrom, "yield from")
    );
}
