use super::*;
use pretty_assertions::assert_eq;

fn primed<'a>(source: &'a str, options: &ParserOptions) -> TokenStream<'a> {
    let mut stream = TokenStream::new(source, options);
    stream.advance();
    stream
}

fn kinds(source: &str, options: &ParserOptions) -> Vec<(TokenKind, String)> {
    let mut stream = primed(source, options);
    let mut out = Vec::new();
    while !stream.is_eof() {
        out.push((stream.kind(), stream.text().to_owned()));
        stream.advance();
    }
    out
}

#[test]
fn test_skips_whitespace_and_open_tag() {
    let tokens = kinds("<?php  $a = 1 ;", &ParserOptions::default());
    assert_eq!(
        tokens,
        vec![
            (TokenKind::Variable, "$a".to_owned()),
            (TokenKind::Equal, "=".to_owned()),
            (TokenKind::LNumber, "1".to_owned()),
            (TokenKind::Semicolon, ";".to_owned()),
        ]
    );
}

#[test]
fn test_close_tag_becomes_terminator() {
    let tokens = kinds("<?php $a ?>html", &ParserOptions::default());
    assert_eq!(
        tokens,
        vec![
            (TokenKind::Variable, "$a".to_owned()),
            (TokenKind::Semicolon, "?>".to_owned()),
            (TokenKind::InlineHtml, "html".to_owned()),
        ]
    );
}

#[test]
fn test_open_tag_with_echo_becomes_echo() {
    let tokens = kinds("<?= 1 ?>", &ParserOptions::default());
    assert_eq!(tokens[0], (TokenKind::Echo, "<?=".to_owned()));
}

#[test]
fn test_synthetic_terminator_keeps_boundary() {
    let mut stream = primed("<?php $a ?>x", &ParserOptions::default());
    stream.advance(); // past `$a`
    let after_var = stream.prev();
    assert!(stream.at_synthetic_terminator());
    stream.advance(); // past `?>`
    assert_eq!(stream.prev(), after_var);
    assert_eq!(stream.kind(), TokenKind::InlineHtml);
}

#[test]
fn test_prev_is_end_of_consumed_token() {
    let mut stream = primed("<?php foo ( ", &ParserOptions::default());
    stream.advance();
    assert_eq!(stream.prev(), Position::new(1, 9, 9));
    assert_eq!(stream.kind(), TokenKind::LParen);
}

#[test]
fn test_comments_skipped_without_extraction() {
    let tokens = kinds("<?php /** a */ $x; // b", &ParserOptions::default());
    assert_eq!(tokens.len(), 2);
}

#[test]
fn test_comments_collected_with_extraction() {
    let options = ParserOptions::default().with_extract_doc(true);
    let mut stream = primed("<?php /** a */ $x; # b\n", &options);
    while !stream.is_eof() {
        stream.advance();
    }
    let texts: Vec<_> = stream.comments().iter().map(|c| c.text.as_str()).collect();
    assert_eq!(texts, vec!["/** a */", "# b"]);
    assert!(stream.comments()[0].is_doc());
}

#[test]
fn test_token_log_records_raw_tokens() {
    let options = ParserOptions::default().with_extract_tokens(true);
    let mut stream = primed("<?php\n$c;", &options);
    while !stream.is_eof() {
        stream.advance();
    }
    let (_, log) = stream.take_collected();
    let log = log.unwrap_or_default();
    let names: Vec<_> = log.iter().map(|e| e.name).collect();
    assert_eq!(
        names,
        vec![Some("T_OPEN_TAG"), Some("T_VARIABLE"), None]
    );
    assert_eq!((log[1].line, log[1].start, log[1].end), (2, 6, 8));
}

#[test]
fn test_peek_does_not_reorder_log_or_comments() {
    let options = ParserOptions::default()
        .with_extract_tokens(true)
        .with_extract_doc(true);
    let mut stream = primed("<?php static /* c */ ::x;", &options);
    assert_eq!(stream.kind(), TokenKind::Static);
    assert_eq!(stream.peek(), TokenKind::DoubleColon);
    // the comment sits after the current token: not visible yet
    assert!(stream.comments().is_empty());
    stream.advance();
    assert_eq!(stream.comments().len(), 1);
    assert_eq!(stream.kind(), TokenKind::DoubleColon);
    while !stream.is_eof() {
        stream.advance();
    }
    let (_, log) = stream.take_collected();
    let texts: Vec<_> = log
        .unwrap_or_default()
        .into_iter()
        .map(|e| e.text)
        .collect();
    assert_eq!(
        texts,
        vec!["<?php ", "static", " ", "/* c */", " ", "::", "x", ";"]
    );
}

#[test]
fn test_fn_is_identifier_before_php74() {
    let old = ParserOptions::default().with_php74(false);
    assert_eq!(kinds("<?php fn", &old)[0].0, TokenKind::Identifier);
    assert_eq!(kinds("<?php fn", &ParserOptions::default())[0].0, TokenKind::Fn);
}

#[test]
fn test_halt_returns_rest_of_source() {
    let mut stream = primed("<?php __halt_compiler(); raw data", &ParserOptions::default());
    stream.advance();
    stream.advance();
    stream.advance();
    assert_eq!(stream.kind(), TokenKind::Semicolon);
    assert_eq!(stream.halt(), " raw data");
    assert!(stream.is_eof());
    stream.finish();
    assert_eq!(stream.prev().offset, 33);
}

#[test]
fn test_finish_moves_boundary_to_end() {
    let mut stream = primed("<?php $a;\n", &ParserOptions::default());
    while !stream.is_eof() {
        stream.advance();
    }
    stream.finish();
    assert_eq!(stream.prev(), Position::new(2, 0, 10));
}

#[test]
fn test_eof_sits_at_end_of_trivia() {
    let mut stream = primed("<?php $a; // tail\n", &ParserOptions::default());
    while !stream.is_eof() {
        stream.advance();
    }
    assert_eq!(stream.start(), Position::new(2, 0, 18));
}
