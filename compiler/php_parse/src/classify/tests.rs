use super::*;

#[test]
fn test_token_set_empty() {
    let set = TokenSet::new();
    assert!(set.is_empty());
    assert_eq!(set.count(), 0);
    assert!(!set.contains(TokenKind::Variable));
}

#[test]
fn test_token_set_spans_all_words() {
    // first, middle and last discriminants land in different words
    let set = TokenSet::new()
        .with(TokenKind::InlineHtml)
        .with(TokenKind::Spaceship)
        .with(TokenKind::Eof);
    assert_eq!(set.count(), 3);
    assert!(set.contains(TokenKind::InlineHtml));
    assert!(set.contains(TokenKind::Spaceship));
    assert!(set.contains(TokenKind::Eof));
    assert!(!set.contains(TokenKind::BadCharacter));
}

#[test]
fn test_token_set_union() {
    let a = TokenSet::of(&[TokenKind::Comma, TokenKind::Semicolon]);
    let b = TokenSet::of(&[TokenKind::Semicolon, TokenKind::Colon]);
    let both = a.union(b);
    assert_eq!(both.count(), 3);
    assert!(both.contains(TokenKind::Colon));
}

#[test]
fn test_expr_contains_variable_and_scalar_starters() {
    for kind in [
        TokenKind::Variable,
        TokenKind::Dollar,
        TokenKind::Identifier,
        TokenKind::LNumber,
        TokenKind::ConstantString,
        TokenKind::LBracket,
        TokenKind::Line,
        TokenKind::IntCast,
        TokenKind::New,
        TokenKind::Clone,
        TokenKind::List,
        TokenKind::Function,
    ] {
        assert!(EXPR.contains(kind), "{kind:?} should start an expression");
    }
    assert!(!EXPR.contains(TokenKind::Semicolon));
    assert!(!EXPR.contains(TokenKind::Echo));
}

#[test]
fn test_categories_map_to_sets() {
    assert_eq!(Category::Eos.set(), EOS);
    assert!(Category::Eos.set().contains(TokenKind::InlineHtml));
    assert!(Category::MemberFlags.set().contains(TokenKind::Final));
    assert_eq!(Category::MagicConst.set().count(), 8);
    assert!(Category::Identifier.set().contains(TokenKind::Class));
    assert!(!Category::Identifier.set().contains(TokenKind::Identifier));
    assert_eq!(Category::Expr.name(), "EXPR");
}

#[test]
fn test_sync_excludes_expression_starters() {
    assert!(SYNC.contains(TokenKind::RParen));
    assert!(!SYNC.contains(TokenKind::Variable));
}
