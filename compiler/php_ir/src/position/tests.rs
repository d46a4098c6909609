use super::*;

#[test]
fn test_advance_single_line() {
    let pos = Position::START.advance("<?php ");
    assert_eq!(pos, Position::new(1, 6, 6));
}

#[test]
fn test_advance_counts_chars_not_bytes() {
    // 'é' is two bytes but one column
    let pos = Position::START.advance("$é");
    assert_eq!(pos.column, 2);
    assert_eq!(pos.offset, 3);
}

#[test]
fn test_advance_across_newlines() {
    let pos = Position::START.advance("a\nbc\nd");
    assert_eq!(pos, Position::new(3, 1, 6));
}

#[test]
fn test_back_moves_column_only() {
    let pos = Position::new(2, 7, 19).back(2);
    assert_eq!(pos, Position::new(2, 5, 19));
}

#[test]
fn test_back_saturates() {
    let pos = Position::new(1, 1, 1).back(2);
    assert_eq!(pos, Position::new(1, 0, 1));
}

#[test]
fn test_anchor_set_and_overwrite() {
    let mut loc = Location::new(Position::START, Position::new(1, 10, 10));
    assert_eq!(loc.anchor(Anchor::As), None);

    loc.set_anchor(Anchor::As, Position::new(1, 3, 3));
    loc.set_anchor(Anchor::Arrow, Position::new(1, 6, 6));
    loc.set_anchor(Anchor::As, Position::new(1, 4, 4));

    assert_eq!(loc.anchor(Anchor::As), Some(Position::new(1, 4, 4)));
    assert_eq!(loc.anchors().count(), 2);
}

#[test]
fn test_contains() {
    let outer = Location::new(Position::new(1, 0, 0), Position::new(1, 10, 10));
    let inner = Location::new(Position::new(1, 2, 2), Position::new(1, 10, 10));
    let outside = Location::new(Position::new(1, 2, 2), Position::new(1, 11, 11));

    assert!(outer.contains(&inner));
    assert!(!outer.contains(&outside));
    assert!(outer.contains_position(Position::new(1, 0, 0)));
}
