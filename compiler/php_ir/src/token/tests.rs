use super::*;

#[test]
fn test_named_kinds() {
    assert_eq!(TokenKind::Variable.name(), Some("T_VARIABLE"));
    assert_eq!(TokenKind::Identifier.name(), Some("T_STRING"));
    assert_eq!(TokenKind::DoubleColon.name(), Some("T_PAAMAYIM_NEKUDOTAYIM"));
    assert_eq!(TokenKind::Semicolon.name(), None);
    assert_eq!(TokenKind::Eof.name(), None);
}

#[test]
fn test_every_kind_is_named_or_symbolic() {
    for index in 0..TokenKind::COUNT {
        let kind = ALL[index];
        assert_eq!(kind.index(), index);
        if kind != TokenKind::Eof {
            assert!(
                kind.name().is_some() || kind.symbol().is_some(),
                "{kind:?} has no description"
            );
        }
    }
}

#[test]
fn test_trivia() {
    assert!(TokenKind::Whitespace.is_trivia());
    assert!(TokenKind::DocComment.is_trivia());
    assert!(!TokenKind::CloseTag.is_trivia());
    assert!(!TokenKind::InlineHtml.is_trivia());
}

#[test]
fn test_log_entry_from_token() {
    let token = Token::new(
        TokenKind::Variable,
        "$a",
        Position::new(2, 0, 6),
        Position::new(2, 2, 8),
    );
    let entry = TokenLogEntry::from(&token);
    assert_eq!(entry.name, Some("T_VARIABLE"));
    assert_eq!(entry.text, "$a");
    assert_eq!((entry.line, entry.start, entry.end), (2, 6, 8));
}

/// Every kind, in declaration order.
const ALL: [TokenKind; TokenKind::COUNT] = {
    use TokenKind::*;
    [
        InlineHtml, OpenTag, OpenTagWithEcho, CloseTag, Whitespace, Comment, DocComment,
        Variable, Identifier, LNumber, DNumber, ConstantString, EncapsedString, Heredoc,
        ShellCommand, Abstract, Array, As, Break, Callable, Case, Catch, Class, Clone, Const,
        Continue, Declare, Default, Do, Echo, Else, ElseIf, Empty, EndDeclare, EndFor,
        EndForeach, EndIf, EndSwitch, EndWhile, Eval, Exit, Extends, Final, Finally, Fn, For,
        Foreach, Function, Global, Goto, HaltCompiler, If, Implements, Include, IncludeOnce,
        InstanceOf, InsteadOf, Interface, Isset, List, LogicalAnd, LogicalOr, LogicalXor,
        Namespace, New, Print, Private, Protected, Public, Require, RequireOnce, Return, Static,
        Switch, Throw, Trait, Try, Unset, Use, Var, While, Yield, YieldFrom, ClassC, TraitC,
        FuncC, MethodC, Line, File, Dir, NsC, IntCast, DoubleCast, StringCast, ArrayCast,
        ObjectCast, BoolCast, UnsetCast, PlusEqual, MinusEqual, MulEqual, DivEqual, ConcatEqual,
        ModEqual, AndEqual, OrEqual, XorEqual, ShiftLeftEqual, ShiftRightEqual, PowEqual,
        CoalesceEqual, Coalesce, BooleanOr, BooleanAnd, IsEqual, IsNotEqual, IsIdentical,
        IsNotIdentical, IsSmallerOrEqual, IsGreaterOrEqual, Spaceship, ShiftLeft, ShiftRight,
        Inc, Dec, ObjectOperator, DoubleArrow, DoubleColon, NsSeparator, Ellipsis, Pow,
        Semicolon, Comma, Dot, LParen, RParen, LBracket, RBracket, LBrace, RBrace, Plus, Minus,
        Star, Slash, Percent, Equal, Less, Greater, Bang, Tilde, Caret, Amp, Pipe, Question,
        Colon, At, Dollar, BadCharacter, Eof,
    ]
};
