//! Token kinds and tokens produced by the scanner.
//!
//! `TokenKind` is a fieldless enum so that it can be used as a bit index by
//! the parser's first-set tables. Token text is borrowed from the source.

use crate::Position;

/// Every kind of token the scanner can emit.
///
/// Named kinds map to PHP's `T_*` identifiers through [`TokenKind::name`];
/// punctuation has no symbolic name and is described by its literal text
/// ([`TokenKind::symbol`]).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum TokenKind {
    // === Document structure ===
    InlineHtml,
    OpenTag,
    OpenTagWithEcho,
    CloseTag,
    Whitespace,
    Comment,
    DocComment,

    // === Names and literals ===
    Variable,
    Identifier,
    LNumber,
    DNumber,
    ConstantString,
    EncapsedString,
    Heredoc,
    ShellCommand,

    // === Keywords ===
    Abstract,
    Array,
    As,
    Break,
    Callable,
    Case,
    Catch,
    Class,
    Clone,
    Const,
    Continue,
    Declare,
    Default,
    Do,
    Echo,
    Else,
    ElseIf,
    Empty,
    EndDeclare,
    EndFor,
    EndForeach,
    EndIf,
    EndSwitch,
    EndWhile,
    Eval,
    Exit,
    Extends,
    Final,
    Finally,
    Fn,
    For,
    Foreach,
    Function,
    Global,
    Goto,
    HaltCompiler,
    If,
    Implements,
    Include,
    IncludeOnce,
    InstanceOf,
    InsteadOf,
    Interface,
    Isset,
    List,
    LogicalAnd,
    LogicalOr,
    LogicalXor,
    Namespace,
    New,
    Print,
    Private,
    Protected,
    Public,
    Require,
    RequireOnce,
    Return,
    Static,
    Switch,
    Throw,
    Trait,
    Try,
    Unset,
    Use,
    Var,
    While,
    Yield,
    YieldFrom,

    // === Magic constants ===
    ClassC,
    TraitC,
    FuncC,
    MethodC,
    Line,
    File,
    Dir,
    NsC,

    // === Casts ===
    IntCast,
    DoubleCast,
    StringCast,
    ArrayCast,
    ObjectCast,
    BoolCast,
    UnsetCast,

    // === Multi-character operators ===
    PlusEqual,
    MinusEqual,
    MulEqual,
    DivEqual,
    ConcatEqual,
    ModEqual,
    AndEqual,
    OrEqual,
    XorEqual,
    ShiftLeftEqual,
    ShiftRightEqual,
    PowEqual,
    CoalesceEqual,
    Coalesce,
    BooleanOr,
    BooleanAnd,
    IsEqual,
    IsNotEqual,
    IsIdentical,
    IsNotIdentical,
    IsSmallerOrEqual,
    IsGreaterOrEqual,
    Spaceship,
    ShiftLeft,
    ShiftRight,
    Inc,
    Dec,
    ObjectOperator,
    DoubleArrow,
    DoubleColon,
    NsSeparator,
    Ellipsis,
    Pow,

    // === Punctuation ===
    Semicolon,
    Comma,
    Dot,
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Equal,
    Less,
    Greater,
    Bang,
    Tilde,
    Caret,
    Amp,
    Pipe,
    Question,
    Colon,
    At,
    Dollar,

    // === Sentinels ===
    BadCharacter,
    Eof,
}

impl TokenKind {
    /// Number of token kinds.
    pub const COUNT: usize = TokenKind::Eof as usize + 1;

    /// Bit index of this kind, for set membership tables.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Symbolic `T_*` name, or `None` for punctuation and end of input.
    pub const fn name(self) -> Option<&'static str> {
        use TokenKind::*;
        Some(match self {
            InlineHtml => "T_INLINE_HTML",
            OpenTag => "T_OPEN_TAG",
            OpenTagWithEcho => "T_OPEN_TAG_WITH_ECHO",
            CloseTag => "T_CLOSE_TAG",
            Whitespace => "T_WHITESPACE",
            Comment => "T_COMMENT",
            DocComment => "T_DOC_COMMENT",
            Variable => "T_VARIABLE",
            Identifier => "T_STRING",
            LNumber => "T_LNUMBER",
            DNumber => "T_DNUMBER",
            ConstantString => "T_CONSTANT_ENCAPSED_STRING",
            EncapsedString => "T_ENCAPSED_AND_WHITESPACE",
            Heredoc => "T_START_HEREDOC",
            Abstract => "T_ABSTRACT",
            Array => "T_ARRAY",
            As => "T_AS",
            Break => "T_BREAK",
            Callable => "T_CALLABLE",
            Case => "T_CASE",
            Catch => "T_CATCH",
            Class => "T_CLASS",
            Clone => "T_CLONE",
            Const => "T_CONST",
            Continue => "T_CONTINUE",
            Declare => "T_DECLARE",
            Default => "T_DEFAULT",
            Do => "T_DO",
            Echo => "T_ECHO",
            Else => "T_ELSE",
            ElseIf => "T_ELSEIF",
            Empty => "T_EMPTY",
            EndDeclare => "T_ENDDECLARE",
            EndFor => "T_ENDFOR",
            EndForeach => "T_ENDFOREACH",
            EndIf => "T_ENDIF",
            EndSwitch => "T_ENDSWITCH",
            EndWhile => "T_ENDWHILE",
            Eval => "T_EVAL",
            Exit => "T_EXIT",
            Extends => "T_EXTENDS",
            Final => "T_FINAL",
            Finally => "T_FINALLY",
            Fn => "T_FN",
            For => "T_FOR",
            Foreach => "T_FOREACH",
            Function => "T_FUNCTION",
            Global => "T_GLOBAL",
            Goto => "T_GOTO",
            HaltCompiler => "T_HALT_COMPILER",
            If => "T_IF",
            Implements => "T_IMPLEMENTS",
            Include => "T_INCLUDE",
            IncludeOnce => "T_INCLUDE_ONCE",
            InstanceOf => "T_INSTANCEOF",
            InsteadOf => "T_INSTEADOF",
            Interface => "T_INTERFACE",
            Isset => "T_ISSET",
            List => "T_LIST",
            LogicalAnd => "T_LOGICAL_AND",
            LogicalOr => "T_LOGICAL_OR",
            LogicalXor => "T_LOGICAL_XOR",
            Namespace => "T_NAMESPACE",
            New => "T_NEW",
            Print => "T_PRINT",
            Private => "T_PRIVATE",
            Protected => "T_PROTECTED",
            Public => "T_PUBLIC",
            Require => "T_REQUIRE",
            RequireOnce => "T_REQUIRE_ONCE",
            Return => "T_RETURN",
            Static => "T_STATIC",
            Switch => "T_SWITCH",
            Throw => "T_THROW",
            Trait => "T_TRAIT",
            Try => "T_TRY",
            Unset => "T_UNSET",
            Use => "T_USE",
            Var => "T_VAR",
            While => "T_WHILE",
            Yield => "T_YIELD",
            YieldFrom => "T_YIELD_FROM",
            ClassC => "T_CLASS_C",
            TraitC => "T_TRAIT_C",
            FuncC => "T_FUNC_C",
            MethodC => "T_METHOD_C",
            Line => "T_LINE",
            File => "T_FILE",
            Dir => "T_DIR",
            NsC => "T_NS_C",
            IntCast => "T_INT_CAST",
            DoubleCast => "T_DOUBLE_CAST",
            StringCast => "T_STRING_CAST",
            ArrayCast => "T_ARRAY_CAST",
            ObjectCast => "T_OBJECT_CAST",
            BoolCast => "T_BOOL_CAST",
            UnsetCast => "T_UNSET_CAST",
            PlusEqual => "T_PLUS_EQUAL",
            MinusEqual => "T_MINUS_EQUAL",
            MulEqual => "T_MUL_EQUAL",
            DivEqual => "T_DIV_EQUAL",
            ConcatEqual => "T_CONCAT_EQUAL",
            ModEqual => "T_MOD_EQUAL",
            AndEqual => "T_AND_EQUAL",
            OrEqual => "T_OR_EQUAL",
            XorEqual => "T_XOR_EQUAL",
            ShiftLeftEqual => "T_SL_EQUAL",
            ShiftRightEqual => "T_SR_EQUAL",
            PowEqual => "T_POW_EQUAL",
            CoalesceEqual => "T_COALESCE_EQUAL",
            Coalesce => "T_COALESCE",
            BooleanOr => "T_BOOLEAN_OR",
            BooleanAnd => "T_BOOLEAN_AND",
            IsEqual => "T_IS_EQUAL",
            IsNotEqual => "T_IS_NOT_EQUAL",
            IsIdentical => "T_IS_IDENTICAL",
            IsNotIdentical => "T_IS_NOT_IDENTICAL",
            IsSmallerOrEqual => "T_IS_SMALLER_OR_EQUAL",
            IsGreaterOrEqual => "T_IS_GREATER_OR_EQUAL",
            Spaceship => "T_SPACESHIP",
            ShiftLeft => "T_SL",
            ShiftRight => "T_SR",
            Inc => "T_INC",
            Dec => "T_DEC",
            ObjectOperator => "T_OBJECT_OPERATOR",
            DoubleArrow => "T_DOUBLE_ARROW",
            DoubleColon => "T_PAAMAYIM_NEKUDOTAYIM",
            NsSeparator => "T_NS_SEPARATOR",
            Ellipsis => "T_ELLIPSIS",
            Pow => "T_POW",
            BadCharacter => "T_BAD_CHARACTER",
            ShellCommand | Semicolon | Comma | Dot | LParen | RParen | LBracket | RBracket
            | LBrace | RBrace | Plus | Minus | Star | Slash | Percent | Equal | Less | Greater
            | Bang | Tilde | Caret | Amp | Pipe | Question | Colon | At | Dollar | Eof => {
                return None;
            }
        })
    }

    /// Literal text of a punctuation kind.
    pub const fn symbol(self) -> Option<&'static str> {
        use TokenKind::*;
        Some(match self {
            ShellCommand => "`",
            Semicolon => ";",
            Comma => ",",
            Dot => ".",
            LParen => "(",
            RParen => ")",
            LBracket => "[",
            RBracket => "]",
            LBrace => "{",
            RBrace => "}",
            Plus => "+",
            Minus => "-",
            Star => "*",
            Slash => "/",
            Percent => "%",
            Equal => "=",
            Less => "<",
            Greater => ">",
            Bang => "!",
            Tilde => "~",
            Caret => "^",
            Amp => "&",
            Pipe => "|",
            Question => "?",
            Colon => ":",
            At => "@",
            Dollar => "$",
            _ => return None,
        })
    }

    /// Whether the grammar never sees this kind.
    #[inline]
    pub const fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::Comment | TokenKind::DocComment | TokenKind::OpenTag
        )
    }
}

/// A token borrowed from the source text.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    pub start: Position,
    pub end: Position,
}

impl<'src> Token<'src> {
    #[inline]
    pub const fn new(kind: TokenKind, text: &'src str, start: Position, end: Position) -> Self {
        Token {
            kind,
            text,
            start,
            end,
        }
    }

    /// Zero-width end-of-input token at `pos`.
    #[inline]
    pub const fn eof(pos: Position) -> Self {
        Token::new(TokenKind::Eof, "", pos, pos)
    }

    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

/// One raw token as recorded in the optional token log.
///
/// `name` is the symbolic `T_*` name, `None` for punctuation.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TokenLogEntry {
    pub name: Option<&'static str>,
    pub text: String,
    pub line: u32,
    pub start: usize,
    pub end: usize,
}

impl From<&Token<'_>> for TokenLogEntry {
    fn from(token: &Token<'_>) -> Self {
        TokenLogEntry {
            name: token.kind.name(),
            text: token.text.to_owned(),
            line: token.start.line,
            start: token.start.offset,
            end: token.end.offset,
        }
    }
}

#[cfg(test)]
mod tests;
