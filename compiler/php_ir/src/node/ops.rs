//! Operator and modifier enums carried by expression and member nodes.

use crate::TokenKind;

/// Binary operators, including the keyword forms `and`, `or`, `xor`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
    Concat,
    BitAnd,
    BitOr,
    BitXor,
    ShiftLeft,
    ShiftRight,
    BooleanAnd,
    BooleanOr,
    LogicalAnd,
    LogicalOr,
    LogicalXor,
    Equal,
    NotEqual,
    Identical,
    NotIdentical,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Spaceship,
    InstanceOf,
}

impl BinaryOp {
    /// Map an operator token to its binary operator, if it is one.
    ///
    /// `??` is not here: it builds its own `coalesce` node.
    pub const fn from_token(kind: TokenKind) -> Option<Self> {
        Some(match kind {
            TokenKind::Plus => BinaryOp::Add,
            TokenKind::Minus => BinaryOp::Sub,
            TokenKind::Star => BinaryOp::Mul,
            TokenKind::Slash => BinaryOp::Div,
            TokenKind::Percent => BinaryOp::Mod,
            TokenKind::Pow => BinaryOp::Pow,
            TokenKind::Dot => BinaryOp::Concat,
            TokenKind::Amp => BinaryOp::BitAnd,
            TokenKind::Pipe => BinaryOp::BitOr,
            TokenKind::Caret => BinaryOp::BitXor,
            TokenKind::ShiftLeft => BinaryOp::ShiftLeft,
            TokenKind::ShiftRight => BinaryOp::ShiftRight,
            TokenKind::BooleanAnd => BinaryOp::BooleanAnd,
            TokenKind::BooleanOr => BinaryOp::BooleanOr,
            TokenKind::LogicalAnd => BinaryOp::LogicalAnd,
            TokenKind::LogicalOr => BinaryOp::LogicalOr,
            TokenKind::LogicalXor => BinaryOp::LogicalXor,
            TokenKind::IsEqual => BinaryOp::Equal,
            TokenKind::IsNotEqual => BinaryOp::NotEqual,
            TokenKind::IsIdentical => BinaryOp::Identical,
            TokenKind::IsNotIdentical => BinaryOp::NotIdentical,
            TokenKind::Less => BinaryOp::Less,
            TokenKind::IsSmallerOrEqual => BinaryOp::LessEqual,
            TokenKind::Greater => BinaryOp::Greater,
            TokenKind::IsGreaterOrEqual => BinaryOp::GreaterEqual,
            TokenKind::Spaceship => BinaryOp::Spaceship,
            TokenKind::InstanceOf => BinaryOp::InstanceOf,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::Pow => "**",
            BinaryOp::Concat => ".",
            BinaryOp::BitAnd => "&",
            BinaryOp::BitOr => "|",
            BinaryOp::BitXor => "^",
            BinaryOp::ShiftLeft => "<<",
            BinaryOp::ShiftRight => ">>",
            BinaryOp::BooleanAnd => "&&",
            BinaryOp::BooleanOr => "||",
            BinaryOp::LogicalAnd => "and",
            BinaryOp::LogicalOr => "or",
            BinaryOp::LogicalXor => "xor",
            BinaryOp::Equal => "==",
            BinaryOp::NotEqual => "!=",
            BinaryOp::Identical => "===",
            BinaryOp::NotIdentical => "!==",
            BinaryOp::Less => "<",
            BinaryOp::LessEqual => "<=",
            BinaryOp::Greater => ">",
            BinaryOp::GreaterEqual => ">=",
            BinaryOp::Spaceship => "<=>",
            BinaryOp::InstanceOf => "instanceof",
        }
    }
}

/// Prefix operators that are not increments or casts.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnaryOp {
    Plus,
    Minus,
    Not,
    BitNot,
}

impl UnaryOp {
    pub const fn from_token(kind: TokenKind) -> Option<Self> {
        Some(match kind {
            TokenKind::Plus => UnaryOp::Plus,
            TokenKind::Minus => UnaryOp::Minus,
            TokenKind::Bang => UnaryOp::Not,
            TokenKind::Tilde => UnaryOp::BitNot,
            _ => return None,
        })
    }
}

/// Assignment operators; `Assign` is plain `=`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AssignOp {
    Assign,
    Add,
    Sub,
    Mul,
    Div,
    Concat,
    Mod,
    BitAnd,
    BitOr,
    BitXor,
    ShiftLeft,
    ShiftRight,
    Pow,
    Coalesce,
}

impl AssignOp {
    pub const fn from_token(kind: TokenKind) -> Option<Self> {
        Some(match kind {
            TokenKind::Equal => AssignOp::Assign,
            TokenKind::PlusEqual => AssignOp::Add,
            TokenKind::MinusEqual => AssignOp::Sub,
            TokenKind::MulEqual => AssignOp::Mul,
            TokenKind::DivEqual => AssignOp::Div,
            TokenKind::ConcatEqual => AssignOp::Concat,
            TokenKind::ModEqual => AssignOp::Mod,
            TokenKind::AndEqual => AssignOp::BitAnd,
            TokenKind::OrEqual => AssignOp::BitOr,
            TokenKind::XorEqual => AssignOp::BitXor,
            TokenKind::ShiftLeftEqual => AssignOp::ShiftLeft,
            TokenKind::ShiftRightEqual => AssignOp::ShiftRight,
            TokenKind::PowEqual => AssignOp::Pow,
            TokenKind::CoalesceEqual => AssignOp::Coalesce,
            _ => return None,
        })
    }
}

/// `++` or `--`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UpdateOp {
    Increment,
    Decrement,
}

/// Target type of a cast.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CastType {
    Int,
    Float,
    String,
    Array,
    Object,
    Bool,
    Unset,
}

impl CastType {
    pub const fn from_token(kind: TokenKind) -> Option<Self> {
        Some(match kind {
            TokenKind::IntCast => CastType::Int,
            TokenKind::DoubleCast => CastType::Float,
            TokenKind::StringCast => CastType::String,
            TokenKind::ArrayCast => CastType::Array,
            TokenKind::ObjectCast => CastType::Object,
            TokenKind::BoolCast => CastType::Bool,
            TokenKind::UnsetCast => CastType::Unset,
            _ => return None,
        })
    }
}

/// How a name was written.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NameResolution {
    /// `Foo`
    Unqualified,
    /// `Foo\Bar`
    Qualified,
    /// `\Foo\Bar`
    FullyQualified,
    /// `namespace\Foo`
    Relative,
}

/// Member visibility keyword.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Visibility {
    Public,
    Protected,
    Private,
}

/// Modifier keywords on a class member.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Modifiers {
    pub visibility: Option<Visibility>,
    pub is_static: bool,
    pub is_abstract: bool,
    pub is_final: bool,
}

/// Import flavour of a `use` declaration.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UseKind {
    #[default]
    Class,
    Function,
    Const,
}

/// Body form of a `declare` statement.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeclareMode {
    /// `declare(x=1);` applies to the rest of the file.
    None,
    /// `declare(x=1) { ... }`
    Block,
    /// `declare(x=1): ... enddeclare;`
    Short,
}

/// Flavour of a literal that may interpolate variables.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EncapsedKind {
    String,
    Shell,
    Heredoc,
}
