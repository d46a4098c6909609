//! First-set classification.
//!
//! Every grammar decision point branches on the current token alone. The
//! token kinds that can begin each alternative are grouped into named
//! categories, stored as compile-time bitsets for O(1) membership tests.

use php_ir::TokenKind;

/// A set of token kinds, one bit per `TokenKind` discriminant.
///
/// Three 64-bit words cover every kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenSet([u64; 3]);

const _: () = assert!(TokenKind::COUNT <= 192, "TokenSet needs another word");

impl TokenSet {
    /// Create an empty token set.
    #[inline]
    pub const fn new() -> Self {
        TokenSet([0; 3])
    }

    /// Add a token kind (builder pattern for const contexts).
    #[inline]
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        let mut words = self.0;
        let index = kind.index();
        words[index / 64] |= 1 << (index % 64);
        TokenSet(words)
    }

    /// Build a set from a list of kinds.
    #[must_use]
    pub const fn of(kinds: &[TokenKind]) -> Self {
        let mut set = TokenSet::new();
        let mut i = 0;
        while i < kinds.len() {
            set = set.with(kinds[i]);
            i += 1;
        }
        set
    }

    /// Union of two token sets.
    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        TokenSet([
            self.0[0] | other.0[0],
            self.0[1] | other.0[1],
            self.0[2] | other.0[2],
        ])
    }

    /// Check if this set contains a token kind.
    #[inline]
    pub const fn contains(&self, kind: TokenKind) -> bool {
        let index = kind.index();
        self.0[index / 64] & (1 << (index % 64)) != 0
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0[0] == 0 && self.0[1] == 0 && self.0[2] == 0
    }

    #[inline]
    pub const fn count(&self) -> u32 {
        self.0[0].count_ones() + self.0[1].count_ones() + self.0[2].count_ones()
    }
}

impl Default for TokenSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Named first-set categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// Keywords that may be used where a bare identifier is expected.
    Identifier,
    /// Tokens that can begin a variable reference.
    Variable,
    /// Tokens that can begin a scalar literal.
    Scalar,
    /// `__CLASS__`, `__LINE__`, ...
    MagicConst,
    /// Member visibility and modifier keywords.
    MemberFlags,
    /// End-of-statement markers.
    Eos,
    /// Tokens that can begin an expression.
    Expr,
}

impl Category {
    pub const fn set(self) -> TokenSet {
        match self {
            Category::Identifier => IDENTIFIER,
            Category::Variable => VARIABLE,
            Category::Scalar => SCALAR,
            Category::MagicConst => MAGIC_CONST,
            Category::MemberFlags => MEMBER_FLAGS,
            Category::Eos => EOS,
            Category::Expr => EXPR,
        }
    }

    /// Upper-case category name, used as an expectation descriptor.
    pub const fn name(self) -> &'static str {
        match self {
            Category::Identifier => "IDENTIFIER",
            Category::Variable => "VARIABLE",
            Category::Scalar => "SCALAR",
            Category::MagicConst => "T_MAGIC_CONST",
            Category::MemberFlags => "T_MEMBER_FLAGS",
            Category::Eos => "EOS",
            Category::Expr => "EXPR",
        }
    }
}

pub const IDENTIFIER: TokenSet = TokenSet::of(&[
    TokenKind::Abstract,
    TokenKind::Array,
    TokenKind::As,
    TokenKind::Break,
    TokenKind::Callable,
    TokenKind::Case,
    TokenKind::Catch,
    TokenKind::Class,
    TokenKind::ClassC,
    TokenKind::Clone,
    TokenKind::Const,
    TokenKind::Continue,
    TokenKind::Declare,
    TokenKind::Default,
    TokenKind::Dir,
    TokenKind::Do,
    TokenKind::Echo,
    TokenKind::Else,
    TokenKind::ElseIf,
    TokenKind::Empty,
    TokenKind::EndDeclare,
    TokenKind::EndFor,
    TokenKind::EndForeach,
    TokenKind::EndIf,
    TokenKind::EndSwitch,
    TokenKind::EndWhile,
    TokenKind::Eval,
    TokenKind::Exit,
    TokenKind::Extends,
    TokenKind::File,
    TokenKind::Final,
    TokenKind::Finally,
    TokenKind::Fn,
    TokenKind::FuncC,
    TokenKind::For,
    TokenKind::Foreach,
    TokenKind::Function,
    TokenKind::Global,
    TokenKind::Goto,
    TokenKind::If,
    TokenKind::Implements,
    TokenKind::Include,
    TokenKind::IncludeOnce,
    TokenKind::InstanceOf,
    TokenKind::InsteadOf,
    TokenKind::Interface,
    TokenKind::Isset,
    TokenKind::Line,
    TokenKind::List,
    TokenKind::LogicalAnd,
    TokenKind::LogicalOr,
    TokenKind::LogicalXor,
    TokenKind::MethodC,
    TokenKind::Namespace,
    TokenKind::New,
    TokenKind::NsC,
    TokenKind::Print,
    TokenKind::Private,
    TokenKind::Protected,
    TokenKind::Public,
    TokenKind::Require,
    TokenKind::RequireOnce,
    TokenKind::Return,
    TokenKind::Static,
    TokenKind::Switch,
    TokenKind::Throw,
    TokenKind::Trait,
    TokenKind::TraitC,
    TokenKind::Try,
    TokenKind::Unset,
    TokenKind::Use,
    TokenKind::Var,
    TokenKind::While,
    TokenKind::Yield,
]);

pub const VARIABLE: TokenSet = TokenSet::of(&[
    TokenKind::Variable,
    TokenKind::Dollar,
    TokenKind::Amp,
    TokenKind::NsSeparator,
    TokenKind::Identifier,
    TokenKind::Namespace,
    TokenKind::Static,
]);

pub const MAGIC_CONST: TokenSet = TokenSet::of(&[
    TokenKind::ClassC,
    TokenKind::TraitC,
    TokenKind::FuncC,
    TokenKind::MethodC,
    TokenKind::Line,
    TokenKind::File,
    TokenKind::Dir,
    TokenKind::NsC,
]);

pub const SCALAR: TokenSet = TokenSet::of(&[
    TokenKind::ConstantString,
    TokenKind::EncapsedString,
    TokenKind::Heredoc,
    TokenKind::LNumber,
    TokenKind::DNumber,
    TokenKind::Array,
    TokenKind::LBracket,
    TokenKind::Minus,
    TokenKind::NsSeparator,
])
.union(MAGIC_CONST);

pub const MEMBER_FLAGS: TokenSet = TokenSet::of(&[
    TokenKind::Public,
    TokenKind::Private,
    TokenKind::Protected,
    TokenKind::Static,
    TokenKind::Abstract,
    TokenKind::Final,
]);

pub const EOS: TokenSet =
    TokenSet::of(&[TokenKind::Semicolon, TokenKind::Eof, TokenKind::InlineHtml]);

pub const CASTS: TokenSet = TokenSet::of(&[
    TokenKind::IntCast,
    TokenKind::DoubleCast,
    TokenKind::StringCast,
    TokenKind::ArrayCast,
    TokenKind::ObjectCast,
    TokenKind::BoolCast,
    TokenKind::UnsetCast,
]);

pub const EXPR: TokenSet = TokenSet::of(&[
    TokenKind::At,
    TokenKind::Minus,
    TokenKind::Plus,
    TokenKind::Bang,
    TokenKind::Tilde,
    TokenKind::LParen,
    TokenKind::ShellCommand,
    TokenKind::List,
    TokenKind::Clone,
    TokenKind::Inc,
    TokenKind::Dec,
    TokenKind::New,
    TokenKind::Isset,
    TokenKind::Empty,
    TokenKind::Include,
    TokenKind::IncludeOnce,
    TokenKind::Require,
    TokenKind::RequireOnce,
    TokenKind::Eval,
    TokenKind::Exit,
    TokenKind::Print,
    TokenKind::Yield,
    TokenKind::YieldFrom,
    TokenKind::Static,
    TokenKind::Function,
    TokenKind::Fn,
    TokenKind::Variable,
    TokenKind::Dollar,
    TokenKind::NsSeparator,
    TokenKind::Namespace,
    TokenKind::Identifier,
])
.union(CASTS)
.union(SCALAR);

/// Tokens an expression-level recovery never consumes: they close the
/// construct the broken expression sits in.
pub const SYNC: TokenSet = TokenSet::of(&[
    TokenKind::Semicolon,
    TokenKind::Comma,
    TokenKind::RParen,
    TokenKind::RBracket,
    TokenKind::RBrace,
    TokenKind::Eof,
    TokenKind::InlineHtml,
]);

#[cfg(test)]
mod tests;
