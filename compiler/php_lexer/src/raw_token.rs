//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived tokenizer output for PHP mode,
//! before conversion to `TokenKind`. Inline HTML and open tags are handled
//! by the scanner, outside logos.

use logos::{Lexer, Logos};
use php_ir::TokenKind;

/// Flavour of a `/* */` comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CommentStyle {
    Block,
    Doc,
}

/// Flavour of a `<<<` literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HeredocStyle {
    Heredoc,
    Nowdoc,
}

/// What an opening parenthesis turned out to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Paren {
    Open,
    Cast(TokenKind),
}

/// Whether a `yield` is followed by `from`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum YieldForm {
    Plain,
    From,
}

/// Raw token from logos (PHP mode only).
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub(crate) enum RawToken {
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[token("//", line_comment)]
    #[token("#", line_comment)]
    LineComment,

    #[token("/*", block_comment)]
    BlockComment(CommentStyle),

    #[regex(r"\?>(\r?\n)?")]
    CloseTag,

    #[regex(r"\$[a-zA-Z_\x{80}-\x{10FFFF}][a-zA-Z0-9_\x{80}-\x{10FFFF}]*")]
    Variable,

    #[regex(r"[a-zA-Z_\x{80}-\x{10FFFF}][a-zA-Z0-9_\x{80}-\x{10FFFF}]*")]
    Identifier,

    // Literals
    #[regex(r"[0-9]+(_[0-9]+)*")]
    #[regex(r"0[xX][0-9a-fA-F]+(_[0-9a-fA-F]+)*")]
    #[regex(r"0[bB][01]+(_[01]+)*")]
    LNumber,

    #[regex(r"([0-9]+(_[0-9]+)*)?\.[0-9]+(_[0-9]+)*([eE][+-]?[0-9]+)?")]
    #[regex(r"[0-9]+(_[0-9]+)*\.([eE][+-]?[0-9]+)?")]
    #[regex(r"[0-9]+(_[0-9]+)*[eE][+-]?[0-9]+")]
    DNumber,

    #[regex(r"[bB]?'([^'\\]|\\(.|\n))*'")]
    SingleQuoted,

    #[regex(r#"[bB]?"([^"\\]|\\(.|\n))*""#)]
    DoubleQuoted,

    #[regex(r"`([^`\\]|\\(.|\n))*`")]
    Backtick,

    #[regex(
        r#"<<<[ \t]*([a-zA-Z_][a-zA-Z0-9_]*|"[a-zA-Z_][a-zA-Z0-9_]*"|'[a-zA-Z_][a-zA-Z0-9_]*')\r?\n"#,
        heredoc
    )]
    Heredoc(HeredocStyle),

    // Keywords
    #[token("abstract", ignore(ascii_case))]
    Abstract,
    #[token("array", ignore(ascii_case))]
    Array,
    #[token("as", ignore(ascii_case))]
    As,
    #[token("break", ignore(ascii_case))]
    Break,
    #[token("callable", ignore(ascii_case))]
    Callable,
    #[token("case", ignore(ascii_case))]
    Case,
    #[token("catch", ignore(ascii_case))]
    Catch,
    #[token("class", ignore(ascii_case))]
    Class,
    #[token("clone", ignore(ascii_case))]
    Clone,
    #[token("const", ignore(ascii_case))]
    Const,
    #[token("continue", ignore(ascii_case))]
    Continue,
    #[token("declare", ignore(ascii_case))]
    Declare,
    #[token("default", ignore(ascii_case))]
    Default,
    #[token("do", ignore(ascii_case))]
    Do,
    #[token("echo", ignore(ascii_case))]
    Echo,
    #[token("else", ignore(ascii_case))]
    Else,
    #[token("elseif", ignore(ascii_case))]
    ElseIf,
    #[token("empty", ignore(ascii_case))]
    Empty,
    #[token("enddeclare", ignore(ascii_case))]
    EndDeclare,
    #[token("endfor", ignore(ascii_case))]
    EndFor,
    #[token("endforeach", ignore(ascii_case))]
    EndForeach,
    #[token("endif", ignore(ascii_case))]
    EndIf,
    #[token("endswitch", ignore(ascii_case))]
    EndSwitch,
    #[token("endwhile", ignore(ascii_case))]
    EndWhile,
    #[token("eval", ignore(ascii_case))]
    Eval,
    #[token("exit", ignore(ascii_case))]
    #[token("die", ignore(ascii_case))]
    Exit,
    #[token("extends", ignore(ascii_case))]
    Extends,
    #[token("final", ignore(ascii_case))]
    Final,
    #[token("finally", ignore(ascii_case))]
    Finally,
    #[token("fn", ignore(ascii_case))]
    Fn,
    #[token("for", ignore(ascii_case))]
    For,
    #[token("foreach", ignore(ascii_case))]
    Foreach,
    #[token("function", ignore(ascii_case))]
    Function,
    #[token("global", ignore(ascii_case))]
    Global,
    #[token("goto", ignore(ascii_case))]
    Goto,
    #[token("__halt_compiler", ignore(ascii_case))]
    HaltCompiler,
    #[token("if", ignore(ascii_case))]
    If,
    #[token("implements", ignore(ascii_case))]
    Implements,
    #[token("include", ignore(ascii_case))]
    Include,
    #[token("include_once", ignore(ascii_case))]
    IncludeOnce,
    #[token("instanceof", ignore(ascii_case))]
    InstanceOf,
    #[token("insteadof", ignore(ascii_case))]
    InsteadOf,
    #[token("interface", ignore(ascii_case))]
    Interface,
    #[token("isset", ignore(ascii_case))]
    Isset,
    #[token("list", ignore(ascii_case))]
    List,
    #[token("and", ignore(ascii_case))]
    LogicalAnd,
    #[token("or", ignore(ascii_case))]
    LogicalOr,
    #[token("xor", ignore(ascii_case))]
    LogicalXor,
    #[token("namespace", ignore(ascii_case))]
    Namespace,
    #[token("new", ignore(ascii_case))]
    New,
    #[token("print", ignore(ascii_case))]
    Print,
    #[token("private", ignore(ascii_case))]
    Private,
    #[token("protected", ignore(ascii_case))]
    Protected,
    #[token("public", ignore(ascii_case))]
    Public,
    #[token("require", ignore(ascii_case))]
    Require,
    #[token("require_once", ignore(ascii_case))]
    RequireOnce,
    #[token("return", ignore(ascii_case))]
    Return,
    #[token("static", ignore(ascii_case))]
    Static,
    #[token("switch", ignore(ascii_case))]
    Switch,
    #[token("throw", ignore(ascii_case))]
    Throw,
    #[token("trait", ignore(ascii_case))]
    Trait,
    #[token("try", ignore(ascii_case))]
    Try,
    #[token("unset", ignore(ascii_case))]
    Unset,
    #[token("use", ignore(ascii_case))]
    Use,
    #[token("var", ignore(ascii_case))]
    Var,
    #[token("while", ignore(ascii_case))]
    While,
    #[token("yield", yield_form, ignore(ascii_case))]
    Yield(YieldForm),

    // Magic constants
    #[token("__CLASS__", ignore(ascii_case))]
    ClassC,
    #[token("__TRAIT__", ignore(ascii_case))]
    TraitC,
    #[token("__FUNCTION__", ignore(ascii_case))]
    FuncC,
    #[token("__METHOD__", ignore(ascii_case))]
    MethodC,
    #[token("__LINE__", ignore(ascii_case))]
    Line,
    #[token("__FILE__", ignore(ascii_case))]
    File,
    #[token("__DIR__", ignore(ascii_case))]
    Dir,
    #[token("__NAMESPACE__", ignore(ascii_case))]
    NsC,

    // Multi-character operators
    #[token("+=")]
    PlusEqual,
    #[token("-=")]
    MinusEqual,
    #[token("*=")]
    MulEqual,
    #[token("/=")]
    DivEqual,
    #[token(".=")]
    ConcatEqual,
    #[token("%=")]
    ModEqual,
    #[token("&=")]
    AndEqual,
    #[token("|=")]
    OrEqual,
    #[token("^=")]
    XorEqual,
    #[token("<<=")]
    ShiftLeftEqual,
    #[token(">>=")]
    ShiftRightEqual,
    #[token("**=")]
    PowEqual,
    #[token("??=")]
    CoalesceEqual,
    #[token("??")]
    Coalesce,
    #[token("||")]
    BooleanOr,
    #[token("&&")]
    BooleanAnd,
    #[token("==")]
    IsEqual,
    #[token("!=")]
    #[token("<>")]
    IsNotEqual,
    #[token("===")]
    IsIdentical,
    #[token("!==")]
    IsNotIdentical,
    #[token("<=")]
    IsSmallerOrEqual,
    #[token(">=")]
    IsGreaterOrEqual,
    #[token("<=>")]
    Spaceship,
    #[token("<<")]
    ShiftLeft,
    #[token(">>")]
    ShiftRight,
    #[token("++")]
    Inc,
    #[token("--")]
    Dec,
    #[token("->")]
    ObjectOperator,
    #[token("=>")]
    DoubleArrow,
    #[token("::")]
    DoubleColon,
    #[token("\\")]
    NsSeparator,
    #[token("...")]
    Ellipsis,
    #[token("**")]
    Pow,

    // Punctuation
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("(", paren)]
    LParen(Paren),
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("=")]
    Equal,
    #[token("<")]
    Less,
    #[token(">")]
    Greater,
    #[token("!")]
    Bang,
    #[token("~")]
    Tilde,
    #[token("^")]
    Caret,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,
    #[token("?")]
    Question,
    #[token(":")]
    Colon,
    #[token("@")]
    At,
    #[token("$")]
    Dollar,
}

/// Line comments run to the end of the line or to a `?>`, whichever is first.
fn line_comment(lex: &mut Lexer<'_, RawToken>) -> bool {
    let rest = lex.remainder();
    let bytes = rest.as_bytes();
    let end = bytes
        .iter()
        .enumerate()
        .find(|&(i, &b)| {
            b == b'\n' || b == b'\r' || (b == b'?' && bytes.get(i + 1) == Some(&b'>'))
        })
        .map_or(rest.len(), |(i, _)| i);
    lex.bump(end);
    true
}

/// Casts are `(` type `)` with optional blanks inside the parentheses.
fn paren(lex: &mut Lexer<'_, RawToken>) -> Paren {
    let rest = lex.remainder();
    let inner = rest.trim_start_matches([' ', '\t']);
    let word_len = inner
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(inner.len());
    let after = inner[word_len..].trim_start_matches([' ', '\t']);
    if !after.starts_with(')') {
        return Paren::Open;
    }
    let Some(kind) = cast_kind(&inner[..word_len]) else {
        return Paren::Open;
    };
    lex.bump(rest.len() - after.len() + 1);
    Paren::Cast(kind)
}

fn cast_kind(word: &str) -> Option<TokenKind> {
    let kind = match word.to_ascii_lowercase().as_str() {
        "int" | "integer" => TokenKind::IntCast,
        "float" | "double" | "real" => TokenKind::DoubleCast,
        "string" | "binary" => TokenKind::StringCast,
        "array" => TokenKind::ArrayCast,
        "object" => TokenKind::ObjectCast,
        "bool" | "boolean" => TokenKind::BoolCast,
        "unset" => TokenKind::UnsetCast,
        _ => return None,
    };
    Some(kind)
}

/// `yield from` absorbs the blanks between the two words.
fn yield_form(lex: &mut Lexer<'_, RawToken>) -> YieldForm {
    let rest = lex.remainder();
    let after_blank = rest.trim_start_matches([' ', '\t', '\r', '\n']);
    if after_blank.len() == rest.len() {
        return YieldForm::Plain;
    }
    let from = after_blank
        .get(..4)
        .is_some_and(|word| word.eq_ignore_ascii_case("from"));
    if !from || after_blank[4..].starts_with(is_ident_char) {
        return YieldForm::Plain;
    }
    lex.bump(rest.len() - after_blank.len() + 4);
    YieldForm::From
}

/// Block comments run to `*/`, or to end of input when unterminated.
fn block_comment(lex: &mut Lexer<'_, RawToken>) -> CommentStyle {
    let rest = lex.remainder();
    let style = match rest.strip_prefix('*') {
        Some(after) if after.starts_with(|c: char| c.is_ascii_whitespace()) => CommentStyle::Doc,
        _ => CommentStyle::Block,
    };
    let len = rest.find("*/").map_or(rest.len(), |i| i + 2);
    lex.bump(len);
    style
}

/// Scan to the closing label of a heredoc or nowdoc.
///
/// The closing label may be indented and must not be followed by an
/// identifier character. Unterminated literals are lex errors.
fn heredoc(lex: &mut Lexer<'_, RawToken>) -> Option<HeredocStyle> {
    let head = lex.slice()[3..].trim();
    let (label, style) = match head.strip_prefix('\'') {
        Some(quoted) => (quoted.trim_end_matches('\''), HeredocStyle::Nowdoc),
        None => (head.trim_matches('"'), HeredocStyle::Heredoc),
    };

    let rest = lex.remainder();
    let mut line_start = 0;
    loop {
        let line = &rest[line_start..];
        let indented = line.trim_start_matches([' ', '\t']);
        if let Some(after) = indented.strip_prefix(label) {
            if !after.starts_with(is_ident_char) {
                lex.bump(rest.len() - after.len());
                return Some(style);
            }
        }
        line_start += line.find('\n')? + 1;
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || !c.is_ascii()
}

/// Whether a double-quoted literal interpolates anything.
fn has_interpolation(text: &str) -> bool {
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            '$' => {
                if chars
                    .peek()
                    .is_some_and(|&n| n == '{' || n == '_' || n.is_alphabetic() || !n.is_ascii())
                {
                    return true;
                }
            }
            '{' if chars.peek() == Some(&'$') => return true,
            _ => {}
        }
    }
    false
}

impl RawToken {
    /// Convert to the shared token kind.
    ///
    /// `text` is the matched slice, used to classify double-quoted strings.
    pub(crate) fn kind(self, text: &str) -> TokenKind {
        match self {
            RawToken::Whitespace => TokenKind::Whitespace,
            RawToken::LineComment | RawToken::BlockComment(CommentStyle::Block) => {
                TokenKind::Comment
            }
            RawToken::BlockComment(CommentStyle::Doc) => TokenKind::DocComment,
            RawToken::CloseTag => TokenKind::CloseTag,
            RawToken::Variable => TokenKind::Variable,
            RawToken::Identifier => TokenKind::Identifier,
            RawToken::LNumber => TokenKind::LNumber,
            RawToken::DNumber => TokenKind::DNumber,
            RawToken::SingleQuoted => TokenKind::ConstantString,
            RawToken::DoubleQuoted if has_interpolation(text) => TokenKind::EncapsedString,
            RawToken::DoubleQuoted => TokenKind::ConstantString,
            RawToken::Backtick => TokenKind::ShellCommand,
            RawToken::Heredoc(_) => TokenKind::Heredoc,
            RawToken::Abstract => TokenKind::Abstract,
            RawToken::Array => TokenKind::Array,
            RawToken::As => TokenKind::As,
            RawToken::Break => TokenKind::Break,
            RawToken::Callable => TokenKind::Callable,
            RawToken::Case => TokenKind::Case,
            RawToken::Catch => TokenKind::Catch,
            RawToken::Class => TokenKind::Class,
            RawToken::Clone => TokenKind::Clone,
            RawToken::Const => TokenKind::Const,
            RawToken::Continue => TokenKind::Continue,
            RawToken::Declare => TokenKind::Declare,
            RawToken::Default => TokenKind::Default,
            RawToken::Do => TokenKind::Do,
            RawToken::Echo => TokenKind::Echo,
            RawToken::Else => TokenKind::Else,
            RawToken::ElseIf => TokenKind::ElseIf,
            RawToken::Empty => TokenKind::Empty,
            RawToken::EndDeclare => TokenKind::EndDeclare,
            RawToken::EndFor => TokenKind::EndFor,
            RawToken::EndForeach => TokenKind::EndForeach,
            RawToken::EndIf => TokenKind::EndIf,
            RawToken::EndSwitch => TokenKind::EndSwitch,
            RawToken::EndWhile => TokenKind::EndWhile,
            RawToken::Eval => TokenKind::Eval,
            RawToken::Exit => TokenKind::Exit,
            RawToken::Extends => TokenKind::Extends,
            RawToken::Final => TokenKind::Final,
            RawToken::Finally => TokenKind::Finally,
            RawToken::Fn => TokenKind::Fn,
            RawToken::For => TokenKind::For,
            RawToken::Foreach => TokenKind::Foreach,
            RawToken::Function => TokenKind::Function,
            RawToken::Global => TokenKind::Global,
            RawToken::Goto => TokenKind::Goto,
            RawToken::HaltCompiler => TokenKind::HaltCompiler,
            RawToken::If => TokenKind::If,
            RawToken::Implements => TokenKind::Implements,
            RawToken::Include => TokenKind::Include,
            RawToken::IncludeOnce => TokenKind::IncludeOnce,
            RawToken::InstanceOf => TokenKind::InstanceOf,
            RawToken::InsteadOf => TokenKind::InsteadOf,
            RawToken::Interface => TokenKind::Interface,
            RawToken::Isset => TokenKind::Isset,
            RawToken::List => TokenKind::List,
            RawToken::LogicalAnd => TokenKind::LogicalAnd,
            RawToken::LogicalOr => TokenKind::LogicalOr,
            RawToken::LogicalXor => TokenKind::LogicalXor,
            RawToken::Namespace => TokenKind::Namespace,
            RawToken::New => TokenKind::New,
            RawToken::Print => TokenKind::Print,
            RawToken::Private => TokenKind::Private,
            RawToken::Protected => TokenKind::Protected,
            RawToken::Public => TokenKind::Public,
            RawToken::Require => TokenKind::Require,
            RawToken::RequireOnce => TokenKind::RequireOnce,
            RawToken::Return => TokenKind::Return,
            RawToken::Static => TokenKind::Static,
            RawToken::Switch => TokenKind::Switch,
            RawToken::Throw => TokenKind::Throw,
            RawToken::Trait => TokenKind::Trait,
            RawToken::Try => TokenKind::Try,
            RawToken::Unset => TokenKind::Unset,
            RawToken::Use => TokenKind::Use,
            RawToken::Var => TokenKind::Var,
            RawToken::While => TokenKind::While,
            RawToken::Yield(YieldForm::Plain) => TokenKind::Yield,
            RawToken::Yield(YieldForm::From) => TokenKind::YieldFrom,
            RawToken::ClassC => TokenKind::ClassC,
            RawToken::TraitC => TokenKind::TraitC,
            RawToken::FuncC => TokenKind::FuncC,
            RawToken::MethodC => TokenKind::MethodC,
            RawToken::Line => TokenKind::Line,
            RawToken::File => TokenKind::File,
            RawToken::Dir => TokenKind::Dir,
            RawToken::NsC => TokenKind::NsC,
            RawToken::PlusEqual => TokenKind::PlusEqual,
            RawToken::MinusEqual => TokenKind::MinusEqual,
            RawToken::MulEqual => TokenKind::MulEqual,
            RawToken::DivEqual => TokenKind::DivEqual,
            RawToken::ConcatEqual => TokenKind::ConcatEqual,
            RawToken::ModEqual => TokenKind::ModEqual,
            RawToken::AndEqual => TokenKind::AndEqual,
            RawToken::OrEqual => TokenKind::OrEqual,
            RawToken::XorEqual => TokenKind::XorEqual,
            RawToken::ShiftLeftEqual => TokenKind::ShiftLeftEqual,
            RawToken::ShiftRightEqual => TokenKind::ShiftRightEqual,
            RawToken::PowEqual => TokenKind::PowEqual,
            RawToken::CoalesceEqual => TokenKind::CoalesceEqual,
            RawToken::Coalesce => TokenKind::Coalesce,
            RawToken::BooleanOr => TokenKind::BooleanOr,
            RawToken::BooleanAnd => TokenKind::BooleanAnd,
            RawToken::IsEqual => TokenKind::IsEqual,
            RawToken::IsNotEqual => TokenKind::IsNotEqual,
            RawToken::IsIdentical => TokenKind::IsIdentical,
            RawToken::IsNotIdentical => TokenKind::IsNotIdentical,
            RawToken::IsSmallerOrEqual => TokenKind::IsSmallerOrEqual,
            RawToken::IsGreaterOrEqual => TokenKind::IsGreaterOrEqual,
            RawToken::Spaceship => TokenKind::Spaceship,
            RawToken::ShiftLeft => TokenKind::ShiftLeft,
            RawToken::ShiftRight => TokenKind::ShiftRight,
            RawToken::Inc => TokenKind::Inc,
            RawToken::Dec => TokenKind::Dec,
            RawToken::ObjectOperator => TokenKind::ObjectOperator,
            RawToken::DoubleArrow => TokenKind::DoubleArrow,
            RawToken::DoubleColon => TokenKind::DoubleColon,
            RawToken::NsSeparator => TokenKind::NsSeparator,
            RawToken::Ellipsis => TokenKind::Ellipsis,
            RawToken::Pow => TokenKind::Pow,
            RawToken::Semicolon => TokenKind::Semicolon,
            RawToken::Comma => TokenKind::Comma,
            RawToken::Dot => TokenKind::Dot,
            RawToken::LParen(Paren::Open) => TokenKind::LParen,
            RawToken::LParen(Paren::Cast(kind)) => kind,
            RawToken::RParen => TokenKind::RParen,
            RawToken::LBracket => TokenKind::LBracket,
            RawToken::RBracket => TokenKind::RBracket,
            RawToken::LBrace => TokenKind::LBrace,
            RawToken::RBrace => TokenKind::RBrace,
            RawToken::Plus => TokenKind::Plus,
            RawToken::Minus => TokenKind::Minus,
            RawToken::Star => TokenKind::Star,
            RawToken::Slash => TokenKind::Slash,
            RawToken::Percent => TokenKind::Percent,
            RawToken::Equal => TokenKind::Equal,
            RawToken::Less => TokenKind::Less,
            RawToken::Greater => TokenKind::Greater,
            RawToken::Bang => TokenKind::Bang,
            RawToken::Tilde => TokenKind::Tilde,
            RawToken::Caret => TokenKind::Caret,
            RawToken::Amp => TokenKind::Amp,
            RawToken::Pipe => TokenKind::Pipe,
            RawToken::Question => TokenKind::Question,
            RawToken::Colon => TokenKind::Colon,
            RawToken::At => TokenKind::At,
            RawToken::Dollar => TokenKind::Dollar,
        }
    }
}

#[cfg(test)]
mod tests;
