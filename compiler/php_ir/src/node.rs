//! Syntax tree nodes.
//!
//! One [`NodeKind`] variant per grammar production. Parents own their
//! children through `Box`/`Vec`, so the tree has no sharing and no cycles.
//! Every node carries a [`Location`] and its leading/trailing comments.

mod ops;
mod visit;

pub use ops::{
    AssignOp, BinaryOp, CastType, DeclareMode, EncapsedKind, Modifiers, NameResolution,
    UnaryOp, UpdateOp, UseKind, Visibility,
};

use crate::{Comment, Location, TokenLogEntry};
use std::fmt;

/// Identity of a sealed node, unique within one parse.
///
/// Ids are handed out in seal order, so a child always has a smaller id
/// than its parent.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub const fn new(raw: u32) -> Self {
        NodeId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A sealed syntax tree node.
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub id: NodeId,
    pub kind: NodeKind,
    pub loc: Location,
    pub leading_comments: Vec<Comment>,
    pub trailing_comments: Vec<Comment>,
}

impl Node {
    /// Production name of this node, e.g. `"for"` or `"bin"`.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn is_error(&self) -> bool {
        matches!(self.kind, NodeKind::Error { .. })
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?} ", self.id, self.loc)?;
        self.kind.fmt(f)
    }
}

/// Name part of a variable reference.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VariableName {
    /// `$name`, stored without the `$`.
    Named(String),
    /// `$$expr` or `${expr}`.
    Dynamic(Box<Node>),
}

/// Kind-specific payload of a node.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    // === Statements ===
    Echo {
        expressions: Vec<Node>,
        shortform: bool,
    },
    Inline {
        raw: String,
    },
    Block {
        children: Vec<Node>,
    },
    ExpressionStatement {
        expression: Box<Node>,
    },
    If {
        test: Box<Node>,
        body: Box<Node>,
        alternate: Option<Box<Node>>,
        shortform: bool,
    },
    While {
        test: Box<Node>,
        body: Box<Node>,
        shortform: bool,
    },
    Do {
        test: Box<Node>,
        body: Box<Node>,
    },
    For {
        init: Vec<Node>,
        test: Vec<Node>,
        increment: Vec<Node>,
        body: Box<Node>,
        shortform: bool,
    },
    Foreach {
        source: Box<Node>,
        key: Option<Box<Node>>,
        value: Box<Node>,
        body: Box<Node>,
        shortform: bool,
    },
    Switch {
        test: Box<Node>,
        body: Box<Node>,
        shortform: bool,
    },
    Case {
        test: Option<Box<Node>>,
        body: Vec<Node>,
    },
    Break {
        level: Option<Box<Node>>,
    },
    Continue {
        level: Option<Box<Node>>,
    },
    Return {
        expression: Option<Box<Node>>,
    },
    Global {
        items: Vec<Node>,
    },
    Static {
        variables: Vec<Node>,
    },
    StaticVariable {
        variable: Box<Node>,
        default: Option<Box<Node>>,
    },
    Unset {
        variables: Vec<Node>,
    },
    Function {
        name: Box<Node>,
        arguments: Vec<Node>,
        by_ref: bool,
        return_type: Option<Box<Node>>,
        nullable: bool,
        body: Box<Node>,
    },
    Parameter {
        name: Box<Node>,
        type_hint: Option<Box<Node>>,
        default: Option<Box<Node>>,
        by_ref: bool,
        variadic: bool,
        nullable: bool,
    },
    Class {
        name: Option<Box<Node>>,
        extends: Option<Box<Node>>,
        implements: Vec<Node>,
        body: Vec<Node>,
        is_abstract: bool,
        is_final: bool,
        is_anonymous: bool,
    },
    Interface {
        name: Box<Node>,
        extends: Vec<Node>,
        body: Vec<Node>,
    },
    Trait {
        name: Box<Node>,
        body: Vec<Node>,
    },
    /// `public ?int $a = 1, $b;` shares one type among its properties.
    PropertyStatement {
        properties: Vec<Node>,
        modifiers: Modifiers,
        type_hint: Option<Box<Node>>,
        nullable: bool,
    },
    Property {
        name: Box<Node>,
        value: Option<Box<Node>>,
    },
    ClassConstant {
        constants: Vec<Node>,
        modifiers: Modifiers,
    },
    ConstantStatement {
        constants: Vec<Node>,
    },
    Constant {
        name: Box<Node>,
        value: Box<Node>,
    },
    Method {
        name: Box<Node>,
        arguments: Vec<Node>,
        by_ref: bool,
        return_type: Option<Box<Node>>,
        nullable: bool,
        body: Option<Box<Node>>,
        modifiers: Modifiers,
    },
    TraitUse {
        traits: Vec<Node>,
        /// Raw text of an adaptation block (`{ a as b; }`), if any.
        adaptations: Option<String>,
    },
    Namespace {
        name: Option<Box<Node>>,
        children: Vec<Node>,
        with_braces: bool,
    },
    UseGroup {
        prefix: Option<Box<Node>>,
        kind: UseKind,
        items: Vec<Node>,
    },
    UseItem {
        name: Box<Node>,
        alias: Option<Box<Node>>,
        kind: UseKind,
    },
    Try {
        body: Box<Node>,
        catches: Vec<Node>,
        always: Option<Box<Node>>,
    },
    Catch {
        types: Vec<Node>,
        variable: Box<Node>,
        body: Box<Node>,
    },
    Throw {
        what: Box<Node>,
    },
    Goto {
        label: Box<Node>,
    },
    Label {
        name: Box<Node>,
    },
    Declare {
        directives: Vec<Node>,
        children: Vec<Node>,
        mode: DeclareMode,
    },
    DeclareDirective {
        key: Box<Node>,
        value: Box<Node>,
    },
    HaltCompiler {
        after: String,
    },
    /// Empty statement (`;`) or a skipped destructuring slot.
    Noop,

    // === Expressions ===
    Variable {
        name: VariableName,
    },
    Bin {
        op: BinaryOp,
        left: Box<Node>,
        right: Box<Node>,
    },
    Unary {
        op: UnaryOp,
        what: Box<Node>,
    },
    Assign {
        op: AssignOp,
        left: Box<Node>,
        right: Box<Node>,
    },
    Ternary {
        test: Box<Node>,
        /// `None` for the short `?:` form.
        true_expr: Option<Box<Node>>,
        false_expr: Box<Node>,
    },
    Coalesce {
        test: Box<Node>,
        ifnull: Box<Node>,
    },
    Pre {
        op: UpdateOp,
        what: Box<Node>,
    },
    Post {
        op: UpdateOp,
        what: Box<Node>,
    },
    Cast {
        kind: CastType,
        raw: String,
        what: Box<Node>,
    },
    Silent {
        expr: Box<Node>,
    },
    Isset {
        variables: Vec<Node>,
    },
    Empty {
        expression: Box<Node>,
    },
    Include {
        target: Box<Node>,
        once: bool,
        require: bool,
    },
    Eval {
        source: Box<Node>,
    },
    Exit {
        status: Option<Box<Node>>,
        use_die: bool,
    },
    Print {
        expression: Box<Node>,
    },
    Clone {
        what: Box<Node>,
    },
    New {
        what: Box<Node>,
        arguments: Vec<Node>,
    },
    Call {
        what: Box<Node>,
        arguments: Vec<Node>,
    },
    PropertyLookup {
        what: Box<Node>,
        offset: Box<Node>,
    },
    StaticLookup {
        what: Box<Node>,
        offset: Box<Node>,
    },
    OffsetLookup {
        what: Box<Node>,
        /// `None` for the append form `$a[]`.
        offset: Option<Box<Node>>,
    },
    Closure {
        arguments: Vec<Node>,
        uses: Vec<Node>,
        by_ref: bool,
        return_type: Option<Box<Node>>,
        nullable: bool,
        body: Box<Node>,
        is_static: bool,
    },
    ArrowFunc {
        arguments: Vec<Node>,
        by_ref: bool,
        return_type: Option<Box<Node>>,
        nullable: bool,
        body: Box<Node>,
        is_static: bool,
    },
    Array {
        items: Vec<Node>,
        shortform: bool,
    },
    Entry {
        key: Option<Box<Node>>,
        value: Box<Node>,
        unpack: bool,
    },
    List {
        items: Vec<Node>,
        shortform: bool,
    },
    /// `&expr` in a by-reference position.
    ByRef {
        what: Box<Node>,
    },
    /// `...expr` in an argument list.
    Variadic {
        what: Box<Node>,
    },
    Name {
        name: String,
        resolution: NameResolution,
    },
    Identifier {
        name: String,
    },
    String {
        value: String,
        raw: String,
        is_double_quote: bool,
    },
    Encapsed {
        raw: String,
        kind: EncapsedKind,
    },
    Nowdoc {
        raw: String,
        label: String,
        value: String,
    },
    Number {
        value: String,
    },
    Boolean {
        value: bool,
        raw: String,
    },
    Null {
        raw: String,
    },
    MagicConstant {
        value: String,
    },
    Yield {
        key: Option<Box<Node>>,
        value: Option<Box<Node>>,
    },
    YieldFrom {
        value: Box<Node>,
    },
    Parenthesis {
        inner: Box<Node>,
    },

    // === Recovery ===
    /// Placeholder for a child that failed to parse in fault-tolerant mode.
    Error {
        message: String,
        token: Option<String>,
        line: u32,
        expected: Option<String>,
    },
}

impl NodeKind {
    /// Production name.
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Echo { .. } => "echo",
            NodeKind::Inline { .. } => "inline",
            NodeKind::Block { .. } => "block",
            NodeKind::ExpressionStatement { .. } => "expressionstatement",
            NodeKind::If { .. } => "if",
            NodeKind::While { .. } => "while",
            NodeKind::Do { .. } => "do",
            NodeKind::For { .. } => "for",
            NodeKind::Foreach { .. } => "foreach",
            NodeKind::Switch { .. } => "switch",
            NodeKind::Case { .. } => "case",
            NodeKind::Break { .. } => "break",
            NodeKind::Continue { .. } => "continue",
            NodeKind::Return { .. } => "return",
            NodeKind::Global { .. } => "global",
            NodeKind::Static { .. } => "static",
            NodeKind::StaticVariable { .. } => "staticvariable",
            NodeKind::Unset { .. } => "unset",
            NodeKind::Function { .. } => "function",
            NodeKind::Parameter { .. } => "parameter",
            NodeKind::Class { .. } => "class",
            NodeKind::Interface { .. } => "interface",
            NodeKind::Trait { .. } => "trait",
            NodeKind::PropertyStatement { .. } => "propertystatement",
            NodeKind::Property { .. } => "property",
            NodeKind::ClassConstant { .. } => "classconstant",
            NodeKind::ConstantStatement { .. } => "constantstatement",
            NodeKind::Constant { .. } => "constant",
            NodeKind::Method { .. } => "method",
            NodeKind::TraitUse { .. } => "traituse",
            NodeKind::Namespace { .. } => "namespace",
            NodeKind::UseGroup { .. } => "usegroup",
            NodeKind::UseItem { .. } => "useitem",
            NodeKind::Try { .. } => "try",
            NodeKind::Catch { .. } => "catch",
            NodeKind::Throw { .. } => "throw",
            NodeKind::Goto { .. } => "goto",
            NodeKind::Label { .. } => "label",
            NodeKind::Declare { .. } => "declare",
            NodeKind::DeclareDirective { .. } => "declaredirective",
            NodeKind::HaltCompiler { .. } => "halt",
            NodeKind::Noop => "noop",
            NodeKind::Variable { .. } => "variable",
            NodeKind::Bin { .. } => "bin",
            NodeKind::Unary { .. } => "unary",
            NodeKind::Assign { .. } => "assign",
            NodeKind::Ternary { .. } => "retif",
            NodeKind::Coalesce { .. } => "coalesce",
            NodeKind::Pre { .. } => "pre",
            NodeKind::Post { .. } => "post",
            NodeKind::Cast { .. } => "cast",
            NodeKind::Silent { .. } => "silent",
            NodeKind::Isset { .. } => "isset",
            NodeKind::Empty { .. } => "empty",
            NodeKind::Include { .. } => "include",
            NodeKind::Eval { .. } => "eval",
            NodeKind::Exit { .. } => "exit",
            NodeKind::Print { .. } => "print",
            NodeKind::Clone { .. } => "clone",
            NodeKind::New { .. } => "new",
            NodeKind::Call { .. } => "call",
            NodeKind::PropertyLookup { .. } => "propertylookup",
            NodeKind::StaticLookup { .. } => "staticlookup",
            NodeKind::OffsetLookup { .. } => "offsetlookup",
            NodeKind::Closure { .. } => "closure",
            NodeKind::ArrowFunc { .. } => "arrowfunc",
            NodeKind::Array { .. } => "array",
            NodeKind::Entry { .. } => "entry",
            NodeKind::List { .. } => "list",
            NodeKind::ByRef { .. } => "byref",
            NodeKind::Variadic { .. } => "variadic",
            NodeKind::Name { .. } => "name",
            NodeKind::Identifier { .. } => "identifier",
            NodeKind::String { .. } => "string",
            NodeKind::Encapsed { .. } => "encapsed",
            NodeKind::Nowdoc { .. } => "nowdoc",
            NodeKind::Number { .. } => "number",
            NodeKind::Boolean { .. } => "boolean",
            NodeKind::Null { .. } => "nullkeyword",
            NodeKind::MagicConstant { .. } => "magic",
            NodeKind::Yield { .. } => "yield",
            NodeKind::YieldFrom { .. } => "yieldfrom",
            NodeKind::Parenthesis { .. } => "parenthesis",
            NodeKind::Error { .. } => "error",
        }
    }
}

/// Root of a parsed file.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Program {
    pub id: NodeId,
    pub children: Vec<Node>,
    /// Every recoverable error, in the order it was raised.
    pub errors: Vec<Node>,
    /// All comments in source order; `None` unless documentation
    /// extraction was enabled.
    pub comments: Option<Vec<Comment>>,
    /// Every raw token; `None` unless token logging was enabled.
    pub tokens: Option<Vec<TokenLogEntry>>,
    pub loc: Location,
    pub leading_comments: Vec<Comment>,
    pub trailing_comments: Vec<Comment>,
}

impl Program {
    pub fn name(&self) -> &'static str {
        "program"
    }
}

#[cfg(test)]
mod tests;
