//! Child traversal.
//!
//! A single macro lists the child fields of every node kind; match
//! ergonomics turn it into both the shared and the mutable traversal.

use super::{Node, NodeId, NodeKind, Program, VariableName};
use crate::Location;

macro_rules! each_child {
    ($kind:expr, $f:ident) => {
        match $kind {
            NodeKind::Echo { expressions: list, .. }
            | NodeKind::Block { children: list }
            | NodeKind::Global { items: list }
            | NodeKind::Static { variables: list }
            | NodeKind::Unset { variables: list }
            | NodeKind::ConstantStatement { constants: list }
            | NodeKind::Isset { variables: list }
            | NodeKind::Array { items: list, .. }
            | NodeKind::List { items: list, .. } => {
                for child in list {
                    $f(child);
                }
            }
            NodeKind::ExpressionStatement { expression: a }
            | NodeKind::Throw { what: a }
            | NodeKind::Goto { label: a }
            | NodeKind::Label { name: a }
            | NodeKind::Unary { what: a, .. }
            | NodeKind::Pre { what: a, .. }
            | NodeKind::Post { what: a, .. }
            | NodeKind::Cast { what: a, .. }
            | NodeKind::Silent { expr: a }
            | NodeKind::Empty { expression: a }
            | NodeKind::Include { target: a, .. }
            | NodeKind::Eval { source: a }
            | NodeKind::Print { expression: a }
            | NodeKind::Clone { what: a }
            | NodeKind::ByRef { what: a }
            | NodeKind::Variadic { what: a }
            | NodeKind::YieldFrom { value: a }
            | NodeKind::Parenthesis { inner: a } => {
                $f(a);
            }
            NodeKind::Do { test: a, body: b }
            | NodeKind::While { test: a, body: b, .. }
            | NodeKind::Switch { test: a, body: b, .. }
            | NodeKind::Constant { name: a, value: b }
            | NodeKind::DeclareDirective { key: a, value: b }
            | NodeKind::Bin { left: a, right: b, .. }
            | NodeKind::Assign { left: a, right: b, .. }
            | NodeKind::Coalesce { test: a, ifnull: b }
            | NodeKind::PropertyLookup { what: a, offset: b }
            | NodeKind::StaticLookup { what: a, offset: b } => {
                $f(a);
                $f(b);
            }
            NodeKind::Break { level: opt }
            | NodeKind::Continue { level: opt }
            | NodeKind::Return { expression: opt }
            | NodeKind::Exit { status: opt, .. } => {
                if let Some(a) = opt {
                    $f(a);
                }
            }
            NodeKind::StaticVariable {
                variable: a,
                default: opt,
            }
            | NodeKind::OffsetLookup { what: a, offset: opt } => {
                $f(a);
                if let Some(b) = opt {
                    $f(b);
                }
            }
            NodeKind::UseItem {
                name: a, alias: opt, ..
            } => {
                $f(a);
                if let Some(b) = opt {
                    $f(b);
                }
            }
            NodeKind::Entry {
                key: opt, value: a, ..
            } => {
                if let Some(k) = opt {
                    $f(k);
                }
                $f(a);
            }
            NodeKind::If {
                test,
                body,
                alternate,
                ..
            } => {
                $f(test);
                $f(body);
                if let Some(a) = alternate {
                    $f(a);
                }
            }
            NodeKind::For {
                init,
                test,
                increment,
                body,
                ..
            } => {
                for child in init {
                    $f(child);
                }
                for child in test {
                    $f(child);
                }
                for child in increment {
                    $f(child);
                }
                $f(body);
            }
            NodeKind::Foreach {
                source,
                key,
                value,
                body,
                ..
            } => {
                $f(source);
                if let Some(k) = key {
                    $f(k);
                }
                $f(value);
                $f(body);
            }
            NodeKind::Case { test, body } => {
                if let Some(t) = test {
                    $f(t);
                }
                for child in body {
                    $f(child);
                }
            }
            NodeKind::Function {
                name,
                arguments,
                return_type,
                body,
                ..
            } => {
                $f(name);
                for child in arguments {
                    $f(child);
                }
                if let Some(t) = return_type {
                    $f(t);
                }
                $f(body);
            }
            NodeKind::Method {
                name,
                arguments,
                return_type,
                body,
                ..
            } => {
                $f(name);
                for child in arguments {
                    $f(child);
                }
                if let Some(t) = return_type {
                    $f(t);
                }
                if let Some(b) = body {
                    $f(b);
                }
            }
            NodeKind::Parameter {
                name,
                type_hint,
                default,
                ..
            } => {
                if let Some(t) = type_hint {
                    $f(t);
                }
                $f(name);
                if let Some(d) = default {
                    $f(d);
                }
            }
            NodeKind::Class {
                name,
                extends,
                implements,
                body,
                ..
            } => {
                if let Some(n) = name {
                    $f(n);
                }
                if let Some(e) = extends {
                    $f(e);
                }
                for child in implements {
                    $f(child);
                }
                for child in body {
                    $f(child);
                }
            }
            NodeKind::Interface {
                name,
                extends,
                body,
            } => {
                $f(name);
                for child in extends {
                    $f(child);
                }
                for child in body {
                    $f(child);
                }
            }
            NodeKind::Trait { name, body } => {
                $f(name);
                for child in body {
                    $f(child);
                }
            }
            NodeKind::PropertyStatement {
                properties,
                type_hint,
                ..
            } => {
                if let Some(t) = type_hint {
                    $f(t);
                }
                for child in properties {
                    $f(child);
                }
            }
            NodeKind::ClassConstant { constants, .. } => {
                for child in constants {
                    $f(child);
                }
            }
            NodeKind::Property { name, value } => {
                $f(name);
                if let Some(v) = value {
                    $f(v);
                }
            }
            NodeKind::TraitUse { traits, .. } => {
                for child in traits {
                    $f(child);
                }
            }
            NodeKind::Namespace { name, children, .. } => {
                if let Some(n) = name {
                    $f(n);
                }
                for child in children {
                    $f(child);
                }
            }
            NodeKind::UseGroup { prefix, items, .. } => {
                if let Some(p) = prefix {
                    $f(p);
                }
                for child in items {
                    $f(child);
                }
            }
            NodeKind::Try {
                body,
                catches,
                always,
            } => {
                $f(body);
                for child in catches {
                    $f(child);
                }
                if let Some(a) = always {
                    $f(a);
                }
            }
            NodeKind::Catch {
                types,
                variable,
                body,
            } => {
                for child in types {
                    $f(child);
                }
                $f(variable);
                $f(body);
            }
            NodeKind::Declare {
                directives,
                children,
                ..
            } => {
                for child in directives {
                    $f(child);
                }
                for child in children {
                    $f(child);
                }
            }
            NodeKind::Variable { name } => {
                if let VariableName::Dynamic(inner) = name {
                    $f(inner);
                }
            }
            NodeKind::Ternary {
                test,
                true_expr,
                false_expr,
            } => {
                $f(test);
                if let Some(t) = true_expr {
                    $f(t);
                }
                $f(false_expr);
            }
            NodeKind::New { what, arguments } | NodeKind::Call { what, arguments } => {
                $f(what);
                for child in arguments {
                    $f(child);
                }
            }
            NodeKind::Closure {
                arguments,
                uses,
                return_type,
                body,
                ..
            } => {
                for child in arguments {
                    $f(child);
                }
                for child in uses {
                    $f(child);
                }
                if let Some(t) = return_type {
                    $f(t);
                }
                $f(body);
            }
            NodeKind::ArrowFunc {
                arguments,
                return_type,
                body,
                ..
            } => {
                for child in arguments {
                    $f(child);
                }
                if let Some(t) = return_type {
                    $f(t);
                }
                $f(body);
            }
            NodeKind::Yield { key, value } => {
                if let Some(k) = key {
                    $f(k);
                }
                if let Some(v) = value {
                    $f(v);
                }
            }
            NodeKind::Inline { .. }
            | NodeKind::HaltCompiler { .. }
            | NodeKind::Noop
            | NodeKind::Name { .. }
            | NodeKind::Identifier { .. }
            | NodeKind::String { .. }
            | NodeKind::Encapsed { .. }
            | NodeKind::Nowdoc { .. }
            | NodeKind::Number { .. }
            | NodeKind::Boolean { .. }
            | NodeKind::Null { .. }
            | NodeKind::MagicConstant { .. }
            | NodeKind::Error { .. } => {}
        }
    };
}

impl Node {
    /// Call `f` on every direct child, in source order.
    pub fn for_each_child(&self, f: &mut dyn FnMut(&Node)) {
        each_child!(&self.kind, f);
    }

    /// Mutable counterpart of [`Node::for_each_child`].
    pub fn for_each_child_mut(&mut self, f: &mut dyn FnMut(&mut Node)) {
        each_child!(&mut self.kind, f);
    }

    /// Direct children, in source order.
    pub fn children<'a>(&'a self) -> Vec<&'a Node> {
        let mut out = Vec::new();
        let mut push = |child: &'a Node| out.push(child);
        each_child!(&self.kind, push);
        out
    }

    /// Mutable counterpart of [`Node::children`].
    pub fn children_mut<'a>(&'a mut self) -> Vec<&'a mut Node> {
        let mut out = Vec::new();
        let mut push = |child: &'a mut Node| out.push(child);
        each_child!(&mut self.kind, push);
        out
    }

    /// Visit this node and all descendants, parents before children.
    ///
    /// Runs on an explicit work list, so tree depth is not bounded by the
    /// native stack.
    pub fn walk(&self, f: &mut dyn FnMut(&Node)) {
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            f(node);
            pending.extend(node.children().into_iter().rev());
        }
    }

    /// Replace every direct child with an empty node and return the
    /// originals.
    fn detach_children(&mut self) -> Vec<Node> {
        self.children_mut()
            .into_iter()
            .map(|child| std::mem::replace(child, Node::hollow()))
            .collect()
    }

    fn hollow() -> Node {
        Node {
            id: NodeId::new(0),
            kind: NodeKind::Noop,
            loc: Location::default(),
            leading_comments: Vec::new(),
            trailing_comments: Vec::new(),
        }
    }
}

impl Program {
    /// Call `f` on every top-level child, then on every recorded error.
    pub fn for_each_child(&self, f: &mut dyn FnMut(&Node)) {
        for child in &self.children {
            f(child);
        }
        for error in &self.errors {
            f(error);
        }
    }

    /// Visit every node in the tree (errors included), parents first.
    pub fn walk(&self, f: &mut dyn FnMut(&Node)) {
        self.for_each_child(&mut |child| child.walk(f));
    }

    /// Mutable visit of every top-level child and its descendants,
    /// parents first.
    pub fn walk_mut(&mut self, f: &mut dyn FnMut(&mut Node)) {
        let mut pending: Vec<&mut Node> = self.children.iter_mut().rev().collect();
        while let Some(node) = pending.pop() {
            f(node);
            pending.extend(node.children_mut().into_iter().rev());
        }
    }
}

/// Dismantles the tree from a work list, one level at a time.
impl Drop for Program {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        pending.append(&mut self.errors);
        while let Some(mut node) = pending.pop() {
            pending.extend(node.detach_children());
        }
    }
}
