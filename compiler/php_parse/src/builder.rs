//! Deferred node construction.
//!
//! A rule calls [`Parser::open`] when it sees its first token and
//! [`Parser::finish`] once all of its fields are parsed. The [`NodeStart`]
//! handle is consumed by `finish`, so a node cannot be sealed twice.

mod trivia;

pub(crate) use trivia::Trivia;

use php_ir::{Comment, Location, Node, NodeId, NodeKind, Position};

use crate::Parser;

/// An opened, not yet sealed node.
#[must_use = "an opened node must be passed to `finish` or `abandon`"]
#[derive(Debug)]
pub(crate) struct NodeStart {
    start: Position,
    leading: Vec<Comment>,
}

/// Span and trivia of a sealed node.
pub(crate) struct Sealed {
    pub(crate) id: NodeId,
    pub(crate) loc: Location,
    pub(crate) leading: Vec<Comment>,
    pub(crate) trailing: Vec<Comment>,
}

impl Parser<'_> {
    /// Open a node at the current token, taking queued comments as its
    /// leading trivia.
    pub(crate) fn open(&mut self) -> NodeStart {
        self.open_nodes += 1;
        let leading = if self.options.extract_doc {
            self.trivia.drain_leading(self.stream.comments())
        } else {
            Vec::new()
        };
        NodeStart {
            start: self.stream.start(),
            leading,
        }
    }

    /// Open a node that starts at an earlier position, typically the start
    /// of an already sealed left operand. Takes no trivia.
    pub(crate) fn open_at(&mut self, start: Position) -> NodeStart {
        self.open_nodes += 1;
        NodeStart {
            start,
            leading: Vec::new(),
        }
    }

    /// Seal a node ending at the previous-token boundary.
    pub(crate) fn finish(&mut self, start: NodeStart, kind: NodeKind) -> Node {
        let Sealed {
            id,
            loc,
            leading,
            trailing,
        } = self.seal(start);
        Node {
            id,
            kind,
            loc,
            leading_comments: leading,
            trailing_comments: trailing,
        }
    }

    /// Drop an opened node that turned out not to be needed, handing its
    /// leading trivia to `node`.
    pub(crate) fn abandon(&mut self, start: NodeStart, node: &mut Node) {
        self.open_nodes = self.open_nodes.saturating_sub(1);
        if !start.leading.is_empty() {
            let mut leading = start.leading;
            leading.append(&mut node.leading_comments);
            node.leading_comments = leading;
        }
    }

    pub(crate) fn seal(&mut self, start: NodeStart) -> Sealed {
        let NodeStart { start, leading } = start;
        let prev = self.stream.prev();
        // a rule that consumed nothing is zero-width at its start
        let end = if prev.offset >= start.offset {
            prev
        } else {
            start
        };
        let id = self.fresh_id();
        self.open_nodes = self.open_nodes.saturating_sub(1);

        let trailing = if self.options.extract_doc {
            self.trivia
                .post_attach(id, self.stream.comments(), prev, self.stream.is_eof())
        } else {
            Vec::new()
        };

        Sealed {
            id,
            loc: Location::new(start, end),
            leading,
            trailing,
        }
    }

    pub(crate) fn fresh_id(&mut self) -> NodeId {
        let id = NodeId::new(self.next_id);
        self.next_id += 1;
        id
    }
}

#[cfg(test)]
mod tests;
