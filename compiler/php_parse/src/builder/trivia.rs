//! Comment attachment.
//!
//! Comments are queued in arrival order and read through a cursor that only
//! moves forward:
//!
//! - opening a node takes every unread comment as its leading trivia
//! - sealing a node hands the unread comments that end before the
//!   previous-token boundary to the previously sealed node as trailing
//!   trivia
//! - sealing at end of input with no previously sealed node keeps the
//!   remainder on the node being sealed
//!
//! The previously sealed node already belongs to its parent by then, so its
//! trailing comments are parked by id and applied once the tree is done.

use php_ir::{Comment, Node, NodeId, Position, Program};
use rustc_hash::FxHashMap;

#[derive(Default, Debug)]
pub(crate) struct Trivia {
    cursor: usize,
    last_sealed: Option<NodeId>,
    deferred: FxHashMap<NodeId, Vec<Comment>>,
}

impl Trivia {
    /// Every unread comment, for a node being opened.
    pub(crate) fn drain_leading(&mut self, queue: &[Comment]) -> Vec<Comment> {
        let unread = queue.get(self.cursor..).unwrap_or_default();
        self.cursor = queue.len();
        unread.to_vec()
    }

    pub(crate) fn has_unread(&self, queue: &[Comment]) -> bool {
        self.cursor < queue.len()
    }

    /// Attachment step run when node `id` is sealed.
    ///
    /// Returns the comments that belong to `id` itself.
    pub(crate) fn post_attach(
        &mut self,
        id: NodeId,
        queue: &[Comment],
        boundary: Position,
        at_eof: bool,
    ) -> Vec<Comment> {
        let mut own = Vec::new();
        let unread = queue.get(self.cursor..).unwrap_or_default();
        if !unread.is_empty() {
            if let Some(last) = self.last_sealed {
                let count = unread
                    .iter()
                    .take_while(|comment| comment.offset <= boundary.offset)
                    .count();
                if count > 0 {
                    self.deferred
                        .entry(last)
                        .or_default()
                        .extend_from_slice(&unread[..count]);
                    self.cursor += count;
                }
            } else if at_eof {
                own = unread.to_vec();
                self.cursor = queue.len();
            }
        }
        self.last_sealed = Some(id);
        own
    }

    /// Move parked trailing comments onto their nodes.
    ///
    /// Anything addressed to a node that is not in the tree ends up on the
    /// program, so no comment is lost.
    pub(crate) fn apply(mut self, program: &mut Program) {
        if self.deferred.is_empty() {
            return;
        }
        program.walk_mut(&mut |node: &mut Node| {
            if let Some(comments) = self.deferred.remove(&node.id) {
                node.trailing_comments.extend(comments);
            }
        });
        if let Some(comments) = self.deferred.remove(&program.id) {
            program.trailing_comments.extend(comments);
        }
        let mut orphans: Vec<Comment> = self.deferred.into_values().flatten().collect();
        orphans.sort_by_key(|comment| comment.offset);
        program.trailing_comments.extend(orphans);
    }
}

#[cfg(test)]
mod tests;
