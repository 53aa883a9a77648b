//! Search-tree trace recording.
//!
//! The search reports every node it visits to a [`SearchObserver`]. The
//! observer only receives node identities, depths and final values, never
//! alpha/beta, so it has no way to steer pruning. [`NoTrace`] discards
//! everything; [`TraceRecorder`] keeps the full tree of one search so that an
//! external tool can visualize it.

use crate::game_repr::{Board, Side};
use serde::{Deserialize, Serialize};

/// Index of a node within one search's trace
pub type NodeId = usize;

/// Which side a node belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeRole {
    Root,
    Max,
    Min,
}

impl From<Side> for NodeRole {
    fn from(side: Side) -> Self {
        match side {
            Side::Max => NodeRole::Max,
            Side::Min => NodeRole::Min,
        }
    }
}

/// How a node finished
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Annotation {
    /// Scored by the evaluator (depth exhausted or game over)
    Leaf,
    /// MIN node whose remaining children were skipped (beta fell to alpha)
    PrunedAlpha,
    /// MAX node whose remaining children were skipped (alpha rose to beta)
    PrunedBeta,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchNode {
    pub id: NodeId,
    pub parent: Option<NodeId>,
    pub value: i32,
    /// Plies below the root
    pub depth: u8,
    pub role: NodeRole,
    pub annotation: Option<Annotation>,
}

/// Everything recorded for one best-move query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// 1-based game turn the search was run for (`state.turn() + 1`)
    pub turn: u32,
    /// Side that searched
    pub side: Side,
    /// Board at the start of the search
    pub board: Board,
    pub nodes: Vec<SearchNode>,
    /// Value of the chosen move
    pub best_score: i32,
}

/// Receives node events from the search
pub trait SearchObserver {
    /// Called before a node's children are explored
    fn open_node(&mut self, parent: Option<NodeId>, depth: u8, role: NodeRole) -> NodeId;

    /// Called once a node's value is known
    fn close_node(&mut self, id: NodeId, value: i32, annotation: Option<Annotation>);
}

/// Observer that records nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NoTrace;

impl SearchObserver for NoTrace {
    #[inline]
    fn open_node(&mut self, _parent: Option<NodeId>, _depth: u8, _role: NodeRole) -> NodeId {
        0
    }

    #[inline]
    fn close_node(&mut self, _id: NodeId, _value: i32, _annotation: Option<Annotation>) {}
}

/// Observer that keeps every node of the current search
#[derive(Debug, Default, Clone)]
pub struct TraceRecorder {
    nodes: Vec<SearchNode>,
}

impl TraceRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    pub fn nodes(&self) -> &[SearchNode] {
        &self.nodes
    }

    pub fn take_nodes(&mut self) -> Vec<SearchNode> {
        std::mem::take(&mut self.nodes)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl SearchObserver for TraceRecorder {
    fn open_node(&mut self, parent: Option<NodeId>, depth: u8, role: NodeRole) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(SearchNode {
            id,
            parent,
            value: 0,
            depth,
            role,
            annotation: None,
        });
        id
    }

    fn close_node(&mut self, id: NodeId, value: i32, annotation: Option<Annotation>) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.value = value;
            node.annotation = annotation;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorder_assigns_sequential_ids() {
        let mut rec = TraceRecorder::new();
        let root = rec.open_node(None, 0, NodeRole::Root);
        let child = rec.open_node(Some(root), 1, NodeRole::Max);
        rec.close_node(child, 42, Some(Annotation::Leaf));
        rec.close_node(root, 42, None);

        assert_eq!(root, 0);
        assert_eq!(child, 1);
        assert_eq!(rec.nodes()[1].parent, Some(0));
        assert_eq!(rec.nodes()[1].value, 42);
        assert_eq!(rec.nodes()[1].annotation, Some(Annotation::Leaf));

        let taken = rec.take_nodes();
        assert_eq!(taken.len(), 2);
        assert!(rec.is_empty());
    }

    #[test]
    fn test_role_from_side() {
        assert_eq!(NodeRole::from(Side::Max), NodeRole::Max);
        assert_eq!(NodeRole::from(Side::Min), NodeRole::Min);
    }
}
