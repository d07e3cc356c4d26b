//! Search tree node types.
//!
//! Uses arena allocation with indices: children are owned by index and the
//! parent is a plain back-index walked only during backpropagation, which
//! avoids ownership cycles without Rc/RefCell overhead.

use synth_core::Program;

/// Index into the node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The root node is always at index 0.
    pub const ROOT: NodeId = NodeId(0);
}

/// A node in the search tree.
///
/// Each node wraps one program state together with the statistics
/// accumulated for it by simulations.
#[derive(Clone, Debug)]
pub struct Node {
    /// The program state this node represents.
    pub state: Program,

    /// Back-reference for upward walks during backup (None for root).
    pub parent: Option<NodeId>,

    /// Child nodes in action-generation order.
    pub children: Vec<NodeId>,

    /// Number of times this node was visited during search.
    pub visit_count: u32,

    /// Sum of rewards from all visits.
    pub value_sum: f64,
}

impl Node {
    /// Create a new unvisited node.
    pub fn new(state: Program, parent: Option<NodeId>) -> Self {
        Self {
            state,
            parent,
            children: Vec::new(),
            visit_count: 0,
            value_sum: 0.0,
        }
    }

    /// Create the root node for the given starting state.
    pub fn root(state: Program) -> Self {
        Self::new(state, None)
    }

    /// Mean reward for this node.
    ///
    /// Returns 0.0 if the node has never been visited.
    pub fn mean_value(&self) -> f64 {
        if self.visit_count == 0 {
            0.0
        } else {
            self.value_sum / self.visit_count as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_is_unvisited() {
        let node = Node::new(Program::empty(), Some(NodeId::ROOT));
        assert_eq!(node.visit_count, 0);
        assert_eq!(node.value_sum, 0.0);
        assert!(node.children.is_empty());
        assert_eq!(node.parent, Some(NodeId::ROOT));
    }

    #[test]
    fn test_root_has_no_parent() {
        let root = Node::root(Program::empty());
        assert_eq!(root.parent, None);
    }

    #[test]
    fn test_mean_value() {
        let mut node = Node::root(Program::empty());
        assert_eq!(node.mean_value(), 0.0);

        node.visit_count = 2;
        node.value_sum = 1.5;
        assert!((node.mean_value() - 0.75).abs() < 1e-12);
    }
}
