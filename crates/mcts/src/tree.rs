//! Arena-allocated search tree.
//!
//! Nodes live in a contiguous vector and reference each other by index.
//! The whole tree is discarded together when a search finishes; nodes are
//! never deleted individually.

use crate::node::{Node, NodeId};
use synth_core::Program;

/// Arena-allocated search tree.
#[derive(Debug)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    /// Create a new tree whose root holds the given starting state.
    pub fn new(root_state: Program) -> Self {
        Self {
            nodes: vec![Node::root(root_state)],
        }
    }

    /// Get a reference to a node by id.
    ///
    /// # Panics
    /// Panics if the NodeId is invalid.
    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Get a mutable reference to a node by id.
    ///
    /// # Panics
    /// Panics if the NodeId is invalid.
    pub fn get_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// Add a node to the arena, returning its id.
    pub fn add(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty (never true, the root always exists).
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get the root node.
    pub fn root(&self) -> &Node {
        self.get(NodeId::ROOT)
    }
}
