/*!
# Node Representation

Nodes are identified by their **string id** as it appeared in the input (numeric ids are
rendered as strings, so `1` and `"1"` name the same node).
Internally, every node of a [`GraphModel`](crate::repr::GraphModel) is additionally addressed by a
dense index `Node = u32` in first-seen order, which lets algorithms use plain vectors instead of maps.
*/

use std::num::NonZero;

use serde::Serialize;

/// Dense node index in the range `0..n` (first-seen order)
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// External identity of a node
pub type NodeId = String;

/// A node as exposed to callers: its id and a display label (defaults to the id)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GraphNode {
    pub id: NodeId,
    pub label: String,
}

impl GraphNode {
    /// Creates a node whose label equals its id
    pub fn new<S: Into<NodeId>>(id: S) -> Self {
        let id = id.into();
        Self {
            label: id.clone(),
            id,
        }
    }
}

/// As `Option<Node>` uses additional bytes for padding, it can be inefficient
/// since we often need to use `Vec<Option<Node>>`. This instead uses the
/// `NonZero`-Wrapper to assign a constant value (often)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct OptionalNodeImpl<const N: Node>(NonZero<Node>);

/// Often, `INVALID_NODE` is safe to pick as the `None`-Value
pub type OptionalNode = OptionalNodeImpl<INVALID_NODE>;

impl<const N: Node> OptionalNodeImpl<N> {
    /// Returns `Some(OptionalNodeImpl)` if `n != N` and `None` otherwise
    pub const fn new(n: Node) -> Option<Self> {
        match NonZero::new(n ^ N) {
            Some(inner) => Some(OptionalNodeImpl(inner)),
            None => None,
        }
    }

    /// Gets the underlying Node-Value
    pub const fn get(&self) -> Node {
        self.0.get() ^ N
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_node() {
        assert_eq!(std::mem::size_of::<Option<OptionalNode>>(), 4);
        for u in [0, 1, 17, INVALID_NODE - 1] {
            assert_eq!(OptionalNode::new(u).map(|x| x.get()), Some(u));
        }
        assert!(OptionalNode::new(INVALID_NODE).is_none());
    }

    #[test]
    fn label_defaults_to_id() {
        let node = GraphNode::new("A");
        assert_eq!(node.id, "A");
        assert_eq!(node.label, "A");
    }
}
