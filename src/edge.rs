use std::fmt::{Debug, Display};

use serde::Serialize;

use crate::{Node, NodeId};

/// Edges are numbered `0..m` in creation order.
/// We limit the number of edges to `2^32 - 1`.
pub type EdgeId = u32;

/// Number of edges in a graph
pub type NumEdges = EdgeId;

/// Edge weights follow plain floating point semantics (`NaN` included)
pub type Weight = f64;

/// Weight of an edge that was created without one
pub const DEFAULT_WEIGHT: Weight = 1.0;

/// An edge as exposed to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphEdge {
    pub id: EdgeId,
    pub from: NodeId,
    pub to: NodeId,
    pub weight: Weight,
    /// Displayable weight, only present in weighted graphs
    pub label: Option<String>,
}

/// Adjacency entry: the neighbor, the weight of the connecting edge and its id
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Neighbor {
    pub node: Node,
    pub weight: Weight,
    pub edge: EdgeId,
}

/// Lookup key for the edge connecting two nodes.
///
/// For directed graphs the key keeps its orientation; for undirected graphs it is
/// normalized such that the endpoint with the lexicographically smaller id comes first,
/// which makes the key symmetric regardless of traversal direction.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeKey {
    pub from: Node,
    pub to: Node,
    pub directed: bool,
}

impl EdgeKey {
    /// Directed key `from->to`
    pub fn directed(from: Node, to: Node) -> Self {
        Self {
            from,
            to,
            directed: true,
        }
    }

    /// Undirected key; `ids` resolves a node to its id for the lexicographic ordering
    pub fn undirected<'a, F>(u: Node, v: Node, ids: F) -> Self
    where
        F: Fn(Node) -> &'a str,
    {
        let (from, to) = if ids(v) < ids(u) { (v, u) } else { (u, v) };
        Self {
            from,
            to,
            directed: false,
        }
    }

    /// Swaps the endpoints without renormalizing
    pub fn reverse(&self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            directed: self.directed,
        }
    }
}

impl Display for EdgeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sep = if self.directed { "->" } else { "|" };
        write!(f, "{}{sep}{}", self.from, self.to)
    }
}

impl Debug for EdgeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

/// Formats a weight for display; integral weights print without a fractional part
pub fn format_weight(weight: Weight) -> String {
    weight.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undirected_key_is_symmetric() {
        let ids = ["b", "a", "c"];
        let lookup = |u: Node| ids[u as usize];

        let k1 = EdgeKey::undirected(0, 1, lookup);
        let k2 = EdgeKey::undirected(1, 0, lookup);
        assert_eq!(k1, k2);
        assert_eq!((k1.from, k1.to), (1, 0));
        assert_eq!(k1.to_string(), "1|0");
    }

    #[test]
    fn directed_key_keeps_orientation() {
        let key = EdgeKey::directed(2, 5);
        assert_ne!(key, key.reverse());
        assert_eq!(key.reverse().reverse(), key);
        assert_eq!(key.to_string(), "2->5");
    }

    #[test]
    fn weight_labels() {
        assert_eq!(format_weight(4.0), "4");
        assert_eq!(format_weight(2.5), "2.5");
        assert_eq!(format_weight(-3.0), "-3");
    }
}
