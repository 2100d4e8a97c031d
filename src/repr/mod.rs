/*!
# Graph Model

A [`GraphModel`] is the normalized, immutable result of parsing a graph description.
It stores
- the nodes in first-seen order (their position is their dense index [`Node`]),
- the edges in creation order (their position is their [`EdgeId`]),
- one adjacency list per node, where undirected edges appear in **both** endpoints' lists,
- an index from [`EdgeKey`] to the edge id, used to recover the edge between two adjacent nodes.

Models are created through a [`GraphBuilder`] (usually indirectly via [`crate::io::parse`])
and are never modified afterwards.

Parallel edges share the same [`EdgeKey`]; the key then resolves to the edge added last.
*/

use fxhash::FxHashMap;

use crate::*;

mod builder;
pub mod digest;

pub use builder::*;

/// Normalized graph produced by a single parse.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphModel {
    nodes: Vec<GraphNode>,
    node_index: FxHashMap<NodeId, Node>,
    edges: Vec<GraphEdge>,
    adjacency: Vec<Vec<Neighbor>>,
    edge_key_to_id: FxHashMap<EdgeKey, EdgeId>,
    is_directed: bool,
}

impl GraphModel {
    /// Returns all nodes in first-seen order
    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    /// Returns all edges in creation order, i.e. `edges()[i].id == i`
    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    /// Returns the edge with the given id if it exists
    pub fn edge(&self, id: EdgeId) -> Option<&GraphEdge> {
        self.edges.get(id as usize)
    }

    pub fn number_of_nodes(&self) -> NumNodes {
        self.nodes.len() as NumNodes
    }

    pub fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }

    /// Return the number of nodes as usize
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn is_directed(&self) -> bool {
        self.is_directed
    }

    /// Returns an iterator over all node indices `0..n`
    pub fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        0..self.number_of_nodes()
    }

    /// Returns the dense index of the node with id `id`
    pub fn index_of(&self, id: &str) -> Option<Node> {
        self.node_index.get(id).copied()
    }

    /// Returns the id of node `u`.
    /// ** Panics if `u >= n` **
    pub fn node_id(&self, u: Node) -> &str {
        &self.nodes[u as usize].id
    }

    /// Returns the adjacency list of node `u`.
    /// For undirected graphs every edge is listed at both endpoints.
    /// ** Panics if `u >= n` **
    pub fn neighbors_of(&self, u: Node) -> &[Neighbor] {
        &self.adjacency[u as usize]
    }

    /// Returns the adjacency list of the node with id `id` (empty if there is no such node)
    pub fn neighbors_of_id(&self, id: &str) -> &[Neighbor] {
        self.index_of(id)
            .map(|u| self.neighbors_of(u))
            .unwrap_or_default()
    }

    /// Returns the number of adjacency entries of `u`
    /// ** Panics if `u >= n` **
    pub fn degree_of(&self, u: Node) -> NumNodes {
        self.adjacency[u as usize].len() as NumNodes
    }

    /// Returns the index from normalized edge keys to edge ids
    pub fn edge_key_to_id(&self) -> &FxHashMap<EdgeKey, EdgeId> {
        &self.edge_key_to_id
    }

    /// Computes the normalized key of the (possibly non-existent) edge `u -> v`
    pub fn edge_key(&self, u: Node, v: Node) -> EdgeKey {
        if self.is_directed {
            EdgeKey::directed(u, v)
        } else {
            EdgeKey::undirected(u, v, |x| self.node_id(x))
        }
    }

    /// Returns the id of the edge connecting `u` and `v`, trying the key of `u -> v` first
    /// and the key of `v -> u` second.
    pub fn edge_id_between(&self, u: Node, v: Node) -> Option<EdgeId> {
        self.edge_key_to_id
            .get(&self.edge_key(u, v))
            .or_else(|| self.edge_key_to_id.get(&self.edge_key(v, u)))
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn triangle(directed: bool) -> GraphModel {
        let mut builder = GraphBuilder::new(true, directed);
        builder.add_edge("A", "B", Some(4.0));
        builder.add_edge("B", "C", Some(1.0));
        builder.add_edge("C", "A", None);
        builder.build()
    }

    #[test]
    fn undirected_adjacency_is_symmetric() {
        let graph = triangle(false);

        assert_eq!(graph.number_of_nodes(), 3);
        assert_eq!(graph.number_of_edges(), 3);
        assert!(!graph.is_directed());

        for u in graph.vertices() {
            assert_eq!(graph.degree_of(u), 2);
            for nb in graph.neighbors_of(u) {
                assert!(
                    graph
                        .neighbors_of(nb.node)
                        .iter()
                        .any(|back| back.node == u && back.edge == nb.edge)
                );
            }
        }

        let a = graph.index_of("A").unwrap();
        let c = graph.index_of("C").unwrap();
        assert_eq!(graph.edge_id_between(a, c), Some(2));
        assert_eq!(graph.edge_id_between(c, a), Some(2));
    }

    #[test]
    fn directed_adjacency_is_one_sided() {
        let graph = triangle(true);

        for u in graph.vertices() {
            assert_eq!(graph.degree_of(u), 1);
        }

        let a = graph.index_of("A").unwrap();
        let b = graph.index_of("B").unwrap();
        assert_eq!(graph.edge_key_to_id().get(&EdgeKey::directed(a, b)), Some(&0));
        assert_eq!(graph.edge_key_to_id().get(&EdgeKey::directed(b, a)), None);
        // falls back to the reversed key
        assert_eq!(graph.edge_id_between(b, a), Some(0));
    }

    #[test]
    fn dense_ids_and_known_endpoints() {
        let graph = triangle(false);

        assert_eq!(
            graph.edges().iter().map(|e| e.id).collect_vec(),
            (0..graph.number_of_edges()).collect_vec()
        );
        for edge in graph.edges() {
            assert!(graph.index_of(&edge.from).is_some());
            assert!(graph.index_of(&edge.to).is_some());
        }
        for u in graph.vertices() {
            for nb in graph.neighbors_of(u) {
                assert!(graph.edge(nb.edge).is_some());
            }
        }

        assert_eq!(graph.neighbors_of_id("B").len(), 2);
        assert!(graph.neighbors_of_id("Z").is_empty());
    }
}
