use fxhash::FxHashMap;
use tracing::trace;

use super::*;

/// Incrementally assembles a [`GraphModel`].
///
/// Every call to [`GraphBuilder::add_edge`] assigns the next edge id, registers the
/// edge key (overwriting previous edges with the same key), appends the adjacency entries
/// and adds both endpoints to the node set. [`GraphBuilder::build`] freezes the result.
///
/// ```
/// use textgraphs::prelude::*;
///
/// let mut builder = GraphBuilder::new(true, false);
/// builder.add_edge("A", "B", Some(4.0));
/// builder.add_edge("B", "C", None);
/// let graph = builder.build();
///
/// assert_eq!(graph.number_of_edges(), 2);
/// assert_eq!(graph.edges()[1].weight, 1.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    weighted: bool,
    directed: bool,
    nodes: Vec<GraphNode>,
    node_index: FxHashMap<NodeId, Node>,
    edges: Vec<GraphEdge>,
    adjacency: Vec<Vec<Neighbor>>,
    edge_key_to_id: FxHashMap<EdgeKey, EdgeId>,
}

impl GraphBuilder {
    /// Creates an empty builder. In unweighted graphs every edge gets weight `1`.
    pub fn new(weighted: bool, directed: bool) -> Self {
        Self {
            weighted,
            directed,
            ..Default::default()
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    pub fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }

    /// Returns the index of node `id`, inserting it if it was not seen before
    pub fn add_node(&mut self, id: &str) -> Node {
        if let Some(&u) = self.node_index.get(id) {
            return u;
        }

        let u = self.nodes.len() as Node;
        self.nodes.push(GraphNode::new(id));
        self.node_index.insert(id.to_string(), u);
        self.adjacency.push(Vec::new());
        u
    }

    /// Adds the edge `from -> to` and returns its id.
    /// A missing weight (or any weight in an unweighted graph) defaults to `1`.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: Option<Weight>) -> EdgeId {
        let u = self.add_node(from);
        let v = self.add_node(to);

        let id = self.edges.len() as EdgeId;
        let weight = match weight {
            Some(w) if self.weighted => w,
            _ => DEFAULT_WEIGHT,
        };

        let key = if self.directed {
            EdgeKey::directed(u, v)
        } else {
            let nodes = &self.nodes;
            EdgeKey::undirected(u, v, |x| nodes[x as usize].id.as_str())
        };
        if let Some(previous) = self.edge_key_to_id.insert(key, id) {
            trace!(key = %key, previous, id, "edge key reassigned to parallel edge");
        }

        self.edges.push(GraphEdge {
            id,
            from: from.to_string(),
            to: to.to_string(),
            weight,
            label: self.weighted.then(|| format_weight(weight)),
        });

        self.adjacency[u as usize].push(Neighbor {
            node: v,
            weight,
            edge: id,
        });
        if !self.directed {
            self.adjacency[v as usize].push(Neighbor {
                node: u,
                weight,
                edge: id,
            });
        }

        id
    }

    /// Freezes the builder into an immutable model
    pub fn build(self) -> GraphModel {
        GraphModel {
            nodes: self.nodes,
            node_index: self.node_index,
            edges: self.edges,
            adjacency: self.adjacency,
            edge_key_to_id: self.edge_key_to_id,
            is_directed: self.directed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn nodes_in_first_seen_order() {
        let mut builder = GraphBuilder::new(false, false);
        builder.add_edge("C", "A", None);
        builder.add_edge("A", "B", None);
        builder.add_node("D");
        builder.add_node("C");

        let graph = builder.build();
        assert_eq!(
            graph.nodes().iter().map(|n| n.id.as_str()).collect_vec(),
            vec!["C", "A", "B", "D"]
        );
        assert!(graph.nodes().iter().all(|n| n.id == n.label));
    }

    #[test]
    fn weights_and_labels() {
        let mut weighted = GraphBuilder::new(true, false);
        weighted.add_edge("A", "B", Some(2.5));
        weighted.add_edge("B", "C", None);
        let weighted = weighted.build();

        assert_eq!(weighted.edges()[0].weight, 2.5);
        assert_eq!(weighted.edges()[0].label.as_deref(), Some("2.5"));
        assert_eq!(weighted.edges()[1].weight, 1.0);
        assert_eq!(weighted.edges()[1].label.as_deref(), Some("1"));

        let mut unweighted = GraphBuilder::new(false, false);
        unweighted.add_edge("A", "B", Some(7.0));
        let unweighted = unweighted.build();

        assert_eq!(unweighted.edges()[0].weight, 1.0);
        assert_eq!(unweighted.edges()[0].label, None);
    }

    #[test]
    fn parallel_edges_last_write_wins() {
        let mut builder = GraphBuilder::new(true, false);
        builder.add_edge("A", "B", Some(1.0));
        builder.add_edge("B", "A", Some(9.0));
        assert_eq!(builder.number_of_edges(), 2);

        let graph = builder.build();
        let a = graph.index_of("A").unwrap();
        let b = graph.index_of("B").unwrap();

        assert_eq!(graph.edge_key_to_id().len(), 1);
        assert_eq!(graph.edge_id_between(a, b), Some(1));
        assert_eq!(graph.degree_of(a), 2);
    }

    #[test]
    fn self_loops() {
        let mut builder = GraphBuilder::new(false, false);
        builder.add_edge("A", "A", None);
        let graph = builder.build();

        assert_eq!(graph.number_of_nodes(), 1);
        assert_eq!(graph.degree_of(0), 2);
        assert_eq!(graph.edge_id_between(0, 0), Some(0));
    }
}
