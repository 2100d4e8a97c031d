/*!
# Minimum Spanning Trees

Prim's algorithm with a plain candidate list: in every round the list of frontier edges is
(stably) sorted by weight and the lightest edge leading out of the tree is taken.
Candidates whose endpoint joined the tree in the meantime stay in the list until they are
skipped, which keeps the bookkeeping trivial at the cost of `O(m^2 log m)` worst-case time.

For disconnected graphs the result spans only the component of the start node.
On directed graphs only forward edges are followed, i.e. the result is a tree of nodes
reachable from the start node rather than a true undirected spanning tree.

```
use textgraphs::prelude::*;

let graph = ParseConfig::new()
    .weighted(true)
    .input_mode(InputMode::Array)
    .parse("[[1, 2, 5], [2, 3, 3]]")
    .unwrap();

let tree = graph.minimum_spanning_tree(None);
assert_eq!(tree.total_weight, 8.0);
assert_eq!(tree.edge_ids, vec![0, 1]);
```
*/

use serde::Serialize;
use tracing::trace;

use super::*;

/// Result of a spanning-tree computation: the chosen edges in the order they were added
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SpanningTree {
    pub total_weight: Weight,
    pub edge_ids: Vec<EdgeId>,
}

impl SpanningTree {
    /// Returns *true* if no edge was chosen
    pub fn is_empty(&self) -> bool {
        self.edge_ids.is_empty()
    }
}

/// Frontier edge leading from the tree to `to`
#[derive(Debug, Clone, Copy)]
struct Candidate {
    to: Node,
    weight: Weight,
    edge: EdgeId,
}

impl From<&Neighbor> for Candidate {
    fn from(nb: &Neighbor) -> Self {
        Self {
            to: nb.node,
            weight: nb.weight,
            edge: nb.edge,
        }
    }
}

/// Prim's algorithm on a [`GraphModel`]
pub struct Prim<'a> {
    graph: &'a GraphModel,
    in_tree: Vec<bool>,
    tree_size: NumNodes,
    candidates: Vec<Candidate>,
}

impl<'a> Prim<'a> {
    pub fn new(graph: &'a GraphModel) -> Self {
        Self {
            graph,
            in_tree: vec![false; graph.len()],
            tree_size: 0,
            candidates: Vec::new(),
        }
    }

    /// Adds `u` to the tree and its edges leaving the tree to the candidates
    fn attach(&mut self, u: Node) {
        self.in_tree[u as usize] = true;
        self.tree_size += 1;

        let in_tree = &self.in_tree;
        self.candidates.extend(
            self.graph
                .neighbors_of(u)
                .iter()
                .filter(|nb| !in_tree[nb.node as usize])
                .map(Candidate::from),
        );
    }

    /// Grows the tree from `start` until all nodes are covered or no candidate is left.
    /// ** Panics if `start >= n` **
    pub fn run(mut self, start: Node) -> SpanningTree {
        let mut tree = SpanningTree::default();
        self.attach(start);

        while self.tree_size < self.graph.number_of_nodes() && !self.candidates.is_empty() {
            // stable, so ties go to the earlier candidate
            self.candidates.sort_by(|a, b| a.weight.total_cmp(&b.weight));

            let in_tree = &self.in_tree;
            let Some(pos) = self.candidates.iter().position(|c| !in_tree[c.to as usize]) else {
                break;
            };

            let chosen = self.candidates[pos];
            // everything before `pos` leads back into the tree
            self.candidates.drain(..=pos);

            trace!(edge = chosen.edge, weight = chosen.weight, "add edge to spanning tree");
            tree.total_weight += chosen.weight;
            tree.edge_ids.push(chosen.edge);
            self.attach(chosen.to);
        }

        tree
    }
}

/// Provides spanning-tree computations directly on a graph
pub trait SpanningTrees {
    /// Computes a minimum spanning tree of the component containing `start`.
    ///
    /// If `start` is `None` or not a node of the graph, the first node is used.
    /// An empty graph yields an empty tree of weight `0`.
    fn minimum_spanning_tree(&self, start: Option<&str>) -> SpanningTree;
}

impl SpanningTrees for GraphModel {
    fn minimum_spanning_tree(&self, start: Option<&str>) -> SpanningTree {
        if self.is_empty() {
            return SpanningTree::default();
        }

        let start = start.and_then(|id| self.index_of(id)).unwrap_or(0);
        let tree = Prim::new(self).run(start);

        trace!(
            edges = ?tree.edge_ids,
            total_weight = tree.total_weight,
            "spanning tree computed"
        );
        tree
    }
}
