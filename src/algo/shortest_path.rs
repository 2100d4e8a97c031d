/*!
# Shortest Paths

Single-source shortest paths via Dijkstra's algorithm on a [`MinHeap`] with lazy deletion:
improved nodes are pushed again and outdated heap entries are skipped when popped.

Weights are used as plain floats. Negative weights are not supported; a `NaN` weight never
relaxes anything (every comparison with `NaN` fails), so edges carrying one are effectively unusable.

```
use textgraphs::prelude::*;

let graph = ParseConfig::new().weighted(true).parse("A B 4\nB C 1\nA C 7").unwrap();
let path = graph.shortest_path("A", "C");

assert_eq!(path.distance, 5.0);
assert_eq!(path.path, vec!["A", "B", "C"]);
assert_eq!(path.edge_ids, vec![0, 1]);
```
*/

use serde::Serialize;
use tracing::trace;

use super::*;

/// Result of a shortest-path query.
///
/// If the target is unreachable, `distance` is infinite and both sequences are empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPath {
    pub distance: Weight,
    /// Node ids from source to target (inclusive)
    pub path: Vec<NodeId>,
    /// Ids of the edges between consecutive nodes of `path`
    pub edge_ids: Vec<EdgeId>,
}

impl ShortestPath {
    /// The result for a target that cannot be reached
    pub fn unreachable() -> Self {
        Self {
            distance: Weight::INFINITY,
            path: Vec::new(),
            edge_ids: Vec::new(),
        }
    }

    /// Returns *true* if a path was found
    pub fn is_reachable(&self) -> bool {
        self.distance.is_finite()
    }
}

/// Dijkstra's algorithm on a [`GraphModel`].
///
/// A node is settled once it is popped from the heap and is never updated afterwards.
/// After [`Dijkstra::run`], distances and predecessors of settled nodes are final; if the search
/// stopped at a target, that includes the target. With negative weights the search still
/// terminates, but distances need not be minimal.
pub struct Dijkstra<'a> {
    graph: &'a GraphModel,
    distances: Vec<Weight>,
    predecessors: Vec<Option<OptionalNode>>,
    settled: Vec<bool>,
    heap: MinHeap<Node>,
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a GraphModel) -> Self {
        Self {
            graph,
            distances: vec![Weight::INFINITY; graph.len()],
            predecessors: vec![None; graph.len()],
            settled: vec![false; graph.len()],
            heap: MinHeap::new(),
        }
    }

    /// Runs the search from `source`. If `stop_at` is given, the search ends as soon as that
    /// node is popped from the heap, since its distance cannot improve anymore.
    /// ** Panics if `source >= n` **
    pub fn run(&mut self, source: Node, stop_at: Option<Node>) {
        self.distances[source as usize] = 0.0;
        self.heap.push(HeapItem::new(source, 0.0));

        while let Some(HeapItem { key: u, priority }) = self.heap.pop() {
            // outdated entry of an already improved node
            if priority > self.distances[u as usize] || self.settled[u as usize] {
                continue;
            }
            self.settled[u as usize] = true;

            if stop_at == Some(u) {
                trace!(node = u, distance = priority, "target extracted");
                break;
            }

            for nb in self.graph.neighbors_of(u) {
                let candidate = priority + nb.weight;
                if !self.settled[nb.node as usize] && candidate < self.distances[nb.node as usize] {
                    self.distances[nb.node as usize] = candidate;
                    self.predecessors[nb.node as usize] = OptionalNode::new(u);
                    self.heap.push(HeapItem::new(nb.node, candidate));
                }
            }
        }
    }

    /// Returns the tentative distance of `u`
    pub fn distance_to(&self, u: Node) -> Weight {
        self.distances[u as usize]
    }

    /// Returns the predecessor of `u` on its tentative shortest path
    pub fn predecessor_of(&self, u: Node) -> Option<Node> {
        self.predecessors[u as usize].map(|p| p.get())
    }

    /// Reconstructs the path to `target` by following predecessors.
    /// Edge ids are recovered via the graph's edge keys; unresolvable pairs are skipped.
    pub fn path_to(&self, target: Node) -> ShortestPath {
        let distance = self.distance_to(target);
        if !distance.is_finite() {
            return ShortestPath::unreachable();
        }

        let mut nodes = vec![target];
        let mut current = target;
        while let Some(p) = self.predecessor_of(current) {
            nodes.push(p);
            current = p;
        }
        nodes.reverse();

        let edge_ids = nodes
            .windows(2)
            .filter_map(|pair| self.graph.edge_id_between(pair[0], pair[1]))
            .collect();

        ShortestPath {
            distance,
            path: nodes
                .into_iter()
                .map(|u| self.graph.node_id(u).to_string())
                .collect(),
            edge_ids,
        }
    }
}

/// Provides shortest-path queries directly on a graph
pub trait ShortestPaths {
    /// Computes a shortest path from `source` to `target` (given by node ids).
    ///
    /// Empty or unknown ids and unreachable targets yield [`ShortestPath::unreachable`].
    fn shortest_path(&self, source: &str, target: &str) -> ShortestPath;
}

impl ShortestPaths for GraphModel {
    fn shortest_path(&self, source: &str, target: &str) -> ShortestPath {
        if source.is_empty() || target.is_empty() {
            return ShortestPath::unreachable();
        }

        let (Some(s), Some(t)) = (self.index_of(source), self.index_of(target)) else {
            return ShortestPath::unreachable();
        };

        let mut search = Dijkstra::new(self);
        search.run(s, Some(t));
        search.path_to(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    fn weighted(raw: &str, directed: bool) -> GraphModel {
        ParseConfig::new()
            .weighted(true)
            .directed(directed)
            .parse(raw)
            .unwrap()
    }

    #[test]
    fn round_trip() {
        let graph = weighted("A B 4\nB C 1", false);
        let path = graph.shortest_path("A", "C");

        assert_eq!(path.path, vec!["A", "B", "C"]);
        assert_eq!(path.distance, 5.0);
        assert_eq!(path.edge_ids, vec![0, 1]);
        assert!(path.is_reachable());
    }

    #[test]
    fn prefers_lighter_detour() {
        let graph = weighted("A D 10\nA B 1\nB C 2\nC D 3", false);
        let path = graph.shortest_path("D", "A");

        assert_eq!(path.distance, 6.0);
        assert_eq!(path.path, vec!["D", "C", "B", "A"]);
        assert_eq!(path.edge_ids, vec![3, 2, 1]);
    }

    #[test]
    fn huge_weights_are_kept() {
        let graph = weighted("A B 1e20\nA C 1\nC B 0x10000000000000000", false);
        assert_eq!(graph.edge(0).unwrap().weight, 1e20);

        let path = graph.shortest_path("A", "B");
        assert_eq!(path.path, vec!["A", "C", "B"]);
        assert_eq!(path.distance, 1.0 + 2f64.powi(64));

        let graph = weighted("A B 1e20\nA C 1\nC B 1", false);
        let path = graph.shortest_path("A", "B");
        assert_eq!(path.path, vec!["A", "C", "B"]);
        assert_eq!(path.distance, 2.0);
    }

    #[test]
    fn source_equals_target() {
        let graph = weighted("A B 4", false);
        let path = graph.shortest_path("B", "B");

        assert_eq!(path.distance, 0.0);
        assert_eq!(path.path, vec!["B"]);
        assert!(path.edge_ids.is_empty());
    }

    #[test]
    fn unreachable() {
        let graph = weighted("A B 1\nC D 1", false);

        for (s, t) in [("A", "C"), ("A", ""), ("", "A"), ("A", "X"), ("X", "A")] {
            assert_eq!(graph.shortest_path(s, t), ShortestPath::unreachable());
        }
        assert!(!ShortestPath::unreachable().is_reachable());
    }

    #[test]
    fn directed_follows_orientation() {
        let graph = weighted("A B 1\nB C 1\nC A 1", true);

        let forward = graph.shortest_path("A", "C");
        assert_eq!(forward.distance, 2.0);
        assert_eq!(forward.edge_ids, vec![0, 1]);

        let backward = graph.shortest_path("C", "B");
        assert_eq!(backward.path, vec!["C", "A", "B"]);
        assert_eq!(backward.edge_ids, vec![2, 0]);

        let graph = weighted("A B 1", true);
        assert!(!graph.shortest_path("B", "A").is_reachable());
    }

    #[test]
    fn unweighted_counts_hops() {
        let graph = ParseConfig::new().parse("A B 9\nB C 9\nA C 100").unwrap();
        let path = graph.shortest_path("A", "C");

        assert_eq!(path.distance, 1.0);
        assert_eq!(path.edge_ids, vec![2]);
    }

    #[test]
    fn parallel_edges_resolve_to_last_key() {
        // the lighter edge 0 is traversed, but its key was overwritten by edge 1
        let graph = weighted("A B 1\nB A 5", false);
        let path = graph.shortest_path("A", "B");

        assert_eq!(path.distance, 1.0);
        assert_eq!(path.edge_ids, vec![1]);
    }

    #[test]
    fn nan_weight_never_relaxes() {
        let mut builder = GraphBuilder::new(true, false);
        builder.add_edge("A", "B", Some(Weight::NAN));
        builder.add_edge("B", "C", Some(1.0));
        let graph = builder.build();

        assert!(!graph.shortest_path("A", "C").is_reachable());
        assert_eq!(graph.shortest_path("B", "C").distance, 1.0);
    }

    #[test]
    fn negative_weights_terminate() {
        let graph = weighted("A B -1\nB C -2", false);
        let path = graph.shortest_path("A", "C");

        assert_eq!(path.distance, -3.0);
        assert_eq!(path.path, vec!["A", "B", "C"]);
    }

    #[test]
    fn stops_at_target() {
        let graph = weighted("A B 1\nB C 1\nC D 1", false);
        let a = graph.index_of("A").unwrap();
        let b = graph.index_of("B").unwrap();
        let d = graph.index_of("D").unwrap();

        let mut search = Dijkstra::new(&graph);
        search.run(a, Some(b));
        assert_eq!(search.distance_to(b), 1.0);
        assert!(search.distance_to(d).is_infinite());

        let mut search = Dijkstra::new(&graph);
        search.run(a, None);
        assert_eq!(search.distance_to(d), 3.0);
        assert_eq!(search.predecessor_of(a), None);
    }

    #[test]
    fn matches_all_pairs_reference() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for directed in [false, true] {
            for _ in 0..20 {
                let n = rng.random_range(2..25);
                let m = rng.random_range(0..(3 * n));
                let graph = weighted(&random_edge_list(rng, n, m), directed);
                let reference = all_pairs_distances(&graph);

                for s in graph.vertices() {
                    for t in graph.vertices() {
                        let path = graph.shortest_path(graph.node_id(s), graph.node_id(t));
                        assert_eq!(path.distance, reference[s as usize][t as usize]);

                        if !path.is_reachable() {
                            assert!(path.path.is_empty() && path.edge_ids.is_empty());
                            continue;
                        }

                        assert_eq!(path.path.first().map(String::as_str), Some(graph.node_id(s)));
                        assert_eq!(path.path.last().map(String::as_str), Some(graph.node_id(t)));
                        assert!(path.edge_ids.len() < path.path.len());
                    }
                }
            }
        }
    }

    #[test]
    fn undirected_distances_are_symmetric() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);

        for _ in 0..20 {
            let n = rng.random_range(2..20);
            let graph = weighted(&random_connected_edge_list(rng, n, n), false);

            for s in graph.nodes() {
                for t in graph.nodes() {
                    let there = graph.shortest_path(&s.id, &t.id);
                    let back = graph.shortest_path(&t.id, &s.id);
                    assert!(there.is_reachable());
                    assert_eq!(there.distance, back.distance);
                }
            }
        }
    }
}
