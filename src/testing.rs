//! Random inputs and brute-force references for tests

use itertools::Itertools;
use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::prelude::*;

/// Edge-list text with `m` random edges between nodes `n0..n{n-1}` and weights in `1..=20`
pub(crate) fn random_edge_list<R: Rng>(rng: &mut R, n: NumNodes, m: NumEdges) -> String {
    let node = Uniform::new(0, n).unwrap();
    let weight = Uniform::new_inclusive(1u32, 20).unwrap();

    (0..m)
        .map(|_| {
            format!(
                "n{} n{} {}",
                node.sample(rng),
                node.sample(rng),
                weight.sample(rng)
            )
        })
        .join("\n")
}

/// Edge-list text of a random tree on `n` nodes with `extra` additional random edges
pub(crate) fn random_connected_edge_list<R: Rng>(rng: &mut R, n: NumNodes, extra: NumEdges) -> String {
    let tree = (1..n)
        .map(|v| format!("n{} n{v} {}", rng.random_range(0..v), rng.random_range(1..=20)))
        .join("\n");

    format!("{tree}\n{}", random_edge_list(rng, n, extra))
}

/// All-pairs distances via Floyd-Warshall
pub(crate) fn all_pairs_distances(graph: &GraphModel) -> Vec<Vec<Weight>> {
    let n = graph.len();
    let mut dist = vec![vec![Weight::INFINITY; n]; n];

    for u in graph.vertices() {
        dist[u as usize][u as usize] = 0.0;
        for nb in graph.neighbors_of(u) {
            let d = &mut dist[u as usize][nb.node as usize];
            *d = d.min(nb.weight);
        }
    }

    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                let via = dist[i][k] + dist[k][j];
                if via < dist[i][j] {
                    dist[i][j] = via;
                }
            }
        }
    }

    dist
}

/// Total weight of a minimum spanning forest via Kruskal (undirected graphs only)
pub(crate) fn spanning_forest_weight(graph: &GraphModel) -> Weight {
    let mut parent = (0..graph.number_of_nodes()).collect_vec();

    fn find(parent: &mut [Node], mut u: Node) -> Node {
        while parent[u as usize] != u {
            parent[u as usize] = parent[parent[u as usize] as usize];
            u = parent[u as usize];
        }
        u
    }

    graph
        .edges()
        .iter()
        .sorted_by(|a, b| a.weight.total_cmp(&b.weight))
        .filter_map(|e| {
            let u = find(&mut parent, graph.index_of(&e.from)?);
            let v = find(&mut parent, graph.index_of(&e.to)?);
            (u != v).then(|| {
                parent[u as usize] = v;
                e.weight
            })
        })
        .sum()
}
