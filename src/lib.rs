/*!
`textgraphs` turns free-form graph descriptions into a normalized graph model and runs
classic algorithms on it:
- **Parsing** of edge lists (`A B 4`), adjacency lists (`A: B-4 C`) and JSON-like arrays
  (`[[0, 1, 4], [1, 2, 1]]`, `{"edges": [...]}`),
- **Shortest paths** via Dijkstra's algorithm,
- **Minimum spanning trees** via Prim's algorithm,
- **Rendering** to the DOT language of GraphViz with highlighted paths and trees.

# Representation

Nodes are identified by **string ids** (numeric ids are converted to strings). Internally,
nodes are additionally numbered `0..n` in the order they first appear in the input, and edges
are numbered `0..m` in creation order. Edge ids are what the algorithms report and what a
renderer uses to highlight edges.

### Directed vs Undirected

- In an **undirected** graph, every edge is listed in the adjacency of both endpoints and the
  edge between `u` and `v` can be looked up from either side.
- In a **directed** graph, the edge has orientation and is only listed at its source.

# Usage

```
use textgraphs::prelude::*;

let graph = ParseConfig::new()
    .weighted(true)
    .parse("A B 4\nB C 1\nA C 7")
    .unwrap();

let path = graph.shortest_path("A", "C");
assert_eq!(path.distance, 5.0);
assert_eq!(path.edge_ids, vec![0, 1]);

let tree = graph.minimum_spanning_tree(None);
assert_eq!(tree.total_weight, 5.0);
```

There are a few submodules you probably want to interact with:
- [`prelude`] includes node and edge definitions, the graph model, the parser and the algorithm traits,
- [`io`] includes the input readers and the DOT writer,
- [`algo`] includes the algorithms and the min-heap they are built on,
- [`token`] includes the numeric token parser shared by the readers.

Parsing is a pure function of the input and its configuration; every call produces a fresh model
that is never modified afterwards.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod io;
pub mod node;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;
pub mod token;

pub use edge::*;
pub use error::ParseError;
pub use node::*;

/// `textgraphs::prelude` includes definitions for nodes and edges, the graph model, the parser and its
/// configuration as well as the algorithm traits and their results.
pub mod prelude {
    pub use super::{
        algo::{ShortestPath, ShortestPaths, SpanningTree, SpanningTrees},
        edge::*,
        error::ParseError,
        io::*,
        node::*,
        repr::*,
    };
}
