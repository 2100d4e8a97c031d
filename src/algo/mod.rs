/*!
# Graph Algorithms

This module provides the algorithms that run on a parsed [`GraphModel`]:
- [`ShortestPaths`]: single-pair shortest paths (Dijkstra) returning node ids, distance and edge ids,
- [`SpanningTrees`]: minimum spanning trees (Prim) returning edge ids and total weight,
- [`MinHeap`]: the priority queue backing the shortest-path search.

All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use textgraphs::algo::*;
```
Both algorithms report "nothing found" as an empty result rather than an error.
*/

mod heap;
mod shortest_path;
mod spanning_tree;

use crate::prelude::*;

pub use heap::*;
pub use shortest_path::*;
pub use spanning_tree::*;
