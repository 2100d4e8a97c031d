/*!
# Graph Hash Digests

This module provides the [`GraphDigest`] trait, which computes a
**hash-based digest** of a [`GraphModel`].

The digest encodes, in this order:
- the directedness of the model,
- all node ids in first-seen order,
- all edges (endpoints and weight) in id order,
- all adjacency lists,

before feeding them into a cryptographic hash function. Two parses of the same text
with the same configuration therefore produce the same digest.

## Example
```
use textgraphs::{prelude::*, repr::digest::GraphDigest};

let config = ParseConfig::new().weighted(true);
let first = config.parse("A B 4\nB C 1").unwrap();
let second = config.parse("A B 4\nB C 1").unwrap();

assert_eq!(first.digest_sha256(), second.digest_sha256());
assert_eq!(first.digest_sha256().len(), 64);
```
*/

use std::fmt::LowerHex;

use super::*;
use ::digest::{Digest, Output};

/// Trait for computing a **canonical hash digest** of a graph model.
pub trait GraphDigest {
    /// Computes a digest of the graph using the provided hash function `D`.
    ///
    /// The result is returned as a **hexadecimal string**.
    fn digest<D>(&self) -> String
    where
        Output<D>: LowerHex,
        D: Digest;

    /// Computes a **SHA-256 digest** of the graph.
    ///
    /// The returned string is exactly 64 characters long.
    fn digest_sha256(&self) -> String {
        self.digest::<sha2::Sha256>()
    }
}

impl GraphDigest for GraphModel {
    fn digest<D>(&self) -> String
    where
        Output<D>: LowerHex,
        D: Digest,
    {
        let mut hasher = D::new();

        // strings are length-prefixed so that concatenations stay unambiguous
        let update_str = |hasher: &mut D, s: &str| {
            hasher.update((s.len() as u64).to_le_bytes());
            hasher.update(s.as_bytes());
        };

        hasher.update([self.is_directed() as u8]);
        hasher.update(self.number_of_nodes().to_le_bytes());
        for node in self.nodes() {
            update_str(&mut hasher, &node.id);
        }

        hasher.update(self.number_of_edges().to_le_bytes());
        for edge in self.edges() {
            update_str(&mut hasher, &edge.from);
            update_str(&mut hasher, &edge.to);
            hasher.update(edge.weight.to_bits().to_le_bytes());
        }

        for u in self.vertices() {
            hasher.update(self.degree_of(u).to_le_bytes());
            for nb in self.neighbors_of(u) {
                hasher.update(nb.node.to_le_bytes());
                hasher.update(nb.edge.to_le_bytes());
                hasher.update(nb.weight.to_bits().to_le_bytes());
            }
        }

        format!("{:x}", hasher.finalize())
    }
}
