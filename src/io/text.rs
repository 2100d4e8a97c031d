//! # Text
//!
//! The Text-Format consists of non-blank lines of two kinds:
//! - `u v [w]` describes a single edge from `u` to `v` with optional weight `w`.
//!   Lines with fewer than two fields are skipped; an unparsable weight is ignored.
//! - `u: v w-3 x` (any line containing `:`) lists the neighbors of `u`. A neighbor
//!   `w-3` denotes an edge to `w` with weight `3`; unparsable weights default to `1`.
//!
//! Weights accept the same syntax as [`parse_number`](crate::token::parse_number),
//! e.g. `4`, `0x1f` or `-0b11`.

use smallvec::SmallVec;

use super::*;
use crate::token::coerce_weight;

/// A GraphReader for the Text-Format
#[derive(Debug, Clone, Default)]
pub struct TextReader {
    /// If set, lines starting with `comment_identifier` are skipped
    comment_identifier: Option<String>,
}

impl TextReader {
    /// Creates a new (default) reader that does not skip any lines
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> TextReader {
        self.comment_identifier = Some(c.into());
        self
    }

    /// Returns *true* if `line` is a comment
    fn is_comment(&self, line: &str) -> bool {
        self.comment_identifier
            .as_deref()
            .is_some_and(|c| line.starts_with(c))
    }

    /// Parses an adjacency-list line `source: neighbors...`
    fn read_adjacency_line(&self, source: &str, neighbors: &str, builder: &mut GraphBuilder) {
        let source = source.trim();
        if source.is_empty() {
            return;
        }

        for token in neighbors.split_whitespace() {
            let (neighbor, weight) = match token.split_once('-') {
                Some((neighbor, weight)) => {
                    (neighbor, Some(coerce_weight(weight).unwrap_or(DEFAULT_WEIGHT)))
                }
                None => (token, None),
            };

            if !neighbor.is_empty() {
                builder.add_edge(source, neighbor, weight);
            }
        }
    }

    /// Parses an edge-list line `u v [w]`
    fn read_edge_line(&self, line: &str, builder: &mut GraphBuilder) {
        let fields: SmallVec<[&str; 3]> = line.split_whitespace().take(3).collect();
        if fields.len() < 2 {
            return;
        }

        let weight = fields.get(2).and_then(|w| coerce_weight(w));
        builder.add_edge(fields[0], fields[1], weight);
    }
}

impl GraphReader for TextReader {
    fn try_read_graph(&self, raw: &str, builder: &mut GraphBuilder) -> Result<()> {
        for line in raw.lines().map(str::trim) {
            if line.is_empty() || self.is_comment(line) {
                continue;
            }

            match line.split_once(':') {
                Some((source, neighbors)) => self.read_adjacency_line(source, neighbors, builder),
                None => self.read_edge_line(line, builder),
            }
        }

        Ok(())
    }
}
