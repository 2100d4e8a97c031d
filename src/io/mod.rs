/*!
# IO

Utilities for turning free-form text into a [`GraphModel`] and for writing models out again.

## Input Formats

Two input modes are supported, selected via [`InputMode`] in a [`ParseConfig`]:
- **Text** (default): one edge `u v [w]` per line, or adjacency-list lines
  `u: v w-3 x` where `-3` attaches a weight to the neighbor.
- **Array**: JSON-like text such as `[[0, 1, 4], [1, 2, 1]]` (edge list),
  `[[1], [0, 2], [1]]` (adjacency list indexed by position), or an object holding
  such an array (`{"edges": [...]}`). If the input as a whole is not valid JSON, the
  first balanced `[...]` and then an `edges = [...]` assignment are tried.

## Output Formats

- **Dot**: The [DOT language](https://graphviz.org/doc/info/lang.html) of [GraphViz](https://graphviz.org/),
  including highlighting of paths and spanning trees.

## Example
```
use textgraphs::prelude::*;

let graph = ParseConfig::new()
    .weighted(true)
    .parse("A B 4\nB C 1")
    .unwrap();

assert_eq!(graph.number_of_nodes(), 3);
assert_eq!(graph.number_of_edges(), 2);
```
*/

pub mod array;
pub mod dot;
pub mod text;

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
    str::FromStr,
};

use tracing::debug;

use crate::{error::*, prelude::*};

pub use array::*;
pub use dot::*;
pub use text::*;

/// Identifier for the syntax of the raw input
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum InputMode {
    /// Edge-list and adjacency-list lines
    #[default]
    Text,
    /// JSON-like arrays
    Array,
}

impl FromStr for InputMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(InputMode::Text),
            "array" | "json" => Ok(InputMode::Array),
            _ => Err(ParseError::UnknownInputMode(s.to_string())),
        }
    }
}

/// Configuration of a parse.
///
/// Use the setters to alter the defaults (unweighted, undirected, text mode):
/// ```
/// use textgraphs::prelude::*;
///
/// let config = ParseConfig::new().directed(true).input_mode(InputMode::Array);
/// let graph = config.parse("[[0, 1], [1, 2]]").unwrap();
/// assert!(graph.is_directed());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct ParseConfig {
    weighted: bool,
    directed: bool,
    input_mode: InputMode,
}

impl ParseConfig {
    /// Creates a new (default) configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_weighted(&mut self, weighted: bool) {
        self.weighted = weighted;
    }

    /// If *false*, all edges get weight `1` regardless of the input
    pub fn weighted(mut self, weighted: bool) -> Self {
        self.set_weighted(weighted);
        self
    }

    pub fn set_directed(&mut self, directed: bool) {
        self.directed = directed;
    }

    /// If *false*, every edge is reachable from both endpoints
    pub fn directed(mut self, directed: bool) -> Self {
        self.set_directed(directed);
        self
    }

    pub fn set_input_mode(&mut self, input_mode: InputMode) {
        self.input_mode = input_mode;
    }

    /// Updates the input syntax
    pub fn input_mode(mut self, input_mode: InputMode) -> Self {
        self.set_input_mode(input_mode);
        self
    }

    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn mode(&self) -> InputMode {
        self.input_mode
    }

    /// Parses `raw` into a fresh model. Shorthand for [`parse`].
    pub fn parse(&self, raw: &str) -> Result<GraphModel> {
        parse(raw, self)
    }
}

/// Parses `raw` according to `config` into a fresh [`GraphModel`].
///
/// # Errors
/// Returns a [`ParseError`] if array-mode input cannot be interpreted.
/// Text mode never fails: lines that do not describe an edge are skipped.
pub fn parse(raw: &str, config: &ParseConfig) -> Result<GraphModel> {
    let mut builder = GraphBuilder::new(config.weighted, config.directed);

    match config.input_mode {
        InputMode::Text => TextReader::default().try_read_graph(raw, &mut builder)?,
        InputMode::Array => ArrayReader::default().try_read_graph(raw, &mut builder)?,
    }

    let graph = builder.build();
    debug!(
        mode = ?config.input_mode,
        nodes = graph.number_of_nodes(),
        edges = graph.number_of_edges(),
        directed = graph.is_directed(),
        "parsed graph"
    );

    Ok(graph)
}

/// Trait for types that can read graphs in a specific syntax.
///
/// Readers feed edges into a [`GraphBuilder`], which assigns ids and maintains the
/// adjacency and edge-key indices.
pub trait GraphReader {
    /// Reads all edges described by `raw` into `builder`.
    ///
    /// # Errors
    /// Returns an error if the input is not a valid representation
    /// of a graph in the expected syntax.
    fn try_read_graph(&self, raw: &str, builder: &mut GraphBuilder) -> Result<()>;
}

/// Trait for types that can write graph models in a specific format.
pub trait GraphWriter {
    /// Writes the given graph to the provided writer according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if writing fails (e.g., IO errors).
    fn try_write_graph<W>(&self, graph: &GraphModel, writer: W) -> std::io::Result<()>
    where
        W: Write;

    /// Writes the given graph to a file according to the settings in `self`.
    ///
    /// Internally wraps the file in a buffered writer.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_graph_file<P>(&self, graph: &GraphModel, path: P) -> std::io::Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_graph(graph, BufWriter::new(File::create(path)?))
    }
}
