//! # Dot
//!
//! The Dot-Format is a very extensive format used by [GraphViz](https://graphviz.org/) to allow
//! for detailed visualizations. We only use basic functionality to draw (colored) nodes and edges.
//!
//! Drawing happens through an explicit [`Rendering`] handle: it is created for one model,
//! collects highlights (a shortest path, a spanning tree) and is finally written out.
//! ```
//! use textgraphs::prelude::*;
//!
//! let graph = ParseConfig::new().weighted(true).parse("A B 4\nB C 1").unwrap();
//! let path = graph.shortest_path("A", "C");
//!
//! let mut rendering = DotWriter::new().render(&graph);
//! rendering.highlight_path(&path);
//! let dot = rendering.to_dot_string();
//!
//! assert!(dot.starts_with("graph {"));
//! assert!(dot.contains("\"A\" -- \"B\" [label=\"4\", color=red, penwidth=2];"));
//! ```
//!
//! Node ids are always quoted, so they may contain spaces or other special characters.
use std::{fmt::Display, io::Write};

use fxhash::FxHashMap;
use itertools::Itertools;

use super::*;
use crate::algo::{ShortestPath, SpanningTree};

/// A writer for the Dot-Format
#[derive(Debug, Clone)]
pub struct DotWriter {
    /// Color for nodes and edges of a highlighted path
    path_color: DotColor,
    /// Color for edges of a highlighted spanning tree
    tree_color: DotColor,
    /// Draw weight labels (if the graph is weighted)
    edge_labels: bool,
}

impl Default for DotWriter {
    fn default() -> Self {
        Self {
            path_color: DotColor::Red,
            tree_color: DotColor::Green,
            edge_labels: true,
        }
    }
}

impl DotWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the color used by [`Rendering::highlight_path`]
    pub fn path_color(mut self, color: DotColor) -> Self {
        self.path_color = color;
        self
    }

    /// Updates the color used by [`Rendering::highlight_spanning_tree`]
    pub fn tree_color(mut self, color: DotColor) -> Self {
        self.tree_color = color;
        self
    }

    /// If *false*, weight labels are omitted
    pub fn edge_labels(mut self, edge_labels: bool) -> Self {
        self.edge_labels = edge_labels;
        self
    }

    /// Creates a rendering handle for `graph` without any highlights
    pub fn render<'a>(&self, graph: &'a GraphModel) -> Rendering<'a> {
        Rendering {
            writer: self.clone(),
            graph,
            node_colors: FxHashMap::default(),
            edge_colors: FxHashMap::default(),
        }
    }
}

impl GraphWriter for DotWriter {
    fn try_write_graph<W>(&self, graph: &GraphModel, writer: W) -> std::io::Result<()>
    where
        W: Write,
    {
        self.render(graph).try_write(writer)
    }
}

/// Trait for writing a graph to a writer in the Dot-Format.
/// Shorthand for default settings.
pub trait DotWrite {
    /// Tries to write the graph to a writer
    fn try_write_dot<W>(&self, writer: W) -> std::io::Result<()>
    where
        W: Write;

    /// Tries to write the graph to a file
    fn try_write_dot_file<P>(&self, path: P) -> std::io::Result<()>
    where
        P: AsRef<Path>,
    {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_dot(writer)
    }
}

impl DotWrite for GraphModel {
    fn try_write_dot<W>(&self, writer: W) -> std::io::Result<()>
    where
        W: Write,
    {
        DotWriter::default().try_write_graph(self, writer)
    }
}

/// Handle to a drawn graph and its current highlights.
///
/// For nodes and edges, the latest highlight is the one that is drawn.
#[derive(Debug, Clone)]
pub struct Rendering<'a> {
    writer: DotWriter,
    graph: &'a GraphModel,
    node_colors: FxHashMap<Node, DotColor>,
    edge_colors: FxHashMap<EdgeId, DotColor>,
}

impl<'a> Rendering<'a> {
    /// Returns the rendered graph
    pub fn graph(&self) -> &'a GraphModel {
        self.graph
    }

    /// Removes all highlights
    pub fn reset_highlights(&mut self) {
        self.node_colors.clear();
        self.edge_colors.clear();
    }

    /// Marks the given nodes (by id) and edges (by edge id). Unknown ids are ignored.
    pub fn highlight_path_ids<'b, I, E>(&mut self, nodes: I, edges: E)
    where
        I: IntoIterator<Item = &'b str>,
        E: IntoIterator<Item = EdgeId>,
    {
        let color = self.writer.path_color;
        for u in nodes.into_iter().filter_map(|id| self.graph.index_of(id)) {
            self.node_colors.insert(u, color);
        }
        self.color_edges(edges, color);
    }

    /// Marks the nodes and edges of a shortest path
    pub fn highlight_path(&mut self, path: &ShortestPath) {
        self.highlight_path_ids(
            path.path.iter().map(String::as_str),
            path.edge_ids.iter().copied(),
        );
    }

    /// Marks the edges of a spanning tree
    pub fn highlight_spanning_tree(&mut self, tree: &SpanningTree) {
        let color = self.writer.tree_color;
        self.color_edges(tree.edge_ids.iter().copied(), color);
    }

    fn color_edges<E>(&mut self, edges: E, color: DotColor)
    where
        E: IntoIterator<Item = EdgeId>,
    {
        let m = self.graph.number_of_edges();
        for e in edges.into_iter().filter(|&e| e < m) {
            self.edge_colors.insert(e, color);
        }
    }

    /// Writes the graph with all highlights to `writer`
    pub fn try_write<W>(&self, mut writer: W) -> std::io::Result<()>
    where
        W: Write,
    {
        let (graph_name, edge_dir) = if self.graph.is_directed() {
            ("digraph", "->")
        } else {
            ("graph", "--")
        };

        writeln!(writer, "{graph_name} {{")?;

        for u in self.graph.vertices() {
            let node = &self.graph.nodes()[u as usize];
            let mut attributes = vec![format!("label={}", quote(&node.label))];
            if let Some(color) = self.node_colors.get(&u) {
                attributes.push(format!("style=filled, fillcolor={color}"));
            }
            writeln!(writer, "  {} [{}];", quote(&node.id), attributes.join(", "))?;
        }

        for edge in self.graph.edges() {
            let mut attributes = Vec::new();
            if let Some(label) = edge.label.as_ref().filter(|_| self.writer.edge_labels) {
                attributes.push(format!("label={}", quote(label)));
            }
            if let Some(color) = self.edge_colors.get(&edge.id) {
                attributes.push(format!("color={color}, penwidth=2"));
            }

            write!(writer, "  {} {edge_dir} {}", quote(&edge.from), quote(&edge.to))?;
            if !attributes.is_empty() {
                write!(writer, " [{}]", attributes.iter().join(", "))?;
            }
            writeln!(writer, ";")?;
        }

        writeln!(writer, "}}")
    }

    /// Renders the graph into a `String`
    pub fn to_dot_string(&self) -> String {
        let mut buffer = Vec::new();
        // writing into a Vec<u8> cannot fail
        let _ = self.try_write(&mut buffer);
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

/// Quotes and escapes an id for use in Dot
fn quote(id: &str) -> String {
    format!("\"{}\"", id.replace('\\', "\\\\").replace('"', "\\\""))
}

impl Display for DotColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format!("{self:?}").to_lowercase())
    }
}

/// Subset of the colors permitted in Svg-Dot, see
/// `https://graphviz.gitlab.io/doc/info/colors.html#svg`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DotColor {
    Black,
    Blue,
    DarkGreen,
    DarkOrange,
    Gold,
    Gray,
    Green,
    Magenta,
    Orange,
    Purple,
    Red,
    RoyalBlue,
}
