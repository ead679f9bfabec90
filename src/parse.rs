//! Reading graphs from the plain-text edge-list format:
//!
//! ```text
//! <vertex count> <edge count>
//! <x> <y> <weight>
//! ...
//! ```
//!
//! Tokens are separated by arbitrary whitespace, so the line structure above
//! is conventional rather than required.

use std::{
    io::{self, BufRead},
    str::FromStr,
};

use crate::{Edge, Graph, GraphError, edge::VertexId};

/// Errors that can occur while reading a graph from text.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// A token could not be read as the value expected at that position.
    #[error("line {line}: expected {expected}, found {found:?}")]
    Syntax {
        line: usize,
        expected: &'static str,
        found: String,
    },
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: &'static str },
    #[error("line {line}: unexpected trailing input {found:?}")]
    TrailingInput { line: usize, found: String },
    /// The text was well formed but describes an invalid graph.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

struct Tokens<'a> {
    inner: Box<dyn Iterator<Item = (usize, &'a str)> + 'a>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: Box::new(
                text.lines()
                    .enumerate()
                    .flat_map(|(index, line)| line.split_whitespace().map(move |t| (index + 1, t))),
            ),
        }
    }

    fn next_value<T: FromStr>(&mut self, expected: &'static str) -> Result<T, ParseError> {
        let (line, token) = self
            .inner
            .next()
            .ok_or(ParseError::UnexpectedEof { expected })?;
        token.parse().map_err(|_| ParseError::Syntax {
            line,
            expected,
            found: token.to_string(),
        })
    }

    fn next_vertex(&mut self) -> Result<VertexId, ParseError> {
        self.next_value("a vertex id")
    }
}

impl FromStr for Graph {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut tokens = Tokens::new(text);
        let vertex_count: i64 = tokens.next_value("a vertex count")?;
        let edge_count: i64 = tokens.next_value("an edge count")?;
        if vertex_count < 0 || edge_count < 0 {
            return Err(GraphError::InvalidParameter(format!(
                "negative count in header: {vertex_count} vertices, {edge_count} edges"
            ))
            .into());
        }

        let mut edges = Vec::new();
        for _ in 0..edge_count {
            let x = tokens.next_vertex()?;
            let y = tokens.next_vertex()?;
            let weight = tokens.next_value("an edge weight")?;
            edges.push(Edge::new(x, y, weight));
        }
        if let Some((line, found)) = tokens.inner.next() {
            return Err(ParseError::TrailingInput {
                line,
                found: found.to_string(),
            });
        }

        Ok(Graph::from_counts(vertex_count, edge_count, &edges)?)
    }
}

impl Graph {
    /// Reads a graph in the text format from `reader`, consuming all of its
    /// input.
    pub fn read_from(mut reader: impl BufRead) -> Result<Graph, ParseError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        text.parse()
    }
}
