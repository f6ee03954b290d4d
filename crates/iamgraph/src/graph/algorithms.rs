//! Graph traversal algorithms.
//!
//! Provides lazy simple-path enumeration over the undirected view of an
//! [`OrgGraph`], used by relationship inference to test organisational linkage.

use crate::graph::{Direction, OrgGraph};
use log::trace;
use std::collections::HashSet;

/// Lazy iterator over all simple paths between two nodes.
///
/// Edges are followed in both directions. Paths are node sequences, so
/// parallel edges between the same pair contribute a single path. The search
/// is an iterative DFS with one neighbor cursor per path position; no node is
/// visited twice on the same path, which makes the sequence finite.
///
/// Cloning the iterator captures its current position, so a clone taken
/// before the first `next()` replays the full sequence.
#[derive(Debug, Clone)]
pub struct SimplePaths<'a> {
    graph: &'a OrgGraph,
    target: &'a str,
    path: Vec<&'a str>,
    on_path: HashSet<&'a str>,
    cursors: Vec<std::vec::IntoIter<&'a str>>,
    max_nodes: usize,
}

impl<'a> SimplePaths<'a> {
    pub(crate) fn new(graph: &'a OrgGraph, source: &'a str, target: &'a str) -> Self {
        let mut paths = Self {
            graph,
            target,
            path: Vec::new(),
            on_path: HashSet::new(),
            cursors: Vec::new(),
            max_nodes: usize::MAX,
        };

        // A node is not a path to itself
        if source != target {
            paths.descend(source);
        }

        paths
    }

    /// Only yield paths of at most `max_nodes` nodes (both endpoints included).
    ///
    /// Longer branches are pruned instead of being enumerated and discarded.
    pub fn max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    fn descend(&mut self, node: &'a str) {
        self.path.push(node);
        self.on_path.insert(node);
        self.cursors
            .push(self.graph.neighbor_keys(node, Direction::Both).into_iter());
    }

    fn backtrack(&mut self) {
        self.cursors.pop();
        if let Some(node) = self.path.pop() {
            self.on_path.remove(node);
        }
    }
}

impl<'a> Iterator for SimplePaths<'a> {
    type Item = Vec<&'a str>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let next_child = self.cursors.last_mut()?.next();
            match next_child {
                Some(child) if child == self.target => {
                    if self.path.len() + 1 > self.max_nodes {
                        continue;
                    }
                    let mut found = self.path.clone();
                    found.push(child);
                    trace!("Simple path found: {found:?}");
                    return Some(found);
                }
                Some(child) => {
                    // Room is needed for this node and the target after it
                    if self.path.len() + 2 <= self.max_nodes && !self.on_path.contains(child) {
                        self.descend(child);
                    }
                }
                None => self.backtrack(),
            }
        }
    }
}
