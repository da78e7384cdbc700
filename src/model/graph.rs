//! petgraph-based directed graph wrapper over the editor's node/edge lists.

use std::collections::HashMap;

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};

use super::{Edge, Node};

/// Adjacency view of an editor graph snapshot.
///
/// Construction is total: the store permits edges whose endpoints were
/// removed later, so dangling edges are silently skipped here and the
/// validator reports the resulting shape instead.
pub struct EditorGraph {
    graph: DiGraph<String, String>,
    node_indices: HashMap<String, NodeIndex>,
}

impl EditorGraph {
    pub fn build(nodes: &[Node], edges: &[Edge]) -> Self {
        let mut graph = DiGraph::new();
        let mut node_indices = HashMap::new();

        for node in nodes {
            let idx = graph.add_node(node.id.clone());
            node_indices.insert(node.id.clone(), idx);
        }

        for edge in edges {
            if let (Some(&s), Some(&t)) = (
                node_indices.get(&edge.source),
                node_indices.get(&edge.target),
            ) {
                graph.add_edge(s, t, edge.id.clone());
            }
        }

        EditorGraph {
            graph,
            node_indices,
        }
    }

    /// Ids of nodes reached by one outgoing edge, duplicates included.
    pub fn successors(&self, node_id: &str) -> Vec<&str> {
        let Some(&idx) = self.node_indices.get(node_id) else {
            return vec![];
        };
        self.graph
            .neighbors_directed(idx, Direction::Outgoing)
            .map(|n| self.graph[n].as_str())
            .collect()
    }

    pub fn outgoing_count(&self, node_id: &str) -> usize {
        self.successors(node_id).len()
    }

    pub fn incoming_count(&self, node_id: &str) -> usize {
        let Some(&idx) = self.node_indices.get(node_id) else {
            return 0;
        };
        self.graph
            .neighbors_directed(idx, Direction::Incoming)
            .count()
    }
}
