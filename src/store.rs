//! Session state for one workflow being edited.
//!
//! The store owns the committed `(nodes, edges)` snapshot and exposes the
//! closed set of mutating commands. Every command is total: unknown ids
//! are silent no-ops, and no command can leave the graph without at least
//! one node. Commands never mutate in place; they build a new snapshot
//! and swap it in, so observers detect change with `Arc::ptr_eq`.
//!
//! The store does not enforce graph legality. Illegal shapes (dangling
//! edges, duplicate edges, orphan nodes) are allowed to exist and are
//! reported by [`crate::validate::validate`], which the store invokes on
//! demand and never caches.

use std::sync::Arc;

use tracing::debug;

use crate::model::{Edge, Node, NodeData, NodeKind, Position};
use crate::persist::{self, ValidWorkflow};
use crate::validate::{ValidationResult, validate};

/// One committed graph state.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphSnapshot {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

/// A batch delta against the node list.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeChange {
    Add { node: Node },
    Remove { id: String },
    Move { id: String, position: Position },
    Select { id: String, selected: bool },
}

/// A batch delta against the edge list.
#[derive(Debug, Clone, PartialEq)]
pub enum EdgeChange {
    Add { edge: Edge },
    Remove { id: String },
}

/// Vertical offset used when positioning a new child under its parent.
const CHILD_OFFSET_Y: f64 = 150.0;

pub struct GraphStore {
    state: Arc<GraphSnapshot>,
}

impl GraphStore {
    /// Fresh editing session: a single selected placeholder node.
    pub fn new() -> GraphStore {
        let mut placeholder = Node::new(NodeData::Empty);
        placeholder.selected = true;
        GraphStore {
            state: Arc::new(GraphSnapshot {
                nodes: vec![placeholder],
                edges: vec![],
            }),
        }
    }

    /// Session hydrated from a persisted workflow: one trigger node, one
    /// action node, one connecting edge, nothing selected.
    pub fn hydrate(workflow: &ValidWorkflow) -> GraphStore {
        let (nodes, edges) = persist::hydrate(workflow);
        GraphStore {
            state: Arc::new(GraphSnapshot { nodes, edges }),
        }
    }

    // -------------------------------------------------------------------------
    // Selectors
    // -------------------------------------------------------------------------

    /// The committed snapshot. A new `Arc` is published on every command,
    /// so `Arc::ptr_eq` on two snapshots tells whether anything changed.
    pub fn snapshot(&self) -> Arc<GraphSnapshot> {
        Arc::clone(&self.state)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.state.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.state.edges
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.state.nodes.iter().find(|n| n.id == id)
    }

    pub fn selected_nodes(&self) -> Vec<&Node> {
        self.state.nodes.iter().filter(|n| n.selected).collect()
    }

    /// Which kind the UI may assign to a placeholder: `Action` when the
    /// node already hangs under something or a trigger exists on another
    /// node, otherwise `Trigger`.
    pub fn allowed_kind_to_create(&self, id: &str) -> NodeKind {
        let has_incoming = self.state.edges.iter().any(|e| e.target == id);
        let trigger_elsewhere = self
            .state
            .nodes
            .iter()
            .any(|n| n.id != id && n.kind() == NodeKind::Trigger);
        if has_incoming || trigger_elsewhere {
            NodeKind::Action
        } else {
            NodeKind::Trigger
        }
    }

    /// Whether a new child may be hung under this node: no outgoing edge
    /// yet, and the node is not a terminal action.
    pub fn is_outgoing_slot_free(&self, id: &str) -> bool {
        let Some(node) = self.node(id) else {
            return false;
        };
        !node.data.is_terminal_action() && !self.state.edges.iter().any(|e| e.source == id)
    }

    /// Run the pure validator on the committed snapshot. Nothing is
    /// cached; callers may invoke this on every keystroke.
    pub fn validate(&self) -> ValidationResult {
        validate(&self.state.nodes, &self.state.edges)
    }

    // -------------------------------------------------------------------------
    // Commands
    // -------------------------------------------------------------------------

    /// Apply a batch of node deltas. Afterwards, if the list went empty or
    /// a trigger node was removed, a fresh selected placeholder is
    /// appended at the removed node's former position when one is known.
    pub fn apply_node_changes(&mut self, changes: Vec<NodeChange>) {
        let mut nodes = self.state.nodes.clone();
        let mut trigger_removed = false;
        let mut last_removed_position = None;

        for change in changes {
            match change {
                NodeChange::Add { node } => nodes.push(node),
                NodeChange::Remove { id } => {
                    if let Some(index) = nodes.iter().position(|n| n.id == id) {
                        let removed = nodes.remove(index);
                        if removed.kind() == NodeKind::Trigger {
                            trigger_removed = true;
                        }
                        last_removed_position = Some(removed.position);
                    }
                }
                NodeChange::Move { id, position } => {
                    if let Some(node) = nodes.iter_mut().find(|n| n.id == id) {
                        node.position = position;
                    }
                }
                NodeChange::Select { id, selected } => {
                    if let Some(node) = nodes.iter_mut().find(|n| n.id == id) {
                        node.selected = selected;
                    }
                }
            }
        }

        if nodes.is_empty() || trigger_removed {
            let mut placeholder = Node::new(NodeData::Empty);
            if let Some(position) = last_removed_position {
                placeholder.position = position;
            }
            placeholder.selected = true;
            nodes.push(placeholder);
        }

        let edges = self.state.edges.clone();
        self.commit("apply_node_changes", nodes, edges);
    }

    /// Apply a batch of edge deltas verbatim. Structural legality is the
    /// validator's concern, not enforced here.
    pub fn apply_edge_changes(&mut self, changes: Vec<EdgeChange>) {
        let mut edges = self.state.edges.clone();

        for change in changes {
            match change {
                EdgeChange::Add { edge } => edges.push(edge),
                EdgeChange::Remove { id } => edges.retain(|e| e.id != id),
            }
        }

        let nodes = self.state.nodes.clone();
        self.commit("apply_edge_changes", nodes, edges);
    }

    /// Append one edge between two existing nodes. Duplicate edges between
    /// the same pair are permitted.
    pub fn connect(&mut self, source: &str, target: &str) {
        if self.node(source).is_none() || self.node(target).is_none() {
            return;
        }
        let nodes = self.state.nodes.clone();
        let mut edges = self.state.edges.clone();
        edges.push(Edge::new(source, target));
        self.commit("connect", nodes, edges);
    }

    /// Replace a node's payload. This is how a placeholder acquires a
    /// concrete kind and how trigger/action parameters are edited.
    pub fn update_node_data(&mut self, id: &str, data: NodeData) {
        if self.node(id).is_none() {
            return;
        }
        let mut nodes = self.state.nodes.clone();
        if let Some(node) = nodes.iter_mut().find(|n| n.id == id) {
            node.data = data;
        }
        let edges = self.state.edges.clone();
        self.commit("update_node_data", nodes, edges);
    }

    /// Create a new placeholder as the only selected element, optionally
    /// hung under `parent` with a connecting edge.
    pub fn add_child_node(&mut self, parent: Option<&str>) {
        let mut nodes = self.state.nodes.clone();
        let mut edges = self.state.edges.clone();

        for node in nodes.iter_mut() {
            node.selected = false;
        }
        for edge in edges.iter_mut() {
            edge.selected = false;
        }

        let mut child = Node::new(NodeData::Empty);
        child.selected = true;

        if let Some(parent) = parent.and_then(|id| nodes.iter().find(|n| n.id == id)) {
            child.position = Position {
                x: parent.position.x,
                y: parent.position.y + CHILD_OFFSET_Y,
            };
            edges.push(Edge::new(parent.id.clone(), child.id.clone()));
        }

        nodes.push(child);
        self.commit("add_child_node", nodes, edges);
    }

    /// Make the given node the only selected element.
    pub fn select_node(&mut self, id: &str) {
        if self.node(id).is_none() {
            return;
        }
        let mut nodes = self.state.nodes.clone();
        let mut edges = self.state.edges.clone();
        for node in nodes.iter_mut() {
            node.selected = node.id == id;
        }
        for edge in edges.iter_mut() {
            edge.selected = false;
        }
        self.commit("select_node", nodes, edges);
    }

    /// Drop every selection flag on nodes and edges.
    pub fn clear_selection(&mut self) {
        let mut nodes = self.state.nodes.clone();
        let mut edges = self.state.edges.clone();
        for node in nodes.iter_mut() {
            node.selected = false;
        }
        for edge in edges.iter_mut() {
            edge.selected = false;
        }
        self.commit("clear_selection", nodes, edges);
    }

    fn commit(&mut self, command: &'static str, nodes: Vec<Node>, edges: Vec<Edge>) {
        debug!(
            command,
            nodes = nodes.len(),
            edges = edges.len(),
            "graph snapshot committed"
        );
        self.state = Arc::new(GraphSnapshot { nodes, edges });
    }
}

impl Default for GraphStore {
    fn default() -> Self {
        GraphStore::new()
    }
}
