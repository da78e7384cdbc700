//! Node and edge data model for the decision-to-case workflow editor.
//!
//! These types are the serde target for the frontend graph JSON. A node's
//! kind (trigger/action/empty) is always derived from its `NodeData`
//! variant, never stored separately, so the classifier stays exhaustive
//! when variants are added.

pub mod graph;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use graph::EditorGraph;

/// Decision outcome a trigger can match on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Approve,
    Review,
    BlockAndReview,
    Decline,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };
}

/// Payload of a graph node — the closed set of node types the editor knows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NodeData {
    #[serde(rename = "empty")]
    Empty,
    #[serde(rename = "decisionCreatedTrigger", rename_all = "camelCase")]
    DecisionCreatedTrigger {
        scenario_id: Option<String>,
        outcomes: Vec<Outcome>,
    },
    #[serde(rename = "createCaseAction", rename_all = "camelCase")]
    CreateCaseAction { inbox_id: Option<String> },
    #[serde(rename = "addToCaseIfPossibleAction", rename_all = "camelCase")]
    AddToCaseIfPossibleAction { inbox_id: Option<String> },
}

/// Derived classification of a node. Never persisted on the node itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Trigger,
    Action,
    Empty,
}

impl NodeData {
    /// Classify the payload. Exhaustive on purpose: a new variant must
    /// pick a kind here before anything else compiles.
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeData::Empty => NodeKind::Empty,
            NodeData::DecisionCreatedTrigger { .. } => NodeKind::Trigger,
            NodeData::CreateCaseAction { .. } | NodeData::AddToCaseIfPossibleAction { .. } => {
                NodeKind::Action
            }
        }
    }

    /// Terminal actions must not have outgoing edges. Consulted by the
    /// validator and by `GraphStore::is_outgoing_slot_free`.
    pub fn is_terminal_action(&self) -> bool {
        matches!(
            self,
            NodeData::CreateCaseAction { .. } | NodeData::AddToCaseIfPossibleAction { .. }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub position: Position,
    #[serde(default)]
    pub selected: bool,
    pub data: NodeData,
}

impl Node {
    /// Allocate a node with a fresh unique id at the origin, unselected.
    pub fn new(data: NodeData) -> Node {
        Node {
            id: new_id(),
            position: Position::ORIGIN,
            selected: false,
            data,
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.data.kind()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub selected: bool,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Edge {
        Edge {
            id: new_id(),
            source: source.into(),
            target: target.into(),
            selected: false,
        }
    }
}

/// Ids are random and stable for the life of the owning node/edge.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// REFERENCE DATA — resolved upstream, read-only here
// =============================================================================

/// Scenario the trigger listens on. Display data only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: String,
    pub name: String,
}

/// Case inbox an action files into. Display data only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inbox {
    pub id: String,
    pub name: String,
}
