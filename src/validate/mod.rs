//! Pure workflow validation: `(nodes, edges)` in, a persistable
//! [`ValidWorkflow`] or an error list out.
//!
//! The validator holds no state and may be re-run on every edit. Errors
//! accumulate across checks so the checklist can show every problem at
//! once; only the trigger-count check short-circuits, because nothing
//! downstream is meaningful without exactly one trigger.

pub mod node_rules;
pub mod structural;

use serde::{Deserialize, Serialize};

use crate::model::{Edge, EditorGraph, Node};
use crate::persist::ValidWorkflow;

/// One validation finding. Global variants carry no node id; node-scoped
/// variants point at the offending node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum WorkflowError {
    /// A placeholder node has not been given a concrete type yet.
    EmptyNodes { node_id: String },
    MissingTriggerNode,
    MultipleTriggerNodes,
    GraphLoop,
    NotConnectedToTrigger { node_id: String },
    InvalidNodeConfig { node_id: String },
    MissingOutgoingNode { node_id: String },
    MultipleOutgoingNodes { node_id: String },
    WrongOutgoingNode { node_id: String },
    NoOutgoingNodeRequired { node_id: String },
}

impl WorkflowError {
    /// Stable kebab-case tag, identical to the serde wire name.
    pub fn code(&self) -> &'static str {
        match self {
            WorkflowError::EmptyNodes { .. } => "empty-nodes",
            WorkflowError::MissingTriggerNode => "missing-trigger-node",
            WorkflowError::MultipleTriggerNodes => "multiple-trigger-nodes",
            WorkflowError::GraphLoop => "graph-loop",
            WorkflowError::NotConnectedToTrigger { .. } => "not-connected-to-trigger",
            WorkflowError::InvalidNodeConfig { .. } => "invalid-node-config",
            WorkflowError::MissingOutgoingNode { .. } => "missing-outgoing-node",
            WorkflowError::MultipleOutgoingNodes { .. } => "multiple-outgoing-nodes",
            WorkflowError::WrongOutgoingNode { .. } => "wrong-outgoing-node",
            WorkflowError::NoOutgoingNodeRequired { .. } => "no-outgoing-node-required",
        }
    }

    pub fn node_id(&self) -> Option<&str> {
        match self {
            WorkflowError::MissingTriggerNode
            | WorkflowError::MultipleTriggerNodes
            | WorkflowError::GraphLoop => None,
            WorkflowError::EmptyNodes { node_id }
            | WorkflowError::NotConnectedToTrigger { node_id }
            | WorkflowError::InvalidNodeConfig { node_id }
            | WorkflowError::MissingOutgoingNode { node_id }
            | WorkflowError::MultipleOutgoingNodes { node_id }
            | WorkflowError::WrongOutgoingNode { node_id }
            | WorkflowError::NoOutgoingNodeRequired { node_id } => Some(node_id),
        }
    }

    /// Human-readable description, without the code prefix.
    pub fn message(&self) -> &'static str {
        match self {
            WorkflowError::EmptyNodes { .. } => "Node has no type assigned yet",
            WorkflowError::MissingTriggerNode => "Workflow has no trigger node",
            WorkflowError::MultipleTriggerNodes => "Workflow has more than one trigger node",
            WorkflowError::GraphLoop => "Workflow graph contains a loop",
            WorkflowError::NotConnectedToTrigger { .. } => "Node is not connected to the trigger",
            WorkflowError::InvalidNodeConfig { .. } => "Node configuration is incomplete",
            WorkflowError::MissingOutgoingNode { .. } => "Node requires an outgoing node",
            WorkflowError::MultipleOutgoingNodes { .. } => {
                "Node must have a single outgoing node"
            }
            WorkflowError::WrongOutgoingNode { .. } => {
                "Outgoing node cannot be used at this position"
            }
            WorkflowError::NoOutgoingNodeRequired { .. } => {
                "Node must not have an outgoing node"
            }
        }
    }
}

impl std::fmt::Display for WorkflowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.node_id() {
            Some(id) => write!(f, "[{}] {} (node '{}')", self.code(), self.message(), id),
            None => write!(f, "[{}] {}", self.code(), self.message()),
        }
    }
}

/// Outcome of a validation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ValidationResult {
    Valid { value: ValidWorkflow },
    Invalid { errors: Vec<WorkflowError> },
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid { .. })
    }

    pub fn value(&self) -> Option<&ValidWorkflow> {
        match self {
            ValidationResult::Valid { value } => Some(value),
            ValidationResult::Invalid { .. } => None,
        }
    }

    pub fn errors(&self) -> &[WorkflowError] {
        match self {
            ValidationResult::Valid { .. } => &[],
            ValidationResult::Invalid { errors } => errors,
        }
    }
}

/// Validate an editor graph. Deterministic: depends only on its arguments.
///
/// Error ordering is placeholder findings first, then connectivity, then
/// the business rules for the trigger kind.
pub fn validate(nodes: &[Node], edges: &[Edge]) -> ValidationResult {
    let graph = EditorGraph::build(nodes, edges);
    let mut errors = Vec::new();

    structural::check_placeholders(nodes, &mut errors);

    // Fatal: everything after this needs exactly one trigger.
    let Some(trigger) = structural::find_single_trigger(nodes, &mut errors) else {
        return ValidationResult::Invalid { errors };
    };

    structural::check_reachability(nodes, &graph, trigger, &mut errors);

    let value = node_rules::check_trigger_rules(nodes, edges, trigger, &mut errors);

    match value {
        Some(value) if errors.is_empty() => ValidationResult::Valid { value },
        _ => ValidationResult::Invalid { errors },
    }
}
