//! UI-facing projection of validation errors: one set of global flags for
//! the save checklist, one flag set per offending node for inline badges.
//!
//! Pure and cheap; recomputed on every render cycle.

use std::collections::HashMap;

use serde::Serialize;

use crate::validate::WorkflowError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalChecklist {
    pub has_missing_trigger_node: bool,
    pub has_multiple_trigger_nodes: bool,
    pub has_empty_nodes: bool,
    pub has_graph_loop: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeChecklist {
    pub has_invalid_config: bool,
    pub is_not_connected_to_trigger: bool,
    pub has_multiple_outgoing_node: bool,
    pub has_missing_outgoing_node: bool,
    pub has_wrong_outgoing_node: bool,
    pub no_outgoing_node_required: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Checklist {
    pub global: GlobalChecklist,
    pub nodes: HashMap<String, NodeChecklist>,
}

/// Fold an error list into checklist flags.
///
/// `empty-nodes` carries a node id but feeds the global flag: the editor
/// shows "assign a type" as one checklist line, while the per-node badges
/// cover the structural and config problems.
pub fn project(errors: &[WorkflowError]) -> Checklist {
    let mut checklist = Checklist::default();

    for error in errors {
        match error {
            WorkflowError::MissingTriggerNode => {
                checklist.global.has_missing_trigger_node = true;
            }
            WorkflowError::MultipleTriggerNodes => {
                checklist.global.has_multiple_trigger_nodes = true;
            }
            WorkflowError::EmptyNodes { .. } => {
                checklist.global.has_empty_nodes = true;
            }
            WorkflowError::GraphLoop => {
                checklist.global.has_graph_loop = true;
            }
            WorkflowError::NotConnectedToTrigger { node_id } => {
                node_entry(&mut checklist, node_id).is_not_connected_to_trigger = true;
            }
            WorkflowError::InvalidNodeConfig { node_id } => {
                node_entry(&mut checklist, node_id).has_invalid_config = true;
            }
            WorkflowError::MissingOutgoingNode { node_id } => {
                node_entry(&mut checklist, node_id).has_missing_outgoing_node = true;
            }
            WorkflowError::MultipleOutgoingNodes { node_id } => {
                node_entry(&mut checklist, node_id).has_multiple_outgoing_node = true;
            }
            WorkflowError::WrongOutgoingNode { node_id } => {
                node_entry(&mut checklist, node_id).has_wrong_outgoing_node = true;
            }
            WorkflowError::NoOutgoingNodeRequired { node_id } => {
                node_entry(&mut checklist, node_id).no_outgoing_node_required = true;
            }
        }
    }

    checklist
}

fn node_entry<'a>(checklist: &'a mut Checklist, node_id: &str) -> &'a mut NodeChecklist {
    checklist.nodes.entry(node_id.to_string()).or_default()
}
