//! Business rules for the trigger kind: node configs and outgoing-edge
//! cardinality. Match arms here must track the `NodeData` variants in
//! `src/model/mod.rs`.

use crate::model::{Edge, Node, NodeData, Outcome};
use crate::persist::{ValidAction, ValidTrigger, ValidWorkflow, WorkflowType};

use super::WorkflowError;

/// Dispatch on the trigger's data kind. Exhaustive: a new trigger variant
/// must add its rules here before the crate compiles.
///
/// Returns the assembled workflow only when every rule in this step
/// passed; the caller still requires the overall error list to be empty.
pub fn check_trigger_rules(
    nodes: &[Node],
    edges: &[Edge],
    trigger: &Node,
    errors: &mut Vec<WorkflowError>,
) -> Option<ValidWorkflow> {
    match &trigger.data {
        NodeData::DecisionCreatedTrigger {
            scenario_id,
            outcomes,
        } => decision_created_rules(nodes, edges, trigger, scenario_id, outcomes, errors),
        NodeData::Empty
        | NodeData::CreateCaseAction { .. }
        | NodeData::AddToCaseIfPossibleAction { .. } => {
            unreachable!("node classified as trigger carries non-trigger data")
        }
    }
}

fn decision_created_rules(
    nodes: &[Node],
    edges: &[Edge],
    trigger: &Node,
    scenario_id: &Option<String>,
    outcomes: &[Outcome],
    errors: &mut Vec<WorkflowError>,
) -> Option<ValidWorkflow> {
    // Config failure does not mask the cardinality checks below.
    let valid_trigger = match scenario_id {
        Some(scenario_id) if !scenario_id.is_empty() && !outcomes.is_empty() => {
            Some(ValidTrigger {
                scenario_id: scenario_id.clone(),
                outcomes: outcomes.to_vec(),
            })
        }
        _ => {
            errors.push(WorkflowError::InvalidNodeConfig {
                node_id: trigger.id.clone(),
            });
            None
        }
    };

    let outgoing = outgoing_nodes(nodes, edges, &trigger.id);
    let valid_action = match outgoing.as_slice() {
        &[] => {
            errors.push(WorkflowError::MissingOutgoingNode {
                node_id: trigger.id.clone(),
            });
            None
        }
        &[action] => check_case_action(nodes, edges, trigger, action, errors),
        _ => {
            errors.push(WorkflowError::MultipleOutgoingNodes {
                node_id: trigger.id.clone(),
            });
            None
        }
    };

    let (workflow_type, action) = valid_action?;
    Some(ValidWorkflow {
        workflow_type,
        trigger: valid_trigger?,
        action,
    })
}

/// Rules for the single node downstream of the trigger.
fn check_case_action(
    nodes: &[Node],
    edges: &[Edge],
    trigger: &Node,
    action: &Node,
    errors: &mut Vec<WorkflowError>,
) -> Option<(WorkflowType, ValidAction)> {
    match &action.data {
        NodeData::CreateCaseAction { inbox_id } => {
            terminal_action_rules(nodes, edges, action, inbox_id, errors)
                .map(|a| (WorkflowType::CreateCase, a))
        }
        NodeData::AddToCaseIfPossibleAction { inbox_id } => {
            terminal_action_rules(nodes, edges, action, inbox_id, errors)
                .map(|a| (WorkflowType::AddToCaseIfPossible, a))
        }
        // Placeholders are tolerated here; the structural pass already
        // reported them.
        NodeData::Empty => None,
        NodeData::DecisionCreatedTrigger { .. } => {
            errors.push(WorkflowError::WrongOutgoingNode {
                node_id: trigger.id.clone(),
            });
            None
        }
    }
}

fn terminal_action_rules(
    nodes: &[Node],
    edges: &[Edge],
    action: &Node,
    inbox_id: &Option<String>,
    errors: &mut Vec<WorkflowError>,
) -> Option<ValidAction> {
    let before = errors.len();

    let valid = match inbox_id {
        Some(inbox_id) if !inbox_id.is_empty() => Some(ValidAction {
            inbox_id: inbox_id.clone(),
        }),
        _ => {
            errors.push(WorkflowError::InvalidNodeConfig {
                node_id: action.id.clone(),
            });
            None
        }
    };

    if !outgoing_nodes(nodes, edges, &action.id).is_empty() {
        errors.push(WorkflowError::NoOutgoingNodeRequired {
            node_id: action.id.clone(),
        });
    }

    if errors.len() == before { valid } else { None }
}

/// Nodes reached by one outgoing edge, resolved against the node list.
/// Dangling edges are ignored; duplicate edges count twice.
fn outgoing_nodes<'a>(nodes: &'a [Node], edges: &[Edge], node_id: &str) -> Vec<&'a Node> {
    edges
        .iter()
        .filter(|e| e.source == node_id)
        .filter_map(|e| nodes.iter().find(|n| n.id == e.target))
        .collect()
}
