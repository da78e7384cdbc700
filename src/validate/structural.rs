//! Graph-level structural checks: placeholders, trigger count, reachability.

use std::collections::HashSet;

use crate::model::{EditorGraph, Node, NodeKind};

use super::WorkflowError;

/// Report every node still waiting for a type choice. Non-fatal: the same
/// node can also be flagged as not connected, so the user sees both.
pub fn check_placeholders(nodes: &[Node], errors: &mut Vec<WorkflowError>) {
    for node in nodes {
        if node.kind() == NodeKind::Empty {
            errors.push(WorkflowError::EmptyNodes {
                node_id: node.id.clone(),
            });
        }
    }
}

/// Require exactly one trigger node. Returns it, or records the fatal
/// error and returns `None` so the caller stops.
pub fn find_single_trigger<'a>(
    nodes: &'a [Node],
    errors: &mut Vec<WorkflowError>,
) -> Option<&'a Node> {
    let mut triggers = nodes.iter().filter(|n| n.kind() == NodeKind::Trigger);
    match (triggers.next(), triggers.next()) {
        (None, _) => {
            errors.push(WorkflowError::MissingTriggerNode);
            None
        }
        (Some(_), Some(_)) => {
            errors.push(WorkflowError::MultipleTriggerNodes);
            None
        }
        (Some(trigger), None) => Some(trigger),
    }
}

/// Depth-first traversal from the trigger over outgoing edges.
///
/// One visited-set is shared across the whole traversal, so revisiting any
/// node is reported as a loop. This misreads a converging DAG diamond as a
/// loop, which is fine today: the trigger rules cap every non-terminal
/// node at one outgoing edge, so diamonds cannot occur for the supported
/// shape. Branching node kinds would need a real cycle check here.
pub fn check_reachability<'a>(
    nodes: &'a [Node],
    graph: &'a EditorGraph,
    trigger: &'a Node,
    errors: &mut Vec<WorkflowError>,
) {
    let mut visited: HashSet<&str> = HashSet::new();
    let mut looped = false;
    walk(graph, &trigger.id, &mut visited, &mut looped);

    if looped {
        errors.push(WorkflowError::GraphLoop);
    }

    for node in nodes {
        if !visited.contains(node.id.as_str()) {
            errors.push(WorkflowError::NotConnectedToTrigger {
                node_id: node.id.clone(),
            });
        }
    }
}

fn walk<'a>(
    graph: &'a EditorGraph,
    node_id: &'a str,
    visited: &mut HashSet<&'a str>,
    looped: &mut bool,
) {
    if !visited.insert(node_id) {
        // Stop expanding this path; sibling paths are still explored.
        *looped = true;
        return;
    }
    for successor in graph.successors(node_id) {
        walk(graph, successor, visited, looped);
    }
}
