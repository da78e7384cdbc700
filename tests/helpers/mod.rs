use caseflow::model::{Edge, Node, NodeData, Outcome, Position};

// =============================================================================
// Node builders with fixed ids, so assertions stay deterministic
// =============================================================================

pub fn node(id: &str, data: NodeData) -> Node {
    Node {
        id: id.into(),
        position: Position::ORIGIN,
        selected: false,
        data,
    }
}

pub fn empty_node(id: &str) -> Node {
    node(id, NodeData::Empty)
}

pub fn trigger_node(id: &str, scenario_id: Option<&str>, outcomes: &[Outcome]) -> Node {
    node(
        id,
        NodeData::DecisionCreatedTrigger {
            scenario_id: scenario_id.map(str::to_string),
            outcomes: outcomes.to_vec(),
        },
    )
}

/// Trigger with a complete configuration.
pub fn valid_trigger_node(id: &str) -> Node {
    trigger_node(id, Some("scenario-1"), &[Outcome::Approve])
}

pub fn create_case_node(id: &str, inbox_id: Option<&str>) -> Node {
    node(
        id,
        NodeData::CreateCaseAction {
            inbox_id: inbox_id.map(str::to_string),
        },
    )
}

pub fn add_to_case_node(id: &str, inbox_id: Option<&str>) -> Node {
    node(
        id,
        NodeData::AddToCaseIfPossibleAction {
            inbox_id: inbox_id.map(str::to_string),
        },
    )
}

pub fn edge(id: &str, source: &str, target: &str) -> Edge {
    Edge {
        id: id.into(),
        source: source.into(),
        target: target.into(),
        selected: false,
    }
}
