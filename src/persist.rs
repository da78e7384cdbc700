//! Canonical workflow representation and its mapping to the server-side
//! scenario fields (`decisionToCase*`).

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::model::{Edge, Node, NodeData, Outcome, Position};

/// Which case action the workflow runs when a decision is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkflowType {
    #[serde(rename = "CREATE_CASE")]
    CreateCase,
    #[serde(rename = "ADD_TO_CASE_IF_POSSIBLE")]
    AddToCaseIfPossible,
}

/// Trigger half of a complete workflow. Fields are non-empty by
/// construction: only the validator produces these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidTrigger {
    pub scenario_id: String,
    pub outcomes: Vec<Outcome>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidAction {
    pub inbox_id: String,
}

/// A complete, persistable workflow: one decision-created trigger feeding
/// one terminal case action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidWorkflow {
    #[serde(rename = "type")]
    pub workflow_type: WorkflowType,
    pub trigger: ValidTrigger,
    pub action: ValidAction,
}

// =============================================================================
// SERVER PAYLOAD
// =============================================================================

/// Workflow type as stored on the scenario, including the disabled state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecisionToCaseWorkflowType {
    #[serde(rename = "DISABLED")]
    Disabled,
    #[serde(rename = "CREATE_CASE")]
    CreateCase,
    #[serde(rename = "ADD_TO_CASE_IF_POSSIBLE")]
    AddToCaseIfPossible,
}

impl From<WorkflowType> for DecisionToCaseWorkflowType {
    fn from(value: WorkflowType) -> Self {
        match value {
            WorkflowType::CreateCase => DecisionToCaseWorkflowType::CreateCase,
            WorkflowType::AddToCaseIfPossible => DecisionToCaseWorkflowType::AddToCaseIfPossible,
        }
    }
}

/// The scenario-update fields owned by this editor, as the server spells
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionToCasePayload {
    pub decision_to_case_workflow_type: DecisionToCaseWorkflowType,
    pub decision_to_case_inbox_id: Option<String>,
    pub decision_to_case_outcomes: Vec<Outcome>,
}

impl DecisionToCasePayload {
    pub const DISABLED: DecisionToCasePayload = DecisionToCasePayload {
        decision_to_case_workflow_type: DecisionToCaseWorkflowType::Disabled,
        decision_to_case_inbox_id: None,
        decision_to_case_outcomes: Vec::new(),
    };

    /// Rebuild the canonical workflow for the scenario this payload was
    /// read from. `Ok(None)` means the workflow is disabled.
    pub fn into_workflow(self, scenario_id: impl Into<String>) -> Result<Option<ValidWorkflow>, Error> {
        let workflow_type = match self.decision_to_case_workflow_type {
            DecisionToCaseWorkflowType::Disabled => return Ok(None),
            DecisionToCaseWorkflowType::CreateCase => WorkflowType::CreateCase,
            DecisionToCaseWorkflowType::AddToCaseIfPossible => WorkflowType::AddToCaseIfPossible,
        };
        let inbox_id = self
            .decision_to_case_inbox_id
            .filter(|id| !id.is_empty())
            .ok_or(Error::PayloadMissingInbox)?;

        Ok(Some(ValidWorkflow {
            workflow_type,
            trigger: ValidTrigger {
                scenario_id: scenario_id.into(),
                outcomes: self.decision_to_case_outcomes,
            },
            action: ValidAction { inbox_id },
        }))
    }
}

impl From<&ValidWorkflow> for DecisionToCasePayload {
    fn from(workflow: &ValidWorkflow) -> Self {
        DecisionToCasePayload {
            decision_to_case_workflow_type: workflow.workflow_type.into(),
            decision_to_case_inbox_id: Some(workflow.action.inbox_id.clone()),
            decision_to_case_outcomes: workflow.trigger.outcomes.clone(),
        }
    }
}

// =============================================================================
// HYDRATION
// =============================================================================

/// Rebuild the editable graph for a persisted workflow: one trigger node,
/// one action node, one connecting edge. Ids are freshly generated.
pub fn hydrate(workflow: &ValidWorkflow) -> (Vec<Node>, Vec<Edge>) {
    let trigger = Node::new(NodeData::DecisionCreatedTrigger {
        scenario_id: Some(workflow.trigger.scenario_id.clone()),
        outcomes: workflow.trigger.outcomes.clone(),
    });

    let action_data = match workflow.workflow_type {
        WorkflowType::CreateCase => NodeData::CreateCaseAction {
            inbox_id: Some(workflow.action.inbox_id.clone()),
        },
        WorkflowType::AddToCaseIfPossible => NodeData::AddToCaseIfPossibleAction {
            inbox_id: Some(workflow.action.inbox_id.clone()),
        },
    };
    let mut action = Node::new(action_data);
    action.position = Position { x: 0.0, y: 150.0 };

    let edge = Edge::new(trigger.id.clone(), action.id.clone());
    (vec![trigger, action], vec![edge])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workflow() -> ValidWorkflow {
        ValidWorkflow {
            workflow_type: WorkflowType::CreateCase,
            trigger: ValidTrigger {
                scenario_id: "scn-1".into(),
                outcomes: vec![Outcome::Decline, Outcome::Review],
            },
            action: ValidAction {
                inbox_id: "inbox-1".into(),
            },
        }
    }

    #[test]
    fn payload_round_trip() {
        let original = workflow();
        let payload = DecisionToCasePayload::from(&original);
        let restored = payload.into_workflow("scn-1").unwrap().unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn disabled_payload_yields_no_workflow() {
        assert_eq!(
            DecisionToCasePayload::DISABLED.into_workflow("scn-1").unwrap(),
            None
        );
    }

    #[test]
    fn enabled_payload_without_inbox_is_rejected() {
        let payload = DecisionToCasePayload {
            decision_to_case_workflow_type: DecisionToCaseWorkflowType::CreateCase,
            decision_to_case_inbox_id: None,
            decision_to_case_outcomes: vec![Outcome::Approve],
        };
        assert!(matches!(
            payload.into_workflow("scn-1"),
            Err(Error::PayloadMissingInbox)
        ));
    }

    #[test]
    fn payload_uses_server_field_names() {
        let json = serde_json::to_value(DecisionToCasePayload::from(&workflow())).unwrap();
        assert_eq!(json["decisionToCaseWorkflowType"], "CREATE_CASE");
        assert_eq!(json["decisionToCaseInboxId"], "inbox-1");
        assert_eq!(json["decisionToCaseOutcomes"][0], "decline");
    }

    #[test]
    fn hydrate_builds_one_trigger_one_action_one_edge() {
        let (nodes, edges) = hydrate(&workflow());
        assert_eq!(nodes.len(), 2);
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].source, nodes[0].id);
        assert_eq!(edges[0].target, nodes[1].id);
        assert!(matches!(
            nodes[0].data,
            NodeData::DecisionCreatedTrigger { .. }
        ));
        assert!(matches!(nodes[1].data, NodeData::CreateCaseAction { .. }));
    }
}
