//! Hydration and persistence-boundary round-trips.

#[allow(dead_code)]
mod helpers;

use caseflow::model::Outcome;
use caseflow::persist::{
    DecisionToCasePayload, ValidAction, ValidTrigger, ValidWorkflow, WorkflowType,
};
use caseflow::store::GraphStore;

fn persisted_workflow(workflow_type: WorkflowType) -> ValidWorkflow {
    ValidWorkflow {
        workflow_type,
        trigger: ValidTrigger {
            scenario_id: "scenario-1".into(),
            outcomes: vec![Outcome::Decline, Outcome::BlockAndReview],
        },
        action: ValidAction {
            inbox_id: "inbox-1".into(),
        },
    }
}

#[test]
fn hydrated_graph_validates_back_to_the_same_workflow() {
    for workflow_type in [WorkflowType::CreateCase, WorkflowType::AddToCaseIfPossible] {
        let original = persisted_workflow(workflow_type);
        let store = GraphStore::hydrate(&original);

        assert_eq!(store.nodes().len(), 2);
        assert_eq!(store.edges().len(), 1);
        assert!(store.selected_nodes().is_empty());

        let result = store.validate();
        assert_eq!(
            result.value(),
            Some(&original),
            "hydrate/validate should round-trip for {:?}",
            workflow_type
        );
    }
}

#[test]
fn hydrated_graphs_get_fresh_ids() {
    let original = persisted_workflow(WorkflowType::CreateCase);
    let a = GraphStore::hydrate(&original);
    let b = GraphStore::hydrate(&original);
    assert_ne!(a.nodes()[0].id, b.nodes()[0].id);
    assert_ne!(a.edges()[0].id, b.edges()[0].id);
}

#[test]
fn payload_round_trips_through_the_server_shape() {
    let original = persisted_workflow(WorkflowType::AddToCaseIfPossible);
    let payload = DecisionToCasePayload::from(&original);

    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json["decisionToCaseWorkflowType"], "ADD_TO_CASE_IF_POSSIBLE");
    assert_eq!(json["decisionToCaseInboxId"], "inbox-1");
    assert_eq!(
        json["decisionToCaseOutcomes"],
        serde_json::json!(["decline", "block_and_review"])
    );

    let restored: DecisionToCasePayload = serde_json::from_value(json).unwrap();
    assert_eq!(
        restored.into_workflow("scenario-1").unwrap(),
        Some(original)
    );
}

#[test]
fn disabled_payload_serializes_and_yields_no_workflow() {
    let json = serde_json::to_value(DecisionToCasePayload::DISABLED).unwrap();
    assert_eq!(json["decisionToCaseWorkflowType"], "DISABLED");

    let restored: DecisionToCasePayload = serde_json::from_value(json).unwrap();
    assert_eq!(restored.into_workflow("scenario-1").unwrap(), None);
}

#[test]
fn valid_workflow_wire_shape() {
    let json = serde_json::to_value(persisted_workflow(WorkflowType::CreateCase)).unwrap();
    assert_eq!(json["type"], "CREATE_CASE");
    assert_eq!(json["trigger"]["scenarioId"], "scenario-1");
    assert_eq!(json["action"]["inboxId"], "inbox-1");
}
