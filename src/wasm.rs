//! WASM entry points for browser use.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::checklist::{self, GlobalChecklist, NodeChecklist};
use crate::model::{Edge, Node};
use crate::persist::ValidWorkflow;
use crate::validate::{ValidationResult, WorkflowError, validate};

/// The `{nodes, edges}` document the editor frontend holds.
#[derive(Serialize, Deserialize)]
pub struct WorkflowDocument {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

/// Validate a workflow document JSON.
/// Returns `{status: "valid", value}` or `{status: "invalid", errors}`.
#[wasm_bindgen]
pub fn validate_workflow(json: &str) -> JsValue {
    let result = validate_workflow_inner(json);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn validate_workflow_inner(json: &str) -> ValidateDto {
    let document = match serde_json::from_str::<WorkflowDocument>(json) {
        Ok(d) => d,
        Err(e) => {
            return ValidateDto::ParseError {
                message: crate::error::Error::from(e).to_string(),
            };
        }
    };

    match validate(&document.nodes, &document.edges) {
        ValidationResult::Valid { value } => ValidateDto::Valid { value },
        ValidationResult::Invalid { errors } => ValidateDto::Invalid {
            errors: errors.iter().map(ErrorDto::from).collect(),
        },
    }
}

/// Validate a workflow document JSON and project the error list into the
/// checklist view-model in one call, for render loops.
#[wasm_bindgen]
pub fn workflow_checklist(json: &str) -> JsValue {
    let result = workflow_checklist_inner(json);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn workflow_checklist_inner(json: &str) -> ChecklistDto {
    let document = match serde_json::from_str::<WorkflowDocument>(json) {
        Ok(d) => d,
        Err(e) => {
            return ChecklistDto::ParseError {
                message: crate::error::Error::from(e).to_string(),
            };
        }
    };

    let result = validate(&document.nodes, &document.edges);
    let projected = checklist::project(result.errors());
    ChecklistDto::Checklist {
        is_valid: result.is_valid(),
        global: projected.global,
        nodes: projected.nodes,
    }
}

// ---------------------------------------------------------------------------
// DTOs for serialization to JS
// ---------------------------------------------------------------------------

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorDto {
    code: String,
    message: String,
    node_id: Option<String>,
}

impl From<&WorkflowError> for ErrorDto {
    fn from(e: &WorkflowError) -> Self {
        ErrorDto {
            code: e.code().to_string(),
            message: e.message().to_string(),
            node_id: e.node_id().map(str::to_string),
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "status")]
enum ValidateDto {
    #[serde(rename = "valid")]
    Valid { value: ValidWorkflow },
    #[serde(rename = "invalid")]
    Invalid { errors: Vec<ErrorDto> },
    #[serde(rename = "parseError")]
    ParseError { message: String },
}

#[derive(Serialize)]
#[serde(tag = "status")]
enum ChecklistDto {
    #[serde(rename = "checklist", rename_all = "camelCase")]
    Checklist {
        is_valid: bool,
        global: GlobalChecklist,
        nodes: HashMap<String, NodeChecklist>,
    },
    #[serde(rename = "parseError")]
    ParseError { message: String },
}
