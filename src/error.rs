//! Boundary errors. Validation findings are data ([`crate::WorkflowError`]),
//! not errors; this type covers the JSON and persistence boundaries only.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to parse workflow document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("decision-to-case payload is enabled but carries no inbox id")]
    PayloadMissingInbox,
}
