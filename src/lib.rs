pub mod checklist;
pub mod error;
pub mod model;
pub mod persist;
pub mod store;
pub mod validate;
pub mod wasm;

pub use model::{Edge, Node, NodeData, NodeKind, Outcome};
pub use persist::ValidWorkflow;
pub use store::GraphStore;
pub use validate::{ValidationResult, WorkflowError, validate};
