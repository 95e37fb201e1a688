//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the
//! nagare crate. Import this module to get access to the core
//! functionality without having to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use nagare::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! // Load a persisted canvas flow and rebuild the graph
//! let flow_json = std::fs::read_to_string("path/to/flow.json")?;
//! let store = CanvasFlow::from_json(&flow_json)?.into_graph()?;
//!
//! // Report semantic problems, then export the step document
//! for issue in validate(&store) {
//!     eprintln!("warning: {}", issue);
//! }
//! let document = Exporter::new(&store).export();
//! println!("{}", serde_json::to_string_pretty(&document)?);
//! # Ok(())
//! # }
//! ```

// Graph model and store
pub use crate::graph::{
    ConnectionSpec, Edge, GraphStore, Node, NodeData, NodeKind, NodePatch, Position,
    START_HANDLE, UpdateEffects,
};

// Editing session
pub use crate::editor::{Editor, Selection};

// Export transform
pub use crate::export::{ExportOrder, Exporter, Step, StepBody, StepKind, WorkflowDocument};

// Validation
pub use crate::validate::{ValidationIssue, validate};

// Canvas import
pub use crate::import::{CanvasEdge, CanvasFlow, CanvasNode, CanvasNodeData, IntoGraph};

// Error types
pub use crate::error::{GraphError, ImportError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
