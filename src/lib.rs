//! # Nagare - Workflow Graph Modeling and Export Engine
//!
//! **Nagare** is the framework-agnostic core of a node-based workflow
//! editor: it owns the graph of typed steps and directed transitions, the
//! mutation operations a canvas UI drives, the single-selection state of
//! an editing session, a semantic validation pass, and the pure transform
//! that projects the graph into a declarative step-list document for an
//! external workflow-execution engine.
//!
//! ## Core Workflow
//!
//! The engine renders nothing itself. A rendering surface (any node-graph
//! canvas) forwards its gesture callbacks into an [`editor::Editor`], and
//! the engine keeps the canonical state:
//!
//! 1.  **Edit**: clicks, drags and connects become calls on the
//!     [`graph::GraphStore`] mutation operations; node and edge clicks
//!     drive the exclusive [`editor::Selection`].
//! 2.  **Validate**: [`validate::validate`] reports semantic problems
//!     (missing start node, dangling edges, unlabeled decision branches)
//!     without ever blocking the session.
//! 3.  **Export**: [`export::Exporter`] projects the graph into a
//!     [`export::WorkflowDocument`], the JSON contract of the downstream
//!     execution engine.
//!
//! Persisted flows from a canvas editor re-enter the engine through
//! [`import::CanvasFlow`], or any custom format via the
//! [`import::IntoGraph`] trait.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nagare::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let mut editor = Editor::new();
//!
//!     // Build a two-step flow the way a canvas toolbar would
//!     let start_id = editor.store_mut().add_node(NodeKind::Start).id.clone();
//!     let step_id = editor.store_mut().add_node(NodeKind::Process).id.clone();
//!     editor.store_mut().update_node(
//!         &step_id,
//!         NodePatch {
//!             label: Some("Fetch report".to_string()),
//!             description: Some("Pull the daily report".to_string()),
//!             ..NodePatch::default()
//!         },
//!     )?;
//!     editor.store_mut().connect(&start_id, &step_id, None, None)?;
//!
//!     // Surface semantic problems before handing the flow downstream
//!     for issue in validate(editor.store()) {
//!         eprintln!("warning: {}", issue);
//!     }
//!
//!     // Project the graph into the execution engine's step document
//!     let document = Exporter::new(editor.store())
//!         .with_order(ExportOrder::BreadthFirst)
//!         .export();
//!     println!("{}", serde_json::to_string_pretty(&document)?);
//!
//!     Ok(())
//! }
//! ```

pub mod editor;
pub mod error;
pub mod export;
pub mod graph;
pub mod import;
pub mod prelude;
pub mod validate;
