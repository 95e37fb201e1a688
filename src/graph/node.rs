use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of step kinds a workflow node can have.
///
/// Foreign type tags coming from an external editor are preserved in
/// `Other` so a round trip through the store does not lose them; the
/// export transform maps them to the `"unknown"` step type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Start,
    Process,
    Decision,
    Function,
    Response,
    End,
    #[serde(untagged)]
    Other(String),
}

impl NodeKind {
    /// Default display label seeded by `GraphStore::add_node`.
    pub fn default_label(&self) -> &str {
        match self {
            NodeKind::Start => "Start",
            NodeKind::Process => "Process",
            NodeKind::Decision => "Decision",
            NodeKind::Function => "Function",
            NodeKind::Response => "Response",
            NodeKind::End => "End",
            NodeKind::Other(tag) => tag,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Start => write!(f, "start"),
            NodeKind::Process => write!(f, "process"),
            NodeKind::Decision => write!(f, "decision"),
            NodeKind::Function => write!(f, "function"),
            NodeKind::Response => write!(f, "response"),
            NodeKind::End => write!(f, "end"),
            NodeKind::Other(tag) => write!(f, "{}", tag),
        }
    }
}

/// Canvas coordinate of a node. Layout only; nothing in the model depends
/// on positions being distinct.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// The editable payload of a node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeData {
    pub label: String,
    pub description: String,
    /// Branch descriptions for decision nodes; empty for all other kinds.
    pub conditions: Vec<String>,
    pub json_config: Option<serde_json::Value>,
    /// Auxiliary page configuration forwarded to the embedding UI.
    pub page_config: Option<serde_json::Value>,
}

/// A typed vertex in the workflow graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: String,
    pub kind: NodeKind,
    pub position: Position,
    pub data: NodeData,
}

/// A partial update to a node's `data`, applied by
/// `GraphStore::update_node` as a shallow merge: only fields that are
/// `Some` overwrite the current value.
#[derive(Debug, Clone, Default)]
pub struct NodePatch {
    pub label: Option<String>,
    pub description: Option<String>,
    pub conditions: Option<Vec<String>>,
    pub json_config: Option<serde_json::Value>,
    pub page_config: Option<serde_json::Value>,
    /// When present, a declarative replacement of ALL edges leaving the
    /// node: existing outgoing edges are dropped and one edge is created
    /// per descriptor.
    pub connections: Option<Vec<ConnectionSpec>>,
}

/// Outgoing-edge descriptor used by `NodePatch::connections`.
#[derive(Debug, Clone)]
pub struct ConnectionSpec {
    pub target: String,
    pub label: Option<String>,
}
