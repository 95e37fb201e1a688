use crate::error::ImportError;
use crate::graph::{Edge, GraphStore, Node, NodeData, NodeKind, Position};
use ahash::AHashSet;
use serde::Deserialize;

/// Node payload as the canvas editor serializes it. All fields are
/// optional; anything absent falls back to the store's defaults.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct CanvasNodeData {
    pub label: Option<String>,
    pub description: Option<String>,
    pub conditions: Option<Vec<String>>,
    #[serde(alias = "jsonConfig")]
    pub json_config: Option<serde_json::Value>,
    #[serde(alias = "pageConfig")]
    pub page_config: Option<serde_json::Value>,
}

/// A node as the canvas editor serializes it.
#[derive(Debug, Deserialize, Clone)]
pub struct CanvasNode {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub data: CanvasNodeData,
}

/// An edge as the canvas editor serializes it. The renderer may assign
/// its own edge id on manual connect; when absent one is synthesized from
/// the endpoints.
#[derive(Debug, Deserialize, Clone)]
pub struct CanvasEdge {
    #[serde(default)]
    pub id: Option<String>,
    pub source: String,
    pub target: String,
    #[serde(default, alias = "sourceHandle")]
    pub source_handle: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
}

/// Complete canvas flow document: the JSON a node-graph editor persists.
#[derive(Debug, Deserialize, Clone)]
pub struct CanvasFlow {
    pub nodes: Vec<CanvasNode>,
    pub edges: Vec<CanvasEdge>,
}

impl CanvasFlow {
    /// Parses a canvas flow from its JSON text.
    pub fn from_json(json: &str) -> Result<Self, ImportError> {
        serde_json::from_str(json).map_err(|e| ImportError::JsonParseError(e.to_string()))
    }
}

/// A trait for custom editor formats that can be converted into a
/// `GraphStore`.
///
/// This is the extension point that keeps the engine format-agnostic: by
/// implementing it on your own flow structs you can feed any editor's
/// persistence format through the validation and export pipeline.
pub trait IntoGraph {
    /// Consumes the object and converts it into a graph store.
    fn into_graph(self) -> Result<GraphStore, ImportError>;
}

impl IntoGraph for CanvasFlow {
    fn into_graph(self) -> Result<GraphStore, ImportError> {
        let mut seen = AHashSet::new();
        for node in &self.nodes {
            if !seen.insert(node.id.as_str()) {
                return Err(ImportError::DuplicateNodeId(node.id.clone()));
            }
        }

        let nodes = self
            .nodes
            .into_iter()
            .map(|raw| {
                let label = raw
                    .data
                    .label
                    .unwrap_or_else(|| raw.kind.default_label().to_string());
                Node {
                    data: NodeData {
                        label,
                        description: raw.data.description.unwrap_or_default(),
                        conditions: raw.data.conditions.unwrap_or_default(),
                        json_config: raw.data.json_config,
                        page_config: raw.data.page_config,
                    },
                    id: raw.id,
                    kind: raw.kind,
                    position: raw.position,
                }
            })
            .collect();

        let edges = self
            .edges
            .into_iter()
            .map(|raw| Edge {
                id: raw
                    .id
                    .unwrap_or_else(|| format!("{}-{}", raw.source, raw.target)),
                source: raw.source,
                target: raw.target,
                source_handle: raw.source_handle,
                label: raw.label,
            })
            .collect();

        Ok(GraphStore::from_parts(nodes, edges))
    }
}
