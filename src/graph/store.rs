use super::edge::Edge;
use super::node::{ConnectionSpec, Node, NodeData, NodeKind, NodePatch, Position};
use crate::error::GraphError;

/// Horizontal spacing between successively added nodes.
const NODE_SPACING_X: f64 = 220.0;
/// X coordinate of the first node added to an empty graph.
const NODE_BASE_X: f64 = 80.0;
/// Fixed height at which newly added nodes are placed.
const NODE_BASE_Y: f64 = 120.0;

/// Canonical handle for edges leaving a start node.
pub const START_HANDLE: &str = "right";

/// In-memory store for a workflow graph: the canonical node and edge lists
/// plus the mutation operations a canvas UI drives.
///
/// The store owns its state exclusively and every operation runs to
/// completion synchronously, so it can back any single-threaded editing
/// session regardless of the rendering framework on top.
#[derive(Debug, Clone)]
pub struct GraphStore {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    next_node_id: u64,
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphStore {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            next_node_id: 1,
        }
    }

    /// Rebuilds a store from previously materialized nodes and edges, e.g.
    /// a deserialized canvas document. The id counter resumes above the
    /// highest numeric node id so later `add_node` calls stay unique.
    pub fn from_parts(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        let next_node_id = nodes
            .iter()
            .filter_map(|n| n.id.parse::<u64>().ok())
            .max()
            .map_or(1, |max| max + 1);
        Self {
            nodes,
            edges,
            next_node_id,
        }
    }

    /// All nodes, in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All edges, in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Looks up a node by id.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Looks up an edge by id. Parallel edges can share an id; the first
    /// match in insertion order wins.
    pub fn edge(&self, id: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == id)
    }

    /// Iterator over the edges leaving `id`, in insertion order.
    pub fn outgoing<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Edge> {
        self.edges.iter().filter(move |e| e.source == id)
    }

    /// Appends a new node of the given kind. Infallible: the id is the
    /// next monotonic number, the position is one spacing to the right of
    /// the most recently added node, and `data` is seeded with
    /// kind-appropriate defaults (decision nodes get one empty branch
    /// slot).
    pub fn add_node(&mut self, kind: NodeKind) -> &Node {
        let id = self.next_node_id.to_string();
        self.next_node_id += 1;

        let position = match self.nodes.last() {
            Some(last) => Position {
                x: last.position.x + NODE_SPACING_X,
                y: NODE_BASE_Y,
            },
            None => Position {
                x: NODE_BASE_X,
                y: NODE_BASE_Y,
            },
        };

        let data = NodeData {
            label: kind.default_label().to_string(),
            conditions: if kind == NodeKind::Decision {
                vec![String::new()]
            } else {
                Vec::new()
            },
            ..NodeData::default()
        };

        let index = self.nodes.len();
        self.nodes.push(Node {
            id,
            kind,
            position,
            data,
        });
        &self.nodes[index]
    }

    /// Merges `patch` into the node's `data`. A `connections` entry in the
    /// patch declaratively replaces every outgoing edge of the node. A
    /// `page_config` entry is additionally surfaced in the returned
    /// effects so the caller can notify the auxiliary page viewer.
    pub fn update_node(&mut self, id: &str, patch: NodePatch) -> Result<UpdateEffects, GraphError> {
        let index = self
            .nodes
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| GraphError::UnknownNode(id.to_string()))?;

        if let Some(connections) = patch.connections {
            self.replace_outgoing(id, connections);
        }

        let mut effects = UpdateEffects::default();
        let node = &mut self.nodes[index];
        if let Some(label) = patch.label {
            node.data.label = label;
        }
        if let Some(description) = patch.description {
            node.data.description = description;
        }
        if let Some(conditions) = patch.conditions {
            node.data.conditions = conditions;
        }
        if let Some(json_config) = patch.json_config {
            node.data.json_config = Some(json_config);
        }
        if let Some(page_config) = patch.page_config {
            effects.page_config = Some(page_config.clone());
            node.data.page_config = Some(page_config);
        }
        Ok(effects)
    }

    /// Removes the node and every edge where it is source or target.
    pub fn delete_node(&mut self, id: &str) -> Result<(), GraphError> {
        let before = self.nodes.len();
        self.nodes.retain(|n| n.id != id);
        if self.nodes.len() == before {
            return Err(GraphError::UnknownNode(id.to_string()));
        }
        self.edges.retain(|e| e.source != id && e.target != id);
        Ok(())
    }

    /// Creates an edge from `source` to `target`. When the source node is
    /// a start node the handle is forced to `START_HANDLE` regardless of
    /// the request. Parallel edges between the same endpoints are allowed;
    /// the validation pass reports them.
    pub fn connect(
        &mut self,
        source: &str,
        target: &str,
        source_handle: Option<String>,
        label: Option<String>,
    ) -> Result<&Edge, GraphError> {
        let source_kind = self
            .node(source)
            .map(|n| n.kind.clone())
            .ok_or_else(|| GraphError::UnknownNode(source.to_string()))?;
        if self.node(target).is_none() {
            return Err(GraphError::UnknownNode(target.to_string()));
        }

        let source_handle = if source_kind == NodeKind::Start {
            Some(START_HANDLE.to_string())
        } else {
            source_handle
        };

        let index = self.edges.len();
        self.edges.push(Edge {
            id: format!("{}-{}", source, target),
            source: source.to_string(),
            target: target.to_string(),
            source_handle,
            label,
        });
        Ok(&self.edges[index])
    }

    /// Removes a single edge by id. No cascade. When parallel edges share
    /// an id only the first match is removed.
    pub fn delete_edge(&mut self, id: &str) -> Result<(), GraphError> {
        match self.edges.iter().position(|e| e.id == id) {
            Some(index) => {
                self.edges.remove(index);
                Ok(())
            }
            None => Err(GraphError::UnknownEdge(id.to_string())),
        }
    }

    fn replace_outgoing(&mut self, id: &str, connections: Vec<ConnectionSpec>) {
        self.edges.retain(|e| e.source != id);
        for spec in connections {
            self.edges.push(Edge {
                id: format!("{}-{}", id, spec.target),
                source: id.to_string(),
                target: spec.target,
                source_handle: None,
                label: spec.label,
            });
        }
    }
}

/// Side effects of `update_node` the caller is expected to forward: a
/// changed auxiliary page configuration for the embedding UI to display.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateEffects {
    pub page_config: Option<serde_json::Value>,
}
