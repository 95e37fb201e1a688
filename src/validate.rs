use crate::graph::{GraphStore, NodeKind};
use ahash::{AHashMap, AHashSet};
use itertools::Itertools;
use std::collections::VecDeque;
use std::fmt;

/// A semantic problem found in a graph.
///
/// Issues are advisory: the store accepts these graphs and the export
/// transform encodes them as-is, deferring judgment to the consuming
/// execution engine. Callers decide whether an issue blocks anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    MissingStartNode,

    MultipleStartNodes(usize),

    UnknownEndpoint { edge_id: String, node_id: String },

    UnlabeledBranch { node_id: String, edge_id: String },

    ParallelEdges { source: String, target: String },

    DuplicateEdgeId(String),

    UnreachableNode(String),
}

// `thiserror` cannot derive this enum: the `ParallelEdges.source` field
// name triggers its error-source inference, and `String` is not an
// `Error`. These impls reproduce what the derive would have generated.
impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingStartNode => write!(f, "Flow has no start node"),
            Self::MultipleStartNodes(n) => {
                write!(f, "Flow has {n} start nodes, expected exactly one")
            }
            Self::UnknownEndpoint { edge_id, node_id } => write!(
                f,
                "Edge '{edge_id}' references node '{node_id}', which does not exist"
            ),
            Self::UnlabeledBranch { node_id, edge_id } => write!(
                f,
                "Decision node '{node_id}' has a branch edge '{edge_id}' without a source handle"
            ),
            Self::ParallelEdges { source, target } => write!(
                f,
                "Parallel edges from '{source}' to '{target}' share the same source handle"
            ),
            Self::DuplicateEdgeId(id) => write!(f, "Edge id '{id}' is not unique"),
            Self::UnreachableNode(id) => {
                write!(f, "Node '{id}' is not reachable from a start node")
            }
        }
    }
}

impl std::error::Error for ValidationIssue {}

/// Checks a graph for the semantic problems the store deliberately does
/// not reject at mutation time.
pub fn validate(store: &GraphStore) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    let start_count = store
        .nodes()
        .iter()
        .filter(|n| n.kind == NodeKind::Start)
        .count();
    match start_count {
        0 => issues.push(ValidationIssue::MissingStartNode),
        1 => {}
        n => issues.push(ValidationIssue::MultipleStartNodes(n)),
    }

    let kinds: AHashMap<&str, &NodeKind> = store
        .nodes()
        .iter()
        .map(|n| (n.id.as_str(), &n.kind))
        .collect();

    for edge in store.edges() {
        for endpoint in [&edge.source, &edge.target] {
            if !kinds.contains_key(endpoint.as_str()) {
                issues.push(ValidationIssue::UnknownEndpoint {
                    edge_id: edge.id.clone(),
                    node_id: endpoint.clone(),
                });
            }
        }
        if edge.source_handle.is_none()
            && kinds
                .get(edge.source.as_str())
                .is_some_and(|kind| **kind == NodeKind::Decision)
        {
            issues.push(ValidationIssue::UnlabeledBranch {
                node_id: edge.source.clone(),
                edge_id: edge.id.clone(),
            });
        }
    }

    for (source, target, _) in store
        .edges()
        .iter()
        .map(|e| (e.source.as_str(), e.target.as_str(), e.source_handle.as_deref()))
        .duplicates()
    {
        issues.push(ValidationIssue::ParallelEdges {
            source: source.to_string(),
            target: target.to_string(),
        });
    }

    for id in store.edges().iter().map(|e| e.id.as_str()).duplicates() {
        issues.push(ValidationIssue::DuplicateEdgeId(id.to_string()));
    }

    // Reachability is only meaningful once a start node exists.
    if start_count > 0 {
        let mut queue: VecDeque<&str> = store
            .nodes()
            .iter()
            .filter(|n| n.kind == NodeKind::Start)
            .map(|n| n.id.as_str())
            .collect();
        let mut visited: AHashSet<&str> = queue.iter().copied().collect();
        while let Some(id) = queue.pop_front() {
            for edge in store.outgoing(id) {
                if visited.insert(edge.target.as_str()) {
                    queue.push_back(edge.target.as_str());
                }
            }
        }
        for node in store.nodes() {
            if !visited.contains(node.id.as_str()) {
                issues.push(ValidationIssue::UnreachableNode(node.id.clone()));
            }
        }
    }

    issues
}
