use crate::graph::{GraphStore, Node, NodeKind};
use ahash::AHashSet;
use serde::Serialize;
use std::collections::{BTreeMap, VecDeque};

mod order;

pub use order::ExportOrder;

/// Key under which a decision branch with no source handle is exported,
/// matching the JSON artifact the legacy editor produced. The validation
/// pass flags these branches.
const MISSING_HANDLE_KEY: &str = "undefined";

/// External vocabulary of step types understood by the execution engine.
/// The process, function and response node kinds all collapse to `Action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    Start,
    Action,
    Decision,
    Unknown,
}

/// One entry of the exported step list.
#[derive(Debug, Clone, Serialize)]
pub struct Step {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: StepKind,
    #[serde(flatten)]
    pub body: StepBody,
}

/// Kind-specific step payload. Decision steps carry a branch map instead
/// of a `next` field; every other step carries `next`, explicitly `null`
/// when the node has no outgoing edge. Branch keys are sorted so the
/// emitted JSON is stable across runs.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum StepBody {
    Decision { conditions: BTreeMap<String, String> },
    Action { description: String, next: Option<String> },
    Transition { next: Option<String> },
}

/// The declarative document handed to the workflow-execution engine.
#[derive(Debug, Clone, Serialize)]
pub struct WorkflowDocument {
    pub steps: Vec<Step>,
}

/// Pure projection of a `GraphStore` into a `WorkflowDocument`.
///
/// End nodes emit no step: termination is represented by the absence of a
/// transition target, not by a step of its own.
pub struct Exporter<'a> {
    store: &'a GraphStore,
    order: ExportOrder,
}

impl<'a> Exporter<'a> {
    pub fn new(store: &'a GraphStore) -> Self {
        Self {
            store,
            order: ExportOrder::default(),
        }
    }

    pub fn with_order(mut self, order: ExportOrder) -> Self {
        self.order = order;
        self
    }

    /// Projects the graph into its step-list document. Never fails and
    /// does not mutate the graph: malformed graphs are encoded as-is and
    /// left to `validate` and the downstream engine.
    pub fn export(&self) -> WorkflowDocument {
        let steps = self
            .ordered_nodes()
            .into_iter()
            .filter(|n| n.kind != NodeKind::End)
            .map(|n| self.emit_step(n))
            .collect();
        WorkflowDocument { steps }
    }

    fn ordered_nodes(&self) -> Vec<&'a Node> {
        match self.order {
            ExportOrder::Insertion => self.store.nodes().iter().collect(),
            ExportOrder::BreadthFirst => self.breadth_first(),
        }
    }

    fn breadth_first(&self) -> Vec<&'a Node> {
        let store = self.store;
        let mut queue: VecDeque<&str> = store
            .nodes()
            .iter()
            .filter(|n| n.kind == NodeKind::Start)
            .map(|n| n.id.as_str())
            .collect();
        let mut visited: AHashSet<&str> = queue.iter().copied().collect();
        let mut ordered = Vec::new();

        while let Some(id) = queue.pop_front() {
            if let Some(node) = store.node(id) {
                ordered.push(node);
            }
            for edge in store.outgoing(id) {
                if visited.insert(edge.target.as_str()) {
                    queue.push_back(edge.target.as_str());
                }
            }
        }

        // Nodes outside the reachable subgraph still export as steps.
        for node in store.nodes() {
            if !visited.contains(node.id.as_str()) {
                ordered.push(node);
            }
        }
        ordered
    }

    fn emit_step(&self, node: &Node) -> Step {
        let kind = match &node.kind {
            NodeKind::Start => StepKind::Start,
            NodeKind::Process | NodeKind::Function | NodeKind::Response => StepKind::Action,
            NodeKind::Decision => StepKind::Decision,
            NodeKind::End | NodeKind::Other(_) => StepKind::Unknown,
        };

        let body = match kind {
            StepKind::Decision => StepBody::Decision {
                conditions: self
                    .store
                    .outgoing(&node.id)
                    .map(|e| {
                        (
                            e.source_handle
                                .clone()
                                .unwrap_or_else(|| MISSING_HANDLE_KEY.to_string()),
                            e.target.clone(),
                        )
                    })
                    .collect(),
            },
            StepKind::Action => StepBody::Action {
                description: node.data.description.clone(),
                next: self.first_target(&node.id),
            },
            StepKind::Start | StepKind::Unknown => StepBody::Transition {
                next: self.first_target(&node.id),
            },
        };

        Step {
            id: node.id.clone(),
            label: node.data.label.clone(),
            kind,
            body,
        }
    }

    fn first_target(&self, id: &str) -> Option<String> {
        self.store.outgoing(id).next().map(|e| e.target.clone())
    }
}
