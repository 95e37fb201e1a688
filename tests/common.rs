//! Common test utilities for building workflow graphs.
use nagare::prelude::*;

/// Creates a minimal two-step flow.
///
/// Shape: start("1") -> process("2"), where the process step carries a
/// description and no outgoing edge.
#[allow(dead_code)]
pub fn linear_store() -> GraphStore {
    let mut store = GraphStore::new();
    store.add_node(NodeKind::Start);
    store.add_node(NodeKind::Process);
    store
        .update_node(
            "2",
            NodePatch {
                label: Some("Fetch report".to_string()),
                description: Some("do X".to_string()),
                ..NodePatch::default()
            },
        )
        .unwrap();
    store.connect("1", "2", None, None).unwrap();
    store
}

/// Creates a branching flow.
///
/// Shape: decision("1") with two branches, "yes" -> process("2") and
/// "no" -> process("3").
#[allow(dead_code)]
pub fn decision_store() -> GraphStore {
    let mut store = GraphStore::new();
    store.add_node(NodeKind::Decision);
    store.add_node(NodeKind::Process);
    store.add_node(NodeKind::Process);
    store
        .connect("1", "2", Some("yes".to_string()), Some("Approved".to_string()))
        .unwrap();
    store.connect("1", "3", Some("no".to_string()), None).unwrap();
    store
}

/// Creates a three-node chain of process steps.
///
/// Shape: "1" -> "2" -> "3".
#[allow(dead_code)]
pub fn chain_store() -> GraphStore {
    let mut store = GraphStore::new();
    store.add_node(NodeKind::Process);
    store.add_node(NodeKind::Process);
    store.add_node(NodeKind::Process);
    store.connect("1", "2", None, None).unwrap();
    store.connect("2", "3", None, None).unwrap();
    store
}

/// A canvas flow document as a node-graph editor would persist it, with
/// camelCase field names and a renderer-assigned id on the first edge.
#[allow(dead_code)]
pub fn sample_canvas_json() -> &'static str {
    r#"{
        "nodes": [
            {"id": "1", "type": "start", "position": {"x": 80, "y": 120},
             "data": {"label": "Begin"}},
            {"id": "2", "type": "decision", "position": {"x": 300, "y": 120},
             "data": {"label": "Approved?", "conditions": ["yes", "no"]}},
            {"id": "3", "type": "function", "position": {"x": 520, "y": 120},
             "data": {"label": "Notify", "description": "Send the approval email",
                      "jsonConfig": {"template": "approval"}}},
            {"id": "4", "type": "response", "position": {"x": 520, "y": 320},
             "data": {"label": "Reject", "description": "Return a rejection",
                      "pageConfig": {"page": "reject"}}},
            {"id": "5", "type": "end", "position": {"x": 740, "y": 120},
             "data": {"label": "Done"}}
        ],
        "edges": [
            {"id": "e1", "source": "1", "target": "2", "sourceHandle": "right"},
            {"source": "2", "target": "3", "sourceHandle": "yes", "label": "Yes"},
            {"source": "2", "target": "4", "sourceHandle": "no"},
            {"source": "3", "target": "5"}
        ]
    }"#
}
