//! End-to-end tests: canvas JSON in, step document out.
mod common;
use common::*;
use nagare::prelude::*;
use serde_json::json;

#[test]
fn test_canvas_flow_exports_to_step_document() {
    let store = CanvasFlow::from_json(sample_canvas_json())
        .unwrap()
        .into_graph()
        .unwrap();

    assert!(validate(&store).is_empty());

    let document = Exporter::new(&store).export();
    let value = serde_json::to_value(&document).unwrap();
    assert_eq!(
        value,
        json!({
            "steps": [
                {"id": "1", "label": "Begin", "type": "start", "next": "2"},
                {"id": "2", "label": "Approved?", "type": "decision",
                 "conditions": {"yes": "3", "no": "4"}},
                {"id": "3", "label": "Notify", "type": "action",
                 "description": "Send the approval email", "next": "5"},
                {"id": "4", "label": "Reject", "type": "action",
                 "description": "Return a rejection", "next": null}
            ]
        })
    );
}

#[test]
fn test_import_preserves_renderer_edge_ids_and_synthesizes_the_rest() {
    let store = CanvasFlow::from_json(sample_canvas_json())
        .unwrap()
        .into_graph()
        .unwrap();

    assert!(store.edge("e1").is_some());
    assert!(store.edge("2-3").is_some());
    assert!(store.edge("3-5").is_some());
}

#[test]
fn test_import_carries_node_payloads() {
    let store = CanvasFlow::from_json(sample_canvas_json())
        .unwrap()
        .into_graph()
        .unwrap();

    let decision = store.node("2").unwrap();
    assert_eq!(decision.kind, NodeKind::Decision);
    assert_eq!(decision.data.conditions, vec!["yes", "no"]);

    let function = store.node("3").unwrap();
    assert_eq!(
        function.data.json_config,
        Some(json!({"template": "approval"}))
    );
    let response = store.node("4").unwrap();
    assert_eq!(response.data.page_config, Some(json!({"page": "reject"})));
}

#[test]
fn test_import_rejects_duplicate_node_ids() {
    let flow = CanvasFlow::from_json(
        r#"{
            "nodes": [
                {"id": "1", "type": "start"},
                {"id": "1", "type": "end"}
            ],
            "edges": []
        }"#,
    )
    .unwrap();

    match flow.into_graph() {
        Err(ImportError::DuplicateNodeId(id)) => assert_eq!(id, "1"),
        other => panic!("expected DuplicateNodeId, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_import_rejects_malformed_json() {
    let result = CanvasFlow::from_json("{\"nodes\": [");
    assert!(matches!(result, Err(ImportError::JsonParseError(_))));
}

#[test]
fn test_imported_flow_supports_a_full_editing_session() {
    let store = CanvasFlow::from_json(sample_canvas_json())
        .unwrap()
        .into_graph()
        .unwrap();
    let mut editor = Editor::with_store(store);

    // Reroute the rejection branch through a new confirmation step
    let confirm_id = editor.store_mut().add_node(NodeKind::Process).id.clone();
    assert_eq!(confirm_id, "6");
    editor
        .store_mut()
        .update_node(
            &confirm_id,
            NodePatch {
                label: Some("Confirm rejection".to_string()),
                description: Some("Ask before rejecting".to_string()),
                ..NodePatch::default()
            },
        )
        .unwrap();

    editor.select_edge("2-4").unwrap();
    assert!(editor.delete_selected().unwrap());
    editor
        .store_mut()
        .connect("2", &confirm_id, Some("no".to_string()), None)
        .unwrap();
    editor
        .store_mut()
        .connect(&confirm_id, "4", None, None)
        .unwrap();

    assert!(validate(editor.store()).is_empty());

    let document = Exporter::new(editor.store())
        .with_order(ExportOrder::BreadthFirst)
        .export();
    let ids: Vec<&str> = document.steps.iter().map(|s| s.id.as_str()).collect();
    // End node "5" never appears; the new step slots in after the decision
    assert_eq!(ids, vec!["1", "2", "3", "6", "4"]);

    let value = serde_json::to_value(&document).unwrap();
    assert_eq!(value["steps"][1]["conditions"], json!({"yes": "3", "no": "6"}));
}
