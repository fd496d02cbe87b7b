//! Tests for the JSON shape stored inside project documents.

use serde_json::json;

use studiohub::{AppError, AssetRecord, ErrorKind, TreeError};

use crate::helpers::service;

fn legacy_document() -> serde_json::Value {
    json!([
        {
            "id": "a",
            "name": "Dailies",
            "kind": "folder",
            "externalLink": "https://drive.example/a",
            "previews": [{ "url": "https://cdn.example/a.png" }],
            "createdAt": "2023-05-01T10:00:00Z"
        },
        {
            "id": "b",
            "name": "day-01.mov",
            "kind": "file",
            "parent": "a",
            "externalLink": "https://drive.example/b",
            "previews": [],
            "createdAt": "2023-05-02T10:00:00Z"
        },
        {
            "id": "c",
            "name": "Notes",
            "kind": "folder",
            "parent": null,
            "externalLink": "",
            "previews": [],
            "createdAt": "2023-05-03T10:00:00Z"
        }
    ])
}

#[test]
fn test_ingest_legacy_document() {
    let records: Vec<AssetRecord> = serde_json::from_value(legacy_document()).unwrap();
    assert!(records[0].is_legacy());

    let nodes = service().ingest(records).unwrap();
    assert_eq!(nodes.len(), 3);
    assert!(nodes[0].is_root());
    assert!(nodes[2].is_root());
    assert_eq!(nodes[0].previews.len(), 1);
}

#[test]
fn test_nodes_serialize_with_explicit_null_parent() {
    let records: Vec<AssetRecord> = serde_json::from_value(legacy_document()).unwrap();
    let nodes = service().ingest(records).unwrap();

    let out = serde_json::to_value(&nodes).unwrap();
    assert!(out[0]["parent"].is_null());
    assert_eq!(out[1]["parent"], "a");
    assert_eq!(out[0]["previews"][0]["url"], "https://cdn.example/a.png");
}

#[test]
fn test_tree_errors_map_to_app_errors() {
    let svc = service();
    let records: Vec<AssetRecord> = serde_json::from_value(legacy_document()).unwrap();
    let nodes = svc.ingest(records).unwrap();

    let err: AppError = svc.cascade_delete(&nodes, "missing").unwrap_err().into();
    assert_eq!(err.kind, ErrorKind::NotFound);

    let err: AppError = svc
        .move_node(&nodes, "a", Some("a"))
        .unwrap_err()
        .into();
    assert_eq!(err.kind, ErrorKind::Validation);

    let tag = serde_json::to_value(TreeError::SelfParent("a".into()).kind()).unwrap();
    assert_eq!(tag, "SelfParent");
}
