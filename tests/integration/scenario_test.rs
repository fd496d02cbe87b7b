//! End-to-end scenarios against the default configuration.

use studiohub::{AssetKind, AssetNode, TreeError, TreeErrorKind};

use crate::helpers::{abc, folder_chain, node, service};

#[test]
fn test_depth_and_path_of_nested_file() {
    let svc = service();
    let nodes = abc();

    assert_eq!(svc.depth_of(&nodes, "c").unwrap(), 2);
    assert_eq!(svc.path(&nodes, "c"), ["a", "b", "c"]);
}

#[test]
fn test_cascade_delete_root_removes_everything() {
    let svc = service();
    let outcome = svc.cascade_delete(&abc(), "a").unwrap();

    assert!(outcome.nodes.is_empty());
    assert_eq!(outcome.removed_count, 3);
}

#[test]
fn test_reparent_under_descendant_is_circular() {
    let svc = service();
    let check = svc.can_reparent(&abc(), "a", Some("c"));

    assert!(!check.valid);
    assert_eq!(check.error_kind, Some(TreeErrorKind::CircularReference));
}

#[test]
fn test_insert_file_under_nested_folder() {
    let svc = service();
    let new_file = AssetNode::file("edit-v2.mov").with_link("https://drive.example/edit");
    let new_id = new_file.id.clone();

    let nodes = svc.insert(&abc(), new_file, Some("b")).unwrap();
    let added = nodes.iter().find(|n| n.id == new_id).unwrap();

    assert_eq!(added.parent.as_ref().map(|p| p.as_str()), Some("b"));
    assert_eq!(svc.depth_of(&nodes, new_id.as_str()).unwrap(), 2);
}

#[test]
fn test_chain_of_ten_nesting_limit() {
    let svc = service();
    let nodes = folder_chain(10);

    assert!(!svc.can_nest_under(&nodes, Some("f9")).unwrap().valid);
    assert!(svc.can_nest_under(&nodes, Some("f8")).unwrap().valid);
}

#[test]
fn test_move_into_self_is_rejected() {
    let svc = service();
    let nodes = folder_chain(10);

    let check = svc.can_reparent(&nodes, "f2", Some("f2"));
    assert!(!check.valid);
    assert_eq!(check.error_kind, Some(TreeErrorKind::SelfParent));

    assert_eq!(
        svc.move_node(&nodes, "f2", Some("f2")),
        Err(TreeError::SelfParent("f2".into()))
    );
}

#[test]
fn test_project_lifecycle() {
    let svc = service();

    let nodes = Vec::new();
    let shots = AssetNode::folder("Shots").with_id("shots");
    let nodes = svc.insert(&nodes, shots, None).unwrap();
    let act1 = AssetNode::folder("Act 1").with_id("act1");
    let nodes = svc.insert(&nodes, act1, Some("shots")).unwrap();
    let plate = AssetNode::file("plate.exr").with_id("plate");
    let nodes = svc.insert(&nodes, plate, Some("act1")).unwrap();
    let refs = AssetNode::folder("References").with_id("refs");
    let nodes = svc.insert(&nodes, refs, None).unwrap();

    assert_eq!(svc.root_nodes(&nodes).len(), 2);
    assert!(svc.has_children(&nodes, "act1"));

    let nodes = svc.rename(&nodes, "act1", "Act One").unwrap();
    assert_eq!(svc.path(&nodes, "plate"), ["Shots", "Act One", "plate.exr"]);
    assert_eq!(
        svc.resolve_path(&nodes, &["Shots", "Act One", "plate.exr"])
            .map(|n| n.id.as_str()),
        Some("plate")
    );

    let nodes = svc.move_node(&nodes, "act1", Some("refs")).unwrap();
    assert_eq!(svc.path(&nodes, "plate"), ["References", "Act One", "plate.exr"]);
    assert_eq!(svc.descendant_count(&nodes, "shots"), 0);

    let options = svc.available_parents(&nodes, Some("act1"));
    let act = options.iter().find(|o| o.id == "act1").unwrap();
    assert!(act.disabled);
    assert_eq!(act.path, "References / Act One");

    let rows = svc.flatten(&svc.build_tree(&nodes));
    let order: Vec<_> = rows.iter().map(|r| (r.node.id.as_str(), r.depth)).collect();
    assert_eq!(order, [("shots", 0), ("refs", 0), ("act1", 1), ("plate", 2)]);

    let outcome = svc.cascade_delete(&nodes, "refs").unwrap();
    assert_eq!(outcome.removed_count, 3);
    assert_eq!(outcome.nodes.len(), 1);
    assert!(svc.validate(&outcome.nodes).is_ok());
}

#[test]
fn test_file_cannot_hold_children() {
    let svc = service();
    let nodes = abc();
    let extra = node("d", AssetKind::File, None);

    assert_eq!(
        svc.insert(&nodes, extra, Some("c")),
        Err(TreeError::ParentNotFolder("c".into()))
    );
    assert_eq!(
        svc.move_node(&nodes, "b", Some("c")).map_err(|e| e.kind()),
        Err(TreeErrorKind::CircularReference)
    );
}

#[test]
fn test_search_keeps_matching_branches() {
    let svc = service();
    let mut nodes = abc();
    nodes.push(node("loose", AssetKind::Folder, None));

    assert!(svc.any_descendant_matches(&nodes, "a", |n| n.name == "c"));
    let tree = svc.filter_tree(&nodes, |n| n.name.contains('c'));
    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0].node.id, "a");
}
