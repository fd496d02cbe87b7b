//! Node fixtures shared by the engine's unit tests.

use chrono::{TimeZone, Utc};
use studiohub_entity::{AssetId, AssetKind, AssetNode};

fn node(id: &str, kind: AssetKind, parent: Option<&str>) -> AssetNode {
    AssetNode {
        id: id.into(),
        name: id.to_string(),
        kind,
        parent: parent.map(AssetId::from),
        external_link: format!("https://drive.example/{id}"),
        previews: Vec::new(),
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    }
}

pub fn folder(id: &str, parent: Option<&str>) -> AssetNode {
    node(id, AssetKind::Folder, parent)
}

pub fn file(id: &str, parent: Option<&str>) -> AssetNode {
    node(id, AssetKind::File, parent)
}

/// `a/` → `b/` → `c`.
pub fn scenario() -> Vec<AssetNode> {
    vec![
        folder("a", None),
        folder("b", Some("a")),
        file("c", Some("b")),
    ]
}

/// Folders `f0` … `f{n-1}`, each nested in the previous one.
pub fn chain(n: usize) -> Vec<AssetNode> {
    (0..n)
        .map(|i| {
            let id = format!("f{i}");
            let parent = (i > 0).then(|| format!("f{}", i - 1));
            folder(&id, parent.as_deref())
        })
        .collect()
}
