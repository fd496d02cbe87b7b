//! Shared test helpers for integration tests.

use chrono::{TimeZone, Utc};

use studiohub::{AssetId, AssetKind, AssetNode, AssetTreeService, TreeConfig};

/// Build a node with a deterministic timestamp and a name equal to its id.
pub fn node(id: &str, kind: AssetKind, parent: Option<&str>) -> AssetNode {
    AssetNode {
        id: AssetId::from(id),
        name: id.to_string(),
        kind,
        parent: parent.map(AssetId::from),
        external_link: format!("https://drive.example/{id}"),
        previews: Vec::new(),
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    }
}

/// `a/` → `b/` → `c`.
pub fn abc() -> Vec<AssetNode> {
    vec![
        node("a", AssetKind::Folder, None),
        node("b", AssetKind::Folder, Some("a")),
        node("c", AssetKind::File, Some("b")),
    ]
}

/// Folders `f0` … `f{n-1}`, each nested in the previous one.
pub fn folder_chain(n: usize) -> Vec<AssetNode> {
    (0..n)
        .map(|i| {
            let parent = (i > 0).then(|| format!("f{}", i - 1));
            node(&format!("f{i}"), AssetKind::Folder, parent.as_deref())
        })
        .collect()
}

/// Service with the default depth limit of 10.
pub fn service() -> AssetTreeService {
    AssetTreeService::new(TreeConfig::default())
}
