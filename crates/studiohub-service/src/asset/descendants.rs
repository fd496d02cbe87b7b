//! Transitive descendant collection.

use studiohub_entity::AssetNode;

use super::index::AssetIndex;

/// All nodes below `id` in the visible hierarchy, in pre-order.
///
/// Only folders are expanded; a file contributes itself but none of the
/// nodes that (incorrectly) point at it.
pub fn descendants<'a>(nodes: &'a [AssetNode], id: &str) -> Vec<&'a AssetNode> {
    AssetIndex::new(nodes).subtree(id, false)
}

/// Number of nodes below `id` in the visible hierarchy.
pub fn descendant_count(nodes: &[AssetNode], id: &str) -> usize {
    AssetIndex::new(nodes).subtree(id, false).len()
}

/// Whether any node below `id` satisfies `predicate`.
///
/// The predicate stays with the caller, e.g. a search box deciding whether
/// a collapsed folder should stay visible.
pub fn any_descendant_matches<F>(nodes: &[AssetNode], id: &str, predicate: F) -> bool
where
    F: Fn(&AssetNode) -> bool,
{
    AssetIndex::new(nodes)
        .subtree(id, false)
        .into_iter()
        .any(predicate)
}
