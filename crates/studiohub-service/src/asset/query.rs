//! Read-only query primitives over a node collection.
//!
//! These never fail: unknown ids simply produce empty results.

use studiohub_entity::AssetNode;

/// Nodes without a parent, in collection order.
pub fn root_nodes(nodes: &[AssetNode]) -> Vec<&AssetNode> {
    nodes.iter().filter(|n| n.is_root()).collect()
}

/// Direct children of `parent_id`, in collection order.
pub fn children<'a>(nodes: &'a [AssetNode], parent_id: &str) -> Vec<&'a AssetNode> {
    nodes.iter().filter(|n| n.is_child_of(parent_id)).collect()
}

/// Whether `id` has at least one direct child.
pub fn has_children(nodes: &[AssetNode], id: &str) -> bool {
    nodes.iter().any(|n| n.is_child_of(id))
}
