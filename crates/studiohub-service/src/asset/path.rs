//! Ancestor chains and breadcrumb paths.

use studiohub_entity::AssetNode;

use super::index::AssetIndex;

/// Ancestors of `id` from the root down to its immediate parent.
///
/// The node itself is excluded. Unknown ids and roots yield an empty chain.
pub fn ancestor_chain<'a>(nodes: &'a [AssetNode], id: &str) -> Vec<&'a AssetNode> {
    let mut chain = AssetIndex::new(nodes).ancestors(id);
    chain.reverse();
    chain
}

/// Names from the root down to and including `id`, for breadcrumbs.
pub fn path(nodes: &[AssetNode], id: &str) -> Vec<String> {
    let index = AssetIndex::new(nodes);
    let Some(node) = index.get(id) else {
        return Vec::new();
    };

    let mut names: Vec<String> = index
        .ancestors(id)
        .into_iter()
        .rev()
        .map(|n| n.name.clone())
        .collect();
    names.push(node.name.clone());
    names
}

/// Find a node by walking `names` down from the roots.
///
/// Siblings with equal names resolve to the first one in collection order.
pub fn resolve_path<'a, S>(nodes: &'a [AssetNode], names: &[S]) -> Option<&'a AssetNode>
where
    S: AsRef<str>,
{
    let index = AssetIndex::new(nodes);
    let (first, rest) = names.split_first()?;

    let mut current = index.roots().find(|n| n.name == first.as_ref())?;
    for name in rest {
        current = index
            .children(current.id.as_str())
            .find(|n| n.name == name.as_ref())?;
    }
    Some(current)
}
