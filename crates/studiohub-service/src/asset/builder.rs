//! Nested tree views over the flat collection.
//!
//! The builder neither filters nor sorts; children keep collection order.
//! Callers sort the input or the output (see [`TreeNode::sort_by`]).

use std::collections::HashSet;

use studiohub_entity::{AssetNode, FlatEntry, TreeNode};

use super::index::AssetIndex;

/// Build the full forest, starting at the root nodes.
pub fn build_tree(nodes: &[AssetNode]) -> Vec<TreeNode> {
    build_subtree(nodes, None, 0)
}

/// Build the trees hanging below `parent_id` (or the roots for `None`),
/// labelling the first level with `depth`.
///
/// Only folders are expanded.
pub fn build_subtree(nodes: &[AssetNode], parent_id: Option<&str>, depth: usize) -> Vec<TreeNode> {
    let index = AssetIndex::new(nodes);
    let mut visited = HashSet::new();
    if let Some(parent_id) = parent_id {
        visited.insert(parent_id);
    }
    let level: Vec<&AssetNode> = match parent_id {
        Some(parent_id) => index.children(parent_id).collect(),
        None => index.roots().collect(),
    };
    build_level(&index, level, depth, &mut visited)
}

fn build_level<'a>(
    index: &AssetIndex<'a>,
    level: Vec<&'a AssetNode>,
    depth: usize,
    visited: &mut HashSet<&'a str>,
) -> Vec<TreeNode> {
    let mut out = Vec::with_capacity(level.len());
    for node in level {
        if !visited.insert(node.id.as_str()) {
            continue;
        }
        let children = if node.is_folder() {
            let below: Vec<&AssetNode> = index.children(node.id.as_str()).collect();
            build_level(index, below, depth + 1, visited)
        } else {
            Vec::new()
        };
        out.push(TreeNode {
            node: node.clone(),
            children,
            depth,
        });
    }
    out
}

/// Flatten a tree back into rows, each parent followed by its children.
pub fn flatten(tree: &[TreeNode]) -> Vec<FlatEntry> {
    let mut rows = Vec::new();
    for item in tree {
        push_rows(item, &mut rows);
    }
    rows
}

fn push_rows(item: &TreeNode, rows: &mut Vec<FlatEntry>) {
    rows.push(FlatEntry {
        node: item.node.clone(),
        depth: item.depth,
    });
    for child in &item.children {
        push_rows(child, rows);
    }
}

/// Build the forest keeping only nodes that match `predicate` or have a
/// matching descendant, so every match stays reachable from its root.
pub fn filter_tree<F>(nodes: &[AssetNode], predicate: F) -> Vec<TreeNode>
where
    F: Fn(&AssetNode) -> bool,
{
    prune(build_tree(nodes), &predicate)
}

fn prune<F>(level: Vec<TreeNode>, predicate: &F) -> Vec<TreeNode>
where
    F: Fn(&AssetNode) -> bool,
{
    level
        .into_iter()
        .filter_map(|mut item| {
            item.children = prune(std::mem::take(&mut item.children), predicate);
            (predicate(&item.node) || !item.children.is_empty()).then_some(item)
        })
        .collect()
}
