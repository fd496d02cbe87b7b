//! Tree read-models for hierarchical display.

use serde::{Deserialize, Serialize};

use super::id::AssetId;
use super::model::AssetNode;

/// A node in a nested asset tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    /// The asset at this position.
    pub node: AssetNode,
    /// Child nodes, in collection order unless the caller sorted them.
    pub children: Vec<TreeNode>,
    /// Depth level (0 for roots).
    pub depth: usize,
}

impl TreeNode {
    /// Number of nodes in this subtree, including this one.
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(TreeNode::size).sum::<usize>()
    }

    /// Sort this subtree's children recursively with the given comparator.
    pub fn sort_by<F>(&mut self, compare: &mut F)
    where
        F: FnMut(&AssetNode, &AssetNode) -> std::cmp::Ordering,
    {
        self.children.sort_by(|a, b| compare(&a.node, &b.node));
        for child in &mut self.children {
            child.sort_by(compare);
        }
    }
}

/// A single row of a flattened tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatEntry {
    /// The asset.
    pub node: AssetNode,
    /// Depth level (0 for roots).
    pub depth: usize,
}

/// A folder that can be offered as a parent in a selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentOption {
    /// Folder ID.
    pub id: AssetId,
    /// Folder name.
    pub name: String,
    /// Breadcrumb path, e.g. `Shots / Act 1`.
    pub path: String,
    /// Depth level.
    pub depth: usize,
    /// Whether choosing this folder would be rejected.
    pub disabled: bool,
}
