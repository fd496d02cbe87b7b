//! Configured entry point to the asset tree engine.

use studiohub_core::config::TreeConfig;
use studiohub_entity::{AssetNode, AssetRecord, FlatEntry, ParentOption, TreeNode};

use super::cycle::ReparentCheck;
use super::depth::NestCheck;
use super::error::TreeError;
use super::mutation::DeleteOutcome;
use super::{builder, cycle, depth, descendants, mutation, normalize, parents, path, query};

/// Runs tree operations against one project's asset collection under a
/// fixed [`TreeConfig`].
///
/// The service holds no nodes; every call takes the current collection and
/// returns a new one, leaving persistence to the caller.
#[derive(Debug, Clone, Default)]
pub struct AssetTreeService {
    /// Depth limit and enforcement switches.
    config: TreeConfig,
}

impl AssetTreeService {
    /// Creates a new tree service.
    pub fn new(config: TreeConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// Normalizes stored records and checks every structural invariant.
    pub fn ingest<I>(&self, records: I) -> Result<Vec<AssetNode>, TreeError>
    where
        I: IntoIterator<Item = AssetRecord>,
    {
        let nodes = normalize::normalize(records);
        normalize::validate_integrity(&nodes, &self.config)?;
        Ok(nodes)
    }

    /// Canonicalizes stored records without checking invariants.
    pub fn normalize<I>(&self, records: I) -> Vec<AssetNode>
    where
        I: IntoIterator<Item = AssetRecord>,
    {
        normalize::normalize(records)
    }

    /// Checks every structural invariant of an existing collection.
    pub fn validate(&self, nodes: &[AssetNode]) -> Result<(), TreeError> {
        normalize::validate_integrity(nodes, &self.config)
    }

    /// Root assets.
    pub fn root_nodes<'a>(&self, nodes: &'a [AssetNode]) -> Vec<&'a AssetNode> {
        query::root_nodes(nodes)
    }

    /// Direct children of a folder.
    pub fn children<'a>(&self, nodes: &'a [AssetNode], parent_id: &str) -> Vec<&'a AssetNode> {
        query::children(nodes, parent_id)
    }

    /// Whether an asset has children.
    pub fn has_children(&self, nodes: &[AssetNode], id: &str) -> bool {
        query::has_children(nodes, id)
    }

    /// All assets below a folder.
    pub fn descendants<'a>(&self, nodes: &'a [AssetNode], id: &str) -> Vec<&'a AssetNode> {
        descendants::descendants(nodes, id)
    }

    /// Number of assets below a folder.
    pub fn descendant_count(&self, nodes: &[AssetNode], id: &str) -> usize {
        descendants::descendant_count(nodes, id)
    }

    /// Whether any asset below `id` satisfies `predicate`.
    pub fn any_descendant_matches<F>(&self, nodes: &[AssetNode], id: &str, predicate: F) -> bool
    where
        F: Fn(&AssetNode) -> bool,
    {
        descendants::any_descendant_matches(nodes, id, predicate)
    }

    /// Breadcrumb names, root first, including the asset itself.
    pub fn path(&self, nodes: &[AssetNode], id: &str) -> Vec<String> {
        path::path(nodes, id)
    }

    /// Ancestors from the root to the immediate parent.
    pub fn ancestor_chain<'a>(&self, nodes: &'a [AssetNode], id: &str) -> Vec<&'a AssetNode> {
        path::ancestor_chain(nodes, id)
    }

    /// Resolves a breadcrumb of names to an asset.
    pub fn resolve_path<'a, S>(&self, nodes: &'a [AssetNode], names: &[S]) -> Option<&'a AssetNode>
    where
        S: AsRef<str>,
    {
        path::resolve_path(nodes, names)
    }

    /// Depth of an asset (0 for roots).
    pub fn depth_of(&self, nodes: &[AssetNode], id: &str) -> Result<usize, TreeError> {
        depth::depth_of(nodes, id)
    }

    /// Whether one more level fits below `parent_id`.
    pub fn can_nest_under(
        &self,
        nodes: &[AssetNode],
        parent_id: Option<&str>,
    ) -> Result<NestCheck, TreeError> {
        depth::can_nest_under(nodes, parent_id, &self.config)
    }

    /// Whether re-parenting would create a cycle.
    pub fn can_reparent(
        &self,
        nodes: &[AssetNode],
        id: &str,
        new_parent_id: Option<&str>,
    ) -> ReparentCheck {
        cycle::can_reparent(nodes, id, new_parent_id)
    }

    /// Adds an asset under `parent_id`.
    pub fn insert(
        &self,
        nodes: &[AssetNode],
        new_node: AssetNode,
        parent_id: Option<&str>,
    ) -> Result<Vec<AssetNode>, TreeError> {
        mutation::insert(nodes, new_node, parent_id, &self.config)
    }

    /// Moves an asset (and its subtree) under `new_parent_id`.
    pub fn move_node(
        &self,
        nodes: &[AssetNode],
        id: &str,
        new_parent_id: Option<&str>,
    ) -> Result<Vec<AssetNode>, TreeError> {
        mutation::move_node(nodes, id, new_parent_id, &self.config)
    }

    /// Renames an asset.
    pub fn rename(
        &self,
        nodes: &[AssetNode],
        id: &str,
        name: &str,
    ) -> Result<Vec<AssetNode>, TreeError> {
        mutation::rename(nodes, id, name)
    }

    /// Deletes an asset and its subtree.
    pub fn cascade_delete(&self, nodes: &[AssetNode], id: &str) -> Result<DeleteOutcome, TreeError> {
        mutation::cascade_delete(nodes, id)
    }

    /// Nested view of the whole collection.
    pub fn build_tree(&self, nodes: &[AssetNode]) -> Vec<TreeNode> {
        builder::build_tree(nodes)
    }

    /// Nested view filtered to matches and their ancestors.
    pub fn filter_tree<F>(&self, nodes: &[AssetNode], predicate: F) -> Vec<TreeNode>
    where
        F: Fn(&AssetNode) -> bool,
    {
        builder::filter_tree(nodes, predicate)
    }

    /// Flattened rows of a nested view.
    pub fn flatten(&self, tree: &[TreeNode]) -> Vec<FlatEntry> {
        builder::flatten(tree)
    }

    /// Folders that may be offered as parents, optionally for moving `exclude_id`.
    pub fn available_parents(
        &self,
        nodes: &[AssetNode],
        exclude_id: Option<&str>,
    ) -> Vec<ParentOption> {
        parents::available_parents(nodes, exclude_id, &self.config)
    }
}
