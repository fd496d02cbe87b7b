//! Insert, move, rename, and cascade delete.
//!
//! Every mutation validates fully against the input before building its
//! output. On error the input is untouched and no partial result exists.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use studiohub_core::config::TreeConfig;
use studiohub_entity::{AssetId, AssetNode};

use super::cycle::check_reparent;
use super::depth::nest_check;
use super::error::TreeError;
use super::index::AssetIndex;

/// Result of a cascade delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOutcome {
    /// The remaining nodes.
    pub nodes: Vec<AssetNode>,
    /// Number of nodes removed, the target included.
    pub removed_count: usize,
    /// Ids of the removed nodes, target first.
    pub removed_ids: Vec<AssetId>,
}

/// Append `new_node` under `parent_id` (or at the root level).
///
/// The node's own `parent` field is overwritten with `parent_id`, and its
/// name is stored trimmed, as [`rename`] does.
pub fn insert(
    nodes: &[AssetNode],
    mut new_node: AssetNode,
    parent_id: Option<&str>,
    config: &TreeConfig,
) -> Result<Vec<AssetNode>, TreeError> {
    let index = AssetIndex::new(nodes);

    let result = validate_insert(&index, &new_node, parent_id, config);
    if let Err(err) = &result {
        debug!(node_id = %new_node.id, parent_id = ?parent_id, error = %err, "Asset insert rejected");
    }
    result?;

    new_node.parent = parent_id.map(AssetId::from);
    new_node.name = new_node.name.trim().to_string();
    info!(
        node_id = %new_node.id,
        parent_id = ?parent_id,
        kind = %new_node.kind,
        "Asset inserted"
    );

    let mut out = Vec::with_capacity(nodes.len() + 1);
    out.extend_from_slice(nodes);
    out.push(new_node);
    Ok(out)
}

fn validate_insert(
    index: &AssetIndex<'_>,
    new_node: &AssetNode,
    parent_id: Option<&str>,
    config: &TreeConfig,
) -> Result<(), TreeError> {
    if new_node.name.trim().is_empty() {
        return Err(TreeError::InvalidName);
    }
    if index.contains(new_node.id.as_str()) {
        return Err(TreeError::DuplicateId(new_node.id.clone()));
    }
    if let Some(parent_id) = parent_id {
        require_container(index, parent_id, config)?;
    }
    nest_check(index, parent_id, config)?.into_result(0)
}

/// Re-parent `node_id` under `new_parent_id` (or to the root level).
///
/// Checks run in order: the node exists, the assignment is acyclic, the
/// parent exists and may hold children, and the deepest node of the moved
/// subtree stays within the depth limit.
pub fn move_node(
    nodes: &[AssetNode],
    node_id: &str,
    new_parent_id: Option<&str>,
    config: &TreeConfig,
) -> Result<Vec<AssetNode>, TreeError> {
    let index = AssetIndex::new(nodes);

    let result = validate_move(&index, node_id, new_parent_id, config);
    if let Err(err) = &result {
        debug!(node_id = %node_id, parent_id = ?new_parent_id, error = %err, "Asset move rejected");
    }
    result?;

    let new_parent = new_parent_id.map(AssetId::from);
    let out = nodes
        .iter()
        .map(|n| {
            if n.id.as_str() == node_id {
                AssetNode {
                    parent: new_parent.clone(),
                    ..n.clone()
                }
            } else {
                n.clone()
            }
        })
        .collect();

    info!(node_id = %node_id, parent_id = ?new_parent_id, "Asset moved");
    Ok(out)
}

fn validate_move(
    index: &AssetIndex<'_>,
    node_id: &str,
    new_parent_id: Option<&str>,
    config: &TreeConfig,
) -> Result<(), TreeError> {
    index.require(node_id)?;
    check_reparent(index, node_id, new_parent_id)?;
    if let Some(parent_id) = new_parent_id {
        require_container(index, parent_id, config)?;
    }
    nest_check(index, new_parent_id, config)?.into_result(index.height_of(node_id))
}

/// Change the display name of `node_id`.
pub fn rename(
    nodes: &[AssetNode],
    node_id: &str,
    name: &str,
) -> Result<Vec<AssetNode>, TreeError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(TreeError::InvalidName);
    }
    if !nodes.iter().any(|n| n.id.as_str() == node_id) {
        return Err(TreeError::NotFound(node_id.into()));
    }

    let out = nodes
        .iter()
        .map(|n| {
            if n.id.as_str() == node_id {
                AssetNode {
                    name: name.to_string(),
                    ..n.clone()
                }
            } else {
                n.clone()
            }
        })
        .collect();

    info!(node_id = %node_id, new_name = %name, "Asset renamed");
    Ok(out)
}

/// Remove `node_id` together with its whole subtree.
///
/// Every parent link is followed, not only folder ones, so no remaining node
/// can be left pointing at a removed id.
pub fn cascade_delete(nodes: &[AssetNode], node_id: &str) -> Result<DeleteOutcome, TreeError> {
    let index = AssetIndex::new(nodes);
    let target = index.require(node_id)?;

    let mut removed_ids: Vec<AssetId> = Vec::new();
    removed_ids.push(target.id.clone());
    removed_ids.extend(index.subtree(node_id, true).iter().map(|n| n.id.clone()));

    let doomed: std::collections::HashSet<&str> =
        removed_ids.iter().map(AssetId::as_str).collect();
    let remaining: Vec<AssetNode> = nodes
        .iter()
        .filter(|n| !doomed.contains(n.id.as_str()))
        .cloned()
        .collect();
    let removed_count = nodes.len() - remaining.len();

    info!(node_id = %node_id, removed = removed_count, "Asset subtree deleted");

    Ok(DeleteOutcome {
        nodes: remaining,
        removed_count,
        removed_ids,
    })
}

fn require_container(
    index: &AssetIndex<'_>,
    parent_id: &str,
    config: &TreeConfig,
) -> Result<(), TreeError> {
    let parent = index
        .get(parent_id)
        .ok_or_else(|| TreeError::ParentNotFound(parent_id.into()))?;
    if config.enforce_folder_parents && !parent.is_folder() {
        return Err(TreeError::ParentNotFolder(parent.id.clone()));
    }
    Ok(())
}
