//! Ingestion: legacy-record normalization and integrity checking.
//!
//! Records written before assets could nest have no `parent` field at all.
//! After normalization every node carries `Option<AssetId>`, and `None` is
//! the only spelling of "root" the rest of the engine ever sees.

use std::collections::HashSet;

use tracing::{debug, warn};

use studiohub_core::config::TreeConfig;
use studiohub_entity::{AssetId, AssetNode, AssetRecord};

use super::error::TreeError;
use super::index::AssetIndex;

/// Canonicalize stored records into nodes.
///
/// A missing field, an explicit `null`, and a blank string all become
/// `None`. Everything else is passed through unchanged.
pub fn normalize<I>(records: I) -> Vec<AssetNode>
where
    I: IntoIterator<Item = AssetRecord>,
{
    let mut legacy = 0usize;
    let nodes: Vec<AssetNode> = records
        .into_iter()
        .map(|record| {
            if record.is_legacy() {
                legacy += 1;
            }
            AssetNode {
                id: record.id,
                name: record.name,
                kind: record.kind,
                parent: canonical_parent(record.parent.flatten()),
                external_link: record.external_link,
                previews: record.previews,
                created_at: record.created_at,
            }
        })
        .collect();

    if legacy > 0 {
        debug!(legacy, total = nodes.len(), "Normalized legacy asset records");
    }
    nodes
}

/// Re-canonicalize nodes that were built or edited outside the normalizer.
/// Idempotent.
pub fn normalize_nodes(nodes: Vec<AssetNode>) -> Vec<AssetNode> {
    nodes
        .into_iter()
        .map(|mut node| {
            node.parent = canonical_parent(node.parent.map(String::from));
            node
        })
        .collect()
}

fn canonical_parent(parent: Option<String>) -> Option<AssetId> {
    parent
        .filter(|p| !p.trim().is_empty())
        .map(AssetId::from)
}

/// Check that a normalized collection satisfies every structural invariant.
///
/// Rejects duplicate ids, self-parenting, dangling parent references,
/// cycles, nodes deeper than the configured limit and, when folder parents
/// are enforced, files that hold children. Reports the first violation in
/// collection order.
pub fn validate_integrity(nodes: &[AssetNode], config: &TreeConfig) -> Result<(), TreeError> {
    let result = check_integrity(nodes, config);
    if let Err(err) = &result {
        warn!(error = %err, total = nodes.len(), "Asset collection failed integrity check");
    }
    result
}

fn check_integrity(nodes: &[AssetNode], config: &TreeConfig) -> Result<(), TreeError> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(nodes.len());
    for node in nodes {
        if !seen.insert(node.id.as_str()) {
            return Err(TreeError::DuplicateId(node.id.clone()));
        }
    }

    let index = AssetIndex::new(nodes);
    for node in nodes {
        let Some(parent_id) = node.parent.as_ref() else {
            continue;
        };
        if parent_id == &node.id {
            return Err(TreeError::SelfParent(node.id.clone()));
        }
        let Some(parent) = index.get(parent_id.as_str()) else {
            return Err(TreeError::DanglingParent {
                node_id: node.id.clone(),
                parent_id: parent_id.clone(),
            });
        };
        if config.enforce_folder_parents && !parent.is_folder() {
            return Err(TreeError::ParentNotFolder(parent.id.clone()));
        }
    }

    let max = config.deepest_allowed();
    for node in nodes {
        let depth = index.depth_of(node.id.as_str())?;
        if depth > max {
            return Err(TreeError::MaxDepthExceeded { depth, max });
        }
    }

    Ok(())
}
