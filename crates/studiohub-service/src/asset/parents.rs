//! Candidate parents for a folder selector.

use std::collections::HashSet;

use studiohub_core::config::TreeConfig;
use studiohub_entity::{AssetNode, ParentOption};

use super::builder::{build_tree, flatten};
use super::index::AssetIndex;

const PATH_SEPARATOR: &str = " / ";

/// Every folder, in tree order, with its breadcrumb path and depth.
///
/// With `exclude_id` set (the node about to be moved), the node itself and
/// its descendants are disabled, as is any folder too deep to take the
/// node's whole subtree. Without it, folders at the depth limit are
/// disabled.
pub fn available_parents(
    nodes: &[AssetNode],
    exclude_id: Option<&str>,
    config: &TreeConfig,
) -> Vec<ParentOption> {
    let index = AssetIndex::new(nodes);
    let max = config.deepest_allowed();

    let (blocked, extra): (HashSet<&str>, usize) = match exclude_id {
        Some(id) => {
            let mut blocked: HashSet<&str> = index
                .subtree(id, true)
                .iter()
                .map(|n| n.id.as_str())
                .collect();
            blocked.insert(id);
            (blocked, index.height_of(id))
        }
        None => (HashSet::new(), 0),
    };

    flatten(&build_tree(nodes))
        .into_iter()
        .filter(|row| row.node.is_folder())
        .map(|row| {
            let path = index
                .ancestors(row.node.id.as_str())
                .into_iter()
                .rev()
                .map(|n| n.name.as_str())
                .chain(std::iter::once(row.node.name.as_str()))
                .collect::<Vec<_>>()
                .join(PATH_SEPARATOR);
            let disabled =
                blocked.contains(row.node.id.as_str()) || row.depth + 1 + extra > max;

            ParentOption {
                id: row.node.id,
                name: row.node.name,
                path,
                depth: row.depth,
                disabled,
            }
        })
        .collect()
}
