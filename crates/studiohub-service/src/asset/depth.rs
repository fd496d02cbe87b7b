//! Depth computation and nesting-limit validation.

use serde::{Deserialize, Serialize};

use studiohub_core::config::TreeConfig;
use studiohub_entity::AssetNode;

use super::error::TreeError;
use super::index::AssetIndex;

/// Result of checking whether one more level fits below a parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NestCheck {
    /// Whether a child may be placed under the parent.
    pub valid: bool,
    /// Depth of the candidate parent; `None` when nesting at the root level.
    pub current_depth: Option<usize>,
    /// Deepest depth a node may occupy.
    pub max_allowed: usize,
}

impl NestCheck {
    /// Convert a failed check into the matching error. `extra` is the height
    /// of the subtree that would hang below the new child.
    pub(crate) fn into_result(self, extra: usize) -> Result<(), TreeError> {
        let depth = self.current_depth.map_or(0, |d| d + 1) + extra;
        if self.valid && depth <= self.max_allowed {
            Ok(())
        } else {
            Err(TreeError::MaxDepthExceeded {
                depth,
                max: self.max_allowed,
            })
        }
    }
}

/// Depth of `id`: 0 for a root, otherwise one more than its parent.
pub fn depth_of(nodes: &[AssetNode], id: &str) -> Result<usize, TreeError> {
    AssetIndex::new(nodes).depth_of(id)
}

/// Number of levels in the subtree below `id` (0 for a leaf).
pub fn subtree_height(nodes: &[AssetNode], id: &str) -> usize {
    AssetIndex::new(nodes).height_of(id)
}

/// Check whether a new child fits under `parent_id` without exceeding the
/// configured depth. Nesting at the root level (`None`) always fits.
pub fn can_nest_under(
    nodes: &[AssetNode],
    parent_id: Option<&str>,
    config: &TreeConfig,
) -> Result<NestCheck, TreeError> {
    nest_check(&AssetIndex::new(nodes), parent_id, config)
}

pub(crate) fn nest_check(
    index: &AssetIndex<'_>,
    parent_id: Option<&str>,
    config: &TreeConfig,
) -> Result<NestCheck, TreeError> {
    let max_allowed = config.deepest_allowed();
    let Some(parent_id) = parent_id else {
        return Ok(NestCheck {
            valid: true,
            current_depth: None,
            max_allowed,
        });
    };

    if !index.contains(parent_id) {
        return Err(TreeError::ParentNotFound(parent_id.into()));
    }
    let depth = index.depth_of(parent_id)?;

    Ok(NestCheck {
        valid: depth < max_allowed,
        current_depth: Some(depth),
        max_allowed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::testing::{chain, scenario};

    #[test]
    fn test_depth_of_scenario() {
        let nodes = scenario();
        assert_eq!(depth_of(&nodes, "a").unwrap(), 0);
        assert_eq!(depth_of(&nodes, "c").unwrap(), 2);
        assert!(depth_of(&nodes, "x").is_err());
    }

    #[test]
    fn test_chain_of_ten_limits() {
        let nodes = chain(10);
        let config = TreeConfig::default();

        let deepest = can_nest_under(&nodes, Some("f9"), &config).unwrap();
        assert!(!deepest.valid);
        assert_eq!(deepest.current_depth, Some(9));
        assert_eq!(deepest.max_allowed, 9);

        let below = can_nest_under(&nodes, Some("f8"), &config).unwrap();
        assert!(below.valid);
        assert_eq!(below.current_depth, Some(8));
    }

    #[test]
    fn test_root_always_fits() {
        let nodes = chain(10);
        let check = can_nest_under(&nodes, None, &TreeConfig::default()).unwrap();
        assert!(check.valid);
        assert_eq!(check.current_depth, None);
    }

    #[test]
    fn test_unknown_parent() {
        let nodes = scenario();
        assert_eq!(
            can_nest_under(&nodes, Some("ghost"), &TreeConfig::default()),
            Err(TreeError::ParentNotFound("ghost".into()))
        );
    }

    #[test]
    fn test_into_result_accounts_for_subtree() {
        let check = NestCheck {
            valid: true,
            current_depth: Some(6),
            max_allowed: 9,
        };
        assert!(check.into_result(2).is_ok());
        assert_eq!(
            check.into_result(3),
            Err(TreeError::MaxDepthExceeded { depth: 10, max: 9 })
        );
    }

    #[test]
    fn test_subtree_height() {
        let nodes = chain(5);
        assert_eq!(subtree_height(&nodes, "f1"), 3);
        assert_eq!(subtree_height(&nodes, "f4"), 0);
    }
}
