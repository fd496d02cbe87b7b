//! Cycle guard for re-parenting.

use serde::{Deserialize, Serialize};

use studiohub_entity::AssetNode;

use super::error::{TreeError, TreeErrorKind};
use super::index::AssetIndex;

/// Result of checking a proposed parent assignment for cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReparentCheck {
    /// Whether the assignment keeps the hierarchy acyclic.
    pub valid: bool,
    /// Why the assignment was rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<TreeErrorKind>,
}

impl From<Result<(), TreeError>> for ReparentCheck {
    fn from(result: Result<(), TreeError>) -> Self {
        match result {
            Ok(()) => Self {
                valid: true,
                error_kind: None,
            },
            Err(err) => Self {
                valid: false,
                error_kind: Some(err.kind()),
            },
        }
    }
}

/// Check whether `node_id` may be placed under `new_parent_id`.
///
/// Moving to the root level is always acyclic. Depth is not considered here;
/// it is only meaningful once the assignment is known to be acyclic.
pub fn can_reparent(
    nodes: &[AssetNode],
    node_id: &str,
    new_parent_id: Option<&str>,
) -> ReparentCheck {
    check_reparent(&AssetIndex::new(nodes), node_id, new_parent_id).into()
}

pub(crate) fn check_reparent(
    index: &AssetIndex<'_>,
    node_id: &str,
    new_parent_id: Option<&str>,
) -> Result<(), TreeError> {
    let Some(parent_id) = new_parent_id else {
        return Ok(());
    };

    if parent_id == node_id {
        return Err(TreeError::SelfParent(node_id.into()));
    }

    // Every parent link counts here, so a file that wrongly holds children
    // still cannot be used to close a loop.
    if index
        .subtree(node_id, true)
        .iter()
        .any(|n| n.id.as_str() == parent_id)
    {
        return Err(TreeError::CircularReference {
            node_id: node_id.into(),
            parent_id: parent_id.into(),
        });
    }

    Ok(())
}
