//! Asset tree engine configuration.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Limits and enforcement switches for the asset hierarchy.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TreeConfig {
    /// Maximum number of levels, counting the root level. A root has depth 0,
    /// so the deepest permitted node sits at `max_depth - 1`.
    #[serde(default = "default_max_depth")]
    #[validate(range(min = 1, max = 64))]
    pub max_depth: usize,
    /// Whether only folder assets may hold children.
    #[serde(default = "default_enforce_folder_parents")]
    pub enforce_folder_parents: bool,
}

impl TreeConfig {
    /// Create a configuration with the given maximum depth.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth,
            ..Self::default()
        }
    }

    /// Deepest depth index a node may occupy.
    pub fn deepest_allowed(&self) -> usize {
        self.max_depth.saturating_sub(1)
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            enforce_folder_parents: default_enforce_folder_parents(),
        }
    }
}

fn default_max_depth() -> usize {
    10
}

fn default_enforce_folder_parents() -> bool {
    true
}
