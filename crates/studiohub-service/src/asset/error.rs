//! Tagged errors returned by the asset tree engine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use studiohub_core::error::AppError;
use studiohub_entity::AssetId;

/// A rejected tree operation. Expected constraint violations are always
/// reported through this type, never by panicking.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The proposed parent is one of the node's own descendants.
    #[error("Cannot move asset '{node_id}' under its own descendant '{parent_id}'")]
    CircularReference {
        /// The node being re-parented.
        node_id: AssetId,
        /// The rejected parent.
        parent_id: AssetId,
    },
    /// The proposed parent is the node itself.
    #[error("Asset '{0}' cannot be its own parent")]
    SelfParent(AssetId),
    /// The proposed position is deeper than the configured limit.
    #[error("Depth {depth} exceeds the maximum allowed depth of {max}")]
    MaxDepthExceeded {
        /// Depth the deepest affected node would reach.
        depth: usize,
        /// Deepest depth permitted.
        max: usize,
    },
    /// The referenced parent does not exist in the collection.
    #[error("Parent asset '{0}' not found")]
    ParentNotFound(AssetId),
    /// The target node does not exist in the collection.
    #[error("Asset '{0}' not found")]
    NotFound(AssetId),
    /// The referenced parent is a file.
    #[error("Asset '{0}' is a file and cannot hold children")]
    ParentNotFolder(AssetId),
    /// An asset with the same id already exists.
    #[error("An asset with id '{0}' already exists")]
    DuplicateId(AssetId),
    /// The supplied display name is blank.
    #[error("Asset name cannot be empty")]
    InvalidName,
    /// A stored node references a parent that is not in the collection.
    #[error("Asset '{node_id}' references missing parent '{parent_id}'")]
    DanglingParent {
        /// The orphaned node.
        node_id: AssetId,
        /// The missing parent.
        parent_id: AssetId,
    },
}

/// The tag of a [`TreeError`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TreeErrorKind {
    /// See [`TreeError::CircularReference`].
    CircularReference,
    /// See [`TreeError::SelfParent`].
    SelfParent,
    /// See [`TreeError::MaxDepthExceeded`].
    MaxDepthExceeded,
    /// See [`TreeError::ParentNotFound`].
    ParentNotFound,
    /// See [`TreeError::NotFound`].
    NotFound,
    /// See [`TreeError::ParentNotFolder`].
    ParentNotFolder,
    /// See [`TreeError::DuplicateId`].
    DuplicateId,
    /// See [`TreeError::InvalidName`].
    InvalidName,
    /// See [`TreeError::DanglingParent`].
    DanglingParent,
}

impl TreeError {
    /// Return the error tag.
    pub fn kind(&self) -> TreeErrorKind {
        match self {
            Self::CircularReference { .. } => TreeErrorKind::CircularReference,
            Self::SelfParent(_) => TreeErrorKind::SelfParent,
            Self::MaxDepthExceeded { .. } => TreeErrorKind::MaxDepthExceeded,
            Self::ParentNotFound(_) => TreeErrorKind::ParentNotFound,
            Self::NotFound(_) => TreeErrorKind::NotFound,
            Self::ParentNotFolder(_) => TreeErrorKind::ParentNotFolder,
            Self::DuplicateId(_) => TreeErrorKind::DuplicateId,
            Self::InvalidName => TreeErrorKind::InvalidName,
            Self::DanglingParent { .. } => TreeErrorKind::DanglingParent,
        }
    }

    /// Whether the error describes a would-be cycle, self-parenting included.
    pub fn is_circular(&self) -> bool {
        matches!(self, Self::CircularReference { .. } | Self::SelfParent(_))
    }
}

impl From<TreeError> for AppError {
    fn from(err: TreeError) -> Self {
        let message = err.to_string();
        match err.kind() {
            TreeErrorKind::NotFound | TreeErrorKind::ParentNotFound => {
                AppError::not_found(message)
            }
            TreeErrorKind::DuplicateId => AppError::conflict(message),
            TreeErrorKind::DanglingParent => AppError::integrity(message),
            _ => AppError::validation(message),
        }
    }
}
