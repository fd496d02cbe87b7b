//! Asset hierarchy entities.

pub mod id;
pub mod kind;
pub mod model;
pub mod tree;

pub use id::AssetId;
pub use kind::AssetKind;
pub use model::{AssetNode, AssetRecord};
pub use tree::{FlatEntry, ParentOption, TreeNode};
