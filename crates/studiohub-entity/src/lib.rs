//! # studiohub-entity
//!
//! Entity models for StudioHub project assets. Every struct in this crate
//! is a plain value that serializes to the JSON shape stored inside a
//! project document. All entities derive `Debug`, `Clone`, `Serialize`,
//! and `Deserialize`.

pub mod asset;

pub use asset::{AssetId, AssetKind, AssetNode, AssetRecord, FlatEntry, ParentOption, TreeNode};
