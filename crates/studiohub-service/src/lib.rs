//! # studiohub-service
//!
//! The asset tree engine behind StudioHub's project asset browser. Every
//! operation is a pure function from a node collection (plus arguments) to
//! a new collection, a read-model, or a tagged [`TreeError`]. Nothing here
//! performs I/O or holds mutable state; persisting the returned collection
//! is the caller's job.
//!
//! [`AssetTreeService`] bundles the configured depth limit for callers that
//! prefer not to pass a [`TreeConfig`](studiohub_core::TreeConfig) around.

pub mod asset;

pub use asset::{
    AssetIndex, AssetTreeService, DeleteOutcome, NestCheck, ReparentCheck, TreeError,
    TreeErrorKind,
};
