//! Asset hierarchy engine: queries, validators, mutations, and tree views.

pub mod builder;
pub mod cycle;
pub mod depth;
pub mod descendants;
pub mod error;
pub mod index;
pub mod mutation;
pub mod normalize;
pub mod parents;
pub mod path;
pub mod query;
pub mod service;

#[cfg(test)]
pub(crate) mod testing;

pub use builder::{build_subtree, build_tree, filter_tree, flatten};
pub use cycle::{ReparentCheck, can_reparent};
pub use depth::{NestCheck, can_nest_under, depth_of, subtree_height};
pub use descendants::{any_descendant_matches, descendant_count, descendants};
pub use error::{TreeError, TreeErrorKind};
pub use index::AssetIndex;
pub use mutation::{DeleteOutcome, cascade_delete, insert, move_node, rename};
pub use normalize::{normalize, normalize_nodes, validate_integrity};
pub use parents::available_parents;
pub use path::{ancestor_chain, path, resolve_path};
pub use query::{children, has_children, root_nodes};
pub use service::AssetTreeService;
