//! StudioHub asset hierarchy engine.
//!
//! Re-exports the workspace crates and wires up logging for embedders.
//! The engine itself lives in [`studiohub_service::asset`].

use tracing_subscriber::{EnvFilter, fmt};

pub use studiohub_core::{AppConfig, AppError, AppResult, ErrorKind, LoggingConfig, TreeConfig};
pub use studiohub_entity::{
    AssetId, AssetKind, AssetNode, AssetRecord, FlatEntry, ParentOption, TreeNode,
};
pub use studiohub_service::asset;
pub use studiohub_service::{
    AssetIndex, AssetTreeService, DeleteOutcome, NestCheck, ReparentCheck, TreeError,
    TreeErrorKind,
};

/// Initialize tracing/logging.
///
/// `RUST_LOG` takes precedence over the configured level. Returns `false`
/// when a global subscriber was already installed, which is expected when
/// the host application owns logging.
pub fn init_logging(config: &LoggingConfig) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let result = match config.format.as_str() {
        "json" => fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .try_init(),
        _ => fmt()
            .pretty()
            .with_env_filter(filter)
            .with_target(true)
            .try_init(),
    };

    match result {
        Ok(()) => {
            tracing::info!("StudioHub asset engine v{}", env!("CARGO_PKG_VERSION"));
            true
        }
        Err(_) => false,
    }
}
