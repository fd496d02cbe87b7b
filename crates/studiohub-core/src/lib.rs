//! # studiohub-core
//!
//! Core crate for StudioHub. Contains configuration schemas for the asset
//! tree engine and logging, and the unified error system.
//!
//! This crate has **no** internal dependencies on other StudioHub crates.

pub mod config;
pub mod error;
pub mod result;

pub use crate::config::{AppConfig, LoggingConfig, TreeConfig};
pub use error::{AppError, ErrorKind};
pub use result::AppResult;
