//! Shared types, error model, and configuration for Gander.
//!
//! This crate is the foundation depended on by all other Gander crates.
//! It provides:
//! - [`GanderError`], the unified error type
//! - Payload types ([`OutputPayload`], [`Metadata`], [`Budgets`])
//! - Configuration ([`AppConfig`], [`RunConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, DefaultsConfig, RunConfig, config_dir, config_file_path, load_config,
    load_config_from,
};
pub use error::{GanderError, Result};
pub use types::{Budgets, Metadata, OutputPayload, SKELETON_NOTES, Usage};
