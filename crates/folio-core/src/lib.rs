//! Folio Core Library
//!
//! This crate provides the core functionality for Folio, including:
//! - Catalog (the project collection, category filtering, selection)
//! - Snapshot storage (versioned JSON persistence)
//! - Commands (admin CRUD operations over the catalog)
//! - Configuration (site and display settings)

pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod storage;

pub use error::{Error, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::catalog::{Catalog, Project};
    pub use crate::config::Config;
    pub use crate::error::{Error, Result};
    pub use crate::storage::SnapshotStore;
}
