//! Storage layer - versioned JSON snapshots
//!
//! Provides the on-disk persistence for the project catalog: a full-snapshot
//! JSON file plus a data-version marker, both under the data directory.

pub mod snapshot;

// Re-export commonly used types
pub use snapshot::{default_data_dir, SnapshotStore, PROJECTS_KEY, VERSION_KEY};
