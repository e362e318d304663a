//! Versioned JSON snapshot persistence
//!
//! The persisted state is two entries under the data directory:
//!
//! - `projects.json`: the JSON-serialized project collection, overwritten
//!   as a full snapshot on every mutation
//! - `data_version`: the data-version marker recorded when the snapshot
//!   was written
//!
//! A snapshot whose recorded version differs from [`DATA_VERSION`] is
//! treated as stale and discarded by the caller in favor of the seed
//! collection.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::seed::DATA_VERSION;
use crate::catalog::Project;
use crate::error::{Error, Result};

/// File name of the serialized project collection
pub const PROJECTS_KEY: &str = "projects.json";

/// File name of the data-version marker
pub const VERSION_KEY: &str = "data_version";

/// Get the default data directory path
pub fn default_data_dir() -> Result<PathBuf> {
    let dir = if let Ok(custom_dir) = env::var("FOLIO_DATA_DIR") {
        PathBuf::from(custom_dir)
    } else {
        dirs::data_dir()
            .ok_or_else(|| Error::Snapshot("Could not determine data directory".to_string()))?
            .join("folio")
    };
    Ok(dir)
}

/// On-disk store for the project collection snapshot
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    dir: PathBuf,
}

impl SnapshotStore {
    /// Create a store rooted at the given directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Create a store rooted at the default data directory
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(default_data_dir()?))
    }

    /// Directory holding the snapshot entries
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn projects_path(&self) -> PathBuf {
        self.dir.join(PROJECTS_KEY)
    }

    fn version_path(&self) -> PathBuf {
        self.dir.join(VERSION_KEY)
    }

    /// Read the recorded data version, if a snapshot exists
    pub fn stored_version(&self) -> Result<Option<String>> {
        let path = self.version_path();
        if !path.exists() {
            return Ok(None);
        }
        let version = fs::read_to_string(&path)?;
        Ok(Some(version.trim().to_string()))
    }

    /// Load the persisted collection.
    ///
    /// Returns `Ok(None)` when no snapshot has been written yet. Returns
    /// `Err(Error::VersionMismatch)` for a stale snapshot and
    /// `Err(Error::Parse)` for corrupt JSON; callers are expected to fall
    /// back to the seed collection in both cases.
    pub fn load(&self) -> Result<Option<Vec<Project>>> {
        let projects_path = self.projects_path();
        if !projects_path.exists() {
            return Ok(None);
        }

        match self.stored_version()? {
            Some(version) if version == DATA_VERSION => {}
            found => {
                return Err(Error::VersionMismatch {
                    found: found.unwrap_or_default(),
                    expected: DATA_VERSION.to_string(),
                });
            }
        }

        let contents = fs::read_to_string(&projects_path)?;
        let projects: Vec<Project> =
            serde_json::from_str(&contents).map_err(|e| Error::Parse(e.to_string()))?;
        Ok(Some(projects))
    }

    /// Persist the collection and the current data version as a full
    /// snapshot overwrite
    pub fn save(&self, projects: &[Project]) -> Result<()> {
        fs::create_dir_all(&self.dir)?;

        let contents = serde_json::to_string_pretty(projects)
            .map_err(|e| Error::Snapshot(format!("Failed to serialize projects: {}", e)))?;
        fs::write(self.projects_path(), contents)?;
        fs::write(self.version_path(), DATA_VERSION)?;

        Ok(())
    }

    /// Remove both snapshot entries, if present
    pub fn clear(&self) -> Result<()> {
        for path in [self.projects_path(), self.version_path()] {
            if path.exists() {
                fs::remove_file(&path)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (SnapshotStore, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        (SnapshotStore::new(temp_dir.path()), temp_dir)
    }

    #[test]
    fn test_load_without_snapshot_is_none() {
        let (store, _guard) = store();
        assert!(store.load().unwrap().is_none());
        assert!(store.stored_version().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let (store, _guard) = store();
        let projects = vec![
            Project::new("A", "first", "Web App"),
            Project::new("B", "second", "Game").with_tags(vec!["Rust".to_string()]),
        ];

        store.save(&projects).unwrap();

        let loaded = store.load().unwrap().expect("snapshot should exist");
        assert_eq!(loaded, projects);
        assert_eq!(
            store.stored_version().unwrap().as_deref(),
            Some(DATA_VERSION)
        );
    }

    #[test]
    fn test_version_mismatch_is_reported() {
        let (store, guard) = store();
        store.save(&[Project::new("A", "d", "API")]).unwrap();

        fs::write(guard.path().join(VERSION_KEY), "stale-version").unwrap();

        match store.load() {
            Err(Error::VersionMismatch { found, expected }) => {
                assert_eq!(found, "stale-version");
                assert_eq!(expected, DATA_VERSION);
            }
            other => panic!("expected version mismatch, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_corrupt_json_is_a_parse_error() {
        let (store, guard) = store();
        store.save(&[]).unwrap();

        fs::write(guard.path().join(PROJECTS_KEY), "{not json").unwrap();

        assert!(matches!(store.load(), Err(Error::Parse(_))));
    }

    #[test]
    fn test_clear_removes_both_entries() {
        let (store, guard) = store();
        store.save(&[Project::new("A", "d", "API")]).unwrap();

        store.clear().unwrap();

        assert!(!guard.path().join(PROJECTS_KEY).exists());
        assert!(!guard.path().join(VERSION_KEY).exists());
        // Clearing again is a no-op
        store.clear().unwrap();
    }
}
