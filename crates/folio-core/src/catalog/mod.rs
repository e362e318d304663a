//! The project catalog
//!
//! Owns the canonical project collection plus the derived view state (active
//! category filter, current selection) and keeps the on-disk snapshot in
//! sync. Constructed once at application start and passed by reference to
//! whichever surface needs it; there is no global instance.

pub mod project;
pub mod seed;

pub use project::{Project, ALL_CATEGORIES, DEFAULT_CATEGORY};
pub use seed::{seed_projects, DATA_VERSION};

use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::storage::SnapshotStore;

/// In-memory project collection with category filter, selection, and
/// snapshot persistence
#[derive(Debug)]
pub struct Catalog {
    projects: Vec<Project>,
    active_category: String,
    selected: Option<String>,
    store: SnapshotStore,
}

impl Catalog {
    /// Load the catalog from the snapshot store.
    ///
    /// A missing, stale, or corrupt snapshot is replaced by the built-in
    /// seed collection, which is persisted back together with the current
    /// data version. Load problems are logged, never propagated; the
    /// catalog always comes up with at least the seed collection.
    pub fn load(store: SnapshotStore) -> Self {
        let projects = match store.load() {
            Ok(Some(projects)) => projects,
            Ok(None) => {
                info!("No snapshot found, seeding default projects");
                Self::reseed(&store)
            }
            Err(Error::VersionMismatch { found, expected }) => {
                info!(%found, %expected, "Stale data version, reseeding default projects");
                Self::reseed(&store)
            }
            Err(e) => {
                warn!(error = %e, "Failed to load snapshot, reseeding default projects");
                Self::reseed(&store)
            }
        };

        Self {
            projects,
            active_category: ALL_CATEGORIES.to_string(),
            selected: None,
            store,
        }
    }

    fn reseed(store: &SnapshotStore) -> Vec<Project> {
        let projects = seed_projects();
        if let Err(e) = store.save(&projects) {
            warn!(error = %e, "Failed to persist seed snapshot");
        }
        projects
    }

    /// All projects in insertion order
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Number of projects in the collection
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Whether the collection is empty
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Look up a project by id
    pub fn get(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Projects in the given category, preserving insertion order.
    /// The sentinel category "All" returns the whole collection.
    pub fn list(&self, category: &str) -> Vec<&Project> {
        if category == ALL_CATEGORIES {
            self.projects.iter().collect()
        } else {
            self.projects
                .iter()
                .filter(|p| p.category == category)
                .collect()
        }
    }

    /// Projects matching the active category filter
    pub fn filtered(&self) -> Vec<&Project> {
        self.list(&self.active_category)
    }

    /// The active category filter
    pub fn active_category(&self) -> &str {
        &self.active_category
    }

    /// Set the active category filter ("All" or any project category)
    pub fn set_active_category(&mut self, category: impl Into<String>) {
        self.active_category = category.into();
    }

    /// "All" followed by the distinct project categories in first-seen order
    pub fn categories(&self) -> Vec<String> {
        let mut categories = vec![ALL_CATEGORIES.to_string()];
        for project in &self.projects {
            if !categories.contains(&project.category) {
                categories.push(project.category.clone());
            }
        }
        categories
    }

    /// Set or clear the current selection.
    ///
    /// Returns `true` when the view should scroll to the top, which happens
    /// whenever a project is selected. The scroll request is a UI side
    /// effect, not catalog state.
    pub fn select(&mut self, id: Option<&str>) -> bool {
        self.selected = id.map(|s| s.to_string());
        self.selected.is_some()
    }

    /// Id of the currently selected project, if any
    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The currently selected project, if the selection resolves
    pub fn selected_project(&self) -> Option<&Project> {
        self.selected_id().and_then(|id| self.get(id))
    }

    /// Append a project to the collection and persist the snapshot.
    ///
    /// The caller is responsible for generating the id; a duplicate id is
    /// rejected without modifying the collection.
    pub fn add(&mut self, project: Project) -> Result<()> {
        if self.get(&project.id).is_some() {
            return Err(Error::DuplicateId(project.id));
        }
        self.projects.push(project);
        self.persist();
        Ok(())
    }

    /// Replace the entry whose id matches, leaving all other entries and
    /// their order unchanged. Returns `false` when no entry matches.
    pub fn update(&mut self, project: Project) -> bool {
        match self.projects.iter_mut().find(|p| p.id == project.id) {
            Some(slot) => {
                *slot = project;
                self.persist();
                true
            }
            None => false,
        }
    }

    /// Remove the entry whose id matches. Returns `false` when absent;
    /// deleting the same id twice is a no-op the second time.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.projects.len();
        self.projects.retain(|p| p.id != id);
        if self.projects.len() == before {
            return false;
        }
        if self.selected_id() == Some(id) {
            self.selected = None;
        }
        self.persist();
        true
    }

    /// Case-insensitive search over title, description, and tags,
    /// preserving insertion order
    pub fn search(&self, query: &str) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| p.matches_query(query))
            .collect()
    }

    /// Discard the collection and reseed from the built-in defaults
    pub fn reset(&mut self) {
        self.projects = Self::reseed(&self.store);
        self.selected = None;
        self.active_category = ALL_CATEGORIES.to_string();
    }

    // Full-snapshot overwrite after every mutation. Write failures are
    // logged; the in-memory mutation stands either way.
    fn persist(&self) {
        if let Err(e) = self.store.save(&self.projects) {
            warn!(error = %e, "Failed to persist snapshot");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn empty_catalog() -> (Catalog, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let store = SnapshotStore::new(temp_dir.path());
        store.save(&[]).expect("Failed to write empty snapshot");
        (Catalog::load(store), temp_dir)
    }

    fn sample(title: &str, category: &str) -> Project {
        Project::new(title, format!("{} description", title), category)
    }

    #[test]
    fn test_load_without_snapshot_seeds_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(temp_dir.path());

        let catalog = Catalog::load(store.clone());

        assert!(!catalog.is_empty());
        // The seed was persisted back
        let persisted = store.load().unwrap().unwrap();
        assert_eq!(persisted, catalog.projects());
    }

    #[test]
    fn test_add_then_list_all_contains_exactly_one_with_id() {
        let (mut catalog, _guard) = empty_catalog();
        let project = sample("Finance Tracker", "Web App");
        let id = project.id.clone();

        catalog.add(project).unwrap();

        let matching: Vec<_> = catalog
            .list(ALL_CATEGORIES)
            .into_iter()
            .filter(|p| p.id == id)
            .collect();
        assert_eq!(matching.len(), 1);
    }

    #[test]
    fn test_add_rejects_duplicate_id() {
        let (mut catalog, _guard) = empty_catalog();
        let project = sample("A", "Game");
        let mut duplicate = sample("B", "Game");
        duplicate.id = project.id.clone();

        catalog.add(project).unwrap();
        let err = catalog.add(duplicate).unwrap_err();

        assert!(matches!(err, Error::DuplicateId(_)));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_update_replaces_matching_entry_only() {
        let (mut catalog, _guard) = empty_catalog();
        let first = sample("First", "Game");
        let second = sample("Second", "Web App");
        let third = sample("Third", "API");
        catalog.add(first.clone()).unwrap();
        catalog.add(second.clone()).unwrap();
        catalog.add(third.clone()).unwrap();

        let mut replacement = second.clone();
        replacement.title = "Second, revised".to_string();
        replacement.featured = true;
        assert!(catalog.update(replacement.clone()));

        let titles: Vec<_> = catalog.projects().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second, revised", "Third"]);
        assert_eq!(catalog.get(&second.id), Some(&replacement));
        assert_eq!(catalog.get(&first.id), Some(&first));
    }

    #[test]
    fn test_update_missing_id_reports_false() {
        let (mut catalog, _guard) = empty_catalog();
        catalog.add(sample("Only", "Game")).unwrap();

        assert!(!catalog.update(sample("Unrelated", "Game")));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_delete_removes_exactly_one_and_repeats_as_noop() {
        let (mut catalog, _guard) = empty_catalog();
        let keep = sample("Keep", "Game");
        let drop = sample("Drop", "Game");
        let drop_id = drop.id.clone();
        catalog.add(keep.clone()).unwrap();
        catalog.add(drop).unwrap();

        assert!(catalog.delete(&drop_id));
        assert_eq!(catalog.len(), 1);
        assert!(catalog.get(&keep.id).is_some());

        // Second delete of the same id is a no-op
        assert!(!catalog.delete(&drop_id));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_delete_clears_selection_of_deleted_project() {
        let (mut catalog, _guard) = empty_catalog();
        let project = sample("Selected", "Game");
        let id = project.id.clone();
        catalog.add(project).unwrap();

        catalog.select(Some(&id));
        assert!(catalog.selected_project().is_some());

        catalog.delete(&id);
        assert!(catalog.selected_id().is_none());
    }

    #[test]
    fn test_list_filters_by_category_preserving_order() {
        let (mut catalog, _guard) = empty_catalog();
        catalog.add(sample("G1", "Game")).unwrap();
        catalog.add(sample("W1", "Web App")).unwrap();
        catalog.add(sample("G2", "Game")).unwrap();

        let games: Vec<_> = catalog.list("Game").iter().map(|p| p.title.clone()).collect();
        assert_eq!(games, vec!["G1", "G2"]);

        assert_eq!(catalog.list(ALL_CATEGORIES).len(), 3);
        assert!(catalog.list("Mobile").is_empty());
    }

    #[test]
    fn test_filtered_follows_active_category() {
        let (mut catalog, _guard) = empty_catalog();
        catalog.add(sample("G1", "Game")).unwrap();
        catalog.add(sample("W1", "Web App")).unwrap();

        assert_eq!(catalog.filtered().len(), 2);

        catalog.set_active_category("Web App");
        let titles: Vec<_> = catalog.filtered().iter().map(|p| p.title.clone()).collect();
        assert_eq!(titles, vec!["W1"]);
    }

    #[test]
    fn test_categories_are_all_plus_first_seen_order() {
        let (mut catalog, _guard) = empty_catalog();
        catalog.add(sample("G1", "Game")).unwrap();
        catalog.add(sample("W1", "Web App")).unwrap();
        catalog.add(sample("G2", "Game")).unwrap();
        catalog.add(sample("M1", "Mobile")).unwrap();

        assert_eq!(catalog.categories(), vec!["All", "Game", "Web App", "Mobile"]);
    }

    #[test]
    fn test_select_requests_scroll_only_for_some() {
        let (mut catalog, _guard) = empty_catalog();
        let project = sample("P", "Game");
        let id = project.id.clone();
        catalog.add(project).unwrap();

        assert!(catalog.select(Some(&id)));
        assert_eq!(catalog.selected_id(), Some(id.as_str()));

        assert!(!catalog.select(None));
        assert!(catalog.selected_id().is_none());
    }

    #[test]
    fn test_mutations_round_trip_through_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(temp_dir.path());
        store.save(&[]).unwrap();

        let mut catalog = Catalog::load(store.clone());
        let project = sample("Persisted", "API");
        let id = project.id.clone();
        catalog.add(project).unwrap();

        // A fresh catalog over the same store sees the same collection
        let reloaded = Catalog::load(store);
        assert_eq!(reloaded.projects(), catalog.projects());
        assert!(reloaded.get(&id).is_some());
    }

    #[test]
    fn test_mutations_stand_when_snapshot_write_fails() {
        let temp_dir = TempDir::new().unwrap();
        // A regular file in the store path makes directory creation fail,
        // so every save errors out
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();
        let store = SnapshotStore::new(blocker.join("store"));

        let mut catalog = Catalog::load(store);
        let seeded = catalog.len();
        assert!(seeded > 0);

        let project = sample("Unsaved", "Game");
        let id = project.id.clone();
        catalog.add(project).unwrap();
        assert_eq!(catalog.len(), seeded + 1);
        assert!(catalog.get(&id).is_some());

        assert!(catalog.delete(&id));
        assert_eq!(catalog.len(), seeded);
    }

    #[test]
    fn test_search_is_case_insensitive_over_fields() {
        let (mut catalog, _guard) = empty_catalog();
        catalog
            .add(sample("Finance Tracker", "Web App").with_tags(vec!["Django".to_string()]))
            .unwrap();
        catalog.add(sample("Asteroids", "Game")).unwrap();

        assert_eq!(catalog.search("finance").len(), 1);
        assert_eq!(catalog.search("DJANGO").len(), 1);
        assert_eq!(catalog.search("").len(), 2);
        assert!(catalog.search("nothing-matches").is_empty());
    }

    #[test]
    fn test_reset_restores_seed_collection() {
        let (mut catalog, _guard) = empty_catalog();
        catalog.add(sample("Mine", "Game")).unwrap();

        catalog.reset();

        assert_eq!(catalog.len(), seed_projects().len());
        assert!(catalog.search("Mine").is_empty());
        assert_eq!(catalog.active_category(), ALL_CATEGORIES);
    }
}
