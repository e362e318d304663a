//! Showcase view state
//!
//! Wraps the catalog in the navigation state the TUI needs: which category
//! tab is active, which row the cursor is on, and whether the detail view is
//! open. The showcase never mutates the project collection.

use folio_core::catalog::{Catalog, Project};
use folio_core::config::Config;

/// Which screen the showcase is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    List,
    Detail,
}

/// Showcase application state
pub struct App {
    catalog: Catalog,
    pub config: Config,
    pub view: View,
    pub category_index: usize,
    pub cursor: usize,
    pub detail_scroll: u16,
    categories: Vec<String>,
}

impl App {
    pub fn new(catalog: Catalog, config: Config) -> Self {
        let categories = catalog.categories();
        Self {
            catalog,
            config,
            view: View::List,
            category_index: 0,
            cursor: 0,
            detail_scroll: 0,
            categories,
        }
    }

    /// Category tabs, "All" first
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Projects under the active category tab
    pub fn visible(&self) -> Vec<&Project> {
        self.catalog.filtered()
    }

    /// The project the cursor is on, if any
    pub fn project_under_cursor(&self) -> Option<&Project> {
        self.visible().get(self.cursor).copied()
    }

    /// The project open in the detail view
    pub fn open_project(&self) -> Option<&Project> {
        self.catalog.selected_project()
    }

    pub fn next_category(&mut self) {
        self.category_index = (self.category_index + 1) % self.categories.len();
        self.apply_category();
    }

    pub fn prev_category(&mut self) {
        self.category_index = self
            .category_index
            .checked_sub(1)
            .unwrap_or(self.categories.len() - 1);
        self.apply_category();
    }

    fn apply_category(&mut self) {
        let category = self.categories[self.category_index].clone();
        self.catalog.set_active_category(category);
        self.cursor = 0;
    }

    pub fn move_down(&mut self) {
        let len = self.visible().len();
        if len > 0 && self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Open the detail view for the project under the cursor. Selecting
    /// requests a scroll to the top, so the detail viewport resets.
    pub fn open_detail(&mut self) {
        let id = match self.project_under_cursor() {
            Some(project) => project.id.clone(),
            None => return,
        };
        if self.catalog.select(Some(&id)) {
            self.detail_scroll = 0;
        }
        self.view = View::Detail;
    }

    /// Return to the list, clearing the selection
    pub fn close_detail(&mut self) {
        self.catalog.select(None);
        self.view = View::List;
    }

    pub fn scroll_detail_down(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_add(1);
    }

    pub fn scroll_detail_up(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::commands::project::{self, ProjectDraft};
    use folio_core::storage::SnapshotStore;
    use tempfile::TempDir;

    fn app_with(projects: &[(&str, &str)]) -> (App, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let store = SnapshotStore::new(temp_dir.path());
        store.save(&[]).expect("Failed to write empty snapshot");
        let mut catalog = Catalog::load(store);
        for (title, category) in projects {
            project::create(
                &mut catalog,
                ProjectDraft {
                    title: title.to_string(),
                    description: format!("{} description", title),
                    category: category.to_string(),
                    ..Default::default()
                },
            )
            .expect("Failed to create project");
        }
        (App::new(catalog, Config::default()), temp_dir)
    }

    #[test]
    fn test_starts_on_all_with_everything_visible() {
        let (app, _guard) = app_with(&[("G", "Game"), ("W", "Web App")]);

        assert_eq!(app.categories()[0], "All");
        assert_eq!(app.visible().len(), 2);
        assert_eq!(app.view, View::List);
    }

    #[test]
    fn test_category_tabs_cycle_and_reset_cursor() {
        let (mut app, _guard) = app_with(&[("G1", "Game"), ("W1", "Web App"), ("G2", "Game")]);
        app.move_down();
        assert_eq!(app.cursor, 1);

        app.next_category(); // Game
        assert_eq!(app.cursor, 0);
        let titles: Vec<_> = app.visible().iter().map(|p| p.title.clone()).collect();
        assert_eq!(titles, vec!["G1", "G2"]);

        app.next_category(); // Web App
        assert_eq!(app.visible().len(), 1);

        app.next_category(); // wraps back to All
        assert_eq!(app.visible().len(), 3);

        app.prev_category(); // wraps to Web App
        assert_eq!(app.visible().len(), 1);
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let (mut app, _guard) = app_with(&[("A", "Game"), ("B", "Game")]);

        app.move_up();
        assert_eq!(app.cursor, 0);

        app.move_down();
        app.move_down();
        app.move_down();
        assert_eq!(app.cursor, 1);
    }

    #[test]
    fn test_open_detail_selects_and_resets_scroll() {
        let (mut app, _guard) = app_with(&[("A", "Game"), ("B", "Game")]);
        app.move_down();
        app.detail_scroll = 7;

        app.open_detail();

        assert_eq!(app.view, View::Detail);
        assert_eq!(app.detail_scroll, 0);
        assert_eq!(app.open_project().unwrap().title, "B");
    }

    #[test]
    fn test_close_detail_clears_selection() {
        let (mut app, _guard) = app_with(&[("A", "Game")]);
        app.open_detail();
        assert!(app.open_project().is_some());

        app.close_detail();

        assert_eq!(app.view, View::List);
        assert!(app.open_project().is_none());
    }

    #[test]
    fn test_open_detail_with_empty_list_is_noop() {
        let (mut app, _guard) = app_with(&[]);

        app.open_detail();

        assert_eq!(app.view, View::List);
        assert!(app.open_project().is_none());
    }
}
