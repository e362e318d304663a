//! Portfolio project records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category used when every project should be listed
pub const ALL_CATEGORIES: &str = "All";

/// Fallback category for projects created without one
pub const DEFAULT_CATEGORY: &str = "Other";

/// A portfolio project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Unique project identifier
    pub id: String,
    /// Project title
    pub title: String,
    /// Short description shown in list views
    pub description: String,
    /// Optional long-form description for the detail view
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    /// Ordered tags; list views truncate to the first few
    #[serde(default)]
    pub tags: Vec<String>,
    /// Category (open string enumeration, e.g. "Web App", "Mobile")
    pub category: String,
    /// Optional cover image reference (path or URL)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Optional source repository link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
    /// Optional live demo link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    /// Whether the project is highlighted on the showcase
    #[serde(default)]
    pub featured: bool,
    /// When the project was created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// When the project was last updated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Project {
    /// Create a new project with the given title, description, and category
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            description: description.into(),
            long_description: None,
            tags: Vec::new(),
            category: category.into(),
            image: None,
            repo_url: None,
            live_url: None,
            featured: false,
            created_at: Some(Utc::now()),
            updated_at: None,
        }
    }

    /// Create a placeholder project the way the admin "add" action does:
    /// fresh id, default field values, creation timestamp set to now
    pub fn placeholder() -> Self {
        let mut project = Project::new("New Project", "Project description", DEFAULT_CATEGORY);
        project.tags = vec!["Tag 1".to_string(), "Tag 2".to_string()];
        project
    }

    /// Set the long-form description
    pub fn with_long_description(mut self, long_description: impl Into<String>) -> Self {
        self.long_description = Some(long_description.into());
        self
    }

    /// Set the tags
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Set the cover image reference
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Set the source repository link
    pub fn with_repo_url(mut self, repo_url: impl Into<String>) -> Self {
        self.repo_url = Some(repo_url.into());
        self
    }

    /// Set the live demo link
    pub fn with_live_url(mut self, live_url: impl Into<String>) -> Self {
        self.live_url = Some(live_url.into());
        self
    }

    /// Mark the project as featured
    pub fn with_featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    /// Tags as shown in list views: the first `shown` tags, plus an
    /// overflow marker like "+2" when there are more
    pub fn display_tags(&self, shown: usize) -> Vec<String> {
        let mut display: Vec<String> = self.tags.iter().take(shown).cloned().collect();
        if self.tags.len() > shown {
            display.push(format!("+{}", self.tags.len() - shown));
        }
        display
    }

    /// Case-insensitive match against title, description, and tags
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        if needle.trim().is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_project_has_unique_id_and_timestamp() {
        let a = Project::new("A", "first", "Web App");
        let b = Project::new("B", "second", "Web App");

        assert_ne!(a.id, b.id);
        assert!(a.created_at.is_some());
        assert!(a.updated_at.is_none());
    }

    #[test]
    fn test_placeholder_defaults() {
        let project = Project::placeholder();

        assert_eq!(project.title, "New Project");
        assert_eq!(project.description, "Project description");
        assert_eq!(project.category, DEFAULT_CATEGORY);
        assert_eq!(project.tags, vec!["Tag 1", "Tag 2"]);
        assert!(!project.featured);
    }

    #[test]
    fn test_display_tags_truncates_with_overflow() {
        let project = Project::new("T", "d", "Game").with_tags(vec![
            "Rust".to_string(),
            "ratatui".to_string(),
            "CLI".to_string(),
            "Games".to_string(),
            "Physics".to_string(),
        ]);

        assert_eq!(project.display_tags(3), vec!["Rust", "ratatui", "CLI", "+2"]);
    }

    #[test]
    fn test_display_tags_no_overflow_when_few() {
        let project =
            Project::new("T", "d", "Game").with_tags(vec!["Rust".to_string(), "CLI".to_string()]);

        assert_eq!(project.display_tags(3), vec!["Rust", "CLI"]);
    }

    #[test]
    fn test_matches_query_title_description_tags() {
        let project = Project::new("Finance Tracker", "expense tracking app", "Web App")
            .with_tags(vec!["Django".to_string(), "PostgreSQL".to_string()]);

        assert!(project.matches_query("finance"));
        assert!(project.matches_query("EXPENSE"));
        assert!(project.matches_query("postgres"));
        assert!(!project.matches_query("kubernetes"));
    }

    #[test]
    fn test_json_round_trip_skips_empty_optionals() {
        let project = Project::new("T", "d", "API");
        let json = serde_json::to_string(&project).unwrap();

        assert!(!json.contains("long_description"));
        assert!(!json.contains("repo_url"));

        let back: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(back, project);
    }
}
