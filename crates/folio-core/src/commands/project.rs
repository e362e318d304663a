//! Project management commands
//!
//! The admin surface over the catalog: create, edit, delete, and look up
//! projects. These are the operations the CLI binds to; the catalog itself
//! stays policy-free.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Project};
use crate::error::{Error, Result};

/// Input for creating a project. The id is generated here, never supplied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub long_description: Option<String>,
    pub tags: Vec<String>,
    pub category: String,
    pub image: Option<String>,
    pub repo_url: Option<String>,
    pub live_url: Option<String>,
    pub featured: bool,
}

/// Partial update applied to an existing project. `None` leaves the field
/// untouched; tags replace the whole list when present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub long_description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub repo_url: Option<String>,
    pub live_url: Option<String>,
    pub featured: Option<bool>,
}

/// Create a project from a draft and add it to the catalog
pub fn create(catalog: &mut Catalog, draft: ProjectDraft) -> Result<Project> {
    if draft.title.trim().is_empty() {
        return Err(Error::InvalidInput("Project title must not be empty".to_string()));
    }
    if draft.category.trim().is_empty() {
        return Err(Error::InvalidInput(
            "Project category must not be empty".to_string(),
        ));
    }

    let mut project = Project::new(draft.title, draft.description, draft.category);
    project.long_description = draft.long_description;
    project.tags = draft.tags;
    project.image = draft.image;
    project.repo_url = draft.repo_url;
    project.live_url = draft.live_url;
    project.featured = draft.featured;

    let created = project.clone();
    catalog.add(project)?;
    Ok(created)
}

/// Append a placeholder project with default field values, the admin
/// "add project" action
pub fn create_placeholder(catalog: &mut Catalog) -> Result<Project> {
    let project = Project::placeholder();
    let created = project.clone();
    catalog.add(project)?;
    Ok(created)
}

/// Apply a patch to the project with the given id and save it back as a
/// full replace
pub fn edit(catalog: &mut Catalog, id: &str, patch: ProjectPatch) -> Result<Project> {
    let mut project = catalog
        .get(id)
        .cloned()
        .ok_or_else(|| Error::ProjectNotFound(id.to_string()))?;

    if let Some(title) = patch.title {
        project.title = title;
    }
    if let Some(description) = patch.description {
        project.description = description;
    }
    if let Some(long_description) = patch.long_description {
        project.long_description = Some(long_description);
    }
    if let Some(tags) = patch.tags {
        project.tags = tags;
    }
    if let Some(category) = patch.category {
        if category.trim().is_empty() {
            return Err(Error::InvalidInput(
                "Project category must not be empty".to_string(),
            ));
        }
        project.category = category;
    }
    if let Some(image) = patch.image {
        project.image = Some(image);
    }
    if let Some(repo_url) = patch.repo_url {
        project.repo_url = Some(repo_url);
    }
    if let Some(live_url) = patch.live_url {
        project.live_url = Some(live_url);
    }
    if let Some(featured) = patch.featured {
        project.featured = featured;
    }
    project.updated_at = Some(Utc::now());

    let edited = project.clone();
    if !catalog.update(project) {
        return Err(Error::ProjectNotFound(id.to_string()));
    }
    Ok(edited)
}

/// Delete the project with the given id
pub fn remove(catalog: &mut Catalog, id: &str) -> Result<()> {
    if !catalog.delete(id) {
        return Err(Error::ProjectNotFound(id.to_string()));
    }
    Ok(())
}

/// Look up a project by id, falling back to an exact title match
pub fn find(catalog: &Catalog, id_or_title: &str) -> Result<Project> {
    if let Some(project) = catalog.get(id_or_title) {
        return Ok(project.clone());
    }
    catalog
        .projects()
        .iter()
        .find(|p| p.title == id_or_title)
        .cloned()
        .ok_or_else(|| Error::ProjectNotFound(id_or_title.to_string()))
}
