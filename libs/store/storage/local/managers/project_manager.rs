use deskpad_store_core::{Project, ProjectId, StoreError, StoreResult};

use super::document_manager::DocumentManager;

/// Name of the collection holding one document per project record.
pub const PROJECTS_COLLECTION: &str = "projects";

pub struct ProjectManager<'a> {
    documents: &'a DocumentManager,
}

impl<'a> ProjectManager<'a> {
    pub fn load(documents: &'a DocumentManager) -> Self {
        Self { documents }
    }

    fn document_name(project_id: ProjectId) -> String {
        format!("{PROJECTS_COLLECTION}/{project_id}")
    }

    pub fn try_get_project(&self, project_id: ProjectId) -> StoreResult<Option<Project>> {
        self.documents.read(&Self::document_name(project_id))
    }

    pub fn get_project(&self, project_id: ProjectId) -> StoreResult<Project> {
        self.try_get_project(project_id)?
            .ok_or(StoreError::NotFound(project_id))
    }

    pub fn get_projects_by_ids(&self, project_ids: &[ProjectId]) -> StoreResult<Vec<Project>> {
        project_ids
            .iter()
            .map(|project_id| self.get_project(*project_id))
            .collect()
    }

    pub fn write_project(&self, project: &Project) -> StoreResult<()> {
        self.documents
            .write(&Self::document_name(project.id), project)
    }

    /// Remove a project document, returns whether it existed
    pub fn remove_project(&self, project_id: ProjectId) -> StoreResult<bool> {
        self.documents.remove(&Self::document_name(project_id))
    }
}
