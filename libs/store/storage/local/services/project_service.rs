use deskpad_store_core::{Project, ProjectId, ProjectInput, ProjectOrder, ProjectPatch, StoreResult};

use crate::storage::local::managers::document_manager::DocumentManager;
use crate::storage::local::managers::meta_manager::MetaManager;
use crate::storage::local::managers::project_manager::ProjectManager;

/// Implements the project CRUD semantics on top of the document managers.
/// Every method leaves the database either fully updated or untouched.
pub struct ProjectService<'a> {
    meta_manager: MetaManager<'a>,
    project_manager: ProjectManager<'a>,
}

impl<'a> ProjectService<'a> {
    pub fn load(documents: &'a DocumentManager) -> Self {
        Self {
            meta_manager: MetaManager::load(documents),
            project_manager: ProjectManager::load(documents),
        }
    }

    pub fn create_project(&self, input: ProjectInput) -> StoreResult<Project> {
        input.validate()?;

        let mut meta = self.meta_manager.get_document()?;
        let project_id = meta.next_project_id.max(1);

        let project = Project {
            id: project_id,
            name: input.name,
            color: input.color,
            datetime: input.datetime,
        };

        self.project_manager.write_project(&project)?;

        meta.next_project_id = project_id + 1;
        meta.project_refs.push(project_id);

        if let Err(err) = self.meta_manager.set_document(&meta) {
            // Roll the record back so a failed create leaves no trace.
            let _ = self.project_manager.remove_project(project_id);
            return Err(err);
        }

        Ok(project)
    }

    pub fn get_project(&self, project_id: ProjectId) -> StoreResult<Project> {
        self.project_manager.get_project(project_id)
    }

    pub fn list_projects(&self, order: ProjectOrder) -> StoreResult<Vec<Project>> {
        let meta = self.meta_manager.get_document()?;
        let mut projects = self.project_manager.get_projects_by_ids(&meta.project_refs)?;

        match order {
            ProjectOrder::Insertion => {}
            ProjectOrder::Name => projects.sort_by(|a, b| a.name.cmp(&b.name)),
            ProjectOrder::Color => projects.sort_by(|a, b| a.color.cmp(&b.color)),
            ProjectOrder::Datetime => projects.sort_by_key(|project| project.datetime),
        }

        Ok(projects)
    }

    pub fn update_project(&self, project_id: ProjectId, patch: ProjectPatch) -> StoreResult<Project> {
        let current = self.project_manager.get_project(project_id)?;
        let updated = patch.merge_with_project(&current);

        self.project_manager.write_project(&updated)?;

        Ok(updated)
    }

    pub fn delete_project(&self, project_id: ProjectId) -> StoreResult<()> {
        // Deleting an absent id is not an error.
        if self.project_manager.remove_project(project_id)? {
            self.meta_manager.delete_project_reference(project_id)?;
        }

        Ok(())
    }
}
