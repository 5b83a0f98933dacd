use chrono::{DateTime, Utc};
use deskpad_store_core::{Project, ProjectId, ProjectInput, ProjectOrder, ProjectPatch, StoreBox};

pub mod config;
mod load;
mod utils;

pub use load::{load, load_core, load_profile};

pub struct Core {
    store: StoreBox,
    /// Ok - found | Err - not found with error reason
    found_config_file: Result<(), eyre::Error>,
}

pub struct CreateProjectInput {
    pub name: String,
    pub color: String,
    /// Stamped with the current time when not provided
    pub datetime: Option<DateTime<Utc>>,
}

impl Core {
    pub async fn initialize(&self) -> eyre::Result<()> {
        self.store.init().await?;
        Ok(())
    }

    pub async fn create_project(&self, input: CreateProjectInput) -> eyre::Result<Project> {
        let project = self
            .store
            .create_project(ProjectInput {
                name: input.name,
                color: input.color,
                datetime: input.datetime.unwrap_or_else(utils::now_utc),
            })
            .await?;

        Ok(project)
    }

    pub async fn get_project(&self, project_id: ProjectId) -> eyre::Result<Project> {
        Ok(self.store.get_project(project_id).await?)
    }

    pub async fn list_projects(&self, order: ProjectOrder) -> eyre::Result<Vec<Project>> {
        Ok(self.store.list_projects(order).await?)
    }

    pub async fn update_project(
        &self,
        project_id: ProjectId,
        patch: ProjectPatch,
    ) -> eyre::Result<Project> {
        Ok(self.store.update_project(project_id, patch).await?)
    }

    pub async fn delete_project(&self, project_id: ProjectId) -> eyre::Result<()> {
        Ok(self.store.delete_project(project_id).await?)
    }

    pub fn get_inner_store(&self) -> &StoreBox {
        &self.store
    }

    pub fn has_found_config_file(&self) -> &Result<(), eyre::Error> {
        &self.found_config_file
    }
}
