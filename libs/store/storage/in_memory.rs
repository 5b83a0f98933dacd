use std::collections::BTreeMap;
use std::sync::Mutex;

use serde_derive::Deserialize;

use deskpad_store_core::{
    PinFuture, Project, ProjectId, ProjectInput, ProjectOrder, ProjectPatch, StorageConfig, Store,
    StoreBox, StoreError, StoreResult, StoreState,
};

/// This storage type is used for testing, data is not persisted to disk but
/// only present in memory
pub struct InMemoryStorage {
    config: InMemoryStorageConfig,
    collection: Mutex<InMemoryCollection>,
}

#[derive(Debug, Deserialize, Default)]
pub struct InMemoryStorageConfig {}

#[derive(Default)]
struct InMemoryCollection {
    state: StoreState,
    next_project_id: ProjectId,
    // Ids are handed out in increasing order, so id order is insertion order.
    projects: BTreeMap<ProjectId, Project>,
}

impl StorageConfig for InMemoryStorageConfig {
    type Storage = InMemoryStorage;

    fn try_into_storage(self) -> eyre::Result<StoreBox> {
        Ok(StoreBox::new(InMemoryStorage::new(self)))
    }
}

impl InMemoryStorage {
    pub fn new(config: InMemoryStorageConfig) -> Self {
        InMemoryStorage {
            config,
            collection: Mutex::default(),
        }
    }

    fn with_collection<T>(
        &self,
        f: impl FnOnce(&mut InMemoryCollection) -> StoreResult<T>,
    ) -> StoreResult<T> {
        let mut collection = self.collection.lock().map_err(StoreError::operation_failed)?;
        f(&mut collection)
    }

    fn with_ready_collection<T>(
        &self,
        f: impl FnOnce(&mut InMemoryCollection) -> StoreResult<T>,
    ) -> StoreResult<T> {
        self.with_collection(|collection| {
            if collection.state != StoreState::Ready {
                return Err(StoreError::StoreNotReady(collection.state));
            }
            f(collection)
        })
    }
}

impl Store for InMemoryStorage {
    fn debug_message(&self) {
        println!("In memory storage\nconfig: {:?}", self.config);
    }

    fn state(&self) -> StoreState {
        self.collection
            .lock()
            .map(|collection| collection.state)
            .unwrap_or(StoreState::Failed)
    }

    fn init(&self) -> PinFuture<StoreResult<()>> {
        Box::pin(async move {
            self.with_collection(|collection| {
                collection.state = StoreState::Ready;
                if collection.next_project_id == 0 {
                    collection.next_project_id = 1;
                }
                Ok(())
            })
        })
    }

    fn create_project(&self, input: ProjectInput) -> PinFuture<StoreResult<Project>> {
        Box::pin(async move {
            self.with_ready_collection(|collection| {
                input.validate()?;

                let project_id = collection.next_project_id;
                let project = Project {
                    id: project_id,
                    name: input.name,
                    color: input.color,
                    datetime: input.datetime,
                };

                collection.projects.insert(project_id, project.clone());
                collection.next_project_id = project_id + 1;

                Ok(project)
            })
        })
    }

    fn get_project(&self, project_id: ProjectId) -> PinFuture<StoreResult<Project>> {
        Box::pin(async move {
            self.with_ready_collection(|collection| {
                collection
                    .projects
                    .get(&project_id)
                    .cloned()
                    .ok_or(StoreError::NotFound(project_id))
            })
        })
    }

    fn list_projects(&self, order: ProjectOrder) -> PinFuture<StoreResult<Vec<Project>>> {
        Box::pin(async move {
            self.with_ready_collection(|collection| {
                let mut projects = collection.projects.values().cloned().collect::<Vec<_>>();

                match order {
                    ProjectOrder::Insertion => {}
                    ProjectOrder::Name => projects.sort_by(|a, b| a.name.cmp(&b.name)),
                    ProjectOrder::Color => projects.sort_by(|a, b| a.color.cmp(&b.color)),
                    ProjectOrder::Datetime => projects.sort_by_key(|project| project.datetime),
                }

                Ok(projects)
            })
        })
    }

    fn update_project(
        &self,
        project_id: ProjectId,
        patch: ProjectPatch,
    ) -> PinFuture<StoreResult<Project>> {
        Box::pin(async move {
            self.with_ready_collection(|collection| {
                let current = collection
                    .projects
                    .get(&project_id)
                    .ok_or(StoreError::NotFound(project_id))?;

                let updated = patch.merge_with_project(current);
                collection.projects.insert(project_id, updated.clone());

                Ok(updated)
            })
        })
    }

    fn delete_project(&self, project_id: ProjectId) -> PinFuture<StoreResult<()>> {
        Box::pin(async move {
            self.with_ready_collection(|collection| {
                // Deleting an absent id is not an error.
                collection.projects.remove(&project_id);
                Ok(())
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn project_input(name: &str) -> ProjectInput {
        ProjectInput {
            name: name.to_string(),
            color: "#38b5fc".to_string(),
            datetime: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let storage = InMemoryStorage::new(InMemoryStorageConfig::default());
        storage.init().await.unwrap();

        let created = storage.create_project(project_input("demo")).await.unwrap();
        assert_eq!(created.id, 1);

        let fetched = storage.get_project(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_operations_require_init() {
        let storage = InMemoryStorage::new(InMemoryStorageConfig::default());

        let err = storage.get_project(1).await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::StoreNotReady(StoreState::Unopened)
        ));
    }

    #[tokio::test]
    async fn test_list_in_insertion_order() {
        let storage = InMemoryStorage::new(InMemoryStorageConfig::default());
        storage.init().await.unwrap();

        storage.create_project(project_input("bravo")).await.unwrap();
        storage.create_project(project_input("alpha")).await.unwrap();

        let projects = storage.list_projects(ProjectOrder::default()).await.unwrap();
        let names = projects.into_iter().map(|p| p.name).collect::<Vec<_>>();
        assert_eq!(names, vec!["bravo", "alpha"]);
    }
}
