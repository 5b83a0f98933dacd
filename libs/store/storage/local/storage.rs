use std::path::PathBuf;
use std::sync::RwLock;

use super::config::{FileFormatType, LocalStorageConfig};
use super::managers::document_manager::DocumentManager;
use super::schema;
use super::services::project_service::ProjectService;
use crate::document_parser::{JsonParser, TomlParser, YamlParser};
use crate::utils::database_lock::DatabaseLock;
use deskpad_store_core::{
    PinFuture, Project, ProjectId, ProjectInput, ProjectOrder, ProjectPatch, StorageConfig, Store,
    StoreBox, StoreError, StoreResult, StoreState,
};

/// Save project records as documents inside a local database directory
pub struct LocalStorage {
    config: LocalStorageConfig,
    documents: DocumentManager,
    state: RwLock<StoreState>,
}

impl LocalStorage {
    pub fn try_new(config: LocalStorageConfig) -> eyre::Result<Self> {
        let database_path = PathBuf::from(config.get_database_path()?);

        let document_parser = match config.get_file_format_type()? {
            FileFormatType::Json => JsonParser::get(),
            FileFormatType::Yaml => YamlParser::get(),
            FileFormatType::Toml => TomlParser::get(),
        };

        let documents = DocumentManager::builder()
            .document_parser(document_parser)
            .database_path(database_path)
            .build();

        Ok(Self {
            config,
            documents,
            state: RwLock::new(StoreState::Unopened),
        })
    }

    fn set_state(&self, state: StoreState) -> StoreResult<()> {
        *self.state.write().map_err(StoreError::operation_failed)? = state;
        Ok(())
    }

    fn ensure_ready(&self) -> StoreResult<()> {
        let state = *self.state.read().map_err(StoreError::operation_failed)?;

        if state != StoreState::Ready {
            return Err(StoreError::StoreNotReady(state));
        }

        Ok(())
    }

    /// Take the database-wide advisory lock, serializing writers across
    /// processes for the duration of the returned guard.
    fn lock_database(&self) -> StoreResult<DatabaseLock> {
        let lock = DatabaseLock::try_new(
            self.documents.database_path(),
            &self.config.get_database_name(),
        )
        .map_err(StoreError::operation_failed)?;

        lock.lock_exclusive().map_err(StoreError::operation_failed)?;

        Ok(lock)
    }

    fn open_database(&self) -> StoreResult<()> {
        let database_path = self.documents.database_path();

        if database_path.exists() && !database_path.is_dir() {
            return Err(StoreError::storage_unavailable(format!(
                "database path '{}' is not a directory",
                database_path.display()
            )));
        }

        std::fs::create_dir_all(database_path).map_err(StoreError::storage_unavailable)?;

        let _lock = self.lock_database()?;
        schema::run_migrations(&self.documents)
    }
}

impl StorageConfig for LocalStorageConfig {
    type Storage = LocalStorage;

    fn try_into_storage(self) -> eyre::Result<StoreBox> {
        Ok(StoreBox::new(LocalStorage::try_new(self)?))
    }
}

impl Store for LocalStorage {
    fn debug_message(&self) {
        println!("Local storage\nconfig: {:?}", self.config);
    }

    fn state(&self) -> StoreState {
        self.state
            .read()
            .map(|state| *state)
            .unwrap_or(StoreState::Failed)
    }

    fn init(&self) -> PinFuture<StoreResult<()>> {
        Box::pin(async move {
            self.set_state(StoreState::Opening)?;

            match self.open_database() {
                Ok(()) => {
                    self.set_state(StoreState::Ready)?;
                    Ok(())
                }
                Err(err) => {
                    self.set_state(StoreState::Failed)?;
                    Err(err)
                }
            }
        })
    }

    fn create_project(&self, input: ProjectInput) -> PinFuture<StoreResult<Project>> {
        Box::pin(async move {
            self.ensure_ready()?;
            let _lock = self.lock_database()?;

            ProjectService::load(&self.documents).create_project(input)
        })
    }

    fn get_project(&self, project_id: ProjectId) -> PinFuture<StoreResult<Project>> {
        Box::pin(async move {
            self.ensure_ready()?;

            ProjectService::load(&self.documents).get_project(project_id)
        })
    }

    fn list_projects(&self, order: ProjectOrder) -> PinFuture<StoreResult<Vec<Project>>> {
        Box::pin(async move {
            self.ensure_ready()?;

            ProjectService::load(&self.documents).list_projects(order)
        })
    }

    fn update_project(
        &self,
        project_id: ProjectId,
        patch: ProjectPatch,
    ) -> PinFuture<StoreResult<Project>> {
        Box::pin(async move {
            self.ensure_ready()?;
            let _lock = self.lock_database()?;

            ProjectService::load(&self.documents).update_project(project_id, patch)
        })
    }

    fn delete_project(&self, project_id: ProjectId) -> PinFuture<StoreResult<()>> {
        Box::pin(async move {
            self.ensure_ready()?;
            let _lock = self.lock_database()?;

            ProjectService::load(&self.documents).delete_project(project_id)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::local::models::meta_document::{MetaDocument, META_DOCUMENT_NAME};
    use chrono::{DateTime, Utc};
    use tempfile::{tempdir, TempDir};

    fn build_simple_storage() -> (TempDir, LocalStorage) {
        let temp = tempdir().unwrap();
        let storage = build_storage_at(&temp);
        (temp, storage)
    }

    fn build_storage_at(temp: &TempDir) -> LocalStorage {
        let config = LocalStorageConfig {
            database_name: None,
            database_path: Some(
                temp.path()
                    .join("database")
                    .to_str()
                    .unwrap()
                    .to_string(),
            ),
            file_format_type: None,
        };

        LocalStorage::try_new(config).unwrap()
    }

    fn datetime(raw: &str) -> DateTime<Utc> {
        raw.parse().unwrap()
    }

    fn project_input(name: &str, color: &str) -> ProjectInput {
        ProjectInput {
            name: name.to_string(),
            color: color.to_string(),
            datetime: datetime("2024-01-01T00:00:00Z"),
        }
    }

    #[tokio::test]
    async fn test_create_then_get_returns_equal_record() {
        let (_temp, storage) = build_simple_storage();
        storage.init().await.unwrap();

        let created = storage
            .create_project(project_input("demo", "#38b5fc"))
            .await
            .unwrap();

        assert_eq!(
            created,
            Project {
                id: 1,
                name: "demo".to_string(),
                color: "#38b5fc".to_string(),
                datetime: datetime("2024-01-01T00:00:00Z"),
            }
        );

        let fetched = storage.get_project(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_ids_are_strictly_increasing_and_never_reused() {
        let temp = tempdir().unwrap();
        let storage = build_storage_at(&temp);
        storage.init().await.unwrap();

        let first = storage
            .create_project(project_input("one", "blue"))
            .await
            .unwrap();
        let second = storage
            .create_project(project_input("two", "green"))
            .await
            .unwrap();
        let third = storage
            .create_project(project_input("three", "red"))
            .await
            .unwrap();

        assert_eq!((first.id, second.id, third.id), (1, 2, 3));

        // Deleting the newest record must not free its id, even across a
        // restart of the store.
        storage.delete_project(third.id).await.unwrap();

        let reopened = build_storage_at(&temp);
        reopened.init().await.unwrap();

        let fourth = reopened
            .create_project(project_input("four", "pink"))
            .await
            .unwrap();
        assert_eq!(fourth.id, 4);
    }

    #[tokio::test]
    async fn test_get_missing_project() {
        let (_temp, storage) = build_simple_storage();
        storage.init().await.unwrap();

        let err = storage.get_project(999).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(999)));
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let (_temp, storage) = build_simple_storage();
        storage.init().await.unwrap();

        let project = storage
            .create_project(project_input("demo", "blue"))
            .await
            .unwrap();

        storage.delete_project(project.id).await.unwrap();

        let err = storage.get_project(project.id).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));

        // A second delete of the same id is not an error.
        storage.delete_project(project.id).await.unwrap();
    }

    #[tokio::test]
    async fn test_list_orderings() {
        let (_temp, storage) = build_simple_storage();
        storage.init().await.unwrap();

        storage
            .create_project(project_input("bravo", "#9b59b6"))
            .await
            .unwrap();
        storage
            .create_project(project_input("alpha", "#fd79a8"))
            .await
            .unwrap();
        storage
            .create_project(project_input("charlie", "#38b5fc"))
            .await
            .unwrap();

        let names = |projects: Vec<Project>| {
            projects
                .into_iter()
                .map(|p| p.name)
                .collect::<Vec<String>>()
        };

        let by_insertion = storage.list_projects(ProjectOrder::Insertion).await.unwrap();
        assert_eq!(names(by_insertion), vec!["bravo", "alpha", "charlie"]);

        let by_name = storage.list_projects(ProjectOrder::Name).await.unwrap();
        assert_eq!(names(by_name), vec!["alpha", "bravo", "charlie"]);

        let by_color = storage.list_projects(ProjectOrder::Color).await.unwrap();
        assert_eq!(names(by_color), vec!["charlie", "bravo", "alpha"]);
    }

    #[tokio::test]
    async fn test_update_project() {
        let (_temp, storage) = build_simple_storage();
        storage.init().await.unwrap();

        let project = storage
            .create_project(project_input("demo", "blue"))
            .await
            .unwrap();

        let updated = storage
            .update_project(
                project.id,
                ProjectPatch::default().set_name("renamed".to_string()),
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "renamed".to_string());
        assert_eq!(updated.color, project.color);

        let fetched = storage.get_project(project.id).await.unwrap();
        assert_eq!(fetched, updated);

        let err = storage
            .update_project(999, ProjectPatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(999)));
    }

    #[tokio::test]
    async fn test_create_rejects_empty_name() {
        let (_temp, storage) = build_simple_storage();
        storage.init().await.unwrap();

        let err = storage
            .create_project(project_input("", "blue"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::ValidationError(_)));

        // The failed create must not consume an id.
        let project = storage
            .create_project(project_input("demo", "blue"))
            .await
            .unwrap();
        assert_eq!(project.id, 1);
    }

    #[tokio::test]
    async fn test_operations_require_ready_state() {
        let (_temp, storage) = build_simple_storage();

        let err = storage
            .create_project(project_input("demo", "blue"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::StoreNotReady(StoreState::Unopened)
        ));

        assert_eq!(storage.state(), StoreState::Unopened);
    }

    #[tokio::test]
    async fn test_newer_persisted_schema_is_rejected() {
        let temp = tempdir().unwrap();
        let storage = build_storage_at(&temp);

        let database_path = temp.path().join("database");
        std::fs::create_dir_all(&database_path).unwrap();

        let documents = DocumentManager::builder()
            .document_parser(JsonParser::get())
            .database_path(database_path)
            .build();
        documents
            .write(
                META_DOCUMENT_NAME,
                &MetaDocument {
                    schema_version: schema::SCHEMA_VERSION + 1,
                    next_project_id: 1,
                    project_refs: vec![],
                },
            )
            .unwrap();

        let err = storage.init().await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::IncompatibleSchema { found, supported }
                if found == schema::SCHEMA_VERSION + 1 && supported == schema::SCHEMA_VERSION
        ));
        assert_eq!(storage.state(), StoreState::Failed);

        // A failed open leaves the store unusable.
        let err = storage.list_projects(ProjectOrder::default()).await.unwrap_err();
        assert!(matches!(err, StoreError::StoreNotReady(StoreState::Failed)));
    }

    #[tokio::test]
    async fn test_pre_versioning_records_are_indexed() {
        let temp = tempdir().unwrap();

        // A layout from before the meta document existed: record files only.
        let database_path = temp.path().join("database");
        std::fs::create_dir_all(database_path.join("projects")).unwrap();

        let documents = DocumentManager::builder()
            .document_parser(JsonParser::get())
            .database_path(database_path)
            .build();
        documents
            .write(
                "projects/5",
                &Project {
                    id: 5,
                    name: "legacy".to_string(),
                    color: "#3ecf8e".to_string(),
                    datetime: datetime("2023-06-01T12:00:00Z"),
                },
            )
            .unwrap();

        let storage = build_storage_at(&temp);
        storage.init().await.unwrap();

        let projects = storage.list_projects(ProjectOrder::default()).await.unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].id, 5);

        // The rebuilt counter restarts past the highest indexed id.
        let created = storage
            .create_project(project_input("fresh", "blue"))
            .await
            .unwrap();
        assert_eq!(created.id, 6);
    }

    #[tokio::test]
    async fn test_reopening_a_current_database_is_a_noop() {
        let temp = tempdir().unwrap();
        let storage = build_storage_at(&temp);
        storage.init().await.unwrap();

        storage
            .create_project(project_input("demo", "blue"))
            .await
            .unwrap();

        let reopened = build_storage_at(&temp);
        reopened.init().await.unwrap();
        assert_eq!(reopened.state(), StoreState::Ready);

        let projects = reopened.list_projects(ProjectOrder::default()).await.unwrap();
        assert_eq!(projects.len(), 1);
    }
}
