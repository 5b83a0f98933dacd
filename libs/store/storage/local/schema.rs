use deskpad_store_core::{ProjectId, StoreError, StoreResult};
use lazy_regex::Regex;
use tracing::{instrument, trace};

use super::managers::document_manager::DocumentManager;
use super::managers::meta_manager::MetaManager;
use super::managers::project_manager::PROJECTS_COLLECTION;
use crate::utils::files;

/// Schema version written by this build of the engine.
pub const SCHEMA_VERSION: u32 = 1;

/// One step of the persisted layout history, moving a database from
/// `target_version - 1` to `target_version`. Steps run in ascending order at
/// open time; the runner stamps the new version after each step.
pub(crate) struct Migration {
    pub target_version: u32,
    pub apply: fn(&DocumentManager) -> eyre::Result<()>,
}

pub(crate) fn migrations() -> Vec<Migration> {
    vec![Migration {
        target_version: 1,
        apply: initial_layout,
    }]
}

#[instrument(skip(documents))]
pub(crate) fn run_migrations(documents: &DocumentManager) -> StoreResult<()> {
    let meta_manager = MetaManager::load(documents);
    let mut current_version = meta_manager.get_document()?.schema_version;

    if current_version > SCHEMA_VERSION {
        return Err(StoreError::IncompatibleSchema {
            found: current_version,
            supported: SCHEMA_VERSION,
        });
    }

    for migration in migrations() {
        if migration.target_version <= current_version {
            continue;
        }

        trace!(version = migration.target_version, "Applying migration step");
        (migration.apply)(documents)
            .map_err(|e| StoreError::migration_failed(migration.target_version, e))?;

        let mut meta = meta_manager.get_document()?;
        meta.schema_version = migration.target_version;
        meta_manager
            .set_document(&meta)
            .map_err(|e| StoreError::migration_failed(migration.target_version, e))?;

        current_version = migration.target_version;
    }

    Ok(())
}

/// Version 1: meta document carrying the id counter and the insertion
/// ordered reference list. Record documents already present in the
/// collection (a pre-versioning layout) are indexed in ascending id order
/// and the counter restarts past the highest id found.
fn initial_layout(documents: &DocumentManager) -> eyre::Result<()> {
    let meta_manager = MetaManager::load(documents);
    let mut meta = meta_manager.get_document()?;

    let collection_path = documents.database_path().join(PROJECTS_COLLECTION);
    std::fs::create_dir_all(&collection_path)?;

    let extension = documents.file_extension();
    let record_files =
        files::find_matching_files(&collection_path, &Regex::new(&format!(".*{extension}$"))?)?;

    let mut project_ids = record_files
        .iter()
        .filter_map(|file| {
            std::path::Path::new(file)
                .file_stem()
                .and_then(|stem| stem.to_str())
                .and_then(|stem| stem.parse::<ProjectId>().ok())
        })
        .collect::<Vec<ProjectId>>();
    project_ids.sort_unstable();

    meta.next_project_id = project_ids.last().map_or(1, |highest| highest + 1);
    meta.project_refs = project_ids;
    meta_manager.set_document(&meta)?;

    Ok(())
}
