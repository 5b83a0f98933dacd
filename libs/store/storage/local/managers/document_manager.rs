use serde::{de::DeserializeOwned, Serialize};
use std::path::{Path, PathBuf};
use tracing::{instrument, trace};
use typed_builder::TypedBuilder;

use crate::document_parser::DocumentParser;
use crate::utils::files;
use deskpad_store_core::{StoreError, StoreResult};

/// Reads and writes named documents below a database directory, in the
/// format selected for that database. Document names may carry a collection
/// prefix ("projects/1"); the file extension is appended here.
#[derive(TypedBuilder, Clone)]
pub struct DocumentManager {
    document_parser: DocumentParser,
    database_path: PathBuf,
}

impl DocumentManager {
    pub fn database_path(&self) -> &Path {
        &self.database_path
    }

    pub fn file_extension(&self) -> &'static str {
        self.document_parser.file_extension()
    }

    fn document_path(&self, document_name: &str) -> PathBuf {
        let mut path = self.database_path.join(document_name);
        files::add_file_extension(&mut path, self.document_parser.file_extension());
        path
    }

    #[instrument(skip(self, document))]
    pub fn write<T: Serialize>(&self, document_name: &str, document: &T) -> StoreResult<()> {
        trace!("Saving document");
        let serialized = self
            .document_parser
            .serialize(document)
            .map_err(StoreError::corrupted_document)?;

        files::write_atomic(&self.document_path(document_name), serialized.as_bytes())
            .map_err(StoreError::operation_failed)?;

        Ok(())
    }

    #[instrument(skip(self))]
    pub fn read<T: DeserializeOwned>(&self, document_name: &str) -> StoreResult<Option<T>> {
        trace!("Get document");
        let path = self.document_path(document_name);

        if !path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(path).map_err(StoreError::operation_failed)?;
        let data = self
            .document_parser
            .deserialize(&contents)
            .map_err(StoreError::corrupted_document)?;
        let document: T = serde_json::from_value(data).map_err(StoreError::corrupted_document)?;

        Ok(Some(document))
    }

    /// Remove a document, returns whether it existed
    #[instrument(skip(self))]
    pub fn remove(&self, document_name: &str) -> StoreResult<bool> {
        trace!("Removing document");
        let path = self.document_path(document_name);

        if !path.exists() {
            return Ok(false);
        }

        std::fs::remove_file(path).map_err(StoreError::operation_failed)?;
        Ok(true)
    }
}
