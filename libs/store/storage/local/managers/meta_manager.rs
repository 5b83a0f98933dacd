use deskpad_store_core::{ProjectId, StoreResult};

use super::document_manager::DocumentManager;
use crate::storage::local::models::meta_document::{MetaDocument, META_DOCUMENT_NAME};

pub struct MetaManager<'a> {
    documents: &'a DocumentManager,
}

impl<'a> MetaManager<'a> {
    pub fn load(documents: &'a DocumentManager) -> Self {
        Self { documents }
    }

    /// Get the current meta document, defaulting to an uninitialized one
    /// when the database directory is fresh
    pub fn get_document(&self) -> StoreResult<MetaDocument> {
        Ok(self
            .documents
            .read::<MetaDocument>(META_DOCUMENT_NAME)?
            .unwrap_or_default())
    }

    /// Persist the meta document
    pub fn set_document(&self, meta: &MetaDocument) -> StoreResult<()> {
        self.documents.write(META_DOCUMENT_NAME, meta)
    }

    /// Remove the reference to a project
    pub fn delete_project_reference(&self, project_id: ProjectId) -> StoreResult<()> {
        let mut meta = self.get_document()?;
        meta.project_refs.retain(|reference| *reference != project_id);
        self.set_document(&meta)
    }
}
