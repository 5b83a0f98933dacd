use deskpad_store_core::ProjectId;
use serde_derive::{Deserialize, Serialize};

/// Name of the per-database document carrying the schema version, the id
/// counter and the insertion-ordered record references.
pub const META_DOCUMENT_NAME: &str = "__meta";

#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq)]
pub struct MetaDocument {
    /// Version of the persisted layout; 0 means the database directory has
    /// not been initialized yet
    pub schema_version: u32,
    /// Next id handed out on create, never decremented nor reused
    pub next_project_id: ProjectId,
    /// Project ids in insertion order
    pub project_refs: Vec<ProjectId>,
}
