mod config;
mod schema;
mod storage;

pub(crate) mod models {
    pub mod meta_document;
}

pub(crate) mod managers {
    pub mod document_manager;
    pub mod meta_manager;
    pub mod project_manager;
}

pub(crate) mod services {
    pub mod project_service;
}

pub use config::{FileFormatType, LocalStorageConfig};
pub use schema::SCHEMA_VERSION;
pub use storage::LocalStorage;
