use std::{future::Future, pin::Pin};

mod error;
mod palette;
mod project;
mod storage_config;
mod store;

pub use error::{StoreError, StoreResult};
pub use palette::{ColorType, COLOR_TYPES};
pub use project::{Project, ProjectId, ProjectInput, ProjectPatch};
pub use storage_config::StorageConfig;
pub use store::{ProjectOrder, Store, StoreBox, StoreState};

pub type PinFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
