use derive_more::{Deref, DerefMut};

use crate::{
    project::{Project, ProjectId, ProjectInput, ProjectPatch},
    PinFuture, StoreResult,
};

#[derive(Deref, DerefMut)]
#[deref(forward)]
#[deref_mut(forward)]
pub struct StoreBox(pub Box<dyn Store>);

impl StoreBox {
    pub fn new(store: impl Store + 'static) -> Self {
        Self(Box::new(store))
    }
}

/// Lifecycle of a store handle. Only `Ready` accepts project operations;
/// `init` moves the handle through `Opening` and leaves it `Failed` when the
/// backend is unavailable or a migration step errors.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum StoreState {
    #[default]
    Unopened,
    Opening,
    Ready,
    Failed,
}

impl std::fmt::Display for StoreState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StoreState::Unopened => "unopened",
            StoreState::Opening => "opening",
            StoreState::Ready => "ready",
            StoreState::Failed => "failed",
        };
        write!(f, "{name}")
    }
}

/// Orderings accepted by `list_projects`; insertion order is the default.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ProjectOrder {
    #[default]
    Insertion,
    Name,
    Color,
    Datetime,
}

pub trait Store: Sync {
    fn debug_message(&self);

    /// Open or create the persisted collection, running pending schema
    /// migrations in ascending order before the store becomes ready
    fn init(&self) -> PinFuture<StoreResult<()>>;

    // Current lifecycle state of this handle
    fn state(&self) -> StoreState;

    /// Create a new project; the store assigns the next available id
    fn create_project(&self, input: ProjectInput) -> PinFuture<StoreResult<Project>>;

    // Get a project by id
    fn get_project(&self, project_id: ProjectId) -> PinFuture<StoreResult<Project>>;

    // List all projects in the requested order
    fn list_projects(&self, order: ProjectOrder) -> PinFuture<StoreResult<Vec<Project>>>;

    // Apply a patch to a project
    fn update_project(
        &self,
        project_id: ProjectId,
        patch: ProjectPatch,
    ) -> PinFuture<StoreResult<Project>>;

    // Delete a project by id, deleting an absent id is not an error
    fn delete_project(&self, project_id: ProjectId) -> PinFuture<StoreResult<()>>;
}
