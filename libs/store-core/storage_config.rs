use serde::de::DeserializeOwned;

use super::store::StoreBox;

pub trait StorageConfig: DeserializeOwned + Default {
    type Storage: super::store::Store;

    fn try_into_storage(self) -> eyre::Result<StoreBox>;
}
