use crate::{config, Core};
use deskpad_store::{
    storage::{in_memory::InMemoryStorageConfig, local::LocalStorageConfig},
    BuiltinStorageType,
};
use deskpad_store_core::StorageConfig;

pub async fn load(storage_type: BuiltinStorageType, config_path: &str) -> eyre::Result<Core> {
    match storage_type {
        BuiltinStorageType::Local => load_core::<LocalStorageConfig>(config_path).await,
        BuiltinStorageType::InMemory => load_core::<InMemoryStorageConfig>(config_path).await,
    }
}

pub async fn load_core<SC>(config_path: &str) -> eyre::Result<Core>
where
    SC: StorageConfig,
{
    let mut found_config_file = Ok(());
    let config = match config::get_config_from_path::<SC>(config_path).await {
        Ok(v) => v,
        Err(e) => {
            found_config_file = Err(e);
            config::get_default_storage_config::<SC>()
        }
    };

    let store = config.storage.try_into_storage()?;

    Ok(Core {
        store,
        found_config_file,
    })
}

/// Resolve a profile of the shared dashboard configuration into a core
/// handle, honoring the configured default profile name.
pub fn load_profile(
    config: &deskpad_config::Config,
    profile_name: Option<&str>,
) -> eyre::Result<Core> {
    let profile_name = profile_name
        .map(str::to_owned)
        .or_else(|| config.core.default_profile_name.clone())
        .unwrap_or_else(|| String::from("default"));

    let profile = config
        .profile
        .get(&profile_name)
        .ok_or_else(|| eyre::eyre!("profile '{profile_name}' was not found in the configuration"))?;

    let store = match BuiltinStorageType::try_from_str_lowercase(&profile.storage_type)? {
        BuiltinStorageType::Local => profile
            .details
            .clone()
            .try_into::<LocalStorageConfig>()?
            .try_into_storage()?,
        BuiltinStorageType::InMemory => profile
            .details
            .clone()
            .try_into::<InMemoryStorageConfig>()?
            .try_into_storage()?,
    };

    Ok(Core {
        store,
        found_config_file: Ok(()),
    })
}
