use inflector::cases::pascalcase::to_pascal_case;
use serde_derive::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::{Display, EnumString};

#[derive(EnumString, Display)]
pub enum FileFormatType {
    Json,
    Yaml,
    Toml,
}

impl FileFormatType {
    fn try_from_str_lowercase(s: &str) -> eyre::Result<Self> {
        Self::from_str(&to_pascal_case(s)).map_err(|_| {
            eyre::eyre!(
                "Invalid file format type specified, please select one of `toml`, `yaml`, `json`"
            )
        })
    }
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct LocalStorageConfig {
    /// Name of the database, used to namespace the directory lock (default to: Database)
    pub database_name: Option<String>,

    /// Path of the directory where project records are stored (default to ~/.local/share/deskpad/database)
    pub database_path: Option<String>,

    /// Storage format of the record files (default to: json)
    pub file_format_type: Option<String>,
}

impl LocalStorageConfig {
    pub fn get_database_name(&self) -> String {
        self.database_name
            .clone()
            .unwrap_or_else(|| String::from("Database"))
    }

    pub fn get_file_format_type(&self) -> eyre::Result<FileFormatType> {
        self.file_format_type
            .as_ref()
            .map(|s| FileFormatType::try_from_str_lowercase(s))
            .unwrap_or(Ok(FileFormatType::Json))
    }

    pub fn get_database_path(&self) -> eyre::Result<String> {
        let path_raw = self
            .database_path
            .clone()
            .unwrap_or("~/.local/share/deskpad/database".to_owned());

        Ok(shellexpand::full(&path_raw)?.into_owned())
    }
}
