use inflector::cases::pascalcase::to_pascal_case;
use std::str::FromStr;
use strum_macros::{Display, EnumString};

pub mod document_parser;

pub mod storage {
    pub mod in_memory;
    pub mod local;
}

pub(crate) mod utils {
    pub(crate) mod database_lock;
    pub(crate) mod files;
}

pub use document_parser::{DocumentParser, IDocumentParser, JsonParser, TomlParser, YamlParser};

/// Storage backends known to the profile loader.
#[derive(Clone, Debug, EnumString, Display)]
pub enum BuiltinStorageType {
    Local,
    InMemory,
}

impl BuiltinStorageType {
    pub fn try_from_str_lowercase(s: &str) -> eyre::Result<Self> {
        Self::from_str(&to_pascal_case(s)).map_err(|_| {
            eyre::eyre!("Invalid storage type specified, please select one of `local`, `in_memory`")
        })
    }
}
