use std::sync::Arc;

use derive_more::Deref;

/// Cheaply clonable handle over the record encoding of a database directory.
/// Every format deserializes through a `serde_json::Value` so documents reach
/// their typed shape by a single path.
#[derive(Deref, Clone)]
#[deref(forward)]
pub struct DocumentParser(Arc<dyn IDocumentParser>);

pub trait IDocumentParser: Send + Sync {
    fn deserialize(&self, data: &str) -> eyre::Result<serde_json::Value>;
    fn serialize(&self, data: &dyn erased_serde::Serialize) -> eyre::Result<String>;
    fn file_extension(&self) -> &'static str;
}

pub struct JsonParser;

impl JsonParser {
    pub fn get() -> DocumentParser {
        DocumentParser(Arc::new(JsonParser {}))
    }
}

impl IDocumentParser for JsonParser {
    fn deserialize(&self, data: &str) -> eyre::Result<serde_json::Value> {
        Ok(serde_json::from_str(data)?)
    }

    fn serialize(&self, data: &dyn erased_serde::Serialize) -> eyre::Result<String> {
        Ok(serde_json::to_string_pretty(data)?)
    }

    fn file_extension(&self) -> &'static str {
        "json"
    }
}

pub struct YamlParser;

impl YamlParser {
    pub fn get() -> DocumentParser {
        DocumentParser(Arc::new(YamlParser {}))
    }
}

impl IDocumentParser for YamlParser {
    fn deserialize(&self, data: &str) -> eyre::Result<serde_json::Value> {
        Ok(serde_yaml::from_str(data)?)
    }

    fn serialize(&self, data: &dyn erased_serde::Serialize) -> eyre::Result<String> {
        Ok(serde_yaml::to_string(data)?)
    }

    fn file_extension(&self) -> &'static str {
        "yaml"
    }
}

pub struct TomlParser;

impl TomlParser {
    pub fn get() -> DocumentParser {
        DocumentParser(Arc::new(TomlParser {}))
    }
}

impl IDocumentParser for TomlParser {
    fn deserialize(&self, data: &str) -> eyre::Result<serde_json::Value> {
        Ok(toml::from_str(data)?)
    }

    fn serialize(&self, data: &dyn erased_serde::Serialize) -> eyre::Result<String> {
        Ok(toml::to_string(data)?)
    }

    fn file_extension(&self) -> &'static str {
        "toml"
    }
}
