//! Common types for chunk documents

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

/// Serialization format of a chunk document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChunkFormat {
    /// chunk.yaml / chunk.yml (and anything without a known extension)
    Yaml,
    /// chunk.json
    Json,
}

impl ChunkFormat {
    /// Returns the string representation of the format
    pub fn as_str(&self) -> &'static str {
        match self {
            ChunkFormat::Yaml => "yaml",
            ChunkFormat::Json => "json",
        }
    }

    /// Detect the format from the file extension
    pub fn detect(path: &Path) -> Self {
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            ChunkFormat::Json
        } else {
            ChunkFormat::Yaml
        }
    }
}

/// One version entry of a chunk document
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Variant {
    /// Release cycle to check
    pub name: String,
    /// Extra settings carried along with the variant; not used for EOL checks
    #[serde(default)]
    pub args: IndexMap<String, String>,
}

impl Variant {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            args: IndexMap::new(),
        }
    }

    pub fn with_arg(mut self, key: &str, value: &str) -> Self {
        self.args.insert(key.to_string(), value.to_string());
        self
    }
}

/// Ordered list of variants for one tool
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Chunk {
    #[serde(default)]
    pub variants: Vec<Variant>,
}
