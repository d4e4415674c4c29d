//! Reading chunk documents from disk

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::parser::json::JsonChunkParser;
use crate::parser::traits::{ParseError, Parser};
use crate::parser::types::{Chunk, ChunkFormat};
use crate::parser::yaml::YamlChunkParser;

#[derive(Debug, Error)]
pub enum ChunkError {
    #[error("Error reading chunk file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Error parsing chunk file {path}: {source}")]
    Parse { path: PathBuf, source: ParseError },
}

/// Returns the parser for the given format
pub fn parser_for(format: ChunkFormat) -> Box<dyn Parser> {
    match format {
        ChunkFormat::Yaml => Box::new(YamlChunkParser),
        ChunkFormat::Json => Box::new(JsonChunkParser),
    }
}

/// Read and parse the chunk document at `path`
pub fn load_chunk(path: &Path) -> Result<Chunk, ChunkError> {
    let content = std::fs::read_to_string(path).map_err(|source| ChunkError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let format = ChunkFormat::detect(path);
    debug!("Parsing {} as {}", path.display(), format.as_str());

    parser_for(format)
        .parse(&content)
        .map_err(|source| ChunkError::Parse {
            path: path.to_path_buf(),
            source,
        })
}
