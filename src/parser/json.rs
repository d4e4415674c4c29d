//! chunk.json parser

use tracing::warn;

use crate::parser::traits::{ParseError, Parser};
use crate::parser::types::{Chunk, ChunkFormat};

/// Parser for JSON chunk documents
pub struct JsonChunkParser;

impl Parser for JsonChunkParser {
    fn format(&self) -> ChunkFormat {
        ChunkFormat::Json
    }

    fn parse(&self, content: &str) -> Result<Chunk, ParseError> {
        serde_json::from_str(content).map_err(|e| {
            warn!("Failed to parse JSON chunk: {}", e);
            if e.is_syntax() || e.is_eof() {
                ParseError::InvalidSyntax(e.to_string())
            } else {
                ParseError::ParseFailed(e.to_string())
            }
        })
    }
}
