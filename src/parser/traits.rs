//! Parser trait definition

use crate::parser::types::{Chunk, ChunkFormat};

/// Trait for parsing chunk documents
pub trait Parser {
    /// Returns the format this parser handles
    fn format(&self) -> ChunkFormat;

    /// Parse the content into a chunk
    fn parse(&self, content: &str) -> Result<Chunk, ParseError>;
}

/// Error type for parsing operations
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Failed to parse the file structure
    #[error("Failed to parse file: {0}")]
    ParseFailed(String),

    /// Invalid syntax in the file
    #[error("Invalid syntax: {0}")]
    InvalidSyntax(String),

    /// Tree-sitter related error
    #[error("Tree-sitter error: {0}")]
    TreeSitter(String),
}
