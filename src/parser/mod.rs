//! Chunk document parsing
//!
//! - [`yaml`]: chunk.yaml via tree-sitter
//! - [`json`]: chunk.json via serde_json
//! - [`loader`]: format detection and file reading

pub mod json;
pub mod loader;
pub mod traits;
pub mod types;
pub mod yaml;

pub use loader::{ChunkError, load_chunk};
