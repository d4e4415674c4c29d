//! chunk.yaml parser

use std::collections::HashMap;

use serde_json::{Map, Value};
use tracing::warn;

use crate::parser::traits::{ParseError, Parser};
use crate::parser::types::{Chunk, ChunkFormat};

/// Parser for YAML chunk documents
///
/// Every scalar is read as a string, so `name: 3.10` stays "3.10".
pub struct YamlChunkParser;

impl Parser for YamlChunkParser {
    fn format(&self) -> ChunkFormat {
        ChunkFormat::Yaml
    }

    fn parse(&self, content: &str) -> Result<Chunk, ParseError> {
        let mut parser = tree_sitter::Parser::new();
        let language = tree_sitter_yaml::LANGUAGE;
        parser.set_language(&language.into()).map_err(|e| {
            warn!("Failed to set YAML language for tree-sitter: {}", e);
            ParseError::TreeSitter(e.to_string())
        })?;

        let tree = parser.parse(content, None).ok_or_else(|| {
            warn!("Failed to parse YAML content");
            ParseError::ParseFailed("Failed to parse YAML".to_string())
        })?;

        let root = tree.root_node();
        if root.has_error() {
            let line = first_error_line(root).unwrap_or(0) + 1;
            return Err(ParseError::InvalidSyntax(format!(
                "malformed YAML near line {}",
                line
            )));
        }

        let mut builder = ValueBuilder::new(content);
        match builder.build(root)? {
            Value::Null => Ok(Chunk::default()),
            value => serde_json::from_value(value).map_err(|e| {
                warn!("YAML chunk does not match the expected layout: {}", e);
                ParseError::ParseFailed(e.to_string())
            }),
        }
    }
}

/// Converts a YAML syntax tree into a JSON value
///
/// Anchors are recorded in document order, so an alias resolves to the
/// value of the closest preceding anchor with the same name.
struct ValueBuilder<'a> {
    content: &'a str,
    anchors: HashMap<String, Value>,
}

impl<'a> ValueBuilder<'a> {
    fn new(content: &'a str) -> Self {
        Self {
            content,
            anchors: HashMap::new(),
        }
    }

    fn build(&mut self, node: tree_sitter::Node) -> Result<Value, ParseError> {
        match node.kind() {
            "stream" | "document" | "block_node" | "flow_node" | "block_sequence_item" => {
                let mut cursor = node.walk();
                let children: Vec<_> = node.named_children(&mut cursor).collect();

                let value = match children.iter().find(|child| is_value_node(child.kind())) {
                    Some(child) => self.build(*child)?,
                    None => Value::Null,
                };

                if let Some(anchor) = children.iter().find(|child| child.kind() == "anchor") {
                    let name = self.get_node_text(*anchor).trim_start_matches('&');
                    self.anchors.insert(name.to_string(), value.clone());
                }

                Ok(value)
            }
            "alias" => {
                let name = self.get_node_text(node).trim_start_matches('*');
                self.anchors.get(name).cloned().ok_or_else(|| {
                    ParseError::InvalidSyntax(format!("undefined alias *{}", name))
                })
            }
            "block_mapping" | "flow_mapping" => self.mapping_to_value(node),
            "block_sequence" | "flow_sequence" => {
                let mut cursor = node.walk();
                let children: Vec<_> = node.named_children(&mut cursor).collect();

                let mut items = Vec::with_capacity(children.len());
                for child in children {
                    match child.kind() {
                        "block_sequence_item" | "flow_node" => items.push(self.build(child)?),
                        "flow_pair" => {
                            let mut entry = Map::new();
                            self.insert_pair(child, &mut entry)?;
                            items.push(Value::Object(entry));
                        }
                        _ => {}
                    }
                }
                Ok(Value::Array(items))
            }
            "plain_scalar" => {
                let mut cursor = node.walk();
                let is_null = node
                    .named_children(&mut cursor)
                    .any(|child| child.kind() == "null_scalar");
                if is_null {
                    Ok(Value::Null)
                } else {
                    Ok(Value::String(self.get_node_text(node).to_string()))
                }
            }
            "double_quote_scalar" => {
                unescape_double_quoted(strip_quotes(self.get_node_text(node))).map(Value::String)
            }
            "single_quote_scalar" => Ok(Value::String(
                strip_quotes(self.get_node_text(node)).replace("''", "'"),
            )),
            "block_scalar" => Ok(Value::String(block_scalar_text(self.get_node_text(node)))),
            _ => Ok(Value::Null),
        }
    }

    /// Collect the pairs of a block or flow mapping
    fn mapping_to_value(&mut self, node: tree_sitter::Node) -> Result<Value, ParseError> {
        let mut cursor = node.walk();
        let children: Vec<_> = node.named_children(&mut cursor).collect();

        let mut entries = Map::new();
        for child in children {
            match child.kind() {
                "block_mapping_pair" | "flow_pair" => self.insert_pair(child, &mut entries)?,
                // `{ key }` without a value
                "flow_node" => {
                    let key = self.key_text(child)?;
                    entries.insert(key, Value::Null);
                }
                _ => {}
            }
        }
        Ok(Value::Object(entries))
    }

    /// Insert a `key: value` pair, skipping pairs without a value
    fn insert_pair(
        &mut self,
        node: tree_sitter::Node,
        entries: &mut Map<String, Value>,
    ) -> Result<(), ParseError> {
        let Some(key_node) = node.child_by_field_name("key") else {
            return Ok(());
        };
        let key = self.key_text(key_node)?;

        let value = match node.child_by_field_name("value") {
            Some(value_node) => self.build(value_node)?,
            None => Value::Null,
        };

        if !value.is_null() {
            entries.insert(key, value);
        }
        Ok(())
    }

    fn key_text(&mut self, node: tree_sitter::Node) -> Result<String, ParseError> {
        match self.build(node)? {
            Value::String(key) => Ok(key),
            _ => Ok(self.get_node_text(node).to_string()),
        }
    }

    /// Get text content of a node
    fn get_node_text(&self, node: tree_sitter::Node) -> &'a str {
        self.content[node.byte_range()].trim()
    }
}

fn is_value_node(kind: &str) -> bool {
    matches!(
        kind,
        "document"
            | "block_node"
            | "flow_node"
            | "block_mapping"
            | "block_sequence"
            | "block_scalar"
            | "flow_mapping"
            | "flow_sequence"
            | "plain_scalar"
            | "double_quote_scalar"
            | "single_quote_scalar"
            | "alias"
    )
}

fn first_error_line(node: tree_sitter::Node) -> Option<usize> {
    if node.is_error() || node.is_missing() {
        return Some(node.start_position().row);
    }
    let mut cursor = node.walk();
    let children: Vec<_> = node.children(&mut cursor).collect();
    children
        .into_iter()
        .filter(|child| child.has_error())
        .find_map(first_error_line)
}

fn strip_quotes(text: &str) -> &str {
    text.get(1..text.len().saturating_sub(1)).unwrap_or("")
}

/// Decode the escape sequences of a double-quoted scalar body
fn unescape_double_quoted(text: &str) -> Result<String, ParseError> {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        let Some(escape) = chars.next() else {
            return Err(ParseError::InvalidSyntax(
                "dangling backslash in double-quoted scalar".to_string(),
            ));
        };
        match escape {
            '0' => result.push('\0'),
            'a' => result.push('\u{07}'),
            'b' => result.push('\u{08}'),
            't' | '\t' => result.push('\t'),
            'n' => result.push('\n'),
            'v' => result.push('\u{0B}'),
            'f' => result.push('\u{0C}'),
            'r' => result.push('\r'),
            'e' => result.push('\u{1B}'),
            ' ' => result.push(' '),
            '"' => result.push('"'),
            '/' => result.push('/'),
            '\\' => result.push('\\'),
            'N' => result.push('\u{85}'),
            '_' => result.push('\u{A0}'),
            'L' => result.push('\u{2028}'),
            'P' => result.push('\u{2029}'),
            'x' => result.push(decode_hex_escape(&mut chars, 2)?),
            'u' => result.push(decode_hex_escape(&mut chars, 4)?),
            'U' => result.push(decode_hex_escape(&mut chars, 8)?),
            // Escaped line break: the break and the next line's indentation are dropped
            '\n' | '\r' => {
                while chars.peek().is_some_and(|c| matches!(c, '\n' | ' ' | '\t')) {
                    chars.next();
                }
            }
            other => {
                return Err(ParseError::InvalidSyntax(format!(
                    "unknown escape sequence \\{}",
                    other
                )));
            }
        }
    }
    Ok(result)
}

/// Read `digits` hex digits and turn them into a character
fn decode_hex_escape(
    chars: &mut impl Iterator<Item = char>,
    digits: usize,
) -> Result<char, ParseError> {
    let hex: String = chars.take(digits).collect();
    let invalid = || ParseError::InvalidSyntax(format!("invalid escape sequence with code {}", hex));

    if hex.len() != digits || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    u32::from_str_radix(&hex, 16)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(invalid)
}

/// Text of a `|` (literal) or `>` (folded) block scalar
fn block_scalar_text(text: &str) -> String {
    let mut lines = text.lines();
    let folded = lines.next().is_some_and(|header| header.starts_with('>'));
    let body: Vec<&str> = lines.collect();

    let indent = body
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start().len())
        .min()
        .unwrap_or(0);

    let dedented: Vec<&str> = body
        .iter()
        .map(|line| line.get(indent..).unwrap_or("").trim_end())
        .collect();

    let separator = if folded { " " } else { "\n" };
    dedented.join(separator).trim_end().to_string()
}
