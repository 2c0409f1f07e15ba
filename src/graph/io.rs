//! Import/export of graph payloads as JSON documents
//!
//! Exported files use the same `{nodes, edges}` schema the builder
//! consumes, pretty-printed with two-space indentation.

use super::builder::ValidationError;
use super::spec::GraphSpec;
use std::io::{Read, Write};

/// Parse a graph payload from JSON text
pub fn parse_graph(text: &str) -> Result<GraphSpec, ValidationError> {
    Ok(serde_json::from_str(text)?)
}

/// Read a graph payload from any reader (file, stdin, upload body)
pub fn read_graph<R: Read>(reader: R) -> Result<GraphSpec, ValidationError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Render a graph payload as pretty JSON
pub fn to_pretty_json(spec: &GraphSpec) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(spec)
}

/// Write a graph payload as pretty JSON, followed by a newline
pub fn write_graph<W: Write>(mut writer: W, spec: &GraphSpec) -> std::io::Result<()> {
    serde_json::to_writer_pretty(&mut writer, spec)?;
    writer.write_all(b"\n")
}
