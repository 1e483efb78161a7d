//! JSON rendering for parsed templates.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::ParsedDocument;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    Pretty,
    /// Compact JSON without extra whitespace (canonical)
    #[default]
    Compact,
}

/// Convert a parsed document to JSON.
pub fn to_json(doc: &ParsedDocument, format: JsonFormat) -> Result<String> {
    to_json_value(doc, format)
}

/// Serialize any schema value (document, preview, statistics) to JSON.
pub(crate) fn to_json_value<T: Serialize>(value: &T, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };

    result.map_err(|e| Error::Serialization(format!("JSON serialization error: {}", e)))
}
