//! Template preview: the schema together with its field statistics.

use serde::Serialize;

use crate::error::Result;
use crate::model::ParsedDocument;

use super::json::{to_json_value, JsonFormat};
use super::stats::FieldStatistics;

/// A parsed template and the statistics of its form fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Preview {
    /// The assembled schema
    pub template_content: ParsedDocument,

    /// Field totals by type
    pub statistics: FieldStatistics,
}

impl Preview {
    /// Build a preview for an assembled document.
    pub fn new(template_content: ParsedDocument) -> Self {
        let statistics = FieldStatistics::from_document(&template_content);
        Self {
            template_content,
            statistics,
        }
    }

    /// Convert the preview to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        to_json_value(self, format)
    }
}
