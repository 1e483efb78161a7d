//! Keyed, serializable sections.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use super::TableRecord;

/// The serializable representation of one content block.
///
/// Serialized with a `type` tag: `heading`, `paragraph` or `table`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Section {
    /// A heading
    Heading {
        /// Section key, e.g. `heading_0`
        id: String,
        /// Heading text
        text: String,
        /// Heading level
        level: i32,
    },

    /// A paragraph
    Paragraph {
        /// Section key, e.g. `paragraph_1`
        id: String,
        /// Paragraph text
        text: String,
    },

    /// A table resolved into header-keyed records
    Table {
        /// Section key, e.g. `table_2`
        id: String,
        /// One record per body row
        rows: Vec<TableRecord>,
    },
}

impl Section {
    /// Get the section key.
    pub fn id(&self) -> &str {
        match self {
            Section::Heading { id, .. } | Section::Paragraph { id, .. } | Section::Table { id, .. } => {
                id
            }
        }
    }

    /// Get the text of a heading or paragraph section.
    pub fn text(&self) -> Option<&str> {
        match self {
            Section::Heading { text, .. } | Section::Paragraph { text, .. } => Some(text),
            Section::Table { .. } => None,
        }
    }

    /// Get the heading level, if this is a heading.
    pub fn level(&self) -> Option<i32> {
        match self {
            Section::Heading { level, .. } => Some(*level),
            _ => None,
        }
    }

    /// Get the table records, if this is a table.
    pub fn rows(&self) -> Option<&[TableRecord]> {
        match self {
            Section::Table { rows, .. } => Some(rows),
            _ => None,
        }
    }
}

/// Serialize ordered sections as a JSON object keyed by section id.
pub(crate) fn serialize_sections<S: Serializer>(
    sections: &[Section],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(sections.len()))?;
    for section in sections {
        map.serialize_entry(section.id(), section)?;
    }
    map.end()
}
