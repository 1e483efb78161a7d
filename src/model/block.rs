//! Content blocks read from the document body.

use super::Table;

/// One atomic unit of document content, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlock {
    /// A paragraph whose style marks it as a heading
    Heading {
        /// Heading level taken from the style name (1 when absent)
        level: i32,
        /// Paragraph text
        text: String,
    },

    /// A non-empty body paragraph
    Paragraph {
        /// Paragraph text
        text: String,
    },

    /// A top-level table
    Table(Table),
}

impl ContentBlock {
    /// Create a heading block.
    pub fn heading(text: impl Into<String>, level: i32) -> Self {
        ContentBlock::Heading {
            level,
            text: text.into(),
        }
    }

    /// Create a paragraph block.
    pub fn paragraph(text: impl Into<String>) -> Self {
        ContentBlock::Paragraph { text: text.into() }
    }

    /// Section kind used in keys (`heading`, `paragraph`, `table`).
    pub fn kind(&self) -> &'static str {
        match self {
            ContentBlock::Heading { .. } => "heading",
            ContentBlock::Paragraph { .. } => "paragraph",
            ContentBlock::Table(_) => "table",
        }
    }

    /// Get the text of a heading or paragraph.
    pub fn text(&self) -> Option<&str> {
        match self {
            ContentBlock::Heading { text, .. } | ContentBlock::Paragraph { text } => Some(text),
            ContentBlock::Table(_) => None,
        }
    }

    /// Check if this is a heading.
    pub fn is_heading(&self) -> bool {
        matches!(self, ContentBlock::Heading { .. })
    }
}
