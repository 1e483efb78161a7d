//! Form field extraction from the block stream.

use std::collections::HashSet;

use crate::model::{ContentBlock, FormField, SourceType};

use super::classify::classify;
use super::placeholder::PlaceholderScanner;

/// Collects deduplicated, classified form fields in document order.
///
/// The first occurrence of a name decides its source type; later
/// occurrences are merged into it.
pub struct FieldExtractor {
    scanner: PlaceholderScanner,
    seen: HashSet<String>,
    fields: Vec<FormField>,
}

impl FieldExtractor {
    /// Create a new extractor.
    pub fn new() -> Self {
        Self {
            scanner: PlaceholderScanner::new(),
            seen: HashSet::new(),
            fields: Vec::new(),
        }
    }

    /// Scan one block: heading/paragraph text, or every table cell row by row.
    pub fn visit_block(&mut self, block: &ContentBlock) {
        match block {
            ContentBlock::Heading { text, .. } | ContentBlock::Paragraph { text } => {
                self.scan_text(text, SourceType::InlineText);
            }
            ContentBlock::Table(table) => {
                for cell in table.cells() {
                    self.scan_text(cell, SourceType::TableCell);
                }
            }
        }
    }

    /// Scan free text for placeholders.
    pub fn scan_text(&mut self, text: &str, source_type: SourceType) {
        for placeholder in self.scanner.scan(text) {
            if self.seen.contains(placeholder.name) {
                log::trace!("Duplicate placeholder {:?} merged", placeholder.name);
                continue;
            }
            self.seen.insert(placeholder.name.to_string());

            let field = FormField::new(
                format!("field_{}", self.fields.len()),
                placeholder.name,
                classify(placeholder.name),
                source_type,
            );
            log::debug!(
                "Form field {:?}: {} from {:?}",
                field.name,
                field.field_type,
                source_type
            );
            self.fields.push(field);
        }
    }

    /// Get the number of fields collected so far.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if no field has been collected.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Finish extraction and return the fields in first-seen order.
    pub fn into_fields(self) -> Vec<FormField> {
        self.fields
    }
}

impl Default for FieldExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract form fields from content blocks.
pub fn extract_fields(blocks: &[ContentBlock]) -> Vec<FormField> {
    let mut extractor = FieldExtractor::new();
    for block in blocks {
        extractor.visit_block(block);
    }
    extractor.into_fields()
}
