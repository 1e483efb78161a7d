//! Schema assembly: sections, fields and metadata into one document.

use chrono::{DateTime, Utc};

use crate::model::{ContentBlock, Metadata, ParsedDocument};

use super::fields::extract_fields;
use super::sections::build_sections;

/// Assemble a document from content blocks, stamped with the current time.
pub fn assemble(blocks: &[ContentBlock]) -> ParsedDocument {
    assemble_at(blocks, Utc::now())
}

/// Assemble a document from content blocks with a fixed creation time.
pub fn assemble_at(blocks: &[ContentBlock], created_at: DateTime<Utc>) -> ParsedDocument {
    let sections = build_sections(blocks);
    let form_fields = extract_fields(blocks);

    log::debug!(
        "Assembled {} sections and {} form fields",
        sections.len(),
        form_fields.len()
    );

    ParsedDocument {
        sections,
        form_fields,
        metadata: Metadata::new(created_at),
    }
}
