//! # docxform
//!
//! Word template parsing library for Rust.
//!
//! This library reads a `.docx` template and turns it into a form schema:
//! keyed sections (headings, paragraphs, tables as header-keyed records),
//! the deduplicated `${name}` / `{name}` placeholders found in the text,
//! each classified into a form field type, and schema metadata.
//!
//! ## Quick Start
//!
//! ```no_run
//! use docxform::{is_valid_word_document, parse_document};
//!
//! fn main() -> docxform::Result<()> {
//!     let data = std::fs::read("template.docx")?;
//!
//!     if is_valid_word_document(&data, Some("template.docx")) {
//!         let json = parse_document(&data)?;
//!         println!("{}", json);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Upload validation**: extension and package signature checks
//! - **Structure preservation**: Headings with levels, paragraphs, tables
//! - **Placeholder discovery**: `${name}` and `{name}`, first occurrence wins
//! - **Field typing**: date, select, checkbox, textarea, number, text
//! - **Statistics**: field totals grouped by type

pub mod detect;
pub mod error;
pub mod extract;
pub mod model;
pub mod parser;
pub mod render;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use detect::{detect_format_from_bytes, is_valid_word_document, validate, WordFormat};
pub use error::{Error, ErrorKind, Result};
pub use extract::{assemble, assemble_at, classify};
pub use model::{
    ContentBlock, FieldType, FormField, Metadata, ParsedDocument, Section, SourceType, Table,
    TableRecord, TableRow,
};
pub use parser::DocxParser;
pub use render::{FieldStatistics, JsonFormat, Preview};

use std::path::Path;

/// Parse a DOCX template and return its schema as canonical (compact) JSON.
///
/// The bytes must be a DOCX package; run [`is_valid_word_document`] first
/// to also check the upload's filename.
///
/// # Example
///
/// ```no_run
/// use docxform::parse_document;
///
/// let data = std::fs::read("template.docx").unwrap();
/// let json = parse_document(&data).unwrap();
/// ```
pub fn parse_document(data: &[u8]) -> Result<String> {
    parse_document_with_format(data, JsonFormat::Compact)
}

/// Parse a DOCX template and return its schema as JSON in the given format.
pub fn parse_document_with_format(data: &[u8], format: JsonFormat) -> Result<String> {
    let doc = parse_bytes(data)?;
    render::to_json(&doc, format)
}

/// Parse a DOCX template from bytes.
///
/// # Example
///
/// ```no_run
/// use docxform::parse_bytes;
///
/// let data = std::fs::read("template.docx").unwrap();
/// let doc = parse_bytes(&data).unwrap();
/// println!("Fields: {}", doc.form_fields.len());
/// ```
pub fn parse_bytes(data: &[u8]) -> Result<ParsedDocument> {
    let blocks = DocxParser::from_bytes(data)?.parse()?;
    Ok(assemble(&blocks))
}

/// Validate an upload by filename and signature, then parse it.
pub fn parse_upload(data: &[u8], filename: &str) -> Result<ParsedDocument> {
    if let Err(e) = validate(data, Some(filename)) {
        log::warn!("Rejected upload {:?}: {}", filename, e);
        return Err(e);
    }
    parse_bytes(data)
}

/// Parse a DOCX template file.
///
/// # Example
///
/// ```no_run
/// use docxform::parse_file;
///
/// let doc = parse_file("template.docx").unwrap();
/// println!("Sections: {}", doc.section_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<ParsedDocument> {
    let blocks = parser::parse_path(path)?;
    Ok(assemble(&blocks))
}

/// Validate and parse an upload, returning the schema with its statistics.
///
/// # Example
///
/// ```no_run
/// use docxform::{preview, JsonFormat};
///
/// let data = std::fs::read("template.docx").unwrap();
/// let preview = preview(&data, "template.docx").unwrap();
/// println!("{}", preview.to_json(JsonFormat::Pretty).unwrap());
/// ```
pub fn preview(data: &[u8], filename: &str) -> Result<Preview> {
    let doc = parse_upload(data, filename)?;
    Ok(Preview::new(doc))
}

/// Builder for parsing DOCX templates.
///
/// # Example
///
/// ```no_run
/// use docxform::DocxForm;
///
/// let data = std::fs::read("template.docx")?;
/// let json = DocxForm::new()
///     .pretty()
///     .with_filename("template.docx")
///     .parse_bytes(&data)?
///     .to_json()?;
/// # Ok::<(), docxform::Error>(())
/// ```
pub struct DocxForm {
    json_format: JsonFormat,
    filename: Option<String>,
}

impl DocxForm {
    /// Create a new DocxForm builder.
    pub fn new() -> Self {
        Self {
            json_format: JsonFormat::default(),
            filename: None,
        }
    }

    /// Set the JSON output format.
    pub fn with_json_format(mut self, format: JsonFormat) -> Self {
        self.json_format = format;
        self
    }

    /// Pretty-print JSON output.
    pub fn pretty(self) -> Self {
        self.with_json_format(JsonFormat::Pretty)
    }

    /// Validate input as an upload with this original filename.
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Parse a DOCX template from bytes and return a result wrapper.
    pub fn parse_bytes(self, data: &[u8]) -> Result<DocxFormResult> {
        let document = match &self.filename {
            Some(filename) => parse_upload(data, filename)?,
            None => parse_bytes(data)?,
        };
        Ok(DocxFormResult {
            document,
            json_format: self.json_format,
        })
    }

    /// Parse a DOCX template file and return a result wrapper.
    ///
    /// Without an explicit filename, the path's file name is validated.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<DocxFormResult> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        let filename = self.filename.clone().or_else(|| {
            path.file_name()
                .map(|name| name.to_string_lossy().into_owned())
        });
        self.with_filename(filename.unwrap_or_default())
            .parse_bytes(&data)
    }
}

impl Default for DocxForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of parsing a DOCX template.
pub struct DocxFormResult {
    /// The parsed document
    pub document: ParsedDocument,
    /// JSON format to use
    json_format: JsonFormat,
}

impl DocxFormResult {
    /// Convert to JSON in the configured format.
    pub fn to_json(&self) -> Result<String> {
        render::to_json(&self.document, self.json_format)
    }

    /// Get the field statistics.
    pub fn statistics(&self) -> FieldStatistics {
        FieldStatistics::from_document(&self.document)
    }

    /// Convert into a preview (schema plus statistics).
    pub fn into_preview(self) -> Preview {
        Preview::new(self.document)
    }

    /// Get the document.
    pub fn document(&self) -> &ParsedDocument {
        &self.document
    }
}
