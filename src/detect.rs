//! Word format detection and upload validation.

use std::io::Cursor;

use zip::ZipArchive;

use crate::error::{Error, Result};

/// Word document container formats recognized by docxform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordFormat {
    /// Office Open XML package (`.docx`), the only supported format
    Docx,
    /// Legacy binary Word format (`.doc`), recognized but never accepted
    LegacyDoc,
}

impl WordFormat {
    /// File extension for this format, lowercase without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            WordFormat::Docx => "docx",
            WordFormat::LegacyDoc => "doc",
        }
    }

    /// Whether documents in this format can be parsed.
    pub fn is_supported(&self) -> bool {
        matches!(self, WordFormat::Docx)
    }
}

impl std::fmt::Display for WordFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, ".{}", self.extension())
    }
}

/// Path of the main document part inside a DOCX package.
pub const DOCUMENT_PART: &str = "word/document.xml";

/// ZIP local file header magic: PK\x03\x04
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// OLE2 compound file magic used by legacy `.doc` files.
const OLE_MAGIC: &[u8] = &[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];

/// Detect the Word format from a filename's extension (case-insensitive).
///
/// Returns `None` when the name carries neither `.docx` nor `.doc`.
pub fn format_from_filename(filename: &str) -> Option<WordFormat> {
    let lower = filename.to_lowercase();
    if lower.ends_with(".docx") {
        Some(WordFormat::Docx)
    } else if lower.ends_with(".doc") {
        Some(WordFormat::LegacyDoc)
    } else {
        None
    }
}

/// Detect the Word format from the document bytes.
///
/// # Returns
/// * `Ok(WordFormat::Docx)` if the data opens as a ZIP package containing
///   the main document part
/// * `Ok(WordFormat::LegacyDoc)` if the data is an OLE2 compound file
/// * `Err(Error::EmptyInput)` for zero-length data
/// * `Err(Error::UnsupportedFormat)` otherwise
pub fn detect_format_from_bytes(data: &[u8]) -> Result<WordFormat> {
    if data.is_empty() {
        return Err(Error::EmptyInput);
    }

    if data.starts_with(OLE_MAGIC) {
        return Ok(WordFormat::LegacyDoc);
    }

    if !data.starts_with(ZIP_MAGIC) {
        return Err(Error::UnsupportedFormat(
            "not a DOCX package (missing ZIP signature)".to_string(),
        ));
    }

    let archive = ZipArchive::new(Cursor::new(data))
        .map_err(|e| Error::UnsupportedFormat(format!("unreadable ZIP container: {}", e)))?;

    if !archive.file_names().any(|name| name == DOCUMENT_PART) {
        return Err(Error::UnsupportedFormat(format!(
            "ZIP container has no {} part",
            DOCUMENT_PART
        )));
    }

    Ok(WordFormat::Docx)
}

/// Check that the bytes are a parseable DOCX package, ignoring any filename.
pub fn check_signature(data: &[u8]) -> Result<()> {
    let format = detect_format_from_bytes(data)?;
    if format.is_supported() {
        Ok(())
    } else {
        Err(unsupported_format(format))
    }
}

/// Validate an upload: filename extension first, then the byte signature.
///
/// Legacy `.doc` files are always rejected, even when well-formed.
pub fn validate(data: &[u8], filename: Option<&str>) -> Result<()> {
    if data.is_empty() {
        return Err(Error::EmptyInput);
    }

    let filename = filename
        .filter(|name| !name.trim().is_empty())
        .ok_or_else(|| Error::UnsupportedFormat("missing filename".to_string()))?;

    match format_from_filename(filename) {
        Some(format) if format.is_supported() => {}
        Some(format) => return Err(unsupported_format(format)),
        None => {
            return Err(Error::UnsupportedFormat(format!(
                "{} is not a .docx file",
                filename
            )))
        }
    }

    check_signature(data)
}

/// Check whether an upload is a valid Word document. Never fails.
///
/// # Arguments
/// * `data` - Uploaded bytes
/// * `filename` - Original filename, if the upload carried one
pub fn is_valid_word_document(data: &[u8], filename: Option<&str>) -> bool {
    match validate(data, filename) {
        Ok(()) => true,
        Err(e) => {
            log::debug!("Rejected upload {:?}: {}", filename, e);
            false
        }
    }
}

/// Check if bytes represent a DOCX package.
pub fn is_docx_bytes(data: &[u8]) -> bool {
    matches!(detect_format_from_bytes(data), Ok(WordFormat::Docx))
}

fn unsupported_format(format: WordFormat) -> Error {
    Error::UnsupportedFormat(format!(
        "legacy {} format is not supported, save as {}",
        format,
        WordFormat::Docx
    ))
}
