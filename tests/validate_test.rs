//! Integration tests for upload validation.

mod common;

use common::{zip_parts, DocxBuilder};
use docxform::{
    detect_format_from_bytes, is_valid_word_document, parse_upload, preview, validate, ErrorKind,
    WordFormat,
};

const OLE_HEADER: [u8; 8] = [0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];

fn valid_docx() -> Vec<u8> {
    DocxBuilder::new().paragraph("Hello ${name}").build()
}

#[test]
fn test_valid_docx_is_accepted() {
    let data = valid_docx();
    assert!(is_valid_word_document(&data, Some("form.docx")));
    assert!(is_valid_word_document(&data, Some("Form.DocX")));
}

#[test]
fn test_wrong_extensions_are_rejected() {
    let data = valid_docx();
    assert!(!is_valid_word_document(&data, Some("form.txt")));
    assert!(!is_valid_word_document(&data, Some("form.doc")));
    assert!(!is_valid_word_document(&data, Some("form")));
    assert!(!is_valid_word_document(&data, Some("form.docx.pdf")));
}

#[test]
fn test_missing_filename_is_rejected() {
    let data = valid_docx();
    assert!(!is_valid_word_document(&data, None));
    assert!(!is_valid_word_document(&data, Some("")));
    assert_eq!(
        validate(&data, None).unwrap_err().kind(),
        ErrorKind::UnsupportedFormat
    );
}

#[test]
fn test_empty_bytes_are_rejected() {
    assert!(!is_valid_word_document(&[], Some("form.docx")));
    assert_eq!(
        validate(&[], Some("form.docx")).unwrap_err().kind(),
        ErrorKind::EmptyInput
    );
}

#[test]
fn test_renamed_text_file_is_rejected() {
    let err = validate(b"just some text", Some("form.docx")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedFormat);
}

#[test]
fn test_zip_without_document_part_is_rejected() {
    let data = zip_parts(&[("xl/workbook.xml", "<workbook/>")]);
    assert!(!is_valid_word_document(&data, Some("book.docx")));
}

#[test]
fn test_legacy_doc_is_detected_and_rejected() {
    let mut data = OLE_HEADER.to_vec();
    data.extend_from_slice(&[0u8; 504]);

    assert_eq!(detect_format_from_bytes(&data).unwrap(), WordFormat::LegacyDoc);
    assert!(!is_valid_word_document(&data, Some("old.doc")));
    assert!(!is_valid_word_document(&data, Some("old.docx")));
}

#[test]
fn test_detect_docx_bytes() {
    assert_eq!(
        detect_format_from_bytes(&valid_docx()).unwrap(),
        WordFormat::Docx
    );
}

#[test]
fn test_parse_upload_and_preview() {
    let data = valid_docx();

    let doc = parse_upload(&data, "form.docx").unwrap();
    assert_eq!(doc.form_fields.len(), 1);

    let shown = preview(&data, "form.docx").unwrap();
    assert_eq!(shown.statistics.total_fields, 1);

    let err = preview(&data, "form.txt").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedFormat);
}
