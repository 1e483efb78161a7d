//! DOCX parsing module.

mod docx_parser;

pub use docx_parser::{
    heading_level, parse_document_xml, parse_path, DocxParser, HEADING_STYLE_PREFIX,
};
