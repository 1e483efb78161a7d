//! Document model types for template content representation.
//!
//! This module defines the intermediate representation that bridges
//! DOCX parsing and schema output: raw content blocks as read from the
//! document body, and the keyed sections and form fields built from them.

mod block;
mod document;
mod field;
mod section;
mod table;

pub use block::ContentBlock;
pub use document::{Metadata, ParsedDocument, CREATE_TIME_FORMAT, SCHEMA_VERSION};
pub use field::{FieldType, FormField, SourceType};
pub use section::Section;
pub use table::{Table, TableRecord, TableRow};
