//! Schema extraction from content blocks.
//!
//! Sections and form fields are both built from the same block stream;
//! the assembler joins them with metadata into a [`ParsedDocument`].
//!
//! [`ParsedDocument`]: crate::model::ParsedDocument

mod assemble;
mod classify;
mod fields;
mod placeholder;
mod sections;

pub use assemble::{assemble, assemble_at};
pub use classify::classify;
pub use fields::{extract_fields, FieldExtractor};
pub use placeholder::{Placeholder, PlaceholderScanner, PlaceholderSyntax};
pub use sections::{build_sections, resolve_table};
