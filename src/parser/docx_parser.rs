//! DOCX body walker using zip and quick-xml.

use std::io::{Cursor, Read};
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use zip::ZipArchive;

use crate::detect::{check_signature, DOCUMENT_PART};
use crate::error::{Error, Result};
use crate::model::{ContentBlock, Table, TableRow};

/// Style-name prefix that marks a paragraph as a heading.
pub const HEADING_STYLE_PREFIX: &str = "Heading";

/// DOCX document parser.
///
/// Owns the opened package for its whole lifetime; the archive is released
/// when the parser is dropped, on success and error paths alike.
pub struct DocxParser<'a> {
    archive: ZipArchive<Cursor<&'a [u8]>>,
}

impl<'a> DocxParser<'a> {
    /// Open a DOCX package from bytes.
    ///
    /// The byte signature is checked first, so non-DOCX input fails with
    /// `UnsupportedFormat` before any structural work.
    pub fn from_bytes(data: &'a [u8]) -> Result<Self> {
        check_signature(data)?;

        let archive = ZipArchive::new(Cursor::new(data))?;
        Ok(Self { archive })
    }

    /// Read the main document part and return its content blocks in order.
    pub fn parse(mut self) -> Result<Vec<ContentBlock>> {
        let xml = self.read_document_part()?;
        let blocks = parse_document_xml(&xml)?;

        log::debug!(
            "DocxParser: {} blocks ({} tables)",
            blocks.len(),
            blocks
                .iter()
                .filter(|b| matches!(b, ContentBlock::Table(_)))
                .count()
        );

        Ok(blocks)
    }

    fn read_document_part(&mut self) -> Result<String> {
        let mut part = self.archive.by_name(DOCUMENT_PART)?;
        let mut xml = String::new();
        part.read_to_string(&mut xml)
            .map_err(|e| Error::CorruptDocument(format!("cannot read {}: {}", DOCUMENT_PART, e)))?;
        Ok(xml)
    }
}

/// Read a DOCX file from disk and return its content blocks.
pub fn parse_path<P: AsRef<Path>>(path: P) -> Result<Vec<ContentBlock>> {
    let data = std::fs::read(path)?;
    DocxParser::from_bytes(&data)?.parse()
}

/// Walk `word/document.xml` and collect the body's content blocks.
pub fn parse_document_xml(xml: &str) -> Result<Vec<ContentBlock>> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(false);

    let mut walker = BlockWalker::default();

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => walker.handle_start(e),
            Ok(Event::Empty(ref e)) => walker.handle_empty(e),
            Ok(Event::End(ref e)) => walker.handle_end(e.local_name().as_ref()),
            Ok(Event::Text(ref e)) => {
                if walker.wants_text() {
                    let text = e.unescape()?;
                    walker.push_text(&text);
                }
            }
            Ok(Event::CData(ref e)) => {
                if walker.wants_text() {
                    walker.push_text(&String::from_utf8_lossy(e));
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::CorruptDocument(format!(
                    "malformed {} at byte {}: {}",
                    DOCUMENT_PART,
                    reader.buffer_position(),
                    e
                )))
            }
            _ => {}
        }
    }

    walker.finish()
}

/// Get the heading level for a paragraph style, or `None` if the style does
/// not mark a heading.
///
/// The level is the integer suffix after `Heading`; a missing or
/// unparseable suffix means level 1.
pub fn heading_level(style: &str) -> Option<i32> {
    let suffix = style.strip_prefix(HEADING_STYLE_PREFIX)?;
    Some(suffix.trim().parse::<i32>().unwrap_or_else(|_| {
        log::debug!("Heading style {:?} has no numeric level, using 1", style);
        1
    }))
}

/// Elements whose whole subtree carries no current body text.
fn is_skipped_element(local: &[u8]) -> bool {
    matches!(
        local,
        b"del" | b"pPrChange" | b"rPrChange" | b"moveFrom" | b"Fallback" | b"instrText"
    )
}

#[derive(Default)]
struct ParagraphState {
    text: String,
    style: Option<String>,
}

#[derive(Default)]
struct TableState {
    rows: Vec<TableRow>,
    row: Option<Vec<String>>,
    cell: Option<Vec<String>>,
}

impl TableState {
    fn into_table(self) -> Table {
        Table { rows: self.rows }
    }
}

/// A table inside a text box. Its text joins the enclosing paragraph,
/// cells separated by `\t` and rows by `\n`.
#[derive(Default)]
struct InlineTable {
    rows: usize,
    cells: usize,
    paragraphs: usize,
}

#[derive(Clone, Copy)]
enum InlinePart {
    Row,
    Cell,
    Paragraph,
}

/// Event-driven state for one pass over the document body.
#[derive(Default)]
struct BlockWalker {
    blocks: Vec<ContentBlock>,
    seen_body: bool,
    in_body: bool,
    paragraph: Option<ParagraphState>,
    paragraph_depth: usize,
    tables: Vec<TableState>,
    inline_tables: Vec<InlineTable>,
    run_depth: usize,
    in_text: bool,
    skip_depth: usize,
}

impl BlockWalker {
    fn wants_text(&self) -> bool {
        self.in_text && self.skip_depth == 0
    }

    fn handle_start(&mut self, e: &BytesStart<'_>) {
        let name = e.local_name();
        let local = name.as_ref();

        if self.skip_depth > 0 {
            self.skip_depth += 1;
            return;
        }
        if is_skipped_element(local) {
            self.skip_depth = 1;
            return;
        }

        match local {
            b"body" => {
                self.seen_body = true;
                self.in_body = true;
            }
            _ if !self.in_body => {}
            b"p" => {
                self.separate_inline(InlinePart::Paragraph);
                self.start_paragraph();
            }
            b"tbl" if self.paragraph_depth > 0 => self.inline_tables.push(InlineTable::default()),
            b"tbl" => self.tables.push(TableState::default()),
            b"tr" if !self.inline_tables.is_empty() => self.separate_inline(InlinePart::Row),
            b"tc" if !self.inline_tables.is_empty() => self.separate_inline(InlinePart::Cell),
            b"tr" => {
                if let Some(table) = self.tables.last_mut() {
                    table.row = Some(Vec::new());
                }
            }
            b"tc" => {
                if let Some(table) = self.tables.last_mut() {
                    table.cell = Some(Vec::new());
                }
            }
            b"r" => self.run_depth += 1,
            b"t" if self.run_depth > 0 => self.in_text = true,
            _ => self.handle_inline(e),
        }
    }

    fn handle_empty(&mut self, e: &BytesStart<'_>) {
        if self.skip_depth > 0 {
            return;
        }
        if e.local_name().as_ref() == b"body" {
            self.seen_body = true;
            return;
        }
        if !self.in_body {
            return;
        }

        match e.local_name().as_ref() {
            // Empty paragraphs carry no text and are never emitted.
            b"p" if !self.inline_tables.is_empty() => self.separate_inline(InlinePart::Paragraph),
            b"tc" if !self.inline_tables.is_empty() => self.separate_inline(InlinePart::Cell),
            b"p" => {
                if self.paragraph_depth == 0 && !self.tables.is_empty() {
                    self.push_cell_paragraph(String::new());
                }
            }
            b"tc" => {
                if let Some(row) = self.tables.last_mut().and_then(|t| t.row.as_mut()) {
                    row.push(String::new());
                }
            }
            _ => self.handle_inline(e),
        }
    }

    /// Elements that may appear as either start or empty tags.
    fn handle_inline(&mut self, e: &BytesStart<'_>) {
        match e.local_name().as_ref() {
            b"pStyle" if self.paragraph_depth == 1 => {
                if let Some(style) = attr_value(e, b"val") {
                    if let Some(paragraph) = self.paragraph.as_mut() {
                        paragraph.style = Some(style);
                    }
                }
            }
            b"tab" if self.run_depth > 0 => self.push_text("\t"),
            b"br" | b"cr" if self.run_depth > 0 => self.push_text("\n"),
            _ => {}
        }
    }

    fn handle_end(&mut self, local: &[u8]) {
        if self.skip_depth > 0 {
            self.skip_depth -= 1;
            return;
        }

        match local {
            b"body" => self.in_body = false,
            _ if !self.in_body => {}
            b"p" => self.end_paragraph(),
            b"t" => self.in_text = false,
            b"r" => self.run_depth = self.run_depth.saturating_sub(1),
            b"tbl" if !self.inline_tables.is_empty() => {
                self.inline_tables.pop();
            }
            b"tr" | b"tc" if !self.inline_tables.is_empty() => {}
            b"tc" => {
                if let Some(table) = self.tables.last_mut() {
                    if let (Some(cell), Some(row)) = (table.cell.take(), table.row.as_mut()) {
                        row.push(cell.join("\n"));
                    }
                }
            }
            b"tr" => {
                if let Some(table) = self.tables.last_mut() {
                    if let Some(row) = table.row.take() {
                        table.rows.push(TableRow::new(row));
                    }
                }
            }
            b"tbl" => self.end_table(),
            _ => {}
        }
    }

    fn start_paragraph(&mut self) {
        self.paragraph_depth += 1;
        if self.paragraph_depth == 1 {
            self.paragraph = Some(ParagraphState::default());
        }
    }

    fn end_paragraph(&mut self) {
        if self.paragraph_depth == 0 {
            return;
        }
        self.paragraph_depth -= 1;
        if self.paragraph_depth > 0 {
            // text-box paragraph, its text stays in the enclosing paragraph
            return;
        }

        let Some(paragraph) = self.paragraph.take() else {
            return;
        };

        if !self.tables.is_empty() {
            self.push_cell_paragraph(paragraph.text);
            return;
        }

        if paragraph.text.trim().is_empty() {
            return;
        }

        let block = match paragraph.style.as_deref().and_then(heading_level) {
            Some(level) => ContentBlock::heading(paragraph.text, level),
            None => ContentBlock::paragraph(paragraph.text),
        };
        self.blocks.push(block);
    }

    fn push_cell_paragraph(&mut self, text: String) {
        if let Some(cell) = self.tables.last_mut().and_then(|t| t.cell.as_mut()) {
            cell.push(text);
        }
    }

    fn end_table(&mut self) {
        let Some(table) = self.tables.pop() else {
            return;
        };
        let table = table.into_table();

        if self.tables.is_empty() {
            self.blocks.push(ContentBlock::Table(table));
        } else {
            // nested table, flattened into the enclosing cell
            self.push_cell_paragraph(table.plain_text());
        }
    }

    /// Write the separator that precedes a row, cell or paragraph of the
    /// innermost text-box table, if it is not the first of its kind.
    fn separate_inline(&mut self, part: InlinePart) {
        let Some(table) = self.inline_tables.last_mut() else {
            return;
        };
        let (seen, separator) = match part {
            InlinePart::Row => {
                table.cells = 0;
                (&mut table.rows, "\n")
            }
            InlinePart::Cell => {
                table.paragraphs = 0;
                (&mut table.cells, "\t")
            }
            InlinePart::Paragraph => (&mut table.paragraphs, "\n"),
        };
        *seen += 1;
        let repeated = *seen > 1;
        if repeated {
            self.push_text(separator);
        }
    }

    fn push_text(&mut self, text: &str) {
        if let Some(paragraph) = self.paragraph.as_mut() {
            paragraph.text.push_str(text);
        }
    }

    fn finish(self) -> Result<Vec<ContentBlock>> {
        if !self.seen_body {
            return Err(Error::CorruptDocument(format!(
                "{} has no document body",
                DOCUMENT_PART
            )));
        }
        if self.in_body
            || self.paragraph_depth > 0
            || !self.tables.is_empty()
            || !self.inline_tables.is_empty()
        {
            return Err(Error::CorruptDocument(format!(
                "unexpected end of {}",
                DOCUMENT_PART
            )));
        }
        Ok(self.blocks)
    }
}

/// Get an attribute value by local name, ignoring the namespace prefix.
fn attr_value(e: &BytesStart<'_>, key: &[u8]) -> Option<String> {
    e.attributes()
        .with_checks(false)
        .flatten()
        .find(|attr| attr.key.local_name().as_ref() == key)
        .and_then(|attr| attr.unescape_value().ok())
        .map(|value| value.into_owned())
}
