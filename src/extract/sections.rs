//! Section building: keyed sections from the block stream.

use crate::model::{ContentBlock, Section, Table, TableRecord};

/// Build keyed sections from content blocks, preserving document order.
///
/// Keys are `<kind>_<index>` where `index` is the block's position among
/// all blocks, not among blocks of the same kind.
pub fn build_sections(blocks: &[ContentBlock]) -> Vec<Section> {
    blocks
        .iter()
        .enumerate()
        .map(|(index, block)| {
            let id = format!("{}_{}", block.kind(), index);
            match block {
                ContentBlock::Heading { level, text } => Section::Heading {
                    id,
                    text: text.clone(),
                    level: *level,
                },
                ContentBlock::Paragraph { text } => Section::Paragraph {
                    id,
                    text: text.clone(),
                },
                ContentBlock::Table(table) => Section::Table {
                    id,
                    rows: resolve_table(table),
                },
            }
        })
        .collect()
}

/// Resolve a table into one record per body row, keyed by header text.
///
/// Cells beyond the header row's width are keyed `Column<N>`, `N` being the
/// 1-based position of the cell in its row.
pub fn resolve_table(table: &Table) -> Vec<TableRecord> {
    let Some(header) = table.header() else {
        return Vec::new();
    };

    table
        .body()
        .iter()
        .map(|row| {
            let mut record = TableRecord::new();
            for (i, cell) in row.cells.iter().enumerate() {
                match header.cells.get(i) {
                    Some(key) => record.insert(key.as_str(), cell.as_str()),
                    None => record.insert(format!("Column{}", i + 1), cell.as_str()),
                }
            }
            record
        })
        .collect()
}
