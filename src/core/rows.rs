use crate::core::grid::parse_grid_position;
use crate::core::header::HeaderIndex;
use crate::core::html::{style_of, text_or_none, BODY, BODY_ITEM, BODY_ROW, HEADER};
use crate::domain::model::{BodyCell, RawRow};
use scraper::ElementRef;

/// Raw label → text rows of a grid table, or nothing when either region is missing.
pub fn rows_from_grid_table(table_root: ElementRef<'_>) -> Vec<RawRow> {
    let header_root = table_root.select(&HEADER).next();
    let body_root = table_root.select(&BODY).next();

    let (Some(header_root), Some(body_root)) = (header_root, body_root) else {
        tracing::debug!(
            header = header_root.is_some(),
            body = body_root.is_some(),
            "grid table is missing a region"
        );
        return Vec::new();
    };

    let index = HeaderIndex::build(header_root);
    tracing::debug!("header index holds {} items", index.len());
    reconstruct_rows(body_root, &index)
}

pub fn reconstruct_rows(body_root: ElementRef<'_>, index: &HeaderIndex) -> Vec<RawRow> {
    body_root
        .select(&BODY_ROW)
        .map(|row| {
            let cells: Vec<BodyCell> = row
                .select(&BODY_ITEM)
                .map(|item| BodyCell {
                    text: text_or_none(item),
                    anchor: parse_grid_position(style_of(&item)).anchor(),
                })
                .collect();
            assemble_row(&cells, index)
        })
        .collect()
}

/// Later cells overwrite earlier ones that resolve to the same label.
pub fn assemble_row(cells: &[BodyCell], index: &HeaderIndex) -> RawRow {
    let mut record = RawRow::new();
    for cell in cells {
        let (row, col) = cell.anchor;
        if let Some(label) = index.label_for(row, col) {
            record.insert(label.to_string(), cell.text.clone());
        }
    }
    record
}
