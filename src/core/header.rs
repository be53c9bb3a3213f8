use crate::core::grid::parse_grid_position;
use crate::core::html::{style_of, text_or_none, HEADER_ITEM};
use crate::domain::model::{GridRegion, HeaderCell};
use scraper::ElementRef;

/// Header items in document order, used for point-in-region label lookup.
#[derive(Debug, Clone, Default)]
pub struct HeaderIndex {
    cells: Vec<HeaderCell>,
}

impl HeaderIndex {
    pub fn new(cells: Vec<HeaderCell>) -> Self {
        Self { cells }
    }

    /// Items without text are kept: they still occupy grid space.
    pub fn build(header_root: ElementRef<'_>) -> Self {
        let cells = header_root
            .select(&HEADER_ITEM)
            .map(|item| HeaderCell {
                text: text_or_none(item),
                region: parse_grid_position(style_of(&item)),
            })
            .collect();
        Self { cells }
    }

    pub fn cells(&self) -> &[HeaderCell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Label of the most specific header covering `(row, col)`.
    ///
    /// The deepest header row wins; on equal rows the narrowest column span
    /// wins, so a sub-header beats the group header above it. Remaining ties
    /// keep document order.
    pub fn label_for(&self, row: u32, col: u32) -> Option<&str> {
        let mut candidates: Vec<(&str, &GridRegion)> = self
            .cells
            .iter()
            .filter(|cell| cell.region.contains(row, col))
            .filter_map(|cell| cell.text.as_deref().map(|text| (text, &cell.region)))
            .collect();

        candidates.sort_by(|(_, a), (_, b)| {
            b.row_start
                .cmp(&a.row_start)
                .then_with(|| a.col_width().cmp(&b.col_width()))
        });
        candidates.first().map(|(text, _)| *text)
    }
}
