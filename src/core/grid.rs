//! Resolves CSS-grid placement declarations found in inline `style` attributes.
//!
//! Only two forms per axis are understood: `grid-row: A / span N` and
//! `grid-row-start: A` (likewise for columns). Anything else falls back to
//! row 1 / column 1 with a span of 1.

use crate::domain::model::GridRegion;
use once_cell::sync::Lazy;
use regex::Regex;

static ROW_RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"grid-row:\s*(\d+)\s*/\s*span\s*(\d+)").unwrap());
static ROW_START: Lazy<Regex> = Lazy::new(|| Regex::new(r"grid-row-start:\s*(\d+)").unwrap());
static COL_RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"grid-column:\s*(\d+)\s*/\s*span\s*(\d+)").unwrap());
static COL_START: Lazy<Regex> = Lazy::new(|| Regex::new(r"grid-column-start:\s*(\d+)").unwrap());

/// Parse a style declaration into a region. Never fails.
pub fn parse_grid_position(style: Option<&str>) -> GridRegion {
    let style = style.unwrap_or("");
    let (row_start, row_span) = resolve_axis(style, &ROW_RANGE, &ROW_START);
    let (col_start, col_span) = resolve_axis(style, &COL_RANGE, &COL_START);

    GridRegion {
        row_start,
        row_end: row_start.saturating_add(row_span - 1),
        col_start,
        col_end: col_start.saturating_add(col_span - 1),
    }
}

// (start, span)，兩者皆至少為 1
fn resolve_axis(style: &str, range: &Regex, start_only: &Regex) -> (u32, u32) {
    if let Some(caps) = range.captures(style) {
        if let (Ok(start), Ok(span)) = (caps[1].parse::<u32>(), caps[2].parse::<u32>()) {
            return (start.max(1), span.max(1));
        }
    }
    if let Some(caps) = start_only.captures(style) {
        if let Ok(start) = caps[1].parse::<u32>() {
            return (start.max(1), 1);
        }
    }
    (1, 1)
}
