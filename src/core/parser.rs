use crate::core::html::find_table_root;
use crate::core::mapper::map_rows_on;
use crate::core::rows::rows_from_grid_table;
use crate::domain::model::{ListingKind, RawRow, TypedRecord};
use chrono::{Local, NaiveDate};
use scraper::Html;

/// Parse a pasted HTML fragment into typed records of the given kind.
///
/// Never fails: a missing table, header or body gives an empty `Vec`.
pub fn parse_listings(html: &str, kind: ListingKind) -> Vec<TypedRecord> {
    parse_listings_on(html, kind, Local::now().date_naive())
}

/// Same as [`parse_listings`] with an explicit ingestion date.
pub fn parse_listings_on(html: &str, kind: ListingKind, today: NaiveDate) -> Vec<TypedRecord> {
    let rows = parse_raw_rows(html);
    let records = map_rows_on(&rows, kind, today);
    tracing::debug!(%kind, rows = rows.len(), records = records.len(), "parsed grid table");
    records
}

pub fn parse_apartments(html: &str) -> Vec<TypedRecord> {
    parse_listings(html, ListingKind::Apartment)
}

pub fn parse_houses(html: &str) -> Vec<TypedRecord> {
    parse_listings(html, ListingKind::DetachedHouse)
}

/// Header label → cell text per body row, before any schema mapping.
pub fn parse_raw_rows(html: &str) -> Vec<RawRow> {
    let document = Html::parse_document(html);
    match find_table_root(&document) {
        Some(root) => rows_from_grid_table(root),
        None => {
            tracing::warn!("no .p-table grid found in document");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Value;
    use crate::domain::schema::{INGESTED, PRICE, UNIT_PRICE_SQM};

    #[test]
    fn test_plain_text_yields_nothing() {
        assert!(parse_apartments("").is_empty());
        assert!(parse_houses("<p>データなし</p>").is_empty());
    }

    #[test]
    fn test_single_row_table() {
        let html = r#"<div class="p-table small">
            <div class="p-table-header">
              <div class="p-table-header-item" style="grid-column-start: 1">価格</div>
              <div class="p-table-header-item" style="grid-column-start: 2">建物面積</div>
            </div>
            <div class="p-table-body">
              <div class="p-table-body-row">
                <div class="p-table-body-item" style="grid-column-start: 1">3,000万円</div>
                <div class="p-table-body-item" style="grid-column-start: 2">120㎡</div>
              </div>
            </div></div>"#;
        let day = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
        let records = parse_listings_on(html, ListingKind::DetachedHouse, day);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get(PRICE), Some(&Value::Float(3000.0)));
        assert_eq!(records[0].get(UNIT_PRICE_SQM), Some(&Value::Float(25.0)));
        assert_eq!(records[0].get(INGESTED).and_then(Value::as_str), Some("20260102"));
    }
}
