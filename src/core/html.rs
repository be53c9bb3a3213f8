use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("grid table selectors are valid CSS")
}

// 獨棟頁面使用 .p-table.small，公寓頁面可能只有 .p-table
pub static COMPACT_TABLE: Lazy<Selector> = Lazy::new(|| selector(".p-table.small"));
pub static TABLE: Lazy<Selector> = Lazy::new(|| selector(".p-table"));
pub static HEADER: Lazy<Selector> = Lazy::new(|| selector(".p-table-header"));
pub static HEADER_ITEM: Lazy<Selector> = Lazy::new(|| selector(".p-table-header-item"));
pub static BODY: Lazy<Selector> = Lazy::new(|| selector(".p-table-body"));
pub static BODY_ROW: Lazy<Selector> = Lazy::new(|| selector(".p-table-body-row"));
pub static BODY_ITEM: Lazy<Selector> = Lazy::new(|| selector(".p-table-body-item"));

/// The compact table wins when both variants are present.
pub fn find_table_root(document: &Html) -> Option<ElementRef<'_>> {
    document
        .select(&COMPACT_TABLE)
        .next()
        .or_else(|| document.select(&TABLE).next())
}

/// Visible text with whitespace collapsed; `None` when nothing is left.
pub fn text_or_none(element: ElementRef<'_>) -> Option<String> {
    let joined = element.text().collect::<Vec<_>>().join(" ");
    let collapsed = joined.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        None
    } else {
        Some(collapsed)
    }
}

pub fn style_of<'a>(element: &ElementRef<'a>) -> Option<&'a str> {
    element.value().attr("style")
}
