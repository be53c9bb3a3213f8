// 輸出欄位與表頭別名表（唯讀常數）
use crate::domain::model::ListingKind;

pub const NO: &str = "No.";
pub const LISTING_ID: &str = "物件番号";
pub const CATEGORY: &str = "物件種目";
pub const FLOOR_AREA: &str = "専有面積 (㎡)";
pub const LAND_AREA: &str = "土地面積 (㎡)";
pub const BUILDING_AREA: &str = "建物面積 (㎡)";
pub const ADDRESS: &str = "所在地";
pub const TRANSACTION: &str = "取引態様";
pub const PRICE: &str = "価格 (万円)";
pub const ZONING: &str = "用途地域";
pub const UNIT_PRICE_SQM: &str = "㎡単価 (万円/㎡)";
pub const BUILDING_NAME: &str = "建物名";
pub const FLOOR: &str = "所在階";
pub const LAYOUT: &str = "間取";
pub const STATUS: &str = "取引状況";
pub const MANAGEMENT_FEE: &str = "管理費 (円/月)";
pub const UNIT_PRICE_TSUBO: &str = "坪単価 (万円/坪)";
pub const ROAD_ACCESS: &str = "接道状況";
pub const STATION: &str = "沿線駅";
pub const COMMUTE: &str = "交通 (分)";
pub const ROAD_FRONTAGE: &str = "接道１";
pub const AGENCY: &str = "商号";
pub const BUILT: &str = "築年月 (YYYY-MM)";
pub const PHONE: &str = "電話番号";
pub const INGESTED: &str = "入力日 (YYYYMMDD)";

pub static APARTMENT_COLUMNS: &[&str] = &[
    NO,
    LISTING_ID,
    CATEGORY,
    FLOOR_AREA,
    ADDRESS,
    TRANSACTION,
    PRICE,
    ZONING,
    UNIT_PRICE_SQM,
    BUILDING_NAME,
    FLOOR,
    LAYOUT,
    STATUS,
    MANAGEMENT_FEE,
    UNIT_PRICE_TSUBO,
    STATION,
    COMMUTE,
    AGENCY,
    BUILT,
    PHONE,
    INGESTED,
];

pub static HOUSE_COLUMNS: &[&str] = &[
    NO,
    LISTING_ID,
    CATEGORY,
    LAND_AREA,
    ADDRESS,
    TRANSACTION,
    PRICE,
    ZONING,
    BUILDING_AREA,
    UNIT_PRICE_SQM,
    LAYOUT,
    STATUS,
    ROAD_ACCESS,
    STATION,
    COMMUTE,
    ROAD_FRONTAGE,
    AGENCY,
    BUILT,
    PHONE,
    INGESTED,
];

static APARTMENT_ALIASES: &[(&str, &str)] = &[
    ("No.", NO),
    ("物件番号", LISTING_ID),
    ("物件種目", CATEGORY),
    ("専有面積", FLOOR_AREA),
    ("所在地", ADDRESS),
    ("取引態様", TRANSACTION),
    ("価格", PRICE),
    ("用途地域", ZONING),
    ("㎡単価", UNIT_PRICE_SQM),
    ("建物名", BUILDING_NAME),
    ("所在階", FLOOR),
    ("間取", LAYOUT),
    ("取引状況", STATUS),
    ("管理費", MANAGEMENT_FEE),
    ("坪単価", UNIT_PRICE_TSUBO),
    ("沿線駅", STATION),
    ("交通", COMMUTE),
    ("商号", AGENCY),
    ("築年月", BUILT),
    ("電話番号", PHONE),
];

static HOUSE_ALIASES: &[(&str, &str)] = &[
    ("No.", NO),
    ("物件番号", LISTING_ID),
    ("物件種目", CATEGORY),
    ("土地面積", LAND_AREA),
    ("所在地", ADDRESS),
    ("取引態様", TRANSACTION),
    ("価格", PRICE),
    ("用途地域", ZONING),
    ("建物面積", BUILDING_AREA),
    ("間取", LAYOUT),
    ("取引状況", STATUS),
    ("接道状況", ROAD_ACCESS),
    ("沿線駅", STATION),
    ("交通", COMMUTE),
    ("接道１", ROAD_FRONTAGE),
    ("商号", AGENCY),
    ("築年月", BUILT),
    ("電話番号", PHONE),
];

/// Columns copied verbatim from the raw cell text.
pub static APARTMENT_TEXT_COLUMNS: &[&str] = &[
    NO,
    LISTING_ID,
    CATEGORY,
    ADDRESS,
    TRANSACTION,
    ZONING,
    BUILDING_NAME,
    FLOOR,
    LAYOUT,
    STATUS,
    STATION,
    AGENCY,
    PHONE,
];

pub static HOUSE_TEXT_COLUMNS: &[&str] = &[
    NO,
    LISTING_ID,
    CATEGORY,
    ADDRESS,
    TRANSACTION,
    ZONING,
    LAYOUT,
    STATUS,
    ROAD_ACCESS,
    STATION,
    ROAD_FRONTAGE,
    AGENCY,
    PHONE,
];

impl ListingKind {
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            ListingKind::Apartment => APARTMENT_COLUMNS,
            ListingKind::DetachedHouse => HOUSE_COLUMNS,
        }
    }

    pub fn text_columns(&self) -> &'static [&'static str] {
        match self {
            ListingKind::Apartment => APARTMENT_TEXT_COLUMNS,
            ListingKind::DetachedHouse => HOUSE_TEXT_COLUMNS,
        }
    }

    /// Canonical schema column for a header label, if this kind knows it.
    pub fn canonical(&self, label: &str) -> Option<&'static str> {
        let aliases = match self {
            ListingKind::Apartment => APARTMENT_ALIASES,
            ListingKind::DetachedHouse => HOUSE_ALIASES,
        };
        aliases
            .iter()
            .find(|(alias, _)| *alias == label)
            .map(|(_, column)| *column)
    }
}
