use crate::core::normalize::{
    area_sqm, minutes, monthly_fee_yen, price_man_yen, sqm_to_tsubo, unit_price, year_month,
};
use crate::domain::model::{ListingKind, RawRow, TypedRecord, Value};
use crate::domain::schema::*;
use chrono::{Local, NaiveDate};
use std::collections::HashMap;

/// Map raw rows onto the fixed schema, stamping today's local date.
pub fn map_rows(rows: &[RawRow], kind: ListingKind) -> Vec<TypedRecord> {
    map_rows_on(rows, kind, Local::now().date_naive())
}

pub fn map_rows_on(rows: &[RawRow], kind: ListingKind, today: NaiveDate) -> Vec<TypedRecord> {
    let stamp = today.format("%Y%m%d").to_string();
    rows.iter().map(|row| map_row(row, kind, &stamp)).collect()
}

fn map_row(row: &RawRow, kind: ListingKind, stamp: &str) -> TypedRecord {
    // 別名 → 正式欄位名
    let mut mapped: HashMap<&'static str, Option<&str>> = HashMap::new();
    for (label, text) in row {
        if let Some(column) = kind.canonical(label) {
            mapped.insert(column, text.as_deref());
        }
    }
    let get = |column: &str| mapped.get(column).copied().flatten();

    let mut record = TypedRecord::empty(kind.columns());
    for column in kind.text_columns() {
        record.set(column, Value::from(get(column).map(str::to_string)));
    }
    // 序號轉為數值
    record.set(NO, coerce_number(get(NO)));

    let price = price_man_yen(get(PRICE));
    record.set(PRICE, price.into());
    record.set(COMMUTE, minutes(get(COMMUTE)).into());
    record.set(BUILT, year_month(get(BUILT)).into());

    match kind {
        ListingKind::Apartment => {
            let area = area_sqm(get(FLOOR_AREA));
            record.set(FLOOR_AREA, area.into());

            let per_sqm = supplied_or(get(UNIT_PRICE_SQM), || ratio(price, area));
            record.set(UNIT_PRICE_SQM, per_sqm.into());

            let per_tsubo = supplied_or(get(UNIT_PRICE_TSUBO), || ratio(price, sqm_to_tsubo(area)));
            record.set(UNIT_PRICE_TSUBO, per_tsubo.into());

            record.set(MANAGEMENT_FEE, monthly_fee_yen(get(MANAGEMENT_FEE)).into());
        }
        ListingKind::DetachedHouse => {
            record.set(LAND_AREA, area_sqm(get(LAND_AREA)).into());
            let building = area_sqm(get(BUILDING_AREA));
            record.set(BUILDING_AREA, building.into());
            // 以建物面積計算，而非土地面積
            record.set(UNIT_PRICE_SQM, ratio(price, building).into());
        }
    }

    record.set(INGESTED, Value::Text(stamp.to_string()));
    record
}

/// A parseable supplied cell wins; otherwise derive.
fn supplied_or(supplied: Option<&str>, derive: impl FnOnce() -> Option<f64>) -> Option<f64> {
    unit_price(supplied).or_else(derive)
}

// 0 視為缺值
fn ratio(numerator: Option<f64>, denominator: Option<f64>) -> Option<f64> {
    match (numerator, denominator) {
        (Some(n), Some(d)) if n != 0.0 && d != 0.0 => Some(n / d),
        _ => None,
    }
}

fn coerce_number(s: Option<&str>) -> Value {
    let Some(s) = s.map(str::trim) else {
        return Value::Null;
    };
    if let Ok(i) = s.parse::<i64>() {
        return Value::Integer(i);
    }
    match s.parse::<f64>() {
        Ok(f) if f.is_finite() => Value::Float(f),
        _ => Value::Null,
    }
}
