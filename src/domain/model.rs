use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// 1-based, inclusive rectangle a grid item occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridRegion {
    pub row_start: u32,
    pub row_end: u32,
    pub col_start: u32,
    pub col_end: u32,
}

impl GridRegion {
    pub fn contains(&self, row: u32, col: u32) -> bool {
        self.row_start <= row && row <= self.row_end && self.col_start <= col && col <= self.col_end
    }

    pub fn col_width(&self) -> u32 {
        self.col_end.saturating_sub(self.col_start)
    }

    pub fn anchor(&self) -> (u32, u32) {
        (self.row_start, self.col_start)
    }
}

impl Default for GridRegion {
    fn default() -> Self {
        Self {
            row_start: 1,
            row_end: 1,
            col_start: 1,
            col_end: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderCell {
    pub text: Option<String>,
    pub region: GridRegion,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BodyCell {
    pub text: Option<String>,
    pub anchor: (u32, u32),
}

/// 表頭標籤 → 儲存格文字
pub type RawRow = HashMap<String, Option<String>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingKind {
    Apartment,
    DetachedHouse,
}

impl ListingKind {
    /// Sheet / file stem used on export.
    pub fn sheet_name(&self) -> &'static str {
        match self {
            ListingKind::Apartment => "apartments",
            ListingKind::DetachedHouse => "villas",
        }
    }
}

impl fmt::Display for ListingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingKind::Apartment => write!(f, "apartment"),
            ListingKind::DetachedHouse => write!(f, "detached house"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Text(String),
    Integer(i64),
    Float(f64),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Cell text for delimited export; nulls become empty cells.
    pub fn to_cell(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Text(s) => s.clone(),
            Value::Integer(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
        }
    }
}

impl From<Option<f64>> for Value {
    fn from(v: Option<f64>) -> Self {
        v.map_or(Value::Null, Value::Float)
    }
}

impl From<Option<i64>> for Value {
    fn from(v: Option<i64>) -> Self {
        v.map_or(Value::Null, Value::Integer)
    }
}

impl From<Option<String>> for Value {
    fn from(v: Option<String>) -> Self {
        v.map_or(Value::Null, Value::Text)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_none(),
            Value::Text(s) => serializer.serialize_str(s),
            Value::Integer(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
        }
    }
}

/// One output row. Values are stored in the schema's column order.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedRecord {
    columns: &'static [&'static str],
    values: Vec<Value>,
}

impl TypedRecord {
    /// All-null record over the given columns.
    pub fn empty(columns: &'static [&'static str]) -> Self {
        Self {
            columns,
            values: vec![Value::Null; columns.len()],
        }
    }

    pub fn columns(&self) -> &'static [&'static str] {
        self.columns
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        let idx = self.columns.iter().position(|c| *c == column)?;
        self.values.get(idx)
    }

    /// Unknown columns are ignored.
    pub fn set(&mut self, column: &str, value: Value) {
        if let Some(idx) = self.columns.iter().position(|c| *c == column) {
            self.values[idx] = value;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Value)> {
        self.columns.iter().copied().zip(self.values.iter())
    }
}

impl Serialize for TypedRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (column, value) in self.iter() {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

/// 一份待解析的 HTML 原始檔
#[derive(Debug, Clone)]
pub struct SourceDocument {
    pub kind: ListingKind,
    pub name: String,
    pub html: String,
}

#[derive(Debug, Clone, Default)]
pub struct TransformResult {
    pub documents: usize,
    pub apartments: Vec<TypedRecord>,
    pub houses: Vec<TypedRecord>,
}

impl TransformResult {
    pub fn is_empty(&self) -> bool {
        self.apartments.is_empty() && self.houses.is_empty()
    }

    pub fn total(&self) -> usize {
        self.apartments.len() + self.houses.len()
    }

    pub fn records(&self, kind: ListingKind) -> &[TypedRecord] {
        match kind {
            ListingKind::Apartment => &self.apartments,
            ListingKind::DetachedHouse => &self.houses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static COLS: &[&str] = &["a", "b"];

    #[test]
    fn test_region_contains_is_inclusive() {
        let region = GridRegion {
            row_start: 1,
            row_end: 2,
            col_start: 3,
            col_end: 4,
        };
        assert!(region.contains(1, 3));
        assert!(region.contains(2, 4));
        assert!(!region.contains(3, 3));
        assert!(!region.contains(1, 5));
        assert_eq!(region.col_width(), 1);
    }

    #[test]
    fn test_inverted_region_has_zero_width() {
        let region = GridRegion {
            row_start: 1,
            row_end: 1,
            col_start: 5,
            col_end: 2,
        };
        assert_eq!(region.col_width(), 0);
        assert!(!region.contains(1, 3));
    }

    #[test]
    fn test_record_serializes_in_column_order() {
        let mut record = TypedRecord::empty(COLS);
        record.set("b", Value::Float(1.5));
        record.set("missing", Value::Integer(1));

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"a":null,"b":1.5}"#);
    }
}
