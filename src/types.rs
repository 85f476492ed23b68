use chrono::{NaiveDate, NaiveDateTime};
use indexmap::IndexMap;
use std::fmt;

use crate::utils::format_number;

/// A single scalar exported into one cell / field.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Date(NaiveDateTime),
}

/// Classification tag of a [`Value`], used when a column's type is locked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Date,
}

impl ValueKind {
    /// Strings, booleans and dates go to the shared string table.
    pub fn is_string_like(self) -> bool {
        matches!(self, ValueKind::String | ValueKind::Bool | ValueKind::Date)
    }
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Date(_) => ValueKind::Date,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => f.write_str(if *b { "true" } else { "false" }),
            Value::Number(n) => f.write_str(&format_number(*n)),
            Value::String(s) => f.write_str(s),
            Value::Date(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S")),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(dt: NaiveDateTime) -> Self {
        Value::Date(dt)
    }
}

impl From<NaiveDate> for Value {
    fn from(d: NaiveDate) -> Self {
        Value::Date(d.and_time(chrono::NaiveTime::MIN))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => n.as_f64().map(Value::Number).unwrap_or(Value::Null),
            serde_json::Value::String(s) => Value::String(s),
            nested => Value::String(nested.to_string()),
        }
    }
}

/// Keyed row, iterated in insertion order.
pub type Record = IndexMap<String, Value>;

/// One input row: a keyed record, or a bare scalar ("special data").
#[derive(Debug, Clone, PartialEq)]
pub enum Row {
    Record(Record),
    Value(Value),
}

impl Row {
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Row::Record(r) => Some(r),
            Row::Value(_) => None,
        }
    }

    /// Field lookup. `None` means the key is absent, not that the value is null.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_record().and_then(|r| r.get(key))
    }
}

impl From<Record> for Row {
    fn from(r: Record) -> Self {
        Row::Record(r)
    }
}

impl From<Value> for Row {
    fn from(v: Value) -> Self {
        Row::Value(v)
    }
}

impl From<serde_json::Value> for Row {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Object(map) => {
                Row::Record(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
            other => Row::Value(Value::from(other)),
        }
    }
}

/// Build a keyed row from `(key, value)` pairs.
pub fn record<K, V, I>(pairs: I) -> Row
where
    K: Into<String>,
    V: Into<Value>,
    I: IntoIterator<Item = (K, V)>,
{
    Row::Record(pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Unsupported CSV file type: {0}")]
    UnsupportedFileType(String),
    #[error("Column width must be a non-negative number, got {0}")]
    InvalidColumnWidth(f64),
    #[error("Row height must be a non-negative number, got {0}")]
    InvalidRowHeight(f64),
    #[error("Invalid worksheet name: {0}")]
    InvalidWorksheetName(String),
    #[error("Unexpected Excel folder type: {0}")]
    UnknownFolderType(u8),
    #[error("Unexpected Excel file type: {0}")]
    UnknownFileType(u8),
    #[error("Archive error: {0}")]
    Archive(String),
    #[error("Base64 error: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
