//! Row values as seen by application code.

use indexmap::IndexMap;

use crate::schema::Schema;

/// A single field value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent value.
    Null,
    /// An `INTEGER` value.
    Integer(i64),
    /// A `REAL` value.
    Real(f64),
    /// A `TEXT` value.
    Text(String),
    /// A `BLOB` value.
    Blob(Vec<u8>),
    /// A resolved reference: the full referenced record.
    Record(Box<Record>),
}

impl Value {
    /// Returns the integer form, if any.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the text form, if any.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the referenced record, if this is a resolved reference.
    #[must_use]
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(r) => Some(r),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Real(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Blob(v)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => f.write_str("NULL"),
            Value::Integer(n) => write!(f, "{n}"),
            Value::Real(x) => write!(f, "{x}"),
            Value::Text(s) => f.write_str(s),
            Value::Blob(b) => write!(f, "<{} bytes>", b.len()),
            Value::Record(r) => write!(f, "<{} id={:?}>", r.table(), r.id()),
        }
    }
}

/// An in-flight row: field values keyed by field name, plus the row id
/// once the record has been saved.
///
/// Reference fields hold the full referenced record
/// ([`Value::Record`]); stores flatten them to the referenced id on
/// write and re-hydrate them on read.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    table: String,
    id: Option<i64>,
    values: IndexMap<String, Value>,
}

impl Record {
    /// Creates an empty, unsaved record for `schema`'s table.
    #[must_use]
    pub fn new(schema: &Schema) -> Self {
        Self {
            table: schema.table().to_string(),
            id: None,
            values: IndexMap::new(),
        }
    }

    /// Sets a field value, builder style.
    #[must_use]
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(field.into(), value.into());
        self
    }

    /// Sets a field value in place.
    pub fn put(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(field.into(), value.into());
    }

    /// Returns a field value.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    /// Returns the table this record belongs to.
    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Returns the row id, if the record has been saved.
    #[must_use]
    pub fn id(&self) -> Option<i64> {
        self.id
    }

    /// Assigns the row id. Called by stores after insert.
    pub fn assign_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}
