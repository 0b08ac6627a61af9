//! In-memory reference implementation of the [`Store`] contract.
//!
//! Rows are kept as flat column values (reference fields stored as raw
//! ids, exactly what the generated SQL would persist); reads re-hydrate
//! references by recursive get-by-id against the registered schemas.

use indexmap::IndexMap;

use crate::error::StoreError;
use crate::record::{Record, Value};
use crate::schema::{FieldKind, Schema};
use crate::sql::bind_values;
use crate::Store;

/// One stored row: the id plus flat column values in field order.
#[derive(Debug, Clone)]
struct StoredRow {
    id: i64,
    columns: Vec<Value>,
}

/// A created table: its schema, its rows, and the id counter.
#[derive(Debug, Clone)]
struct StoredTable {
    schema: Schema,
    next_id: i64,
    rows: Vec<StoredRow>,
}

/// An in-memory [`Store`].
///
/// Behaves like the SQL the generator emits would against an empty
/// database: `create` is idempotent, ids auto-increment from 1, and a
/// `get` miss is a [`StoreError::NotFound`] naming the table and filter.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: IndexMap<String, StoredTable>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the names of created tables, in creation order.
    #[must_use]
    pub fn tables(&self) -> Vec<&str> {
        self.tables.keys().map(String::as_str).collect()
    }

    fn table(&self, name: &str) -> Result<&StoredTable, StoreError> {
        self.tables.get(name).ok_or_else(|| StoreError::UnknownTable {
            table: name.to_string(),
        })
    }

    fn table_mut(&mut self, name: &str) -> Result<&mut StoredTable, StoreError> {
        self.tables
            .get_mut(name)
            .ok_or_else(|| StoreError::UnknownTable {
                table: name.to_string(),
            })
    }

    /// Reads the flat value of `column` from a row ("id" included).
    fn column_value(schema: &Schema, row: &StoredRow, column: &str) -> Option<Value> {
        if column == "id" {
            return Some(Value::Integer(row.id));
        }
        schema
            .fields()
            .iter()
            .position(|f| f.column_name() == column)
            .and_then(|i| row.columns.get(i).cloned())
    }

    /// Rebuilds a [`Record`] from a stored row, resolving reference
    /// columns through a recursive get-by-id.
    fn hydrate(&self, schema: &Schema, row: &StoredRow) -> Result<Record, StoreError> {
        let mut record = Record::new(schema);
        record.assign_id(row.id);

        for (field, value) in schema.fields().iter().zip(&row.columns) {
            match (&field.kind, value) {
                (FieldKind::Reference(target), Value::Integer(id)) => {
                    let target_schema = self.table(target)?.schema.clone();
                    let resolved = self.get(&target_schema, &[("id", Value::Integer(*id))])?;
                    record.put(field.name.clone(), Value::Record(Box::new(resolved)));
                }
                (FieldKind::Reference(_), Value::Null) => {
                    record.put(field.name.clone(), Value::Null);
                }
                (_, value) => record.put(field.name.clone(), value.clone()),
            }
        }
        Ok(record)
    }

    fn render_filter(filter: &[(&str, Value)]) -> String {
        filter
            .iter()
            .map(|(col, val)| format!("{col} = {val}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Store for MemoryStore {
    fn create(&mut self, schema: &Schema) -> Result<(), StoreError> {
        // IF NOT EXISTS semantics: creating twice is a no-op.
        self.tables
            .entry(schema.table().to_string())
            .or_insert_with(|| StoredTable {
                schema: schema.clone(),
                next_id: 1,
                rows: Vec::new(),
            });
        Ok(())
    }

    fn save(&mut self, record: &mut Record) -> Result<(), StoreError> {
        let schema = self.table(record.table())?.schema.clone();
        let columns = bind_values(&schema, record)?;

        let table = self.table_mut(record.table())?;
        let id = table.next_id;
        table.next_id += 1;
        table.rows.push(StoredRow { id, columns });
        record.assign_id(id);
        Ok(())
    }

    fn all(&self, schema: &Schema) -> Result<Vec<Record>, StoreError> {
        let table = self.table(schema.table())?;
        table
            .rows
            .iter()
            .map(|row| self.hydrate(&table.schema, row))
            .collect()
    }

    fn get(&self, schema: &Schema, filter: &[(&str, Value)]) -> Result<Record, StoreError> {
        let table = self.table(schema.table())?;

        for (column, _) in filter {
            if *column != "id"
                && !table.schema.fields().iter().any(|f| f.column_name() == *column)
            {
                return Err(StoreError::UnknownColumn {
                    table: schema.table().to_string(),
                    column: (*column).to_string(),
                });
            }
        }

        let row = table.rows.iter().find(|row| {
            filter.iter().all(|(column, expected)| {
                Self::column_value(&table.schema, row, column).as_ref() == Some(expected)
            })
        });

        match row {
            Some(row) => self.hydrate(&table.schema, row),
            None => Err(StoreError::NotFound {
                table: schema.table().to_string(),
                filter: Self::render_filter(filter),
            }),
        }
    }

    fn update(&mut self, record: &Record) -> Result<(), StoreError> {
        let id = record.id().ok_or_else(|| StoreError::MissingId {
            table: record.table().to_string(),
        })?;
        let schema = self.table(record.table())?.schema.clone();
        let columns = bind_values(&schema, record)?;

        let table = self.table_mut(record.table())?;
        match table.rows.iter_mut().find(|row| row.id == id) {
            Some(row) => {
                row.columns = columns;
                Ok(())
            }
            None => Err(StoreError::NotFound {
                table: record.table().to_string(),
                filter: format!("id = {id}"),
            }),
        }
    }

    fn delete(&mut self, record: &Record) -> Result<(), StoreError> {
        let id = record.id().ok_or_else(|| StoreError::MissingId {
            table: record.table().to_string(),
        })?;
        let table = self.table_mut(record.table())?;
        let before = table.rows.len();
        table.rows.retain(|row| row.id != id);

        if table.rows.len() == before {
            return Err(StoreError::NotFound {
                table: record.table().to_string(),
                filter: format!("id = {id}"),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_schema() -> Schema {
        Schema::new("user")
            .field("name", FieldKind::Text)
            .field("age", FieldKind::Integer)
    }

    #[test]
    fn test_create_is_idempotent() {
        let mut store = MemoryStore::new();
        store.create(&user_schema()).unwrap();
        store.create(&user_schema()).unwrap();
        assert_eq!(store.tables(), vec!["user"]);
    }

    #[test]
    fn test_save_assigns_incrementing_ids() {
        let mut store = MemoryStore::new();
        let schema = user_schema();
        store.create(&schema).unwrap();

        let mut ada = Record::new(&schema).set("name", "Ada").set("age", 36i64);
        let mut alan = Record::new(&schema).set("name", "Alan").set("age", 41i64);
        store.save(&mut ada).unwrap();
        store.save(&mut alan).unwrap();

        assert_eq!(ada.id(), Some(1));
        assert_eq!(alan.id(), Some(2));
    }

    #[test]
    fn test_all_returns_rows_in_insert_order() {
        let mut store = MemoryStore::new();
        let schema = user_schema();
        store.create(&schema).unwrap();

        for name in ["Ada", "Alan", "Grace"] {
            let mut record = Record::new(&schema).set("name", name).set("age", 1i64);
            store.save(&mut record).unwrap();
        }

        let rows = store.all(&schema).unwrap();
        let names: Vec<_> = rows
            .iter()
            .map(|r| r.get("name").unwrap().as_text().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["Ada", "Alan", "Grace"]);
    }

    #[test]
    fn test_get_by_column() {
        let mut store = MemoryStore::new();
        let schema = user_schema();
        store.create(&schema).unwrap();

        let mut ada = Record::new(&schema).set("name", "Ada").set("age", 36i64);
        store.save(&mut ada).unwrap();

        let found = store.get(&schema, &[("name", Value::from("Ada"))]).unwrap();
        assert_eq!(found.id(), Some(1));
        assert_eq!(found.get("age").and_then(Value::as_int), Some(36));
    }

    #[test]
    fn test_get_miss_is_not_found_with_filter_text() {
        let mut store = MemoryStore::new();
        let schema = user_schema();
        store.create(&schema).unwrap();

        let err = store
            .get(&schema, &[("name", Value::from("Nobody"))])
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "user instance with name = Nobody does not exist"
        );
    }

    #[test]
    fn test_get_unknown_column_is_config_error() {
        let mut store = MemoryStore::new();
        let schema = user_schema();
        store.create(&schema).unwrap();

        let err = store
            .get(&schema, &[("nickname", Value::from("Ada"))])
            .unwrap_err();
        assert!(matches!(err, StoreError::UnknownColumn { .. }));
    }

    #[test]
    fn test_update_overwrites_row() {
        let mut store = MemoryStore::new();
        let schema = user_schema();
        store.create(&schema).unwrap();

        let mut ada = Record::new(&schema).set("name", "Ada").set("age", 36i64);
        store.save(&mut ada).unwrap();

        ada.put("age", 37i64);
        store.update(&ada).unwrap();

        let found = store.get(&schema, &[("id", Value::Integer(1))]).unwrap();
        assert_eq!(found.get("age").and_then(Value::as_int), Some(37));
    }

    #[test]
    fn test_delete_removes_row() {
        let mut store = MemoryStore::new();
        let schema = user_schema();
        store.create(&schema).unwrap();

        let mut ada = Record::new(&schema).set("name", "Ada").set("age", 36i64);
        store.save(&mut ada).unwrap();
        store.delete(&ada).unwrap();

        assert!(store.all(&schema).unwrap().is_empty());
        assert!(store.delete(&ada).is_err());
    }

    #[test]
    fn test_update_unsaved_record_is_missing_id() {
        let mut store = MemoryStore::new();
        let schema = user_schema();
        store.create(&schema).unwrap();

        let record = Record::new(&schema).set("name", "Ada");
        assert!(matches!(
            store.update(&record),
            Err(StoreError::MissingId { .. })
        ));
    }

    #[test]
    fn test_reference_round_trip_with_recursive_hydration() {
        let mut store = MemoryStore::new();
        let author = Schema::new("author").field("name", FieldKind::Text);
        let book = Schema::new("book")
            .field("title", FieldKind::Text)
            .reference("author", "author");
        store.create(&author).unwrap();
        store.create(&book).unwrap();

        let mut ada = Record::new(&author).set("name", "Ada");
        store.save(&mut ada).unwrap();

        let mut notes = Record::new(&book)
            .set("title", "Notes")
            .set("author", Value::Record(Box::new(ada.clone())));
        store.save(&mut notes).unwrap();

        let found = store.get(&book, &[("title", Value::from("Notes"))]).unwrap();
        let resolved = found.get("author").and_then(Value::as_record).unwrap();
        assert_eq!(resolved.id(), ada.id());
        assert_eq!(resolved.get("name").and_then(Value::as_text), Some("Ada"));
    }

    #[test]
    fn test_unknown_table_errors() {
        let store = MemoryStore::new();
        let schema = user_schema();
        assert!(matches!(
            store.all(&schema),
            Err(StoreError::UnknownTable { .. })
        ));
    }
}
