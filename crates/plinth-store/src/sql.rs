//! SQL statement generation from schema descriptors.
//!
//! Statements are plain string templates filled in from the schema's
//! ordered field list. Every table carries an implicit
//! `id INTEGER PRIMARY KEY AUTOINCREMENT` column. Values travel
//! separately from the statement as `?` placeholders.

use crate::error::StoreError;
use crate::record::{Record, Value};
use crate::schema::{FieldKind, Schema};

/// Returns the `CREATE TABLE IF NOT EXISTS` statement for the schema.
#[must_use]
pub fn create_table_sql(schema: &Schema) -> String {
    let mut columns = vec!["id INTEGER PRIMARY KEY AUTOINCREMENT".to_string()];
    for field in schema.fields() {
        columns.push(format!("{} {}", field.column_name(), field.kind.sql_type()));
    }
    format!(
        "CREATE TABLE IF NOT EXISTS {} ({});",
        schema.table(),
        columns.join(", ")
    )
}

/// Returns the `INSERT` statement and bind values for `record`.
///
/// Reference fields are flattened to the referenced record's id.
///
/// # Errors
///
/// [`StoreError::UnsavedReference`] if a reference field holds a record
/// with no id yet.
pub fn insert_sql(schema: &Schema, record: &Record) -> Result<(String, Vec<Value>), StoreError> {
    let columns: Vec<String> = schema.fields().iter().map(|f| f.column_name()).collect();
    let placeholders = vec!["?"; columns.len()].join(", ");
    let values = bind_values(schema, record)?;

    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({});",
        schema.table(),
        columns.join(", "),
        placeholders
    );
    Ok((sql, values))
}

/// Returns the `SELECT` statement for all rows plus the column order.
#[must_use]
pub fn select_all_sql(schema: &Schema) -> (String, Vec<String>) {
    let columns = schema.columns();
    let sql = format!("SELECT {} FROM {};", columns.join(", "), schema.table());
    (sql, columns)
}

/// Returns the filtered `SELECT` statement, the column order, and the
/// bind values for the filter pairs.
#[must_use]
pub fn select_where_sql(
    schema: &Schema,
    filter: &[(&str, Value)],
) -> (String, Vec<String>, Vec<Value>) {
    let columns = schema.columns();
    let predicates: Vec<String> = filter.iter().map(|(col, _)| format!("{col} = ?")).collect();
    let values: Vec<Value> = filter.iter().map(|(_, v)| v.clone()).collect();

    let sql = format!(
        "SELECT {} FROM {} WHERE {};",
        columns.join(", "),
        schema.table(),
        predicates.join(" AND ")
    );
    (sql, columns, values)
}

/// Returns the `UPDATE` statement and bind values (field values then id).
///
/// # Errors
///
/// [`StoreError::MissingId`] if the record was never saved;
/// [`StoreError::UnsavedReference`] for unsaved reference targets.
pub fn update_sql(schema: &Schema, record: &Record) -> Result<(String, Vec<Value>), StoreError> {
    let id = record.id().ok_or_else(|| StoreError::MissingId {
        table: schema.table().to_string(),
    })?;

    let assignments: Vec<String> = schema
        .fields()
        .iter()
        .map(|f| format!("{} = ?", f.column_name()))
        .collect();
    let mut values = bind_values(schema, record)?;
    values.push(Value::Integer(id));

    let sql = format!(
        "UPDATE {} SET {} WHERE id = ?;",
        schema.table(),
        assignments.join(", ")
    );
    Ok((sql, values))
}

/// Returns the `DELETE` statement and its single id bind value.
///
/// # Errors
///
/// [`StoreError::MissingId`] if the record was never saved.
pub fn delete_sql(schema: &Schema, record: &Record) -> Result<(String, Vec<Value>), StoreError> {
    let id = record.id().ok_or_else(|| StoreError::MissingId {
        table: schema.table().to_string(),
    })?;
    let sql = format!("DELETE FROM {} WHERE id = ?;", schema.table());
    Ok((sql, vec![Value::Integer(id)]))
}

/// Flattens a record into bind values in schema field order.
pub(crate) fn bind_values(schema: &Schema, record: &Record) -> Result<Vec<Value>, StoreError> {
    let mut values = Vec::with_capacity(schema.fields().len());
    for field in schema.fields() {
        let value = record.get(&field.name).cloned().unwrap_or(Value::Null);
        match (&field.kind, value) {
            (FieldKind::Reference(_), Value::Record(target)) => {
                let id = target.id().ok_or_else(|| StoreError::UnsavedReference {
                    field: field.name.clone(),
                })?;
                values.push(Value::Integer(id));
            }
            // A raw id is accepted for reference fields too.
            (FieldKind::Reference(_), value @ Value::Integer(_)) => values.push(value),
            (_, value) => values.push(value),
        }
    }
    Ok(values)
}
