//! Explicit table descriptors.
//!
//! A [`Schema`] is built once at definition time and carries everything
//! the SQL generator and stores need: the table name and an ordered list
//! of typed fields. Every table gets an implicit
//! `id INTEGER PRIMARY KEY AUTOINCREMENT` column that is never part of
//! the field list.

/// The storage type of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// `INTEGER` column.
    Integer,
    /// `REAL` column.
    Real,
    /// `TEXT` column.
    Text,
    /// `BLOB` column.
    Blob,
    /// A row reference into another table; materializes as an
    /// `<name>_id INTEGER` column resolved by recursive get-by-id.
    Reference(
        /// The referenced table name.
        String,
    ),
}

impl FieldKind {
    /// Returns the SQL type for the column.
    #[must_use]
    pub fn sql_type(&self) -> &'static str {
        match self {
            FieldKind::Integer | FieldKind::Reference(_) => "INTEGER",
            FieldKind::Real => "REAL",
            FieldKind::Text => "TEXT",
            FieldKind::Blob => "BLOB",
        }
    }
}

/// One declared field of a schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// The field name as seen by application code.
    pub name: String,
    /// The field's storage type.
    pub kind: FieldKind,
}

impl Field {
    /// Returns the column name, applying the `_id` suffix convention for
    /// reference fields.
    #[must_use]
    pub fn column_name(&self) -> String {
        match self.kind {
            FieldKind::Reference(_) => format!("{}_id", self.name),
            _ => self.name.clone(),
        }
    }
}

/// An explicit table descriptor.
///
/// # Example
///
/// ```rust
/// use plinth_store::{FieldKind, Schema};
///
/// let book = Schema::new("book")
///     .field("title", FieldKind::Text)
///     .field("pages", FieldKind::Integer)
///     .reference("author", "author");
///
/// assert_eq!(book.columns(), vec!["id", "title", "pages", "author_id"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    table: String,
    fields: Vec<Field>,
}

impl Schema {
    /// Creates a descriptor for `table` with no fields yet.
    #[must_use]
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            fields: Vec::new(),
        }
    }

    /// Adds a plain field.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, kind: FieldKind) -> Self {
        self.fields.push(Field {
            name: name.into(),
            kind,
        });
        self
    }

    /// Adds a reference field pointing at `target` table.
    #[must_use]
    pub fn reference(self, name: impl Into<String>, target: impl Into<String>) -> Self {
        self.field(name, FieldKind::Reference(target.into()))
    }

    /// Returns the table name.
    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Returns the declared fields in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Looks a field up by name.
    #[must_use]
    pub fn find_field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Returns all column names, `id` first, in declaration order.
    #[must_use]
    pub fn columns(&self) -> Vec<String> {
        let mut columns = Vec::with_capacity(self.fields.len() + 1);
        columns.push("id".to_string());
        columns.extend(self.fields.iter().map(Field::column_name));
        columns
    }
}
