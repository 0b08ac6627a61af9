//! Thin SQL mapper and persistence contract for Plinth.
//!
//! Tables are described by explicit [`Schema`] descriptors built at
//! definition time — an ordered list of typed fields, with reference
//! fields flagged explicitly — rather than by runtime introspection.
//! SQL statements are generated from string templates over the schema,
//! and the [`Store`] trait is the `create/save/all/get/update/delete`
//! contract handlers consume.
//!
//! Reference fields follow a fixed column convention: a field named
//! `author` referencing the `author` table materializes as an
//! `author_id INTEGER` column, and reads resolve it with a recursive
//! get-by-id.
//!
//! # Example
//!
//! ```rust
//! use plinth_store::{FieldKind, MemoryStore, Record, Schema, Store, Value};
//!
//! let author = Schema::new("author").field("name", FieldKind::Text);
//! let book = Schema::new("book")
//!     .field("title", FieldKind::Text)
//!     .reference("author", "author");
//!
//! let mut store = MemoryStore::new();
//! store.create(&author).unwrap();
//! store.create(&book).unwrap();
//!
//! let mut ada = Record::new(&author).set("name", "Ada");
//! store.save(&mut ada).unwrap();
//!
//! let mut notes = Record::new(&book)
//!     .set("title", "Notes")
//!     .set("author", Value::Record(Box::new(ada)));
//! store.save(&mut notes).unwrap();
//!
//! let found = store.get(&book, &[("title", Value::from("Notes"))]).unwrap();
//! assert_eq!(found.id(), notes.id());
//! ```

mod error;
mod memory;
mod record;
mod schema;
pub mod sql;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use record::{Record, Value};
pub use schema::{Field, FieldKind, Schema};

/// The persistence collaborator contract.
///
/// Implementations own the row storage; callers hold [`Schema`]
/// descriptors and pass [`Record`]s through. `get` with zero matching
/// rows is an error ([`StoreError::NotFound`]), which handler code is
/// expected to let flow into the dispatch failure boundary or catch
/// explicitly.
pub trait Store {
    /// Creates the table for `schema` if it does not already exist.
    fn create(&mut self, schema: &Schema) -> Result<(), StoreError>;

    /// Inserts a new row and assigns the generated id to `record`.
    fn save(&mut self, record: &mut Record) -> Result<(), StoreError>;

    /// Returns every row of the table, reference fields resolved.
    fn all(&self, schema: &Schema) -> Result<Vec<Record>, StoreError>;

    /// Returns the first row matching every `(column, value)` pair.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] if no row matches.
    fn get(&self, schema: &Schema, filter: &[(&str, Value)]) -> Result<Record, StoreError>;

    /// Rewrites the row identified by the record's id.
    fn update(&mut self, record: &Record) -> Result<(), StoreError>;

    /// Deletes the row identified by the record's id.
    fn delete(&mut self, record: &Record) -> Result<(), StoreError>;
}
