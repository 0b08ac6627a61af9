//! Store error taxonomy.

use thiserror::Error;

/// Errors surfaced by [`Store`](crate::Store) implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A `get` matched zero rows.
    #[error("{table} instance with {filter} does not exist")]
    NotFound {
        /// The queried table.
        table: String,
        /// Human-readable rendering of the filter pairs.
        filter: String,
    },

    /// The table was never created on this store.
    #[error("unknown table '{table}'")]
    UnknownTable {
        /// The missing table name.
        table: String,
    },

    /// A filter or record referenced a column the schema does not declare.
    #[error("unknown column '{column}' on table '{table}'")]
    UnknownColumn {
        /// The table being accessed.
        table: String,
        /// The undeclared column name.
        column: String,
    },

    /// An update or delete was attempted on a record that was never saved.
    #[error("record for table '{table}' has no id")]
    MissingId {
        /// The record's table.
        table: String,
    },

    /// A reference field holds a record that was never saved.
    #[error("reference field '{field}' holds an unsaved record")]
    UnsavedReference {
        /// The reference field name.
        field: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_names_table_and_filter() {
        let err = StoreError::NotFound {
            table: "book".to_string(),
            filter: "id = 7".to_string(),
        };
        assert_eq!(err.to_string(), "book instance with id = 7 does not exist");
    }

    #[test]
    fn test_missing_id_message() {
        let err = StoreError::MissingId {
            table: "author".to_string(),
        };
        assert!(err.to_string().contains("author"));
    }
}
