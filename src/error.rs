use rusqlite::ErrorCode;
use thiserror::Error;

use std::fmt::Display;

pub type StoreResult<T> = Result<T, StoreError>;

///
/// Failures surfaced by the query layer.
///
/// A missing record is never one of these, lookups report it through
/// `Option`, [`crate::delete::DeleteOutcome`] or [`crate::report::ReportOutcome`].
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot reach the store at '{target}': {source}")]
    ConnectionFailure {
        target: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("{op}({key}) was rejected by an integrity rule: {source}")]
    ConstraintViolation {
        op: &'static str,
        key: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("{op}({key}) failed: {source}")]
    QueryExecution {
        op: &'static str,
        key: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("table '{table}' is missing from the store")]
    MissingTable { table: String },
}

impl StoreError {
    ///
    /// Classify a driver error raised while running `op` for `key`
    /// # Arguments
    /// * `op` - the name of the operation, e.g. `insert`
    /// * `key` - the key parameter of the operation, e.g. the character name
    /// * `source` - the error reported by rusqlite
    pub fn from_driver(op: &'static str, key: impl Display, source: rusqlite::Error) -> Self {
        let key = key.to_string();
        match source.sqlite_error_code() {
            Some(ErrorCode::ConstraintViolation) => Self::ConstraintViolation { op, key, source },
            Some(ErrorCode::CannotOpen | ErrorCode::NotADatabase | ErrorCode::PermissionDenied) => {
                Self::ConnectionFailure {
                    target: format!("{op}({key})"),
                    source,
                }
            }
            _ => Self::QueryExecution { op, key, source },
        }
    }

    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, Self::ConstraintViolation { .. })
    }
}

///
/// Attach the operation name and its key parameter to a driver result,
/// the same way `anyhow::Context` attaches a message
pub trait During<T> {
    fn during(self, op: &'static str, key: impl Display) -> StoreResult<T>;
}

impl<T> During<T> for rusqlite::Result<T> {
    fn during(self, op: &'static str, key: impl Display) -> StoreResult<T> {
        self.map_err(|e| StoreError::from_driver(op, key, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_classify_unique_violation() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE t (name TEXT UNIQUE); INSERT INTO t VALUES ('a');")
            .unwrap();
        let err = conn
            .execute("INSERT INTO t VALUES ('a')", [])
            .during("insert", "a")
            .unwrap_err();
        assert!(err.is_constraint_violation());
        assert!(err.to_string().starts_with("insert(a) was rejected"));
    }

    #[test]
    fn test_classify_malformed_statement() {
        let conn = Connection::open_in_memory().unwrap();
        let err = conn
            .execute("SELEKT nothing", [])
            .during("all", "*")
            .unwrap_err();
        assert!(matches!(err, StoreError::QueryExecution { op: "all", .. }));
    }
}
