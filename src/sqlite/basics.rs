use super::shift::FromRow;
use crate::error::{During, StoreResult};

use rusqlite::{Connection, OptionalExtension, Params};
use tracing::debug;

///
/// The name of an operation and its key parameter,
/// carried into logs and errors, e.g. `("by_name", "Luke Skywalker")`
pub type OpKey<'a> = (&'static str, &'a str);

///
/// fetch all matching records
/// # Arguments
/// * `conn` - the Rusqlite connection to the database
/// * `(op, key)` - the operation name and its key parameter
/// * `sql` - the statement, with `?` placeholders only
/// * `params` - the bound parameters
pub fn fetch_all<T: FromRow>(
    conn: &Connection,
    (op, key): OpKey,
    sql: &str,
    params: impl Params,
) -> StoreResult<Vec<T>> {
    debug!(op, key, "fetching rows");
    let mut stmt = conn.prepare(sql).during(op, key)?;
    let mut rows = stmt.query(params).during(op, key)?;
    let mut result = Vec::new();
    while let Some(row) = rows.next().during(op, key)? {
        result.push(T::from_row(row).during(op, key)?);
    }
    Ok(result)
}

///
/// fetch the first matching record, `None` if nothing matched
pub fn fetch_one<T: FromRow>(
    conn: &Connection,
    (op, key): OpKey,
    sql: &str,
    params: impl Params,
) -> StoreResult<Option<T>> {
    debug!(op, key, "fetching one row");
    conn.query_row(sql, params, T::from_row)
        .optional()
        .during(op, key)
}

///
/// run a write statement and return the number of affected rows
pub fn execute(
    conn: &Connection,
    (op, key): OpKey,
    sql: &str,
    params: impl Params,
) -> StoreResult<usize> {
    debug!(op, key, "executing statement");
    conn.execute(sql, params).during(op, key)
}
