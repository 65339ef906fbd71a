use crate::{error::StoreResult, sqlite::basics::execute};

use rusqlite::{params, Connection};
use tracing::{info, warn};

fn report(op: &str, name: &str, affected: usize) -> usize {
    if affected == 0 {
        warn!(op, name, "no matching character");
    } else {
        info!(op, name, affected, "updated character");
    }
    affected
}

///
/// Set the affiliation of the character with the given name.
/// # Returns
/// * `Ok(0)` - no character carries that name, nothing was changed
/// * `Ok(n)` - the number of updated rows
pub fn affiliation(conn: &Connection, name: &str, new_affiliation: &str) -> StoreResult<usize> {
    let affected = execute(
        conn,
        ("update_affiliation", name),
        "UPDATE characters SET affiliation = ? WHERE name = ?",
        params![new_affiliation, name],
    )?;
    Ok(report("update_affiliation", name, affected))
}

///
/// Set the height (cm) of the character with the given name.
/// Zero affected rows means no character matched.
pub fn height(conn: &Connection, name: &str, new_height: i64) -> StoreResult<usize> {
    let affected = execute(
        conn,
        ("update_height", name),
        "UPDATE characters SET height = ? WHERE name = ?",
        params![new_height, name],
    )?;
    Ok(report("update_height", name, affected))
}
