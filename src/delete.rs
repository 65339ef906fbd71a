use crate::{
    error::StoreResult,
    sqlite::basics::{execute, fetch_one},
};

use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

///
/// The result of deleting a single character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeleteOutcome {
    /// The character with this id was removed
    Deleted { id: i64 },
    NotFound,
}

impl DeleteOutcome {
    pub fn is_deleted(&self) -> bool {
        matches!(self, Self::Deleted { .. })
    }
}

///
/// Delete the character with the given name.
///
/// The id is looked up first and the row is then removed by id, so exactly
/// one record goes away. Nothing guards the gap between the two statements:
/// a concurrent writer may remove or rename the row in between, in which
/// case the delete affects nothing and `NotFound` is reported.
pub fn by_name(conn: &Connection, name: &str) -> StoreResult<DeleteOutcome> {
    let op = ("delete_by_name", name);
    let id: Option<i64> =
        fetch_one(conn, op, "SELECT id FROM characters WHERE name = ?", [name])?;
    let Some(id) = id else {
        warn!(name, "character to delete not found");
        return Ok(DeleteOutcome::NotFound);
    };
    let affected = execute(conn, op, "DELETE FROM characters WHERE id = ?", [id])?;
    if affected == 0 {
        warn!(name, id, "character vanished before delete");
        return Ok(DeleteOutcome::NotFound);
    }
    info!(name, id, "deleted character");
    Ok(DeleteOutcome::Deleted { id })
}

///
/// Delete every character of an affiliation.
/// # Returns
/// * `Ok(count)` - the number of removed rows, possibly zero
pub fn by_affiliation(conn: &Connection, affiliation: &str) -> StoreResult<usize> {
    let removed = execute(
        conn,
        ("delete_by_affiliation", affiliation),
        "DELETE FROM characters WHERE affiliation = ?",
        [affiliation],
    )?;
    info!(affiliation, removed, "deleted characters");
    Ok(removed)
}
