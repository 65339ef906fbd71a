use crate::{
    error::{During, StoreResult},
    model::NewCharacter,
    sqlite::basics::execute,
};

use rusqlite::{params, Connection};
use tracing::{info, warn};

const INSERT_CHARACTER: &str = "INSERT INTO characters (name, species, homeworld, height, affiliation)
     VALUES (?, ?, ?, ?, ?)";

///
/// Insert a new character.
/// # Arguments
/// * `conn` - the Rusqlite connection to the database
/// * `input` - the new record to be inserted
/// # Returns
/// * `Ok(id)` - the id the store assigned to the new row
/// * `Err(StoreError::ConstraintViolation)` - the store rejected the row, e.g. a duplicate name
pub fn insert(conn: &Connection, input: &NewCharacter) -> StoreResult<i64> {
    let NewCharacter {
        name,
        species,
        homeworld,
        height,
        affiliation,
    } = input;
    execute(
        conn,
        ("insert", name.as_str()),
        INSERT_CHARACTER,
        params![name, species, homeworld, height, affiliation],
    )?;
    let id = conn.last_insert_rowid();
    info!(name = name.as_str(), id, "added character");
    Ok(id)
}

///
/// Insert several characters with one prepared statement.
///
/// The rows are written inside a named savepoint: either every row is
/// stored or, when any of them is rejected, none is. A savepoint nests, so
/// the batch also works inside a transaction the caller already opened,
/// in which case the rows stay pending until the caller commits.
/// # Returns
/// * `Ok(count)` - the number of inserted rows
pub fn insert_batch(conn: &Connection, inputs: &[NewCharacter]) -> StoreResult<usize> {
    if inputs.is_empty() {
        return Ok(0);
    }
    let op = "insert_batch";
    conn.execute_batch("SAVEPOINT insert_batch")
        .during(op, inputs.len())?;
    match insert_each(conn, inputs) {
        Ok(total) => {
            conn.execute_batch("RELEASE insert_batch")
                .during(op, inputs.len())?;
            info!(count = total, "added characters");
            Ok(total)
        }
        Err(err) => {
            // the rejected row's error wins over a failed rollback
            if let Err(rollback) =
                conn.execute_batch("ROLLBACK TO insert_batch; RELEASE insert_batch")
            {
                warn!(error = %rollback, "failed to roll back the batch");
            }
            Err(err)
        }
    }
}

fn insert_each(conn: &Connection, inputs: &[NewCharacter]) -> StoreResult<usize> {
    let op = "insert_batch";
    let mut stmt = conn.prepare(INSERT_CHARACTER).during(op, inputs.len())?;
    let mut total = 0;
    for input in inputs {
        total += stmt
            .execute(params![
                input.name,
                input.species,
                input.homeworld,
                input.height,
                input.affiliation
            ])
            .during(op, &input.name)?;
    }
    Ok(total)
}
