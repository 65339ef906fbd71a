//! JSON-compatible commands over the query layer.
//!
//! A command deserializes from JSON, e.g. `{"ByName": "Luke Skywalker"}` or
//! `{"SetHeight": ["Yoda", 66]}`, and its result comes back as a
//! [`serde_json::Value`] holding the serialized records.

use crate::{
    add, delete, join,
    model::{CharacterFilter, NewCharacter},
    read, report, stats, update,
};

use anyhow::{Context, Result};
use rusqlite::Connection;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};

///
/// Providing read operations using JSON-compatible parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ReadOp {
    /// All characters
    All,

    /// One character by name, `null` when absent
    ByName(String),

    BySpecies(String),

    /// Characters matching every present filter, see [CharacterFilter]
    Filter(CharacterFilter),

    /// Characters at least this tall (cm), tallest first
    TallerThan(i64),

    /// Characters with their resolved homeworld
    WithPlanets,

    /// The vehicles of a character
    VehiclesOf(String),

    MembersOf(String),

    Count,

    SpeciesStats,

    AffiliationStats,

    AffiliationHeights,

    /// The full report of a character
    Report(String),
}

impl ReadOp {
    ///
    /// Execute the operation on the database
    /// # Arguments
    /// * `conn` - A connection to the database
    pub fn run(&self, conn: &Connection) -> Result<JsonValue> {
        let result = match self {
            Self::All => json!(read::all(conn)?),
            Self::ByName(name) => json!(read::by_name(conn, name)?),
            Self::BySpecies(species) => json!(read::by_species(conn, species)?),
            Self::Filter(filter) => json!(read::by_filters(conn, filter)?),
            Self::TallerThan(min_height) => json!(read::taller_than(conn, *min_height)?),
            Self::WithPlanets => json!(join::characters_with_planets(conn)?),
            Self::VehiclesOf(name) => json!(join::vehicles_of(conn, name)?),
            Self::MembersOf(affiliation) => json!(read::members_of(conn, affiliation)?),
            Self::Count => json!(read::count(conn)?),
            Self::SpeciesStats => json!(stats::by_species(conn)?),
            Self::AffiliationStats => json!(stats::by_affiliation(conn)?),
            Self::AffiliationHeights => json!(stats::average_height_by_affiliation(conn)?),
            Self::Report(name) => json!(report::build_character_report(conn, name)?),
        };
        Ok(result)
    }
}

///
/// Providing write operations using JSON-compatible parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WriteOp {
    ///
    /// Insert one character
    /// # Result
    /// `{"id": <new id>}`
    Create(NewCharacter),

    ///
    /// Insert several characters, all or none
    /// # Result
    /// `{"affected": <count>}`
    CreateMany(Vec<NewCharacter>),

    ///
    /// Set the affiliation of a character
    /// # Arguments
    /// * `(String, String)` - the name of the character and its new affiliation
    SetAffiliation(String, String),

    ///
    /// Set the height of a character
    /// # Arguments
    /// * `(String, i64)` - the name of the character and its new height (cm)
    SetHeight(String, i64),

    ///
    /// Delete a character by name
    /// # Result
    /// the serialized [delete::DeleteOutcome]
    Delete(String),

    /// Delete every member of an affiliation
    DeleteAffiliation(String),
}

impl WriteOp {
    ///
    /// Execute the operation on the database
    /// # Arguments
    /// * `conn` - A connection to the database
    pub fn run(&self, conn: &Connection) -> Result<JsonValue> {
        let result = match self {
            Self::Create(input) => json!({ "id": add::insert(conn, input)? }),
            Self::CreateMany(inputs) => json!({ "affected": add::insert_batch(conn, inputs)? }),
            Self::SetAffiliation(name, affiliation) => {
                json!({ "affected": update::affiliation(conn, name, affiliation)? })
            }
            Self::SetHeight(name, height) => {
                json!({ "affected": update::height(conn, name, *height)? })
            }
            Self::Delete(name) => json!(delete::by_name(conn, name)?),
            Self::DeleteAffiliation(affiliation) => {
                json!({ "affected": delete::by_affiliation(conn, affiliation)? })
            }
        };
        Ok(result)
    }
}

///
/// Parse a command out of JSON and run it
/// # Examples
/// ```
/// use holocron::action::{run_json, ReadOp};
/// use serde_json::json;
/// let conn = rusqlite::Connection::open_in_memory().unwrap();
/// conn.execute_batch("CREATE TABLE characters (id INTEGER PRIMARY KEY, name TEXT)").unwrap();
/// let count = run_json::<ReadOp>(&conn, json!("Count")).unwrap();
/// assert_eq!(count, json!(0));
/// ```
pub fn run_json<Op: Runnable>(conn: &Connection, input: JsonValue) -> Result<JsonValue> {
    let op: Op = serde_json::from_value(input.clone())
        .with_context(|| format!("Invalid command: {input}"))?;
    op.run(conn)
}

///
/// A command that can be parsed from JSON and run against the store
pub trait Runnable: DeserializeOwned {
    fn run(&self, conn: &Connection) -> Result<JsonValue>;
}

impl Runnable for ReadOp {
    fn run(&self, conn: &Connection) -> Result<JsonValue> {
        ReadOp::run(self, conn)
    }
}

impl Runnable for WriteOp {
    fn run(&self, conn: &Connection) -> Result<JsonValue> {
        WriteOp::run(self, conn)
    }
}
