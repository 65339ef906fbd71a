use crate::{
    error::StoreResult,
    model::{Character, CharacterFilter, CharacterHeight, Member, CHARACTER_COLUMNS},
    sqlite::{
        basics::{fetch_all, fetch_one},
        sql::where_all_of,
    },
};

use rusqlite::{params, params_from_iter, types::Value, Connection};

///
/// Read every character, ordered by id.
/// An empty table gives an empty list.
pub fn all(conn: &Connection) -> StoreResult<Vec<Character>> {
    by_filters(conn, &CharacterFilter::default())
}

///
/// Read a character by its name.
/// # Returns
/// * `Ok(None)` - no character carries that name
pub fn by_name(conn: &Connection, name: &str) -> StoreResult<Option<Character>> {
    let sql = format!("SELECT {CHARACTER_COLUMNS} FROM characters WHERE name = ?");
    fetch_one(conn, ("by_name", name), &sql, [name])
}

///
/// Read all characters of a species, ordered by id
pub fn by_species(conn: &Connection, species: &str) -> StoreResult<Vec<Character>> {
    by_filters(
        conn,
        &CharacterFilter {
            species: Some(species.to_string()),
            ..Default::default()
        },
    )
}

///
/// Read all characters matching every filter that is present, ordered by id.
///
/// Each present filter becomes a bound condition; an absent one puts no
/// constraint on its column. `min_height` is inclusive, and characters with
/// unknown height never satisfy it.
/// # Arguments
/// * `conn` - the Rusqlite connection to the database
/// * `filter` - the filters, see [CharacterFilter]
pub fn by_filters(conn: &Connection, filter: &CharacterFilter) -> StoreResult<Vec<Character>> {
    let (where_clause, where_params) = where_all_of(vec![
        filter
            .species
            .as_ref()
            .map(|s| ("species = ?", Value::Text(s.clone()))),
        filter
            .affiliation
            .as_ref()
            .map(|a| ("affiliation = ?", Value::Text(a.clone()))),
        filter.min_height.map(|h| ("height >= ?", Value::Integer(h))),
    ]);
    let sql = format!("SELECT {CHARACTER_COLUMNS} FROM characters {where_clause} ORDER BY id");
    let key = describe(filter);
    fetch_all(
        conn,
        ("by_filters", key.as_str()),
        &sql,
        params_from_iter(&where_params),
    )
}

fn describe(filter: &CharacterFilter) -> String {
    let CharacterFilter {
        species,
        affiliation,
        min_height,
    } = filter;
    format!("species={species:?}, affiliation={affiliation:?}, min_height={min_height:?}")
}

///
/// Read characters at least `min_height` centimeters tall, tallest first.
///
/// Characters of equal height come back in no particular order.
pub fn taller_than(conn: &Connection, min_height: i64) -> StoreResult<Vec<CharacterHeight>> {
    let key = min_height.to_string();
    fetch_all(
        conn,
        ("taller_than", key.as_str()),
        "SELECT name, species, height FROM characters WHERE height >= ? ORDER BY height DESC",
        params![min_height],
    )
}

///
/// Return the number of characters in the store
pub fn count(conn: &Connection) -> StoreResult<i64> {
    let total: Option<i64> =
        fetch_one(conn, ("count", "*"), "SELECT COUNT(*) FROM characters", [])?;
    Ok(total.unwrap_or_default())
}

///
/// List the members of an affiliation, ordered by name
pub fn members_of(conn: &Connection, affiliation: &str) -> StoreResult<Vec<Member>> {
    fetch_all(
        conn,
        ("members_of", affiliation),
        "SELECT name, species, homeworld FROM characters WHERE affiliation = ? ORDER BY name",
        [affiliation],
    )
}
