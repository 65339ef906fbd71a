use crate::{
    error::StoreResult,
    model::{CharacterPlanet, VehicleSummary},
    sqlite::basics::fetch_all,
};

use rusqlite::Connection;

///
/// Pair every character with its homeworld, ordered by character name.
/// Characters without a linked planet are left out.
pub fn characters_with_planets(conn: &Connection) -> StoreResult<Vec<CharacterPlanet>> {
    fetch_all(
        conn,
        ("characters_with_planets", "*"),
        "SELECT c.name AS character_name, c.species AS species,
                p.name AS planet_name, p.climate AS climate
         FROM characters c
         INNER JOIN planets p ON c.planet_id = p.id
         ORDER BY c.name",
        [],
    )
}

///
/// List the vehicles of a character, ordered by vehicle name.
/// An unknown character and a character without vehicles both give an empty list.
pub fn vehicles_of(conn: &Connection, name: &str) -> StoreResult<Vec<VehicleSummary>> {
    fetch_all(
        conn,
        ("vehicles_of", name),
        "SELECT v.name AS name, v.vehicle_class AS vehicle_class,
                v.cost_in_credits AS cost_in_credits
         FROM vehicles v
         INNER JOIN character_vehicles cv ON v.id = cv.vehicle_id
         INNER JOIN characters c ON cv.character_id = c.id
         WHERE c.name = ?
         ORDER BY v.name",
        [name],
    )
}
