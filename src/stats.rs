use crate::{
    error::StoreResult,
    model::{AffiliationCount, AffiliationHeight, SpeciesCount},
    sqlite::basics::fetch_all,
};

use rusqlite::Connection;

///
/// Count characters and average their height per species.
///
/// Only characters with a known height take part, so a species whose
/// members all have unknown height is absent from the result. Averages
/// are rounded to one decimal. Ordered by count, largest first; equal
/// counts fall back to the species name.
pub fn by_species(conn: &Connection) -> StoreResult<Vec<SpeciesCount>> {
    fetch_all(
        conn,
        ("by_species", "*"),
        "SELECT species, COUNT(*) AS count, ROUND(AVG(height), 1) AS avg_height
         FROM characters
         WHERE height IS NOT NULL
         GROUP BY species
         ORDER BY count DESC, species",
        [],
    )
}

///
/// Count members per affiliation, characters without one are skipped.
/// Ordered by member count, largest first.
pub fn by_affiliation(conn: &Connection) -> StoreResult<Vec<AffiliationCount>> {
    fetch_all(
        conn,
        ("by_affiliation", "*"),
        "SELECT affiliation, COUNT(*) AS member_count
         FROM characters
         WHERE affiliation IS NOT NULL
         GROUP BY affiliation
         ORDER BY member_count DESC, affiliation",
        [],
    )
}

///
/// Average height per affiliation rounded to two decimals, tallest first
pub fn average_height_by_affiliation(conn: &Connection) -> StoreResult<Vec<AffiliationHeight>> {
    fetch_all(
        conn,
        ("average_height_by_affiliation", "*"),
        "SELECT affiliation, ROUND(AVG(height), 2) AS avg_height
         FROM characters
         WHERE height IS NOT NULL AND affiliation IS NOT NULL
         GROUP BY affiliation
         ORDER BY avg_height DESC",
        [],
    )
}
