use crate::sqlite::shift::{required_whole_number, whole_number, FromRow};

use rusqlite::Row;
use serde::{Deserialize, Serialize};

/// The columns every [Character] is read from, in select-list form
pub const CHARACTER_COLUMNS: &str =
    "id, name, species, homeworld, planet_id, height, affiliation";

///
/// A row of the `characters` table
/// # Fields
/// * `id` - the surrogate key assigned by the store
/// * `name` - unique within the dataset
/// * `homeworld` - the homeworld as written on the record
/// * `planet_id` - the linked row in `planets`, if one is resolved
/// * `height` - in centimeters, stored as INTEGER or REAL and read as a whole number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: i64,
    pub name: String,
    pub species: String,
    pub homeworld: Option<String>,
    pub planet_id: Option<i64>,
    pub height: Option<i64>,
    pub affiliation: Option<String>,
}

impl FromRow for Character {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            name: row.get("name")?,
            species: row.get("species")?,
            homeworld: row.get("homeworld")?,
            planet_id: row.get("planet_id")?,
            height: whole_number(row, "height")?,
            affiliation: row.get("affiliation")?,
        })
    }
}

///
/// The payload of an insert into `characters`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCharacter {
    pub name: String,
    pub species: String,
    pub homeworld: String,
    #[serde(default)]
    pub height: Option<i64>,
    #[serde(default)]
    pub affiliation: Option<String>,
}

impl NewCharacter {
    pub fn new(name: &str, species: &str, homeworld: &str) -> Self {
        Self {
            name: name.to_string(),
            species: species.to_string(),
            homeworld: homeworld.to_string(),
            height: None,
            affiliation: None,
        }
    }

    pub fn height(mut self, height: i64) -> Self {
        self.height = Some(height);
        self
    }

    pub fn affiliation(mut self, affiliation: &str) -> Self {
        self.affiliation = Some(affiliation.to_string());
        self
    }
}

///
/// Optional, conjunctive filters over `characters`.
/// A field left as `None` puts no constraint on the column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterFilter {
    pub species: Option<String>,
    pub affiliation: Option<String>,
    pub min_height: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterHeight {
    pub name: String,
    pub species: String,
    pub height: i64,
}

impl FromRow for CharacterHeight {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            name: row.get("name")?,
            species: row.get("species")?,
            height: required_whole_number(row, "height")?,
        })
    }
}

///
/// A member of an affiliation, as listed in a roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    pub species: String,
    pub homeworld: Option<String>,
}

impl FromRow for Member {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            name: row.get("name")?,
            species: row.get("species")?,
            homeworld: row.get("homeworld")?,
        })
    }
}

///
/// A character together with its resolved homeworld
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterPlanet {
    pub character_name: String,
    pub species: String,
    pub planet_name: String,
    pub climate: Option<String>,
}

impl FromRow for CharacterPlanet {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            character_name: row.get("character_name")?,
            species: row.get("species")?,
            planet_name: row.get("planet_name")?,
            climate: row.get("climate")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleSummary {
    pub name: String,
    pub class: Option<String>,
    pub cost: Option<i64>,
}

impl FromRow for VehicleSummary {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            name: row.get("name")?,
            class: row.get("vehicle_class")?,
            cost: whole_number(row, "cost_in_credits")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesCount {
    pub species: String,
    pub count: i64,
    pub average_height: f64,
}

impl FromRow for SpeciesCount {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            species: row.get("species")?,
            count: row.get("count")?,
            average_height: row.get("avg_height")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffiliationCount {
    pub affiliation: String,
    pub member_count: i64,
}

impl FromRow for AffiliationCount {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            affiliation: row.get("affiliation")?,
            member_count: row.get("member_count")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffiliationHeight {
    pub affiliation: String,
    pub average_height: f64,
}

impl FromRow for AffiliationHeight {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            affiliation: row.get("affiliation")?,
            average_height: row.get("avg_height")?,
        })
    }
}
