//! Character reports: one character, its homeworld, its vehicles and the
//! height statistics of its species, assembled from three lookups.

use crate::{
    error::StoreResult,
    sqlite::{
        basics::{fetch_all, fetch_one},
        shift::{whole_number, FromRow},
    },
};

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};
use tracing::debug;

use std::fmt;

///
/// The homeworld block of a report.
/// Every field is `None` when the character has no linked planet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Homeworld {
    pub name: Option<String>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub population: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleDetail {
    pub name: String,
    pub model: Option<String>,
    pub class: Option<String>,
    pub cost: Option<i64>,
}

impl FromRow for VehicleDetail {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            name: row.get("name")?,
            model: row.get("model")?,
            class: row.get("vehicle_class")?,
            cost: whole_number(row, "cost_in_credits")?,
        })
    }
}

///
/// Height statistics over the members of one species whose height is known.
/// With no such member the count is zero and the three figures are `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesStatistics {
    pub total_members: i64,
    /// rounded to one decimal
    pub average_height: Option<f64>,
    pub tallest: Option<i64>,
    pub shortest: Option<i64>,
}

impl FromRow for SpeciesStatistics {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            total_members: row.get("total_members")?,
            average_height: row.get("average_height")?,
            tallest: whole_number(row, "tallest")?,
            shortest: whole_number(row, "shortest")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterReport {
    pub name: String,
    pub species: String,
    pub height: Option<i64>,
    pub affiliation: Option<String>,
    pub homeworld: Homeworld,
    pub vehicles: Vec<VehicleDetail>,
    pub species_statistics: SpeciesStatistics,
}

///
/// The name that was asked for when no character carries it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingCharacter {
    pub name: String,
}

impl fmt::Display for MissingCharacter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Character '{}' not found", self.name)
    }
}

///
/// Either a complete report or the not-found value, never a partial report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportOutcome {
    Ready(CharacterReport),
    Missing(MissingCharacter),
}

impl ReportOutcome {
    pub fn ready(&self) -> Option<&CharacterReport> {
        match self {
            Self::Ready(report) => Some(report),
            Self::Missing(_) => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing(_))
    }
}

struct Basics {
    name: String,
    species: String,
    height: Option<i64>,
    affiliation: Option<String>,
    homeworld: Homeworld,
}

impl FromRow for Basics {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            name: row.get("name")?,
            species: row.get("species")?,
            height: whole_number(row, "height")?,
            affiliation: row.get("affiliation")?,
            homeworld: Homeworld {
                name: row.get("planet_name")?,
                climate: row.get("climate")?,
                terrain: row.get("terrain")?,
                population: whole_number(row, "population")?,
            },
        })
    }
}

fn species_statistics(conn: &Connection, species: &str) -> StoreResult<SpeciesStatistics> {
    let stats = fetch_one(
        conn,
        ("species_statistics", species),
        "SELECT COUNT(*) AS total_members,
                ROUND(AVG(height), 1) AS average_height,
                MAX(height) AS tallest,
                MIN(height) AS shortest
         FROM characters
         WHERE species = ? AND height IS NOT NULL",
        [species],
    )?;
    // an aggregate without GROUP BY always yields one row
    Ok(stats.unwrap_or(SpeciesStatistics {
        total_members: 0,
        average_height: None,
        tallest: None,
        shortest: None,
    }))
}

///
/// Build the report of one character.
/// # Arguments
/// * `conn` - the Rusqlite connection to the database
/// * `name` - the name of the character
/// # Returns
/// * `Ok(ReportOutcome::Ready(_))` - the assembled report
/// * `Ok(ReportOutcome::Missing(_))` - no character carries that name
/// * `Err(_)` - one of the lookups failed, nothing is returned
pub fn build_character_report(conn: &Connection, name: &str) -> StoreResult<ReportOutcome> {
    let op = ("character_report", name);
    let basics: Option<Basics> = fetch_one(
        conn,
        op,
        "SELECT c.name AS name, c.species AS species, c.height AS height,
                c.affiliation AS affiliation,
                p.name AS planet_name, p.climate AS climate,
                p.terrain AS terrain, p.population AS population
         FROM characters c
         LEFT JOIN planets p ON c.planet_id = p.id
         WHERE c.name = ?",
        [name],
    )?;
    let Some(basics) = basics else {
        debug!(name, "no character to report on");
        return Ok(ReportOutcome::Missing(MissingCharacter {
            name: name.to_string(),
        }));
    };

    let vehicles: Vec<VehicleDetail> = fetch_all(
        conn,
        op,
        "SELECT v.name AS name, v.model AS model, v.vehicle_class AS vehicle_class,
                v.cost_in_credits AS cost_in_credits
         FROM vehicles v
         INNER JOIN character_vehicles cv ON v.id = cv.vehicle_id
         INNER JOIN characters c ON cv.character_id = c.id
         WHERE c.name = ?
         ORDER BY v.name",
        [name],
    )?;
    let species_statistics = species_statistics(conn, &basics.species)?;

    let Basics {
        name,
        species,
        height,
        affiliation,
        homeworld,
    } = basics;
    Ok(ReportOutcome::Ready(CharacterReport {
        name,
        species,
        height,
        affiliation,
        homeworld,
        vehicles,
        species_statistics,
    }))
}
