#![allow(dead_code)]

use holocron::connect;

use rusqlite::Connection;
use tracing_subscriber::EnvFilter;

pub const SCHEMA: &str = "
    CREATE TABLE planets (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL UNIQUE,
        climate TEXT,
        terrain TEXT,
        population INTEGER
    );

    CREATE TABLE characters (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL UNIQUE,
        species TEXT NOT NULL,
        homeworld TEXT,
        planet_id INTEGER REFERENCES planets(id),
        height INTEGER,
        affiliation TEXT
    );

    CREATE TABLE vehicles (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        model TEXT,
        vehicle_class TEXT,
        cost_in_credits INTEGER
    );

    CREATE TABLE character_vehicles (
        character_id INTEGER NOT NULL REFERENCES characters(id) ON DELETE CASCADE,
        vehicle_id INTEGER NOT NULL REFERENCES vehicles(id) ON DELETE CASCADE,
        PRIMARY KEY (character_id, vehicle_id)
    );
";

fn insert_planets(conn: &Connection) -> anyhow::Result<()> {
    conn.execute_batch(
        "INSERT INTO planets (id, name, climate, terrain, population) VALUES
            (1, 'Tatooine', 'arid', 'desert', 200000),
            (2, 'Alderaan', 'temperate', 'grasslands, mountains', 2000000000),
            (3, 'Kashyyyk', 'tropical', 'jungle, forests', 45000000),
            (4, 'Naboo', 'temperate', 'grassy hills, swamps', NULL);",
    )?;
    Ok(())
}

fn insert_characters(conn: &Connection) -> anyhow::Result<()> {
    conn.execute_batch(
        "INSERT INTO characters (id, name, species, homeworld, planet_id, height, affiliation) VALUES
            (1, 'Luke Skywalker', 'Human', 'Tatooine', 1, 172, 'Rebel Alliance'),
            (2, 'Darth Vader', 'Human', 'Tatooine', 1, 202, 'Galactic Empire'),
            (3, 'Leia Organa', 'Human', 'Alderaan', 2, 150, 'Rebel Alliance'),
            (4, 'Han Solo', 'Human', 'Corellia', NULL, 180, 'Rebel Alliance'),
            (5, 'Chewbacca', 'Wookiee', 'Kashyyyk', 3, 228, 'Rebel Alliance'),
            (6, 'Yoda', 'Yoda''s species', 'Dagobah', NULL, 66, 'Jedi Order'),
            (7, 'R2-D2', 'Droid', 'Naboo', 4, 96, 'Rebel Alliance'),
            (8, 'C-3PO', 'Droid', 'Tatooine', 1, 167, 'Rebel Alliance'),
            (9, 'Palpatine', 'Human', 'Naboo', 4, 170, 'Galactic Empire'),
            (10, 'Boba Fett', 'Human', 'Kamino', NULL, 183, NULL),
            (11, 'Greedo', 'Rodian', 'Rodia', NULL, NULL, NULL);",
    )?;
    Ok(())
}

fn insert_vehicles(conn: &Connection) -> anyhow::Result<()> {
    conn.execute_batch(
        "INSERT INTO vehicles (id, name, model, vehicle_class, cost_in_credits) VALUES
            (1, 'X-wing', 'T-65 X-wing', 'starfighter', 149999),
            (2, 'Snowspeeder', 't-47 airspeeder', 'airspeeder', NULL),
            (3, 'TIE Advanced x1', 'Twin Ion Engine Advanced x1', 'starfighter', 250000),
            (4, 'Millennium Falcon', 'YT-1300 light freighter', 'light freighter', 100000),
            (5, 'Imperial Speeder Bike', '74-Z speeder bike', 'speeder', 8000);",
    )?;
    Ok(())
}

fn link_characters_to_vehicles(conn: &Connection) -> anyhow::Result<()> {
    conn.execute_batch(
        "INSERT INTO character_vehicles (character_id, vehicle_id) VALUES
            (1, 1), (1, 2), (1, 5),
            (2, 3),
            (3, 5),
            (4, 4),
            (5, 4);",
    )?;
    Ok(())
}

pub fn create_schema(conn: &Connection) -> anyhow::Result<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

pub fn initialize_db(conn: &Connection) -> anyhow::Result<()> {
    init_tracing();
    create_schema(conn)?;
    seed(conn)
}

/// Fill an existing schema with the sample rows
pub fn seed(conn: &Connection) -> anyhow::Result<()> {
    insert_planets(conn)?;
    insert_characters(conn)?;
    insert_vehicles(conn)?;
    link_characters_to_vehicles(conn)?;
    Ok(())
}

pub fn seeded_db() -> anyhow::Result<Connection> {
    let conn = connect::open_in_memory()?;
    initialize_db(&conn)?;
    Ok(conn)
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn names<T>(records: &[T], name_of: impl Fn(&T) -> &str) -> String {
    records
        .iter()
        .map(name_of)
        .collect::<Vec<_>>()
        .join("\n")
}
