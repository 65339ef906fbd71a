use crate::{
    config::StoreConfig,
    error::{During, StoreError, StoreResult},
};

use rusqlite::{Connection, OpenFlags};
use tracing::{debug, info};

use std::collections::HashSet;

/// The tables the query layer reads and writes
pub const REQUIRED_TABLES: [&str; 4] = ["characters", "planets", "vehicles", "character_vehicles"];

const TABLE_READ_QUERY: &str = r#"
 SELECT name FROM sqlite_master
 WHERE type='table' AND name NOT LIKE 'sqlite_%'
 ORDER BY name;
"#;

///
/// Open the store described by the configuration.
///
/// The file must exist, it is never created. Once open, the connection gets
/// foreign key enforcement as configured and the schema is checked with
/// [verify_tables]. The caller owns the connection; dropping it closes it.
pub fn open(config: &StoreConfig) -> StoreResult<Connection> {
    let access = if config.read_only {
        OpenFlags::SQLITE_OPEN_READ_ONLY
    } else {
        OpenFlags::SQLITE_OPEN_READ_WRITE
    };
    let flags = access | OpenFlags::SQLITE_OPEN_URI | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    let target = config.path.display().to_string();
    let conn = Connection::open_with_flags(&config.path, flags).map_err(|source| {
        StoreError::ConnectionFailure {
            target: target.clone(),
            source,
        }
    })?;
    conn.pragma_update(None, "foreign_keys", config.foreign_keys)
        .during("open", &target)?;
    verify_tables(&conn)?;
    info!(path = target.as_str(), read_only = config.read_only, "connected to store");
    Ok(conn)
}

///
/// Open a private in-memory store with foreign key enforcement on.
///
/// The store starts empty, so no table check is made; create the schema
/// before calling any query.
pub fn open_in_memory() -> StoreResult<Connection> {
    let conn = Connection::open_in_memory().map_err(|source| StoreError::ConnectionFailure {
        target: ":memory:".to_string(),
        source,
    })?;
    conn.pragma_update(None, "foreign_keys", true)
        .during("open_in_memory", ":memory:")?;
    debug!("opened in-memory store");
    Ok(conn)
}

///
/// Check that every table in [REQUIRED_TABLES] exists
pub fn verify_tables(conn: &Connection) -> StoreResult<()> {
    let op = ("verify_tables", "sqlite_master");
    let mut stmt = conn.prepare(TABLE_READ_QUERY).during(op.0, op.1)?;
    let names = stmt
        .query_map([], |row| row.get::<_, String>(0))
        .during(op.0, op.1)?
        .collect::<rusqlite::Result<HashSet<String>>>()
        .during(op.0, op.1)?;
    match REQUIRED_TABLES.iter().find(|t| !names.contains(**t)) {
        Some(missing) => Err(StoreError::MissingTable {
            table: missing.to_string(),
        }),
        None => Ok(()),
    }
}
