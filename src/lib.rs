//! Typed query and report helpers over a SQLite dataset of characters,
//! planets and vehicles.
//!
//! Every operation borrows a [Connection] owned by the caller, runs one or a
//! few statements with bound parameters and returns named records.
//! Writes are committed as soon as the call returns.
//!
//! ```no_run
//! use holocron::{config::StoreConfig, connect, read, report};
//!
//! fn main() -> anyhow::Result<()> {
//!     let conn = connect::open(&StoreConfig::default())?;
//!     let humans = read::by_species(&conn, "Human")?;
//!     println!("{} humans", humans.len());
//!     let outcome = report::build_character_report(&conn, "Luke Skywalker")?;
//!     println!("{}", serde_json::to_string_pretty(&outcome)?);
//!     Ok(())
//! }
//! ```
pub mod action;
pub mod add;
pub mod config;
pub mod connect;
pub mod delete;
pub mod error;
pub mod join;
pub mod model;
pub mod read;
pub mod report;
pub mod sqlite;
pub mod stats;
pub mod update;

pub use error::{StoreError, StoreResult};
pub use rusqlite::{types, Connection};
pub use serde;
pub use serde_json;
