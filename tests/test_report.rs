mod helpers;
use helpers::{seed, seeded_db, SCHEMA};

use holocron::{
    connect, read,
    report::{build_character_report, Homeworld, ReportOutcome},
};

use anyhow::Result;
use insta::assert_snapshot;
use serde_json::json;

#[test]
fn test_full_report() -> Result<()> {
    let conn = seeded_db()?;
    let outcome = build_character_report(&conn, "Luke Skywalker")?;
    let report = outcome.ready().expect("Luke is seeded");

    assert_eq!(report.name, "Luke Skywalker");
    assert_eq!(report.species, "Human");
    assert_eq!(report.height, Some(172));
    assert_eq!(report.affiliation.as_deref(), Some("Rebel Alliance"));
    assert_eq!(report.homeworld.name.as_deref(), Some("Tatooine"));
    assert_eq!(report.homeworld.climate.as_deref(), Some("arid"));
    assert_eq!(report.homeworld.terrain.as_deref(), Some("desert"));
    assert_eq!(report.homeworld.population, Some(200000));

    let vehicles = report
        .vehicles
        .iter()
        .map(|v| v.name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(vehicles, ["Imperial Speeder Bike", "Snowspeeder", "X-wing"]);
    assert_eq!(report.vehicles[2].model.as_deref(), Some("T-65 X-wing"));

    let stats = &report.species_statistics;
    assert_eq!(stats.total_members, 6);
    assert_eq!(stats.average_height, Some(176.2));
    assert_eq!(stats.tallest, Some(202));
    assert_eq!(stats.shortest, Some(150));
    Ok(())
}

#[test]
fn test_report_without_planet() -> Result<()> {
    let conn = seeded_db()?;
    let outcome = build_character_report(&conn, "Han Solo")?;
    let report = outcome.ready().expect("Han is seeded");
    assert_eq!(report.homeworld, Homeworld::default());
    assert_eq!(report.vehicles.len(), 1);
    assert_eq!(report.vehicles[0].class.as_deref(), Some("light freighter"));
    Ok(())
}

#[test]
fn test_report_species_without_heights() -> Result<()> {
    let conn = seeded_db()?;
    let outcome = build_character_report(&conn, "Greedo")?;
    let report = outcome.ready().expect("Greedo is seeded");
    assert!(report.vehicles.is_empty());
    let stats = &report.species_statistics;
    assert_eq!(stats.total_members, 0);
    assert_eq!(stats.average_height, None);
    assert_eq!(stats.tallest, None);
    assert_eq!(stats.shortest, None);
    Ok(())
}

#[test]
fn test_report_not_found() -> Result<()> {
    let conn = seeded_db()?;
    let outcome = build_character_report(&conn, "Nonexistent")?;
    assert!(outcome.is_missing());
    assert!(outcome.ready().is_none());
    let ReportOutcome::Missing(missing) = &outcome else {
        panic!("expected the not-found shape, got {outcome:?}");
    };
    assert_snapshot!(missing, @"Character 'Nonexistent' not found");
    assert_eq!(
        serde_json::to_value(&outcome)?,
        json!({"missing": {"name": "Nonexistent"}})
    );
    Ok(())
}

#[test]
fn test_report_serializes_nested() -> Result<()> {
    let conn = seeded_db()?;
    let outcome = build_character_report(&conn, "Darth Vader")?;
    let value = serde_json::to_value(&outcome)?;
    let ready = &value["ready"];
    assert_eq!(ready["homeworld"]["name"], json!("Tatooine"));
    assert_eq!(ready["vehicles"][0]["name"], json!("TIE Advanced x1"));
    assert_eq!(ready["vehicles"][0]["cost"], json!(250000));
    assert_eq!(ready["species_statistics"]["total_members"], json!(6));
    Ok(())
}

#[test]
fn test_report_over_real_columns() -> Result<()> {
    let conn = connect::open_in_memory()?;
    conn.execute_batch(
        &SCHEMA
            .replace("height INTEGER", "height REAL")
            .replace("population INTEGER", "population REAL")
            .replace("cost_in_credits INTEGER", "cost_in_credits REAL"),
    )?;
    seed(&conn)?;
    conn.execute("UPDATE characters SET height = 66.4 WHERE name = 'Yoda'", [])?;

    let outcome = build_character_report(&conn, "Luke Skywalker")?;
    let report = outcome.ready().expect("Luke is seeded");
    assert_eq!(report.height, Some(172));
    assert_eq!(report.homeworld.population, Some(200000));
    assert_eq!(report.vehicles[0].cost, Some(8000));
    assert_eq!(report.species_statistics.tallest, Some(202));
    assert_eq!(report.species_statistics.shortest, Some(150));

    let yoda = read::by_name(&conn, "Yoda")?.expect("seeded");
    assert_eq!(yoda.height, Some(66));
    let tall = read::taller_than(&conn, 200)?;
    assert_eq!(tall[0].height, 228);
    Ok(())
}
