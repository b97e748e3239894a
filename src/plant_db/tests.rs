use rusqlite::Connection;

use crate::config::DatabaseConfig;

use super::{fetch_aggregates, DbError};

fn seed_database(path: &std::path::Path, rows: &[(&str, &str, &str)]) {
    let connection = Connection::open(path).expect("create db");
    connection
        .execute(
            "CREATE TABLE plants (plant_name TEXT, sunlight TEXT, growth TEXT)",
            [],
        )
        .expect("create table");
    for (plant_name, sunlight, growth) in rows {
        connection
            .execute(
                "INSERT INTO plants (plant_name, sunlight, growth) VALUES (?1, ?2, ?3)",
                rusqlite::params![plant_name, sunlight, growth],
            )
            .expect("insert row");
    }
}

fn database_config(path: &std::path::Path) -> DatabaseConfig {
    DatabaseConfig {
        path: path.to_string_lossy().to_string(),
    }
}

#[test]
fn groups_seeded_rows_by_sunlight_and_growth() {
    let temp = tempfile::tempdir().expect("temp dir");
    let db_path = temp.path().join("plants.db");
    seed_database(
        &db_path,
        &[
            ("A", "full", "fast"),
            ("B", "full", "slow"),
            ("C", "partial", "fast"),
        ],
    );

    let aggregates = fetch_aggregates(&database_config(&db_path)).expect("fetch aggregates");

    assert_eq!(aggregates.sunlight_counts.len(), 2);
    assert_eq!(aggregates.sunlight_counts[0].sunlight, "full");
    assert_eq!(aggregates.sunlight_counts[0].num_plants, 2);
    let partial = aggregates
        .sunlight_counts
        .iter()
        .find(|entry| entry.sunlight == "partial")
        .expect("partial bucket");
    assert_eq!(partial.num_plants, 1);

    assert_eq!(aggregates.fast_growth_counts.len(), 2);
    assert!(aggregates
        .fast_growth_counts
        .iter()
        .all(|entry| entry.fast_growing_count == 1));

    assert_eq!(aggregates.name_lengths.len(), 3);
}

#[test]
fn sunlight_counts_sum_to_row_total() {
    let temp = tempfile::tempdir().expect("temp dir");
    let db_path = temp.path().join("plants.db");
    let rows = [
        ("Fern", "shade", "slow"),
        ("Bamboo", "full", "fast"),
        ("Basil", "full", "fast"),
        ("Hosta", "shade", "medium"),
        ("Aloe", "partial", "slow"),
    ];
    seed_database(&db_path, &rows);

    let aggregates = fetch_aggregates(&database_config(&db_path)).expect("fetch aggregates");

    assert_eq!(aggregates.total_plants(), rows.len() as u64);

    let pair_total: u64 = aggregates
        .sunlight_growth_counts
        .iter()
        .map(|entry| entry.count)
        .sum();
    assert_eq!(pair_total, rows.len() as u64);
}

#[test]
fn no_fast_rows_yield_empty_fast_aggregate() {
    let temp = tempfile::tempdir().expect("temp dir");
    let db_path = temp.path().join("plants.db");
    seed_database(
        &db_path,
        &[("Fern", "shade", "slow"), ("Hosta", "shade", "medium")],
    );

    let aggregates = fetch_aggregates(&database_config(&db_path)).expect("fetch aggregates");

    assert!(aggregates.fast_growth_counts.is_empty());
    assert_eq!(aggregates.total_plants(), 2);
}

#[test]
fn empty_table_yields_empty_aggregates() {
    let temp = tempfile::tempdir().expect("temp dir");
    let db_path = temp.path().join("plants.db");
    seed_database(&db_path, &[]);

    let aggregates = fetch_aggregates(&database_config(&db_path)).expect("fetch aggregates");

    assert_eq!(aggregates.total_plants(), 0);
    assert!(aggregates.sunlight_counts.is_empty());
    assert!(aggregates.growth_counts.is_empty());
    assert!(aggregates.name_lengths.is_empty());
}

#[test]
fn missing_database_file_fails_to_open() {
    let temp = tempfile::tempdir().expect("temp dir");
    let result = fetch_aggregates(&database_config(&temp.path().join("missing.db")));

    assert!(matches!(result, Err(DbError::Open { .. })));
}

#[test]
fn name_lengths_match_seeded_names() {
    let temp = tempfile::tempdir().expect("temp dir");
    let db_path = temp.path().join("plants.db");
    seed_database(
        &db_path,
        &[("Fern", "shade", "slow"), ("Bamboo", "full", "fast")],
    );

    let aggregates = fetch_aggregates(&database_config(&db_path)).expect("fetch aggregates");

    let mut lengths = aggregates
        .name_lengths
        .iter()
        .map(|record| record.name_length)
        .collect::<Vec<_>>();
    lengths.sort_unstable();
    assert_eq!(lengths, vec![4, 6]);
}
