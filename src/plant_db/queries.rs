use std::path::Path;

use rusqlite::{Connection, OpenFlags};
use thiserror::Error;

use crate::config::DatabaseConfig;

use super::model::{
    FastGrowthCount, GrowthCount, NameLengthRecord, PlantAggregates, SunlightCount,
    SunlightGrowthCount,
};

const SUNLIGHT_DISTRIBUTION_SQL: &str =
    "SELECT sunlight, COUNT(*) AS num_plants FROM plants GROUP BY sunlight ORDER BY num_plants DESC";

const GROWTH_DISTRIBUTION_SQL: &str =
    "SELECT growth, COUNT(*) AS count FROM plants GROUP BY growth";

const FAST_GROWTH_BY_SUNLIGHT_SQL: &str =
    "SELECT sunlight, COUNT(*) AS fast_growing_count FROM plants WHERE growth = 'fast' GROUP BY sunlight ORDER BY fast_growing_count DESC";

const SUNLIGHT_GROWTH_SQL: &str =
    "SELECT sunlight, growth, COUNT(*) AS count FROM plants GROUP BY sunlight, growth";

const NAME_LENGTH_SQL: &str = "SELECT growth, LENGTH(plant_name) AS name_length FROM plants";

#[derive(Debug, Error)]
pub enum DbError {
    #[error("failed to open plant database {path}: {source}")]
    Open {
        path: String,
        source: rusqlite::Error,
    },
    #[error("query failed: {source}")]
    Query {
        #[from]
        source: rusqlite::Error,
    },
}

// The connection is scoped to this call; rendering and summarizing work
// from the materialized aggregates only.
pub fn fetch_aggregates(database: &DatabaseConfig) -> Result<PlantAggregates, DbError> {
    let connection = open_read_only(&database.path)?;

    Ok(PlantAggregates {
        sunlight_counts: sunlight_distribution(&connection)?,
        growth_counts: growth_distribution(&connection)?,
        fast_growth_counts: fast_growth_by_sunlight(&connection)?,
        sunlight_growth_counts: sunlight_growth_pairs(&connection)?,
        name_lengths: name_lengths(&connection)?,
    })
}

fn open_read_only(path: &str) -> Result<Connection, DbError> {
    Connection::open_with_flags(
        Path::new(path),
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(|source| DbError::Open {
        path: path.to_string(),
        source,
    })
}

fn sunlight_distribution(connection: &Connection) -> Result<Vec<SunlightCount>, DbError> {
    let mut statement = connection.prepare(SUNLIGHT_DISTRIBUTION_SQL)?;
    let rows = statement.query_map([], |row| {
        Ok(SunlightCount {
            sunlight: row.get(0)?,
            num_plants: row.get(1)?,
        })
    })?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

fn growth_distribution(connection: &Connection) -> Result<Vec<GrowthCount>, DbError> {
    let mut statement = connection.prepare(GROWTH_DISTRIBUTION_SQL)?;
    let rows = statement.query_map([], |row| {
        Ok(GrowthCount {
            growth: row.get(0)?,
            count: row.get(1)?,
        })
    })?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

fn fast_growth_by_sunlight(connection: &Connection) -> Result<Vec<FastGrowthCount>, DbError> {
    let mut statement = connection.prepare(FAST_GROWTH_BY_SUNLIGHT_SQL)?;
    let rows = statement.query_map([], |row| {
        Ok(FastGrowthCount {
            sunlight: row.get(0)?,
            fast_growing_count: row.get(1)?,
        })
    })?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

fn sunlight_growth_pairs(connection: &Connection) -> Result<Vec<SunlightGrowthCount>, DbError> {
    let mut statement = connection.prepare(SUNLIGHT_GROWTH_SQL)?;
    let rows = statement.query_map([], |row| {
        Ok(SunlightGrowthCount {
            sunlight: row.get(0)?,
            growth: row.get(1)?,
            count: row.get(2)?,
        })
    })?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

fn name_lengths(connection: &Connection) -> Result<Vec<NameLengthRecord>, DbError> {
    let mut statement = connection.prepare(NAME_LENGTH_SQL)?;
    let rows = statement.query_map([], |row| {
        Ok(NameLengthRecord {
            growth: row.get(0)?,
            name_length: row.get(1)?,
        })
    })?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}
