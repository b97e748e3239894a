mod model;
mod queries;

pub use model::{
    FastGrowthCount, GrowthCount, NameLengthRecord, PlantAggregates, SunlightCount,
    SunlightGrowthCount,
};
pub use queries::{fetch_aggregates, DbError};

#[cfg(test)]
mod tests;
