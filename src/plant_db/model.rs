#[derive(Debug, Clone)]
pub struct SunlightCount {
    pub sunlight: String,
    pub num_plants: u64,
}

#[derive(Debug, Clone)]
pub struct GrowthCount {
    pub growth: String,
    pub count: u64,
}

#[derive(Debug, Clone)]
pub struct FastGrowthCount {
    pub sunlight: String,
    pub fast_growing_count: u64,
}

#[derive(Debug, Clone)]
pub struct SunlightGrowthCount {
    pub sunlight: String,
    pub growth: String,
    pub count: u64,
}

#[derive(Debug, Clone)]
pub struct NameLengthRecord {
    pub growth: String,
    pub name_length: u32,
}

#[derive(Debug, Clone, Default)]
pub struct PlantAggregates {
    pub sunlight_counts: Vec<SunlightCount>,
    pub growth_counts: Vec<GrowthCount>,
    pub fast_growth_counts: Vec<FastGrowthCount>,
    pub sunlight_growth_counts: Vec<SunlightGrowthCount>,
    pub name_lengths: Vec<NameLengthRecord>,
}

impl PlantAggregates {
    pub fn total_plants(&self) -> u64 {
        self.sunlight_counts
            .iter()
            .map(|entry| entry.num_plants)
            .sum()
    }
}
