use crate::plant_db::PlantAggregates;

pub(crate) struct ReportSummary {
    pub(crate) total_plants: u64,
    pub(crate) most_common_sunlight: String,
    pub(crate) most_common_growth: String,
    pub(crate) average_name_length: f64,
}

pub(crate) fn compute_summary(aggregates: &PlantAggregates) -> Option<ReportSummary> {
    let total_plants = aggregates.total_plants();
    if total_plants == 0 {
        return None;
    }

    // Query 1 is already ranked by count descending.
    let most_common_sunlight = aggregates.sunlight_counts.first()?.sunlight.clone();
    let most_common_growth = aggregates
        .growth_counts
        .iter()
        .max_by_key(|entry| entry.count)?
        .growth
        .clone();

    let lengths = &aggregates.name_lengths;
    let average_name_length = if lengths.is_empty() {
        0.0
    } else {
        lengths
            .iter()
            .map(|record| f64::from(record.name_length))
            .sum::<f64>()
            / lengths.len() as f64
    };

    Some(ReportSummary {
        total_plants,
        most_common_sunlight,
        most_common_growth,
        average_name_length,
    })
}

pub(crate) fn print_summary(aggregates: &PlantAggregates) {
    println!("\n=== SUMMARY STATISTICS ===");
    match compute_summary(aggregates) {
        Some(summary) => {
            println!("Total number of plants: {}", summary.total_plants);
            println!(
                "Most common sunlight requirement: {}",
                summary.most_common_sunlight
            );
            println!("Most common growth rate: {}", summary.most_common_growth);
            println!(
                "Average plant name length: {:.1} characters",
                summary.average_name_length
            );
        }
        None => println!("No plant records found."),
    }
}

#[cfg(test)]
mod tests {
    use crate::plant_db::{
        GrowthCount, NameLengthRecord, PlantAggregates, SunlightCount,
    };

    use super::compute_summary;

    fn aggregates_with_three_plants() -> PlantAggregates {
        PlantAggregates {
            sunlight_counts: vec![
                SunlightCount {
                    sunlight: "full".to_string(),
                    num_plants: 2,
                },
                SunlightCount {
                    sunlight: "partial".to_string(),
                    num_plants: 1,
                },
            ],
            growth_counts: vec![
                GrowthCount {
                    growth: "fast".to_string(),
                    count: 2,
                },
                GrowthCount {
                    growth: "slow".to_string(),
                    count: 1,
                },
            ],
            name_lengths: vec![
                NameLengthRecord {
                    growth: "fast".to_string(),
                    name_length: 4,
                },
                NameLengthRecord {
                    growth: "slow".to_string(),
                    name_length: 6,
                },
                NameLengthRecord {
                    growth: "fast".to_string(),
                    name_length: 11,
                },
            ],
            ..PlantAggregates::default()
        }
    }

    #[test]
    fn reduces_aggregates_to_report_statistics() {
        let summary = compute_summary(&aggregates_with_three_plants()).expect("summary expected");

        assert_eq!(summary.total_plants, 3);
        assert_eq!(summary.most_common_sunlight, "full");
        assert_eq!(summary.most_common_growth, "fast");
        assert!((summary.average_name_length - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn average_matches_direct_mean_over_lengths() {
        let aggregates = aggregates_with_three_plants();
        let direct_mean = (4.0 + 6.0 + 11.0) / 3.0;

        let summary = compute_summary(&aggregates).expect("summary expected");
        assert!((summary.average_name_length - direct_mean).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_aggregates_yield_no_summary() {
        assert!(compute_summary(&PlantAggregates::default()).is_none());
    }
}
