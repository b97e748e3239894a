use std::collections::BTreeMap;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::plant_db::NameLengthRecord;

use super::error::ChartRenderError;
use super::style::ChartStyle;

pub(super) fn group_lengths(records: &[NameLengthRecord]) -> Vec<(String, Vec<u32>)> {
    let mut grouped: BTreeMap<&str, Vec<u32>> = BTreeMap::new();
    for record in records {
        grouped
            .entry(record.growth.as_str())
            .or_default()
            .push(record.name_length);
    }

    grouped
        .into_iter()
        .map(|(growth, lengths)| (growth.to_string(), lengths))
        .collect()
}

pub(super) fn peak_frequency(groups: &[(String, Vec<u32>)]) -> u64 {
    groups
        .iter()
        .map(|(_, lengths)| {
            let mut buckets: BTreeMap<u32, u64> = BTreeMap::new();
            for length in lengths {
                *buckets.entry(*length).or_insert(0) += 1;
            }
            buckets.values().copied().max().unwrap_or(0)
        })
        .max()
        .unwrap_or(0)
}

pub(super) fn draw_name_length_histogram<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    records: &[NameLengthRecord],
) -> Result<(), ChartRenderError> {
    let groups = group_lengths(records);
    let max_length = records
        .iter()
        .map(|record| record.name_length)
        .max()
        .unwrap_or(0);
    let max_frequency = peak_frequency(&groups).max(1);

    let mut chart = ChartBuilder::on(area)
        .margin(ChartStyle::MARGIN)
        .caption(
            "Name Length Distribution by Growth Rate",
            ChartStyle::caption_font(),
        )
        .x_label_area_size(ChartStyle::X_LABEL_AREA_SIZE)
        .y_label_area_size(ChartStyle::Y_LABEL_AREA_SIZE)
        .build_cartesian_2d(
            (0u32..max_length + 2).into_segmented(),
            0u64..max_frequency + 1,
        )
        .map_err(|error| {
            ChartRenderError::Backend(format!("name length histogram build error: {:?}", error))
        })?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Name Length (characters)")
        .y_desc("Frequency")
        .draw()
        .map_err(|error| {
            ChartRenderError::Backend(format!("name length histogram mesh error: {:?}", error))
        })?;

    for (index, (growth, lengths)) in groups.iter().enumerate() {
        let color = ChartStyle::series_color(index);
        chart
            .draw_series(
                Histogram::vertical(&chart)
                    .style(color.mix(0.6).filled())
                    .data(lengths.iter().map(|length| (*length, 1u64))),
            )
            .map_err(|error| {
                ChartRenderError::Backend(format!(
                    "name length histogram series error: {:?}",
                    error
                ))
            })?
            .label(growth.clone())
            .legend(move |(x, y)| Rectangle::new([(x, y - 4), (x + 12, y + 4)], color.filled()));
    }

    if !groups.is_empty() {
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(|error| {
                ChartRenderError::Backend(format!(
                    "name length histogram legend error: {:?}",
                    error
                ))
            })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::plant_db::NameLengthRecord;

    use super::{group_lengths, peak_frequency};

    fn record(growth: &str, name_length: u32) -> NameLengthRecord {
        NameLengthRecord {
            growth: growth.to_string(),
            name_length,
        }
    }

    #[test]
    fn groups_preserve_per_category_lengths() {
        let groups = group_lengths(&[
            record("fast", 5),
            record("slow", 7),
            record("fast", 5),
            record("fast", 9),
        ]);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "fast");
        assert_eq!(groups[0].1, vec![5, 5, 9]);
        assert_eq!(groups[1].1, vec![7]);
    }

    #[test]
    fn peak_frequency_finds_tallest_bucket_across_groups() {
        let groups = group_lengths(&[
            record("fast", 5),
            record("fast", 5),
            record("fast", 5),
            record("slow", 7),
            record("slow", 7),
        ]);

        assert_eq!(peak_frequency(&groups), 3);
        assert_eq!(peak_frequency(&[]), 0);
    }
}
