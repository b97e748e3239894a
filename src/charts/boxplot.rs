use std::collections::BTreeMap;

use plotters::coord::Shift;
use plotters::data::Quartiles;
use plotters::prelude::*;

use crate::plant_db::NameLengthRecord;

use super::error::ChartRenderError;
use super::style::{segment_label, ChartStyle};

// One quartile set per growth category; Quartiles panics on an empty
// slice, so only categories that appear in the records are produced.
pub(super) fn group_quartiles(records: &[NameLengthRecord]) -> Vec<(String, Quartiles)> {
    let mut grouped: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for record in records {
        grouped
            .entry(record.growth.as_str())
            .or_default()
            .push(f64::from(record.name_length));
    }

    grouped
        .into_iter()
        .map(|(growth, lengths)| (growth.to_string(), Quartiles::new(&lengths)))
        .collect()
}

pub(super) fn draw_name_length_boxplot<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    records: &[NameLengthRecord],
) -> Result<(), ChartRenderError> {
    let groups = group_quartiles(records);
    let labels = groups
        .iter()
        .map(|(growth, _)| growth.clone())
        .collect::<Vec<_>>();
    let upper = groups
        .iter()
        .map(|(_, quartiles)| quartiles.values()[4])
        .fold(0f32, f32::max);

    let mut chart = ChartBuilder::on(area)
        .margin(ChartStyle::MARGIN)
        .caption(
            "Distribution of Plant Name Lengths by Growth Rate",
            ChartStyle::caption_font(),
        )
        .x_label_area_size(ChartStyle::X_LABEL_AREA_SIZE)
        .y_label_area_size(ChartStyle::Y_LABEL_AREA_SIZE)
        .build_cartesian_2d(
            (0i32..labels.len().max(1) as i32).into_segmented(),
            0f32..(upper * 1.1).max(1.0),
        )
        .map_err(|error| ChartRenderError::Backend(format!("boxplot build error: {:?}", error)))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_label_formatter(&|segment| segment_label(&labels, segment))
        .x_desc("Growth Rate")
        .y_desc("Name Length (characters)")
        .draw()
        .map_err(|error| ChartRenderError::Backend(format!("boxplot mesh error: {:?}", error)))?;

    chart
        .draw_series(groups.iter().enumerate().map(|(index, (_, quartiles))| {
            Boxplot::new_vertical(SegmentValue::CenterOf(index as i32), quartiles)
                .width(ChartStyle::BOX_WIDTH)
                .style(ChartStyle::series_color(index))
        }))
        .map_err(|error| ChartRenderError::Backend(format!("boxplot series error: {:?}", error)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::plant_db::NameLengthRecord;

    use super::group_quartiles;

    fn record(growth: &str, name_length: u32) -> NameLengthRecord {
        NameLengthRecord {
            growth: growth.to_string(),
            name_length,
        }
    }

    #[test]
    fn groups_lengths_by_growth_category() {
        let groups = group_quartiles(&[
            record("fast", 4),
            record("fast", 6),
            record("fast", 8),
            record("slow", 10),
        ]);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "fast");
        assert!((groups[0].1.values()[2] - 6.0).abs() < f32::EPSILON);
        assert_eq!(groups[1].0, "slow");
    }

    #[test]
    fn empty_records_yield_no_groups() {
        assert!(group_quartiles(&[]).is_empty());
    }
}
