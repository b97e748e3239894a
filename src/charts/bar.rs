use plotters::coord::Shift;
use plotters::prelude::*;

use crate::plant_db::{FastGrowthCount, SunlightCount};

use super::error::ChartRenderError;
use super::style::{segment_label, ChartStyle};

pub(super) fn draw_sunlight_bar<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    counts: &[SunlightCount],
) -> Result<(), ChartRenderError> {
    let labels = counts
        .iter()
        .map(|entry| entry.sunlight.clone())
        .collect::<Vec<_>>();
    let max_count = counts
        .iter()
        .map(|entry| entry.num_plants)
        .max()
        .unwrap_or(0)
        .max(1);

    let mut chart = ChartBuilder::on(area)
        .margin(ChartStyle::MARGIN)
        .caption(
            "Distribution of Plants by Sunlight Requirements",
            ChartStyle::caption_font(),
        )
        .x_label_area_size(ChartStyle::X_LABEL_AREA_SIZE)
        .y_label_area_size(ChartStyle::Y_LABEL_AREA_SIZE)
        .build_cartesian_2d(
            (0i32..labels.len().max(1) as i32).into_segmented(),
            0u64..max_count + 1,
        )
        .map_err(|error| {
            ChartRenderError::Backend(format!("sunlight bar build error: {:?}", error))
        })?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_label_formatter(&|segment| segment_label(&labels, segment))
        .x_desc("Sunlight Type")
        .y_desc("Number of Plants")
        .draw()
        .map_err(|error| {
            ChartRenderError::Backend(format!("sunlight bar mesh error: {:?}", error))
        })?;

    chart
        .draw_series(counts.iter().enumerate().map(|(index, entry)| {
            let shade = ChartStyle::intensity(entry.num_plants, max_count);
            Rectangle::new(
                [
                    (SegmentValue::Exact(index as i32), 0),
                    (SegmentValue::Exact(index as i32 + 1), entry.num_plants),
                ],
                ChartStyle::SUNLIGHT_BAR.mix(shade).filled(),
            )
        }))
        .map_err(|error| {
            ChartRenderError::Backend(format!("sunlight bar series error: {:?}", error))
        })?;

    Ok(())
}

pub(super) fn draw_fast_growth_bar<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    counts: &[FastGrowthCount],
) -> Result<(), ChartRenderError> {
    let labels = counts
        .iter()
        .map(|entry| entry.sunlight.clone())
        .collect::<Vec<_>>();
    let max_count = counts
        .iter()
        .map(|entry| entry.fast_growing_count)
        .max()
        .unwrap_or(0)
        .max(1);

    let mut chart = ChartBuilder::on(area)
        .margin(ChartStyle::MARGIN)
        .caption(
            "Fast Growing Plants by Sunlight Type",
            ChartStyle::caption_font(),
        )
        .x_label_area_size(ChartStyle::X_LABEL_AREA_SIZE)
        .y_label_area_size(ChartStyle::Y_LABEL_AREA_SIZE)
        .build_cartesian_2d(
            0u64..max_count + 1,
            (0i32..labels.len().max(1) as i32).into_segmented(),
        )
        .map_err(|error| {
            ChartRenderError::Backend(format!("fast growth bar build error: {:?}", error))
        })?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_label_formatter(&|segment| segment_label(&labels, segment))
        .x_desc("Number of Fast Growing Plants")
        .y_desc("Sunlight Type")
        .draw()
        .map_err(|error| {
            ChartRenderError::Backend(format!("fast growth bar mesh error: {:?}", error))
        })?;

    chart
        .draw_series(counts.iter().enumerate().map(|(index, entry)| {
            let shade = ChartStyle::intensity(entry.fast_growing_count, max_count);
            Rectangle::new(
                [
                    (0, SegmentValue::Exact(index as i32)),
                    (
                        entry.fast_growing_count,
                        SegmentValue::Exact(index as i32 + 1),
                    ),
                ],
                ChartStyle::FAST_GROWTH_BAR.mix(shade).filled(),
            )
        }))
        .map_err(|error| {
            ChartRenderError::Backend(format!("fast growth bar series error: {:?}", error))
        })?;

    Ok(())
}
