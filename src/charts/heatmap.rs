use std::collections::BTreeSet;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::plant_db::SunlightGrowthCount;

use super::error::ChartRenderError;
use super::style::{segment_label, ChartStyle};

pub(super) struct PivotMatrix {
    pub(super) sunlight_labels: Vec<String>,
    pub(super) growth_labels: Vec<String>,
    // rows follow sunlight_labels, columns follow growth_labels; every
    // unobserved combination holds an explicit zero
    pub(super) cells: Vec<Vec<u64>>,
}

impl PivotMatrix {
    pub(super) fn max_count(&self) -> u64 {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }
}

pub(super) fn build_pivot(pairs: &[SunlightGrowthCount]) -> PivotMatrix {
    let sunlight_labels = pairs
        .iter()
        .map(|pair| pair.sunlight.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect::<Vec<_>>();
    let growth_labels = pairs
        .iter()
        .map(|pair| pair.growth.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect::<Vec<_>>();

    let mut cells = vec![vec![0u64; growth_labels.len()]; sunlight_labels.len()];
    for pair in pairs {
        let row = sunlight_labels
            .iter()
            .position(|label| label == &pair.sunlight);
        let column = growth_labels.iter().position(|label| label == &pair.growth);
        if let (Some(row), Some(column)) = (row, column) {
            cells[row][column] += pair.count;
        }
    }

    PivotMatrix {
        sunlight_labels,
        growth_labels,
        cells,
    }
}

pub(super) fn draw_sunlight_growth_heatmap<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    pairs: &[SunlightGrowthCount],
) -> Result<(), ChartRenderError> {
    let pivot = build_pivot(pairs);
    let max_count = pivot.max_count().max(1);
    let columns = pivot.growth_labels.len().max(1) as i32;
    let rows = pivot.sunlight_labels.len().max(1) as i32;

    let mut chart = ChartBuilder::on(area)
        .margin(ChartStyle::MARGIN)
        .caption(
            "Plant Count by Sunlight Type and Growth Rate",
            ChartStyle::caption_font(),
        )
        .x_label_area_size(ChartStyle::X_LABEL_AREA_SIZE)
        .y_label_area_size(ChartStyle::Y_LABEL_AREA_SIZE)
        .build_cartesian_2d(
            (0i32..columns).into_segmented(),
            (0i32..rows).into_segmented(),
        )
        .map_err(|error| ChartRenderError::Backend(format!("heatmap build error: {:?}", error)))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_label_formatter(&|segment| segment_label(&pivot.growth_labels, segment))
        .y_label_formatter(&|segment| segment_label(&pivot.sunlight_labels, segment))
        .x_desc("Growth Rate")
        .y_desc("Sunlight Type")
        .draw()
        .map_err(|error| ChartRenderError::Backend(format!("heatmap mesh error: {:?}", error)))?;

    chart
        .draw_series(pivot.cells.iter().enumerate().flat_map(|(row, row_cells)| {
            row_cells.iter().enumerate().map(move |(column, &count)| {
                let fraction = count as f64 / max_count as f64;
                Rectangle::new(
                    [
                        (
                            SegmentValue::Exact(column as i32),
                            SegmentValue::Exact(row as i32),
                        ),
                        (
                            SegmentValue::Exact(column as i32 + 1),
                            SegmentValue::Exact(row as i32 + 1),
                        ),
                    ],
                    ChartStyle::HEATMAP_CELL.mix(fraction).filled(),
                )
            })
        }))
        .map_err(|error| {
            ChartRenderError::Backend(format!("heatmap series error: {:?}", error))
        })?;

    Ok(())
}
