use plotters::coord::Shift;
use plotters::prelude::*;

use crate::plant_db::PlantAggregates;

use super::bar::{draw_fast_growth_bar, draw_sunlight_bar};
use super::error::ChartRenderError;
use super::histogram::draw_name_length_histogram;
use super::pie::draw_growth_pie;

pub(super) fn draw_summary_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    aggregates: &PlantAggregates,
) -> Result<(), ChartRenderError> {
    let panels = area.split_evenly((2, 2));

    draw_sunlight_bar(&panels[0], &aggregates.sunlight_counts)?;
    draw_growth_pie(&panels[1], &aggregates.growth_counts)?;
    draw_fast_growth_bar(&panels[2], &aggregates.fast_growth_counts)?;
    draw_name_length_histogram(&panels[3], &aggregates.name_lengths)?;

    Ok(())
}
