use plotters::coord::Shift;
use plotters::prelude::*;

use crate::plant_db::GrowthCount;

use super::error::ChartRenderError;
use super::style::ChartStyle;

pub(super) fn draw_growth_pie<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    counts: &[GrowthCount],
) -> Result<(), ChartRenderError> {
    let titled = area
        .titled("Plant Growth Rate Distribution", ChartStyle::caption_font())
        .map_err(|error| ChartRenderError::Backend(format!("pie title error: {:?}", error)))?;

    let total: u64 = counts.iter().map(|entry| entry.count).sum();
    if total == 0 {
        return Ok(());
    }

    let sizes = counts
        .iter()
        .map(|entry| entry.count as f64)
        .collect::<Vec<_>>();
    let labels = counts
        .iter()
        .map(|entry| entry.growth.clone())
        .collect::<Vec<_>>();
    let colors = (0..counts.len())
        .map(ChartStyle::series_color)
        .collect::<Vec<_>>();

    let (width, height) = titled.dim_in_pixel();
    let center = (width as i32 / 2, height as i32 / 2);
    let radius = f64::from(width.min(height)) * 0.35;

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.start_angle(-90.0);
    pie.label_style(
        (ChartStyle::CAPTION_FONT_FAMILY, ChartStyle::LABEL_FONT_SIZE)
            .into_font()
            .color(&BLACK),
    );
    pie.percentages(
        (
            ChartStyle::CAPTION_FONT_FAMILY,
            ChartStyle::PERCENT_FONT_SIZE,
        )
            .into_font()
            .color(&BLACK),
    );

    titled
        .draw(&pie)
        .map_err(|error| ChartRenderError::Backend(format!("pie draw error: {:?}", error)))?;

    Ok(())
}
