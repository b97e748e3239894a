mod bar;
mod boxplot;
mod error;
mod heatmap;
mod histogram;
mod panel;
mod pie;
mod png;
mod style;

pub use error::ChartRenderError;

use std::fs;
use std::path::{Path, PathBuf};

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::config::ChartsConfig;
use crate::plant_db::PlantAggregates;

pub fn render_all(
    charts: &ChartsConfig,
    aggregates: &PlantAggregates,
) -> Result<Vec<PathBuf>, ChartRenderError> {
    let output_dir = Path::new(&charts.output_dir);
    ensure_output_dir(output_dir)?;

    let mut written = Vec::with_capacity(6);

    render_and_write(
        output_dir,
        "sunlight_distribution.png",
        charts.width,
        charts.height,
        aggregates.sunlight_counts.is_empty(),
        |area| bar::draw_sunlight_bar(area, &aggregates.sunlight_counts),
        &mut written,
    )?;
    render_and_write(
        output_dir,
        "growth_rate_distribution.png",
        charts.width,
        charts.height,
        aggregates.growth_counts.is_empty(),
        |area| pie::draw_growth_pie(area, &aggregates.growth_counts),
        &mut written,
    )?;
    render_and_write(
        output_dir,
        "fast_growers_by_sunlight.png",
        charts.width,
        charts.height,
        aggregates.fast_growth_counts.is_empty(),
        |area| bar::draw_fast_growth_bar(area, &aggregates.fast_growth_counts),
        &mut written,
    )?;
    render_and_write(
        output_dir,
        "sunlight_growth_heatmap.png",
        charts.width,
        charts.height,
        aggregates.sunlight_growth_counts.is_empty(),
        |area| heatmap::draw_sunlight_growth_heatmap(area, &aggregates.sunlight_growth_counts),
        &mut written,
    )?;
    render_and_write(
        output_dir,
        "name_length_boxplot.png",
        charts.width,
        charts.height,
        aggregates.name_lengths.is_empty(),
        |area| boxplot::draw_name_length_boxplot(area, &aggregates.name_lengths),
        &mut written,
    )?;
    render_and_write(
        output_dir,
        "summary_panel.png",
        charts.panel_width,
        charts.panel_height,
        aggregates.total_plants() == 0,
        |area| panel::draw_summary_panel(area, aggregates),
        &mut written,
    )?;

    Ok(written)
}

fn render_and_write<F>(
    output_dir: &Path,
    file_name: &str,
    width: u32,
    height: u32,
    skip: bool,
    draw: F,
    written: &mut Vec<PathBuf>,
) -> Result<(), ChartRenderError>
where
    F: FnOnce(&DrawingArea<BitMapBackend<'_>, Shift>) -> Result<(), ChartRenderError>,
{
    if skip {
        log::warn!("chart_skipped chart={} reason=no_rows", file_name);
        return Ok(());
    }

    let bytes = png::render_chart_png(width, height, draw)?;
    written.push(write_chart(output_dir, file_name, &bytes)?);
    Ok(())
}

fn write_chart(
    output_dir: &Path,
    file_name: &str,
    bytes: &[u8],
) -> Result<PathBuf, ChartRenderError> {
    let path = output_dir.join(file_name);
    fs::write(&path, bytes).map_err(|source| ChartRenderError::Write {
        path: path.display().to_string(),
        source,
    })?;
    log::info!("chart_written path={} bytes={}", path.display(), bytes.len());
    Ok(path)
}

fn ensure_output_dir(output_dir: &Path) -> Result<(), ChartRenderError> {
    fs::create_dir_all(output_dir).map_err(|source| ChartRenderError::Write {
        path: output_dir.display().to_string(),
        source,
    })
}
