use std::io::Cursor;

use image::{DynamicImage, ImageFormat, RgbImage};
use plotters::coord::Shift;
use plotters::prelude::*;

use super::error::ChartRenderError;
use super::style::ChartStyle;

pub(super) fn render_chart_png<F>(
    width: u32,
    height: u32,
    draw: F,
) -> Result<Vec<u8>, ChartRenderError>
where
    F: FnOnce(&DrawingArea<BitMapBackend<'_>, Shift>) -> Result<(), ChartRenderError>,
{
    let mut rgb_buffer = vec![255u8; width as usize * height as usize * 3];

    {
        let drawing_area =
            BitMapBackend::with_buffer(&mut rgb_buffer, (width, height)).into_drawing_area();
        drawing_area.fill(&ChartStyle::BACKGROUND).map_err(|error| {
            ChartRenderError::Backend(format!("background fill error: {:?}", error))
        })?;

        draw(&drawing_area)?;

        drawing_area
            .present()
            .map_err(|error| ChartRenderError::Backend(format!("present error: {:?}", error)))?;
    }

    let rgb_image = RgbImage::from_raw(width, height, rgb_buffer).ok_or_else(|| {
        ChartRenderError::PngEncoding("image buffer conversion failed".to_string())
    })?;
    let mut output = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(rgb_image)
        .write_to(&mut output, ImageFormat::Png)
        .map_err(|error| ChartRenderError::PngEncoding(error.to_string()))?;

    Ok(output.into_inner())
}
