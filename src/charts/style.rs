use plotters::prelude::*;

pub(super) struct ChartStyle;

impl ChartStyle {
    pub(super) const MARGIN: i32 = 16;
    pub(super) const CAPTION_FONT_FAMILY: &'static str = "sans-serif";
    pub(super) const CAPTION_FONT_SIZE: i32 = 28;
    pub(super) const LABEL_FONT_SIZE: i32 = 18;
    pub(super) const PERCENT_FONT_SIZE: i32 = 14;
    pub(super) const X_LABEL_AREA_SIZE: u32 = 48;
    pub(super) const Y_LABEL_AREA_SIZE: u32 = 64;
    pub(super) const BOX_WIDTH: u32 = 36;
    pub(super) const BACKGROUND: RGBColor = WHITE;
    pub(super) const SUNLIGHT_BAR: RGBColor = RGBColor(69, 117, 180);
    pub(super) const FAST_GROWTH_BAR: RGBColor = RGBColor(49, 163, 84);
    pub(super) const HEATMAP_CELL: RGBColor = RGBColor(33, 102, 172);

    const SERIES_PALETTE: [RGBColor; 8] = [
        RGBColor(141, 211, 199),
        RGBColor(251, 128, 114),
        RGBColor(128, 177, 211),
        RGBColor(253, 180, 98),
        RGBColor(179, 222, 105),
        RGBColor(188, 128, 189),
        RGBColor(252, 205, 229),
        RGBColor(217, 217, 217),
    ];

    pub(super) fn caption_font() -> (&'static str, i32) {
        (Self::CAPTION_FONT_FAMILY, Self::CAPTION_FONT_SIZE)
    }

    // Fill opacity for a count-scaled bar or cell; zero counts stay blank.
    pub(super) fn intensity(count: u64, max_count: u64) -> f64 {
        if max_count == 0 || count == 0 {
            return 0.0;
        }
        0.35 + 0.65 * (count as f64 / max_count as f64)
    }

    pub(super) fn series_color(index: usize) -> RGBColor {
        Self::SERIES_PALETTE[index % Self::SERIES_PALETTE.len()]
    }
}

pub(super) fn segment_label(labels: &[String], segment: &SegmentValue<i32>) -> String {
    let index = match segment {
        SegmentValue::Exact(value) | SegmentValue::CenterOf(value) => *value,
        SegmentValue::Last => return String::new(),
    };

    usize::try_from(index)
        .ok()
        .and_then(|index| labels.get(index))
        .cloned()
        .unwrap_or_default()
}
