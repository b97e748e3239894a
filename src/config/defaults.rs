use super::schema::{ChartsConfig, DatabaseConfig};

pub(super) fn default_database_path() -> String {
    "../data/plants.db".to_string()
}

pub(super) fn default_output_dir() -> String {
    "charts".to_string()
}

pub(super) fn default_chart_width() -> u32 {
    1200
}

pub(super) fn default_chart_height() -> u32 {
    900
}

pub(super) fn default_panel_width() -> u32 {
    1500
}

pub(super) fn default_panel_height() -> u32 {
    1200
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
        }
    }
}

impl Default for ChartsConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            width: default_chart_width(),
            height: default_chart_height(),
            panel_width: default_panel_width(),
            panel_height: default_panel_height(),
        }
    }
}
