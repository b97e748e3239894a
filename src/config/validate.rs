use thiserror::Error;

use super::schema::Config;

const MIN_CHART_DIMENSION: u32 = 320;
const MAX_CHART_DIMENSION: u32 = 8000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
    #[error("invalid config: {0}")]
    Validation(String),
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "database.path must not be empty".to_string(),
            ));
        }
        if self.charts.output_dir.trim().is_empty() {
            return Err(ConfigError::Validation(
                "charts.output_dir must not be empty".to_string(),
            ));
        }
        validate_dimension("charts.width", self.charts.width)?;
        validate_dimension("charts.height", self.charts.height)?;
        validate_dimension("charts.panel_width", self.charts.panel_width)?;
        validate_dimension("charts.panel_height", self.charts.panel_height)?;
        Ok(())
    }
}

fn validate_dimension(field: &str, value: u32) -> Result<(), ConfigError> {
    if !(MIN_CHART_DIMENSION..=MAX_CHART_DIMENSION).contains(&value) {
        return Err(ConfigError::Validation(format!(
            "{} must be between {} and {} pixels",
            field, MIN_CHART_DIMENSION, MAX_CHART_DIMENSION
        )));
    }
    Ok(())
}
